use core::borrow::Borrow;

use crate::cursor::{InputCursor, Readable, Sentinel};
use crate::invoke::indirect_test;
use crate::sequence::Sequence;

/// Number of elements whose projection satisfies `pred`.
pub fn count_if<I, S, F, P, U>(mut first: I, last: S, mut pred: F, mut proj: P) -> isize
where
    I: InputCursor,
    S: Sentinel<I>,
    P: FnMut(I::Item) -> U,
    F: FnMut(U) -> bool,
{
    let mut n = 0;
    while !last.is_end(&first) {
        if indirect_test(&mut pred, &mut proj, &first) {
            n += 1;
        }
        first.advance();
    }
    n
}

pub fn count_if_in<R, F, P, U>(seq: R, pred: F, proj: P) -> isize
where
    R: Sequence<Cursor: InputCursor>,
    P: FnMut(<R::Cursor as Readable>::Item) -> U,
    F: FnMut(U) -> bool,
{
    count_if(seq.start(), seq.end(), pred, proj)
}

/// Number of elements whose projection equals `value`.
pub fn count<I, S, V, P, U>(first: I, last: S, value: &V, proj: P) -> isize
where
    I: InputCursor,
    S: Sentinel<I>,
    V: PartialEq + ?Sized,
    P: FnMut(I::Item) -> U,
    U: Borrow<V>,
{
    count_if(first, last, |u: U| <U as Borrow<V>>::borrow(&u) == value, proj)
}

pub fn count_in<R, V, P, U>(seq: R, value: &V, proj: P) -> isize
where
    R: Sequence<Cursor: InputCursor>,
    V: PartialEq + ?Sized,
    P: FnMut(<R::Cursor as Readable>::Item) -> U,
    U: Borrow<V>,
{
    count(seq.start(), seq.end(), value, proj)
}
