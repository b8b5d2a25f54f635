use core::borrow::Borrow;

use crate::cursor::{InputCursor, Readable, Sentinel};
use crate::invoke::indirect_test;
use crate::sequence::{SafeCursor, Sequence, safe_cursor};

/// First position whose projected element makes `pred` return `expected`.
pub(crate) fn find_first<I, S, F, P, U>(
    mut first: I,
    last: &S,
    mut pred: F,
    mut proj: P,
    expected: bool,
) -> I
where
    I: InputCursor,
    S: Sentinel<I>,
    P: FnMut(I::Item) -> U,
    F: FnMut(U) -> bool,
{
    while !last.is_end(&first) {
        if indirect_test(&mut pred, &mut proj, &first) == expected {
            break;
        }
        first.advance();
    }
    first
}

/// First position whose projected element equals `value`, or the end.
pub fn find<I, S, V, P, U>(first: I, last: S, value: &V, proj: P) -> I
where
    I: InputCursor,
    S: Sentinel<I>,
    V: PartialEq + ?Sized,
    P: FnMut(I::Item) -> U,
    U: Borrow<V>,
{
    find_first(first, &last, |u: U| <U as Borrow<V>>::borrow(&u) == value, proj, true)
}

pub fn find_in<R, V, P, U>(seq: R, value: &V, proj: P) -> SafeCursor<R>
where
    R: Sequence<Cursor: InputCursor>,
    V: PartialEq + ?Sized,
    P: FnMut(<R::Cursor as Readable>::Item) -> U,
    U: Borrow<V>,
{
    safe_cursor::<R>(find(seq.start(), seq.end(), value, proj))
}

/// First position whose projected element satisfies `pred`, or the end.
pub fn find_if<I, S, F, P, U>(first: I, last: S, pred: F, proj: P) -> I
where
    I: InputCursor,
    S: Sentinel<I>,
    P: FnMut(I::Item) -> U,
    F: FnMut(U) -> bool,
{
    find_first(first, &last, pred, proj, true)
}

pub fn find_if_in<R, F, P, U>(seq: R, pred: F, proj: P) -> SafeCursor<R>
where
    R: Sequence<Cursor: InputCursor>,
    P: FnMut(<R::Cursor as Readable>::Item) -> U,
    F: FnMut(U) -> bool,
{
    safe_cursor::<R>(find_if(seq.start(), seq.end(), pred, proj))
}

/// First position whose projected element fails `pred`, or the end.
pub fn find_if_not<I, S, F, P, U>(first: I, last: S, pred: F, proj: P) -> I
where
    I: InputCursor,
    S: Sentinel<I>,
    P: FnMut(I::Item) -> U,
    F: FnMut(U) -> bool,
{
    find_first(first, &last, pred, proj, false)
}

pub fn find_if_not_in<R, F, P, U>(seq: R, pred: F, proj: P) -> SafeCursor<R>
where
    R: Sequence<Cursor: InputCursor>,
    P: FnMut(<R::Cursor as Readable>::Item) -> U,
    F: FnMut(U) -> bool,
{
    safe_cursor::<R>(find_if_not(seq.start(), seq.end(), pred, proj))
}
