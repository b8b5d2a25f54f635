//! Quantifiers over a sequence.
//!
//! All three stop at the first element that decides the answer. An empty
//! sequence is vacuously `all_of` and `none_of`, and never `any_of`.

use crate::cursor::{InputCursor, Readable, Sentinel};
use crate::sequence::Sequence;

use super::find::find_first;

pub fn all_of<I, S, F, P, U>(first: I, last: S, pred: F, proj: P) -> bool
where
    I: InputCursor,
    S: Sentinel<I>,
    P: FnMut(I::Item) -> U,
    F: FnMut(U) -> bool,
{
    let stop = find_first(first, &last, pred, proj, false);
    last.is_end(&stop)
}

pub fn all_of_in<R, F, P, U>(seq: R, pred: F, proj: P) -> bool
where
    R: Sequence<Cursor: InputCursor>,
    P: FnMut(<R::Cursor as Readable>::Item) -> U,
    F: FnMut(U) -> bool,
{
    all_of(seq.start(), seq.end(), pred, proj)
}

pub fn any_of<I, S, F, P, U>(first: I, last: S, pred: F, proj: P) -> bool
where
    I: InputCursor,
    S: Sentinel<I>,
    P: FnMut(I::Item) -> U,
    F: FnMut(U) -> bool,
{
    let stop = find_first(first, &last, pred, proj, true);
    !last.is_end(&stop)
}

pub fn any_of_in<R, F, P, U>(seq: R, pred: F, proj: P) -> bool
where
    R: Sequence<Cursor: InputCursor>,
    P: FnMut(<R::Cursor as Readable>::Item) -> U,
    F: FnMut(U) -> bool,
{
    any_of(seq.start(), seq.end(), pred, proj)
}

pub fn none_of<I, S, F, P, U>(first: I, last: S, pred: F, proj: P) -> bool
where
    I: InputCursor,
    S: Sentinel<I>,
    P: FnMut(I::Item) -> U,
    F: FnMut(U) -> bool,
{
    let stop = find_first(first, &last, pred, proj, true);
    last.is_end(&stop)
}

pub fn none_of_in<R, F, P, U>(seq: R, pred: F, proj: P) -> bool
where
    R: Sequence<Cursor: InputCursor>,
    P: FnMut(<R::Cursor as Readable>::Item) -> U,
    F: FnMut(U) -> bool,
{
    none_of(seq.start(), seq.end(), pred, proj)
}
