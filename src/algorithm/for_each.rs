use crate::cursor::{InputCursor, Readable, Sentinel};
use crate::invoke::projected_read;
use crate::sequence::{SafeCursor, Sequence, safe_cursor};

use super::InFun;

/// Call `fun` on every projected element, in order.
///
/// Returns the end position and `fun`, with any state it accumulated.
pub fn for_each<I, S, F, P, U>(mut first: I, last: S, mut fun: F, mut proj: P) -> InFun<I, F>
where
    I: InputCursor,
    S: Sentinel<I>,
    P: FnMut(I::Item) -> U,
    F: FnMut(U),
{
    while !last.is_end(&first) {
        fun(projected_read(&first, &mut proj));
        first.advance();
    }
    InFun { input: first, fun }
}

pub fn for_each_in<R, F, P, U>(seq: R, fun: F, proj: P) -> InFun<SafeCursor<R>, F>
where
    R: Sequence<Cursor: InputCursor>,
    P: FnMut(<R::Cursor as Readable>::Item) -> U,
    F: FnMut(U),
{
    let InFun { input, fun } = for_each(seq.start(), seq.end(), fun, proj);
    InFun {
        input: safe_cursor::<R>(input),
        fun,
    }
}
