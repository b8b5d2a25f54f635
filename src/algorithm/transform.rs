use crate::cursor::{InputCursor, Readable, Sentinel, WeaklyIncrementable, Writable};
use crate::invoke::projected_read;
use crate::sequence::{SafeCursor, Sequence, safe_cursor};

use super::InOut;

/// Write `op(proj(x))` to `out` for every element `x` of `[first, last)`.
pub fn transform<I, S, O, F, P, U, T>(
    mut first: I,
    last: S,
    mut out: O,
    mut op: F,
    mut proj: P,
) -> InOut<I, O>
where
    I: InputCursor,
    S: Sentinel<I>,
    O: WeaklyIncrementable + Writable<T>,
    P: FnMut(I::Item) -> U,
    F: FnMut(U) -> T,
{
    while !last.is_end(&first) {
        out.write(op(projected_read(&first, &mut proj)));
        first.advance();
        out.advance();
    }
    InOut {
        input: first,
        output: out,
    }
}

pub fn transform_in<R, O, F, P, U, T>(seq: R, out: O, op: F, proj: P) -> InOut<SafeCursor<R>, O>
where
    R: Sequence<Cursor: InputCursor>,
    O: WeaklyIncrementable + Writable<T>,
    P: FnMut(<R::Cursor as Readable>::Item) -> U,
    F: FnMut(U) -> T,
{
    let InOut { input, output } = transform(seq.start(), seq.end(), out, op, proj);
    InOut {
        input: safe_cursor::<R>(input),
        output,
    }
}
