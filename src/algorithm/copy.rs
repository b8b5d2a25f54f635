use crate::cursor::{InputCursor, Readable, Sentinel, WeaklyIncrementable, Writable};
use crate::sequence::{SafeCursor, Sequence, safe_cursor};

use super::InOut;

/// Copy `[first, last)` into `out`, element by element.
pub fn copy<I, S, O>(mut first: I, last: S, mut out: O) -> InOut<I, O>
where
    I: InputCursor,
    S: Sentinel<I>,
    O: WeaklyIncrementable + Writable<I::Item>,
{
    while !last.is_end(&first) {
        out.write(first.read());
        first.advance();
        out.advance();
    }
    InOut {
        input: first,
        output: out,
    }
}

pub fn copy_in<R, O>(seq: R, out: O) -> InOut<SafeCursor<R>, O>
where
    R: Sequence<Cursor: InputCursor>,
    O: WeaklyIncrementable + Writable<<R::Cursor as Readable>::Item>,
{
    let InOut { input, output } = copy(seq.start(), seq.end(), out);
    InOut {
        input: safe_cursor::<R>(input),
        output,
    }
}

/// Copy `n` elements starting at `first`. Does nothing when `n <= 0`.
///
/// The input only has to advance and read; it is never compared.
pub fn copy_n<I, O>(mut first: I, n: isize, mut out: O) -> InOut<I, O>
where
    I: WeaklyIncrementable + Readable,
    O: WeaklyIncrementable + Writable<I::Item>,
{
    for _ in 0..n.max(0) {
        out.write(first.read());
        first.advance();
        out.advance();
    }
    InOut {
        input: first,
        output: out,
    }
}
