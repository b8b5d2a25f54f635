use crate::cursor::{Cursor, Sentinel, WeaklyIncrementable, Writable};
use crate::sequence::{SafeCursor, Sequence, safe_cursor};

/// Assign successive results of `generator` to `[first, last)`.
pub fn generate<O, S, G, T>(mut first: O, last: S, mut generator: G) -> O
where
    O: Cursor + Writable<T>,
    S: Sentinel<O>,
    G: FnMut() -> T,
{
    while !last.is_end(&first) {
        first.write(generator());
        first.advance();
    }
    first
}

pub fn generate_in<R, G, T>(seq: R, generator: G) -> SafeCursor<R>
where
    R: Sequence<Cursor: Writable<T>>,
    G: FnMut() -> T,
{
    safe_cursor::<R>(generate(seq.start(), seq.end(), generator))
}

/// Assign `n` results of `generator` starting at `first`; nothing when
/// `n <= 0`.
pub fn generate_n<O, G, T>(mut first: O, n: isize, mut generator: G) -> O
where
    O: WeaklyIncrementable + Writable<T>,
    G: FnMut() -> T,
{
    for _ in 0..n.max(0) {
        first.write(generator());
        first.advance();
    }
    first
}
