use crate::cursor::{Cursor, Sentinel, WeaklyIncrementable, Writable};
use crate::sequence::{SafeCursor, Sequence, safe_cursor};

/// Write a clone of `value` to every position in `[first, last)`.
pub fn fill<O, S, T>(mut first: O, last: S, value: &T) -> O
where
    O: Cursor + Writable<T>,
    S: Sentinel<O>,
    T: Clone,
{
    while !last.is_end(&first) {
        first.write(value.clone());
        first.advance();
    }
    first
}

pub fn fill_in<R, T>(seq: R, value: &T) -> SafeCursor<R>
where
    R: Sequence<Cursor: Writable<T>>,
    T: Clone,
{
    safe_cursor::<R>(fill(seq.start(), seq.end(), value))
}

/// Write `n` clones of `value` starting at `first`; nothing when `n <= 0`.
pub fn fill_n<O, T>(mut first: O, n: isize, value: &T) -> O
where
    O: WeaklyIncrementable + Writable<T>,
    T: Clone,
{
    for _ in 0..n.max(0) {
        first.write(value.clone());
        first.advance();
    }
    first
}
