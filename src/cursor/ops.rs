//! Cursor movement and distance operations.
//!
//! Everything here works for any cursor strength; the stronger capabilities
//! only make some of it cheaper (`next_to` on a common sequence, `sized_distance`
//! on a sized sentinel).

use super::{
    BidirectionalCursor, Cursor, IndirectlySwappable, Sentinel, SizedSentinel, WeaklyIncrementable,
};

/// The position after `cursor`.
#[inline]
pub fn next<I: WeaklyIncrementable>(mut cursor: I) -> I {
    cursor.advance();
    cursor
}

/// The position `n` steps after `cursor`.
#[inline]
pub fn next_n<I: WeaklyIncrementable>(mut cursor: I, n: isize) -> I {
    advance_n(&mut cursor, n);
    cursor
}

/// The cursor position corresponding to `last`.
///
/// When the sentinel is itself a cursor it is returned as is, otherwise
/// `first` is walked until it reaches `last`.
#[inline]
pub fn next_to<I: Cursor, S: Sentinel<I>>(first: I, last: S) -> I {
    match last.into_cursor() {
        Ok(end) => end,
        Err(last) => {
            let mut cursor = first;
            advance_to(&mut cursor, &last);
            cursor
        }
    }
}

/// The position before `cursor`.
#[inline]
pub fn prev<I: BidirectionalCursor>(mut cursor: I) -> I {
    cursor.retreat();
    cursor
}

/// Advance `cursor` by `n` steps. `n` must not be negative.
#[inline]
pub fn advance_n<I: WeaklyIncrementable>(cursor: &mut I, n: isize) {
    debug_assert!(n >= 0, "cannot advance by a negative count");
    for _ in 0..n {
        cursor.advance();
    }
}

/// Step `cursor` back `n` times.
#[inline]
pub fn retreat_n<I: BidirectionalCursor>(cursor: &mut I, n: isize) {
    debug_assert!(n >= 0, "cannot retreat by a negative count");
    for _ in 0..n {
        cursor.retreat();
    }
}

/// Advance `cursor` until it reaches `bound`.
#[inline]
pub fn advance_to<I: Cursor, S: Sentinel<I>>(cursor: &mut I, bound: &S) {
    while !bound.is_end(cursor) {
        cursor.advance();
    }
}

/// Advance `cursor` at most `n` steps, stopping early at `bound`.
///
/// Returns the number of steps that were not taken.
#[inline]
pub fn advance_bounded<I: Cursor, S: Sentinel<I>>(cursor: &mut I, n: isize, bound: &S) -> isize {
    let mut left = n;
    while left > 0 && !bound.is_end(cursor) {
        cursor.advance();
        left -= 1;
    }
    left
}

/// Number of steps from `first` to `last`, found by walking.
pub fn distance<I: Cursor, S: Sentinel<I>>(first: I, last: &S) -> isize {
    let mut cursor = first;
    let mut n = 0;
    while !last.is_end(&cursor) {
        cursor.advance();
        n += 1;
    }
    n
}

/// Number of steps from `first` to `last` in O(1).
#[inline]
pub fn sized_distance<I: Cursor, S: SizedSentinel<I>>(first: &I, last: &S) -> isize {
    last.distance_from(first)
}

/// Swap the elements `a` and `b` refer to.
#[inline]
pub fn iter_swap<I: IndirectlySwappable>(a: &mut I, b: &mut I) {
    a.swap_with(b);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Counted, DefaultSentinel, Readable, SliceCursor, Unreachable};

    #[test]
    fn test_next_and_prev() {
        let data = [1, 2, 3];
        let c = SliceCursor::new(&data, 0);
        assert_eq!(*next(c).read(), 2);
        assert_eq!(*next_n(c, 2).read(), 3);
        assert_eq!(*prev(next(c)).read(), 1);
    }

    #[test]
    fn test_next_to_uses_common_end() {
        let data = [1, 2, 3];
        let end = SliceCursor::new(&data, 3);
        assert!(next_to(SliceCursor::new(&data, 0), end) == end);
    }

    #[test]
    fn test_next_to_walks_to_sentinel() {
        let data = [1, 2, 3, 4];
        let c = Counted::new(SliceCursor::new(&data, 0), 3);
        let end = next_to(c, DefaultSentinel);
        assert_eq!(end.remaining(), 0);
        assert_eq!(*end.read(), 4);
    }

    #[test]
    fn test_advance_bounded_reports_shortfall() {
        let data = [1, 2, 3];
        let mut c = SliceCursor::new(&data, 0);
        let end = SliceCursor::new(&data, 3);
        assert_eq!(advance_bounded(&mut c, 5, &end), 2);
        assert!(c == end);

        let mut c = SliceCursor::new(&data, 0);
        assert_eq!(advance_bounded(&mut c, 2, &Unreachable), 0);
        assert_eq!(*c.read(), 3);
    }

    #[test]
    fn test_distance_walks_and_sized_agrees() {
        let data = [0u8; 7];
        let first = SliceCursor::new(&data, 1);
        let last = SliceCursor::new(&data, 7);
        assert_eq!(distance(first, &last), 6);
        assert_eq!(sized_distance(&first, &last), 6);
    }
}
