//! A cursor paired with the number of elements left to traverse.

use core::cmp::Ordering;

use super::{
    BidirectionalCursor, ContiguousCursor, Cursor, DefaultSentinel, ForwardCursor,
    IndirectlySwappable, RandomAccessCursor, Readable, Sentinel, SizedSentinel, WeaklyIncrementable,
    Writable,
};

/// Wraps a cursor and counts down as it advances.
///
/// The traversal ends at [`DefaultSentinel`] once the count reaches zero;
/// the wrapped cursor is never compared against an end. Two counted cursors
/// over the same sequence are equal when they have the same count left.
///
/// Inherits the strength of the wrapped cursor, including contiguity.
/// A counted bidirectional cursor always knows its distance to another.
#[derive(Debug, Clone, Copy)]
pub struct Counted<I> {
    inner: I,
    remaining: isize,
}

impl<I> Counted<I> {
    #[inline]
    pub const fn new(inner: I, n: isize) -> Self {
        Self {
            inner,
            remaining: n,
        }
    }

    /// The wrapped cursor.
    #[inline]
    pub const fn base(&self) -> &I {
        &self.inner
    }

    #[inline]
    pub fn into_base(self) -> I {
        self.inner
    }

    /// Elements left before the end.
    #[inline]
    pub const fn remaining(&self) -> isize {
        self.remaining
    }
}

impl<I> PartialEq for Counted<I> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.remaining == other.remaining
    }
}

impl<I> PartialOrd for Counted<I> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.remaining.partial_cmp(&self.remaining)
    }
}

impl<I: WeaklyIncrementable> WeaklyIncrementable for Counted<I> {
    #[inline]
    fn advance(&mut self) {
        debug_assert!(self.remaining > 0, "advanced a counted cursor past its count");
        self.inner.advance();
        self.remaining -= 1;
    }
}

impl<I: Readable> Readable for Counted<I> {
    type Item = I::Item;

    #[inline]
    fn read(&self) -> I::Item {
        self.inner.read()
    }
}

impl<I: Writable<T>, T> Writable<T> for Counted<I> {
    #[inline]
    fn write(&mut self, value: T) {
        self.inner.write(value);
    }
}

impl<I: IndirectlySwappable> IndirectlySwappable for Counted<I> {
    #[inline]
    fn swap_with(&mut self, other: &mut Self) {
        self.inner.swap_with(&mut other.inner);
    }
}

impl<I: ForwardCursor> ForwardCursor for Counted<I> {}

impl<I: BidirectionalCursor> BidirectionalCursor for Counted<I> {
    #[inline]
    fn retreat(&mut self) {
        self.inner.retreat();
        self.remaining += 1;
    }

    #[inline]
    fn random_distance(&self, to: &Self) -> Option<isize> {
        Some(self.remaining - to.remaining)
    }
}

impl<I: RandomAccessCursor> RandomAccessCursor for Counted<I> {
    #[inline]
    fn offset(&mut self, n: isize) {
        self.inner.offset(n);
        self.remaining -= n;
    }

    #[inline]
    fn distance_to(&self, to: &Self) -> isize {
        self.remaining - to.remaining
    }
}

impl<I: ContiguousCursor> ContiguousCursor for Counted<I> {
    type Element = I::Element;

    #[inline]
    fn address(&self) -> *const I::Element {
        self.inner.address()
    }
}

impl<I: WeaklyIncrementable> Sentinel<Counted<I>> for DefaultSentinel
where
    Counted<I>: Cursor,
{
    #[inline]
    fn is_end(&self, cursor: &Counted<I>) -> bool {
        cursor.remaining == 0
    }
}

impl<I: WeaklyIncrementable> SizedSentinel<Counted<I>> for DefaultSentinel
where
    Counted<I>: Cursor,
{
    #[inline]
    fn distance_from(&self, cursor: &Counted<I>) -> isize {
        cursor.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::SliceCursor;

    #[test]
    fn test_counts_down_to_default_sentinel() {
        let data = [1, 2, 3, 4, 5];
        let mut c = Counted::new(SliceCursor::new(&data, 1), 2);
        assert!(!DefaultSentinel.is_end(&c));
        c.advance();
        c.advance();
        assert!(DefaultSentinel.is_end(&c));
        assert_eq!(c.base().position(), 3);
    }

    #[test]
    fn test_random_access_follows_count() {
        let data = [0u8; 10];
        let first = Counted::new(SliceCursor::new(&data, 0), 10);
        let mut mid = first;
        mid.offset(4);
        assert_eq!(first.distance_to(&mid), 4);
        assert_eq!(DefaultSentinel.distance_from(&mid), 6);
        assert!(first < mid);
        assert_eq!(mid.address(), &data[4] as *const u8);
    }
}
