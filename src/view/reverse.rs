use core::cmp::Ordering;

use crate::cursor::{
    BidirectionalCursor, ForwardCursor, IndirectlySwappable, RandomAccessCursor, Readable,
    WeaklyIncrementable, Writable, next_to,
};
use crate::sequence::{Sequence, SizedSequence};

/// The elements of a bidirectional sequence, last to first.
#[derive(Debug, Clone, Copy)]
pub struct Reverse<R> {
    base: R,
}

#[inline]
pub fn reverse<R: Sequence<Cursor: BidirectionalCursor>>(base: R) -> Reverse<R> {
    Reverse { base }
}

impl<R> Reverse<R> {
    #[inline]
    pub fn base(&self) -> &R {
        &self.base
    }
}

/// Cursor of [`Reverse`].
///
/// Holds the underlying position one past the element it refers to, so the
/// reversed end is the underlying start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReverseCursor<I> {
    base: I,
}

impl<I> ReverseCursor<I> {
    #[inline]
    pub const fn new(base: I) -> Self {
        Self { base }
    }

    #[inline]
    pub fn into_base(self) -> I {
        self.base
    }
}

impl<I: BidirectionalCursor> ReverseCursor<I> {
    #[inline]
    fn element(&self) -> I {
        let mut cursor = self.base.clone();
        cursor.retreat();
        cursor
    }
}

impl<I: PartialOrd> PartialOrd for ReverseCursor<I> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.base.partial_cmp(&self.base)
    }
}

impl<I: BidirectionalCursor> WeaklyIncrementable for ReverseCursor<I> {
    #[inline]
    fn advance(&mut self) {
        self.base.retreat();
    }
}

impl<I: BidirectionalCursor + Readable> Readable for ReverseCursor<I> {
    type Item = I::Item;

    #[inline]
    fn read(&self) -> I::Item {
        self.element().read()
    }
}

impl<I: BidirectionalCursor + Writable<T>, T> Writable<T> for ReverseCursor<I> {
    #[inline]
    fn write(&mut self, value: T) {
        self.element().write(value);
    }
}

impl<I: BidirectionalCursor + IndirectlySwappable> IndirectlySwappable for ReverseCursor<I> {
    #[inline]
    fn swap_with(&mut self, other: &mut Self) {
        self.element().swap_with(&mut other.element());
    }
}

impl<I: BidirectionalCursor> ForwardCursor for ReverseCursor<I> {}

impl<I: BidirectionalCursor> BidirectionalCursor for ReverseCursor<I> {
    #[inline]
    fn retreat(&mut self) {
        self.base.advance();
    }

    #[inline]
    fn random_distance(&self, to: &Self) -> Option<isize> {
        to.base.random_distance(&self.base)
    }
}

impl<I: RandomAccessCursor> RandomAccessCursor for ReverseCursor<I> {
    #[inline]
    fn offset(&mut self, n: isize) {
        self.base.offset(-n);
    }

    #[inline]
    fn distance_to(&self, to: &Self) -> isize {
        to.base.distance_to(&self.base)
    }
}

impl<R: Sequence<Cursor: BidirectionalCursor>> Sequence for Reverse<R> {
    type Cursor = ReverseCursor<R::Cursor>;
    type Sentinel = ReverseCursor<R::Cursor>;
    type Borrowed = R::Borrowed;

    #[inline]
    fn start(&self) -> Self::Cursor {
        ReverseCursor::new(next_to(self.base.start(), self.base.end()))
    }

    #[inline]
    fn end(&self) -> Self::Sentinel {
        ReverseCursor::new(self.base.start())
    }
}

impl<R: SizedSequence<Cursor: BidirectionalCursor>> SizedSequence for Reverse<R> {
    #[inline]
    fn size(&self) -> usize {
        self.base.size()
    }
}
