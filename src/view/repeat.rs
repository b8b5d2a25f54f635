//! Sequences that yield one value over and over.

use core::cmp::Ordering;

use crate::cursor::{
    BidirectionalCursor, ForwardCursor, RandomAccessCursor, Readable, Unreachable,
    WeaklyIncrementable,
};
use crate::primitives::Absent;
use crate::sequence::{Sequence, SizedSequence};

/// Cursor over a repeated value: the value plus a position index.
#[derive(Debug, Clone, Copy)]
pub struct RepeatCursor<T> {
    value: T,
    index: isize,
}

impl<T> RepeatCursor<T> {
    #[inline]
    pub const fn new(value: T, index: isize) -> Self {
        Self { value, index }
    }

    #[inline]
    pub const fn index(&self) -> isize {
        self.index
    }
}

impl<T> PartialEq for RepeatCursor<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> PartialOrd for RepeatCursor<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.index.partial_cmp(&other.index)
    }
}

impl<T> WeaklyIncrementable for RepeatCursor<T> {
    #[inline]
    fn advance(&mut self) {
        self.index += 1;
    }
}

impl<T: Clone> Readable for RepeatCursor<T> {
    type Item = T;

    #[inline]
    fn read(&self) -> T {
        self.value.clone()
    }
}

impl<T: Clone> ForwardCursor for RepeatCursor<T> {}

impl<T: Clone> BidirectionalCursor for RepeatCursor<T> {
    #[inline]
    fn retreat(&mut self) {
        self.index -= 1;
    }

    #[inline]
    fn random_distance(&self, to: &Self) -> Option<isize> {
        Some(self.distance_to(to))
    }
}

impl<T: Clone> RandomAccessCursor for RepeatCursor<T> {
    #[inline]
    fn offset(&mut self, n: isize) {
        self.index += n;
    }

    #[inline]
    fn distance_to(&self, to: &Self) -> isize {
        to.index - self.index
    }
}

// =============================================================================
// Repeat / RepeatN
// =============================================================================

/// `value` forever. Owns its value.
#[derive(Debug, Clone, Copy)]
pub struct Repeat<T> {
    value: T,
}

#[inline]
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

impl<T: Clone> Sequence for Repeat<T> {
    type Cursor = RepeatCursor<T>;
    type Sentinel = Unreachable;
    type Borrowed = Absent;

    #[inline]
    fn start(&self) -> RepeatCursor<T> {
        RepeatCursor::new(self.value.clone(), 0)
    }

    #[inline]
    fn end(&self) -> Unreachable {
        Unreachable
    }
}

/// `value`, `count` times.
#[derive(Debug, Clone, Copy)]
pub struct RepeatN<T> {
    value: T,
    count: isize,
}

/// `value` repeated `count` times; a negative count is empty.
#[inline]
pub fn repeat_n<T: Clone>(value: T, count: isize) -> RepeatN<T> {
    RepeatN {
        value,
        count: count.max(0),
    }
}

impl<T: Clone> Sequence for RepeatN<T> {
    type Cursor = RepeatCursor<T>;
    type Sentinel = RepeatCursor<T>;
    type Borrowed = Absent;

    #[inline]
    fn start(&self) -> RepeatCursor<T> {
        RepeatCursor::new(self.value.clone(), 0)
    }

    #[inline]
    fn end(&self) -> RepeatCursor<T> {
        RepeatCursor::new(self.value.clone(), self.count)
    }
}

impl<T: Clone> SizedSequence for RepeatN<T> {
    #[inline]
    fn size(&self) -> usize {
        self.count as usize
    }
}
