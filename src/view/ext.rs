use crate::cursor::{BidirectionalCursor, InputCursor, Readable};
use crate::sequence::Sequence;

use super::{
    Filter, Iter, Join, Reverse, Take, Transform, filter, iter, join, reverse, take, transform,
};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Adaptor methods for every sequence.
///
/// ```
/// use tola_ranges::prelude::*;
///
/// let data = [1, 2, 3, 4, 5, 6];
/// let evens: Vec<i32> = (&data[..])
///     .filter(|x: &i32| x % 2 == 0)
///     .transform(|x: &i32| x * 10)
///     .reversed()
///     .to_vec();
/// assert_eq!(evens, [60, 40, 20]);
/// ```
pub trait SequenceExt: Sequence + Sized {
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self::Cursor: Readable,
        P: FnMut(<Self::Cursor as Readable>::Item) -> bool + Clone,
    {
        filter(self, pred)
    }

    fn transform<F, U>(self, fun: F) -> Transform<Self, F>
    where
        Self::Cursor: Readable,
        F: Fn(<Self::Cursor as Readable>::Item) -> U + Clone,
    {
        transform(self, fun)
    }

    fn take(self, count: isize) -> Take<Self> {
        take(self, count)
    }

    fn reversed(self) -> Reverse<Self>
    where
        Self::Cursor: BidirectionalCursor,
    {
        reverse(self)
    }

    fn joined(self) -> Join<Self>
    where
        Self::Cursor: Readable<Item: Sequence>,
    {
        join(self)
    }

    /// Walk the sequence with a standard iterator.
    fn traverse(&self) -> Iter<Self::Cursor, Self::Sentinel>
    where
        Self::Cursor: InputCursor,
    {
        iter(self)
    }

    /// Collect the elements into a `Vec`.
    #[cfg(feature = "alloc")]
    fn to_vec(&self) -> Vec<<Self::Cursor as Readable>::Item>
    where
        Self::Cursor: InputCursor,
    {
        iter(self).collect()
    }
}

impl<R: Sequence> SequenceExt for R {}
