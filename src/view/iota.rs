//! Increasing runs of integers.

use crate::cursor::{
    BidirectionalCursor, ForwardCursor, RandomAccessCursor, Readable, Unreachable,
    WeaklyIncrementable,
};
use crate::primitives::Present;
use crate::sequence::{Sequence, SizedSequence};

/// A value that can be moved by a signed number of steps.
pub trait Step: Copy + PartialOrd {
    /// `self` moved `n` steps; negative `n` moves down.
    fn forward(self, n: isize) -> Self;

    /// Steps from `start` up to `end`.
    ///
    /// The span must fit in `isize`; a wider `u64`/`usize` span is a
    /// precondition violation, caught by a debug assertion.
    fn steps_between(start: Self, end: Self) -> isize;
}

macro_rules! impl_step {
    ($($t:ty),* $(,)?) => {
        $(
            impl Step for $t {
                #[inline]
                fn forward(self, n: isize) -> Self {
                    (self as i128 + n as i128) as $t
                }

                #[inline]
                fn steps_between(start: Self, end: Self) -> isize {
                    let span = end as i128 - start as i128;
                    debug_assert!(
                        isize::try_from(span).is_ok(),
                        "iota span does not fit in isize"
                    );
                    span as isize
                }
            }
        )*
    };
}

impl_step!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Cursor of the iota sequences: the current value itself.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct IotaCursor<T> {
    value: T,
}

impl<T: Step> WeaklyIncrementable for IotaCursor<T> {
    #[inline]
    fn advance(&mut self) {
        self.value = self.value.forward(1);
    }
}

impl<T: Step> Readable for IotaCursor<T> {
    type Item = T;

    #[inline]
    fn read(&self) -> T {
        self.value
    }
}

impl<T: Step> ForwardCursor for IotaCursor<T> {}

impl<T: Step> BidirectionalCursor for IotaCursor<T> {
    #[inline]
    fn retreat(&mut self) {
        self.value = self.value.forward(-1);
    }

    #[inline]
    fn random_distance(&self, to: &Self) -> Option<isize> {
        Some(self.distance_to(to))
    }
}

impl<T: Step> RandomAccessCursor for IotaCursor<T> {
    #[inline]
    fn offset(&mut self, n: isize) {
        self.value = self.value.forward(n);
    }

    #[inline]
    fn distance_to(&self, to: &Self) -> isize {
        T::steps_between(self.value, to.value)
    }
}

/// `start, start + 1, ...` without end.
#[derive(Debug, Clone, Copy)]
pub struct Iota<T> {
    start: T,
}

#[inline]
pub fn iota<T: Step>(start: T) -> Iota<T> {
    Iota { start }
}

impl<T: Step> Sequence for Iota<T> {
    type Cursor = IotaCursor<T>;
    type Sentinel = Unreachable;
    type Borrowed = Present;

    #[inline]
    fn start(&self) -> IotaCursor<T> {
        IotaCursor { value: self.start }
    }

    #[inline]
    fn end(&self) -> Unreachable {
        Unreachable
    }
}

/// `start, start + 1, ..., end - 1`.
#[derive(Debug, Clone, Copy)]
pub struct IotaBounded<T> {
    start: T,
    end: T,
}

/// The half-open run `[start, end)`; empty when `end <= start`.
#[inline]
pub fn iota_bounded<T: Step>(start: T, end: T) -> IotaBounded<T> {
    let end = if end < start { start } else { end };
    IotaBounded { start, end }
}

impl<T: Step> Sequence for IotaBounded<T> {
    type Cursor = IotaCursor<T>;
    type Sentinel = IotaCursor<T>;
    type Borrowed = Present;

    #[inline]
    fn start(&self) -> IotaCursor<T> {
        IotaCursor { value: self.start }
    }

    #[inline]
    fn end(&self) -> IotaCursor<T> {
        IotaCursor { value: self.end }
    }
}

impl<T: Step> SizedSequence for IotaBounded<T> {
    #[inline]
    fn size(&self) -> usize {
        T::steps_between(self.start, self.end) as usize
    }
}
