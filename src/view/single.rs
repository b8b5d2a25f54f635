use crate::primitives::Absent;
use crate::sequence::{Sequence, SizedSequence};

use super::repeat::RepeatCursor;

/// A sequence of exactly one owned value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Single<T> {
    value: T,
}

#[inline]
pub fn single<T: Clone>(value: T) -> Single<T> {
    Single { value }
}

impl<T> Single<T> {
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone> Sequence for Single<T> {
    type Cursor = RepeatCursor<T>;
    type Sentinel = RepeatCursor<T>;
    type Borrowed = Absent;

    #[inline]
    fn start(&self) -> RepeatCursor<T> {
        RepeatCursor::new(self.value.clone(), 0)
    }

    #[inline]
    fn end(&self) -> RepeatCursor<T> {
        RepeatCursor::new(self.value.clone(), 1)
    }
}

impl<T: Clone> SizedSequence for Single<T> {
    #[inline]
    fn size(&self) -> usize {
        1
    }
}
