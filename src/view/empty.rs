use core::marker::PhantomData;

use crate::cursor::SliceCursor;
use crate::primitives::Present;
use crate::sequence::{Sequence, SizedSequence};

/// A sequence with no elements of type `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty<T>(PhantomData<fn() -> T>);

#[inline]
pub const fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

#[inline]
fn nothing<T>() -> &'static [T] {
    &[]
}

impl<T: 'static> Sequence for Empty<T> {
    type Cursor = SliceCursor<'static, T>;
    type Sentinel = SliceCursor<'static, T>;
    type Borrowed = Present;

    #[inline]
    fn start(&self) -> Self::Cursor {
        SliceCursor::new(nothing(), 0)
    }

    #[inline]
    fn end(&self) -> Self::Sentinel {
        self.start()
    }
}

impl<T: 'static> SizedSequence for Empty<T> {
    #[inline]
    fn size(&self) -> usize {
        0
    }
}
