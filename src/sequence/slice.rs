//! Slices, arrays and vectors as sequences.

use core::cell::Cell;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::{Sequence, SizedSequence};
use crate::cursor::{SliceCursor, SliceMutCursor};
use crate::primitives::Present;

impl<'a, T> Sequence for &'a [T] {
    type Cursor = SliceCursor<'a, T>;
    type Sentinel = SliceCursor<'a, T>;
    type Borrowed = Present;

    #[inline]
    fn start(&self) -> SliceCursor<'a, T> {
        SliceCursor::new(*self, 0)
    }

    #[inline]
    fn end(&self) -> SliceCursor<'a, T> {
        SliceCursor::new(*self, self.len())
    }
}

impl<T> SizedSequence for &[T] {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;
    type Sentinel = SliceCursor<'a, T>;
    type Borrowed = Present;

    #[inline]
    fn start(&self) -> SliceCursor<'a, T> {
        SliceCursor::new(self.as_slice(), 0)
    }

    #[inline]
    fn end(&self) -> SliceCursor<'a, T> {
        SliceCursor::new(self.as_slice(), N)
    }
}

impl<T, const N: usize> SizedSequence for &[T; N] {
    #[inline]
    fn size(&self) -> usize {
        N
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> Sequence for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;
    type Sentinel = SliceCursor<'a, T>;
    type Borrowed = Present;

    #[inline]
    fn start(&self) -> SliceCursor<'a, T> {
        SliceCursor::new(self.as_slice(), 0)
    }

    #[inline]
    fn end(&self) -> SliceCursor<'a, T> {
        SliceCursor::new(self.as_slice(), self.len())
    }
}

#[cfg(feature = "alloc")]
impl<T> SizedSequence for &Vec<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Mutable slices
// =============================================================================

/// A mutable slice as a sequence of writable, swappable positions.
///
/// Built from `&mut [T]`; holds the exclusive borrow for `'a` and lets any
/// number of cursors share it.
///
/// ```
/// use tola_ranges::prelude::*;
///
/// let mut data = [1, 2, 3, 4];
/// reverse_in(SliceMut::new(&mut data));
/// assert_eq!(data, [4, 3, 2, 1]);
/// ```
pub struct SliceMut<'a, T> {
    cells: &'a [Cell<T>],
}

impl<'a, T> SliceMut<'a, T> {
    #[inline]
    pub fn new(slice: &'a mut [T]) -> Self {
        Self {
            cells: Cell::from_mut(slice).as_slice_of_cells(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<T> Clone for SliceMut<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceMut<'_, T> {}

impl<'a, T> From<&'a mut [T]> for SliceMut<'a, T> {
    #[inline]
    fn from(slice: &'a mut [T]) -> Self {
        Self::new(slice)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for SliceMut<'a, T> {
    #[inline]
    fn from(array: &'a mut [T; N]) -> Self {
        Self::new(array.as_mut_slice())
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> From<&'a mut Vec<T>> for SliceMut<'a, T> {
    #[inline]
    fn from(vec: &'a mut Vec<T>) -> Self {
        Self::new(vec.as_mut_slice())
    }
}

impl<'a, T> Sequence for SliceMut<'a, T> {
    type Cursor = SliceMutCursor<'a, T>;
    type Sentinel = SliceMutCursor<'a, T>;
    type Borrowed = Present;

    #[inline]
    fn start(&self) -> SliceMutCursor<'a, T> {
        SliceMutCursor::new(self.cells, 0)
    }

    #[inline]
    fn end(&self) -> SliceMutCursor<'a, T> {
        SliceMutCursor::new(self.cells, self.cells.len())
    }
}

impl<T> SizedSequence for SliceMut<'_, T> {
    #[inline]
    fn size(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Readable, WeaklyIncrementable, Writable};

    #[test]
    fn test_array_and_slice_agree() {
        let data = [3, 1, 2];
        let by_array = &data;
        let by_slice = &data[..];
        assert!(by_array.start() == by_slice.start());
        assert!(by_array.end() == by_slice.end());
        assert_eq!(by_array.size(), 3);
    }

    #[test]
    fn test_slice_mut_writes_through() {
        let mut data = [0; 3];
        let seq = SliceMut::new(&mut data);
        let mut c = seq.start();
        c.write(7);
        c.advance();
        c.write(8);
        assert_eq!(c.read(), 8);
        assert_eq!(seq.size(), 3);
        assert_eq!(data, [7, 8, 0]);
    }
}
