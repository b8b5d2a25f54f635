//! Cursors over slices.
//!
//! [`SliceCursor`] reads shared slices. [`SliceMutCursor`] works on a
//! mutable slice viewed as `&[Cell<T>]`, which is what lets several
//! copies of a multi-pass cursor write and swap through the same storage.

use core::cell::Cell;
use core::cmp::Ordering;
use core::fmt;
use core::ptr;

use super::{
    BidirectionalCursor, ContiguousCursor, ForwardCursor, IndirectlySwappable, RandomAccessCursor,
    Readable, WeaklyIncrementable, Writable,
};

#[inline]
fn offset_position(pos: usize, n: isize, len: usize) -> usize {
    let moved = pos as isize + n;
    debug_assert!(
        moved >= 0 && moved as usize <= len,
        "cursor moved outside its slice"
    );
    moved as usize
}

// =============================================================================
// SliceCursor
// =============================================================================

/// Position in a shared slice. Reads yield `&'a T`.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor at index `pos` of `slice`; `pos == slice.len()` is the end.
    #[inline]
    pub const fn new(slice: &'a [T], pos: usize) -> Self {
        Self { slice, pos }
    }

    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub const fn slice(&self) -> &'a [T] {
        self.slice
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> PartialEq for SliceCursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && ptr::eq(self.slice.as_ptr(), other.slice.as_ptr())
    }
}

impl<T> PartialOrd for SliceCursor<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        ptr::eq(self.slice.as_ptr(), other.slice.as_ptr()).then(|| self.pos.cmp(&other.pos))
    }
}

impl<T> WeaklyIncrementable for SliceCursor<'_, T> {
    #[inline]
    fn advance(&mut self) {
        debug_assert!(self.pos < self.slice.len(), "advanced past the end");
        self.pos += 1;
    }
}

impl<'a, T> Readable for SliceCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn read(&self) -> &'a T {
        &self.slice[self.pos]
    }
}

impl<T> ForwardCursor for SliceCursor<'_, T> {}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
    #[inline]
    fn retreat(&mut self) {
        debug_assert!(self.pos > 0, "retreated before the start");
        self.pos -= 1;
    }

    #[inline]
    fn random_distance(&self, to: &Self) -> Option<isize> {
        Some(self.distance_to(to))
    }
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
    #[inline]
    fn offset(&mut self, n: isize) {
        self.pos = offset_position(self.pos, n, self.slice.len());
    }

    #[inline]
    fn distance_to(&self, to: &Self) -> isize {
        to.pos as isize - self.pos as isize
    }
}

impl<T> ContiguousCursor for SliceCursor<'_, T> {
    type Element = T;

    #[inline]
    fn address(&self) -> *const T {
        self.slice.as_ptr().wrapping_add(self.pos)
    }
}

// =============================================================================
// SliceMutCursor
// =============================================================================

/// Position in a mutable slice.
///
/// Writable and swappable for any `T`. Readable (by copy) when `T: Copy`;
/// non-`Copy` elements can only be moved around with writes and swaps.
pub struct SliceMutCursor<'a, T> {
    cells: &'a [Cell<T>],
    pos: usize,
}

impl<'a, T> SliceMutCursor<'a, T> {
    #[inline]
    pub const fn new(cells: &'a [Cell<T>], pos: usize) -> Self {
        Self { cells, pos }
    }

    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Move the element at this position out, leaving `T::default()`.
    #[inline]
    pub fn take(&self) -> T
    where
        T: Default,
    {
        self.cells[self.pos].take()
    }

    /// Store `value` at this position and return the previous element.
    #[inline]
    pub fn replace(&self, value: T) -> T {
        self.cells[self.pos].replace(value)
    }
}

impl<T> Clone for SliceMutCursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceMutCursor<'_, T> {}

impl<T> fmt::Debug for SliceMutCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceMutCursor")
            .field("pos", &self.pos)
            .field("len", &self.cells.len())
            .finish()
    }
}

impl<T> PartialEq for SliceMutCursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && ptr::eq(self.cells.as_ptr(), other.cells.as_ptr())
    }
}

impl<T> PartialOrd for SliceMutCursor<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        ptr::eq(self.cells.as_ptr(), other.cells.as_ptr()).then(|| self.pos.cmp(&other.pos))
    }
}

impl<T> WeaklyIncrementable for SliceMutCursor<'_, T> {
    #[inline]
    fn advance(&mut self) {
        debug_assert!(self.pos < self.cells.len(), "advanced past the end");
        self.pos += 1;
    }
}

impl<T: Copy> Readable for SliceMutCursor<'_, T> {
    type Item = T;

    #[inline]
    fn read(&self) -> T {
        self.cells[self.pos].get()
    }
}

impl<T> Writable<T> for SliceMutCursor<'_, T> {
    #[inline]
    fn write(&mut self, value: T) {
        self.cells[self.pos].set(value);
    }
}

impl<T: Clone> Writable<&T> for SliceMutCursor<'_, T> {
    #[inline]
    fn write(&mut self, value: &T) {
        self.cells[self.pos].set(value.clone());
    }
}

impl<T> IndirectlySwappable for SliceMutCursor<'_, T> {
    #[inline]
    fn swap_with(&mut self, other: &mut Self) {
        self.cells[self.pos].swap(&other.cells[other.pos]);
    }
}

impl<T> ForwardCursor for SliceMutCursor<'_, T> {}

impl<T> BidirectionalCursor for SliceMutCursor<'_, T> {
    #[inline]
    fn retreat(&mut self) {
        debug_assert!(self.pos > 0, "retreated before the start");
        self.pos -= 1;
    }

    #[inline]
    fn random_distance(&self, to: &Self) -> Option<isize> {
        Some(self.distance_to(to))
    }
}

impl<T> RandomAccessCursor for SliceMutCursor<'_, T> {
    #[inline]
    fn offset(&mut self, n: isize) {
        self.pos = offset_position(self.pos, n, self.cells.len());
    }

    #[inline]
    fn distance_to(&self, to: &Self) -> isize {
        to.pos as isize - self.pos as isize
    }
}

impl<T> ContiguousCursor for SliceMutCursor<'_, T> {
    type Element = T;

    #[inline]
    fn address(&self) -> *const T {
        self.cells.as_ptr().wrapping_add(self.pos).cast::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_cursor_reads_references() {
        let data = [10, 20, 30];
        let mut c = SliceCursor::new(&data, 0);
        let first: &i32 = c.read();
        c.advance();
        assert_eq!(*first, 10);
        assert_eq!(*c.read(), 20);
        assert!(core::ptr::eq(c.read(), &data[1]));
    }

    #[test]
    fn test_slice_cursor_ordering_needs_same_slice() {
        let a = [1, 2];
        let b = [1, 2];
        let x = SliceCursor::new(&a, 0);
        let y = SliceCursor::new(&a, 1);
        assert!(x < y);
        assert_eq!(x.partial_cmp(&SliceCursor::new(&b, 1)), None);
        assert!(x != SliceCursor::new(&b, 0));
    }

    #[test]
    fn test_address_matches_element() {
        let data = [1u32, 2, 3];
        let c = SliceCursor::new(&data, 2);
        assert_eq!(c.address(), &data[2] as *const u32);
    }

    #[test]
    fn test_slice_mut_cursor_write_and_swap() {
        let mut data = [1, 2, 3];
        let cells = Cell::from_mut(&mut data[..]).as_slice_of_cells();
        let mut a = SliceMutCursor::new(cells, 0);
        let mut b = SliceMutCursor::new(cells, 2);
        a.swap_with(&mut b);
        b.write(9);
        assert_eq!(a.read(), 3);
        assert_eq!(data, [3, 2, 9]);
    }

    #[test]
    fn test_slice_mut_cursor_non_copy() {
        let mut data = [String::from("a"), String::from("b")];
        let cells = Cell::from_mut(&mut data[..]).as_slice_of_cells();
        let c = SliceMutCursor::new(cells, 1);
        assert_eq!(c.replace(String::from("z")), "b");
        assert_eq!(c.take(), "z");
        assert_eq!(data[1], "");
    }
}
