//! # Layer 3: Sequences
//!
//! A sequence is anything that hands out a starting cursor and an end
//! sentinel. Its capabilities are the capabilities of its cursor, plus:
//!
//! - [`SizedSequence`]: the element count is known in O(1)
//! - [`CommonSequence`]: the end sentinel is a cursor of the same type
//! - [`BorrowedSequence`]: cursors stay valid after the sequence value is
//!   dropped, because they point into storage the sequence only borrows
//!
//! Borrowing is a type-level flag ([`Sequence::Borrowed`]). Algorithms that
//! take a sequence by value and return a cursor return [`SafeCursor<R>`]:
//! the cursor itself for borrowed sequences, [`Dangling`] for owning ones.

pub mod slice;
pub mod subrange;

pub use slice::SliceMut;
pub use subrange::{Subrange, subrange};

use crate::cursor::{
    BidirectionalCursor, ContiguousCursor, Cursor, Dangling, ForwardCursor, InputCursor,
    RandomAccessCursor, Sentinel, Writable,
};
use crate::primitives::{Bool, Present};

/// A traversable sequence: a starting cursor and a sentinel that ends it.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a sequence",
    label = "requires `Sequence`",
    note = "slices are sequences through `&[T]`; mutable slices through `SliceMut`"
)]
pub trait Sequence {
    type Cursor: Cursor;
    type Sentinel: Sentinel<Self::Cursor>;

    /// [`Present`] when cursors outlive the sequence value.
    type Borrowed: Bool;

    fn start(&self) -> Self::Cursor;
    fn end(&self) -> Self::Sentinel;
}

#[inline]
pub fn start<R: Sequence>(seq: &R) -> R::Cursor {
    seq.start()
}

#[inline]
pub fn end<R: Sequence>(seq: &R) -> R::Sentinel {
    seq.end()
}

#[inline]
pub fn size<R: SizedSequence>(seq: &R) -> usize {
    seq.size()
}

/// Whether the sequence has no elements. Works on any sequence.
#[inline]
pub fn is_empty<R: Sequence>(seq: &R) -> bool {
    seq.end().is_end(&seq.start())
}

/// Whether cursors obtained from `R` may outlive it.
#[inline]
pub const fn is_borrowed<R: Sequence>() -> bool {
    <R::Borrowed as Bool>::VALUE
}

/// A reference to a sequence. The referent outlives any algorithm call it
/// is passed to, so it is always borrowed.
impl<R: Sequence> Sequence for &R {
    type Cursor = R::Cursor;
    type Sentinel = R::Sentinel;
    type Borrowed = Present;

    #[inline]
    fn start(&self) -> R::Cursor {
        (**self).start()
    }

    #[inline]
    fn end(&self) -> R::Sentinel {
        (**self).end()
    }
}

// =============================================================================
// Refinements
// =============================================================================

/// Sequence with an O(1) element count.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not know its size",
    label = "requires `SizedSequence`"
)]
pub trait SizedSequence: Sequence {
    fn size(&self) -> usize;
}

impl<R: SizedSequence> SizedSequence for &R {
    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }
}

/// Sequence whose end is a cursor.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a common sequence",
    label = "requires `CommonSequence` (sentinel type equals cursor type)"
)]
pub trait CommonSequence: Sequence {
    /// The end position as a cursor.
    fn end_cursor(&self) -> Self::Cursor;
}

impl<R> CommonSequence for R
where
    R: Sequence<Sentinel = <R as Sequence>::Cursor>,
{
    #[inline]
    fn end_cursor(&self) -> Self::Cursor {
        self.end()
    }
}

/// Sequence whose cursors do not depend on the sequence value staying alive.
#[diagnostic::on_unimplemented(
    message = "cursors into `{Self}` would dangle",
    label = "requires `BorrowedSequence`",
    note = "owning sequences cannot hand out cursors that outlive them"
)]
pub trait BorrowedSequence: Sequence<Borrowed = Present> {}
impl<R: Sequence<Borrowed = Present>> BorrowedSequence for R {}

/// Sequence with a readable cursor.
pub trait InputSequence: Sequence<Cursor: InputCursor> {}
impl<R: Sequence<Cursor: InputCursor>> InputSequence for R {}

/// Sequence that accepts writes of `T`.
pub trait OutputSequence<T>: Sequence<Cursor: Writable<T>> {}
impl<R: Sequence<Cursor: Writable<T>>, T> OutputSequence<T> for R {}

pub trait ForwardSequence: Sequence<Cursor: ForwardCursor> {}
impl<R: Sequence<Cursor: ForwardCursor>> ForwardSequence for R {}

pub trait BidirectionalSequence: Sequence<Cursor: BidirectionalCursor> {}
impl<R: Sequence<Cursor: BidirectionalCursor>> BidirectionalSequence for R {}

pub trait RandomAccessSequence: Sequence<Cursor: RandomAccessCursor> {}
impl<R: Sequence<Cursor: RandomAccessCursor>> RandomAccessSequence for R {}

pub trait ContiguousSequence: Sequence<Cursor: ContiguousCursor> {}
impl<R: Sequence<Cursor: ContiguousCursor>> ContiguousSequence for R {}

// =============================================================================
// Borrow-safe results
// =============================================================================

/// Cursor type an algorithm hands back for a sequence passed by value.
pub type SafeCursor<R> =
    <<R as Sequence>::Borrowed as Bool>::If<<R as Sequence>::Cursor, Dangling>;

/// Wrap `cursor` for return from an algorithm that consumed its sequence.
#[inline]
pub fn safe_cursor<R: Sequence>(cursor: R::Cursor) -> SafeCursor<R> {
    <R::Borrowed as Bool>::select(cursor, || Dangling)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Readable;

    #[test]
    fn test_free_functions_on_slice() {
        let data = [4, 5, 6];
        let seq = &data[..];
        assert_eq!(*start(&seq).read(), 4);
        assert!(end(&seq) == seq.end_cursor());
        assert_eq!(size(&seq), 3);
        assert!(!is_empty(&seq));
        assert!(is_empty(&&[0u8; 0][..]));
    }

    #[test]
    fn test_safe_cursor_for_borrowed() {
        let data = [1, 2];
        let seq = &data[..];
        let c: SafeCursor<&[i32]> = safe_cursor::<&[i32]>(seq.start());
        assert_eq!(*c.read(), 1);
        assert!(is_borrowed::<&[i32]>());
    }
}
