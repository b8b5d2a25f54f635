//! # Layer 2: Cursors
//!
//! A cursor is a position inside a sequence. The traversal strengths form a
//! strict refinement chain; reading, writing and swapping are an orthogonal
//! axis that any strength may add.
//!
//! ```text
//!  WeaklyIncrementable ──> OutputCursor<T>   (+ Writable<T>)
//!          │
//!        Cursor  (+ PartialEq)  ──> InputCursor  (+ Readable)
//!          │
//!    ForwardCursor      multi-pass, Clone
//!          │
//!  BidirectionalCursor  retreat
//!          │
//!  RandomAccessCursor   offset / distance_to, O(1)
//!          │
//!   ContiguousCursor    address of the element
//! ```
//!
//! Conjunction-only capabilities (`Cursor`, `InputCursor`, `OutputCursor`)
//! come from blanket impls. The semantic refinements carry promises the
//! compiler cannot check, so cursor types declare them explicitly.
//!
//! A [`Sentinel`] marks the end of a traversal without having to be a
//! cursor itself; every cursor is a sentinel for its own type.

pub mod counted;
pub mod dangling;
pub mod ops;
pub mod pointer;
pub mod sentinel;
pub mod slice;

#[cfg(feature = "alloc")]
pub mod insert;

pub use counted::Counted;
pub use dangling::Dangling;
pub use ops::{
    advance_bounded, advance_n, advance_to, distance, iter_swap, next, next_n, next_to, prev,
    retreat_n, sized_distance,
};
pub use sentinel::{Adaptor, BaseSentinel, DefaultSentinel, Unreachable};
pub use slice::{SliceCursor, SliceMutCursor};

#[cfg(feature = "alloc")]
pub use insert::BackInserter;

// =============================================================================
// Traversal
// =============================================================================

/// Can move to the next position.
///
/// Output-only positions (an inserter, a counted writer) stop here: they
/// have no meaningful equality.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be advanced",
    label = "requires `WeaklyIncrementable`",
    note = "implement `WeaklyIncrementable::advance` to step to the next position"
)]
pub trait WeaklyIncrementable: Sized {
    /// Step to the next position.
    fn advance(&mut self);
}

/// An advanceable position that is equality comparable with itself.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a cursor",
    label = "requires `Cursor` (`WeaklyIncrementable + PartialEq`)"
)]
pub trait Cursor: WeaklyIncrementable + PartialEq {}
impl<I: WeaklyIncrementable + PartialEq> Cursor for I {}

/// Multi-pass cursor.
///
/// Copies advance independently: cloning a cursor and advancing the clone
/// never changes what the original reads, and two copies advanced the same
/// number of times compare equal and read the same element.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a forward cursor",
    label = "requires `ForwardCursor`",
    note = "single-pass cursors cannot be traversed more than once"
)]
pub trait ForwardCursor: Cursor + Clone {}

/// Forward cursor that can also step back.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a bidirectional cursor",
    label = "requires `BidirectionalCursor`"
)]
pub trait BidirectionalCursor: ForwardCursor {
    /// Step to the previous position.
    fn retreat(&mut self);

    /// Number of advances from `self` to `to`, when it is known without
    /// walking.
    ///
    /// Random-access cursors (and counted cursors) return `Some`; algorithms
    /// use it to pick their random-access strategy.
    #[inline]
    fn random_distance(&self, to: &Self) -> Option<isize> {
        let _ = to;
        None
    }
}

/// Bidirectional cursor with O(1) offset and distance.
///
/// `a.distance_to(&b) == n` exactly when offsetting `a` by `n` yields `b`.
/// Implementors also override [`BidirectionalCursor::random_distance`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a random-access cursor",
    label = "requires `RandomAccessCursor`"
)]
pub trait RandomAccessCursor: BidirectionalCursor + PartialOrd {
    /// Move by `n` positions; negative `n` moves backwards.
    fn offset(&mut self, n: isize);

    /// Number of advances from `self` to `to` (negative if `to` is behind).
    fn distance_to(&self, to: &Self) -> isize;
}

/// Random-access cursor whose elements are adjacent in memory.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a contiguous cursor",
    label = "requires `ContiguousCursor`"
)]
pub trait ContiguousCursor: RandomAccessCursor {
    type Element;

    /// Address of the element at this position.
    fn address(&self) -> *const Self::Element;
}

// =============================================================================
// Access
// =============================================================================

/// Dereference for reading.
///
/// `Item` is whatever the cursor yields, a reference (`&'a T`) or a value,
/// and is passed on to projections unchanged.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be read through",
    label = "requires `Readable`"
)]
pub trait Readable {
    type Item;

    /// Element at this position. Reading an end position is a precondition
    /// violation.
    fn read(&self) -> Self::Item;
}

/// Dereference for writing a `T`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be written with `{T}`",
    label = "requires `Writable<{T}>`"
)]
pub trait Writable<T> {
    fn write(&mut self, value: T);
}

/// Exchange the elements two cursors refer to.
#[diagnostic::on_unimplemented(
    message = "elements under `{Self}` cannot be swapped",
    label = "requires `IndirectlySwappable`"
)]
pub trait IndirectlySwappable {
    fn swap_with(&mut self, other: &mut Self);
}

/// Readable single-pass cursor.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an input cursor",
    label = "requires `InputCursor` (`Cursor + Readable`)"
)]
pub trait InputCursor: Cursor + Readable {}
impl<I: Cursor + Readable> InputCursor for I {}

/// Advanceable position that accepts writes of `T`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an output cursor for `{T}`",
    label = "requires `OutputCursor<{T}>` (`WeaklyIncrementable + Writable<{T}>`)"
)]
pub trait OutputCursor<T>: WeaklyIncrementable + Writable<T> {}
impl<O: WeaklyIncrementable + Writable<T>, T> OutputCursor<T> for O {}

// =============================================================================
// Sentinels
// =============================================================================

/// End marker comparable against cursors of type `I`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot terminate a traversal over `{I}`",
    label = "requires `Sentinel<{I}>`"
)]
pub trait Sentinel<I: Cursor> {
    /// Whether `cursor` has reached this end.
    fn is_end(&self, cursor: &I) -> bool;

    /// The end as a cursor, for sentinels that are cursors themselves.
    ///
    /// Returns the sentinel back when it is not convertible; callers then
    /// have to walk to it.
    #[inline]
    fn into_cursor(self) -> Result<I, Self>
    where
        Self: Sized,
    {
        Err(self)
    }
}

impl<I: Cursor> Sentinel<I> for I {
    #[inline]
    fn is_end(&self, cursor: &I) -> bool {
        cursor == self
    }

    #[inline]
    fn into_cursor(self) -> Result<I, Self> {
        Ok(self)
    }
}

/// Sentinel whose distance from a cursor is known in O(1).
#[diagnostic::on_unimplemented(
    message = "the distance from `{I}` to `{Self}` is not known in constant time",
    label = "requires `SizedSentinel<{I}>`"
)]
pub trait SizedSentinel<I: Cursor>: Sentinel<I> {
    /// Number of advances needed for `cursor` to reach this end.
    fn distance_from(&self, cursor: &I) -> isize;
}

impl<I: RandomAccessCursor> SizedSentinel<I> for I {
    #[inline]
    fn distance_from(&self, cursor: &I) -> isize {
        cursor.distance_to(self)
    }
}
