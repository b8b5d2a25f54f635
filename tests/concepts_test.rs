//! Tests for the capability lattice and the query macros.
//!
//! `satisfies!(T: Expr)` answers for concrete types, `assert_satisfies!`
//! rejects the build when the answer is false.

use tola_ranges::concepts::detect::*;
use tola_ranges::cursor::SliceMutCursor;
use tola_ranges::prelude::*;
use tola_ranges::view::{FilterCursor, IterCursor, RepeatCursor, Single};

// =============================================================================
// Compile-time assertions
// =============================================================================

assert_satisfies!(SliceCursor<'static, u8>: ContiguousCursor & Readable);
assert_satisfies!(SliceMutCursor<'static, String>: RandomAccessCursor & IndirectlySwappable);
assert_satisfies!(SliceMutCursor<'static, String>: !Readable);
assert_satisfies!(*const u8: ContiguousCursor & !Readable & !(Writable<u8>));
assert_satisfies!(*const str: !Cursor);
assert_satisfies!(Counted<*const u8>: ContiguousCursor, Unreachable: Regular);

const SLICE_IS_BORROWED: bool = satisfies!(&'static [i32]: BorrowedSequence);
const _: () = assert!(SLICE_IS_BORROWED);

// =============================================================================
// Object capabilities
// =============================================================================

#[test]
fn test_object_capabilities() {
    assert!(satisfies!(i32: Regular & TotallyOrdered));
    assert!(satisfies!(String: Regular & !Copy));
    assert!(!satisfies!(f32: EqualityComparable));
    assert!(satisfies!(f32: EqualityComparableWith<f32>));
    assert!(!satisfies!(Vec<f64>: TotallyOrdered));
}

// =============================================================================
// Cursor lattice
// =============================================================================

#[test]
fn test_each_strength_implies_the_weaker_ones() {
    type C = SliceCursor<'static, i32>;
    assert!(satisfies!(C: ContiguousCursor & RandomAccessCursor & BidirectionalCursor));
    assert!(satisfies!(C: ForwardCursor & InputCursor & Cursor));
}

#[test]
fn test_incomplete_pointee_satisfies_nothing() {
    assert!(satisfies!(*const i32: ContiguousCursor));
    assert!(satisfies!(*mut i32: ContiguousCursor));
    assert!(!satisfies!(*const str: ContiguousCursor));
    assert!(!satisfies!(*const str: RandomAccessCursor | BidirectionalCursor | ForwardCursor));
    assert!(!satisfies!(*const [u8]: WeaklyIncrementable));
}

#[test]
fn test_single_pass_is_not_forward() {
    type Once = IterCursor<std::vec::IntoIter<u8>>;
    assert!(satisfies!(Once: InputCursor));
    assert!(!satisfies!(Once: ForwardCursor));
}

#[test]
fn test_filter_is_at_most_bidirectional() {
    type Pred = fn(&i32) -> bool;
    type F = FilterCursor<SliceCursor<'static, i32>, SliceCursor<'static, i32>, Pred>;
    assert!(satisfies!(F: BidirectionalCursor & Readable));
    assert!(!satisfies!(F: RandomAccessCursor));
}

#[test]
fn test_repeat_cursor_reads_owned_values() {
    assert!(satisfies!(RepeatCursor<String>: RandomAccessCursor & Readable & !ContiguousCursor));
}

#[test]
fn test_sentinels() {
    type C = SliceCursor<'static, i32>;
    assert!(satisfies!(C: Sentinel<C> & SizedSentinel<C>));
    assert!(satisfies!(Unreachable: Sentinel<C> & !(SizedSentinel<C>)));
    assert!(satisfies!(DefaultSentinel: SizedSentinel<Counted<C>>));
}

// =============================================================================
// Sequences
// =============================================================================

#[test]
fn test_sequence_capabilities() {
    assert!(satisfies!(&'static [u8]: ContiguousSequence & SizedSequence & CommonSequence));
    assert!(satisfies!(SliceMut<'static, u8>: ContiguousSequence & OutputSequence<u8>));
    assert!(satisfies!(Single<u8>: RandomAccessSequence & !BorrowedSequence));
}

// =============================================================================
// Detect constants
// =============================================================================

#[test]
fn test_detect_matches_satisfies() {
    type C = SliceMutCursor<'static, u32>;
    assert_eq!(Detect::<C>::IS_CONTIGUOUS_CURSOR, satisfies!(C: ContiguousCursor));
    assert_eq!(Detect::<C>::IS_READABLE, satisfies!(C: Readable));
    assert!(Detect::<i32>::IS_REGULAR);
    assert!(!Detect::<*const str>::IS_RANDOM_ACCESS_CURSOR);
}
