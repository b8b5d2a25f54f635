#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables alloc types in no_std (BackInserter, SequenceExt::to_vec)

//! # tola-ranges
//!
//! Constrained cursors, sequences, generic algorithms and lazy views, built
//! on a lattice of capability traits checked at compile time.
//!
//! ## Architecture
//!
//! Every requirement an algorithm places on its arguments is a named
//! capability trait. Capabilities that are pure conjunctions come from
//! blanket impls; the ones that carry semantic promises (multi-pass,
//! random access, contiguity) are declared by the types that keep them.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Type-level Bool (Present / Absent)                             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Object capabilities                                     |
//! |  - EqualityComparable, TotallyOrdered, Semiregular, Regular       |
//! |  - satisfies!, assert_satisfies!, has_capability!, Detect         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Cursors             Layer 3: Sequences                  |
//! |  - Input .. Contiguous        - Sized, Common, Borrowed           |
//! |  - Readable, Writable         - slices, SliceMut, Subrange        |
//! |  - Sentinel, Counted          - SafeCursor / Dangling             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 4: Indirect invocation (identity, invoke, Projected)       |
//! |  Layer 5: Algorithms          Layer 6: Uninitialized storage      |
//! |  Layer 7: Views (filter, transform, take, reverse, join, ...)     |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_ranges::prelude::*;
//!
//! let mut data = [3, 1, 4, 1, 5, 9, 2, 6];
//!
//! // Sequence overloads take the sequence by value.
//! assert_eq!(count_in(&data[..], &1, identity), 2);
//! reverse_in(SliceMut::new(&mut data));
//! assert_eq!(data, [6, 2, 9, 5, 1, 4, 1, 3]);
//!
//! // Capabilities are queryable on concrete types.
//! assert!(satisfies!(SliceCursor<'static, i32>: ContiguousCursor & Readable));
//! assert!(!satisfies!(*const str: ContiguousCursor));
//! ```

// Allow `::tola_ranges` to work inside the crate itself
extern crate self as tola_ranges;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for downstream use of the detect macros
pub use paste;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Object Capabilities
// =============================================================================
pub mod concepts;

// =============================================================================
// Layer 2-3: Cursors and Sequences
// =============================================================================
pub mod cursor;
pub mod sequence;

// =============================================================================
// Layer 4-7: Invocation, Algorithms, Storage, Views
// =============================================================================
pub mod algorithm;
pub mod invoke;
pub mod memory;
pub mod view;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::{Absent, Bool, Present};

// Re-export proc-macros
pub use macros::{assert_satisfies, satisfies};

/// Common items for writing generic code over cursors and sequences.
pub mod prelude {
    pub use crate::algorithm::*;
    pub use crate::concepts::{
        EqualityComparable, EqualityComparableWith, Regular, Semiregular, TotallyOrdered,
    };
    pub use crate::cursor::{
        BidirectionalCursor, ContiguousCursor, Counted, Cursor, Dangling, DefaultSentinel,
        ForwardCursor, IndirectlySwappable, InputCursor, OutputCursor, RandomAccessCursor, Readable,
        Sentinel, SizedSentinel, SliceCursor, SliceMutCursor, Unreachable, WeaklyIncrementable,
        Writable,
    };
    #[cfg(feature = "alloc")]
    pub use crate::cursor::BackInserter;
    pub use crate::invoke::{identity, invoke, not_fn};
    pub use crate::primitives::{Absent, Bool, Present};
    pub use crate::sequence::{
        BidirectionalSequence, BorrowedSequence, CommonSequence, ContiguousSequence,
        ForwardSequence, InputSequence, OutputSequence, RandomAccessSequence, SafeCursor, Sequence,
        SizedSequence, SliceMut, Subrange,
    };
    pub use crate::view::SequenceExt;
    pub use macros::{assert_satisfies, satisfies};
}
