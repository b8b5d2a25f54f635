//! # Layer 7: Views
//!
//! Lazy sequences built from other sequences or from values. A view stores
//! the sequence it adapts by value (pass `&[T]` or `SliceMut` to adapt
//! without copying), and its cursors carry whatever they need to move on
//! their own: the predicate, the function, the underlying end.
//!
//! | Adaptor | Strength | Borrowed |
//! |---------|----------|----------|
//! | [`filter`] | up to bidirectional | as underlying |
//! | [`transform`] | up to random access | as underlying |
//! | [`take`] | as underlying | as underlying |
//! | [`reverse`] | as underlying (bidirectional minimum) | as underlying |
//! | [`join`] | up to bidirectional | as underlying |
//! | [`counted`] | as the cursor | yes |
//!
//! | Source | Strength | Borrowed |
//! |--------|----------|----------|
//! | [`repeat`], [`repeat_n`], [`single`] | random access | no |
//! | [`empty`] | contiguous | yes |
//! | [`iota`], [`iota_bounded`] | random access | yes |
//! | [`from_iter`] | input | no |
//!
//! [`SequenceExt`] puts the adaptors in method position.

mod counted;
mod empty;
mod ext;
mod filter;
mod from_iter;
mod iota;
mod iter;
mod join;
mod repeat;
mod reverse;
mod single;
mod take;
mod transform;

pub use counted::counted;
pub use empty::{Empty, empty};
pub use ext::SequenceExt;
pub use filter::{Filter, FilterCursor, filter};
pub use from_iter::{FromIter, IterCursor, from_iter};
pub use iota::{Iota, IotaBounded, IotaCursor, Step, iota, iota_bounded};
pub use iter::{Iter, iter};
pub use join::{Join, JoinCursor, join};
pub use repeat::{Repeat, RepeatCursor, RepeatN, repeat, repeat_n};
pub use reverse::{Reverse, ReverseCursor, reverse};
pub use single::{Single, single};
pub use take::{Take, TakeSentinel, take};
pub use transform::{Transform, transform};
