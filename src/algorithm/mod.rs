//! # Layer 5: Algorithms
//!
//! Every algorithm comes in two forms:
//!
//! - `name(first, last, ..)` over a cursor and a sentinel
//! - `name_in(seq, ..)` over a sequence, delegating to the first form
//!
//! The sequence form takes the sequence by value. Where a cursor is
//! returned it is a [`SafeCursor`](crate::sequence::SafeCursor): for a
//! sequence that owned its elements the caller gets
//! [`Dangling`](crate::cursor::Dangling) instead of a cursor into storage
//! that is already gone.
//!
//! Element-inspecting algorithms take a projection after the callable; pass
//! [`identity`](crate::invoke::identity) for none. Callables receive what
//! the projection returns, by value.
//!
//! Counts and lengths are `isize`. A negative count to a `_n` algorithm
//! means "nothing to do".

mod all_of;
mod copy;
mod count;
mod fill;
mod find;
mod for_each;
mod generate;
mod mismatch;
mod results;
mod reverse;
mod transform;

pub use all_of::{all_of, all_of_in, any_of, any_of_in, none_of, none_of_in};
pub use copy::{copy, copy_in, copy_n};
pub use count::{count, count_if, count_if_in, count_in};
pub use fill::{fill, fill_in, fill_n};
pub use find::{find, find_if, find_if_in, find_if_not, find_if_not_in, find_in};
pub use for_each::{for_each, for_each_in};
pub use generate::{generate, generate_in, generate_n};
pub use mismatch::{equal, equal_in, mismatch, mismatch_in};
pub use results::{InFun, InIn, InOut};
pub use reverse::{reverse, reverse_copy, reverse_copy_in, reverse_in};
pub use transform::{transform, transform_in};
