//! # Layer 1: Object Capabilities
//!
//! The foundational predicates every cursor and sequence capability is
//! built from. Each one is a pure conjunction of std traits, so it is
//! modeled through a blanket impl and can never disagree with its parts.
//!
//! ```text
//! EqualityComparableWith<U>     Semiregular = Clone + Default
//!           |                         |
//!   EqualityComparable = Eq      Regular = Semiregular + Eq
//!           |
//!   TotallyOrdered = Ord
//! ```
//!
//! For querying a concrete type, see [`satisfies!`](crate::satisfies) and
//! [`has_capability!`](crate::has_capability).

pub mod detect;

pub use detect::Detect;

/// `Self == U` and `Self != U` are defined.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be compared for equality with `{U}`",
    label = "requires `EqualityComparableWith<{U}>`"
)]
pub trait EqualityComparableWith<U: ?Sized>: PartialEq<U> {}
impl<T: ?Sized + PartialEq<U>, U: ?Sized> EqualityComparableWith<U> for T {}

/// Equality is an equivalence relation.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not equality comparable",
    label = "requires `EqualityComparable` (`Eq`)"
)]
pub trait EqualityComparable: Eq {}
impl<T: ?Sized + Eq> EqualityComparable for T {}

/// Comparison is a total order.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not totally ordered",
    label = "requires `TotallyOrdered` (`Ord`)"
)]
pub trait TotallyOrdered: Ord + EqualityComparable {}
impl<T: ?Sized + Ord> TotallyOrdered for T {}

/// Copyable and default-constructible.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not semiregular",
    label = "requires `Clone + Default`"
)]
pub trait Semiregular: Clone + Default {}
impl<T: Clone + Default> Semiregular for T {}

/// Semiregular with equality.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not regular",
    label = "requires `Clone + Default + Eq`"
)]
pub trait Regular: Semiregular + EqualityComparable {}
impl<T: Semiregular + Eq> Regular for T {}

// =============================================================================
// has_capability! - Low-level single trait probe (concrete types only)
// =============================================================================

/// Check if a concrete type implements a trait at compile time.
///
/// Uses the "Inherent Const Fallback" pattern: an inherent const shadows
/// a trait const when the bound is satisfied. A bound that cannot hold
/// falls back to `false` instead of failing the build.
///
/// For boolean combinations use [`satisfies!`](crate::satisfies).
///
/// # Usage
///
/// ```
/// use tola_ranges::has_capability;
/// use tola_ranges::cursor::{ContiguousCursor, SliceCursor};
///
/// assert!(has_capability!(SliceCursor<'static, i32>, ContiguousCursor));
/// assert!(has_capability!(*const i32, ContiguousCursor));
/// assert!(!has_capability!(*const str, ContiguousCursor));
/// ```
#[macro_export]
macro_rules! has_capability {
    ($T:ty, $Trait:path) => {{
        struct __Probe<T: ?Sized>(core::marker::PhantomData<T>);

        trait __Fallback { const VAL: bool = false; }
        impl<T: ?Sized> __Fallback for __Probe<T> {}

        impl<T: ?Sized + $Trait> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$T>::VAL
    }};
}
