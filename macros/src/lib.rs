//! Procedural macros for the tola-ranges capability lattice
//!
//! # Macro API
//!
//! | Macro | Position | Purpose |
//! |-------|----------|---------|
//! | `satisfies!` | expression | `bool` answer to "does this type model these capabilities" |
//! | `assert_satisfies!` | item | Same query, enforced at compile time |
//!
//! ## Example
//!
//! ```ignore
//! use tola_ranges::prelude::*;
//!
//! assert!(satisfies!(SliceCursor<'static, i32>: ContiguousCursor & Readable));
//! assert!(!satisfies!(*const str: ContiguousCursor));
//!
//! assert_satisfies!(Counted<*const u8>: RandomAccessCursor & !Readable);
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

/// Query whether concrete types model a boolean combination of capabilities.
///
/// Syntax: `satisfies!(Type: Expr, Type: Expr, ...)` where `Expr` combines
/// capability traits with `&`, `|`, `!` and parentheses. Several
/// constraints are joined with AND.
///
/// Each capability is checked with an inherent-const probe, so a bound that
/// cannot hold yields `false` instead of a compile error. The expansion is a
/// constant expression and can be used in `const` items.
///
/// **Note**: Only works for concrete types. The probe items are local to
/// the expansion and cannot name generic parameters of an enclosing item.
///
/// # Examples
///
/// ```ignore
/// assert!(satisfies!(SliceCursor<'static, i32>: RandomAccessCursor));
/// assert!(satisfies!(*const u8: ContiguousCursor & !Readable));
/// assert!(satisfies!(i32: Regular, String: Semiregular & !Copy));
/// ```
#[proc_macro]
pub fn satisfies(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::SatisfiesInput);
    user::expand_satisfies(&input).into()
}

/// Compile-time assertion form of `satisfies!`.
///
/// Expands to one `const _: () = assert!(..)` item per constraint, so a
/// failed requirement is reported during const evaluation with a message
/// naming the type and the unmet expression.
///
/// ```ignore
/// assert_satisfies!(SliceMutCursor<'static, u8>: BidirectionalCursor & IndirectlySwappable);
/// ```
#[proc_macro]
pub fn assert_satisfies(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::SatisfiesInput);
    user::expand_assert_satisfies(&input).into()
}
