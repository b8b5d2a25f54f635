//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `satisfies!` | expression | Query capabilities of a concrete type |
//! | `assert_satisfies!` | item | Reject the build when a query is false |

pub mod satisfies;

pub use satisfies::{SatisfiesInput, expand_assert_satisfies, expand_satisfies};
