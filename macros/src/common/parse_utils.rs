//! Common parsing utilities
//!
//! Shared parsing helpers for the query macros.

use syn::{
    parse::{Parse, ParseStream},
    Token, Type,
};

use super::BoolExpr;

// =============================================================================
// Type Constraint Parsing: `Type: Expr`
// =============================================================================

/// A single query: `Type: BoolExpr`
///
/// Used in:
/// - `satisfies!(SliceCursor<'static, i32>: ContiguousCursor)`
/// - `satisfies!(Counted<*const u8>: RandomAccessCursor & !Readable)`
#[derive(Clone)]
pub struct TypeConstraint {
    pub ty: Type,
    pub expr: BoolExpr,
}

impl Parse for TypeConstraint {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        Ok(TypeConstraint { ty, expr })
    }
}

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse one or more constraints separated by commas, allowing a trailing comma.
pub fn parse_constraints(input: ParseStream) -> syn::Result<Vec<TypeConstraint>> {
    let mut checks = vec![input.parse()?];

    while input.peek(Token![,]) {
        input.parse::<Token![,]>()?;
        if input.is_empty() {
            break;
        }
        checks.push(input.parse()?);
    }

    Ok(checks)
}
