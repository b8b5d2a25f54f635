// Common utilities shared by the query macros
//
// This module contains:
// - bool_expr: Boolean capability expression parsing and probe generation
// - parse_utils: `Type: Expr` parsing helpers

mod bool_expr;
mod parse_utils;

pub use bool_expr::*;
pub use parse_utils::*;
