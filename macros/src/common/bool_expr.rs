// Boolean capability expressions for `satisfies!`

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Token, Type,
};

// =============================================================================
// Boolean Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum BoolExpr {
    Cap(Type),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary

fn parse_or(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_and(input)?;
        lhs = BoolExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = BoolExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(BoolExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else {
        // A capability trait, possibly generic: `Sentinel<SliceCursor<'static, i32>>`
        let ty: Type = input.parse()?;
        Ok(BoolExpr::Cap(ty))
    }
}

// =============================================================================
// BoolExpr Utilities
// =============================================================================

/// Render the expression the way it would be written by hand.
pub fn bool_expr_to_string(expr: &BoolExpr) -> String {
    match expr {
        BoolExpr::Cap(ty) => quote!(#ty).to_string().replace(' ', ""),
        BoolExpr::And(lhs, rhs) => {
            format!("({} & {})", bool_expr_to_string(lhs), bool_expr_to_string(rhs))
        }
        BoolExpr::Or(lhs, rhs) => {
            format!("({} | {})", bool_expr_to_string(lhs), bool_expr_to_string(rhs))
        }
        BoolExpr::Not(operand) => format!("!{}", bool_expr_to_string(operand)),
    }
}

// =============================================================================
// Probe Generation (Inherent Const Fallback)
// =============================================================================

/// Expand an expression into nested probes combined with `&&`, `||` and `!`.
///
/// Every atom becomes its own probe so that NOT is applied to the
/// detection result, never to the bound itself.
pub fn generate_probe_body(expr: &BoolExpr, ty: &Type) -> TokenStream {
    match expr {
        BoolExpr::Cap(trait_ty) => generate_single_probe(trait_ty, ty),
        BoolExpr::And(lhs, rhs) => {
            let l = generate_probe_body(lhs, ty);
            let r = generate_probe_body(rhs, ty);
            quote! { (#l && #r) }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = generate_probe_body(lhs, ty);
            let r = generate_probe_body(rhs, ty);
            quote! { (#l || #r) }
        }
        BoolExpr::Not(operand) => {
            let o = generate_probe_body(operand, ty);
            quote! { (!#o) }
        }
    }
}

/// A single probe: the inherent const exists only when the bound holds,
/// otherwise resolution falls back to the trait const, which is `false`.
///
/// An unsatisfiable bound (for example a capability whose impls need a
/// sized pointee, probed with `*const str`) selects the fallback instead
/// of producing a hard error.
pub fn generate_single_probe(trait_ty: &Type, ty: &Type) -> TokenStream {
    quote! {
        {
            trait __ProbeFallback { const VAL: bool = false; }
            struct __Probe<X: ?Sized>(::core::marker::PhantomData<X>);
            impl<X: ?Sized> __ProbeFallback for __Probe<X> {}
            #[allow(dead_code)]
            impl<X: ?Sized + #trait_ty> __Probe<X> { const VAL: bool = true; }
            __Probe::<#ty>::VAL
        }
    }
}
