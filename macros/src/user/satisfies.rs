//! Capability queries: `satisfies!` and `assert_satisfies!`
//!
//! Both macros take one or more `Type: Expr` constraints. Multiple
//! constraints are joined with AND.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};

use crate::common::{TypeConstraint, bool_expr_to_string, generate_probe_body, parse_constraints};

/// Input for both query macros.
pub struct SatisfiesInput {
    pub checks: Vec<TypeConstraint>,
}

impl Parse for SatisfiesInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Ok(SatisfiesInput {
            checks: parse_constraints(input)?,
        })
    }
}

/// Boolean expression over all constraints, usable in `const` context.
pub fn expand_satisfies(input: &SatisfiesInput) -> TokenStream2 {
    let type_refs = input.checks.iter().map(|c| {
        let ty = &c.ty;
        // Keeps user imports "used" even when every probe falls back.
        quote! { let _ = ::core::marker::PhantomData::<#ty>; }
    });
    let check_exprs = input.checks.iter().map(|c| generate_probe_body(&c.expr, &c.ty));

    quote! {
        {
            #(#type_refs)*
            (#(#check_exprs)&&*)
        }
    }
}

/// Compile-time assertion; the panic message names the failed requirement.
pub fn expand_assert_satisfies(input: &SatisfiesInput) -> TokenStream2 {
    let asserts = input.checks.iter().map(|c| {
        let ty = &c.ty;
        let body = generate_probe_body(&c.expr, ty);
        let message = format!(
            "`{}` does not satisfy `{}`",
            quote!(#ty).to_string().replace(' ', ""),
            bool_expr_to_string(&c.expr),
        );
        quote! {
            const _: () = ::core::assert!(#body, #message);
        }
    });

    quote! { #(#asserts)* }
}
