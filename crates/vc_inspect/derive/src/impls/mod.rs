use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, Type, WhereClause, parse_quote};

use crate::derive_data::InspectMeta;

// -----------------------------------------------------------------------------
// Modules

mod enum_kind;
mod struct_kind;
mod trait_inspect;
mod trait_type_path;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use enum_kind::impl_enum;
pub(crate) use struct_kind::impl_struct;

use trait_inspect::impl_trait_inspect;
use trait_type_path::impl_trait_type_path;

// -----------------------------------------------------------------------------
// Helpers

/// Builds the `where` clause of the generated impls.
///
/// Every type parameter gets a `TypePath` bound. With `field_types`, the types
/// of the inspected fields also get an `Inspect` bound, which is only needed
/// when the type is generic.
fn where_clause<'a>(
    meta: &InspectMeta,
    field_types: impl IntoIterator<Item = &'a Type>,
) -> Option<WhereClause> {
    let vc_inspect_path = meta.vc_inspect_path();
    let type_path_ = crate::path::type_path_(vc_inspect_path);
    let inspect_ = crate::path::inspect_(vc_inspect_path);

    let parser = meta.type_parser();
    let mut generics: Generics = parser.generics().clone();

    if !parser.impl_with_generic() {
        return generics.where_clause;
    }

    let type_params: Vec<_> = generics.type_params().map(|p| p.ident.clone()).collect();
    let where_clause = generics.make_where_clause();

    for ident in type_params {
        where_clause
            .predicates
            .push(parse_quote!(#ident: #type_path_));
    }

    let mut seen: Vec<&Type> = Vec::new();
    for ty in field_types {
        if seen.contains(&ty) {
            continue;
        }
        seen.push(ty);
        where_clause.predicates.push(parse_quote!(#ty: #inspect_));
    }

    generics.where_clause
}

/// Literal usable as a `match` pattern on indices.
#[inline]
fn index_lit(index: usize) -> TokenStream {
    let lit = proc_macro2::Literal::usize_unsuffixed(index);
    quote!(#lit)
}
