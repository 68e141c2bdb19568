//! Paths to the items of `vc_inspect` used by the generated code.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `vc_inspect` crate.
///
/// 1. For crates that depend on `vc_inspect`, `::vc_inspect` is returned.
/// 2. For crates that depend on `vc_snapshot`, `::vc_snapshot::inspect` is returned.
/// 3. For other situations, `::vc_inspect` is returned, but this may be incorrect.
///
/// Reading the manifest is not cheap, so the path is obtained once per
/// macro invocation and passed around.
pub(crate) fn vc_inspect() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_inspect"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn macro_utils_(vc_inspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_inspect_path::__macro_exports::macro_utils
    }
}

#[inline(always)]
pub(crate) fn option_(vc_inspect_path: &syn::Path) -> TokenStream {
    let macro_utils_ = macro_utils_(vc_inspect_path);
    quote! {
        #macro_utils_::Option
    }
}

#[inline(always)]
pub(crate) fn type_path_(vc_inspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_inspect_path::info::TypePath
    }
}

#[inline(always)]
pub(crate) fn kind_(vc_inspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_inspect_path::info::Kind
    }
}

#[inline(always)]
pub(crate) fn inspect_(vc_inspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_inspect_path::Inspect
    }
}

#[inline(always)]
pub(crate) fn inspect_ref_(vc_inspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_inspect_path::ops::InspectRef
    }
}

#[inline(always)]
pub(crate) fn struct_(vc_inspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_inspect_path::ops::Struct
    }
}

#[inline(always)]
pub(crate) fn generic_type_path_cell_(vc_inspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_inspect_path::impls::GenericTypePathCell
    }
}
