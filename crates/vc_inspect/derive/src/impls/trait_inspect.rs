use proc_macro2::TokenStream;
use quote::quote;
use syn::WhereClause;

use crate::derive_data::InspectMeta;

/// Generate implementation codes for `Inspect`.
///
/// Derived types always report `Kind::Struct`. `variant_name` is only
/// given for enums.
pub(super) fn impl_trait_inspect(
    meta: &InspectMeta,
    where_clause: Option<&WhereClause>,
    variant_name_tokens: TokenStream,
) -> TokenStream {
    let vc_inspect_path = meta.vc_inspect_path();
    let inspect_ = crate::path::inspect_(vc_inspect_path);
    let kind_ = crate::path::kind_(vc_inspect_path);
    let inspect_ref_ = crate::path::inspect_ref_(vc_inspect_path);
    let option_ = crate::path::option_(vc_inspect_path);

    let parser = meta.type_parser();
    let ident = parser.ident();
    let (impl_generics, ty_generics, _) = parser.generics().split_for_impl();

    quote! {
        impl #impl_generics #inspect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn inspect_kind(&self) -> #kind_ {
                #kind_::Struct
            }

            #[inline]
            fn static_kind() -> #option_<#kind_> {
                #option_::Some(#kind_::Struct)
            }

            #[inline]
            fn inspect_ref(&self) -> #inspect_ref_<'_> {
                #inspect_ref_::Struct(self)
            }

            #variant_name_tokens
        }
    }
}
