use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::InspectMeta;

fn static_path_cell(vc_inspect_path: &syn::Path, generator: TokenStream) -> TokenStream {
    let path_cell_ = crate::path::generic_type_path_cell_(vc_inspect_path);

    quote! {
        static CELL: #path_cell_ = #path_cell_::new();
        CELL.get_or_insert::<Self>(|| {
            #generator
        })
    }
}

/// Generate implementation codes for `TypePath`.
pub(super) fn impl_trait_type_path(meta: &InspectMeta) -> TokenStream {
    let vc_inspect_path = meta.vc_inspect_path();
    let type_path_ = crate::path::type_path_(vc_inspect_path);
    let option_ = crate::path::option_(vc_inspect_path);

    let parser = meta.type_parser();
    let ident = parser.ident();

    let (type_path, type_name, inline_flag) = if parser.impl_with_generic() {
        (
            static_path_cell(
                vc_inspect_path,
                parser.type_path(vc_inspect_path).into_owned(vc_inspect_path),
            ),
            static_path_cell(
                vc_inspect_path,
                parser.type_name(vc_inspect_path).into_owned(vc_inspect_path),
            ),
            TokenStream::new(),
        )
    } else {
        (
            parser.type_path(vc_inspect_path).into_borrowed(),
            parser.type_name(vc_inspect_path).into_borrowed(),
            quote! { #[inline] },
        )
    };

    let module_path = parser.module_path().into_borrowed();

    let where_clause = super::where_clause(meta, core::iter::empty());
    let (impl_generics, ty_generics, _) = parser.generics().split_for_impl();

    quote! {
        impl #impl_generics #type_path_ for #ident #ty_generics #where_clause {
            #inline_flag
            fn type_path() -> &'static str {
                #type_path
            }

            #inline_flag
            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn module_path() -> #option_<&'static str> {
                #option_::Some(#module_path)
            }
        }
    }
}
