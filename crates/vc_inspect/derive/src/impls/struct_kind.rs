use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_inspect, impl_trait_type_path, index_lit};
use crate::derive_data::InspectStruct;

/// Implement `TypePath`, `Inspect` and `Struct` for a struct type.
pub(crate) fn impl_struct(info: &InspectStruct) -> TokenStream {
    let meta = &info.meta;
    let where_clause = super::where_clause(meta, info.fields.iter().map(|field| field.ty));

    let type_path_trait_tokens = impl_trait_type_path(meta);
    let inspect_trait_tokens = impl_trait_inspect(meta, where_clause.as_ref(), TokenStream::new());
    let struct_trait_tokens = impl_trait_struct(info, where_clause.as_ref());

    quote! {
        #type_path_trait_tokens

        #inspect_trait_tokens

        #struct_trait_tokens
    }
}

fn impl_trait_struct(info: &InspectStruct, where_clause: Option<&syn::WhereClause>) -> TokenStream {
    let meta = &info.meta;
    let vc_inspect_path = meta.vc_inspect_path();
    let inspect_ = crate::path::inspect_(vc_inspect_path);
    let struct_ = crate::path::struct_(vc_inspect_path);
    let option_ = crate::path::option_(vc_inspect_path);

    let parser = meta.type_parser();
    let ident = parser.ident();
    let (impl_generics, ty_generics, _) = parser.generics().split_for_impl();

    let field_len = info.fields.len();
    let indices: Vec<_> = (0..field_len).map(index_lit).collect();
    let names = info.fields.iter().map(|field| &field.name);
    let members = info.fields.iter().map(|field| &field.member);

    quote! {
        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }

            fn name_at(&self, index: usize) -> #option_<&str> {
                match index {
                    #( #indices => #option_::Some(#names), )*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #inspect_> {
                match index {
                    #( #indices => #option_::Some(&self.#members as &dyn #inspect_), )*
                    _ => #option_::None,
                }
            }
        }
    }
}
