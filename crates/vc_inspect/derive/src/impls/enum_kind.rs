use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_inspect, impl_trait_type_path, index_lit};
use crate::derive_data::InspectEnum;

/// Implement `TypePath`, `Inspect` and `Struct` for an enum type.
///
/// The fields exposed through `Struct` are those of the active variant.
pub(crate) fn impl_enum(info: &InspectEnum) -> TokenStream {
    let meta = &info.meta;
    let field_types = info
        .variants
        .iter()
        .flat_map(|variant| variant.fields.iter().map(|field| field.ty));
    let where_clause = super::where_clause(meta, field_types);

    let type_path_trait_tokens = impl_trait_type_path(meta);
    let inspect_trait_tokens =
        impl_trait_inspect(meta, where_clause.as_ref(), variant_name_tokens(info));
    let struct_trait_tokens = impl_trait_struct(info, where_clause.as_ref());

    quote! {
        #type_path_trait_tokens

        #inspect_trait_tokens

        #struct_trait_tokens
    }
}

fn variant_name_tokens(info: &InspectEnum) -> TokenStream {
    let option_ = crate::path::option_(info.meta.vc_inspect_path());

    let body = if info.variants.is_empty() {
        quote! { match *self {} }
    } else {
        let arms = info.variants.iter().map(|variant| {
            let ident = variant.ident;
            let name = ident.to_string();
            quote! { Self::#ident { .. } => #name, }
        });
        quote! {
            #option_::Some(match self {
                #( #arms )*
            })
        }
    };

    quote! {
        fn variant_name(&self) -> #option_<&'static str> {
            #body
        }
    }
}

fn impl_trait_struct(info: &InspectEnum, where_clause: Option<&syn::WhereClause>) -> TokenStream {
    let meta = &info.meta;
    let vc_inspect_path = meta.vc_inspect_path();
    let inspect_ = crate::path::inspect_(vc_inspect_path);
    let struct_ = crate::path::struct_(vc_inspect_path);
    let option_ = crate::path::option_(vc_inspect_path);

    let parser = meta.type_parser();
    let ident = parser.ident();
    let (impl_generics, ty_generics, _) = parser.generics().split_for_impl();

    let (field_len, name_at, field_at) = if info.variants.is_empty() {
        let never = quote! { match *self {} };
        let never_with_index = quote! {
            let _ = index;
            match *self {}
        };
        (never, never_with_index.clone(), never_with_index)
    } else {
        let len_arms = info.variants.iter().map(|variant| {
            let ident = variant.ident;
            let len = variant.fields.len();
            quote! { Self::#ident { .. } => #len, }
        });

        let (option_, inspect_) = (&option_, &inspect_);

        let name_arms = info.variants.iter().flat_map(|variant| {
            let ident = variant.ident;
            variant.fields.iter().enumerate().map(move |(index, field)| {
                let index = index_lit(index);
                let name = &field.name;
                quote! { (Self::#ident { .. }, #index) => #option_::Some(#name), }
            })
        });

        let field_arms = info.variants.iter().flat_map(|variant| {
            let ident = variant.ident;
            variant.fields.iter().enumerate().map(move |(index, field)| {
                let index = index_lit(index);
                let member = &field.member;
                let binding = field.binding();
                quote! {
                    (Self::#ident { #member: #binding, .. }, #index) => {
                        #option_::Some(#binding as &dyn #inspect_)
                    }
                }
            })
        });

        (
            quote! {
                match self {
                    #( #len_arms )*
                }
            },
            quote! {
                match (self, index) {
                    #( #name_arms )*
                    _ => #option_::None,
                }
            },
            quote! {
                match (self, index) {
                    #( #field_arms )*
                    _ => #option_::None,
                }
            },
        )
    };

    quote! {
        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            fn field_len(&self) -> usize {
                #field_len
            }

            fn name_at(&self, index: usize) -> #option_<&str> {
                #name_at
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #inspect_> {
                #field_at
            }
        }
    }
}
