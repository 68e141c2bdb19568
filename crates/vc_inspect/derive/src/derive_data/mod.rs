//! Parsed form of a `#[derive(Inspect)]` input.

use syn::ext::IdentExt;
use syn::{
    Data, DeriveInput, Fields, Generics, Ident, Member, Type, punctuated::Punctuated,
    spanned::Spanned, token::Comma,
};

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod type_parser;

// -----------------------------------------------------------------------------
// Exports

pub(crate) use attributes::{FieldAttributes, TypeAttributes};
pub(crate) use type_parser::TypeParser;

// -----------------------------------------------------------------------------
// InspectMeta

/// Information shared by every kind of derived type.
pub(crate) struct InspectMeta<'a> {
    type_parser: TypeParser<'a>,
    vc_inspect_path: syn::Path,
}

impl<'a> InspectMeta<'a> {
    fn new(ast: &'a DeriveInput, attrs: TypeAttributes) -> Self {
        Self {
            type_parser: TypeParser::new(&ast.ident, attrs.type_path, &ast.generics),
            vc_inspect_path: crate::path::vc_inspect(),
        }
    }

    #[inline]
    pub fn type_parser(&self) -> &TypeParser<'a> {
        &self.type_parser
    }

    #[inline]
    pub fn vc_inspect_path(&self) -> &syn::Path {
        &self.vc_inspect_path
    }
}

// -----------------------------------------------------------------------------
// Fields

/// A field that is visible to inspection.
pub(crate) struct InspectField<'a> {
    /// `self.#member` accesses the field.
    pub member: Member,
    /// The name reported by `Struct::name_at`.
    pub name: String,
    pub ty: &'a Type,
}

impl InspectField<'_> {
    /// The binding used when destructuring an enum variant.
    pub fn binding(&self) -> Ident {
        let span = match &self.member {
            Member::Named(ident) => ident.span(),
            Member::Unnamed(index) => index.span,
        };
        Ident::new(&format!("__{}", self.name), span)
    }
}

fn parse_fields(fields: &Fields) -> syn::Result<Vec<InspectField<'_>>> {
    let mut res = Vec::with_capacity(fields.len());
    for (index, field) in fields.iter().enumerate() {
        let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let (member, name) = match &field.ident {
            Some(ident) => {
                (Member::Named(ident.clone()), ident.unraw().to_string())
            }
            None => (
                Member::Unnamed(syn::Index {
                    index: index as u32,
                    span: field.span(),
                }),
                index.to_string(),
            ),
        };

        res.push(InspectField {
            member,
            name,
            ty: &field.ty,
        });
    }

    Ok(res)
}

// -----------------------------------------------------------------------------
// Struct / Enum

pub(crate) struct InspectStruct<'a> {
    pub meta: InspectMeta<'a>,
    pub fields: Vec<InspectField<'a>>,
}

pub(crate) struct InspectVariant<'a> {
    pub ident: &'a Ident,
    pub fields: Vec<InspectField<'a>>,
}

pub(crate) struct InspectEnum<'a> {
    pub meta: InspectMeta<'a>,
    pub variants: Vec<InspectVariant<'a>>,
}

pub(crate) enum InspectDerive<'a> {
    Struct(InspectStruct<'a>),
    Enum(InspectEnum<'a>),
}

impl<'a> InspectDerive<'a> {
    pub fn from_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        reject_lifetimes(&ast.generics)?;

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;
        let meta = InspectMeta::new(ast, attrs);

        match &ast.data {
            Data::Struct(data) => {
                let fields = parse_fields(&data.fields)?;
                Ok(Self::Struct(InspectStruct { meta, fields }))
            }
            Data::Enum(data) => {
                let variants = parse_variants(&data.variants)?;
                Ok(Self::Enum(InspectEnum { meta, variants }))
            }
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span,
                "unions cannot derive `Inspect`",
            )),
        }
    }
}

fn parse_variants(
    variants: &Punctuated<syn::Variant, Comma>,
) -> syn::Result<Vec<InspectVariant<'_>>> {
    variants
        .iter()
        .map(|variant| {
            Ok(InspectVariant {
                ident: &variant.ident,
                fields: parse_fields(&variant.fields)?,
            })
        })
        .collect()
}

/// Inspected values are `'static`, so borrowed types cannot be supported.
fn reject_lifetimes(generics: &Generics) -> syn::Result<()> {
    generics
        .lifetimes()
        .map(|lifetime| {
            syn::Error::new(
                lifetime.span(),
                "types with lifetime parameters cannot derive `Inspect`",
            )
        })
        .reduce(|mut acc, err| {
            acc.combine(err);
            acc
        })
        .map_or(Ok(()), Err)
}
