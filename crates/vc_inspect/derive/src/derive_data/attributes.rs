//! Parsing of `#[inspect(...)]` attributes.

use syn::spanned::Spanned;
use syn::{Attribute, LitStr, Path, PathArguments};

use crate::INSPECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes applied on the type itself.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `#[inspect(type_path = "my_crate::foo::Foo")]`
    pub type_path: Option<Path>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(INSPECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    if res.type_path.is_some() {
                        return Err(meta.error("duplicate `type_path` attribute"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    res.type_path = Some(parse_custom_path(&lit)?);
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    Err(meta.error("`skip` can only be applied to fields"))
                } else {
                    Err(meta.error("unsupported inspect attribute, expected `type_path = \"...\"`"))
                }
            })?;
        }

        Ok(res)
    }
}

/// The path must name a module and a type, without leading `::` or generics.
fn parse_custom_path(lit: &LitStr) -> syn::Result<Path> {
    let path: Path = lit.parse()?;

    if path.leading_colon.is_some() {
        return Err(syn::Error::new(
            lit.span(),
            "`type_path` must not start with `::`",
        ));
    }
    if path.segments.len() < 2 {
        return Err(syn::Error::new(
            lit.span(),
            "`type_path` must contain a module path, e.g. `my_crate::Foo`",
        ));
    }
    if let Some(segment) = path
        .segments
        .iter()
        .find(|segment| !matches!(segment.arguments, PathArguments::None))
    {
        return Err(syn::Error::new(
            segment.span(),
            "`type_path` must not contain generics, they are appended automatically",
        ));
    }

    Ok(path)
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Attributes applied on a field.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `#[inspect(skip)]`
    pub skip: bool,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(INSPECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    res.skip = true;
                    Ok(())
                } else if meta.path.is_ident("type_path") {
                    Err(meta.error("`type_path` can only be applied to the type"))
                } else {
                    Err(meta.error("unsupported inspect attribute, expected `skip`"))
                }
            })?;
        }

        Ok(res)
    }
}
