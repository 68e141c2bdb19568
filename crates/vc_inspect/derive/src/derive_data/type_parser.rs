use quote::{ToTokens, quote};
use syn::{GenericParam, Generics, Ident, LitStr, Path, TypeParam, spanned::Spanned};

use crate::string_expr::StringExpr;

/// The naming of a derived type.
///
/// Local types can use [`module_path!()`](module_path) for their module path,
/// unless a custom path is given through `#[inspect(type_path = "...")]`.
pub(crate) struct TypeParser<'a> {
    ident: &'a Ident,
    custom_path: Option<Path>,
    generics: &'a Generics,
}

impl<'a> TypeParser<'a> {
    pub fn new(ident: &'a Ident, custom_path: Option<Path>, generics: &'a Generics) -> Self {
        Self {
            ident,
            custom_path,
            generics,
        }
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        self.ident
    }

    #[inline]
    pub fn generics(&self) -> &'a Generics {
        self.generics
    }

    /// Whether the `TypePath` implementation depends on generic parameters.
    pub fn impl_with_generic(&self) -> bool {
        self.generics
            .params
            .iter()
            .any(|param| !matches!(param, GenericParam::Lifetime(_)))
    }

    /// The ident used in type names, the last segment of a custom path.
    fn name_ident(&self) -> &Ident {
        self.custom_path
            .as_ref()
            .and_then(|path| path.segments.last())
            .map_or(self.ident, |segment| &segment.ident)
    }

    pub fn module_path(&self) -> StringExpr {
        match &self.custom_path {
            Some(path) => {
                let module = path
                    .segments
                    .iter()
                    .take(path.segments.len().saturating_sub(1))
                    .map(|segment| segment.ident.to_string())
                    .collect::<Vec<_>>()
                    .join("::");
                StringExpr::from_lit(&LitStr::new(&module, path.span()))
            }
            None => StringExpr::Const(quote! {
                ::core::module_path!()
            }),
        }
    }

    fn type_ident(&self) -> StringExpr {
        let ident = self.name_ident();
        StringExpr::from_lit(&LitStr::new(&ident.to_string(), ident.span()))
    }

    /// Joins type and const generics with `", "`.
    ///
    /// `ty_generic_fn` maps each type parameter to its own string.
    fn reduce_generics(
        &self,
        mut ty_generic_fn: impl FnMut(&TypeParam) -> StringExpr,
        vc_inspect_path: &Path,
    ) -> StringExpr {
        let macro_utils_ = crate::path::macro_utils_(vc_inspect_path);

        let mut params = self.generics.params.iter().filter_map(|param| match param {
            GenericParam::Type(type_param) => Some(ty_generic_fn(type_param)),
            GenericParam::Const(const_param) => {
                let ident = &const_param.ident;
                let ty = &const_param.ty;
                Some(StringExpr::Owned(quote! {
                    <#ty as #macro_utils_::ToString>::to_string(&#ident)
                }))
            }
            GenericParam::Lifetime(_) => None,
        });

        let first = params.next().into_iter();

        StringExpr::from_iter(
            first.chain(params.flat_map(|x| [StringExpr::from_str(", "), x])),
            vc_inspect_path,
        )
    }

    /// For `Foo<Vec<u8>>`, this is `"Foo<Vec<u8>>"`.
    pub fn type_name(&self, vc_inspect_path: &Path) -> StringExpr {
        let type_ident = self.type_ident();
        if !self.impl_with_generic() {
            return type_ident;
        }

        let type_path_ = crate::path::type_path_(vc_inspect_path);
        let generics = self.reduce_generics(
            |TypeParam { ident, .. }| {
                StringExpr::Borrowed(quote! {
                    <#ident as #type_path_>::type_name()
                })
            },
            vc_inspect_path,
        );

        StringExpr::from_iter(
            [
                type_ident,
                StringExpr::from_str("<"),
                generics,
                StringExpr::from_str(">"),
            ],
            vc_inspect_path,
        )
    }

    /// For `Foo<Vec<u8>>`, this is `"my_crate::Foo<alloc::vec::Vec<u8>>"`.
    pub fn type_path(&self, vc_inspect_path: &Path) -> StringExpr {
        let prefix = [
            self.module_path(),
            StringExpr::from_str("::"),
            self.type_ident(),
        ];
        if !self.impl_with_generic() {
            return StringExpr::from_iter(prefix, vc_inspect_path);
        }

        let type_path_ = crate::path::type_path_(vc_inspect_path);
        let generics = self.reduce_generics(
            |TypeParam { ident, .. }| {
                StringExpr::Borrowed(quote! {
                    <#ident as #type_path_>::type_path()
                })
            },
            vc_inspect_path,
        );

        StringExpr::from_iter(
            prefix.into_iter().chain([
                StringExpr::from_str("<"),
                generics,
                StringExpr::from_str(">"),
            ]),
            vc_inspect_path,
        )
    }
}

impl core::fmt::Debug for TypeParser<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.ident.to_token_stream(), f)
    }
}
