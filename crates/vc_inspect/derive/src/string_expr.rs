use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::LitStr;

/// A string expression in generated code.
#[derive(Clone)]
pub(crate) enum StringExpr {
    /// A string that is valid at compile time.
    ///
    /// Usually a literal, but `module_path!()` and `concat!(...)` also count.
    Const(TokenStream),
    /// A `&'static str` computed at runtime, e.g. `<T as TypePath>::type_path()`.
    Borrowed(TokenStream),
    /// An owned `String`.
    Owned(TokenStream),
}

impl StringExpr {
    pub fn from_lit(lit: &LitStr) -> Self {
        Self::Const(lit.to_token_stream())
    }

    pub fn from_str(string: &str) -> Self {
        Self::Const(string.to_token_stream())
    }

    fn is_const(&self) -> bool {
        matches!(self, Self::Const(_))
    }

    /// Returns tokens evaluating to a `&str`.
    pub fn into_borrowed(self) -> TokenStream {
        match self {
            Self::Const(tokens) | Self::Borrowed(tokens) => tokens,
            Self::Owned(owned) => quote! {
                &#owned as &str
            },
        }
    }

    /// Returns tokens evaluating to a `String`.
    pub fn into_owned(self, vc_inspect_path: &syn::Path) -> TokenStream {
        match self {
            Self::Const(tokens) | Self::Borrowed(tokens) => {
                let macro_utils_ = crate::path::macro_utils_(vc_inspect_path);
                quote! {
                    #macro_utils_::ToString::to_string(#tokens)
                }
            }
            Self::Owned(owned) => owned,
        }
    }

    /// Concatenates the expressions.
    ///
    /// Constant parts only are merged with `concat!`, anything else goes
    /// through `impls::concat` at runtime.
    pub fn from_iter<T: IntoIterator<Item = StringExpr>>(
        iter: T,
        vc_inspect_path: &syn::Path,
    ) -> Self {
        let exprs: Vec<StringExpr> = iter.into_iter().collect();

        if exprs.iter().all(StringExpr::is_const) {
            let inner = exprs.into_iter().map(StringExpr::into_borrowed);
            Self::Const(quote! {
                ::core::concat!( #(#inner),* )
            })
        } else {
            let macro_utils_ = crate::path::macro_utils_(vc_inspect_path);
            let inner = exprs.into_iter().map(StringExpr::into_borrowed);
            Self::Owned(quote! {
                #macro_utils_::__concat(&[ #(#inner),* ])
            })
        }
    }
}
