//! Derive macro for `vc_inspect`.
//!
//! - [`Inspect`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static INSPECT_ATTRIBUTE_NAME: &str = "inspect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod string_expr;

// -----------------------------------------------------------------------------
// Macros

/// # Inspect Derivation
///
/// `#[derive(Inspect)]` implements the following traits:
///
/// - `TypePath`
/// - `Inspect`, reporting `Kind::Struct`
/// - `Struct`
///
/// Structs, tuple structs and unit structs expose their fields in
/// declaration order. Tuple struct fields are named after their index
/// (`"0"`, `"1"`, ...).
///
/// Enums expose the fields of their active variant, and report the variant
/// through `Inspect::variant_name`.
///
/// Unions and types with lifetime parameters are rejected: inspected values
/// must be `'static`.
///
/// ## Custom Type Path
///
/// By default, the type path is `module_path!()` joined with the type name.
/// The attribute overrides it with a path that stays stable when the code
/// moves around:
///
/// ```rust, ignore
/// #[derive(Inspect)]
/// #[inspect(type_path = "my_crate::foo::Foo")]
/// struct Foo { /* ... */ }
/// ```
///
/// Generic parameters are appended automatically.
///
/// This attribute can only be applied at the type level.
///
/// ## Skipping Fields
///
/// ```rust, ignore
/// #[derive(Inspect)]
/// struct Cache {
///     entries: Vec<u64>,
///     #[inspect(skip)]
///     lock: std::sync::Mutex<()>,
/// }
/// ```
///
/// A skipped field is invisible to every inspection API, and its type does
/// not need to implement `Inspect`.
///
/// This attribute can only be applied to fields.
#[proc_macro_derive(Inspect, attributes(inspect))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let derive = match derive_data::InspectDerive::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let inspect_impls = match &derive {
        derive_data::InspectDerive::Struct(info) => impls::impl_struct(info),
        derive_data::InspectDerive::Enum(info) => impls::impl_enum(info),
    };

    TokenStream::from(quote! {
        const _: () = {
            #inspect_impls
        };
    })
}
