//! Items referenced by the code `#[derive(Inspect)]` generates.
//!
//! Not part of the public API.

#[doc(hidden)]
pub mod macro_utils {
    pub use crate::impls::concat as __concat;
    pub use ::alloc::string::ToString;
    pub use ::core::option::Option::{self, None, Some};
}
