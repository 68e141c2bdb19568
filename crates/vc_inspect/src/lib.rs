#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::vc_inspect::...` paths, which must also resolve
// inside this crate's own tests and doc-tests.
extern crate self as vc_inspect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod inspect;
mod value;

pub mod hash;
pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use inspect::Inspect;
pub use value::{Identity, Structure, TypeName, ValueRef};
pub use vc_inspect_derive as derive;
