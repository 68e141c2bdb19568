#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod options;
mod serializer;

pub mod dict;
pub mod encode;
pub mod navigate;

// -----------------------------------------------------------------------------
// Exports

pub use error::{NavigationError, SerializeError};
pub use options::{CyclePolicy, Depth, SerializeOptions};
pub use serializer::{Serializer, to_string, to_writer};
