//! Static type information: the [`Kind`] table and [`TypePath`] naming.

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod type_path;

// -----------------------------------------------------------------------------
// Exports

pub use kind::Kind;
pub use type_path::{DynamicTypePath, TypePath};
