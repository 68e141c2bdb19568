//! Views on the content of an inspected value.
//!
//! [`Inspect::inspect_ref`](crate::Inspect::inspect_ref) returns an
//! [`InspectRef`], which is either a [`Scalar`], an indirection, or one of
//! the composite views:
//!
//! - [`Struct`]: ordered, named fields.
//! - [`List`]: ordered, indexed elements (slices and arrays).
//! - [`Map`]: key/value pairs.

// -----------------------------------------------------------------------------
// Modules

mod inspect_ref;
mod list_ops;
mod map_ops;
mod scalar;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use inspect_ref::InspectRef;
pub use list_ops::{List, ListIter};
pub use map_ops::Map;
pub use scalar::Scalar;
pub use struct_ops::{FieldIter, Struct};
