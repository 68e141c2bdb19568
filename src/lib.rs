#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Modules

pub use vc_flatten as flatten;
pub use vc_inspect as inspect;

// -----------------------------------------------------------------------------
// Exports

pub use vc_flatten::{
    CyclePolicy, Depth, NavigationError, SerializeError, SerializeOptions, Serializer,
};
pub use vc_inspect::derive::Inspect;
pub use vc_inspect::{Inspect, ValueRef};
