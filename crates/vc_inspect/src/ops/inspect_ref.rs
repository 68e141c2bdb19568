use core::fmt;

use crate::Inspect;
use crate::ops::{List, Map, Scalar, Struct};

// -----------------------------------------------------------------------------
// InspectRef

/// An immutable view on the content of an [`Inspect`] value.
///
/// The variant must agree with [`Inspect::inspect_kind`]:
///
/// | kind | variant |
/// |------|---------|
/// | bool, integers, floats, string | [`Scalar`](Self::Scalar) |
/// | ptr, interface | [`Indirect`](Self::Indirect) |
/// | struct | [`Struct`](Self::Struct) |
/// | slice, array | [`List`](Self::List) |
/// | map | [`Map`](Self::Map) |
/// | chan | [`Channel`](Self::Channel) |
/// | func, complex, unsafe-pointer | [`Opaque`](Self::Opaque) |
pub enum InspectRef<'a> {
    /// A single literal value.
    Scalar(Scalar<'a>),
    /// A pointer or optional holder; `None` is nil.
    Indirect(Option<&'a dyn Inspect>),
    /// A struct-like value with named fields.
    Struct(&'a dyn Struct),
    /// A slice or an array.
    List(&'a dyn List),
    /// A map.
    Map(&'a dyn Map),
    /// A channel, only its buffered length is observable.
    Channel { len: usize },
    /// A value whose content cannot be inspected.
    Opaque,
}

impl InspectRef<'_> {
    /// Returns the name of the variant, for diagnostics.
    pub const fn variant(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "Scalar",
            Self::Indirect(_) => "Indirect",
            Self::Struct(_) => "Struct",
            Self::List(_) => "List",
            Self::Map(_) => "Map",
            Self::Channel { .. } => "Channel",
            Self::Opaque => "Opaque",
        }
    }
}

impl fmt::Debug for InspectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => f.debug_tuple("Scalar").field(scalar).finish(),
            Self::Indirect(target) => f
                .debug_tuple("Indirect")
                .field(&target.map(|t| t.inspect_type_path()))
                .finish(),
            Self::Struct(s) => f
                .debug_struct("Struct")
                .field("type_path", &s.inspect_type_path())
                .field("field_len", &s.field_len())
                .finish(),
            Self::List(l) => f
                .debug_struct("List")
                .field("type_path", &l.inspect_type_path())
                .field("len", &l.len())
                .finish(),
            Self::Map(m) => f
                .debug_struct("Map")
                .field("type_path", &m.inspect_type_path())
                .field("len", &m.len())
                .finish(),
            Self::Channel { len } => f.debug_struct("Channel").field("len", len).finish(),
            Self::Opaque => f.write_str("Opaque"),
        }
    }
}
