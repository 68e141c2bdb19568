use core::fmt;

// -----------------------------------------------------------------------------
// Kind

/// The coarse runtime category of an inspected value.
///
/// The discriminants form a fixed table that is part of the snapshot wire
/// format (the `"k"` field), so they must never be reordered:
///
/// | code | kind | code | kind | code | kind |
/// |-----:|------|-----:|------|-----:|------|
/// | 0 | invalid | 9 | uint16 | 18 | chan |
/// | 1 | bool | 10 | uint32 | 19 | func |
/// | 2 | int | 11 | uint64 | 20 | interface |
/// | 3 | int8 | 12 | uintptr | 21 | map |
/// | 4 | int16 | 13 | float32 | 22 | ptr |
/// | 5 | int32 | 14 | float64 | 23 | slice |
/// | 6 | int64 | 15 | complex64 | 24 | string |
/// | 7 | uint | 16 | complex128 | 25 | struct |
/// | 8 | uint8 | 17 | array | 26 | unsafe-pointer |
///
/// # Examples
///
/// ```
/// use vc_inspect::info::Kind;
///
/// assert_eq!(Kind::Slice.code(), 23);
/// assert_eq!(Kind::from_code(25), Some(Kind::Struct));
/// assert_eq!(Kind::from_code(27), None);
/// assert_eq!(Kind::UnsafePointer.to_string(), "unsafe-pointer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Kind {
    Invalid = 0,
    Bool = 1,
    Int = 2,
    Int8 = 3,
    Int16 = 4,
    Int32 = 5,
    Int64 = 6,
    Uint = 7,
    Uint8 = 8,
    Uint16 = 9,
    Uint32 = 10,
    Uint64 = 11,
    Uintptr = 12,
    Float32 = 13,
    Float64 = 14,
    Complex64 = 15,
    Complex128 = 16,
    Array = 17,
    Chan = 18,
    Func = 19,
    Interface = 20,
    Map = 21,
    Ptr = 22,
    Slice = 23,
    String = 24,
    Struct = 25,
    UnsafePointer = 26,
}

const KINDS: [Kind; 27] = [
    Kind::Invalid,
    Kind::Bool,
    Kind::Int,
    Kind::Int8,
    Kind::Int16,
    Kind::Int32,
    Kind::Int64,
    Kind::Uint,
    Kind::Uint8,
    Kind::Uint16,
    Kind::Uint32,
    Kind::Uint64,
    Kind::Uintptr,
    Kind::Float32,
    Kind::Float64,
    Kind::Complex64,
    Kind::Complex128,
    Kind::Array,
    Kind::Chan,
    Kind::Func,
    Kind::Interface,
    Kind::Map,
    Kind::Ptr,
    Kind::Slice,
    Kind::String,
    Kind::Struct,
    Kind::UnsafePointer,
];

impl Kind {
    /// Returns the wire code of this kind.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks a kind up by its wire code.
    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        if (code as usize) < KINDS.len() {
            Some(KINDS[code as usize])
        } else {
            None
        }
    }

    /// Returns `true` for the indirection kinds (`ptr` and `interface`).
    ///
    /// Indirections are stripped before a value is encoded, so these two
    /// codes never appear in a snapshot.
    #[inline]
    pub const fn is_indirect(self) -> bool {
        matches!(self, Self::Ptr | Self::Interface)
    }

    /// Returns `true` for the kinds that carry a length.
    #[inline]
    pub const fn is_countable(self) -> bool {
        matches!(self, Self::Array | Self::Chan | Self::Map | Self::Slice)
    }

    /// Returns `true` for the kinds that may hold no target at all.
    #[inline]
    pub const fn is_nilable(self) -> bool {
        matches!(self, Self::Interface | Self::Map | Self::Ptr | Self::Slice)
    }

    /// Returns `true` for the kinds whose content is a single literal.
    #[inline]
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::Int
                | Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Uint
                | Self::Uint8
                | Self::Uint16
                | Self::Uint32
                | Self::Uint64
                | Self::Uintptr
                | Self::Float32
                | Self::Float64
                | Self::String
        )
    }

    /// Returns the lower-case name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uintptr => "uintptr",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::Array => "array",
            Self::Chan => "chan",
            Self::Func => "func",
            Self::Interface => "interface",
            Self::Map => "map",
            Self::Ptr => "ptr",
            Self::Slice => "slice",
            Self::String => "string",
            Self::Struct => "struct",
            Self::UnsafePointer => "unsafe-pointer",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{KINDS, Kind};

    #[test]
    fn codes_match_table_position() {
        for (index, kind) in KINDS.iter().enumerate() {
            assert_eq!(kind.code() as usize, index);
            assert_eq!(Kind::from_code(index as u8), Some(*kind));
        }
    }

    #[test]
    fn classification() {
        assert!(Kind::Ptr.is_indirect());
        assert!(Kind::Interface.is_indirect());
        assert!(!Kind::Struct.is_indirect());

        assert!(Kind::Chan.is_countable());
        assert!(!Kind::String.is_countable());

        assert!(Kind::String.is_scalar());
        assert!(Kind::Uintptr.is_scalar());
        assert!(!Kind::Complex64.is_scalar());
        assert!(!Kind::Func.is_scalar());

        assert!(Kind::Map.is_nilable());
        assert!(!Kind::Array.is_nilable());
    }
}
