//! Runtime configuration of a serialization.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
// Depth

/// The maximal depth at which entries still carry their content.
///
/// The root entry has depth 0, the children of an entry at depth `d` have
/// depth `d + 1`. Entries at depth `d >= bound` only carry their kind, type
/// and length.
///
/// # Examples
///
/// ```
/// use vc_flatten::Depth;
///
/// assert_eq!(Depth::from(-1), Depth::Unlimited);
/// assert_eq!(Depth::from(2), Depth::Bounded(2));
///
/// assert!(Depth::Bounded(2).allows_content(1));
/// assert!(!Depth::Bounded(2).allows_content(2));
/// assert!(Depth::Unlimited.allows_content(usize::MAX));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "i64", into = "i64"))]
pub enum Depth {
    #[default]
    Unlimited,
    Bounded(usize),
}

impl Depth {
    /// Returns `true` if an entry at `depth` carries its content.
    #[inline]
    pub const fn allows_content(self, depth: usize) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Bounded(bound) => depth < bound,
        }
    }

    #[inline]
    pub const fn is_unlimited(self) -> bool {
        matches!(self, Self::Unlimited)
    }
}

/// Negative values mean no limit.
impl From<i64> for Depth {
    fn from(value: i64) -> Self {
        match usize::try_from(value) {
            Ok(bound) => Self::Bounded(bound),
            Err(_) if value < 0 => Self::Unlimited,
            Err(_) => Self::Bounded(usize::MAX),
        }
    }
}

impl From<Depth> for i64 {
    fn from(value: Depth) -> Self {
        match value {
            Depth::Unlimited => -1,
            Depth::Bounded(bound) => i64::try_from(bound).unwrap_or(i64::MAX),
        }
    }
}

// -----------------------------------------------------------------------------
// CyclePolicy

/// How references to an already serialized target are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CyclePolicy {
    /// Every reference becomes an independent entry.
    ///
    /// A cyclic graph only terminates under a finite [`Depth`].
    #[default]
    Duplicate,
    /// A reference to a target that already has an entry reuses its id.
    ///
    /// Targets are identified by address and type path, see
    /// [`Identity`](vc_inspect::Identity). Cyclic graphs terminate under
    /// any depth.
    Reuse,
}

// -----------------------------------------------------------------------------
// SerializeOptions

/// The options of a [`Serializer`](crate::Serializer).
///
/// With the `serde` feature, the options can be loaded from a config file:
///
/// ```ignore
/// { "max_depth": 3, "cycle_policy": "reuse" }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SerializeOptions {
    pub max_depth: Depth,
    pub cycle_policy: CyclePolicy,
}

impl SerializeOptions {
    #[inline]
    pub const fn new(max_depth: Depth, cycle_policy: CyclePolicy) -> Self {
        Self {
            max_depth,
            cycle_policy,
        }
    }
}
