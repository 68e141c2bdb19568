use alloc::boxed::Box;

use crate::Inspect;
use crate::info::Kind;

// -----------------------------------------------------------------------------
// Map trait

/// Type-erased access to the entries of a map.
///
/// Entries are visited in the map's own iteration order: sorted for
/// `BTreeMap`, unspecified for hashed maps.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_inspect::info::Kind;
/// use vc_inspect::ops::Map;
///
/// let mut map = BTreeMap::new();
/// map.insert(1_u8, "one");
/// map.insert(2_u8, "two");
///
/// assert_eq!(Map::len(&map), 2);
/// assert_eq!(map.iter_entries().count(), 2);
///
/// let empty: BTreeMap<(u8, u8), &str> = BTreeMap::new();
/// assert_eq!(empty.key_kind(), Some(Kind::Struct));
/// ```
pub trait Map: Inspect {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns the kind of the keys, if it is known without an entry.
    #[inline]
    fn key_kind(&self) -> Option<Kind> {
        None
    }

    /// Returns an iterator over `(key, value)` pairs.
    fn iter_entries(&self) -> Box<dyn Iterator<Item = (&dyn Inspect, &dyn Inspect)> + '_>;

    /// Returns `true` if the map contains no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
