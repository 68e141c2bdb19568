//! Static storage of type paths for generic types.
//!
//! Inside a generic function, a `static` item is shared by every
//! instantiation. [`GenericTypePathCell`] therefore keys its content by
//! [`TypeId`], and hands out one leaked string per concrete type.

use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use std::sync::{PoisonError, RwLock};

use crate::hash::{FixedHashState, hashbrown};

// -----------------------------------------------------------------------------
// GenericTypePathCell

/// Container for static storage of type paths with generics.
///
/// ## Example
///
/// ```
/// use vc_inspect::impls::{GenericTypePathCell, concat};
/// use vc_inspect::info::TypePath;
///
/// struct Wrapper<T>(T);
///
/// impl<T: TypePath> TypePath for Wrapper<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| concat(&["demo::Wrapper<", T::type_path(), ">"]))
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| concat(&["Wrapper<", T::type_name(), ">"]))
///     }
/// }
///
/// assert_eq!(<Wrapper<i32>>::type_path(), "demo::Wrapper<i32>");
/// assert_eq!(<Wrapper<Wrapper<u8>>>::type_name(), "Wrapper<Wrapper<u8>>");
/// ```
pub struct GenericTypePathCell(RwLock<hashbrown::HashMap<TypeId, &'static str, FixedHashState>>);

impl GenericTypePathCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(hashbrown::HashMap::with_hasher(FixedHashState)))
    }

    /// Returns the path stored for the type `G`.
    ///
    /// If there is no entry found, a new one will be generated from the given function.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> String) -> &'static str {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> String) -> &'static str {
        match self.get_by_type_id(type_id) {
            Some(path) => path,
            // `f` may need this very cell for a nested instantiation
            // (`Vec<Vec<u8>>`), so it runs before the write lock is taken.
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static str> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, path: String) -> &'static str {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(type_id)
            .or_insert_with(|| Box::leak(path.into_boxed_str()))
    }
}

impl Default for GenericTypePathCell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::GenericTypePathCell;
    use alloc::string::String;

    #[test]
    fn one_entry_per_type() {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();

        let a = CELL.get_or_insert::<u8>(|| String::from("a"));
        let b = CELL.get_or_insert::<u16>(|| String::from("b"));
        let again = CELL.get_or_insert::<u8>(|| String::from("never used"));

        assert_eq!(a, "a");
        assert_eq!(b, "b");
        assert!(core::ptr::eq(a, again));
    }

    #[test]
    fn nested_insertion_does_not_deadlock() {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();

        let outer = CELL.get_or_insert::<(u8,)>(|| {
            let inner = CELL.get_or_insert::<u8>(|| String::from("u8"));
            alloc::format!("({inner},)")
        });

        assert_eq!(outer, "(u8,)");
    }
}
