use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::any::TypeId;
use std::collections::HashMap;
use std::hash::RandomState;

use crate::Inspect;
use crate::hash::{FixedHashState, hashbrown};
use crate::impls::{GenericTypePathCell, concat};
use crate::info::{Kind, TypePath};
use crate::ops::{InspectRef, Map};

// -----------------------------------------------------------------------------
// Hash states

impl TypePath for RandomState {
    #[inline]
    fn type_path() -> &'static str {
        "std::hash::RandomState"
    }

    #[inline]
    fn type_name() -> &'static str {
        "RandomState"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("std::hash")
    }
}

impl TypePath for FixedHashState {
    #[inline]
    fn type_path() -> &'static str {
        "vc_inspect::hash::FixedHashState"
    }

    #[inline]
    fn type_name() -> &'static str {
        "FixedHashState"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("vc_inspect::hash")
    }
}

// -----------------------------------------------------------------------------
// Maps

macro_rules! impl_map_inspect {
    ($ty:ty $(, $state:ident)?) => {
        impl<K, V $(, $state)?> Inspect for $ty
        where
            K: Inspect + TypePath,
            V: Inspect + TypePath,
            $($state: TypePath,)?
        {
            #[inline]
            fn inspect_kind(&self) -> Kind {
                Kind::Map
            }

            #[inline]
            fn static_kind() -> Option<Kind> {
                Some(Kind::Map)
            }

            #[inline]
            fn inspect_ref(&self) -> InspectRef<'_> {
                InspectRef::Map(self)
            }
        }

        impl<K, V $(, $state)?> Map for $ty
        where
            K: Inspect + TypePath,
            V: Inspect + TypePath,
            $($state: TypePath,)?
        {
            #[inline]
            fn len(&self) -> usize {
                <$ty>::len(self)
            }

            #[inline]
            fn key_kind(&self) -> Option<Kind> {
                K::static_kind()
            }

            fn iter_entries(&self) -> Box<dyn Iterator<Item = (&dyn Inspect, &dyn Inspect)> + '_> {
                Box::new(
                    <$ty>::iter(self).map(|(key, value)| (key as &dyn Inspect, value as &dyn Inspect)),
                )
            }
        }
    };
}

impl<K: TypePath, V: TypePath, S: TypePath> TypePath for HashMap<K, V, S> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            // The default state is left out, as in the written type.
            if TypeId::of::<S>() == TypeId::of::<RandomState>() {
                concat(&["std::collections::HashMap<", K::type_path(), ", ", V::type_path(), ">"])
            } else {
                concat(&[
                    "std::collections::HashMap<",
                    K::type_path(),
                    ", ",
                    V::type_path(),
                    ", ",
                    S::type_path(),
                    ">",
                ])
            }
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            if TypeId::of::<S>() == TypeId::of::<RandomState>() {
                concat(&["HashMap<", K::type_name(), ", ", V::type_name(), ">"])
            } else {
                concat(&["HashMap<", K::type_name(), ", ", V::type_name(), ", ", S::type_name(), ">"])
            }
        })
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("std::collections")
    }
}

impl<K: TypePath, V: TypePath> TypePath for BTreeMap<K, V> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&["alloc::collections::BTreeMap<", K::type_path(), ", ", V::type_path(), ">"])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["BTreeMap<", K::type_name(), ", ", V::type_name(), ">"]))
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::collections")
    }
}

impl<K: TypePath, V: TypePath, S: TypePath> TypePath for hashbrown::HashMap<K, V, S> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&[
                "hashbrown::HashMap<",
                K::type_path(),
                ", ",
                V::type_path(),
                ", ",
                S::type_path(),
                ">",
            ])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&["HashMap<", K::type_name(), ", ", V::type_name(), ", ", S::type_name(), ">"])
        })
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("hashbrown")
    }
}

impl_map_inspect!(HashMap<K, V, S>, S);
impl_map_inspect!(BTreeMap<K, V>);
impl_map_inspect!(hashbrown::HashMap<K, V, S>, S);

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use crate::hash;
    use crate::info::{Kind, TypePath};
    use crate::ops::Scalar;
    use crate::{Structure, ValueRef};

    #[test]
    fn map_paths() {
        assert_eq!(
            <HashMap<String, u8>>::type_path(),
            "std::collections::HashMap<alloc::string::String, u8>"
        );
        assert_eq!(
            <hash::HashMap<u8, u8>>::type_name(),
            "HashMap<u8, u8, FixedHashState>"
        );
        assert_eq!(<BTreeMap<u8, bool>>::type_name(), "BTreeMap<u8, bool>");
    }

    #[test]
    fn entries_follow_map_order() {
        let mut map = BTreeMap::new();
        map.insert(2_u8, "two");
        map.insert(1_u8, "one");

        let handle = ValueRef::new(&map);
        assert_eq!(handle.kind(), Kind::Map);
        assert_eq!(handle.len(), Some(2));

        let Structure::Entries(entries) = handle.structure() else {
            panic!("expected entries");
        };
        let keys: Vec<_> = entries.iter().map(|(key, _)| key.scalar()).collect();
        assert_eq!(keys, [Some(Scalar::Uint(1)), Some(Scalar::Uint(2))]);
        assert_eq!(entries[0].1.scalar(), Some(Scalar::Str("one")));
    }

    #[test]
    fn hashed_maps_are_maps() {
        let mut std_map = HashMap::new();
        std_map.insert(String::from("a"), 1_i32);
        let mut fixed = hash::HashMap::default();
        fixed.insert(true, 'x');

        assert_eq!(ValueRef::new(&std_map).kind(), Kind::Map);
        assert_eq!(ValueRef::new(&fixed).len(), Some(1));
    }
}
