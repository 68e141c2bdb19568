//! Tuples with a field count of 6 or less are inspected as structs whose
//! fields are named after their index.

use alloc::string::String;

use crate::Inspect;
use crate::impls::{GenericTypePathCell, concat};
use crate::info::{Kind, TypePath};
use crate::ops::{InspectRef, Struct};

const FIELD_NAMES: [&str; 6] = ["0", "1", "2", "3", "4", "5"];

impl TypePath for () {
    #[inline]
    fn type_path() -> &'static str {
        "()"
    }

    #[inline]
    fn type_name() -> &'static str {
        "()"
    }
}

impl Inspect for () {
    #[inline]
    fn inspect_kind(&self) -> Kind {
        Kind::Struct
    }

    #[inline]
    fn static_kind() -> Option<Kind> {
        Some(Kind::Struct)
    }

    #[inline]
    fn inspect_ref(&self) -> InspectRef<'_> {
        InspectRef::Struct(self)
    }
}

impl Struct for () {
    #[inline]
    fn field_len(&self) -> usize {
        0
    }

    #[inline]
    fn name_at(&self, _index: usize) -> Option<&str> {
        None
    }

    #[inline]
    fn field_at(&self, _index: usize) -> Option<&dyn Inspect> {
        None
    }
}

macro_rules! impl_tuple {
    ($len:literal: [$($index:tt: $param:ident),+]) => {
        impl<$($param: TypePath),+> TypePath for ($($param,)+) {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    let parts = [$($param::type_path()),+];
                    tuple_name(&parts)
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    let parts = [$($param::type_name()),+];
                    tuple_name(&parts)
                })
            }
        }

        impl<$($param: Inspect + TypePath),+> Inspect for ($($param,)+) {
            #[inline]
            fn inspect_kind(&self) -> Kind {
                Kind::Struct
            }

            #[inline]
            fn static_kind() -> Option<Kind> {
                Some(Kind::Struct)
            }

            #[inline]
            fn inspect_ref(&self) -> InspectRef<'_> {
                InspectRef::Struct(self)
            }
        }

        impl<$($param: Inspect + TypePath),+> Struct for ($($param,)+) {
            #[inline]
            fn field_len(&self) -> usize {
                $len
            }

            #[inline]
            fn name_at(&self, index: usize) -> Option<&str> {
                if index < $len { Some(FIELD_NAMES[index]) } else { None }
            }

            fn field_at(&self, index: usize) -> Option<&dyn Inspect> {
                match index {
                    $($index => Some(&self.$index),)+
                    _ => None,
                }
            }
        }
    };
}

/// `(A,)` for a single element, `(A, B, ...)` otherwise.
fn tuple_name(parts: &[&str]) -> String {
    match parts {
        [single] => concat(&["(", *single, ",)"]),
        _ => concat(&["(", parts.join(", ").as_str(), ")"]),
    }
}

impl_tuple!(1: [0: P0]);
impl_tuple!(2: [0: P0, 1: P1]);
impl_tuple!(3: [0: P0, 1: P1, 2: P2]);
impl_tuple!(4: [0: P0, 1: P1, 2: P2, 3: P3]);
impl_tuple!(5: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4]);
impl_tuple!(6: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5]);

#[cfg(test)]
mod tests {
    use crate::ValueRef;
    use crate::info::{Kind, TypePath};
    use crate::ops::{Scalar, Struct};

    #[test]
    fn tuple_paths() {
        assert_eq!(<(u8,)>::type_path(), "(u8,)");
        assert_eq!(<(u8, String)>::type_name(), "(u8, String)");
        assert_eq!(
            <(u8, (bool, String))>::type_path(),
            "(u8, (bool, alloc::string::String))"
        );
    }

    #[test]
    fn tuples_are_structs() {
        let value = (1_u8, true, 'c');

        assert_eq!(value.field_len(), 3);
        assert_eq!(value.name_at(2), Some("2"));
        assert!(value.name_at(3).is_none());

        let handle = ValueRef::new(&value);
        assert_eq!(handle.kind(), Kind::Struct);
        assert_eq!(
            handle.field("1").and_then(|f| f.scalar()),
            Some(Scalar::Bool(true))
        );
    }

    #[test]
    fn unit_is_an_empty_struct() {
        let handle = ValueRef::new(&());
        assert_eq!(handle.kind(), Kind::Struct);
        assert!(handle.structure().is_empty());
    }
}
