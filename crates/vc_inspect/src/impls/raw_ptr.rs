//! Raw pointers are inspected as [`Kind::UnsafePointer`] and never
//! dereferenced.

use core::ptr::NonNull;

use crate::Inspect;
use crate::impls::{GenericTypePathCell, concat};
use crate::info::{Kind, TypePath};
use crate::ops::InspectRef;

macro_rules! impl_raw_pointer {
    ($ty:ty, $prefix:literal) => {
        impl<T: TypePath + ?Sized> TypePath for $ty {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| concat(&[$prefix, T::type_path()]))
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| concat(&[$prefix, T::type_name()]))
            }
        }

        impl<T: TypePath + ?Sized> Inspect for $ty {
            #[inline]
            fn inspect_kind(&self) -> Kind {
                Kind::UnsafePointer
            }

            #[inline]
            fn static_kind() -> Option<Kind> {
                Some(Kind::UnsafePointer)
            }

            #[inline]
            fn inspect_ref(&self) -> InspectRef<'_> {
                InspectRef::Opaque
            }
        }
    };
}

impl_raw_pointer!(*const T, "*const ");
impl_raw_pointer!(*mut T, "*mut ");

impl<T: TypePath + ?Sized> TypePath for NonNull<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["core::ptr::NonNull<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["NonNull<", T::type_name(), ">"]))
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("core::ptr")
    }
}

impl<T: TypePath + ?Sized> Inspect for NonNull<T> {
    #[inline]
    fn inspect_kind(&self) -> Kind {
        Kind::UnsafePointer
    }

    #[inline]
    fn static_kind() -> Option<Kind> {
        Some(Kind::UnsafePointer)
    }

    #[inline]
    fn inspect_ref(&self) -> InspectRef<'_> {
        InspectRef::Opaque
    }
}

#[cfg(test)]
mod tests {
    use core::ptr::{self, NonNull};

    use crate::ValueRef;
    use crate::info::{Kind, TypePath};

    #[test]
    fn raw_pointers_are_not_followed() {
        let value = 5_u8;
        let raw = ptr::from_ref(&value);
        let null: *mut u8 = ptr::null_mut();
        let non_null = NonNull::from(&value);

        assert_eq!(ValueRef::new(&raw).kind(), Kind::UnsafePointer);
        assert_eq!(ValueRef::new(&null).kind(), Kind::UnsafePointer);
        assert_eq!(ValueRef::new(&non_null).kind(), Kind::UnsafePointer);
        assert_eq!(<*mut str>::type_name(), "*mut str");
        assert_eq!(<NonNull<u8>>::type_path(), "core::ptr::NonNull<u8>");
    }
}
