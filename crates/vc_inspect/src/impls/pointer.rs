//! Owning and shared pointers are inspected as [`Kind::Ptr`] and always
//! hold a target.
//!
//! Pointers to `str` and `[T]` cannot hand out a `&dyn Inspect` to their
//! target; they are inspected as strings and slices in their own modules.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;

use crate::Inspect;
use crate::impls::{GenericTypePathCell, concat};
use crate::info::{Kind, TypePath};
use crate::ops::InspectRef;

macro_rules! impl_pointer {
    ($ty:ident, $module:literal) => {
        impl<T: TypePath + ?Sized> TypePath for $ty<T> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[$module, "::", stringify!($ty), "<", T::type_path(), ">"])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| concat(&[stringify!($ty), "<", T::type_name(), ">"]))
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl<T: Inspect + TypePath> Inspect for $ty<T> {
            #[inline]
            fn inspect_kind(&self) -> Kind {
                Kind::Ptr
            }

            #[inline]
            fn static_kind() -> Option<Kind> {
                T::static_kind()
            }

            #[inline]
            fn inspect_ref(&self) -> InspectRef<'_> {
                InspectRef::Indirect(Some(&**self))
            }
        }
    };
}

impl_pointer!(Box, "alloc::boxed");
impl_pointer!(Rc, "alloc::rc");
impl_pointer!(Arc, "alloc::sync");

// -----------------------------------------------------------------------------
// &'static T

impl<T: TypePath + ?Sized> TypePath for &'static T {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["&", T::type_path()]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["&", T::type_name()]))
    }
}

impl<T: Inspect + TypePath> Inspect for &'static T {
    #[inline]
    fn inspect_kind(&self) -> Kind {
        Kind::Ptr
    }

    #[inline]
    fn static_kind() -> Option<Kind> {
        T::static_kind()
    }

    #[inline]
    fn inspect_ref(&self) -> InspectRef<'_> {
        InspectRef::Indirect(Some(*self))
    }
}

// -----------------------------------------------------------------------------
// Box<dyn Inspect>

impl TypePath for Box<dyn Inspect> {
    #[inline]
    fn type_path() -> &'static str {
        "alloc::boxed::Box<dyn vc_inspect::Inspect>"
    }

    #[inline]
    fn type_name() -> &'static str {
        "Box<dyn Inspect>"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::boxed")
    }
}

impl Inspect for Box<dyn Inspect> {
    #[inline]
    fn inspect_kind(&self) -> Kind {
        Kind::Ptr
    }

    #[inline]
    fn inspect_ref(&self) -> InspectRef<'_> {
        InspectRef::Indirect(Some(&**self))
    }
}
