//! Holders that may be empty are inspected as [`Kind::Interface`].

use core::cell::OnceCell;
use std::sync::OnceLock;

use crate::Inspect;
use crate::impls::{GenericTypePathCell, concat};
use crate::info::{Kind, TypePath};
use crate::ops::InspectRef;

macro_rules! impl_holder {
    ($ty:ident, $module:literal, |$this:ident| $target:expr) => {
        impl<T: TypePath> TypePath for $ty<T> {
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
                Kind::Interface
            }

            #[inline]
            fn static_kind() -> Option<Kind> {
                T::static_kind()
            }

            #[inline]
            fn inspect_ref(&self) -> InspectRef<'_> {
                let $this = self;
                InspectRef::Indirect($target.map(|value| value as &dyn Inspect))
            }
        }
    };
}

impl_holder!(Option, "core::option", |this| this.as_ref());
impl_holder!(OnceCell, "core::cell", |this| this.get());
impl_holder!(OnceLock, "std::sync", |this| this.get());
