//! `async_channel` endpoints are inspected as [`Kind::Chan`].
//!
//! Only the number of buffered messages is observable.

use async_channel::{Receiver, Sender};

use crate::Inspect;
use crate::impls::{GenericTypePathCell, concat};
use crate::info::{Kind, TypePath};
use crate::ops::InspectRef;

macro_rules! impl_channel {
    ($ty:ident) => {
        impl<T: TypePath> TypePath for $ty<T> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&["async_channel::", stringify!($ty), "<", T::type_path(), ">"])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| concat(&[stringify!($ty), "<", T::type_name(), ">"]))
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some("async_channel")
            }
        }

        impl<T: TypePath> Inspect for $ty<T> {
            #[inline]
            fn inspect_kind(&self) -> Kind {
                Kind::Chan
            }

            #[inline]
            fn static_kind() -> Option<Kind> {
                Some(Kind::Chan)
            }

            #[inline]
            fn inspect_ref(&self) -> InspectRef<'_> {
                InspectRef::Channel { len: self.len() }
            }
        }
    };
}

impl_channel!(Sender);
impl_channel!(Receiver);
