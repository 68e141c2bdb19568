//! Arrays are inspected as [`Kind::Array`], every other contiguous sequence
//! as [`Kind::Slice`].
//!
//! `[T]` itself cannot be turned into a `&dyn List`, so `Box<[T]>` and
//! `&'static [T]` are inspected directly as slices instead of going through
//! the pointer impls.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::Inspect;
use crate::impls::{GenericTypePathCell, concat};
use crate::info::{Kind, TypePath};
use crate::ops::{InspectRef, List};

// -----------------------------------------------------------------------------
// [T] and [T; N]

impl<T: TypePath> TypePath for [T] {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["[", T::type_path(), "]"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["[", T::type_name(), "]"]))
    }
}

impl<T: TypePath, const N: usize> TypePath for [T; N] {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&["[", T::type_path(), "; ", N.to_string().as_str(), "]"])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&["[", T::type_name(), "; ", N.to_string().as_str(), "]"])
        })
    }
}

impl<T: Inspect + TypePath, const N: usize> Inspect for [T; N] {
    #[inline]
    fn inspect_kind(&self) -> Kind {
        Kind::Array
    }

    #[inline]
    fn static_kind() -> Option<Kind> {
        Some(Kind::Array)
    }

    #[inline]
    fn inspect_ref(&self) -> InspectRef<'_> {
        InspectRef::List(self)
    }
}

impl<T: Inspect + TypePath, const N: usize> List for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Inspect> {
        <[T]>::get(self, index).map(|value| value as &dyn Inspect)
    }
}

// -----------------------------------------------------------------------------
// Slices

impl<T: TypePath> TypePath for Vec<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::vec::Vec<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Vec<", T::type_name(), ">"]))
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::vec")
    }
}

impl<T: TypePath> TypePath for VecDeque<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&["alloc::collections::VecDeque<", T::type_path(), ">"])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["VecDeque<", T::type_name(), ">"]))
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::collections")
    }
}

// `Box<[T]>` and `&'static [T]` take their paths from the pointer impls.
macro_rules! impl_slice {
    ($ty:ty, len: |$len_this:ident| $len:expr, get: |$get_this:ident, $index:ident| $get:expr $(,)?) => {
        impl<T: Inspect + TypePath> Inspect for $ty {
            #[inline]
            fn inspect_kind(&self) -> Kind {
                Kind::Slice
            }

            #[inline]
            fn static_kind() -> Option<Kind> {
                Some(Kind::Slice)
            }

            #[inline]
            fn inspect_ref(&self) -> InspectRef<'_> {
                InspectRef::List(self)
            }
        }

        impl<T: Inspect + TypePath> List for $ty {
            #[inline]
            fn len(&self) -> usize {
                let $len_this = self;
                $len
            }

            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Inspect> {
                let ($get_this, $index) = (self, index);
                $get.map(|value| value as &dyn Inspect)
            }
        }
    };
}

impl_slice!(
    Vec<T>,
    len: |this| <[T]>::len(this),
    get: |this, index| <[T]>::get(this, index),
);

impl_slice!(
    VecDeque<T>,
    len: |this| VecDeque::len(this),
    get: |this, index| VecDeque::get(this, index),
);

impl_slice!(
    Box<[T]>,
    len: |this| <[T]>::len(this),
    get: |this, index| <[T]>::get(this, index),
);

impl_slice!(
    &'static [T],
    len: |this| <[T]>::len(this),
    get: |this, index| <[T]>::get(this, index),
);
