//! Function pointers with 4 parameters or less, inspected as [`Kind::Func`].
//!
//! Their content is opaque.

use crate::Inspect;
use crate::impls::{GenericTypePathCell, concat};
use crate::info::{Kind, TypePath};
use crate::ops::InspectRef;

macro_rules! impl_fn_pointer {
    ($($param:ident),*) => {
        impl<$($param: TypePath,)* R: TypePath> TypePath for fn($($param),*) -> R {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    let params: &[&str] = &[$($param::type_path()),*];
                    concat(&["fn(", params.join(", ").as_str(), ") -> ", R::type_path()])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    let params: &[&str] = &[$($param::type_name()),*];
                    concat(&["fn(", params.join(", ").as_str(), ") -> ", R::type_name()])
                })
            }
        }

        impl<$($param: TypePath,)* R: TypePath> Inspect for fn($($param),*) -> R {
            #[inline]
            fn inspect_kind(&self) -> Kind {
                Kind::Func
            }

            #[inline]
            fn static_kind() -> Option<Kind> {
                Some(Kind::Func)
            }

            #[inline]
            fn inspect_ref(&self) -> InspectRef<'_> {
                InspectRef::Opaque
            }
        }
    };
}

impl_fn_pointer!();
impl_fn_pointer!(P0);
impl_fn_pointer!(P0, P1);
impl_fn_pointer!(P0, P1, P2);
impl_fn_pointer!(P0, P1, P2, P3);

#[cfg(test)]
mod tests {
    use crate::ValueRef;
    use crate::info::{Kind, TypePath};
    use crate::ops::InspectRef;

    fn double(x: u32) -> u32 {
        x * 2
    }

    #[test]
    fn function_pointers_are_opaque() {
        let f: fn(u32) -> u32 = double;
        let handle = ValueRef::new(&f);

        assert_eq!(handle.kind(), Kind::Func);
        assert!(matches!(handle.inspect_ref(), Some(InspectRef::Opaque)));
        assert_eq!(<fn() -> ()>::type_path(), "fn() -> ()");
        assert_eq!(<fn(u8, bool) -> i8>::type_name(), "fn(u8, bool) -> i8");
    }
}
