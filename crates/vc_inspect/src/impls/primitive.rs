use crate::Inspect;
use crate::info::{Kind, TypePath};
use crate::ops::{InspectRef, Scalar};

macro_rules! impl_primitive {
    ($ty:ty, $kind:ident, |$this:ident| $scalar:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                stringify!($ty)
            }

            #[inline]
            fn type_name() -> &'static str {
                stringify!($ty)
            }
        }

        impl Inspect for $ty {
            #[inline]
            fn inspect_kind(&self) -> Kind {
                Kind::$kind
            }

            #[inline]
            fn static_kind() -> Option<Kind> {
                Some(Kind::$kind)
            }

            #[inline]
            fn inspect_ref(&self) -> InspectRef<'_> {
                let $this = *self;
                InspectRef::Scalar($scalar)
            }
        }
    };
}

impl_primitive!(bool, Bool, |v| Scalar::Bool(v));

impl_primitive!(isize, Int, |v| Scalar::Int(v as i64));
impl_primitive!(i8, Int8, |v| Scalar::Int(i64::from(v)));
impl_primitive!(i16, Int16, |v| Scalar::Int(i64::from(v)));
impl_primitive!(i32, Int32, |v| Scalar::Int(i64::from(v)));
impl_primitive!(i64, Int64, |v| Scalar::Int(v));

impl_primitive!(usize, Uint, |v| Scalar::Uint(v as u64));
impl_primitive!(u8, Uint8, |v| Scalar::Uint(u64::from(v)));
impl_primitive!(u16, Uint16, |v| Scalar::Uint(u64::from(v)));
impl_primitive!(u32, Uint32, |v| Scalar::Uint(u64::from(v)));
impl_primitive!(u64, Uint64, |v| Scalar::Uint(v));

impl_primitive!(f32, Float32, |v| Scalar::Float32(v));
impl_primitive!(f64, Float64, |v| Scalar::Float64(v));

// A code point.
impl_primitive!(char, Int32, |v| Scalar::Int(i64::from(u32::from(v))));

#[cfg(test)]
mod tests {
    use crate::ValueRef;
    use crate::info::{Kind, TypePath};
    use crate::ops::Scalar;

    #[test]
    fn integer_kinds() {
        assert_eq!(ValueRef::new(&1_isize).kind(), Kind::Int);
        assert_eq!(ValueRef::new(&1_i64).kind(), Kind::Int64);
        assert_eq!(ValueRef::new(&1_usize).kind(), Kind::Uint);
        assert_eq!(ValueRef::new(&1_u16).kind(), Kind::Uint16);
        assert_eq!(ValueRef::new(&-9_i8).scalar(), Some(Scalar::Int(-9)));
        assert_eq!(ValueRef::new(&u64::MAX).scalar(), Some(Scalar::Uint(u64::MAX)));
    }

    #[test]
    fn char_is_a_code_point() {
        let value = ValueRef::new(&'A');
        assert_eq!(value.kind(), Kind::Int32);
        assert_eq!(value.scalar(), Some(Scalar::Int(65)));
        assert_eq!(char::type_path(), "char");
    }

    #[test]
    fn floats_keep_their_width() {
        assert_eq!(ValueRef::new(&0.5_f32).scalar(), Some(Scalar::Float32(0.5)));
        assert_eq!(ValueRef::new(&0.5_f64).kind(), Kind::Float64);
    }
}
