use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;

use crate::Inspect;
use crate::info::{Kind, TypePath};
use crate::ops::{InspectRef, Scalar};

impl TypePath for str {
    #[inline]
    fn type_path() -> &'static str {
        "str"
    }

    #[inline]
    fn type_name() -> &'static str {
        "str"
    }
}

impl Inspect for str {
    #[inline]
    fn inspect_kind(&self) -> Kind {
        Kind::String
    }

    #[inline]
    fn inspect_ref(&self) -> InspectRef<'_> {
        InspectRef::Scalar(Scalar::Str(self))
    }
}

impl TypePath for String {
    #[inline]
    fn type_path() -> &'static str {
        "alloc::string::String"
    }

    #[inline]
    fn type_name() -> &'static str {
        "String"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::string")
    }
}

impl Inspect for String {
    #[inline]
    fn inspect_kind(&self) -> Kind {
        Kind::String
    }

    #[inline]
    fn static_kind() -> Option<Kind> {
        Some(Kind::String)
    }

    #[inline]
    fn inspect_ref(&self) -> InspectRef<'_> {
        InspectRef::Scalar(Scalar::Str(self.as_str()))
    }
}

impl TypePath for Cow<'static, str> {
    #[inline]
    fn type_path() -> &'static str {
        "alloc::borrow::Cow<str>"
    }

    #[inline]
    fn type_name() -> &'static str {
        "Cow<str>"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::borrow")
    }
}

impl Inspect for Cow<'static, str> {
    #[inline]
    fn inspect_kind(&self) -> Kind {
        Kind::String
    }

    #[inline]
    fn static_kind() -> Option<Kind> {
        Some(Kind::String)
    }

    #[inline]
    fn inspect_ref(&self) -> InspectRef<'_> {
        InspectRef::Scalar(Scalar::Str(self))
    }
}

// `TypePath` comes from the pointer impls.
macro_rules! impl_str_pointer {
    ($($ty:ty),+ $(,)?) => {$(
        impl Inspect for $ty {
            #[inline]
            fn inspect_kind(&self) -> Kind {
                Kind::String
            }

            #[inline]
            fn static_kind() -> Option<Kind> {
                Some(Kind::String)
            }

            #[inline]
            fn inspect_ref(&self) -> InspectRef<'_> {
                InspectRef::Scalar(Scalar::Str(self))
            }
        }
    )+};
}

impl_str_pointer!(&'static str, Box<str>, Rc<str>, Arc<str>);

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::ValueRef;
    use crate::info::Kind;
    use crate::ops::Scalar;

    #[test]
    fn every_string_flavor_is_a_string() {
        let owned = String::from("x");
        let borrowed: &'static str = "x";
        let boxed: Box<str> = Box::from("x");
        let cow: Cow<'static, str> = Cow::Borrowed("x");

        for value in [
            ValueRef::new(&owned),
            ValueRef::new(&borrowed),
            ValueRef::new(&boxed),
            ValueRef::new(&cow),
        ] {
            assert_eq!(value.kind(), Kind::String);
            assert_eq!(value.scalar(), Some(Scalar::Str("x")));
        }
    }

    #[test]
    fn string_type_paths() {
        let boxed: Box<str> = Box::from("x");
        assert_eq!(
            ValueRef::new(&boxed).type_name().unwrap().path(),
            "alloc::boxed::Box<str>"
        );
        assert_eq!(
            ValueRef::new(&String::new()).type_name().unwrap().path(),
            "alloc::string::String"
        );
    }
}
