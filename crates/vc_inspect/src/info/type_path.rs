// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// Provides a stable alternative to [`core::any::type_name`], which makes no
/// guarantee about its output across compiler versions.
///
/// # Methods
///
/// - [`type_path`]: The unique identifier of the type, cannot be duplicated.
/// - [`type_name`]: Type name without module path, may be duplicated.
/// - [`module_path`]: Optional module path.
///
/// These names never start with `::`.
/// Users should also ensure this when manually implementing it.
///
/// # Naming scheme
///
/// - Built-in types use the primitive name: `bool`, `i32`, `str`, `[u8]`,
///   `(u8, bool)`, `[f32; 4]`, `fn(u8) -> bool`.
/// - Every other type joins its module path and its local name with `::`,
///   generics included: `alloc::vec::Vec<i32>`, `my_crate::graph::Node`.
///
/// # Implementation
///
/// [`#[derive(Inspect)]`](crate::derive::Inspect) implements `TypePath`
/// together with [`Inspect`](crate::Inspect):
///
/// ```
/// use vc_inspect::{derive::Inspect, info::TypePath};
///
/// #[derive(Inspect)]
/// struct Local;
///
/// #[derive(Inspect)]
/// #[inspect(type_path = "my_crate::foo::Stable")]
/// struct Stable;
///
/// assert!(Local::type_path().ends_with("::Local"));
/// assert_eq!(Stable::type_path(), "my_crate::foo::Stable");
/// assert_eq!(Stable::type_name(), "Stable");
/// assert_eq!(Stable::module_path(), Some("my_crate::foo"));
/// ```
///
/// For generic types implemented by hand, [`GenericTypePathCell`] caches
/// the path built for each instantiation:
///
/// ```
/// use vc_inspect::info::TypePath;
/// use vc_inspect::impls::{concat, GenericTypePathCell};
///
/// struct Foo<T>(T);
///
/// impl<T: TypePath> TypePath for Foo<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| concat(&["my_crate::Foo<", T::type_path(), ">"]))
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| concat(&["Foo<", T::type_name(), ">"]))
///     }
///     fn module_path() -> Option<&'static str> {
///         Some("my_crate")
///     }
/// }
///
/// assert_eq!(Foo::<u8>::type_path(), "my_crate::Foo<u8>");
/// assert_eq!(Foo::<Foo<bool>>::type_name(), "Foo<Foo<bool>>");
/// ```
///
/// [`type_path`]: TypePath::type_path
/// [`type_name`]: TypePath::type_name
/// [`module_path`]: TypePath::module_path
/// [`GenericTypePathCell`]: crate::impls::GenericTypePathCell
pub trait TypePath: 'static {
    /// Returns the fully qualified path with generics of the target type.
    ///
    /// For `Option<Vec<usize>>`, this is `"core::option::Option<alloc::vec::Vec<usize>>"`.
    fn type_path() -> &'static str;

    /// Returns a short path to the type, which may be duplicated.
    ///
    /// For `Option<Vec<usize>>`, this is `"Option<Vec<usize>>"`.
    fn type_name() -> &'static str;

    /// Optional module path where the type is defined.
    ///
    /// Primitive built-in types return `None`.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Provide dynamic dispatch for types that implement [`TypePath`].
///
/// Auto impl for all types that implemented [`TypePath`].
///
/// # Examples
///
/// ```
/// use vc_inspect::info::DynamicTypePath;
///
/// let value: &dyn DynamicTypePath = &vec![1_u8];
/// assert_eq!(value.inspect_type_path(), "alloc::vec::Vec<u8>");
/// assert_eq!(value.inspect_type_name(), "Vec<u8>");
/// ```
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn inspect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn inspect_type_name(&self) -> &'static str;

    /// See [`TypePath::module_path`].
    fn inspect_module_path(&self) -> Option<&'static str>;
}

impl<T: TypePath + ?Sized> DynamicTypePath for T {
    #[inline]
    fn inspect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn inspect_type_name(&self) -> &'static str {
        Self::type_name()
    }

    #[inline]
    fn inspect_module_path(&self) -> Option<&'static str> {
        Self::module_path()
    }
}

#[cfg(test)]
mod tests {
    use super::TypePath;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    #[test]
    fn primitive_paths() {
        assert_eq!(bool::type_path(), "bool");
        assert_eq!(isize::type_path(), "isize");
        assert_eq!(str::type_path(), "str");
        assert_eq!(<[u8]>::type_path(), "[u8]");
        assert_eq!(<[f32; 4]>::type_path(), "[f32; 4]");
        assert_eq!(<(u8, bool)>::type_path(), "(u8, bool)");
        assert_eq!(<()>::type_path(), "()");
        assert_eq!(i64::module_path(), None);
    }

    #[test]
    fn generic_paths() {
        assert_eq!(String::type_path(), "alloc::string::String");
        assert_eq!(String::type_name(), "String");
        assert_eq!(<Vec<i32>>::type_path(), "alloc::vec::Vec<i32>");
        assert_eq!(
            <Option<Vec<usize>>>::type_path(),
            "core::option::Option<alloc::vec::Vec<usize>>"
        );
        assert_eq!(<Option<Vec<usize>>>::type_name(), "Option<Vec<usize>>");
        assert_eq!(
            <BTreeMap<String, u8>>::type_path(),
            "alloc::collections::BTreeMap<alloc::string::String, u8>"
        );
        assert_eq!(<fn(u8) -> bool>::type_path(), "fn(u8) -> bool");
        assert_eq!(<*const u8>::type_path(), "*const u8");
    }

    #[test]
    fn nested_generic_paths_are_distinct() {
        // Every instantiation shares the same `static CELL`.
        assert_eq!(<Vec<Vec<u8>>>::type_path(), "alloc::vec::Vec<alloc::vec::Vec<u8>>");
        assert_eq!(<Vec<u8>>::type_path(), "alloc::vec::Vec<u8>");
        assert_ne!(<Vec<u16>>::type_path(), <Vec<u32>>::type_path());
    }

    #[test]
    fn derived_generic_paths() {
        use crate::derive::Inspect;

        #[derive(Inspect)]
        #[inspect(type_path = "demo::grid::Grid")]
        struct Grid<T, const N: usize> {
            cells: [T; N],
        }

        assert_eq!(<Grid<u8, 4>>::type_path(), "demo::grid::Grid<u8, 4>");
        assert_eq!(<Grid<u8, 4>>::type_name(), "Grid<u8, 4>");
        assert_eq!(<Grid<u8, 4>>::module_path(), Some("demo::grid"));
        assert_eq!(
            <Grid<Grid<bool, 1>, 2>>::type_path(),
            "demo::grid::Grid<demo::grid::Grid<bool, 1>, 2>"
        );
    }
}
