use crate::info::{DynamicTypePath, Kind};
use crate::ops::InspectRef;

// -----------------------------------------------------------------------------
// Inspect

/// The capability trait behind runtime inspection.
///
/// An `Inspect` value can tell its [`Kind`], its type path (through the
/// [`DynamicTypePath`] supertrait) and expose its content as an
/// [`InspectRef`]. Everything the snapshot serializer knows about a value
/// comes through these methods.
///
/// # Implementation
///
/// Prefer [`#[derive(Inspect)]`](crate::derive::Inspect), which implements
/// [`TypePath`](crate::info::TypePath), `Inspect` and [`Struct`](crate::ops::Struct)
/// for structs and enums.
///
/// A manual implementation pairs a kind with the matching [`InspectRef`]
/// variant:
///
/// ```
/// use vc_inspect::{Inspect, ValueRef};
/// use vc_inspect::info::{Kind, TypePath};
/// use vc_inspect::ops::{InspectRef, Scalar};
///
/// struct Celsius(f64);
///
/// impl TypePath for Celsius {
///     fn type_path() -> &'static str { "weather::Celsius" }
///     fn type_name() -> &'static str { "Celsius" }
///     fn module_path() -> Option<&'static str> { Some("weather") }
/// }
///
/// impl Inspect for Celsius {
///     fn inspect_kind(&self) -> Kind {
///         Kind::Float64
///     }
///
///     fn inspect_ref(&self) -> InspectRef<'_> {
///         InspectRef::Scalar(Scalar::Float64(self.0))
///     }
/// }
///
/// let value = ValueRef::new(&Celsius(21.5));
/// assert_eq!(value.scalar(), Some(Scalar::Float64(21.5)));
/// ```
///
/// # Indirection
///
/// Pointer-like types (`&T`, `Box<T>`, `Rc<T>`, `Arc<T>`) report [`Kind::Ptr`],
/// optional holders (`Option<T>`, `OnceCell<T>`, `OnceLock<T>`) report
/// [`Kind::Interface`]; both answer [`InspectRef::Indirect`]. Those layers are
/// stripped by [`ValueRef`](crate::ValueRef) and never surface as a terminal kind.
pub trait Inspect: DynamicTypePath {
    /// Returns the kind of this value.
    fn inspect_kind(&self) -> Kind;

    /// Returns a view on the content of this value.
    fn inspect_ref(&self) -> InspectRef<'_>;

    /// The kind values of this type report once their indirection is
    /// stripped, when it does not depend on the value.
    ///
    /// Maps report the key kind through it even when they hold no entry.
    #[inline]
    fn static_kind() -> Option<Kind>
    where
        Self: Sized,
    {
        None
    }

    /// The active variant of an enum, appended to the type path of snapshots.
    ///
    /// Returns `None` for everything that is not an enum.
    #[inline]
    fn variant_name(&self) -> Option<&'static str> {
        None
    }

    /// Casts this type to a fully-inspectable value.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_inspect::Inspect;
    ///
    /// let x = 32;
    /// let r: &dyn Inspect = x.as_inspect();
    /// ```
    #[inline(always)]
    fn as_inspect(&self) -> &dyn Inspect
    where
        Self: Sized,
    {
        self
    }
}
