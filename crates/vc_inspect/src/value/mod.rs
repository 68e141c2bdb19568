//! The indirection-stripped value handle.

use alloc::vec::Vec;
use core::fmt;
use core::ptr;

use crate::Inspect;
use crate::info::Kind;
use crate::ops::{FieldIter, InspectRef, ListIter, Scalar};

// -----------------------------------------------------------------------------
// Identity

/// The identity of a reference target.
///
/// Two handles reached through pointers to the same object share an
/// identity. The type path takes part in the comparison, so a struct and its
/// first field, which live at the same address, stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity {
    addr: usize,
    type_path: &'static str,
}

impl Identity {
    /// Returns the identity of `target`, or `None` for zero-sized values,
    /// whose address carries no information.
    pub fn of(target: &dyn Inspect) -> Option<Self> {
        if size_of_val(target) == 0 {
            return None;
        }
        Some(Self {
            addr: ptr::from_ref(target).cast::<()>().addr(),
            type_path: target.inspect_type_path(),
        })
    }

    /// Returns the address of the target.
    #[inline]
    pub const fn addr(&self) -> usize {
        self.addr
    }

    /// Returns the type path of the target.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }
}

// -----------------------------------------------------------------------------
// TypeName

/// The name a value is reported under.
///
/// This is the [`TypePath`](crate::info::TypePath) of the value, followed by
/// `::Variant` for enums.
///
/// # Examples
///
/// ```
/// use vc_inspect::{ValueRef, derive::Inspect};
///
/// #[derive(Inspect)]
/// #[inspect(type_path = "shapes::Shape")]
/// enum Shape {
///     Circle { radius: f32 },
///     Empty,
/// }
///
/// let circle = Shape::Circle { radius: 1.0 };
/// let name = ValueRef::new(&circle).type_name().unwrap();
///
/// assert_eq!(name.path(), "shapes::Shape");
/// assert_eq!(name.variant(), Some("Circle"));
/// assert_eq!(name.to_string(), "shapes::Shape::Circle");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeName {
    path: &'static str,
    variant: Option<&'static str>,
}

impl TypeName {
    /// Returns the type path.
    #[inline]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Returns the active enum variant, if any.
    #[inline]
    pub const fn variant(&self) -> Option<&'static str> {
        self.variant
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)?;
        if let Some(variant) = self.variant {
            f.write_str("::")?;
            f.write_str(variant)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Structure

/// The labelled children of a composite value, in order.
pub enum Structure<'a> {
    /// A scalar, channel, opaque or zero value.
    None,
    /// The `(name, value)` pairs of a struct.
    Fields(Vec<(&'a str, ValueRef<'a>)>),
    /// The elements of a slice or an array.
    Elements(Vec<ValueRef<'a>>),
    /// The `(key, value)` pairs of a map.
    Entries(Vec<(ValueRef<'a>, ValueRef<'a>)>),
}

impl Structure<'_> {
    /// Returns the number of children.
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Fields(fields) => fields.len(),
            Self::Elements(elements) => elements.len(),
            Self::Entries(entries) => entries.len(),
        }
    }

    /// Returns `true` if there are no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// -----------------------------------------------------------------------------
// ValueRef

/// Stripping stops after this many indirection layers and yields the
/// invalid handle.
const MAX_INDIRECTION: usize = 256;

/// A handle to an inspected value with every indirection layer stripped.
///
/// `&T`, `Box<T>`, `Rc<T>`, `Arc<T>`, `Option<T>`, `OnceCell<T>` and
/// `OnceLock<T>` are unwrapped until a concrete value is reached, so
/// [`kind`](Self::kind) never reports [`Kind::Ptr`] or [`Kind::Interface`].
/// A layer holding nothing turns the handle into the zero value.
///
/// # Examples
///
/// ```
/// use vc_inspect::{ValueRef, info::Kind};
///
/// let value = Some(Box::new(7_u16));
/// let handle = ValueRef::new(&value);
///
/// assert_eq!(handle.kind(), Kind::Uint16);
/// assert!(handle.identity().is_some());
///
/// let none: Option<Box<u16>> = None;
/// assert!(ValueRef::new(&none).is_zero());
/// ```
#[derive(Clone, Copy)]
pub struct ValueRef<'a> {
    value: Option<&'a dyn Inspect>,
    identity: Option<Identity>,
}

impl<'a> ValueRef<'a> {
    /// Creates a handle to `value`, stripping every indirection layer.
    pub fn new(value: &'a dyn Inspect) -> Self {
        let mut current = value;
        let mut identity = None;

        for _ in 0..MAX_INDIRECTION {
            let kind = current.inspect_kind();
            if kind == Kind::Invalid {
                return Self::invalid();
            }
            if !kind.is_indirect() {
                return Self {
                    value: Some(current),
                    identity,
                };
            }
            match current.inspect_ref() {
                InspectRef::Indirect(Some(target)) => {
                    identity = Identity::of(target);
                    current = target;
                }
                _ => return Self::invalid(),
            }
        }

        Self::invalid()
    }

    /// The zero value: a nil pointer, an empty option, or nothing at all.
    #[inline]
    pub const fn invalid() -> Self {
        Self {
            value: None,
            identity: None,
        }
    }

    /// Returns the underlying value, `None` for the zero value.
    #[inline]
    pub const fn get(&self) -> Option<&'a dyn Inspect> {
        self.value
    }

    /// Returns `true` for the zero value.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the kind of the value, [`Kind::Invalid`] for the zero value.
    #[inline]
    pub fn kind(&self) -> Kind {
        match self.value {
            Some(value) => value.inspect_kind(),
            None => Kind::Invalid,
        }
    }

    /// Returns the identity of the pointer target this handle was reached
    /// through.
    ///
    /// `None` if no indirection layer was stripped, or if the target is
    /// zero-sized.
    #[inline]
    pub const fn identity(&self) -> Option<Identity> {
        self.identity
    }

    /// Returns the name of the type, `None` for the zero value.
    pub fn type_name(&self) -> Option<TypeName> {
        self.value.map(|value| TypeName {
            path: value.inspect_type_path(),
            variant: value.variant_name(),
        })
    }

    /// Returns the content view of the value, `None` for the zero value.
    #[inline]
    pub fn inspect_ref(&self) -> Option<InspectRef<'a>> {
        self.value.map(|value| value.inspect_ref())
    }

    /// Returns the length of slices, arrays, maps and channels.
    ///
    /// `None` for every other kind.
    pub fn len(&self) -> Option<usize> {
        match self.inspect_ref()? {
            InspectRef::List(list) => Some(list.len()),
            InspectRef::Map(map) => Some(map.len()),
            InspectRef::Channel { len } => Some(len),
            _ => None,
        }
    }

    /// Returns the literal content of scalar values.
    pub fn scalar(&self) -> Option<Scalar<'a>> {
        match self.inspect_ref()? {
            InspectRef::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Returns the labelled children, in order.
    ///
    /// Every child is stripped with [`ValueRef::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_inspect::{Structure, ValueRef};
    ///
    /// let list = vec![1, 2, 3];
    /// let Structure::Elements(elements) = ValueRef::new(&list).structure() else {
    ///     unreachable!();
    /// };
    ///
    /// assert_eq!(elements.len(), 3);
    /// ```
    pub fn structure(&self) -> Structure<'a> {
        let Some(content) = self.inspect_ref() else {
            return Structure::None;
        };
        match content {
            InspectRef::Struct(s) => Structure::Fields(
                FieldIter::new(s)
                    .map(|(name, value)| (name, Self::new(value)))
                    .collect(),
            ),
            InspectRef::List(list) => {
                Structure::Elements(ListIter::new(list).map(Self::new).collect())
            }
            InspectRef::Map(map) => Structure::Entries(
                map.iter_entries()
                    .map(|(key, value)| (Self::new(key), Self::new(value)))
                    .collect(),
            ),
            _ => Structure::None,
        }
    }

    /// Returns the struct field named `name`, stripped.
    ///
    /// `None` if the value is not a struct or has no such field.
    pub fn field(&self, name: &str) -> Option<ValueRef<'a>> {
        match self.inspect_ref()? {
            InspectRef::Struct(s) => s.field(name).map(Self::new),
            _ => None,
        }
    }

    /// Returns the element with index `index` of a slice or an array, stripped.
    pub fn element(&self, index: usize) -> Option<ValueRef<'a>> {
        match self.inspect_ref()? {
            InspectRef::List(list) => list.get(index).map(Self::new),
            _ => None,
        }
    }
}

impl fmt::Debug for ValueRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueRef")
            .field("kind", &self.kind())
            .field("type_name", &self.type_name())
            .field("identity", &self.identity)
            .finish()
    }
}
