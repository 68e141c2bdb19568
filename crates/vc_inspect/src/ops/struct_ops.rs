use crate::Inspect;

// -----------------------------------------------------------------------------
// Struct trait

/// Type-erased access to the named fields of a struct-like value.
///
/// Implemented by [`#[derive(Inspect)]`](crate::derive::Inspect) for structs,
/// tuple structs, unit structs and enums (the fields of the active variant),
/// and by hand for tuples, whose fields are named `"0"`, `"1"`, ...
///
/// Fields are visited in declaration order.
///
/// # Examples
///
/// ```
/// use vc_inspect::{derive::Inspect, ops::Struct};
///
/// #[derive(Inspect)]
/// struct Foo { a: i32, b: bool }
///
/// let foo = Foo { a: 1, b: true };
///
/// assert_eq!(foo.field_len(), 2);
/// assert_eq!(foo.name_at(1), Some("b"));
/// assert!(foo.field("a").is_some());
/// assert!(foo.field("c").is_none());
/// ```
pub trait Struct: Inspect {
    /// Returns the number of fields.
    fn field_len(&self) -> usize;

    /// Returns the name of the field with index `index`.
    ///
    /// Returns `None` if `index` is out of bounds.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the value of the field with index `index`.
    ///
    /// Returns `None` if `index` is out of bounds.
    fn field_at(&self, index: usize) -> Option<&dyn Inspect>;

    /// Returns the value of the field named `name`.
    ///
    /// Returns `None` if the field does not exist.
    fn field(&self, name: &str) -> Option<&dyn Inspect> {
        (0..self.field_len())
            .find(|&index| self.name_at(index) == Some(name))
            .and_then(|index| self.field_at(index))
    }

    /// Returns an iterator over `(name, value)` pairs.
    #[inline]
    fn iter_fields(&self) -> FieldIter<'_>
    where
        Self: Sized,
    {
        FieldIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// FieldIter

/// An iterator over the named fields of a [`Struct`].
///
/// # Examples
///
/// ```
/// use vc_inspect::ops::FieldIter;
///
/// let pair = (1_u8, "x");
/// let names: Vec<&str> = FieldIter::new(&pair).map(|(name, _)| name).collect();
///
/// assert_eq!(names, ["0", "1"]);
/// ```
pub struct FieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> FieldIter<'a> {
    /// Creates a new iterator for the given struct.
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        FieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = (&'a str, &'a dyn Inspect);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.struct_val.name_at(self.index)?;
        let value = self.struct_val.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len().saturating_sub(self.index);
        (size, Some(size))
    }
}

impl ExactSizeIterator for FieldIter<'_> {}

#[cfg(test)]
mod tests {
    use super::{FieldIter, Struct};
    use crate::derive::Inspect;
    use alloc::vec::Vec;

    #[derive(Inspect)]
    struct Point {
        x: i32,
        y: i32,
        #[inspect(skip)]
        _cache: u64,
    }

    #[test]
    fn fields_follow_declaration_order() {
        let p = Point { x: 1, y: 2, _cache: 0 };
        let names: Vec<&str> = FieldIter::new(&p).map(|(name, _)| name).collect();

        assert_eq!(names, ["x", "y"]);
        assert_eq!(p.field_len(), 2);
        assert!(p.field("_cache").is_none());
        assert!(p.field_at(2).is_none());
    }

    #[test]
    fn iterator_reports_exact_size() {
        let p = Point { x: 1, y: 2, _cache: 0 };
        let mut iter = p.iter_fields();

        assert_eq!(iter.len(), 2);
        iter.next();
        assert_eq!(iter.len(), 1);
        iter.next();
        assert!(iter.next().is_none());
        assert_eq!(iter.len(), 0);
    }
}
