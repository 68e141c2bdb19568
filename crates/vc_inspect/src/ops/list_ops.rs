use crate::Inspect;

// -----------------------------------------------------------------------------
// List trait

/// Type-erased access to the ordered elements of a slice or an array.
///
/// Both `[T; N]` (kind array) and `Vec<T>`, `VecDeque<T>`, `[T]` (kind slice)
/// implement this trait; the kind tells them apart.
///
/// # Examples
///
/// ```
/// use vc_inspect::ops::List;
///
/// let list = vec![1_u8, 2, 3];
///
/// assert_eq!(List::len(&list), 3);
/// assert!(List::get(&list, 2).is_some());
/// assert!(List::get(&list, 3).is_none());
/// ```
pub trait List: Inspect {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element with index `index`.
    ///
    /// Returns `None` if `index` is out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Inspect>;

    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements.
    #[inline]
    fn iter(&self) -> ListIter<'_>
    where
        Self: Sized,
    {
        ListIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// ListIter

/// An iterator over the elements of a [`List`].
pub struct ListIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListIter<'a> {
    /// Creates a new iterator for the given list.
    #[inline(always)]
    pub const fn new(list: &'a dyn List) -> Self {
        ListIter { list, index: 0 }
    }
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a dyn Inspect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len().saturating_sub(self.index);
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListIter<'_> {}
