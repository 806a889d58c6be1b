use std::ops::RangeBounds;

/// A type that can `enqueue` and `dequeue` elements.
pub trait Queue {
    type Element;

    /// Adds `element` at the back.
    fn enqueue(&mut self, element: Self::Element);

    /// Removes the front element, or returns `None` if there is none.
    fn dequeue(&mut self) -> Option<Self::Element>;
}

/// An ordered collection whose contiguous sub-ranges can be replaced.
///
/// Only `len` and `replace_range` need implementing; insertion, removal,
/// appending and truncation are all expressed as range replacements.
pub trait RangeReplace<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replaces the positions in `range` with `replacement`.
    ///
    /// # Panics
    ///
    /// If the range starts after it ends or ends past `len()`.
    fn replace_range<R, I>(&mut self, range: R, replacement: I)
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>;

    fn insert(&mut self, index: usize, element: T) {
        self.replace_range(index..index, std::iter::once(element));
    }

    fn insert_all<I: IntoIterator<Item = T>>(&mut self, index: usize, elements: I) {
        self.replace_range(index..index, elements);
    }

    fn append_all<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        let len = self.len();
        self.replace_range(len..len, elements);
    }

    fn remove_range<R: RangeBounds<usize>>(&mut self, range: R) {
        self.replace_range(range, std::iter::empty());
    }

    /// Keeps the first `len` elements. Does nothing if there are fewer.
    fn truncate(&mut self, len: usize) {
        if len < self.len() {
            self.remove_range(len..);
        }
    }

    fn clear(&mut self) {
        self.remove_range(..);
    }
}
