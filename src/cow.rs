use std::{
    fmt::{self, Debug, Display},
    ops::{Deref, Index, IndexMut, RangeBounds},
    rc::Rc,
};

use colored::Colorize;

use crate::{FifoQueue, Queue, QueueError, RangeReplace};

/// A [`FifoQueue`] whose storage is shared between clones until one of them
/// writes.
///
/// Cloning is O(1). Every mutation first checks whether this handle is the sole
/// owner of the storage and duplicates both buffers if it is not, so no other
/// handle ever observes the change. Reads go straight through `Deref`.
pub struct SharedQueue<T>(Rc<FifoQueue<T>>);

impl<T> SharedQueue<T> {
    pub fn new() -> Self {
        SharedQueue(Rc::new(FifoQueue::new()))
    }

    /// Whether no other handle shares this queue's storage.
    pub fn is_unique(&self) -> bool {
        Rc::strong_count(&self.0) == 1 && Rc::weak_count(&self.0) == 0
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> SharedQueue<T> {
    fn make_mut(&mut self) -> &mut FifoQueue<T> {
        if cfg!(feature = "debug_cow") && !self.is_unique() {
            println!(
                "{} making a copy of {} elements",
                "[cow]".dimmed(),
                self.0.len()
            );
        }
        Rc::make_mut(&mut self.0)
    }

    pub fn enqueue(&mut self, element: T) {
        self.make_mut().enqueue(element)
    }

    /// Removes the front element. An empty queue is left shared.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.0.is_empty() {
            return None;
        }
        self.make_mut().dequeue()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.0.len() {
            return None;
        }
        self.make_mut().get_mut(index)
    }

    /// Panics on an out-of-range position before any copy is made.
    fn check_index(&self, index: usize) {
        if index >= self.0.len() {
            panic!(
                "{}",
                QueueError::IndexOutOfBounds {
                    index,
                    len: self.0.len()
                }
            );
        }
    }

    pub fn set(&mut self, index: usize, element: T) -> T {
        self.check_index(index);
        self.make_mut().set(index, element)
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.check_index(a);
        self.check_index(b);
        self.make_mut().swap(a, b)
    }

    pub fn try_replace_range<R, I>(&mut self, range: R, replacement: I) -> Result<(), QueueError>
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        // reject before copying
        crate::range::resolve((range.start_bound(), range.end_bound()), self.0.len())?;
        self.make_mut().try_replace_range(range, replacement)
    }

    pub fn replace_range<R, I>(&mut self, range: R, replacement: I)
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        if let Err(err) = self.try_replace_range(range, replacement) {
            panic!("{}", err);
        }
    }

    /// The queue itself, copied only if another handle still shares it.
    pub fn into_inner(self) -> FifoQueue<T> {
        Rc::try_unwrap(self.0).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl<T> Clone for SharedQueue<T> {
    fn clone(&self) -> Self {
        SharedQueue(Rc::clone(&self.0))
    }
}

impl<T> Default for SharedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for SharedQueue<T> {
    type Target = FifoQueue<T>;

    fn deref(&self) -> &FifoQueue<T> {
        &self.0
    }
}

impl<T> From<FifoQueue<T>> for SharedQueue<T> {
    fn from(queue: FifoQueue<T>) -> Self {
        SharedQueue(Rc::new(queue))
    }
}

impl<T> FromIterator<T> for SharedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<FifoQueue<_>>())
    }
}

impl<T: Clone> Extend<T> for SharedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.make_mut().extend(iter)
    }
}

impl<T: Clone> Queue for SharedQueue<T> {
    type Element = T;

    fn enqueue(&mut self, element: T) {
        SharedQueue::enqueue(self, element)
    }

    fn dequeue(&mut self) -> Option<T> {
        SharedQueue::dequeue(self)
    }
}

impl<T: Clone> RangeReplace<T> for SharedQueue<T> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn replace_range<R, I>(&mut self, range: R, replacement: I)
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        SharedQueue::replace_range(self, range, replacement)
    }
}

impl<T> Index<usize> for SharedQueue<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T: Clone> IndexMut<usize> for SharedQueue<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.check_index(index);
        &mut self.make_mut()[index]
    }
}

impl<'a, T> IntoIterator for &'a SharedQueue<T> {
    type Item = &'a T;
    type IntoIter = crate::Iter<'a, T>;

    fn into_iter(self) -> crate::Iter<'a, T> {
        self.0.iter()
    }
}

impl<T: PartialEq> PartialEq for SharedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0 == *other.0
    }
}
impl<T: Eq> Eq for SharedQueue<T> {}

impl<T: PartialEq> PartialEq<Vec<T>> for SharedQueue<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self.0 == *other
    }
}

impl<T: Debug> Debug for SharedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.0, f)
    }
}

impl<T: Display> Display for SharedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.0, f)
    }
}
