use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
    mem,
    ops::{Index, IndexMut, Range, RangeBounds},
};

use colored::Colorize;
use itertools::Itertools;

use crate::{
    iter::{IntoIter, Iter, IterMut},
    range, Queue, QueueError, QueueStats, RangeReplace,
};

/// A FIFO queue built from two stacks, which can also be indexed, mutated and
/// spliced like an ordered collection.
///
/// The oldest elements live in `front` in reverse order so the next one to
/// dequeue is always at the end of a `Vec`. New elements are pushed onto
/// `back`. The logical order is `reverse(front) ++ back`.
///
/// Positions are logical offsets from the front of the queue, not physical
/// storage slots: moving elements between buffers never changes which element
/// a position denotes.
#[derive(Clone)]
pub struct FifoQueue<T> {
    front: Vec<T>,
    back: Vec<T>,
    stats: QueueStats,
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Front(usize),
    Back(usize),
}

impl<T> FifoQueue<T> {
    pub fn new() -> Self {
        Self {
            front: Vec::new(),
            back: Vec::new(),
            stats: QueueStats::default(),
        }
    }

    /// Reserves room for `capacity` enqueues before the back buffer reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            front: Vec::new(),
            back: Vec::with_capacity(capacity),
            stats: QueueStats::default(),
        }
    }

    /// Adds an element to the back of the queue.
    ///
    /// Complexity: O(1) amortized over the back buffer's growth. Never moves
    /// existing elements between buffers.
    pub fn enqueue(&mut self, element: T) {
        self.back.push(element);
    }

    /// Removes the front of the queue, or returns `None` if it is empty.
    ///
    /// Complexity: amortized O(1). When the front buffer runs dry the whole
    /// back buffer is flipped over into it, but every element makes that trip
    /// at most once.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.front.is_empty() {
            self.rebalance();
        }
        self.front.pop()
    }

    fn rebalance(&mut self) {
        if self.back.is_empty() {
            return;
        }
        // front is empty, so swapping hands its allocation to back for reuse
        mem::swap(&mut self.front, &mut self.back);
        self.front.reverse();

        let moved = self.front.len();
        self.stats.record_rebalance(moved);
        if cfg!(feature = "debug_rebalance") {
            println!("{} rebalanced {} elements", "[queue]".dimmed(), moved);
        }
    }

    /// Moves everything into `back` in logical order, leaving `front` empty.
    fn normalize(&mut self) {
        if self.front.is_empty() {
            return;
        }
        let moved = self.front.len();
        self.front.reverse();
        self.front.append(&mut self.back);
        mem::swap(&mut self.front, &mut self.back);

        self.stats.record_normalization(moved);
        if cfg!(feature = "debug_rebalance") {
            println!("{} normalized {} elements", "[queue]".dimmed(), moved);
        }
    }

    pub fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }

    /// The valid positions, `0..len()`.
    pub fn indices(&self) -> Range<usize> {
        0..self.len()
    }

    pub fn stats(&self) -> QueueStats {
        self.stats
    }

    fn slot(&self, index: usize) -> Option<Slot> {
        let front_len = self.front.len();
        if index < front_len {
            Some(Slot::Front(front_len - index - 1))
        } else if index - front_len < self.back.len() {
            Some(Slot::Back(index - front_len))
        } else {
            None
        }
    }

    fn out_of_bounds(&self, index: usize) -> QueueError {
        QueueError::IndexOutOfBounds {
            index,
            len: self.len(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        match self.slot(index)? {
            Slot::Front(idx) => self.front.get(idx),
            Slot::Back(idx) => self.back.get(idx),
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.slot(index)? {
            Slot::Front(idx) => self.front.get_mut(idx),
            Slot::Back(idx) => self.back.get_mut(idx),
        }
    }

    /// Overwrites the element at `index`, returning the old one.
    ///
    /// # Panics
    ///
    /// If `index >= len()`.
    pub fn set(&mut self, index: usize, element: T) -> T {
        mem::replace(&mut self[index], element)
    }

    /// Exchanges the elements at two positions.
    ///
    /// # Panics
    ///
    /// If either position is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        let (a, b) = match (self.slot(a), self.slot(b)) {
            (Some(a), Some(b)) => (a, b),
            (None, _) => panic!("{}", self.out_of_bounds(a)),
            (_, None) => panic!("{}", self.out_of_bounds(b)),
        };
        match (a, b) {
            (Slot::Front(a), Slot::Front(b)) => self.front.swap(a, b),
            (Slot::Back(a), Slot::Back(b)) => self.back.swap(a, b),
            (Slot::Front(f), Slot::Back(b)) | (Slot::Back(b), Slot::Front(f)) => {
                mem::swap(&mut self.front[f], &mut self.back[b])
            }
        }
    }

    /// The element `dequeue` would return next. Never rebalances.
    pub fn first(&self) -> Option<&T> {
        self.front.last().or_else(|| self.back.first())
    }

    pub fn last(&self) -> Option<&T> {
        self.back.last().or_else(|| self.front.first())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.front, &self.back)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.front, &mut self.back)
    }

    /// Iterates over the positions in `range` only.
    ///
    /// # Panics
    ///
    /// If the range starts after it ends or ends past `len()`.
    pub fn range<R: RangeBounds<usize>>(&self, range: R) -> Iter<'_, T> {
        let Range { start, end } = match range::resolve(range, self.len()) {
            Ok(range) => range,
            Err(err) => panic!("{}", err),
        };
        let front_len = self.front.len();
        let front = &self.front[front_len - end.min(front_len)..front_len - start.min(front_len)];
        let back = &self.back[start.max(front_len) - front_len..end.max(front_len) - front_len];
        Iter::new(front, back)
    }

    /// Replaces the positions in `range` with `replacement`.
    ///
    /// Afterwards the queue holds the elements before the range, then the
    /// replacement, then the elements after the range. The range is checked
    /// before anything moves, so a rejected call leaves the queue untouched.
    pub fn try_replace_range<R, I>(&mut self, range: R, replacement: I) -> Result<(), QueueError>
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        let range = range::resolve(range, self.len())?;
        self.normalize();
        self.back.splice(range, replacement).for_each(drop);
        Ok(())
    }

    /// Panicking form of [`try_replace_range`](Self::try_replace_range).
    pub fn replace_range<R, I>(&mut self, range: R, replacement: I)
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        if let Err(err) = self.try_replace_range(range, replacement) {
            panic!("{}", err);
        }
    }

    /// The elements in logical order.
    pub fn into_vec(self) -> Vec<T> {
        let mut elements = self.front;
        elements.reverse();
        elements.extend(self.back);
        elements
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue for FifoQueue<T> {
    type Element = T;

    fn enqueue(&mut self, element: T) {
        FifoQueue::enqueue(self, element)
    }

    fn dequeue(&mut self) -> Option<T> {
        FifoQueue::dequeue(self)
    }
}

impl<T> RangeReplace<T> for FifoQueue<T> {
    fn len(&self) -> usize {
        FifoQueue::len(self)
    }

    fn replace_range<R, I>(&mut self, range: R, replacement: I)
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        FifoQueue::replace_range(self, range, replacement)
    }
}

impl<T> Index<usize> for FifoQueue<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(element) => element,
            None => panic!("{}", self.out_of_bounds(index)),
        }
    }
}

impl<T> IndexMut<usize> for FifoQueue<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let error = self.out_of_bounds(index);
        match self.get_mut(index) {
            Some(element) => element,
            None => panic!("{}", error),
        }
    }
}

/// Builds a queue whose dequeue order is the vector's order. The vector is
/// reversed into the front buffer, so the first dequeue does not rebalance.
impl<T> From<Vec<T>> for FifoQueue<T> {
    fn from(mut elements: Vec<T>) -> Self {
        elements.reverse();
        Self {
            front: elements,
            back: Vec::new(),
            stats: QueueStats::default(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for FifoQueue<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from(Vec::from(elements))
    }
}

impl<T> From<FifoQueue<T>> for Vec<T> {
    fn from(queue: FifoQueue<T>) -> Self {
        queue.into_vec()
    }
}

impl<T> FromIterator<T> for FifoQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for FifoQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.back.extend(iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for FifoQueue<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.back.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for FifoQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.front, self.back)
    }
}

impl<'a, T> IntoIterator for &'a FifoQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut FifoQueue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for FifoQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for FifoQueue<T> {}

impl<T: PartialEq> PartialEq<Vec<T>> for FifoQueue<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialOrd> PartialOrd for FifoQueue<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}
impl<T: Ord> Ord for FifoQueue<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for FifoQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|element| element.hash(state));
    }
}

impl<T: Debug> Debug for FifoQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for FifoQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}
