use std::{
    fmt::{self, Debug},
    iter::{FusedIterator, Rev},
    slice, vec,
};

/// Borrowing traversal of a [`FifoQueue`](crate::FifoQueue) in logical order.
///
/// Walks the front buffer backwards, then the back buffer forwards.
pub struct Iter<'a, T> {
    front: Rev<slice::Iter<'a, T>>,
    back: slice::Iter<'a, T>,
}
impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(front: &'a [T], back: &'a [T]) -> Self {
        Self {
            front: front.iter().rev(),
            back: back.iter(),
        }
    }
}
impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.front.next().or_else(|| self.back.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}
impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.back.next_back().or_else(|| self.front.next_back())
    }
}
impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }
}
impl<'a, T> FusedIterator for Iter<'a, T> {}
impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}
impl<'a, T: Debug> Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

/// Mutable traversal in logical order.
pub struct IterMut<'a, T> {
    front: Rev<slice::IterMut<'a, T>>,
    back: slice::IterMut<'a, T>,
}
impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(front: &'a mut [T], back: &'a mut [T]) -> Self {
        Self {
            front: front.iter_mut().rev(),
            back: back.iter_mut(),
        }
    }
}
impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.front.next().or_else(|| self.back.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}
impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.back.next_back().or_else(|| self.front.next_back())
    }
}
impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }
}
impl<'a, T> FusedIterator for IterMut<'a, T> {}
impl<'a, T: Debug> Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("remaining", &self.len())
            .finish()
    }
}

/// Owning traversal in logical order.
pub struct IntoIter<T> {
    front: Rev<vec::IntoIter<T>>,
    back: vec::IntoIter<T>,
}
impl<T> IntoIter<T> {
    pub(crate) fn new(front: Vec<T>, back: Vec<T>) -> Self {
        Self {
            front: front.into_iter().rev(),
            back: back.into_iter(),
        }
    }
}
impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.front.next().or_else(|| self.back.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}
impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.back.next_back().or_else(|| self.front.next_back())
    }
}
impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T: Clone> Clone for IntoIter<T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}
impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn walks_front_reversed_then_back() {
        let front = [2, 1];
        let back = [3, 4];
        assert_eq!(
            Iter::new(&front, &back).copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(
            Iter::new(&front, &back).rev().copied().collect::<Vec<_>>(),
            vec![4, 3, 2, 1]
        );
    }

    #[test]
    fn meets_in_the_middle() {
        let mut iter = IntoIter::new(vec![2, 1], vec![3, 4]);
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next_back(), Some(2));
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn mutates_in_place() {
        let mut front = vec![2, 1];
        let mut back = vec![3];
        IterMut::new(&mut front, &mut back)
            .enumerate()
            .for_each(|(idx, value)| *value *= 10 * (idx + 1));
        assert_eq!(front, vec![40, 10]);
        assert_eq!(back, vec![90]);
    }
}
