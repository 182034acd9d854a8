//! Growable array shared by scene storage and the render task queue.
//!
//! Capacity is tracked explicitly and doubles whenever a push finds the
//! array full, so insertion is amortized O(1) with a predictable growth
//! curve. Elements can be taken from either end: the scene only appends,
//! while the task queue pops from the front.

use std::collections::VecDeque;
use std::ops::Index;

/// Capacity used by [`DynArray::new`].
pub const DEFAULT_CAPACITY: usize = 8;

/// A growable, insertion-ordered array with doubling growth.
#[derive(Clone, Debug)]
pub struct DynArray<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> DynArray<T> {
    /// Create an empty array with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty array with room for `capacity` elements.
    ///
    /// A capacity of zero is bumped to one so that doubling always grows.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an element and return its index.
    pub fn push(&mut self, item: T) -> usize {
        if self.items.len() == self.capacity {
            self.grow();
        }
        self.items.push_back(item);
        self.items.len() - 1
    }

    /// Remove and return the most recently pushed element.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Remove and return the oldest element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Get the element at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements the array can hold before it grows again.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    /// Drop every element, keeping the current capacity. Returns how many
    /// elements were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity * 2;
        self.items.reserve_exact(new_capacity - self.items.len());
        self.capacity = new_capacity;
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_returns_index() {
        let mut arr = DynArray::new();
        assert_eq!(arr.push('a'), 0);
        assert_eq!(arr.push('b'), 1);
        assert_eq!(arr.push('c'), 2);
        assert_eq!(arr[1], 'b');
        assert_eq!(arr.len(), 3);
    }

    #[test]
    fn test_capacity_doubles_on_overflow() {
        let mut arr = DynArray::with_capacity(4);
        let mut seen = vec![arr.capacity()];

        for i in 0..17 {
            arr.push(i);
            if *seen.last().unwrap() != arr.capacity() {
                seen.push(arr.capacity());
            }
        }

        assert_eq!(seen, vec![4, 8, 16, 32]);
    }

    #[test]
    fn test_zero_capacity_still_grows() {
        let mut arr = DynArray::with_capacity(0);
        assert_eq!(arr.capacity(), 1);
        arr.push(1);
        arr.push(2);
        assert_eq!(arr.capacity(), 2);
    }

    #[test]
    fn test_pop_is_lifo_and_pop_front_is_fifo() {
        let mut arr = DynArray::new();
        for i in 0..4 {
            arr.push(i);
        }

        assert_eq!(arr.pop(), Some(3));
        assert_eq!(arr.pop_front(), Some(0));
        assert_eq!(arr.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_pop_empty() {
        let mut arr: DynArray<u8> = DynArray::new();
        assert!(arr.is_empty());
        assert_eq!(arr.pop(), None);
        assert_eq!(arr.pop_front(), None);
    }

    #[test]
    fn test_clear_reports_removed() {
        let mut arr = DynArray::with_capacity(2);
        arr.push(1);
        arr.push(2);
        arr.push(3);

        assert_eq!(arr.clear(), 3);
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), 4);
    }
}
