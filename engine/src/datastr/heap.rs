//! A priority queue implemented with a 4-ary heap.
//!
//! Unlike an indexed heap there is no decrease key.
//! The same logical element may be pushed several times with different keys,
//! callers have to skip outdated entries when popping them.
//! Insertion and popping the minimal element have `O(log n)` time complexity.
//!
//! # Examples
//!
//! ```
//! use dijkstra_compare::datastr::heap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.push((42, 0));
//! heap.push((23, 1));
//! heap.push((23, 2));
//! heap.push((50000, 1));
//! assert_eq!(heap.pop(), Some((23, 1)));
//! assert_eq!(heap.pop(), Some((23, 2)));
//! assert_eq!(heap.len(), 2);
//! ```

use std::cmp::min;

const TREE_ARITY: usize = 4;

/// Min-heap ordered by the `Ord` implementation of the elements.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    data: Vec<T>,
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty `MinHeap`.
    pub fn new() -> MinHeap<T> {
        MinHeap { data: Vec::new() }
    }

    /// Creates an empty `MinHeap` with space for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> MinHeap<T> {
        MinHeap {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the length of the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes the smallest item from the heap and returns it, or None if it is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let item = self.data.pop();
        self.move_down_in_tree(0);
        item
    }

    /// Pushes an item onto the heap.
    pub fn push(&mut self, element: T) {
        self.data.push(element);
        self.move_up_in_tree(self.data.len() - 1);
    }

    fn move_up_in_tree(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / TREE_ARITY;
            if self.data[parent] <= self.data[position] {
                break;
            }
            self.data.swap(parent, position);
            position = parent;
        }
    }

    fn move_down_in_tree(&mut self, mut position: usize) {
        let heap_size = self.len();
        loop {
            let data = &self.data;
            let smallest_child = match Self::children_index_range(position, heap_size).min_by(|&a, &b| data[a].cmp(&data[b])) {
                Some(child) => child,
                None => return, // no children at all
            };
            if self.data[smallest_child] >= self.data[position] {
                return; // no child is smaller
            }
            self.data.swap(smallest_child, position);
            position = smallest_child;
        }
    }

    fn children_index_range(parent_index: usize, heap_size: usize) -> std::ops::Range<usize> {
        let first_child = TREE_ARITY * parent_index + 1;
        let last_child = min(TREE_ARITY * parent_index + TREE_ARITY + 1, heap_size);
        first_child..last_child
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn pops_in_ascending_order() {
        let mut rng = StdRng::seed_from_u64(1337);
        let mut values: Vec<u32> = (0..500).map(|_| rng.gen_range(0..100)).collect();

        let mut heap = MinHeap::with_capacity(values.len());
        for &value in &values {
            heap.push(value);
        }
        assert_eq!(heap.len(), values.len());

        values.sort_unstable();
        let popped: Vec<u32> = std::iter::from_fn(|| heap.pop()).collect();
        assert_eq!(popped, values);
        assert!(heap.is_empty());
    }

    #[test]
    fn interleaved_push_and_pop() {
        let mut heap = MinHeap::new();
        heap.push(5);
        heap.push(3);
        assert_eq!(heap.pop(), Some(3));
        heap.push(1);
        heap.push(4);
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(4));
        assert_eq!(heap.pop(), Some(5));
        assert_eq!(heap.pop(), None);
    }
}
