/*!
A max heap on some subset of elements with fixed indicies.

In other words, a heap backed by a vector of values with a companion vector which tracks the current location of the index of a value in the heap.

The backing vector of values stays constant, and so the heap acts as a store of values, any of which may be *activated* (moved onto the heap) or *removed* (moved off the heap) without losing the value.

For example, [IndexHeap] is used as a store of the activity of [atoms](crate::structures::atom), as it is a useful heuristic to choose the atom without a value with the most activity when a decision is made.
As atoms with a value are removed from the heap, and returned to the heap when the value is cleared, the heap is kept to atoms which are candidates for a decision.

Ties between equal values are broken in favour of the lower index, and so the order in which indicies are popped is fully determined by the values stored.

```rust
# use cdcl_sat::generic::index_heap::IndexHeap;
let mut heap = IndexHeap::default();

heap.add(600, 10);
heap.add(0, 70);
heap.add(3, 10);

heap.activate(600);
heap.activate(0);
heap.activate(3);

assert_eq!(heap.count(), 601);
assert_eq!(heap.value_at(5), &i32::default());

assert_eq!(heap.pop_max(), Some(0));
assert_eq!(heap.pop_max(), Some(3));
assert_eq!(heap.pop_max(), Some(600));

assert!(heap.pop_max().is_none());
```
*/

/// The index heap struct.
#[derive(Clone, Debug)]
pub struct IndexHeap<V: PartialOrd + Default> {
    /// Values, indexed by value index.
    values: Vec<V>,

    /// The heap index of a value index, if the value index is on the heap.
    position_in_heap: Vec<Option<usize>>,

    /// The heap, of value indicies.
    heap: Vec<usize>,
}

impl<V: PartialOrd + Default> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            position_in_heap: Vec::default(),
            heap: Vec::default(),
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Stores `value` at `value_index`, growing the store with default values as needed.
    /// True if the store grew to fit `value_index`.
    ///
    /// The index is not placed on the heap, for this see [activate](IndexHeap::activate).
    pub fn add(&mut self, value_index: usize, value: V) -> bool {
        let fresh = self.values.len() <= value_index;
        while self.values.len() <= value_index {
            self.values.push(V::default());
            self.position_in_heap.push(None);
        }
        self.revalue(value_index, value);
        fresh
    }

    /// Takes `value_index` off the heap, keeping its value.
    /// False if the index was not on the heap.
    pub fn remove(&mut self, value_index: usize) -> bool {
        let Some(heap_index) = self.heap_index(value_index) else {
            return false;
        };

        let last = self.heap.len() - 1;
        self.swap(heap_index, last);
        self.heap.pop();
        self.position_in_heap[value_index] = None;

        if heap_index < self.heap.len() {
            self.heapify_down(heap_index);
            self.heapify_up(heap_index);
        }
        true
    }

    /// Places `value_index` on the heap.
    /// False if the index was already on the heap, in which case its position is refreshed.
    pub fn activate(&mut self, value_index: usize) -> bool {
        match self.heap_index(value_index) {
            None => {
                let heap_index = self.heap.len();
                self.heap.push(value_index);
                self.position_in_heap[value_index] = Some(heap_index);
                self.heapify_up(heap_index);
                true
            }
            Some(heap_index) => {
                self.heapify_up(heap_index);
                self.heapify_down(heap_index);
                false
            }
        }
    }

    /// True if `value_index` is on the heap.
    pub fn is_active(&self, value_index: usize) -> bool {
        self.heap_index(value_index).is_some()
    }

    /// Restores the heap order around `value_index`, after a change to its value.
    pub fn heapify_if_active(&mut self, value_index: usize) {
        if let Some(heap_index) = self.heap_index(value_index) {
            self.heapify_down(heap_index);
            self.heapify_up(heap_index);
        }
    }

    /// The index with the greatest value.
    pub fn peek_max(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    pub fn peek_max_value(&self) -> Option<&V> {
        self.peek_max().map(|value_index| self.value_at(value_index))
    }

    /// Takes the index with the greatest value off the heap.
    pub fn pop_max(&mut self) -> Option<usize> {
        let max_index = self.peek_max()?;
        self.remove(max_index);
        Some(max_index)
    }

    /// Rebuilds the heap order, e.g. after [apply_to_all](IndexHeap::apply_to_all).
    pub fn heapify(&mut self) {
        for heap_index in (0..self.heap.len() / 2).rev() {
            self.heapify_down(heap_index)
        }
    }

    /// # Panics
    /// If `value_index` has not been [added](IndexHeap::add).
    pub fn value_at(&self, value_index: usize) -> &V {
        &self.values[value_index]
    }

    /// Replaces each stored value `v` with `f(v)`, leaving the heap order untouched.
    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(value)
        }
    }

    /// Overwrites the value at `value_index` without restoring the heap order.
    pub fn revalue(&mut self, value_index: usize, value: V) {
        self.values[value_index] = value
    }

    /// The size of the store, on or off the heap.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// True if no value is on the heap.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    fn heap_index(&self, value_index: usize) -> Option<usize> {
        self.position_in_heap.get(value_index).copied().flatten()
    }

    /// True if the value index at heap index `a` should be above the value index at heap index `b`.
    ///
    /// Larger values precede smaller values, and on a tie the lower value index precedes.
    fn precedes(&self, a: usize, b: usize) -> bool {
        let (index_a, index_b) = (self.heap[a], self.heap[b]);
        let (value_a, value_b) = (&self.values[index_a], &self.values[index_b]);
        value_a > value_b || (value_a == value_b && index_a < index_b)
    }

    /// Swaps the value indicies at heap indicies `a` and `b`, updating positions.
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position_in_heap[self.heap[a]] = Some(a);
        self.position_in_heap[self.heap[b]] = Some(b);
    }

    /// Shuffles the index down into the heap, if required.
    fn heapify_down(&mut self, mut heap_index: usize) {
        loop {
            let left = (2 * heap_index) + 1;
            let right = left + 1;
            let mut update = heap_index;

            if left < self.heap.len() && self.precedes(left, update) {
                update = left;
            }
            if right < self.heap.len() && self.precedes(right, update) {
                update = right;
            }

            if update == heap_index {
                break;
            }
            self.swap(heap_index, update);
            heap_index = update;
        }
    }

    /// Shuffles the index up the heap, if required.
    fn heapify_up(&mut self, mut heap_index: usize) {
        while heap_index > 0 {
            let parent = (heap_index - 1) / 2;
            if !self.precedes(heap_index, parent) {
                break;
            }
            self.swap(heap_index, parent);
            heap_index = parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_simple() {
        let mut test_heap = IndexHeap::default();
        test_heap.add(6, 10);
        test_heap.add(5, 20);
        test_heap.add(4, 30);
        test_heap.add(1, 60);
        test_heap.add(0, 70);
        for index in [6, 5, 4, 1, 0] {
            test_heap.activate(index);
        }

        assert_eq!(test_heap.pop_max(), Some(0));
        assert_eq!(test_heap.pop_max(), Some(1));
        assert_eq!(test_heap.pop_max(), Some(4));
        assert_eq!(test_heap.pop_max(), Some(5));
        assert_eq!(test_heap.pop_max(), Some(6));
        assert!(test_heap.pop_max().is_none());
    }

    #[test]
    fn heap_update() {
        let mut test_heap = IndexHeap::default();
        test_heap.add(6, 10);
        test_heap.add(4, 30);
        test_heap.add(1, 60);
        test_heap.add(0, 70);
        for index in [6, 4, 1, 0] {
            test_heap.activate(index);
        }

        for index in [0, 1, 4, 6] {
            test_heap.revalue(index, index as i32);
        }
        test_heap.heapify();

        assert_eq!(test_heap.pop_max(), Some(6));
        assert_eq!(test_heap.pop_max(), Some(4));
        assert_eq!(test_heap.pop_max(), Some(1));
        assert_eq!(test_heap.pop_max(), Some(0));
        assert!(test_heap.pop_max().is_none());
    }

    #[test]
    fn heap_ties_by_lowest_index() {
        let mut test_heap = IndexHeap::default();
        for index in (1..=8).rev() {
            test_heap.add(index, 0.0);
            test_heap.activate(index);
        }
        test_heap.revalue(5, 1.0);
        test_heap.heapify_if_active(5);

        assert_eq!(test_heap.pop_max(), Some(5));
        for expected in [1, 2, 3, 4, 6, 7, 8] {
            assert_eq!(test_heap.pop_max(), Some(expected));
        }
    }

    #[test]
    fn heap_remove() {
        let mut test_heap = IndexHeap::default();
        for index in [6, 5, 4, 1, 0] {
            test_heap.add(index, index as i32);
            test_heap.activate(index);
        }

        assert!(test_heap.remove(4));
        assert!(!test_heap.remove(4));
        assert!(test_heap.remove(6));
        assert!(!test_heap.add(4, 10));
        assert!(!test_heap.add(4, 1));
        assert!(!test_heap.is_active(4));
        test_heap.activate(4);

        assert_eq!(test_heap.pop_max(), Some(5));
        assert_eq!(test_heap.pop_max(), Some(1));
        assert_eq!(test_heap.pop_max(), Some(4));
        assert_eq!(test_heap.pop_max(), Some(0));
    }
}
