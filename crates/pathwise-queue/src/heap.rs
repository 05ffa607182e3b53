//! The heap itself.

use std::slice;
use std::vec;

/// A growable binary min-heap.
///
/// `pop` always returns the smallest element by the element's [`Ord`].
/// Equal elements may coexist (multiset semantics); their relative pop
/// order is unspecified, so callers that need a deterministic tie-break
/// encode it in the element itself, for example with a sequence number.
/// For a max-heap, wrap elements in [`std::cmp::Reverse`].
///
/// The heap lives in a single `Vec` with the children of the element at
/// `i` stored at `2i + 1` and `2i + 2`. `push`, `pop`, [`remove`] and
/// [`update_priority`] are `O(log n)`; the predicate-based operations pay
/// an additional `O(n)` scan to locate their element; [`peek`], [`len`]
/// and [`is_empty`] are `O(1)`.
///
/// [`remove`]: Self::remove
/// [`update_priority`]: Self::update_priority
/// [`peek`]: Self::peek
/// [`len`]: Self::len
/// [`is_empty`]: Self::is_empty
#[derive(Clone, Debug)]
pub struct PriorityQueue<T> {
    heap: Vec<T>,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    /// Creates an empty queue with room for `capacity` elements before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Adds an element to the queue.
    pub fn push(&mut self, element: T) {
        self.heap.push(element);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the smallest element, or `None` if the queue
    /// is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    /// Returns the smallest element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes all elements, keeping the allocation.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Whether any element satisfies `pred`. `O(n)`.
    pub fn contains(&self, pred: impl FnMut(&T) -> bool) -> bool {
        self.heap.iter().any(pred)
    }

    /// Removes and returns the first element satisfying `pred`, or
    /// `None` if no element matches. Which of several matching elements
    /// is taken is unspecified.
    pub fn remove(&mut self, pred: impl FnMut(&T) -> bool) -> Option<T> {
        let idx = self.heap.iter().position(pred)?;
        let removed = self.heap.swap_remove(idx);
        if idx < self.heap.len() {
            self.repair(idx);
        }
        Some(removed)
    }

    /// Finds the first element satisfying `pred`, applies `mutate` to it
    /// in place, and restores heap order. Returns `false` if no element
    /// matched (in which case `mutate` is never called).
    ///
    /// `mutate` may change the element's ordering freely; raising and
    /// lowering its priority are both handled.
    pub fn update_priority(
        &mut self,
        pred: impl FnMut(&T) -> bool,
        mutate: impl FnOnce(&mut T),
    ) -> bool {
        let Some(idx) = self.heap.iter().position(pred) else {
            return false;
        };
        mutate(&mut self.heap[idx]);
        self.repair(idx);
        true
    }

    /// Keeps only the elements satisfying `pred`, then rebuilds heap
    /// order in `O(n)`.
    pub fn retain(&mut self, pred: impl FnMut(&T) -> bool) {
        self.heap.retain(pred);
        self.heapify();
    }

    /// Consumes the queue and returns its elements in increasing order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Some(element) = self.pop() {
            sorted.push(element);
        }
        sorted
    }

    /// Restores the heap property over the whole vector, Floyd style:
    /// sift down every interior node from the last parent to the root.
    fn heapify(&mut self) {
        for idx in (0..self.heap.len() / 2).rev() {
            self.sift_down(idx);
        }
    }

    /// Restores heap order after the element at `idx` changed in place.
    /// A changed element moves either toward the root or toward the
    /// leaves, never both, so one directed pass suffices.
    fn repair(&mut self, idx: usize) {
        if idx > 0 && self.heap[idx] < self.heap[(idx - 1) / 2] {
            self.sift_up(idx);
        } else {
            self.sift_down(idx);
        }
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.heap[idx] < self.heap[parent] {
                self.heap.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;
            if left < self.heap.len() && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }
            if smallest == idx {
                return;
            }
            self.heap.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<T> PriorityQueue<T> {
    /// Iterates over the elements in arbitrary (heap) order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.heap.iter()
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a queue from an existing vector in `O(n)`, cheaper than
/// pushing the elements one by one.
impl<T: Ord> From<Vec<T>> for PriorityQueue<T> {
    fn from(heap: Vec<T>) -> Self {
        let mut queue = Self { heap };
        queue.heapify();
        queue
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Ord> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

/// Consuming iteration in arbitrary (heap) order. For sorted consumption
/// use [`PriorityQueue::into_sorted_vec`].
impl<T> IntoIterator for PriorityQueue<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.heap.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PriorityQueue<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.heap.iter()
    }
}

// ------- serde -------

/// Serializes as a plain sequence of elements in arbitrary order.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PriorityQueue<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.heap.serialize(serializer)
    }
}

/// Deserializes from a sequence of elements, restoring heap order on the
/// way in so the sequence does not need to be a valid heap layout.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PriorityQueue<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = Vec::<T>::deserialize(deserializer)?;
        Ok(Self::from(elements))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{RngExt, SeedableRng};

    fn drain(mut queue: PriorityQueue<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        while let Some(element) = queue.pop() {
            out.push(element);
        }
        out
    }

    /// The heap property: every parent is no greater than its children.
    fn assert_heap_order(queue: &PriorityQueue<i32>) {
        let heap: Vec<i32> = queue.iter().copied().collect();
        for (idx, &element) in heap.iter().enumerate().skip(1) {
            let parent = heap[(idx - 1) / 2];
            assert!(parent <= element, "heap order violated at index {idx}");
        }
    }

    #[test]
    fn test_push_pop_ordering() {
        let mut queue = PriorityQueue::new();
        for n in [5, 1, 4, 2, 3] {
            queue.push(n);
        }
        assert_eq!(queue.len(), 5);
        assert_eq!(drain(queue), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_queue() {
        let mut queue: PriorityQueue<i32> = PriorityQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.pop(), None);
        // Popping an empty queue leaves it usable.
        queue.push(7);
        assert_eq!(queue.pop(), Some(7));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut queue = PriorityQueue::new();
        queue.push(2);
        queue.push(1);
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.peek(), Some(&2));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut queue = PriorityQueue::new();
        for n in [3, 1, 3, 1, 2] {
            queue.push(n);
        }
        assert_eq!(drain(queue), vec![1, 1, 2, 3, 3]);
    }

    #[test]
    fn test_from_vec_heapifies() {
        let queue = PriorityQueue::from(vec![9, 3, 7, 1, 8, 2, 5]);
        assert_heap_order(&queue);
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(drain(queue), vec![1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn test_collect_and_extend() {
        let mut queue: PriorityQueue<i32> = (0..5).rev().collect();
        assert_eq!(queue.peek(), Some(&0));
        queue.extend([10, -1, 3]);
        assert_eq!(drain(queue), vec![-1, 0, 1, 2, 3, 3, 4, 10]);
    }

    #[test]
    fn test_contains() {
        let queue: PriorityQueue<i32> = [4, 8, 15].into_iter().collect();
        assert!(queue.contains(|&n| n == 8));
        assert!(queue.contains(|&n| n > 10));
        assert!(!queue.contains(|&n| n == 16));
        assert!(!PriorityQueue::<i32>::new().contains(|_| true));
    }

    #[test]
    fn test_remove_root() {
        let mut queue: PriorityQueue<i32> = [6, 2, 9, 4].into_iter().collect();
        assert_eq!(queue.remove(|&n| n == 2), Some(2));
        assert_heap_order(&queue);
        assert_eq!(drain(queue), vec![4, 6, 9]);
    }

    #[test]
    fn test_remove_interior() {
        let mut queue: PriorityQueue<i32> = (0..20).rev().collect();
        assert_eq!(queue.remove(|&n| n == 13), Some(13));
        assert_eq!(queue.remove(|&n| n == 0), Some(0));
        assert_eq!(queue.remove(|&n| n == 19), Some(19));
        assert_heap_order(&queue);
        let expected: Vec<i32> = (1..19).filter(|&n| n != 13).collect();
        assert_eq!(drain(queue), expected);
    }

    #[test]
    fn test_remove_missing() {
        let mut queue: PriorityQueue<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(queue.remove(|&n| n == 42), None);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_remove_last_element() {
        let mut queue = PriorityQueue::new();
        queue.push(5);
        assert_eq!(queue.remove(|&n| n == 5), Some(5));
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_update_priority_raise() {
        let mut queue: PriorityQueue<i32> = [10, 20, 30, 40].into_iter().collect();
        // 40 becomes the new minimum and must surface at the root.
        assert!(queue.update_priority(|&n| n == 40, |n| *n = 1));
        assert_heap_order(&queue);
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(drain(queue), vec![1, 10, 20, 30]);
    }

    #[test]
    fn test_update_priority_lower() {
        let mut queue: PriorityQueue<i32> = [10, 20, 30, 40].into_iter().collect();
        // The root sinks once it is no longer the minimum.
        assert!(queue.update_priority(|&n| n == 10, |n| *n = 99));
        assert_heap_order(&queue);
        assert_eq!(queue.peek(), Some(&20));
        assert_eq!(drain(queue), vec![20, 30, 40, 99]);
    }

    #[test]
    fn test_update_priority_missing() {
        let mut queue: PriorityQueue<i32> = [1, 2].into_iter().collect();
        assert!(!queue.update_priority(|&n| n == 3, |n| *n = 0));
        assert_eq!(drain(queue), vec![1, 2]);
    }

    #[test]
    fn test_retain() {
        let mut queue: PriorityQueue<i32> = (0..10).collect();
        queue.retain(|&n| n % 2 == 0);
        assert_heap_order(&queue);
        assert_eq!(drain(queue), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_into_sorted_vec() {
        let queue: PriorityQueue<i32> = [3, -1, 2, -1, 0].into_iter().collect();
        assert_eq!(queue.into_sorted_vec(), vec![-1, -1, 0, 2, 3]);
    }

    #[test]
    fn test_clear_keeps_queue_usable() {
        let mut queue: PriorityQueue<i32> = [1, 2, 3].into_iter().collect();
        queue.clear();
        assert!(queue.is_empty());
        queue.push(9);
        assert_eq!(queue.pop(), Some(9));
    }

    #[test]
    fn test_iter_visits_every_element() {
        let queue: PriorityQueue<i32> = [3, 1, 2].into_iter().collect();
        let mut seen: Vec<i32> = queue.iter().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3]);
        let mut owned: Vec<i32> = queue.into_iter().collect();
        owned.sort_unstable();
        assert_eq!(owned, vec![1, 2, 3]);
    }

    #[test]
    fn test_random_drain_matches_sort() {
        let mut rng = SmallRng::seed_from_u64(0x9e3779b9);
        for _ in 0..10 {
            let mut elements: Vec<i32> = (0..200).map(|_| rng.random_range(-50..50)).collect();
            let queue: PriorityQueue<i32> = elements.iter().copied().collect();
            assert_heap_order(&queue);
            elements.sort_unstable();
            assert_eq!(drain(queue), elements);
        }
    }

    #[test]
    fn test_random_removals_keep_order() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut elements: Vec<i32> = (0..100).map(|_| rng.random_range(0..1000)).collect();
        let mut queue: PriorityQueue<i32> = elements.iter().copied().collect();
        for _ in 0..40 {
            let victim = elements[rng.random_range(0..elements.len())];
            let pos = elements.iter().position(|&n| n == victim).unwrap();
            elements.remove(pos);
            assert_eq!(queue.remove(|&n| n == victim), Some(victim));
            assert_heap_order(&queue);
        }
        elements.sort_unstable();
        assert_eq!(drain(queue), elements);
    }

    #[test]
    fn test_reverse_gives_max_heap() {
        use std::cmp::Reverse;
        let mut queue: PriorityQueue<Reverse<i32>> =
            [1, 5, 3].into_iter().map(Reverse).collect();
        assert_eq!(queue.pop(), Some(Reverse(5)));
        assert_eq!(queue.pop(), Some(Reverse(3)));
        assert_eq!(queue.pop(), Some(Reverse(1)));
    }
}
