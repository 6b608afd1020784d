
/// Entry in the heap
#[derive(Debug, Clone)]
struct Entry<T> {
    element: T,
    priority: f64,
}


/// Binary min-heap keyed by an `f64` priority
///
/// The smallest priority is popped first. Entries with equal priority come out
/// in no particular order. There is no decrease-key, so the same element may be
/// pushed several times and each copy is popped separately.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T> MinHeap<T> {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Priority of the entry `pop` would return next
    pub fn peek_priority(&self) -> Option<f64> {
        self.entries.first().map(|entry| entry.priority)
    }

    /// Insert an element, O(log n)
    pub fn push(&mut self, element: T, priority: f64) {
        self.entries.push(Entry { element, priority });
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove the element with the smallest priority, O(log n)
    pub fn pop(&mut self) -> Option<T> {
        let last = self.entries.len().checked_sub(1)?;
        self.entries.swap(0, last);
        let min = self.entries.pop()?;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(min.element)
    }

    /// Move the entry at `index` up until its parent is no larger
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[parent].priority <= self.entries[index].priority {
                break;
            }
            self.entries.swap(parent, index);
            index = parent;
        }
    }

    /// Move the entry at `index` down, swapping with the smaller child while that child is smaller
    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = index * 2 + 1;
            let right = left + 1;
            if left >= len {
                break;
            }

            let mut smaller = left;
            if right < len && self.entries[right].priority < self.entries[left].priority {
                smaller = right;
            }

            if self.entries[smaller].priority >= self.entries[index].priority {
                break;
            }
            self.entries.swap(smaller, index);
            index = smaller;
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn drain<T>(heap: &mut MinHeap<T>) -> Vec<T> {
        let mut out = Vec::new();
        while let Some(element) = heap.pop() {
            out.push(element);
        }
        out
    }

    #[test]
    fn test_pops_in_priority_order() {
        let mut heap = MinHeap::new();
        heap.push("c", 3.0);
        heap.push("a", 1.0);
        heap.push("e", 5.0);
        heap.push("b", 2.0);
        heap.push("d", 4.0);

        assert_eq!(heap.len(), 5);
        assert_eq!(heap.peek_priority(), Some(1.0));
        assert_eq!(drain(&mut heap), vec!["a", "b", "c", "d", "e"]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_with_capacity_starts_empty() {
        let mut heap = MinHeap::with_capacity(8);
        assert!(heap.is_empty());

        heap.push('b', 2.0);
        heap.push('a', 1.0);
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.pop(), Some('a'));
    }

    #[test]
    fn test_pop_empty() {
        let mut heap: MinHeap<u32> = MinHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), None);
        assert_eq!(heap.peek_priority(), None);
    }

    #[test]
    fn test_duplicate_elements_are_kept() {
        let mut heap = MinHeap::new();
        heap.push(7, 10.0);
        heap.push(7, 2.0);
        heap.push(3, 5.0);

        assert_eq!(drain(&mut heap), vec![7, 3, 7]);
    }

    #[test]
    fn test_random_priorities_are_non_decreasing() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let mut heap = MinHeap::new();
            let count = rng.random_range(1..200);
            for i in 0..count {
                // coarse priorities so ties are common
                let priority = rng.random_range(0..20) as f64 * 0.5;
                heap.push(i, priority);
            }

            let mut popped = Vec::new();
            while let Some(priority) = heap.peek_priority() {
                heap.pop().unwrap();
                popped.push(priority);
            }

            assert_eq!(popped.len(), count);
            assert!(popped.windows(2).all(|w| w[0] <= w[1]), "out of order: {popped:?}");
        }
    }

    #[test]
    fn test_interleaved_push_pop() {
        let mut heap = MinHeap::new();
        heap.push('x', 4.0);
        heap.push('y', 1.0);
        assert_eq!(heap.pop(), Some('y'));

        heap.push('z', 0.5);
        heap.push('w', 9.0);
        assert_eq!(heap.pop(), Some('z'));
        assert_eq!(heap.pop(), Some('x'));
        assert_eq!(heap.pop(), Some('w'));
        assert_eq!(heap.pop(), None);
    }
}
