//! Bounded history buffers for the live table and chart.

mod series;

use std::collections::VecDeque;

pub use series::RollingSeries;

/// Push `value` at the newest end, dropping the oldest entry once `cap` is exceeded.
///
/// Returns the evicted entry, if any.
pub fn push_capped<T>(dq: &mut VecDeque<T>, value: T, cap: usize) -> Option<T> {
    dq.push_back(value);
    if dq.len() > cap {
        dq.pop_front()
    } else {
        None
    }
}

/// Fixed-capacity window of the most recent entries.
///
/// Entries are stored oldest first; [`RollingWindow::newest_first`] gives the
/// order a telemetry table is displayed in.
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingWindow<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: T) -> Option<T> {
        push_capped(&mut self.items, value, self.capacity)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn newest(&self) -> Option<&T> {
        self.items.back()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }

    pub fn newest_first(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_capped_evicts_oldest() {
        let mut dq = VecDeque::new();
        assert_eq!(push_capped(&mut dq, 1, 2), None);
        assert_eq!(push_capped(&mut dq, 2, 2), None);
        assert_eq!(push_capped(&mut dq, 3, 2), Some(1));
        assert_eq!(dq, VecDeque::from(vec![2, 3]));
    }

    #[test]
    fn test_window_length_is_min_of_pushes_and_capacity() {
        let mut window = RollingWindow::new(20);
        for i in 1..=50 {
            window.push(i);
            assert_eq!(window.len(), i.min(20));
        }
        assert_eq!(window.newest(), Some(&50));
        assert_eq!(window.iter().next(), Some(&31));
    }

    #[test]
    fn test_newest_first_order() {
        let mut window = RollingWindow::new(3);
        for i in 0..5 {
            window.push(i);
        }
        let rows: Vec<_> = window.newest_first().copied().collect();
        assert_eq!(rows, vec![4, 3, 2]);
    }

    #[test]
    fn test_clear() {
        let mut window = RollingWindow::new(4);
        window.push("a");
        window.push("b");
        window.clear();
        assert!(window.is_empty());
        assert_eq!(window.capacity(), 4);
    }
}
