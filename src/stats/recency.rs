//! Most-recent-first list without duplicates
//!
//! Recording a value that is already present moves it to the front, so the
//! list always reflects the order in which distinct values were last seen.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct RecencyList<T> {
    entries: VecDeque<T>,
}

impl<T: PartialEq + Clone> RecencyList<T> {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Move `value` to the front, removing any earlier occurrence
    pub fn record(&mut self, value: T) {
        if let Some(index) = self.entries.iter().position(|entry| *entry == value) {
            self.entries.remove(index);
        }
        self.entries.push_front(value);
    }

    /// The first `min(limit, len)` values, most recent first
    pub fn top_recent(&self, limit: usize) -> Vec<T> {
        self.entries.iter().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: PartialEq + Clone> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_record_moves_duplicate_to_front() {
        let mut list = RecencyList::new();
        list.record("/img/1/1");
        list.record("/img/2/2");
        list.record("/img/1/1");

        assert_eq!(list.top_recent(10), vec!["/img/1/1", "/img/2/2"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_top_recent_is_bounded() {
        let mut list = RecencyList::new();
        for i in 0..15 {
            list.record(i);
        }

        let top = list.top_recent(10);
        assert_eq!(top, (5..15).rev().collect::<Vec<_>>());
        // reading does not consume anything
        assert_eq!(list.len(), 15);
        assert_eq!(list.top_recent(100).len(), 15);
    }

    #[test]
    fn test_clear() {
        let mut list = RecencyList::new();
        list.record("hello".to_string());
        list.clear();
        assert!(list.is_empty());
        assert!(list.top_recent(10).is_empty());
    }

    proptest! {
        #[test]
        fn prop_no_duplicates_and_last_value_first(values in prop::collection::vec(0u8..20, 1..200)) {
            let mut list = RecencyList::new();
            for value in &values {
                list.record(*value);
                prop_assert_eq!(list.top_recent(1), vec![*value]);
            }

            let all = list.top_recent(usize::MAX);
            let mut deduped = all.clone();
            deduped.sort_unstable();
            deduped.dedup();
            prop_assert_eq!(deduped.len(), all.len());
        }

        #[test]
        fn prop_top_recent_returns_prefix(values in prop::collection::vec(0u8..50, 0..100), limit in 0usize..30) {
            let mut list = RecencyList::new();
            for value in values {
                list.record(value);
            }

            let all = list.top_recent(usize::MAX);
            let top = list.top_recent(limit);
            prop_assert_eq!(top.len(), limit.min(all.len()));
            prop_assert_eq!(&all[..top.len()], &top[..]);
        }
    }
}
