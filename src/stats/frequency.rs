//! Per-key occurrence counts kept sorted by count
//!
//! New keys are inserted at the front and the whole table is then stable
//! sorted by descending count. Among equal counts this ranks the most
//! recently inserted key first, while keys that were merely incremented keep
//! their relative position. This is not a strict most-recently-used
//! tiebreak, and the observable ordering depends on it.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry<K> {
    pub key: K,
    pub count: u64,
}

#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    entries: Vec<FrequencyEntry<K>>,
}

impl<K: PartialEq + Clone> FrequencyTable<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Count one occurrence of `key` and restore descending order
    pub fn record(&mut self, key: K) {
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => entry.count += 1,
            None => self.entries.insert(0, FrequencyEntry { key, count: 1 }),
        }

        match self.entries.first() {
            None => return,
            Some(top) if top.count == 0 => return,
            Some(_) => {}
        }

        // sort_by is stable
        self.entries.sort_by(|a, b| b.count.cmp(&a.count));
    }

    /// The first `min(limit, len)` entries, highest count first
    pub fn top_recent(&self, limit: usize) -> Vec<FrequencyEntry<K>> {
        self.entries.iter().take(limit).cloned().collect()
    }

    /// Current count for `key`, if it has been seen
    pub fn count_of(&self, key: &K) -> Option<u64> {
        self.entries
            .iter()
            .find(|entry| entry.key == *key)
            .map(|entry| entry.count)
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

impl<K: PartialEq + Clone> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<K: Clone + PartialEq>(table: &FrequencyTable<K>) -> Vec<(K, u64)> {
        table
            .top_recent(usize::MAX)
            .into_iter()
            .map(|entry| (entry.key, entry.count))
            .collect()
    }

    #[test]
    fn test_record_counts_occurrences() {
        let mut table = FrequencyTable::new();
        table.record("a.com");
        table.record("a.com");
        table.record("a.com");
        table.record("b.com");

        assert_eq!(keys(&table), vec![("a.com", 3), ("b.com", 1)]);
        assert_eq!(table.count_of(&"a.com"), Some(3));
        assert_eq!(table.count_of(&"c.com"), None);
    }

    #[test]
    fn test_new_keys_rank_first_among_ties() {
        let mut table = FrequencyTable::new();
        table.record("x");
        table.record("y");
        table.record("z");

        assert_eq!(keys(&table), vec![("z", 1), ("y", 1), ("x", 1)]);
    }

    #[test]
    fn test_incremented_key_keeps_position_among_ties() {
        let mut table = FrequencyTable::new();
        table.record("x");
        table.record("y");
        table.record("x");
        // [x:2, y:1]
        table.record("y");
        // y is incremented in place behind x, and the stable sort keeps it there
        assert_eq!(keys(&table), vec![("x", 2), ("y", 2)]);
    }

    #[test]
    fn test_new_key_sorts_behind_higher_counts() {
        let mut table = FrequencyTable::new();
        table.record("a");
        table.record("a");
        table.record("b");

        assert_eq!(keys(&table), vec![("a", 2), ("b", 1)]);
    }

    #[test]
    fn test_top_recent_limit_and_clear() {
        let mut table = FrequencyTable::new();
        for i in 0..12 {
            table.record(i);
        }
        assert_eq!(table.top_recent(10).len(), 10);
        assert_eq!(table.len(), 12);

        table.clear();
        assert!(table.is_empty());
    }
}
