//! Append-only log of served-image timestamps
//!
//! Every hit is tested against every window, so a hit inside the shortest
//! window is also counted by all the longer ones. Nothing is evicted unless
//! the caller asks for it with [`HitWindow::prune_before`].

#[derive(Debug, Clone, Default)]
pub struct HitWindow {
    hits: Vec<i64>,
}

impl HitWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hit at `now_millis`
    pub fn record(&mut self, now_millis: i64) {
        self.hits.push(now_millis);
    }

    /// For each window size, the number of hits with
    /// `timestamp > now_millis - window`
    pub fn window_counts(&self, now_millis: i64, windows_millis: &[i64]) -> Vec<u64> {
        let mut counts = vec![0u64; windows_millis.len()];
        for &hit in &self.hits {
            for (count, &window) in counts.iter_mut().zip(windows_millis) {
                if hit > now_millis.saturating_sub(window) {
                    *count += 1;
                }
            }
        }
        counts
    }

    /// Drop hits at or before `cutoff_millis`, returning how many were removed
    pub fn prune_before(&mut self, cutoff_millis: i64) -> usize {
        let before = self.hits.len();
        self.hits.retain(|&hit| hit > cutoff_millis);
        before - self.hits.len()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn clear(&mut self) {
        self.hits.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WINDOWS: [i64; 3] = [5_000, 10_000, 15_000];

    #[test]
    fn test_window_counts_are_cumulative() {
        let now = 100_000;
        let mut window = HitWindow::new();
        window.record(now - 1_000);
        window.record(now - 7_000);
        window.record(now - 12_000);
        window.record(now - 20_000);

        assert_eq!(window.window_counts(now, &WINDOWS), vec![1, 2, 3]);
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let now = 50_000;
        let mut window = HitWindow::new();
        window.record(now - 5_000);

        assert_eq!(window.window_counts(now, &WINDOWS), vec![0, 1, 1]);
    }

    #[test]
    fn test_duplicate_timestamps_all_count() {
        let now = 10_000;
        let mut window = HitWindow::new();
        window.record(now);
        window.record(now);

        assert_eq!(window.window_counts(now, &WINDOWS), vec![2, 2, 2]);
        assert_eq!(window.len(), 2);
    }

    #[test]
    fn test_prune_before() {
        let mut window = HitWindow::new();
        window.record(1_000);
        window.record(2_000);
        window.record(3_000);

        assert_eq!(window.prune_before(2_000), 2);
        assert_eq!(window.len(), 1);

        window.clear();
        assert!(window.is_empty());
        assert_eq!(window.window_counts(3_000, &WINDOWS), vec![0, 0, 0]);
    }

    proptest! {
        #[test]
        fn prop_counts_monotonic_across_windows(
            offsets in prop::collection::vec(0i64..30_000, 0..100),
        ) {
            let now = 1_000_000;
            let mut window = HitWindow::new();
            for offset in offsets {
                window.record(now - offset);
            }

            let counts = window.window_counts(now, &WINDOWS);
            prop_assert!(counts[0] <= counts[1]);
            prop_assert!(counts[1] <= counts[2]);
        }
    }
}
