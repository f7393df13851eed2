//! In-memory usage analytics
//!
//! [`StatsStore`] owns every collection behind a single lock. Each image
//! request takes the write lock once and updates all collections; queries
//! take the read lock, and [`StatsStore::reset_all`] clears everything under
//! the write lock so no reader sees a partially cleared store.
//!
//! Collections grow for the lifetime of the process; only reads are bounded
//! (to `top_limit` entries). The hit log is pruned only when a retention is
//! configured.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::config::StatsConfig;
use crate::models::{HitCount, ImageRequest, PopularSize, ReferrerCount, SizePair};
use crate::utils::time::{duration_millis, window_title};

pub mod frequency;
pub mod hits;
pub mod recency;

pub use frequency::{FrequencyEntry, FrequencyTable};
pub use hits::HitWindow;
pub use recency::RecencyList;

#[derive(Debug, Default)]
struct StatsCollections {
    paths: RecencyList<String>,
    sizes: RecencyList<SizePair>,
    texts: RecencyList<String>,
    popular_sizes: FrequencyTable<SizePair>,
    referrers: FrequencyTable<String>,
    hits: HitWindow,
}

/// Shared handle to the analytics collections
#[derive(Clone)]
pub struct StatsStore {
    collections: Arc<RwLock<StatsCollections>>,
    config: Arc<StatsConfig>,
}

impl StatsStore {
    pub fn new(config: StatsConfig) -> Self {
        Self {
            collections: Arc::new(RwLock::new(StatsCollections::default())),
            config: Arc::new(config),
        }
    }

    /// Record one served image request at `now_millis`
    pub async fn record_request(&self, request: &ImageRequest, now_millis: i64) {
        let path = canonical_path(
            &request.path,
            request.square.as_deref(),
            request.text.as_deref(),
        );

        let mut collections = self.collections.write().await;

        collections.paths.record(path);
        collections.sizes.record(request.size);
        if let Some(text) = &request.text {
            collections.texts.record(text.clone());
        }
        collections.popular_sizes.record(request.size);
        if let Some(referrer) = &request.referrer {
            collections.referrers.record(referrer.clone());
        }
        collections.hits.record(now_millis);

        if let Some(retention) = self.config.hit_retention {
            // never prune hits that a reported window still covers
            let keep = retention.max(self.longest_window());
            let pruned = collections
                .hits
                .prune_before(now_millis.saturating_sub(duration_millis(keep)));
            if pruned > 0 {
                debug!(pruned, "Pruned expired hits");
            }
        }

        debug!(
            path = %request.path,
            size = %request.size,
            referrer = ?request.referrer,
            "Recorded image request"
        );
    }

    fn longest_window(&self) -> Duration {
        self.config
            .hit_windows
            .iter()
            .copied()
            .max()
            .unwrap_or_default()
    }

    pub async fn recent_paths(&self) -> Vec<String> {
        let collections = self.collections.read().await;
        collections.paths.top_recent(self.config.top_limit)
    }

    pub async fn recent_sizes(&self) -> Vec<SizePair> {
        let collections = self.collections.read().await;
        collections.sizes.top_recent(self.config.top_limit)
    }

    pub async fn recent_texts(&self) -> Vec<String> {
        let collections = self.collections.read().await;
        collections.texts.top_recent(self.config.top_limit)
    }

    /// Most requested sizes, highest count first
    pub async fn top_sizes(&self) -> Vec<PopularSize> {
        let collections = self.collections.read().await;
        collections
            .popular_sizes
            .top_recent(self.config.top_limit)
            .into_iter()
            .map(|entry| PopularSize {
                w: entry.key.width(),
                h: entry.key.height(),
                n: entry.count,
            })
            .collect()
    }

    /// Most frequent referrers, highest count first
    pub async fn top_referrers(&self) -> Vec<ReferrerCount> {
        let collections = self.collections.read().await;
        collections
            .referrers
            .top_recent(self.config.top_limit)
            .into_iter()
            .map(|entry| ReferrerCount {
                referrer: entry.key,
                n: entry.count,
            })
            .collect()
    }

    /// Hit counts for each configured window, measured against `now_millis`
    pub async fn hit_counts(&self, now_millis: i64) -> Vec<HitCount> {
        let windows: Vec<i64> = self
            .config
            .hit_windows
            .iter()
            .map(|window| duration_millis(*window))
            .collect();

        let counts = {
            let collections = self.collections.read().await;
            collections.hits.window_counts(now_millis, &windows)
        };

        self.config
            .hit_windows
            .iter()
            .zip(counts)
            .map(|(window, count)| HitCount {
                title: window_title(*window),
                count,
            })
            .collect()
    }

    /// Clear every collection in one step
    pub async fn reset_all(&self) {
        let mut collections = self.collections.write().await;
        *collections = StatsCollections::default();
        info!("All usage statistics cleared");
    }
}

impl Default for StatsStore {
    fn default() -> Self {
        Self::new(StatsConfig::default())
    }
}

/// Path string as stored in the recent-paths list
///
/// `square` is appended verbatim, `text` percent-encoded:
/// `/img/10/10?square=2&text=hi%20there`.
pub fn canonical_path(path: &str, square: Option<&str>, text: Option<&str>) -> String {
    match (square, text) {
        (Some(square), Some(text)) => format!(
            "{path}?square={square}&text={}",
            urlencoding::encode(text)
        ),
        (Some(square), None) => format!("{path}?square={square}"),
        (None, Some(text)) => format!("{path}?text={}", urlencoding::encode(text)),
        (None, None) => path.to_string(),
    }
}
