use gt_domain::ports::CacheStats;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-local hit/miss counters shared by the cache providers
#[derive(Debug, Default)]
pub(crate) struct HitCounters {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl HitCounters {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Stats record with hits, misses and hit rate filled in
    pub(crate) fn snapshot(&self, provider: &str) -> CacheStats {
        let mut stats = CacheStats::new(provider);
        stats.hits = self.hits.load(Ordering::Relaxed);
        stats.misses = self.misses.load(Ordering::Relaxed);
        stats.hit_rate = stats.calculate_hit_rate();
        stats
    }
}
