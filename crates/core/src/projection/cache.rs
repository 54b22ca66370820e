//! Projection caching using Moka.
//!
//! Keys are a hash of the ordered record ids, the date range and the
//! configuration version. A record edited in place keeps its id, so callers
//! must bump the configuration version or call
//! [`ProjectionCache::invalidate_all`] when source records change.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use freightbooks_shared::types::TransactionId;
use moka::sync::Cache;

use super::pipeline::{BookkeepingEngine, Projection, ProjectionInput};

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 64;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// Cache for projections.
///
/// Thread-safe and cheap to clone; clones share storage.
#[derive(Clone)]
pub struct ProjectionCache {
    cache: Cache<u64, Arc<Projection>>,
}

impl ProjectionCache {
    /// Creates a cache with default settings (64 entries, 5 minute TTL).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a cache with custom capacity and time-to-live.
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Cache key of an input snapshot.
    #[must_use]
    pub fn key(input: &ProjectionInput<'_>) -> u64 {
        let mut hasher = DefaultHasher::new();
        for invoice in input.invoices {
            TransactionId::from(invoice.id).hash(&mut hasher);
        }
        for expense in input.expenses {
            TransactionId::from(expense.id).hash(&mut hasher);
        }
        input.range.hash(&mut hasher);
        input.config.version.hash(&mut hasher);
        hasher.finish()
    }

    /// Returns the cached projection for `input`, deriving it on a miss.
    #[must_use]
    pub fn get_or_project(&self, input: &ProjectionInput<'_>) -> Arc<Projection> {
        self.cache
            .get_with(Self::key(input), || Arc::new(BookkeepingEngine::project(input)))
    }

    /// Returns true if a projection for `input` is cached.
    #[must_use]
    pub fn contains(&self, input: &ProjectionInput<'_>) -> bool {
        self.cache.contains_key(&Self::key(input))
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs pending maintenance so counts and invalidations are observable.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for ProjectionCache {
    fn default() -> Self {
        Self::new()
    }
}
