//! Bounded LRU memoization of conversion results.
//!
//! The pure conversion path ([`convert_to_all_formats`]) never touches a
//! cache; only the optimized entry point does. Callers needing isolation
//! (tests asserting eviction order, per-worker caches under parallelism)
//! construct their own [`ConversionCache`]; the module-level functions share
//! one process-wide instance behind a mutex, since the read-then-promote and
//! evict-then-insert sequences are not atomic.

use std::num::NonZeroUsize;
use std::sync::{Mutex, OnceLock};

use lru::LruCache;
use tracing::debug;

use crate::convert::{convert_to_all_formats, ConversionOptions, ConversionResult};

pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// LRU cache of [`ConversionResult`]s keyed by `(input, options)`.
pub struct ConversionCache {
    entries: LruCache<String, ConversionResult>,
}

impl ConversionCache {
    /// A cache holding at most `capacity` entries; a zero capacity is
    /// clamped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Cache key: the raw input followed by the serialized options, so the
    /// same text under different options occupies distinct entries.
    fn key(text: &str, options: &ConversionOptions) -> String {
        let opts = serde_json::to_string(options).expect("options must serialize");
        format!("{text}|{opts}")
    }

    /// Return the cached result for `(text, options)`, converting and
    /// inserting on a miss. A hit promotes the entry to most-recently-used;
    /// an insert at capacity evicts the least-recently-used entry. Blank
    /// input short-circuits without touching the cache.
    pub fn get_or_convert(&mut self, text: &str, options: &ConversionOptions) -> ConversionResult {
        if text.trim().is_empty() {
            return ConversionResult::default();
        }

        let key = Self::key(text, options);
        if let Some(hit) = self.entries.get(&key) {
            debug!(chars = text.chars().count(), "conversion cache hit");
            return hit.clone();
        }

        let result = convert_to_all_formats(text, options);
        if self.entries.len() == self.entries.cap().get() {
            debug!("conversion cache at capacity, evicting least-recently-used");
        }
        self.entries.push(key, result.clone());
        result
    }

    /// Whether `(text, options)` is cached, without promoting the entry.
    pub fn contains(&self, text: &str, options: &ConversionOptions) -> bool {
        self.entries.contains(&Self::key(text, options))
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

impl Default for ConversionCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

fn global_cache() -> &'static Mutex<ConversionCache> {
    static CACHE: OnceLock<Mutex<ConversionCache>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(ConversionCache::default()))
}

/// Cached variant of [`convert_to_all_formats`], same contract. Uses the
/// process-wide cache.
pub fn optimized_convert_to_all_formats(
    text: &str,
    options: &ConversionOptions,
) -> ConversionResult {
    if text.trim().is_empty() {
        return ConversionResult::default();
    }
    let mut cache = global_cache().lock().unwrap_or_else(|e| e.into_inner());
    cache.get_or_convert(text, options)
}

/// Empty the process-wide conversion cache.
pub fn clear_conversion_cache() {
    global_cache()
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .clear();
}
