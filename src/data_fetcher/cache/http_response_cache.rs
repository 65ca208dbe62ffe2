use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::LazyLock;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use super::types::{CacheInfo, CachedHttpResponse};
use crate::constants::{HTTP_RESPONSE_CACHE_CAPACITY, endpoints};

// LRU cache structure for list responses with TTL support, keyed by full URL
pub static HTTP_RESPONSE_CACHE: LazyLock<RwLock<LruCache<String, CachedHttpResponse>>> =
    LazyLock::new(|| {
        RwLock::new(LruCache::new(
            NonZeroUsize::new(HTTP_RESPONSE_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN),
        ))
    });

/// Caches HTTP response data with TTL
#[instrument(skip(url, data), fields(url = %url))]
pub async fn cache_http_response(url: String, data: String, ttl_seconds: u64) {
    let data_size = data.len();
    let cached_data = CachedHttpResponse::new(data, ttl_seconds);
    let mut cache = HTTP_RESPONSE_CACHE.write().await;
    cache.put(url.clone(), cached_data);

    debug!(
        "Cached HTTP response: url={}, data_size={}, ttl={}s",
        url, data_size, ttl_seconds
    );
}

/// Retrieves cached HTTP response if it's not expired
#[instrument(skip(url), fields(url = %url))]
pub async fn get_cached_http_response(url: &str) -> Option<String> {
    let mut cache = HTTP_RESPONSE_CACHE.write().await;

    if let Some(cached_entry) = cache.get(url) {
        if !cached_entry.is_expired() {
            debug!(
                "Cache hit for HTTP response: url={}, age={:?}",
                url,
                cached_entry.cached_at.elapsed()
            );
            return Some(cached_entry.data.clone());
        }

        warn!(
            "Removing expired HTTP response cache entry: url={}, age={:?}, ttl={:?}",
            url,
            cached_entry.cached_at.elapsed(),
            Duration::from_secs(cached_entry.ttl_seconds)
        );
        cache.pop(url);
    } else {
        debug!("Cache miss for HTTP response: url={}", url);
    }

    None
}

fn is_match_list_url(url: &str) -> bool {
    let path = url.split('?').next().unwrap_or(url);
    endpoints::MATCH_LISTS
        .iter()
        .any(|endpoint| path.ends_with(endpoint))
}

/// Drops every cached round-match, pending and played list so the next
/// lookup reflects a freshly closed match. Returns the number of entries removed.
pub async fn invalidate_match_lists() -> usize {
    let mut cache = HTTP_RESPONSE_CACHE.write().await;
    let stale: Vec<String> = cache
        .iter()
        .filter(|(url, _)| is_match_list_url(url))
        .map(|(url, _)| url.clone())
        .collect();

    for url in &stale {
        cache.pop(url);
    }

    info!("Invalidated {} cached match list(s)", stale.len());
    stale.len()
}

/// Gets the current HTTP response cache size and capacity for monitoring purposes
pub async fn get_http_response_cache_info() -> CacheInfo {
    let cache = HTTP_RESPONSE_CACHE.read().await;
    CacheInfo {
        size: cache.len(),
        capacity: cache.cap().get(),
    }
}

/// Clears all HTTP response cache entries
pub async fn clear_http_response_cache() {
    HTTP_RESPONSE_CACHE.write().await.clear();
}
