use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::error::FeedError;
use crate::feed::{QuoteFeed, RawDocument};

/// Maximum age of a cached document before a refresh is attempted.
pub const DEFAULT_TTL: Duration = Duration::from_secs(120);

struct CacheEntry {
    document: RawDocument,
    fetched_at: Instant,
}

/// Single-slot, time-bounded cache in front of the upstream feed.
///
/// The whole check-refresh-install sequence runs under one lock, so
/// concurrent callers never trigger duplicate upstream fetches: they wait
/// for the in-flight refresh and share its result. When a refresh fails and
/// a previous entry exists, the stale document is served unchanged —
/// staleness is preferred over unavailability.
pub struct DocumentCache<F> {
    feed: F,
    ttl: Duration,
    slot: Mutex<Option<CacheEntry>>,
}

impl<F: QuoteFeed> DocumentCache<F> {
    pub fn new(feed: F, ttl: Duration) -> Self {
        DocumentCache {
            feed,
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Returns the cached document, refreshing it first when absent or older
    /// than the TTL. Fails only on a cold start with an unreachable upstream.
    pub async fn document(&self) -> Result<RawDocument, FeedError> {
        let mut slot = self.slot.lock().await;

        if let Some(entry) = slot.as_ref()
            && entry.fetched_at.elapsed() <= self.ttl
        {
            debug!("Cache HIT");
            return Ok(entry.document.clone());
        }

        debug!("Cache MISS, refreshing from upstream");
        match self.feed.fetch_document().await {
            Ok(document) => {
                let entry = slot.insert(CacheEntry {
                    document,
                    fetched_at: Instant::now(),
                });
                Ok(entry.document.clone())
            }
            Err(err) => match slot.as_ref() {
                // The entry keeps its original timestamp: the next call past
                // the TTL retries the upstream.
                Some(entry) => {
                    warn!(error = %err, "Refresh failed, serving stale document");
                    Ok(entry.document.clone())
                }
                None => Err(FeedError::Unavailable(Box::new(err))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::RawValue;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedFeed {
        responses: Mutex<VecDeque<Result<RawDocument, FeedError>>>,
        call_count: AtomicUsize,
        delay: Duration,
    }

    impl ScriptedFeed {
        fn new(responses: Vec<Result<RawDocument, FeedError>>) -> Self {
            ScriptedFeed {
                responses: Mutex::new(responses.into()),
                call_count: AtomicUsize::new(0),
                delay: Duration::ZERO,
            }
        }

        fn calls(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl QuoteFeed for ScriptedFeed {
        async fn fetch_document(&self) -> Result<RawDocument, FeedError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.responses
                .lock()
                .await
                .pop_front()
                .unwrap_or(Err(FeedError::EmptyResult))
        }
    }

    fn document(stamp: &str) -> RawDocument {
        RawDocument::from([(
            "Update_Date".to_string(),
            RawValue::Metadata(stamp.to_string()),
        )])
    }

    fn decode_error() -> FeedError {
        FeedError::Decode(serde_json::from_str::<RawDocument>("nope").unwrap_err())
    }

    #[tokio::test]
    async fn test_second_call_within_ttl_reuses_document() {
        let feed = ScriptedFeed::new(vec![Ok(document("first")), Ok(document("second"))]);
        let cache = DocumentCache::new(feed, DEFAULT_TTL);

        let first = cache.document().await.unwrap();
        let second = cache.document().await.unwrap();

        assert_eq!(first, document("first"));
        assert_eq!(second, first);
        assert_eq!(cache.feed.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_is_replaced_wholesale() {
        let feed = ScriptedFeed::new(vec![Ok(document("first")), Ok(document("second"))]);
        let cache = DocumentCache::new(feed, DEFAULT_TTL);

        assert_eq!(cache.document().await.unwrap(), document("first"));
        tokio::time::advance(DEFAULT_TTL + Duration::from_secs(1)).await;
        assert_eq!(cache.document().await.unwrap(), document("second"));
        assert_eq!(cache.feed.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_refresh_serves_stale_document() {
        let feed = ScriptedFeed::new(vec![Ok(document("first")), Err(decode_error())]);
        let cache = DocumentCache::new(feed, DEFAULT_TTL);

        assert_eq!(cache.document().await.unwrap(), document("first"));
        tokio::time::advance(DEFAULT_TTL + Duration::from_secs(1)).await;

        // Refresh fails, previous document comes back unchanged
        assert_eq!(cache.document().await.unwrap(), document("first"));
        assert_eq!(cache.feed.calls(), 2);

        // And the next call past the TTL tries upstream again
        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(cache.document().await.unwrap(), document("first"));
        assert_eq!(cache.feed.calls(), 3);
    }

    #[tokio::test]
    async fn test_cold_start_with_failing_fetch_is_unavailable() {
        let feed = ScriptedFeed::new(vec![Err(decode_error())]);
        let cache = DocumentCache::new(feed, DEFAULT_TTL);

        let result = cache.document().await;
        assert!(matches!(result, Err(FeedError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_fetch() {
        let feed = ScriptedFeed {
            responses: Mutex::new(VecDeque::from([Ok(document("only"))])),
            call_count: AtomicUsize::new(0),
            delay: Duration::from_millis(50),
        };
        let cache = Arc::new(DocumentCache::new(feed, DEFAULT_TTL));

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                tokio::spawn(async move { cache.document().await.unwrap() })
            })
            .collect();

        for task in tasks {
            assert_eq!(task.await.unwrap(), document("only"));
        }
        assert_eq!(cache.feed.calls(), 1);
    }
}
