use chrono::{DateTime, Local};
use tracing::warn;

use crate::cache::DocumentCache;
use crate::fallback;
use crate::feed::QuoteFeed;
use crate::normalizer::{self, CURRENCY_INSTRUMENTS, METAL_INSTRUMENTS};
use crate::quote::Quote;

/// Composition root for quote acquisition: cache, normalization and fallback
/// substitution behind two total accessors. Both accessors read the same
/// cached document, so a combined view costs one upstream fetch.
pub struct QuoteService<F> {
    cache: DocumentCache<F>,
}

impl<F: QuoteFeed> QuoteService<F> {
    pub fn new(cache: DocumentCache<F>) -> Self {
        QuoteService { cache }
    }

    /// Metal quotes in catalog order. Never fails: any acquisition or
    /// normalization error is replaced by the fallback set.
    pub async fn metal_quotes(&self) -> Vec<Quote> {
        self.quotes(METAL_INSTRUMENTS, fallback::metal_quotes).await
    }

    /// Currency quotes in catalog order. Never fails, like `metal_quotes`.
    pub async fn currency_quotes(&self) -> Vec<Quote> {
        self.quotes(CURRENCY_INSTRUMENTS, fallback::currency_quotes)
            .await
    }

    async fn quotes(
        &self,
        instruments: &[(&str, &str)],
        fallback: fn(&DateTime<Local>) -> Vec<Quote>,
    ) -> Vec<Quote> {
        let now = Local::now();
        let normalized = match self.cache.document().await {
            Ok(document) => normalizer::normalize(&document, instruments, &now),
            Err(err) => Err(err),
        };
        normalized.unwrap_or_else(|err| {
            warn!(error = %err, "Quote acquisition failed, serving fallback data");
            fallback(&now)
        })
    }
}
