use thiserror::Error;

/// Failures between the upstream aggregator and the normalized quote sets.
///
/// Every variant is absorbed inside [`crate::service::QuoteService`], which
/// substitutes fallback data instead of surfacing an error to callers.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Transport failure, timeout, or non-success HTTP status.
    #[error("upstream request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not a well-formed quote document.
    #[error("malformed upstream document: {0}")]
    Decode(#[from] serde_json::Error),

    /// The cache is empty and the refresh attempt failed.
    #[error("no quote document available")]
    Unavailable(#[source] Box<FeedError>),

    /// A fetched document yielded no usable instruments.
    #[error("upstream document contains no usable instruments")]
    EmptyResult,
}
