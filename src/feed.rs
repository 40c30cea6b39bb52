use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::FeedError;

/// Key under which the upstream document carries its own update timestamp.
pub const UPDATE_DATE_KEY: &str = "Update_Date";

/// One upstream document as received: instrument codes mapped to quote
/// records, plus a handful of plain metadata strings, all in a single flat
/// object. Read-only after receipt.
pub type RawDocument = HashMap<String, RawValue>;

/// A single value in the upstream document. The aggregator mixes nested
/// instrument records and bare strings under sibling keys, so each value is
/// decoded as whichever shape matches. Anything else is kept as-is and
/// skipped during normalization rather than failing the whole document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Instrument(RawInstrument),
    Metadata(String),
    Other(serde_json::Value),
}

/// Raw quote fields as the aggregator spells them. Everything is optional
/// text in the upstream's locale formatting; nothing is reformatted here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawInstrument {
    #[serde(rename = "Alış")]
    pub buying: Option<String>,
    #[serde(rename = "Satış")]
    pub selling: Option<String>,
    #[serde(rename = "Değişim")]
    pub change_rate: Option<String>,
    #[serde(rename = "Tür")]
    pub category: Option<String>,
}

/// Source of raw quote documents, normally one HTTP aggregator endpoint.
#[async_trait]
pub trait QuoteFeed: Send + Sync {
    async fn fetch_document(&self) -> Result<RawDocument, FeedError>;
}
