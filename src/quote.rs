use crate::market::MarketStatus;

/// Whether a quote was built from live upstream data or from the static
/// fallback catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteSource {
    Live,
    Fallback,
}

/// One normalized instrument quote.
///
/// Prices and change rates keep the upstream's own decimal formatting
/// (comma or dot separators) verbatim; parsing them into numbers is left to
/// presentation so repeated fetch cycles never compound rounding loss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub name: String,
    pub buying: String,
    pub selling: String,
    /// Signed percent change without the trailing `%`, `"0.00"` when the
    /// upstream omits it.
    pub change_rate: String,
    pub category: String,
    pub updated_at: String,
    pub market_status: MarketStatus,
    pub source: QuoteSource,
}
