use chrono::{DateTime, TimeZone};

use crate::error::FeedError;
use crate::feed::{RawDocument, RawValue, UPDATE_DATE_KEY};
use crate::market::MarketStatus;
use crate::quote::{Quote, QuoteSource};

/// Metal instruments in display order, mapped to their upstream keys.
pub const METAL_INSTRUMENTS: &[(&str, &str)] = &[
    ("Gram Altın", "gram-altin"),
    ("Has Altın", "gram-has-altin"),
    ("Çeyrek Altın", "ceyrek-altin"),
    ("Yarım Altın", "yarim-altin"),
    ("Tam Altın", "tam-altin"),
    ("Cumhuriyet Altını", "cumhuriyet-altini"),
    ("Ata Altın", "ata-altin"),
    ("14 Ayar Altın", "14-ayar-altin"),
    ("18 Ayar Altın", "18-ayar-altin"),
    ("22 Ayar Bilezik", "22-ayar-bilezik"),
    ("İkibuçuk Altın", "ikibucuk-altin"),
    ("Beşli Altın", "besli-altin"),
    ("Gremse Altın", "gremse-altin"),
    ("Reşat Altın", "resat-altin"),
    ("Hamit Altın", "hamit-altin"),
    ("ONS", "ons"),
    ("Gümüş", "gumus"),
    ("Gram Platin", "gram-platin"),
];

/// Currencies quoted against TRY; the upstream keys are the ISO codes.
pub const CURRENCY_INSTRUMENTS: &[(&str, &str)] = &[
    ("USD", "USD"),
    ("EUR", "EUR"),
    ("GBP", "GBP"),
    ("CHF", "CHF"),
    ("CAD", "CAD"),
    ("RUB", "RUB"),
    ("AED", "AED"),
    ("AUD", "AUD"),
    ("DKK", "DKK"),
    ("SEK", "SEK"),
    ("NOK", "NOK"),
    ("JPY", "JPY"),
    ("KWD", "KWD"),
    ("ZAR", "ZAR"),
    ("BHD", "BHD"),
    ("SAR", "SAR"),
];

/// Maps a raw upstream document onto typed quotes for the given instrument
/// catalog, in catalog order. Entries that are absent, not instrument
/// records, or missing either price are skipped. Fails with `EmptyResult`
/// when nothing usable remains.
pub fn normalize<Tz: TimeZone>(
    doc: &RawDocument,
    instruments: &[(&str, &str)],
    now: &DateTime<Tz>,
) -> Result<Vec<Quote>, FeedError> {
    // One status and one timestamp per pass, shared by every quote
    let market_status = MarketStatus::at(now);
    let updated_at = match doc.get(UPDATE_DATE_KEY) {
        Some(RawValue::Metadata(stamp)) => stamp.clone(),
        _ => now.to_rfc3339(),
    };

    let mut quotes = Vec::with_capacity(instruments.len());
    for (name, key) in instruments {
        let Some(RawValue::Instrument(raw)) = doc.get(*key) else {
            continue;
        };
        let (Some(buying), Some(selling)) = (raw.buying.as_deref(), raw.selling.as_deref()) else {
            continue;
        };

        // ONS prices arrive decorated with a dollar sign
        let buying = strip_currency_symbol(buying);
        let selling = strip_currency_symbol(selling);
        if buying.is_empty() || selling.is_empty() {
            continue;
        }

        quotes.push(Quote {
            name: (*name).to_string(),
            buying,
            selling,
            change_rate: normalize_change_rate(raw.change_rate.as_deref()),
            category: raw.category.clone().unwrap_or_default(),
            updated_at: updated_at.clone(),
            market_status,
            source: QuoteSource::Live,
        });
    }

    if quotes.is_empty() {
        return Err(FeedError::EmptyResult);
    }
    Ok(quotes)
}

fn strip_currency_symbol(price: &str) -> String {
    price.replace('$', "")
}

fn normalize_change_rate(rate: Option<&str>) -> String {
    match rate.map(|r| r.trim_end_matches('%')) {
        Some(rate) if !rate.is_empty() => rate.to_string(),
        _ => "0.00".to_string(),
    }
}
