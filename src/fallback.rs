//! Hard-coded last-resort quotes, served when the upstream is unreachable
//! and no cached document exists. Prices are static snapshots, but the
//! timestamp and market status are still computed at call time so the
//! open/closed indicator stays truthful.

use chrono::{DateTime, TimeZone};

use crate::market::MarketStatus;
use crate::quote::{Quote, QuoteSource};

fn placeholder<Tz: TimeZone>(
    name: &str,
    buying: &str,
    selling: &str,
    change_rate: &str,
    category: &str,
    now: &DateTime<Tz>,
) -> Quote {
    Quote {
        name: name.to_string(),
        buying: buying.to_string(),
        selling: selling.to_string(),
        change_rate: change_rate.to_string(),
        category: category.to_string(),
        updated_at: now.to_rfc3339(),
        market_status: MarketStatus::at(now),
        source: QuoteSource::Fallback,
    }
}

pub fn metal_quotes<Tz: TimeZone>(now: &DateTime<Tz>) -> Vec<Quote> {
    vec![
        placeholder("Gram Altın", "3430.89", "3431.21", "1.06", "Altın", now),
        placeholder("Çeyrek Altın", "5564.61", "5690.90", "0.59", "Altın", now),
        placeholder("Yarım Altın", "11094.44", "11381.80", "0.59", "Altın", now),
        placeholder("Tam Altın", "22258.44", "22693.99", "0.59", "Altın", now),
    ]
}

pub fn currency_quotes<Tz: TimeZone>(now: &DateTime<Tz>) -> Vec<Quote> {
    vec![
        placeholder("USD", "36.5833", "36.6066", "0.12", "Döviz", now),
        placeholder("EUR", "39.9641", "39.9980", "0.90", "Döviz", now),
        placeholder("GBP", "47.4070", "47.4470", "0.68", "Döviz", now),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_catalog_shapes() {
        let now = Utc.with_ymd_and_hms(2024, 1, 3, 11, 0, 0).unwrap();

        let metals = metal_quotes(&now);
        assert_eq!(metals.len(), 4);
        assert_eq!(metals[0].name, "Gram Altın");
        assert_eq!(metals[0].buying, "3430.89");
        assert!(metals.iter().all(|q| q.category == "Altın"));
        assert!(metals.iter().all(|q| q.source == QuoteSource::Fallback));

        let currencies = currency_quotes(&now);
        assert_eq!(currencies.len(), 3);
        assert_eq!(currencies[2].name, "GBP");
        assert!(currencies.iter().all(|q| q.category == "Döviz"));
    }

    #[test]
    fn test_market_status_reflects_call_time() {
        let weekday = Utc.with_ymd_and_hms(2024, 1, 3, 11, 0, 0).unwrap();
        let weekend = Utc.with_ymd_and_hms(2024, 1, 6, 11, 0, 0).unwrap();

        assert!(
            metal_quotes(&weekday)
                .iter()
                .all(|q| q.market_status == MarketStatus::Open)
        );
        assert!(
            metal_quotes(&weekend)
                .iter()
                .all(|q| q.market_status == MarketStatus::Closed)
        );
        assert_eq!(metal_quotes(&weekday)[0].updated_at, weekday.to_rfc3339());
    }
}
