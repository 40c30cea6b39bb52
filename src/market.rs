use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};

/// Whether the local trading window is active. Always computed here; the
/// upstream document carries no market-status field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketStatus {
    Open,
    Closed,
}

impl MarketStatus {
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        if is_open(now) {
            MarketStatus::Open
        } else {
            MarketStatus::Closed
        }
    }
}

impl std::fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketStatus::Open => write!(f, "Open"),
            MarketStatus::Closed => write!(f, "Closed"),
        }
    }
}

/// Market hours: closed on weekends, otherwise 09:00 through 17:30 inclusive.
/// Friday uses the same window as the rest of the week.
pub fn is_open<Tz: TimeZone>(now: &DateTime<Tz>) -> bool {
    if matches!(now.weekday(), Weekday::Sat | Weekday::Sun) {
        return false;
    }

    let hour_of_day = f64::from(now.hour()) + f64::from(now.minute()) / 60.0;
    (9.0..=17.5).contains(&hour_of_day)
}
