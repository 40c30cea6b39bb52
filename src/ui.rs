use std::time::Duration;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::market::MarketStatus;
use crate::quote::{Quote, QuoteSource};

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Warning,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Warning => style(text).yellow(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn price_cell(value: &str) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}

/// Creates a cell for the percent change with color coding. The rate keeps
/// the upstream's decimal formatting; only the sign is inspected here.
fn change_cell(rate: &str) -> Cell {
    let color = if rate.trim_start().starts_with('-') {
        Color::Red
    } else {
        Color::Green
    };
    Cell::new(format!("{rate}%"))
        .fg(color)
        .set_alignment(CellAlignment::Right)
}

fn status_cell(status: MarketStatus) -> Cell {
    match status {
        MarketStatus::Open => Cell::new("Open").fg(Color::Green),
        MarketStatus::Closed => Cell::new("Closed").fg(Color::DarkGrey),
    }
}

/// Renders one quote category as a titled table, with a notice line when
/// the data comes from the fallback catalog rather than the live feed.
pub fn quote_table(title: &str, quotes: &[Quote]) -> String {
    let mut table = new_styled_table();
    table.set_header(vec![
        header_cell("Instrument"),
        header_cell("Buying"),
        header_cell("Selling"),
        header_cell("Change"),
        header_cell("Updated"),
        header_cell("Market"),
    ]);

    for quote in quotes {
        table.add_row(vec![
            Cell::new(&quote.name),
            price_cell(&quote.buying),
            price_cell(&quote.selling),
            change_cell(&quote.change_rate),
            Cell::new(&quote.updated_at).add_attribute(Attribute::Dim),
            status_cell(quote.market_status),
        ]);
    }

    let mut output = format!("{}\n\n{}", style_text(title, StyleType::Title), table);

    if quotes.iter().any(|q| q.source == QuoteSource::Fallback) {
        output.push_str(&format!(
            "\n{}",
            style_text(
                "Upstream unreachable, showing placeholder prices.",
                StyleType::Warning
            )
        ));
    }

    output
}

/// Creates a new `indicatif` spinner with standard styling.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Prints a separator line matching the terminal width.
pub fn print_separator() {
    let term_width = console::Term::stdout()
        .size_checked()
        .map(|(_, w)| w as usize)
        .unwrap_or(80);
    println!("\n{}", "─".repeat(term_width));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_quote_table_contains_rows_and_fallback_notice() {
        let now = Utc.with_ymd_and_hms(2024, 1, 3, 11, 0, 0).unwrap();
        let quotes = crate::fallback::metal_quotes(&now);

        let rendered = quote_table("Gold & Metals", &quotes);

        assert!(rendered.contains("Gram Altın"));
        assert!(rendered.contains("3430.89"));
        assert!(rendered.contains("placeholder prices"));
    }

    #[test]
    fn test_live_table_has_no_fallback_notice() {
        let quote = Quote {
            name: "USD".to_string(),
            buying: "36,5833".to_string(),
            selling: "36,6066".to_string(),
            change_rate: "0,12".to_string(),
            category: "Döviz".to_string(),
            updated_at: "03.01.2024 11:00:04".to_string(),
            market_status: MarketStatus::Open,
            source: QuoteSource::Live,
        };

        let rendered = quote_table("Currencies", &[quote]);

        assert!(rendered.contains("USD"));
        assert!(!rendered.contains("placeholder prices"));
    }
}
