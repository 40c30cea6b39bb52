pub mod cache;
pub mod config;
pub mod error;
pub mod fallback;
pub mod feed;
pub mod log;
pub mod market;
pub mod normalizer;
pub mod providers;
pub mod quote;
pub mod service;
pub mod ui;

use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use crate::cache::DocumentCache;
use crate::providers::truncgil::TruncgilFeed;
use crate::service::QuoteService;

pub const DEFAULT_BASE_URL: &str = "https://finans.truncgil.com";

#[derive(Debug, Clone, Copy)]
pub enum AppCommand {
    Metals,
    Currencies,
    All,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Quote tracker starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let base_url = config
        .upstream
        .as_ref()
        .map_or(DEFAULT_BASE_URL, |u| &u.base_url);
    let feed = TruncgilFeed::new(base_url);
    let cache = DocumentCache::new(feed, Duration::from_secs(config.cache_ttl_secs));
    let service = QuoteService::new(cache);

    let spinner = ui::new_spinner("Fetching quotes...");
    match command {
        AppCommand::Metals => {
            let metals = service.metal_quotes().await;
            spinner.finish_and_clear();
            println!("{}", ui::quote_table("Gold & Metals", &metals));
        }
        AppCommand::Currencies => {
            let currencies = service.currency_quotes().await;
            spinner.finish_and_clear();
            println!("{}", ui::quote_table("Currencies", &currencies));
        }
        AppCommand::All => {
            // Both views share one cached fetch
            let (metals, currencies) =
                futures::future::join(service.metal_quotes(), service.currency_quotes()).await;
            spinner.finish_and_clear();
            println!("{}", ui::quote_table("Gold & Metals", &metals));
            ui::print_separator();
            println!("{}", ui::quote_table("Currencies", &currencies));
        }
    }

    Ok(())
}
