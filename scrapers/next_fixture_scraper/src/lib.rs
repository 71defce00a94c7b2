pub mod config;
pub mod error;
pub mod fetcher;
pub mod fixture_scraper;
pub mod month_table;
pub mod next_match;
pub mod normalizer;
pub mod resultless_table;
pub mod types;
pub mod utils;
pub mod writer;
