// Core structs: RawRecord, Listing, ScoreResult, Alert, RunSummary
use chrono::{DateTime, Utc};
use thiserror::Error;

/// One search-result row as extracted from the marketplace page,
/// before any normalization or filtering.
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub title: String,
    pub price: String,
    pub link: String,
}

/// A normalized candidate listing. `id` is the canonical link with the
/// query string stripped and is the sole dedup key; two listings with the
/// same id are the same real-world item even if title or price drifted.
#[derive(Debug, Clone)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub price: String,
    pub link: String,
}

/// Output of the scorer for one title. `score` may be negative; the
/// rejection sentinel lives in `scorer::REJECT_SCORE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: i32,
    pub quantity: Option<u32>,
}

/// A scored listing selected for delivery in one run.
#[derive(Debug, Clone)]
pub struct Alert {
    pub score: i32,
    pub quantity: Option<u32>,
    pub listing: Listing,
}

/// One configured marketplace search. The concrete URL is built by the
/// listing source, not here.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub category_id: Option<String>,
    pub buy_it_now_only: bool,
}

/// Per-run counters, reported at the end of every run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub sources_checked: usize,
    pub sources_failed: usize,
    pub listings_seen: usize,
    pub alerts_sent: usize,
    pub finished_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("http error: {0}")]
    Http(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected response status {0}")]
    BadStatus(u16),
    #[error(transparent)]
    Parse(#[from] ParserError),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("invalid selector: {0}")]
    Selector(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("telegram api error: {0}")]
    Api(String),
    #[error("telegram unreachable")]
    Unreachable,
}
