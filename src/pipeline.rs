use crate::config::AppConfig;
use crate::model::{Listing, RunSummary, ScoreResult, SearchRequest};
use crate::normalizer::normalize;
use crate::notifier::{format_alert, Notifier};
use crate::ranker::select_alerts;
use crate::scorer::Scorer;
use crate::scraper::ListingSource;
use crate::storage::SeenCache;
use chrono::Utc;
use rand::Rng;
use std::path::PathBuf;
use tokio::time::{sleep, Duration};
use tracing::{info, warn};

/// Drives one run end to end: load seen cache, fetch and score every
/// configured search sequentially, persist the cache, deliver the ranked
/// alerts. No failure along the way is fatal to the run.
pub struct Pipeline<S, N> {
    source: S,
    notifier: N,
    scorer: Scorer,
    config: AppConfig,
    seen_path: PathBuf,
}

impl<S: ListingSource, N: Notifier> Pipeline<S, N> {
    pub fn new(config: AppConfig, source: S, notifier: N) -> Self {
        let scorer = Scorer::new(config.scoring.clone());
        let seen_path = PathBuf::from(&config.seen_path);
        Self { source, notifier, scorer, config, seen_path }
    }

    pub async fn run_once(&self) -> RunSummary {
        let mut seen = SeenCache::load(&self.seen_path, self.config.seen_capacity);
        info!(
            "Run started: {} searches, {} ids already seen",
            self.config.searches.len(),
            seen.len()
        );

        let mut pool: Vec<(Listing, ScoreResult)> = Vec::new();
        let mut sources_failed = 0;
        let total = self.config.searches.len();

        for (i, query) in self.config.searches.iter().enumerate() {
            let search = SearchRequest {
                query: query.clone(),
                category_id: self.config.category_id.clone(),
                buy_it_now_only: self.config.buy_it_now_only,
            };

            match self.source.fetch(&search).await {
                Ok(records) => {
                    info!("Search '{}': {} raw records", query, records.len());
                    for raw in records {
                        let Some(listing) = normalize(raw, &self.config.filter) else {
                            continue;
                        };
                        // Every newly observed listing is recorded exactly
                        // once; already-seen ones are never rescored.
                        if !seen.insert(listing.id.clone()) {
                            continue;
                        }
                        let result = self.scorer.score(&listing.title);
                        if result.score >= self.config.alert_threshold {
                            pool.push((listing, result));
                        }
                    }
                }
                Err(e) => {
                    sources_failed += 1;
                    warn!("Search '{}' failed: {e}", query);
                }
            }

            if i + 1 < total {
                self.pace().await;
            }
        }

        // Persist even after partial failure: ids from the searches that did
        // succeed must still be durably recorded.
        if let Err(e) = seen.save(&self.seen_path) {
            warn!("Failed to persist seen cache: {e}");
        }

        let alerts = select_alerts(pool, self.config.alert_threshold, self.config.top_k);
        let mut alerts_sent = 0;
        for alert in &alerts {
            let message = format_alert(alert);
            match self.notifier.send(&message).await {
                Ok(()) => alerts_sent += 1,
                Err(e) => warn!("Notification failed for {}: {e}", alert.listing.id),
            }
        }

        let summary = RunSummary {
            sources_checked: total - sources_failed,
            sources_failed,
            listings_seen: seen.len(),
            alerts_sent,
            finished_at: Utc::now(),
        };
        info!(
            "Run finished: {} sources ok, {} failed, {} alerts sent, {} ids seen",
            summary.sources_checked,
            summary.sources_failed,
            summary.alerts_sent,
            summary.listings_seen
        );
        summary
    }

    /// Inter-source wait with a little jitter, to stay under the
    /// marketplace's anti-scraping radar. Skipped when pacing is disabled.
    async fn pace(&self) {
        if self.config.pacing_delay_secs == 0 {
            return;
        }
        let jitter = rand::rng().random_range(0..500u64);
        sleep(Duration::from_millis(self.config.pacing_delay_secs * 1000 + jitter)).await;
    }
}
