pub mod fetcher;
pub mod traits;

use crate::model::{RawRecord, SearchRequest, SourceError};
use crate::parser::EbayParser;
use fetcher::HttpFetcher;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

pub use traits::ListingSource;

const BASE_URL: &str = "https://www.ebay.co.uk/sch/i.html";

/// Production listing source: HTTP fetch of an eBay search page plus HTML
/// extraction of its result rows.
pub struct EbaySource {
    fetcher: HttpFetcher,
    parser: EbayParser,
}

impl EbaySource {
    pub fn new(timeout: Duration) -> Self {
        Self {
            fetcher: HttpFetcher::new(timeout),
            parser: EbayParser::new(),
        }
    }

    fn build_url(&self, search: &SearchRequest) -> String {
        let nkw = search.query.trim().to_lowercase().replace(' ', "+");
        let mut url = format!("{BASE_URL}?_nkw={nkw}");
        if let Some(category_id) = &search.category_id {
            url.push_str("&_sacat=");
            url.push_str(category_id);
        }
        if search.buy_it_now_only {
            url.push_str("&LH_BIN=1");
        }
        url
    }
}

#[async_trait::async_trait]
impl ListingSource for EbaySource {
    async fn fetch(&self, search: &SearchRequest) -> Result<Vec<RawRecord>, SourceError> {
        let url = self.build_url(search);
        let html = self.fetcher.fetch(&url).await?;
        let records = self.parser.parse(&html)?;

        // Zero rows on a non-empty page usually means the markup changed;
        // keep the page around for selector debugging.
        if records.is_empty() && !html.is_empty() {
            dump_debug_html(&html, &search.query);
        }

        Ok(records)
    }
}

fn dump_debug_html(html: &str, query: &str) {
    let folder = Path::new("logs/html");
    if let Err(e) = fs::create_dir_all(folder) {
        warn!("Failed to create debug folder: {e}");
        return;
    }
    let filename = folder.join(format!("debug-{}.html", query.replace(' ', "_")));
    match fs::write(&filename, html) {
        Err(e) => warn!("Failed to write debug HTML: {e}"),
        Ok(()) => info!("Saved debug HTML: {}", filename.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_encodes_query_and_bin_flag() {
        let source = EbaySource::new(Duration::from_secs(5));
        let url = source.build_url(&SearchRequest {
            query: "Film Camera Job Lot".into(),
            category_id: None,
            buy_it_now_only: true,
        });
        assert_eq!(
            url,
            "https://www.ebay.co.uk/sch/i.html?_nkw=film+camera+job+lot&LH_BIN=1"
        );
    }

    #[test]
    fn build_url_with_category_filter() {
        let source = EbaySource::new(Duration::from_secs(5));
        let url = source.build_url(&SearchRequest {
            query: "camera job lot".into(),
            category_id: Some("625".into()),
            buy_it_now_only: false,
        });
        assert!(url.contains("_sacat=625"));
        assert!(!url.contains("LH_BIN"));
    }
}
