use crate::config::FilterConfig;
use crate::model::{Listing, RawRecord};

/// Canonical dedup key for a listing: the link with the query string
/// stripped. Same link always yields the same id.
pub fn listing_id(link: &str) -> String {
    link.split('?').next().unwrap_or(link).trim().to_string()
}

/// Turns a raw search-result record into a [`Listing`], or drops it when the
/// title is too short or platform boilerplate. Dropping is filtering, not a
/// failure, so there is no error path.
pub fn normalize(raw: RawRecord, cfg: &FilterConfig) -> Option<Listing> {
    let title = raw.title.trim().to_string();
    if title.chars().count() < cfg.min_title_len {
        return None;
    }
    let lowered = title.to_lowercase();
    if cfg.boilerplate_titles.iter().any(|b| lowered == *b) {
        return None;
    }

    let id = listing_id(&raw.link);
    if id.is_empty() {
        return None;
    }

    Some(Listing {
        id,
        title,
        price: raw.price.trim().to_string(),
        link: raw.link,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: &str, link: &str) -> RawRecord {
        RawRecord {
            title: title.into(),
            price: "£42.00".into(),
            link: link.into(),
        }
    }

    #[test]
    fn id_strips_query_string() {
        let listing = normalize(
            raw("Nikon FE film camera", "https://x.test/itm/123?hash=abc&src=feed"),
            &FilterConfig::default(),
        )
        .unwrap();
        assert_eq!(listing.id, "https://x.test/itm/123");
        // the original link keeps its parameters for output
        assert_eq!(listing.link, "https://x.test/itm/123?hash=abc&src=feed");
    }

    #[test]
    fn id_is_deterministic() {
        assert_eq!(
            listing_id("https://x.test/itm/9?a=1"),
            listing_id("https://x.test/itm/9?b=2")
        );
    }

    #[test]
    fn short_titles_are_dropped() {
        assert!(normalize(raw("SLR", "https://x.test/itm/1"), &FilterConfig::default()).is_none());
    }

    #[test]
    fn boilerplate_titles_are_dropped() {
        let cfg = FilterConfig::default();
        assert!(normalize(raw("Shop on eBay", "https://x.test/itm/2"), &cfg).is_none());
        assert!(normalize(raw("SPONSORED", "https://x.test/itm/3"), &cfg).is_none());
    }

    #[test]
    fn ordinary_titles_survive() {
        let listing =
            normalize(raw("  Canon AE-1 body  ", "https://x.test/itm/4"), &FilterConfig::default())
                .unwrap();
        assert_eq!(listing.title, "Canon AE-1 body");
    }
}
