use serde::Deserialize;
use std::fs;
use thiserror::Error;

/// One named group of positive keywords. The category contributes its
/// weight once when at least one keyword substring-matches the title.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordCategory {
    pub name: String,
    pub keywords: Vec<String>,
    pub weight: i32,
}

/// Extra bonus applied when the extracted quantity reaches `min_quantity`.
/// Bonuses are cumulative across thresholds.
#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdBonus {
    pub min_quantity: u32,
    pub bonus: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Substrings that disqualify a title outright.
    pub blocklist: Vec<String>,
    pub categories: Vec<KeywordCategory>,
    /// Nouns a count can attach to ("5 cameras", "three lenses").
    pub unit_nouns: Vec<String>,
    pub quantity_flat_bonus: i32,
    pub quantity_threshold_bonuses: Vec<ThresholdBonus>,
    /// Ambiguous terms penalized only when the rest of the evidence is weak.
    pub soft_penalty_terms: Vec<String>,
    pub soft_penalty: i32,
    pub weak_evidence_cutoff: i32,
}

/// Pre-scoring junk filter applied during normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    pub min_title_len: usize,
    /// Titles that are platform boilerplate rather than real listings.
    pub boilerplate_titles: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub searches: Vec<String>,
    /// Marketplace category to restrict every search to, when set.
    pub category_id: Option<String>,
    pub buy_it_now_only: bool,
    pub filter: FilterConfig,
    pub scoring: ScoringConfig,
    pub alert_threshold: i32,
    pub top_k: usize,
    pub seen_capacity: usize,
    pub seen_path: String,
    pub pacing_delay_secs: u64,
    pub fetch_timeout_secs: u64,
    pub check_interval_secs: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            blocklist: strings(&[
                "junk",
                "spares",
                "broken",
                "repair",
                "for parts",
                "parts only",
                "bundle only",
                "faulty",
            ]),
            categories: vec![
                KeywordCategory {
                    name: "contextual_hints".into(),
                    keywords: strings(&[
                        "job lot",
                        "untested",
                        "estate",
                        "house clearance",
                        "loft find",
                        "garage find",
                        "charity",
                        "vintage",
                        "old camera",
                        "film camera",
                        "digital camera",
                    ]),
                    weight: 1,
                },
                KeywordCategory {
                    name: "camera_types".into(),
                    keywords: strings(&[
                        "camera",
                        "slr",
                        "dslr",
                        "tlr",
                        "rangefinder",
                        "compact",
                    ]),
                    weight: 2,
                },
                KeywordCategory {
                    name: "brands".into(),
                    keywords: strings(&[
                        "nikon",
                        "canon",
                        "olympus",
                        "pentax",
                        "konica",
                        "minolta",
                        "sony",
                        "panasonic",
                        "fujifilm",
                        "ricoh",
                        "casio",
                        "kodak",
                    ]),
                    weight: 2,
                },
                KeywordCategory {
                    name: "model_hints".into(),
                    keywords: strings(&[
                        "nikkormat",
                        "ae-1",
                        "srt",
                        "om-1",
                        "om-10",
                        "k1000",
                        "spotmatic",
                        "ftn",
                    ]),
                    weight: 2,
                },
                KeywordCategory {
                    name: "working_hints".into(),
                    keywords: strings(&[
                        "shutter working",
                        "shutters working",
                        "fully working",
                        "tested working",
                    ]),
                    weight: 1,
                },
            ],
            unit_nouns: strings(&[
                "camera", "cameras", "lens", "lenses", "body", "bodies", "items", "units",
                "pieces",
            ]),
            quantity_flat_bonus: 2,
            quantity_threshold_bonuses: vec![
                ThresholdBonus { min_quantity: 20, bonus: 1 },
                ThresholdBonus { min_quantity: 50, bonus: 2 },
                ThresholdBonus { min_quantity: 100, bonus: 3 },
            ],
            soft_penalty_terms: strings(&["accessories", "mixed", "collection"]),
            soft_penalty: 1,
            weak_evidence_cutoff: 4,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_title_len: 6,
            boilerplate_titles: strings(&["shop on ebay", "sponsored"]),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            searches: strings(&[
                "camera job lot",
                "digital camera job lot",
                "film camera job lot",
                "compact camera job lot",
                "slr camera job lot",
                "dslr camera job lot",
            ]),
            category_id: None,
            buy_it_now_only: true,
            filter: FilterConfig::default(),
            scoring: ScoringConfig::default(),
            alert_threshold: 3,
            top_k: 5,
            seen_capacity: 2000,
            seen_path: "seen.json".into(),
            pacing_delay_secs: 2,
            fetch_timeout_secs: 30,
            check_interval_secs: 900,
        }
    }
}
