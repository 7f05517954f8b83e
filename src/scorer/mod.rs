// Heuristic relevance scoring over listing titles.

pub mod quantity;

use crate::config::ScoringConfig;
use crate::model::ScoreResult;
use quantity::QuantityExtractor;

/// Sentinel score for hard-rejected titles. No other rule can produce it
/// and no other rule runs after it.
pub const REJECT_SCORE: i32 = -999;

/// One configured scoring engine. All keyword tables are lowercased once at
/// construction; `score` is a pure function of the title text.
pub struct Scorer {
    cfg: ScoringConfig,
    quantities: QuantityExtractor,
}

impl Scorer {
    pub fn new(mut cfg: ScoringConfig) -> Self {
        lowercase_all(&mut cfg.blocklist);
        for category in &mut cfg.categories {
            lowercase_all(&mut category.keywords);
        }
        lowercase_all(&mut cfg.unit_nouns);
        lowercase_all(&mut cfg.soft_penalty_terms);

        let quantities = QuantityExtractor::new(&cfg.unit_nouns);
        Self { cfg, quantities }
    }

    pub fn score(&self, title: &str) -> ScoreResult {
        let t = title.to_lowercase();

        if self.cfg.blocklist.iter().any(|w| t.contains(w.as_str())) {
            return ScoreResult { score: REJECT_SCORE, quantity: None };
        }

        let mut score = 0;
        for category in &self.cfg.categories {
            if category.keywords.iter().any(|k| t.contains(k.as_str())) {
                score += category.weight;
            }
        }

        let quantity = self.quantities.extract(&t);
        if let Some(q) = quantity {
            score += self.cfg.quantity_flat_bonus;
            for tb in &self.cfg.quantity_threshold_bonuses {
                if q >= tb.min_quantity {
                    score += tb.bonus;
                }
            }
        }

        // Ambiguous terms only count against a title when nothing stronger
        // backs it up.
        if score < self.cfg.weak_evidence_cutoff {
            for term in &self.cfg.soft_penalty_terms {
                if t.contains(term.as_str()) {
                    score -= self.cfg.soft_penalty;
                }
            }
        }

        ScoreResult { score, quantity }
    }
}

fn lowercase_all(items: &mut [String]) {
    for item in items.iter_mut() {
        *item = item.to_lowercase();
    }
}
