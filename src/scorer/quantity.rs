use regex::Regex;

/// Spelled-out counts the extractor understands. Compounds ("twenty five")
/// resolve to their last word, which is acceptable for the lowest-priority
/// tier.
const NUMBER_WORDS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
    ("hundred", 100),
];

/// Best-effort item count from a listing title. Three tiers, strictly in
/// this order: an explicit digit count directly before a unit noun, then a
/// "lot of N" style phrase, then a spelled-out number before a unit noun.
/// Digit forms are unambiguous; spelled-out forms only apply when nothing
/// stronger matched.
pub struct QuantityExtractor {
    digit_unit: Regex,
    lot_phrase: Regex,
    spelled_unit: Regex,
}

impl QuantityExtractor {
    pub fn new(unit_nouns: &[String]) -> Self {
        let nouns = unit_nouns
            .iter()
            .map(|n| regex::escape(n))
            .collect::<Vec<_>>()
            .join("|");
        let words = NUMBER_WORDS
            .iter()
            .map(|(w, _)| *w)
            .collect::<Vec<_>>()
            .join("|");

        let digit_unit = Regex::new(&format!(r"\b(\d{{1,4}})\s+(?:{nouns})\b"))
            .expect("digit-unit regex");
        let lot_phrase =
            Regex::new(r"\b(?:job lot|joblot|lot|bundle|box|bag|crate)\s+of\s+(\d{1,4})\b")
                .expect("lot-phrase regex");
        let spelled_unit = Regex::new(&format!(r"\b(?:{words})\s+(?:{nouns})\b"))
            .expect("spelled-unit regex");

        Self { digit_unit, lot_phrase, spelled_unit }
    }

    /// `title` must already be lowercased.
    pub fn extract(&self, title: &str) -> Option<u32> {
        if let Some(caps) = self.digit_unit.captures(title) {
            return caps[1].parse().ok();
        }
        if let Some(caps) = self.lot_phrase.captures(title) {
            return caps[1].parse().ok();
        }
        if let Some(m) = self.spelled_unit.find(title) {
            let word = m.as_str().split_whitespace().next()?;
            return NUMBER_WORDS.iter().find(|(w, _)| *w == word).map(|(_, v)| *v);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;

    fn extractor() -> QuantityExtractor {
        QuantityExtractor::new(&ScoringConfig::default().unit_nouns)
    }

    #[test]
    fn digit_before_unit_noun() {
        assert_eq!(extractor().extract("12 cameras untested house clearance"), Some(12));
    }

    #[test]
    fn lot_of_phrase() {
        assert_eq!(extractor().extract("job lot of 70 untested film cameras"), Some(70));
        assert_eq!(extractor().extract("box of 15 old lenses"), Some(15));
    }

    #[test]
    fn spelled_out_number() {
        assert_eq!(extractor().extract("thirty cameras from loft find"), Some(30));
        assert_eq!(extractor().extract("hundred items vintage"), Some(100));
    }

    #[test]
    fn spelled_out_teens() {
        assert_eq!(extractor().extract("job lot sixteen cameras untested"), Some(16));
        assert_eq!(extractor().extract("thirteen lenses house clearance"), Some(13));
        assert_eq!(extractor().extract("nineteen cameras boxed"), Some(19));
    }

    #[test]
    fn digit_form_beats_phrase_form() {
        // "8 cameras" is the explicit form, checked before "lot of 20"
        assert_eq!(extractor().extract("lot of 20 boxes with 8 cameras"), Some(8));
    }

    #[test]
    fn phrase_form_beats_spelled_out() {
        assert_eq!(extractor().extract("lot of 30, about thirty cameras"), Some(30));
    }

    #[test]
    fn no_count_in_title() {
        assert_eq!(extractor().extract("vintage camera untested"), None);
    }
}
