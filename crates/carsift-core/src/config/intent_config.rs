use serde::{Deserialize, Serialize};

use super::defaults;

/// Keyword tables for free-text intent extraction.
///
/// Keyword lists are ordered: the first match wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentConfig {
    /// Currency code that terminates a budget figure, e.g. `TL`.
    pub currency_code: String,
    /// Unit words meaning ×1 000.
    pub thousand_words: Vec<String>,
    /// Unit words meaning ×1 000 000.
    pub million_words: Vec<String>,
    /// Body-type keywords. A match becomes the body-type filter value verbatim.
    pub body_keywords: Vec<String>,
    /// Fuel-type keywords. A match becomes the fuel-type filter value verbatim.
    pub fuel_keywords: Vec<String>,
    /// Phrases signalling a need for a large cargo area.
    pub cargo_phrases: Vec<String>,
    /// Minimum cargo volume (litres) enforced by a cargo phrase.
    pub cargo_min_litres: f64,
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            currency_code: defaults::DEFAULT_CURRENCY_CODE.to_string(),
            thousand_words: to_strings(defaults::DEFAULT_THOUSAND_WORDS),
            million_words: to_strings(defaults::DEFAULT_MILLION_WORDS),
            body_keywords: to_strings(defaults::DEFAULT_BODY_KEYWORDS),
            fuel_keywords: to_strings(defaults::DEFAULT_FUEL_KEYWORDS),
            cargo_phrases: to_strings(defaults::DEFAULT_CARGO_PHRASES),
            cargo_min_litres: defaults::DEFAULT_CARGO_MIN_LITRES,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
