//! Budget figures such as `500 bin TL` or `1 million TL`.

use regex::Regex;

use carsift_core::config::IntentConfig;
use carsift_core::errors::ConfigError;

/// Matches `<integer> [unit] <currency>` and resolves it to a whole amount.
#[derive(Debug, Clone)]
pub struct BudgetPattern {
    regex: Regex,
    thousand_words: Vec<String>,
    million_words: Vec<String>,
}

impl BudgetPattern {
    pub fn new(config: &IntentConfig) -> Result<Self, ConfigError> {
        let thousand_words = lowercase_all(&config.thousand_words);
        let million_words = lowercase_all(&config.million_words);

        // Longest first so a word is never shadowed by its own prefix.
        let mut units: Vec<&str> = thousand_words
            .iter()
            .chain(million_words.iter())
            .map(String::as_str)
            .filter(|w| !w.is_empty())
            .collect();
        units.sort_by_key(|w| std::cmp::Reverse(w.len()));

        let currency = config.currency_code.trim();
        if currency.is_empty() {
            // Without a currency every bare number would read as a budget.
            return Err(ConfigError::InvalidValue {
                field: "intent.currency_code".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        let currency = regex::escape(currency);
        let pattern = if units.is_empty() {
            format!(r"(?i)(\d+)\s*{currency}")
        } else {
            let alternation = units
                .iter()
                .map(|w| regex::escape(w))
                .collect::<Vec<_>>()
                .join("|");
            format!(r"(?i)(\d+)\s*({alternation})?\s*{currency}")
        };

        let regex = Regex::new(&pattern).map_err(|e| ConfigError::InvalidValue {
            field: "intent".to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            regex,
            thousand_words,
            million_words,
        })
    }

    /// Amount named by the first budget figure in `note`.
    ///
    /// Only the first figure counts. One that overflows is dropped rather than
    /// retried against later figures.
    pub fn find(&self, note: &str) -> Option<u64> {
        let caps = self.regex.captures(note)?;
        let amount: u64 = caps.get(1)?.as_str().parse().ok()?;
        let multiplier = caps
            .get(2)
            .map_or(1, |unit| self.unit_multiplier(unit.as_str()));
        amount.checked_mul(multiplier)
    }

    fn unit_multiplier(&self, unit: &str) -> u64 {
        let unit = unit.to_lowercase();
        if self.million_words.contains(&unit) {
            1_000_000
        } else if self.thousand_words.contains(&unit) {
            1_000
        } else {
            1
        }
    }
}

fn lowercase_all(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.trim().to_lowercase()).collect()
}
