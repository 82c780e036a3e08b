//! Note → filter overrides.

use tracing::debug;

use carsift_core::config::IntentConfig;
use carsift_core::errors::ConfigError;
use carsift_core::models::FilterCriteria;

use crate::budget::BudgetPattern;
use crate::overrides::{IntentNotice, IntentOverrides};

/// Ordered keyword rules, built once from an [`IntentConfig`].
#[derive(Debug, Clone)]
pub struct IntentExtractor {
    budget: BudgetPattern,
    body_keywords: Vec<String>,
    fuel_keywords: Vec<String>,
    cargo_phrases: Vec<String>,
    cargo_min_litres: f64,
}

impl IntentExtractor {
    pub fn new(config: &IntentConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            budget: BudgetPattern::new(config)?,
            body_keywords: non_empty(&config.body_keywords),
            fuel_keywords: non_empty(&config.fuel_keywords),
            cargo_phrases: non_empty(&config.cargo_phrases),
            cargo_min_litres: config.cargo_min_litres,
        })
    }

    /// Read `note` against the current criteria.
    ///
    /// An override is produced only where it tightens what `criteria` already
    /// asks for: a lower ceiling, a body or fuel type where none was chosen, a
    /// higher cargo minimum.
    pub fn extract(&self, note: &str, criteria: &FilterCriteria) -> IntentOverrides {
        let mut overrides = IntentOverrides::default();
        if note.trim().is_empty() {
            return overrides;
        }
        let lowered = note.to_lowercase();

        if let Some(amount) = self.budget.find(note) {
            let amount = amount as f64;
            if criteria.max_price.is_none_or(|ceiling| amount < ceiling) {
                overrides.max_price = Some(amount);
                overrides.notices.push(IntentNotice::BudgetLowered { amount });
            }
        }

        // The first listed keyword found ends the scan, even when a chosen
        // body type keeps it from applying.
        if let Some(body_type) = first_keyword(&self.body_keywords, &lowered) {
            if criteria.body_type.is_none() {
                overrides.notices.push(IntentNotice::BodyTypeDetected {
                    body_type: body_type.clone(),
                });
                overrides.body_type = Some(body_type.clone());
            }
        }

        if let Some(fuel_type) = first_keyword(&self.fuel_keywords, &lowered) {
            if criteria.fuel_type.is_none() {
                overrides.notices.push(IntentNotice::FuelTypeDetected {
                    fuel_type: fuel_type.clone(),
                });
                overrides.fuel_type = Some(fuel_type.clone());
            }
        }

        let wants_cargo = self
            .cargo_phrases
            .iter()
            .any(|phrase| lowered.contains(&phrase.to_lowercase()));
        if wants_cargo
            && criteria
                .min_cargo_volume
                .is_none_or(|current| current < self.cargo_min_litres)
        {
            overrides.min_cargo_volume = Some(self.cargo_min_litres);
            overrides.notices.push(IntentNotice::CargoMinimumRaised {
                litres: self.cargo_min_litres,
            });
        }

        debug!(overrides = overrides.notices.len(), "note scanned for intent");
        overrides
    }
}

fn first_keyword<'k>(keywords: &'k [String], lowered_note: &str) -> Option<&'k String> {
    keywords
        .iter()
        .find(|keyword| lowered_note.contains(&keyword.to_lowercase()))
}

fn non_empty(words: &[String]) -> Vec<String> {
    words
        .iter()
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
