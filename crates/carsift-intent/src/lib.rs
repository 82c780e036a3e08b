//! # carsift-intent
//!
//! Reads a free-text note for hints that tighten the user's filters: a budget
//! figure, a body type, a fuel type, a need for cargo space. Matching is an
//! ordered list of deterministic rules; nothing here ever fails a request.

pub mod budget;
pub mod extractor;
pub mod overrides;

pub use extractor::IntentExtractor;
pub use overrides::{IntentNotice, IntentOverrides};
