//! Data model shared by every stage of the pipeline.

pub mod criteria;
pub mod economics;
pub mod propulsion;
pub mod scored;
pub mod variant;
pub mod vehicle;
pub mod weights;

pub use criteria::FilterCriteria;
pub use economics::Economics;
pub use propulsion::Propulsion;
pub use scored::ScoredVariant;
pub use variant::{ExpandedVariant, TrimTier};
pub use vehicle::VehicleRecord;
pub use weights::{Dimension, WeightProfile};
