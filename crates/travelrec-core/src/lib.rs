// crates/travelrec-core/src/lib.rs

pub mod category;
pub mod common;
pub mod error;
pub mod loader; // The public loader
pub mod model;
pub mod prelude;
pub mod render;
pub mod search; // Selector logic lives here
pub mod text;

// Re-exports
pub use crate::category::Category;
pub use crate::common::SetStats;
pub use crate::error::{Result, TravelError};
pub use crate::model::{Beach, City, Country, DisplayItem, RecommendationSet, Temple};
