//! travelrec-core prelude: bring common types into scope for demos.

#![allow(unused_imports)]

pub use crate::category::Category;
pub use crate::common::SetStats;
pub use crate::error::{Result, TravelError};
pub use crate::model::{Beach, City, Country, DisplayItem, RecommendationSet, Temple};
pub use crate::render::{
    render_message, render_recommendations, EMPTY_RESULTS_MESSAGE, IDLE_MESSAGE,
    LOAD_FAILURE_MESSAGE, PROMPT_MESSAGE,
};
pub use crate::text::{equals_folded, fold_key};
