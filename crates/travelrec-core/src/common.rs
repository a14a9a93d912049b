use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the dataset.
///
/// Returned by [`RecommendationSet::stats`], these counts reflect the
/// in-memory document after loading. `cities` counts every city across
/// all countries.
///
/// [`RecommendationSet::stats`]: crate::model::RecommendationSet::stats
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SetStats {
    pub beaches: usize,
    pub temples: usize,
    pub countries: usize,
    pub cities: usize,
}
