// crates/travelrec-core/src/loader.rs

//! # Dataset loader
//!
//! Handles the physical layer (file and optional HTTP transport) and keeps
//! the process-wide memoized copy of the parsed document.

use crate::error::{Result, TravelError};
use crate::model::RecommendationSet;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

static RECOMMENDATIONS_CACHE: OnceCell<RecommendationSet> = OnceCell::new();

impl RecommendationSet {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "travel_recommendation_api.json"
    }

    /// **Standard loader:** the bundled dataset, memoized.
    ///
    /// The document is read and parsed at most once per process; every
    /// later call returns the identical cached reference without touching
    /// the filesystem again. The cache has no teardown and lives until
    /// process exit.
    pub fn load() -> Result<&'static Self> {
        RECOMMENDATIONS_CACHE.get_or_try_init(|| {
            let dir = Self::default_data_dir();
            Self::load_from_path(dir.join(Self::default_dataset_filename()))
        })
    }

    /// Parse an arbitrary dataset file. Not memoized.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            TravelError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Fetch and parse the dataset from a URL. Not memoized.
    ///
    /// A non-success status is an error; there is no retry policy and no
    /// timeout beyond the client default.
    #[cfg(feature = "fetch")]
    pub fn load_from_url(url: &str) -> Result<Self> {
        let response =
            reqwest::blocking::get(url).map_err(|e| TravelError::Http(e.to_string()))?;
        if !response.status().is_success() {
            return Err(TravelError::Http(format!(
                "Failed to fetch recommendations: {}",
                response.status()
            )));
        }
        let body = response
            .text()
            .map_err(|e| TravelError::Http(e.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_is_memoized() {
        let first = RecommendationSet::load().unwrap();
        let second = RecommendationSet::load().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn bundled_dataset_parses_with_all_sections() {
        let set = RecommendationSet::load().unwrap();
        assert!(!set.beaches.is_empty());
        assert!(!set.temples.is_empty());
        assert!(!set.countries.is_empty());
        assert!(set.countries.iter().any(|c| !c.cities.is_empty()));
    }

    #[test]
    fn missing_file_maps_to_not_found() {
        let err = RecommendationSet::load_from_path("/does/not/exist.json").unwrap_err();
        match err {
            TravelError::NotFound(msg) => assert!(msg.contains("/does/not/exist.json")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_maps_to_json_error() {
        let dir = std::env::temp_dir();
        let path = dir.join("travelrec_malformed_test.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = RecommendationSet::load_from_path(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, TravelError::Json(_)));
    }
}
