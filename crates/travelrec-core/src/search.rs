// crates/travelrec-core/src/search.rs

use crate::category::Category;
use crate::common::SetStats;
use crate::model::{Country, DisplayItem, RecommendationSet};
use crate::text::equals_folded;

impl RecommendationSet {
    pub fn stats(&self) -> SetStats {
        SetStats {
            beaches: self.beaches.len(),
            temples: self.temples.len(),
            countries: self.countries.len(),
            cities: self.countries.iter().map(|c| c.cities.len()).sum(),
        }
    }

    /// Select the rendering-ready items for a category, in document order.
    ///
    /// Beach and temple sections map directly. The country category
    /// flattens every city across every country, attaching the parent
    /// country's name to each card.
    pub fn recommendations_for(&self, category: Category) -> Vec<DisplayItem> {
        match category {
            Category::Beach => self.beaches.iter().map(DisplayItem::from_beach).collect(),
            Category::Temple => self.temples.iter().map(DisplayItem::from_temple).collect(),
            Category::Country => self
                .countries
                .iter()
                .flat_map(|country| {
                    country
                        .cities
                        .iter()
                        .map(move |city| DisplayItem::from_city(city, &country.name))
                })
                .collect(),
        }
    }

    /// Find a country by name, case- and accent-insensitive.
    pub fn find_country_by_name(&self, name: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|c| equals_folded(&c.name, name))
    }
}
