use serde::{Deserialize, Serialize};

/// A beach entry as it comes from the JSON document.
///
/// The dataset uses camelCase keys (`imageUrl`); field renames keep the
/// Rust side idiomatic. Missing sections elsewhere in the document degrade
/// to empty vectors, but each present record must carry all three fields.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Beach {
    pub name: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// A temple entry from the JSON document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Temple {
    pub name: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// A city nested inside a [`Country`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// A country entry: a name plus its ordered city list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    #[serde(default)]
    pub cities: Vec<City>,
}

/// Top-level dataset structure.
///
/// Holds the three recommendation sections and provides selection helpers.
/// Constructed by the loader module from the bundled JSON document. Absent
/// sections deserialize as empty sequences rather than failing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecommendationSet {
    #[serde(default)]
    pub beaches: Vec<Beach>,
    #[serde(default)]
    pub temples: Vec<Temple>,
    #[serde(default)]
    pub countries: Vec<Country>,
}

/// The rendering-ready shape for a single result card.
///
/// `country` is present only when the item was sourced from a country's
/// city; beaches and temples leave it unset.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayItem {
    pub name: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl DisplayItem {
    pub fn from_beach(beach: &Beach) -> Self {
        DisplayItem {
            name: beach.name.clone(),
            description: beach.description.clone(),
            image_url: beach.image_url.clone(),
            country: None,
        }
    }

    pub fn from_temple(temple: &Temple) -> Self {
        DisplayItem {
            name: temple.name.clone(),
            description: temple.description.clone(),
            image_url: temple.image_url.clone(),
            country: None,
        }
    }

    /// A city card carries the parent country's name.
    pub fn from_city(city: &City, country: &str) -> Self {
        DisplayItem {
            name: city.name.clone(),
            description: city.description.clone(),
            image_url: city.image_url.clone(),
            country: Some(country.to_owned()),
        }
    }
}

impl RecommendationSet {
    pub fn beaches(&self) -> &[Beach] {
        &self.beaches
    }

    pub fn temples(&self) -> &[Temple] {
        &self.temples
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }
}

impl Country {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }
}

impl City {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl DisplayItem {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_keys() {
        let json = r#"{
            "beaches": [
                {"name": "Bora Bora", "description": "Lagoon.", "imageUrl": "images/bora_bora.jpg"}
            ],
            "temples": [],
            "countries": []
        }"#;
        let set: RecommendationSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.beaches.len(), 1);
        assert_eq!(set.beaches[0].image_url, "images/bora_bora.jpg");
    }

    #[test]
    fn absent_sections_degrade_to_empty() {
        let set: RecommendationSet = serde_json::from_str("{}").unwrap();
        assert!(set.beaches.is_empty());
        assert!(set.temples.is_empty());
        assert!(set.countries.is_empty());

        let set: RecommendationSet =
            serde_json::from_str(r#"{"countries": [{"name": "Japan"}]}"#).unwrap();
        assert_eq!(set.countries.len(), 1);
        assert!(set.countries[0].cities.is_empty());
    }

    #[test]
    fn display_item_from_city_carries_country() {
        let city = City {
            name: "Kyoto".into(),
            description: "Old capital.".into(),
            image_url: "images/kyoto.jpg".into(),
        };
        let item = DisplayItem::from_city(&city, "Japan");
        assert_eq!(item.country(), Some("Japan"));
        assert_eq!(item.name(), "Kyoto");
    }
}
