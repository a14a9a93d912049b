//! Error handling example for travelrec-rs
//!
//! This example demonstrates proper error handling and edge cases

use travelrec_core::prelude::*;

fn main() -> Result<()> {
    println!("=== TravelRec-RS Error Handling Example ===\n");

    // Example 1: Handling dataset load errors
    println!("--- Example 1: Loading dataset with error handling ---");
    match RecommendationSet::load() {
        Ok(data) => {
            println!("✓ Dataset loaded successfully");
            println!("  Countries: {}", data.countries().len());
        }
        Err(e) => {
            eprintln!("✗ Failed to load dataset: {e}");
            return Err(e);
        }
    }
    println!();

    let data = RecommendationSet::load()?;

    // Example 2: A missing file is an error, not a panic
    println!("--- Example 2: Loading a missing file ---");
    match RecommendationSet::load_from_path("/tmp/does_not_exist.json") {
        Ok(_) => println!("  Unexpectedly loaded"),
        Err(e) => println!("  As expected: {e}"),
    }
    println!();

    // Example 3: Unclassifiable keywords yield guidance, not failure
    println!("--- Example 3: Unclassifiable keywords ---");
    for keyword in ["mountains", "", "   ", "12345"] {
        match Category::parse(keyword) {
            Some(category) => println!("  {keyword:?} -> {category}"),
            None => println!("  {keyword:?} -> {PROMPT_MESSAGE}"),
        }
    }
    println!();

    // Example 4: Searching for non-existent countries
    println!("--- Example 4: Country lookups ---");
    for name in ["Japan", "japan", "Atlantis"] {
        match data.find_country_by_name(name) {
            Some(country) => {
                println!("  Found: {} ({} cities)", country.name(), country.cities().len())
            }
            None => println!("  Not found: {name}"),
        }
    }

    Ok(())
}
