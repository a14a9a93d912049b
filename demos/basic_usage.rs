//! Basic usage example for travelrec-rs
//!
//! This example demonstrates how to:
//! - Load the recommendation dataset
//! - Classify a keyword into a category
//! - Select and render result cards
//! - Use the memoized loader

use travelrec_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== TravelRec-RS Basic Usage Example ===\n");

    // Load the dataset (memoized: later calls reuse the parsed copy)
    println!("Loading recommendation dataset...");
    let data = RecommendationSet::load()?;
    println!("✓ Dataset loaded successfully\n");

    // Example 1: Dataset statistics
    println!("--- Example 1: Dataset statistics ---");
    let stats = data.stats();
    println!("Beaches: {}", stats.beaches);
    println!("Temples: {}", stats.temples);
    println!("Countries: {}", stats.countries);
    println!("Cities: {}", stats.cities);
    println!();

    // Example 2: Classify free-text keywords
    println!("--- Example 2: Keyword classification ---");
    for raw in ["Beaches", "TEMPLE ", "Countries", "mountains", ""] {
        match Category::parse(raw) {
            Some(category) => println!("{raw:?} -> {category}"),
            None => println!("{raw:?} -> no match"),
        }
    }
    println!();

    // Example 3: Select items for a category
    println!("--- Example 3: Beach recommendations ---");
    for item in data.recommendations_for(Category::Beach) {
        println!("- {}: {}", item.name(), item.description());
    }
    println!();

    // Example 4: Country search flattens cities with their parent country
    println!("--- Example 4: City cards from the country category ---");
    for item in data.recommendations_for(Category::Country) {
        let country = item.country().unwrap_or("?");
        println!("- {}, {}", item.name(), country);
    }
    println!();

    // Example 5: The memoized loader returns the same reference
    println!("--- Example 5: Loader memoization ---");
    let again = RecommendationSet::load()?;
    println!("Same cached reference: {}", std::ptr::eq(data, again));

    println!("\n=== Example completed successfully ===");
    Ok(())
}
