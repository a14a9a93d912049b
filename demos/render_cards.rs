//! Card rendering example for travelrec-rs
//!
//! Prints the HTML fragment a front end would inject into the results
//! container, for each outcome: cards, empty results, and guidance text.

use travelrec_core::prelude::*;

fn main() -> Result<()> {
    let data = RecommendationSet::load()?;

    println!("--- Cards for \"temple\" ---");
    let items = data.recommendations_for(Category::Temple);
    println!("{}\n", render_recommendations(&items));

    println!("--- Empty result list ---");
    println!("{}\n", render_recommendations(&[]));

    println!("--- Unclassifiable keyword ---");
    match Category::parse("mountains") {
        Some(category) => println!("unexpected match: {category}"),
        None => println!("{}", render_message(PROMPT_MESSAGE)),
    }

    Ok(())
}
