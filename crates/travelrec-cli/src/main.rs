//! travelrec-cli — Command-line interface for travelrec-core
//!
//! This binary provides a simple way to query the bundled travel
//! recommendation dataset from your terminal. It supports printing basic
//! statistics, searching by keyword, and listing each section directly.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ travelrec stats
//!
//! - Search by keyword (classified case-insensitively)
//!   $ travelrec search beach
//!   $ travelrec search Countries
//!
//! - Emit the search result as an HTML card fragment
//!   $ travelrec --html search temple
//!
//! - List a section directly
//!   $ travelrec beaches
//!   $ travelrec countries
//!
//! Data source
//! -----------
//!
//! By default, the CLI loads the JSON dataset bundled with the
//! `travelrec-core` crate. Use `--input <path>` to point to a custom
//! dataset with the same `{beaches, temples, countries}` shape.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use travelrec_core::render::{render_recommendations, EMPTY_RESULTS_MESSAGE, PROMPT_MESSAGE};
use travelrec_core::{Category, DisplayItem, RecommendationSet};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let data = load_dataset(&args)?;

    match args.command {
        Commands::Stats => {
            let stats = data.stats();
            println!("Dataset statistics:");
            println!("  Beaches: {}", stats.beaches);
            println!("  Temples: {}", stats.temples);
            println!("  Countries: {}", stats.countries);
            println!("  Cities: {}", stats.cities);
        }

        Commands::Search { keyword } => match Category::parse(&keyword) {
            Some(category) => {
                let items = data.recommendations_for(category);
                if args.html {
                    println!("{}", render_recommendations(&items));
                } else if items.is_empty() {
                    println!("{EMPTY_RESULTS_MESSAGE}");
                } else {
                    for item in &items {
                        print_item(item);
                    }
                }
            }
            None => {
                // Unclassifiable keyword is guidance, not an error.
                println!("{PROMPT_MESSAGE}");
            }
        },

        Commands::Beaches => {
            for beach in data.beaches() {
                println!("{} — {}", beach.name, beach.description);
            }
        }

        Commands::Temples => {
            for temple in data.temples() {
                println!("{} — {}", temple.name, temple.description);
            }
        }

        Commands::Countries => {
            for country in data.countries() {
                println!("{} ({} cities)", country.name(), country.cities().len());
                for city in country.cities() {
                    println!("- {}", city.name());
                }
            }
        }
    }

    Ok(())
}

fn load_dataset(args: &CliArgs) -> anyhow::Result<RecommendationSet> {
    #[cfg(feature = "fetch")]
    if let Some(url) = &args.url {
        return Ok(RecommendationSet::load_from_url(url)?);
    }

    // Determine input file (default JSON inside travelrec-core)
    let input_path = match &args.input {
        Some(path) => path.clone(),
        None => {
            let dir = RecommendationSet::default_data_dir();
            let filename = RecommendationSet::default_dataset_filename();
            dir.join(filename).to_string_lossy().to_string()
        }
    };
    Ok(RecommendationSet::load_from_path(&input_path)?)
}

fn print_item(item: &DisplayItem) {
    match item.country() {
        Some(country) => println!("{}, {} — {}", item.name(), country, item.description()),
        None => println!("{} — {}", item.name(), item.description()),
    }
}
