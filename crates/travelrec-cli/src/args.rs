use clap::{Parser, Subcommand};

/// CLI arguments for travelrec-cli
#[derive(Debug, Parser)]
#[command(
    name = "travelrec",
    version,
    about = "CLI for searching the travelrec-core travel recommendation dataset"
)]
pub struct CliArgs {
    /// Path to the input JSON dataset (default: bundled travel_recommendation_api.json)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// URL to fetch the dataset from instead of reading a file
    #[cfg(feature = "fetch")]
    #[arg(short = 'u', long = "url", global = true, conflicts_with = "input")]
    pub url: Option<String>,

    /// Emit result cards as an HTML fragment instead of plain text
    #[arg(long = "html", global = true)]
    pub html: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset contents
    Stats,

    /// Search recommendations by keyword ("beach", "temple", "country")
    Search {
        /// Free-text keyword, classified case-insensitively
        keyword: String,
    },

    /// List all beaches
    Beaches,

    /// List all temples
    Temples,

    /// List all countries and their cities
    Countries,
}
