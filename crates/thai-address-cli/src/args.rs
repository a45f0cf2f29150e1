use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CLI arguments for thai-address
#[derive(Debug, Parser)]
#[command(
    name = "thai-address",
    version,
    about = "Look up Thai addresses by postal code, province, district or free text"
)]
pub struct CliArgs {
    /// Dataset file: .json, .json.gz or a binary cache (default: the embedded dataset)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Read --input through a binary cache written next to it
    #[arg(long = "cache", global = true, requires = "input")]
    pub cache: bool,

    /// Output names in Thai (th) or English (en)
    #[arg(short = 'l', long = "locale", global = true, default_value = "th")]
    pub locale: String,

    /// Maximum number of autocomplete suggestions
    #[arg(long = "limit", global = true, default_value_t = thai_address_core::DEFAULT_AUTOCOMPLETE_LIMIT)]
    pub limit: usize,

    /// Print hits as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// Route a free-text query the way the search box does
    Search {
        /// Postal code, province, district or sub-district fragment
        query: String,
    },

    /// Exact postal code lookup
    Postal {
        /// Five-digit postal code (e.g. 10330)
        code: String,
    },

    /// Every sub-district of the matching provinces
    Province { text: String },

    /// Every sub-district of the matching districts
    District { text: String },

    /// Ranked suggestions, capped by --limit
    Autocomplete { query: String },

    /// Prompt for queries until `:q`
    Interactive,

    /// Write the loaded dataset as a binary cache
    Build {
        /// Output file
        output: PathBuf,
    },
}
