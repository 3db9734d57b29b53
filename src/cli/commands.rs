use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ragseed", about = "Seed and query a review vector index")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rebuild the index, embed the review dataset, upsert and verify
    Seed {
        /// Path to the reviews JSON file
        #[arg(long, default_value = "reviews.json")]
        file: String,
        /// Load into the existing index instead of recreating it
        #[arg(long)]
        keep_index: bool,
    },
    /// Show index statistics
    Stats,
    /// Semantic query: embed a question and return the nearest reviews
    Query {
        /// Question text
        text: String,
        /// Number of matches to return
        #[arg(long, default_value = "3")]
        limit: usize,
    },
}
