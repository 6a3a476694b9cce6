use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dialogscraper")]
#[command(version)]
#[command(about = "Rebuilds game dialog transcripts from client UI events")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Feed a recorded host script (JSONL) through the scraper
    Replay {
        /// Path to the host script
        script: PathBuf,

        /// Config file (defaults to <save root>/config.json)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the configured save path
        #[arg(long)]
        save_path: Option<PathBuf>,
    },

    /// Summarize an NPC transcript file
    Show {
        /// Path to a transcript JSON file
        file: PathBuf,
    },

    /// Print the effective configuration
    Config {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print version information
    Version,
}
