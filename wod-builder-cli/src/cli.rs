// src/cli.rs
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Assemble a workout of the day from an exercise catalog", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and list the exercise catalog
    Catalog {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
        /// Catalog server base URL (overrides config and WOD_API_URL)
        #[arg(long)]
        url: Option<String>,
        /// Group an exported record list (JSON array of {name, category}) instead of fetching
        #[arg(long, conflicts_with = "url")]
        records: Option<PathBuf>,
    },
    /// Build a workout from a plan file and print the copyable text
    Compose {
        /// Plan file, one builder command per line
        plan: PathBuf,
        /// Print the workout structure as a table instead of plain text
        #[arg(long)]
        table: bool,
    },
    /// Show the path to the config file
    ConfigPath,
    /// Print the effective configuration
    ShowConfig,
    /// Set the catalog server base URL
    SetApiUrl { url: String },
    /// Generate shell completion scripts
    GenerateCompletion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

// Function to parse CLI arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}
