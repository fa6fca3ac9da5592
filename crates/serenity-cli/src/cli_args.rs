//! CLI argument definitions for the `serenity` command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// Serenity - Mood-conditioned therapeutic audio generation
#[derive(Parser)]
#[command(name = "serenity")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate a WAV clip and metadata sidecar from a request file
    Generate {
        /// Path to the request JSON
        #[arg(short, long)]
        request: String,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        out_root: Option<String>,

        /// Path to a synthesis config JSON
        #[arg(short, long)]
        config: Option<String>,

        /// Seed override for reproducible output
        #[arg(long)]
        seed: Option<u32>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a request file without generating audio
    Validate {
        /// Path to the request JSON
        #[arg(short, long)]
        request: String,

        /// Path to a synthesis config JSON
        #[arg(short, long)]
        config: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate every request JSON in a directory
    Batch {
        /// Directory containing request JSON files
        #[arg(short, long)]
        dir: String,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        out_root: Option<String>,

        /// Path to a synthesis config JSON
        #[arg(short, long)]
        config: Option<String>,

        /// Seed override applied to every request
        #[arg(long)]
        seed: Option<u32>,

        /// Maximum concurrent syntheses
        #[arg(short, long, default_value_t = 4)]
        jobs: usize,

        /// Per-request time budget in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the mood profile table
    Profiles {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}
