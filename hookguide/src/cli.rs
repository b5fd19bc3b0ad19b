//! Command-line interface definitions for hookguide

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI structure for the hookguide application
#[derive(Parser)]
#[command(name = "hookguide")]
#[command(version)]
#[command(about = "Parse markdown knowledge-base guides into a document model", long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for hookguide
#[derive(Subcommand)]
pub enum Commands {
    /// Parse a guide and print its document model as JSON
    Parse {
        /// Guide markdown file
        input: PathBuf,

        /// Write JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to hookguide.toml beside the guide)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Render a guide to a standalone HTML page
    Render {
        /// Guide markdown file
        input: PathBuf,

        /// Output HTML file (defaults to the input name with .html extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to hookguide.toml beside the guide)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the parts and hooks of a guide, or of every guide in a directory
    Outline {
        /// Guide markdown file or directory of guides
        #[arg(value_name = "PATH", default_value = ".")]
        input: PathBuf,

        /// Configuration file (defaults to hookguide.toml beside the guide)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show how a text span splits into inline runs
    Inline {
        /// Text containing **bold**, *italic* or `code` markers
        text: String,
    },
}
