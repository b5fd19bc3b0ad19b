//! hookguide - markdown guide parser
//!
//! A CLI tool for turning knowledge-base guides written in markdown into a
//! structured document model, exported as JSON or HTML.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use hookguide::guide_model::{render_inline, Document, Emphasis, Markers};
use hookguide::{html_exporter, json_exporter, loader, GuideConfig};
use itertools::Itertools;
use std::path::{Path, PathBuf};

/// Main entry point for the hookguide CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match cli.command {
        Commands::Parse {
            input,
            output,
            config,
        } => {
            handle_parse_command(&input, output, config)?;
        }

        Commands::Render {
            input,
            output,
            config,
        } => {
            handle_render_command(&input, output, config)?;
        }

        Commands::Outline { input, config } => {
            handle_outline_command(&input, config)?;
        }

        Commands::Inline { text } => {
            handle_inline_command(&text);
        }
    }

    Ok(())
}

/// Resolve the marker vocabulary from an explicit config or the guide's directory
fn resolve_markers(input: &Path, config: Option<PathBuf>) -> Result<Markers> {
    let config = match config {
        Some(path) => GuideConfig::load(&path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => GuideConfig::discover(input)
            .with_context(|| format!("Failed to load configuration beside {}", input.display()))?,
    };

    Ok(config.markers())
}

/// Load and parse a single guide
fn load_guide(input: &Path, markers: &Markers) -> Result<Document> {
    loader::load_document(input, markers)
        .with_context(|| format!("No document available from {}", input.display()))
}

/// Handle the parse command
fn handle_parse_command(
    input: &Path,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let markers = resolve_markers(input, config)?;
    let document = load_guide(input, &markers)?;

    if document.is_empty() {
        log::warn!("{} has no recognized parts", input.display());
    }

    match output {
        Some(path) => {
            json_exporter::to_json(&document, &path)
                .with_context(|| format!("Failed to export JSON to {}", path.display()))?;
            println!("✓ Successfully wrote: {}", path.display());
        }
        None => {
            let json = json_exporter::to_json_string(&document)
                .with_context(|| "Failed to serialize document")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Handle the render command
fn handle_render_command(
    input: &Path,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let markers = resolve_markers(input, config)?;
    let document = load_guide(input, &markers)?;

    let output = output.unwrap_or_else(|| input.with_extension("html"));

    html_exporter::to_html(&document, &output)
        .with_context(|| format!("Failed to export HTML to {}", output.display()))?;

    println!(
        "✓ Rendered {} parts, {} hooks to {}",
        document.parts.len(),
        document.hook_count(),
        output.display()
    );

    Ok(())
}

/// Handle the outline command
fn handle_outline_command(input: &Path, config: Option<PathBuf>) -> Result<()> {
    let markers = resolve_markers(input, config)?;

    if input.is_dir() {
        let guides = loader::parse_guides(input, &markers)
            .with_context(|| format!("Failed to parse guides from {}", input.display()))?;

        println!("Found {} guides in {}", guides.len(), input.display());
        for guide in &guides {
            println!("\n{}", guide.path.display());
            print_outline(&guide.document);
        }
    } else {
        let document = load_guide(input, &markers)?;
        print_outline(&document);
    }

    Ok(())
}

/// Handle the inline command
fn handle_inline_command(text: &str) {
    for run in render_inline(text) {
        let kind = match run.emphasis {
            Emphasis::Plain => "plain",
            Emphasis::Bold => "bold",
            Emphasis::Italic => "italic",
            Emphasis::Code => "code",
        };
        println!("{:<7} {:?}", kind, run.text);
    }
}

/// Print the outline of a parsed guide
fn print_outline(document: &Document) {
    println!("{}", document.title);
    println!(
        "  {} parts, {} hooks, {} sections, {} words",
        document.parts.len(),
        document.hook_count(),
        document.section_count(),
        document.word_count()
    );

    for part in &document.parts {
        println!("\n  {}", part.title);
        if let Some(ref description) = part.description {
            println!("    {}", description);
        }
        for hook in &part.hooks {
            let kinds = hook
                .content
                .iter()
                .map(|section| section.kind())
                .dedup_with_count()
                .map(|(count, kind)| format!("{}×{}", count, kind))
                .join(", ");
            println!("    - {} ({})", hook.title, kinds);
        }
    }
}
