//! Marklet - preview a markdown-subset file as HTML or a JSON block tree.
//!
//! # Usage
//!
//! ```bash
//! marklet post.md
//! marklet --json post.md
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use marklet::document::{parse, read_source};
use marklet::render::to_html;

/// Render a markdown-subset file for preview
#[derive(Parser, Debug)]
#[command(name = "marklet", version, about, long_about = None)]
struct Cli {
    /// Markdown file to render
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Emit the parsed block tree as JSON instead of HTML
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if !cli.file.exists() {
        anyhow::bail!("File not found: {}", cli.file.display());
    }

    let source = read_source(&cli.file)?;
    let blocks = parse(&source);

    if cli.json {
        let json = serde_json::to_string_pretty(&blocks).context("serialize block tree")?;
        println!("{json}");
    } else {
        print!("{}", to_html(&blocks));
    }
    Ok(())
}
