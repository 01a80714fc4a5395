//! Markdown-subset document parsing.
//!
//! This module handles:
//! - Splitting raw source into blank-line-separated chunks
//! - Classifying chunks into [`Block`] values
//! - Recognizing inline runs (bold, italic, code, links)
//!
//! Parsing is recomputed from the raw source on every call; nothing is
//! cached between calls.

mod parser;
mod types;

pub use parser::parse;
pub use types::{Block, Inline};

use std::path::Path;

use anyhow::{Context, Result};

/// Read a markdown source file for the preview CLI.
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))
}
