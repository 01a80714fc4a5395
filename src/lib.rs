// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference
    clippy::module_name_repetitions
)]

//! # Marklet
//!
//! A markdown-subset renderer and editing-operation library.
//!
//! Marklet backs a rich-text toolbar and a read-only post view with one
//! shared parser:
//! - Parsing raw source into structured blocks (headings, paragraphs,
//!   lists, blockquotes, code blocks, inline emphasis/links)
//! - Pure cursor-based editing operations (wrap, line-prefix toggle,
//!   link insertion)
//! - A preview projection from blocks to an HTML fragment
//!
//! Parsing is total: any input yields a block sequence, malformed markup
//! degrades to plain text, and everything is recomputed from the raw
//! source on each call so re-parsing per keystroke stays cheap.
//!
//! ## Modules
//!
//! - [`document`]: parsing source into blocks
//! - [`editor`]: selection handling and toolbar operations
//! - [`render`]: block-to-HTML preview projection

pub mod document;
pub mod editor;
pub mod render;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::document::{parse, Block, Inline};
    pub use crate::editor::{apply_line_prefix, apply_wrap, insert_link, Edit, Selection};
    pub use crate::render::to_html;
}
