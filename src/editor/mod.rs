//! Pure editing operations for the markdown toolbar.
//!
//! The enclosing editor reads the current selection from its text area,
//! calls one of these operations, and applies the returned source and
//! selection. Nothing here holds state between calls.

mod ops;
mod selection;

pub use ops::{apply_line_prefix, apply_wrap, insert_link, Edit, LINK_TEXT_PLACEHOLDER};
pub use selection::Selection;
