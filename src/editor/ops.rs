//! Toolbar editing operations.
//!
//! Every operation is a pure transform from `(source, selection)` to a new
//! [`Edit`]; the caller owns the current document and selection between
//! calls and applies the returned values itself. No operation touches the
//! parser or any render state.

use tracing::trace;

use super::selection::Selection;

/// Default link text when the caller supplies none.
pub const LINK_TEXT_PLACEHOLDER: &str = "link text";

/// Result of an editing operation: the new source and the new selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// The transformed document source.
    pub source: String,
    /// Where the cursor/highlight should land in the new source.
    pub selection: Selection,
}

/// Wrap the selection in `before`/`after` markers (bold, italic, inline
/// code, code fences).
///
/// With a collapsed caret, `before + placeholder + after` is inserted
/// instead. Either way the returned selection covers exactly the wrapped
/// or placeholder text so the user can overtype it immediately.
pub fn apply_wrap(
    source: &str,
    selection: Selection,
    before: &str,
    after: &str,
    placeholder: &str,
) -> Edit {
    let sel = selection.normalized(source.chars().count());
    let (start_b, end_b) = byte_range(source, sel);
    let inner = if sel.is_empty() {
        placeholder
    } else {
        &source[start_b..end_b]
    };

    let mut out = String::with_capacity(source.len() + before.len() + after.len() + inner.len());
    out.push_str(&source[..start_b]);
    out.push_str(before);
    out.push_str(inner);
    out.push_str(after);
    out.push_str(&source[end_b..]);

    let new_start = sel.start + before.chars().count();
    let new_end = new_start + inner.chars().count();
    trace!(op = "wrap", before, after, "applied wrap");
    Edit {
        source: out,
        selection: Selection::new(new_start, new_end),
    }
}

/// Toggle `prefix` on every line the selection spans (headings, list
/// items, blockquotes).
///
/// A line already starting with the exact prefix has it stripped,
/// otherwise the prefix is prepended. The returned selection covers the
/// spanned lines in full, which makes a second application with that
/// selection undo the first.
pub fn apply_line_prefix(source: &str, selection: Selection, prefix: &str) -> Edit {
    let sel = selection.normalized(source.chars().count());
    let lines: Vec<&str> = source.split('\n').collect();

    // Char offset of each line start, in source order.
    let mut starts = Vec::with_capacity(lines.len());
    let mut pos = 0usize;
    for line in &lines {
        starts.push(pos);
        pos += line.chars().count() + 1;
    }
    let line_of = |offset: usize| match starts.binary_search(&offset) {
        Ok(i) => i,
        Err(i) => i - 1,
    };

    let first = line_of(sel.start);
    let mut last = line_of(sel.end);
    // A non-empty selection ending exactly at a line start does not span
    // that line (textarea convention).
    if last > first && sel.end == starts[last] {
        last -= 1;
    }

    let out_lines: Vec<String> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i < first || i > last {
                (*line).to_string()
            } else if let Some(stripped) = line.strip_prefix(prefix) {
                stripped.to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect();

    // Select the spanned lines in full: from the first spanned line's
    // start to the last spanned line's content end in the new source.
    let new_start = starts[first];
    let spanned_chars: usize = out_lines[first..=last]
        .iter()
        .map(|line| line.chars().count())
        .sum();
    let new_end = new_start + spanned_chars + (last - first);

    trace!(op = "line_prefix", prefix, first, last, "toggled prefix");
    Edit {
        source: out_lines.join("\n"),
        selection: Selection::new(new_start, new_end),
    }
}

/// Insert `[text](url)` at the cursor, replacing any selection.
///
/// Returns `None` when `url` is empty or whitespace-only; the caller keeps
/// its dialog open. Empty `text` falls back to [`LINK_TEXT_PLACEHOLDER`],
/// and in that case the returned selection covers the placeholder so it
/// can be overtyped; otherwise the caret collapses after the inserted
/// markup.
pub fn insert_link(source: &str, selection: Selection, text: &str, url: &str) -> Option<Edit> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    let sel = selection.normalized(source.chars().count());
    let (start_b, end_b) = byte_range(source, sel);

    let placeholder_used = text.trim().is_empty();
    let text = if placeholder_used {
        LINK_TEXT_PLACEHOLDER
    } else {
        text
    };
    let markup = format!("[{text}]({url})");

    let mut out = String::with_capacity(source.len() + markup.len());
    out.push_str(&source[..start_b]);
    out.push_str(&markup);
    out.push_str(&source[end_b..]);

    let selection = if placeholder_used {
        let text_start = sel.start + 1;
        Selection::new(text_start, text_start + text.chars().count())
    } else {
        Selection::caret(sel.start + markup.chars().count())
    };
    trace!(op = "insert_link", url, "inserted link");
    Some(Edit {
        source: out,
        selection,
    })
}

/// Byte offsets of a normalized char-offset selection.
fn byte_range(source: &str, sel: Selection) -> (usize, usize) {
    (byte_at(source, sel.start), byte_at(source, sel.end))
}

fn byte_at(source: &str, char_idx: usize) -> usize {
    source
        .char_indices()
        .nth(char_idx)
        .map_or(source.len(), |(i, _)| i)
}
