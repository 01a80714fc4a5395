//! Cursor selection over the document source.

/// A character-offset range into the document source.
///
/// Offsets count characters, not bytes, so callers working with multi-byte
/// text can never split a code point. `start == end` is a collapsed caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl Selection {
    /// Create a selection covering `start..end`.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a collapsed caret at `at`.
    pub const fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Whether the selection is a collapsed caret.
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Number of characters covered. Only meaningful once normalized.
    pub const fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Clamp both offsets to `char_count` and swap them if inverted.
    ///
    /// Every editing operation normalizes its incoming selection this way,
    /// so offsets beyond the document or reversed ranges are valid inputs.
    pub fn normalized(self, char_count: usize) -> Self {
        let a = self.start.min(char_count);
        let b = self.end.min(char_count);
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }
}
