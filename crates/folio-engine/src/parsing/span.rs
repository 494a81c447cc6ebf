use std::ops::Range;

use serde::Serialize;

/// A byte range `[start, end)` into the document.
///
/// Every segment stores the span it was produced from, including any fence
/// delimiters it consumed, so slicing the document with each span in order
/// reproduces the exact source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Builds a span from a range local to a substring that begins at `base`.
    pub fn offset(base: usize, local: Range<usize>) -> Self {
        Self {
            start: base + local.start,
            end: base + local.end,
        }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }

    /// Slices the source text covered by this span.
    ///
    /// # Panics
    /// Panics if the span is out of bounds for `document` or does not fall on
    /// char boundaries.
    pub fn slice(self, document: &str) -> &str {
        &document[self.range()]
    }
}

/// Extracts text for a span, truncating to at most `max` bytes with "..." suffix if needed.
///
/// Used for human-readable snapshot output. Truncation backs off to the
/// nearest char boundary.
pub fn preview(document: &str, sp: Span, max: usize) -> String {
    let s = sp.slice(document);
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &s[..cut])
}
