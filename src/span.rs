//! Character spans within story content.

use serde::{Deserialize, Serialize};

/// A contiguous half-open range `[start, end)` within a story's content.
///
/// Offsets are measured in characters of the buffer as it currently exists,
/// not bytes: story content is routinely Arabic text, where byte offsets
/// would land inside multi-byte glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextSpan {
    /// First character covered by the span
    pub start: usize,
    /// One past the last character covered by the span
    pub end: usize,
}

impl TextSpan {
    /// Create a new span. `start` must not exceed `end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} exceeds end {}", start, end);
        Self { start, end }
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True if the span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Span moved by a signed character delta.
    ///
    /// Used when an edit earlier in the buffer grows or shrinks the content
    /// ahead of this span.
    pub fn shift(&self, delta: isize) -> Self {
        Self {
            start: (self.start as isize + delta) as usize,
            end: (self.end as isize + delta) as usize,
        }
    }

    /// True if `offset` falls inside the span.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_and_empty() {
        assert_eq!(TextSpan::new(2, 7).len(), 5);
        assert!(!TextSpan::new(2, 7).is_empty());
        assert!(TextSpan::new(4, 4).is_empty());
    }

    #[test]
    fn test_shift_both_directions() {
        let span = TextSpan::new(10, 15);
        assert_eq!(span.shift(3), TextSpan::new(13, 18));
        assert_eq!(span.shift(-10), TextSpan::new(0, 5));
    }

    #[test]
    fn test_contains() {
        let span = TextSpan::new(3, 6);
        assert!(span.contains(3));
        assert!(span.contains(5));
        assert!(!span.contains(6));
        assert!(!span.contains(2));
    }
}
