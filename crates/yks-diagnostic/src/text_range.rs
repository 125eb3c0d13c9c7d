use std::fmt::{Debug, Display};
use std::ops::Range;

/// A byte range in a YAML document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TextRange {
    /// The beginning byte offset of the range (inclusive)
    pub start: usize,
    /// The ending byte offset of the range (exclusive)
    pub end: usize,
}
impl Display for TextRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl TextRange {
    /// Creates a new `TextRange`.
    pub const fn new(start: usize, end: usize) -> TextRange {
        TextRange { start, end }
    }

    /// Creates an empty `TextRange` at `offset`.
    pub const fn empty(offset: usize) -> TextRange {
        TextRange {
            start: offset,
            end: offset,
        }
    }

    /// Returns the length of the range.
    ///
    /// Saturates at zero for ranges whose end lies before their start, which the YAML parser can
    /// report for zero-width nodes.
    ///
    /// # Example
    ///
    /// ```
    /// use yks_diagnostic::text_range::TextRange;
    ///
    /// assert_eq!(TextRange::new(4, 7).length(), 3);
    /// assert_eq!(TextRange::empty(4).length(), 0);
    /// ```
    #[inline(always)]
    pub const fn length(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns the text as referenced from `source`.
    ///
    /// # Example
    ///
    /// ```
    /// use yks_diagnostic::text_range::TextRange;
    ///
    /// let source = "key: value";
    ///
    /// assert_eq!(TextRange::new(0, 3).text(source), Some("key"));
    ///
    /// // Out of bounds
    /// assert_eq!(TextRange::new(10, 12).text(source), None);
    /// ```
    #[inline(always)]
    pub fn text<'i>(&self, source: &'i str) -> Option<&'i str> {
        source.get(self.start..self.end)
    }

    /// Returns the byte offset range in a [`Range`].
    #[inline(always)]
    pub const fn byte_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for TextRange {
    #[inline(always)]
    fn from(value: Range<usize>) -> Self {
        Self {
            start: value.start,
            end: value.end,
        }
    }
}
impl From<TextRange> for Range<usize> {
    #[inline(always)]
    fn from(value: TextRange) -> Self {
        value.start..value.end
    }
}
