use yks_diagnostic::text_range::TextRange;

/// Maps the character offsets reported by the YAML scanner to lines, columns and byte offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of every character, plus the length of the text as the final entry
    char_to_byte: Vec<usize>,
    /// Character offset of the start of every line
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut char_to_byte = Vec::with_capacity(text.len() + 1);
        let mut line_starts = vec![0];
        for (char_idx, (byte_idx, ch)) in text.char_indices().enumerate() {
            char_to_byte.push(byte_idx);
            if ch == '\n' {
                line_starts.push(char_idx + 1);
            }
        }
        char_to_byte.push(text.len());
        Self {
            char_to_byte,
            line_starts,
        }
    }

    /// Byte offset of the character at `char_idx`, clamped to the end of the text
    pub fn byte_offset(&self, char_idx: usize) -> usize {
        self.char_to_byte
            .get(char_idx)
            .or(self.char_to_byte.last())
            .copied()
            .unwrap_or_default()
    }

    /// Zero-based `(line, column)` of the character at `char_idx`
    pub fn line_col(&self, char_idx: usize) -> (usize, usize) {
        let line = self
            .line_starts
            .partition_point(|&start| start <= char_idx)
            .saturating_sub(1);
        (line, char_idx - self.line_starts[line])
    }

    /// Byte range between two character offsets
    pub fn byte_range(&self, start: usize, end: usize) -> TextRange {
        let start = self.byte_offset(start);
        TextRange::new(start, self.byte_offset(end).max(start))
    }
}
