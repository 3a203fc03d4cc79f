//! Line indexing for TextBuffer
//! Tracks char offsets of line starts

/// Char offsets of the start of each line.
///
/// A new line starts right after every `'\n'`. A `'\r'` in front of the
/// `'\n'` is left to the buffer to account for when measuring line length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Always contains at least [0]
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Create a new LineIndex starting with a single empty line
    #[must_use]
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
        }
    }

    /// Index an existing run of chars
    #[must_use]
    pub fn from_chars(chars: &[char]) -> Self {
        let mut index = Self::new();
        index.insert(0, chars);
        index
    }

    /// Total number of lines
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the offset where a line starts (0-indexed)
    #[must_use]
    pub fn get_start(&self, line_idx: usize) -> Option<usize> {
        self.line_starts.get(line_idx).copied()
    }

    /// Offset of the `'\n'` ending `line_idx`, or `None` for the last line
    #[must_use]
    pub fn get_newline(&self, line_idx: usize) -> Option<usize> {
        self.line_starts
            .get(line_idx + 1)
            .map(|next| next.saturating_sub(1))
    }

    /// Get line number for an offset (binary search)
    ///
    /// The `'\n'` itself belongs to the line it terminates.
    #[must_use]
    pub fn get_line_at(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        }
    }

    /// Update index for inserting `chars` at `offset`
    pub fn insert(&mut self, offset: usize, chars: &[char]) {
        let len = chars.len();
        if len == 0 {
            return;
        }

        let line_idx = self.get_line_at(offset);

        for start in self.line_starts.iter_mut().skip(line_idx + 1) {
            *start += len;
        }

        let new_starts: Vec<usize> = chars
            .iter()
            .enumerate()
            .filter(|(_, &ch)| ch == '\n')
            .map(|(i, _)| offset + i + 1)
            .collect();

        if !new_starts.is_empty() {
            self.line_starts
                .splice(line_idx + 1..line_idx + 1, new_starts);
        }
    }

    /// Update index for deleting `len` chars at `offset`
    pub fn delete(&mut self, offset: usize, len: usize) {
        if len == 0 {
            return;
        }

        let delete_end = offset + len;

        // A start `s` is dropped when its '\n' (at s - 1) was inside the range.
        self.line_starts
            .retain(|&start| start <= offset || start > delete_end);

        for start in self.line_starts.iter_mut() {
            if *start > offset {
                *start -= len;
            }
        }
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
