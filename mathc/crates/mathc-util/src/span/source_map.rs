//! Line index over a single source text.
//!
//! [`SourceFile`] precomputes line start offsets so diagnostics can recover
//! the text of the line a [`Span`](super::Span) points into.

use std::sync::Arc;

use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and precomputed line starts
///
/// # Examples
///
/// ```
/// use mathc_util::span::SourceFile;
///
/// let file = SourceFile::new("main.math", "let x = 5;\nprint x;");
/// assert_eq!(file.name(), "main.math");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.line_at(2).unwrap(), "print x;");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Byte offset of the first character of every line
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .char_indices()
                .filter(|&(_, ch)| ch == '\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// An empty file has one (empty) line, and a trailing `\n` opens another.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get a specific source line (1-indexed), without its line break
    ///
    /// # Examples
    ///
    /// ```
    /// use mathc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.math", "a;\nb;");
    /// assert_eq!(file.line_at(1).unwrap(), "a;");
    /// assert!(file.line_at(3).is_err());
    /// ```
    pub fn line_at(&self, line: usize) -> SourceMapResult<&str> {
        let invalid = || SourceMapError::InvalidLineNumber {
            line,
            max_lines: self.line_count(),
        };
        if line == 0 {
            return Err(invalid());
        }
        let start = *self.line_starts.get(line - 1).ok_or_else(invalid)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());

        Ok(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content with bounds checking
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset (inclusive)
    /// * `end` - End byte offset (exclusive)
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len()
            || !self.content.is_char_boundary(start)
            || !self.content.is_char_boundary(end)
        {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }

        Ok(&self.content[start..end])
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
