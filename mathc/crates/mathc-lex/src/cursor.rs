//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for error reporting.

use mathc_util::Span;

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use mathc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x = 5;");
///
/// assert_eq!(cursor.current_char(), 'l');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'e');
/// assert_eq!(cursor.next_char(), Some('t'));
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

/// A saved cursor location, used as the start of a span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark {
    /// Byte position.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

impl Mark {
    /// Builds the span from this mark up to the byte offset `end`.
    #[inline]
    pub fn span_to(self, end: usize) -> Span {
        Span::new(self.position, end, self.line, self.column)
    }
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source; callers
    /// that must tell a literal NUL from the end check [`Cursor::is_at_end`].
    #[inline]
    pub fn current_char(&self) -> char {
        self.remaining().chars().next().unwrap_or('\0')
    }

    /// Returns the character after the current one, or `None` when the
    /// current character is the last one (or the cursor is at the end).
    ///
    /// # Example
    ///
    /// ```
    /// use mathc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("é;");
    /// assert_eq!(cursor.next_char(), Some(';'));
    /// assert_eq!(Cursor::new(";").next_char(), None);
    /// ```
    #[inline]
    pub fn next_char(&self) -> Option<char> {
        let mut chars = self.remaining().chars();
        chars.next()?;
        chars.next()
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.remaining().chars().next() else {
            return;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Saves the current location.
    #[inline]
    pub fn mark(&self) -> Mark {
        Mark {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Span covering exactly the current character.
    pub fn current_span(&self) -> Span {
        let width = self.remaining().chars().next().map_or(0, char::len_utf8);
        self.mark().span_to(self.position + width)
    }

    /// Returns the source text between two byte offsets.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("let x = 5;");
        assert_eq!(cursor.current_char(), 'l');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.mark().column, 1);
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβ;");
        assert_eq!(cursor.current_char(), 'α');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'β');
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.mark().column, 2);
        cursor.advance();
        assert_eq!(cursor.current_char(), ';');
    }

    #[test]
    fn test_end_of_input() {
        let mut cursor = Cursor::new("a");
        assert!(!cursor.is_at_end());
        assert_eq!(cursor.next_char(), None);
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
        cursor.advance();
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("a;\nbc;");
        for _ in 0..3 {
            cursor.advance();
        }
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.mark().column, 1);
        cursor.advance();
        assert_eq!(cursor.mark().column, 2);
    }

    #[test]
    fn test_mark_and_slice() {
        let mut cursor = Cursor::new("print y;");
        let mark = cursor.mark();
        for _ in 0..5 {
            cursor.advance();
        }
        assert_eq!(cursor.slice(mark.position, cursor.position()), "print");
        assert_eq!(mark.span_to(cursor.position()), Span::new(0, 5, 1, 1));
        assert_eq!(cursor.remaining(), " y;");
    }

    #[test]
    fn test_current_span_multibyte() {
        let mut cursor = Cursor::new("xé");
        cursor.advance();
        assert_eq!(cursor.current_span(), Span::new(1, 3, 1, 2));
    }
}
