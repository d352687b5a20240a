//! Eager lexeme segmentation.
//!
//! A single left-to-right pass over the source that produces lexemes and
//! validates statement termination as each line boundary is reached. The scan
//! is a two-state machine ([`State::Normal`], [`State::InQuote`]) with a
//! separate pending-span mark for the run of ordinary characters currently
//! being collected.

use mathc_util::Span;
use tracing::trace;

use crate::cursor::{Cursor, Mark};
use crate::error::LexError;
use crate::token::{is_symbol, TERMINATOR};

/// A substring of the source identified as one indivisible unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lexeme<'a> {
    /// The raw text, including quote delimiters for string literals.
    pub text: &'a str,
    /// Where the text sits in the source.
    pub span: Span,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Normal,
    /// Inside a quoted literal opened at the given mark.
    InQuote(Mark),
}

struct Splitter<'a> {
    cursor: Cursor<'a>,
    state: State,
    pending: Option<Mark>,
    lexemes: Vec<Lexeme<'a>>,
}

/// Splits `source` into lexemes.
///
/// Fails with [`LexError::MissingTerminator`] when a line does not end with
/// `;` immediately before its `\n` (or the end of input), and with
/// [`LexError::UnterminatedQuote`] when a line ends inside a quote.
pub fn split(source: &str) -> Result<Vec<Lexeme<'_>>, LexError> {
    Splitter::new(source).run()
}

impl<'a> Splitter<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            state: State::Normal,
            pending: None,
            lexemes: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Lexeme<'a>>, LexError> {
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();

            // A `\n` at the start of input closes an empty first line.
            if c == '\n' && self.cursor.position() == 0 {
                return Err(self.missing_terminator());
            }

            if self.at_line_boundary() {
                if c != TERMINATOR {
                    return Err(self.missing_terminator());
                }
                self.end_statement()?;
                continue;
            }

            match self.state {
                State::Normal => self.step_normal(c),
                State::InQuote(open) => self.step_quote(c, open)?,
            }
        }

        if let State::InQuote(open) = self.state {
            return Err(self.unterminated(open));
        }
        self.flush();

        Ok(self.lexemes)
    }

    /// True when the current character is the last one of its line.
    ///
    /// A `\n` that ends the input opens an empty final line, so it is the last
    /// character of that line and fails the terminator test.
    fn at_line_boundary(&self) -> bool {
        self.cursor.next_char().map_or(true, |next| next == '\n')
    }

    /// Emits the line-ending `;` after checking no quote is left open.
    fn end_statement(&mut self) -> Result<(), LexError> {
        if let State::InQuote(open) = self.state {
            return Err(self.unterminated(open));
        }
        self.flush();
        self.emit_current();
        self.cursor.advance();
        Ok(())
    }

    fn step_normal(&mut self, c: char) {
        if c == '"' {
            self.flush();
            self.state = State::InQuote(self.cursor.mark());
        } else if is_separator(c) {
            self.flush();
        } else if is_symbol(c) {
            self.flush();
            self.emit_current();
        } else if self.pending.is_none() {
            self.pending = Some(self.cursor.mark());
        }
        self.cursor.advance();
    }

    fn step_quote(&mut self, c: char, open: Mark) -> Result<(), LexError> {
        match c {
            '"' => {
                let end = self.cursor.position() + c.len_utf8();
                self.push(open, end);
                self.state = State::Normal;
            }
            '\n' => return Err(self.unterminated(open)),
            _ => {}
        }
        self.cursor.advance();
        Ok(())
    }

    /// Closes the pending span, emitting it if non-empty.
    fn flush(&mut self) {
        if let Some(start) = self.pending.take() {
            self.push(start, self.cursor.position());
        }
    }

    /// Emits the current character as a one-character lexeme.
    fn emit_current(&mut self) {
        let span = self.cursor.current_span();
        self.lexemes.push(Lexeme {
            text: self.cursor.slice(span.start, span.end),
            span,
        });
    }

    fn push(&mut self, start: Mark, end: usize) {
        if end > start.position {
            let text = self.cursor.slice(start.position, end);
            trace!(lexeme = text, line = start.line, column = start.column, "split");
            self.lexemes.push(Lexeme {
                text,
                span: start.span_to(end),
            });
        }
    }

    fn missing_terminator(&self) -> LexError {
        let span = if self.cursor.current_char() == '\n' && self.cursor.position() > 0 {
            // The following line is empty; point at its start.
            let start = self.cursor.position() + 1;
            Span::new(start, start, self.cursor.line() + 1, 1)
        } else {
            self.cursor.current_span()
        };
        LexError::MissingTerminator { span }
    }

    fn unterminated(&self, open: Mark) -> LexError {
        LexError::UnterminatedQuote {
            span: open.span_to(self.cursor.current_span().end),
        }
    }
}

/// Whitespace that separates lexemes.
///
/// Non-breaking spaces and NEL stay inside names; the ASCII information
/// separators `U+001C..=U+001F` split.
pub fn is_separator(c: char) -> bool {
    match c {
        '\u{001C}'..='\u{001F}' => true,
        '\u{0085}' | '\u{00A0}' | '\u{2007}' | '\u{202F}' => false,
        _ => c.is_whitespace(),
    }
}
