//! Lexer error types.
//!
//! Every failure aborts token production. Splitting failures surface from
//! [`Lexer::new`](crate::Lexer::new); classification failures surface from
//! [`Lexer::next_token`](crate::Lexer::next_token).

use mathc_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Span};
use thiserror::Error;

/// Message for statement terminator violations.
pub const MSG_END_OF_STATEMENT: &str = "Invalid end of statement";

/// Message for unterminated quotes and unclassifiable lexemes.
pub const MSG_INVALID_INPUT: &str = "Invalid input.";

/// A lexing failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A line does not end with `;` right before its line break or the end
    /// of input. The span points at the offending character.
    #[error("Invalid end of statement")]
    MissingTerminator {
        /// Location of the character found where `;` was required.
        span: Span,
    },

    /// A `"` was opened and the line ended before it was closed.
    #[error("Invalid input.")]
    UnterminatedQuote {
        /// From the opening quote up to where the line ended.
        span: Span,
    },

    /// A lexeme matched none of the classification rules.
    #[error("Invalid input.")]
    InvalidToken {
        /// The rejected lexeme text.
        lexeme: String,
        /// Location of the lexeme.
        span: Span,
    },
}

/// Error kinds, independent of payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`LexError::MissingTerminator`].
    MissingTerminator,
    /// See [`LexError::UnterminatedQuote`].
    UnterminatedQuote,
    /// See [`LexError::InvalidToken`].
    UnclassifiableLexeme,
}

impl LexError {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LexError::MissingTerminator { .. } => ErrorKind::MissingTerminator,
            LexError::UnterminatedQuote { .. } => ErrorKind::UnterminatedQuote,
            LexError::InvalidToken { .. } => ErrorKind::UnclassifiableLexeme,
        }
    }

    /// Where the error occurred.
    pub fn span(&self) -> Span {
        match self {
            LexError::MissingTerminator { span }
            | LexError::UnterminatedQuote { span }
            | LexError::InvalidToken { span, .. } => *span,
        }
    }

    /// True for failures raised while splitting (at construction), false for
    /// classification failures.
    pub fn is_syntax_error(&self) -> bool {
        !matches!(self, LexError::InvalidToken { .. })
    }

    /// Stable diagnostic code.
    pub fn code(&self) -> DiagnosticCode {
        match self.kind() {
            ErrorKind::MissingTerminator => DiagnosticCode::E_LEXER_MISSING_TERMINATOR,
            ErrorKind::UnterminatedQuote => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            ErrorKind::UnclassifiableLexeme => DiagnosticCode::E_LEXER_INVALID_TOKEN,
        }
    }

    /// Converts the error into a renderable diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// use mathc_lex::Lexer;
    /// use mathc_util::SourceFile;
    ///
    /// let err = Lexer::new("print y").unwrap_err();
    /// let file = SourceFile::new("main.math", "print y");
    /// let rendered = err.to_diagnostic().render(&file);
    /// assert!(rendered.starts_with("error[E1001]: Invalid end of statement"));
    /// assert!(rendered.contains("main.math:1:7"));
    /// ```
    pub fn to_diagnostic(&self) -> Diagnostic {
        let builder = DiagnosticBuilder::error(self.to_string())
            .code(self.code())
            .span(self.span());

        let builder = match self {
            LexError::MissingTerminator { .. } => builder
                .label("expected `;`")
                .note("every line must end with `;` immediately before the line break")
                .help("end the statement with `;`"),
            LexError::UnterminatedQuote { .. } => builder
                .label("string opened here")
                .note("string literals cannot span lines")
                .help("close the string with `\"`"),
            LexError::InvalidToken { lexeme, .. } => builder
                .label("invalid token")
                .note(format!(
                    "`{}` is not a name, number, string, or symbol",
                    lexeme
                )),
        };

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let span = Span::new(0, 1, 1, 1);
        assert_eq!(
            LexError::MissingTerminator { span }.to_string(),
            MSG_END_OF_STATEMENT
        );
        assert_eq!(
            LexError::UnterminatedQuote { span }.to_string(),
            MSG_INVALID_INPUT
        );
        assert_eq!(
            LexError::InvalidToken {
                lexeme: "5.0.1".into(),
                span
            }
            .to_string(),
            MSG_INVALID_INPUT
        );
    }

    #[test]
    fn test_kind_and_phase() {
        let span = Span::DUMMY;
        let missing = LexError::MissingTerminator { span };
        let quote = LexError::UnterminatedQuote { span };
        let token = LexError::InvalidToken {
            lexeme: ".".into(),
            span,
        };

        assert_eq!(missing.kind(), ErrorKind::MissingTerminator);
        assert_eq!(quote.kind(), ErrorKind::UnterminatedQuote);
        assert_eq!(token.kind(), ErrorKind::UnclassifiableLexeme);

        assert!(missing.is_syntax_error());
        assert!(quote.is_syntax_error());
        assert!(!token.is_syntax_error());
    }

    #[test]
    fn test_codes() {
        let span = Span::DUMMY;
        assert_eq!(
            LexError::MissingTerminator { span }.code().as_str(),
            "E1001"
        );
        assert_eq!(
            LexError::UnterminatedQuote { span }.code().as_str(),
            "E1002"
        );
        assert_eq!(
            LexError::InvalidToken {
                lexeme: "?".into(),
                span
            }
            .code()
            .as_str(),
            "E1003"
        );
    }

    #[test]
    fn test_to_diagnostic_carries_span_and_lexeme() {
        let span = Span::new(8, 13, 1, 9);
        let diag = LexError::InvalidToken {
            lexeme: "5.0.1".into(),
            span,
        }
        .to_diagnostic();

        assert_eq!(diag.span, span);
        assert_eq!(diag.message, MSG_INVALID_INPUT);
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_INVALID_TOKEN));
        assert!(diag.notes[0].contains("`5.0.1`"));
        assert_eq!(diag.label.as_deref(), Some("invalid token"));
    }
}
