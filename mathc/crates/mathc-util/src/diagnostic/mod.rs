//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, formatting, and reporting
//! front-end diagnostics (errors, warnings, notes, and help messages).
//!
//! # Examples
//!
//! ```
//! use mathc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
//! use mathc_util::Span;
//!
//! let diag = DiagnosticBuilder::error("Invalid end of statement")
//!     .code(DiagnosticCode::E_LEXER_MISSING_TERMINATOR)
//!     .span(Span::new(6, 7, 1, 7))
//!     .help("end the statement with `;`")
//!     .build();
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::span::{SourceFile, Span};
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use mathc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Help), "help");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that stops the pipeline
    Error,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Text shown after the caret underline
    pub label: Option<String>,
}

impl Diagnostic {
    /// Header line: `error[E1001]: message`
    pub fn header(&self) -> String {
        match self.code {
            Some(code) => format!("{}[{}]: {}", self.level, code, self.message),
            None => format!("{}: {}", self.level, self.message),
        }
    }

    /// Build the caret snippet for the primary span, if it points into `file`.
    ///
    /// The underline covers the characters of the span on its first line;
    /// empty or unknown ranges get a single caret at the span column.
    pub fn primary_snippet(&self, file: &SourceFile) -> Option<SourceSnippet> {
        if self.span.line == 0 {
            return None;
        }
        let line = file.line_at(self.span.line as usize).ok()?;
        let start_column = self.span.column as usize;
        let width = file
            .extract_range(self.span.start, self.span.end)
            .map(|text| text.lines().next().unwrap_or("").chars().count())
            .unwrap_or(0);

        Some(SourceSnippet::new(
            line,
            self.span.line as usize,
            start_column,
            start_column + width.max(1),
            self.label.clone(),
        ))
    }

    /// Render the diagnostic against its source file.
    ///
    /// ```text
    /// error[E1001]: Invalid end of statement
    ///   --> main.math:1:7
    ///   1 | print y
    ///     |       ^ expected `;`
    /// ```
    pub fn render(&self, file: &SourceFile) -> String {
        let mut out = self.header();

        if self.span.line > 0 {
            out.push_str(&format!("\n  --> {}:{}", file.name(), self.span));
        }
        if let Some(snippet) = self.primary_snippet(file) {
            out.push('\n');
            out.push_str(&snippet.format());
        }
        for note in &self.notes {
            out.push_str(&format!("\n  = {}: {}", Level::Note, note));
        }
        for help in &self.helps {
            out.push_str(&format!("\n  = {}: {}", Level::Help, help));
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(message: &str, span: Span) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Note), "note");
        assert_eq!(format!("{}", Level::Help), "help");
    }

    #[test]
    fn test_header_with_and_without_code() {
        let plain = error("Invalid input.", Span::DUMMY).build();
        assert_eq!(plain.header(), "error: Invalid input.");

        let coded = error("Invalid input.", Span::DUMMY)
            .code(DiagnosticCode::E_LEXER_INVALID_TOKEN)
            .build();
        assert_eq!(coded.header(), "error[E1003]: Invalid input.");
        assert_eq!(coded.to_string(), "error[E1003]: Invalid input.");
    }

    #[test]
    fn test_render_points_at_span() {
        let file = SourceFile::new("main.math", "let x = 5;\nprint y");
        let diag = error("Invalid end of statement", Span::new(17, 18, 2, 7))
            .code(DiagnosticCode::E_LEXER_MISSING_TERMINATOR)
            .label("expected `;`")
            .help("end the statement with `;`")
            .build();

        let rendered = diag.render(&file);
        let expected = "error[E1001]: Invalid end of statement\n  \
                        --> main.math:2:7\n  \
                        2 | print y\n    \
                        |       ^ expected `;`\n  \
                        = help: end the statement with `;`";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_orders_notes_before_help() {
        let file = SourceFile::new("main.math", "x");
        let diag = error("Invalid end of statement", Span::new(0, 1, 1, 1))
            .help("h")
            .note("n")
            .build();

        let rendered = diag.render(&file);
        assert!(rendered.ends_with("    | ^\n  = note: n\n  = help: h"));
    }

    #[test]
    fn test_render_underlines_whole_lexeme() {
        let file = SourceFile::new("main.math", "let x = 5.0.1;");
        let diag = error("Invalid input.", Span::new(8, 13, 1, 9)).build();
        let snippet = diag.primary_snippet(&file).unwrap();
        assert_eq!(snippet.start_column, 9);
        assert_eq!(snippet.end_column, 14);
        assert_eq!(snippet.label, None);
    }

    #[test]
    fn test_render_without_location() {
        let file = SourceFile::new("main.math", "");
        let diag = error("Invalid input.", Span::DUMMY).build();
        assert_eq!(diag.render(&file), "error: Invalid input.");
    }
}
