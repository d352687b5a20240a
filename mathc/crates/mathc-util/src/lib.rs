//! mathc-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the mathc front end: source locations and
//! diagnostic reporting. Every phase crate depends on this one; it depends on
//! nothing but `thiserror`.
//!
//! # Module Structure
//!
//! - [`span`] - Byte/line/column spans and the [`SourceFile`] line index
//! - [`diagnostic`] - Diagnostic levels, codes, builder and snippet rendering
//! - [`error`] - Error types for source lookups
//!
//! # Example
//!
//! ```
//! use mathc_util::{DiagnosticBuilder, DiagnosticCode, SourceFile, Span};
//!
//! let file = SourceFile::new("main.math", "print y");
//! let span = Span::new(6, 7, 1, 7);
//!
//! let diag = DiagnosticBuilder::error("Invalid end of statement")
//!     .code(DiagnosticCode::E_LEXER_MISSING_TERMINATOR)
//!     .span(span)
//!     .build();
//!
//! let rendered = diag.render(&file);
//! assert!(rendered.starts_with("error[E1001]: Invalid end of statement"));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Level, SourceSnippet};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, Span};
