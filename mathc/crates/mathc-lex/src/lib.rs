//! mathc-lex - Lexical Analyzer for the math language
//!
//! This crate turns source text into a flat sequence of typed tokens: names,
//! numbers, quoted strings, and single-character symbols. Every source line
//! is one statement and must end with `;`.
//!
//! # Overview
//!
//! Lexing runs in two passes. Construction splits the whole source into
//! lexemes and validates statement termination. Each call to
//! [`Lexer::next_token`] then classifies one lexeme into a [`Token`].
//!
//! # Example Usage
//!
//! ```
//! use mathc_lex::{Lexer, Token};
//!
//! let mut lexer = Lexer::new("let x = 5;").unwrap();
//!
//! // Get tokens one at a time
//! assert_eq!(lexer.next_token(), Ok(Some(Token::Name("let".into()))));
//!
//! // Or iterate over the rest
//! for token in lexer {
//!     println!("{}", token.unwrap());
//! }
//!
//! // Or collect everything at once
//! let tokens = mathc_lex::tokenize("print y;").unwrap();
//! assert_eq!(tokens.len(), 3);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Splitter, classifier and the `Lexer` itself
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Lexer errors and their diagnostics
//!
//! # Token Categories
//!
//! - **Name**: starts with an alphabetic character, e.g. `let`, `x1`
//! - **Number**: digits with at most one `.`, e.g. `5`, `2.5`; never signed
//! - **String**: `"hello world"`, delimiters stripped, no escapes
//! - **Symbol**: `-`, `+`, `=`, `;`, `*`, `/`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{ErrorKind, LexError};
pub use lexer::{Lexeme, Lexer};
pub use token::{is_symbol, Token, TokenKind, SYMBOLS};

/// Tokenizes `source` completely, stopping at the first error.
///
/// # Example
///
/// ```
/// use mathc_lex::{tokenize, LexError, Token};
///
/// assert_eq!(
///     tokenize("x = -3;").unwrap(),
///     vec![
///         Token::Name("x".into()),
///         Token::Symbol('='),
///         Token::Symbol('-'),
///         Token::Number(3.0),
///         Token::Symbol(';'),
///     ]
/// );
/// assert!(matches!(tokenize("x = 3"), Err(LexError::MissingTerminator { .. })));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source)?.collect()
}
