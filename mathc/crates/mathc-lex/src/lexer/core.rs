//! Core lexer: the pull interface over pre-split lexemes.

use tracing::debug;

use super::classify::classify;
use super::split::{split, Lexeme};
use crate::error::LexError;
use crate::token::Token;

/// The lexer for math language source code.
///
/// Construction splits the whole source eagerly and may fail. Each call to
/// [`Lexer::next_token`] classifies exactly one lexeme.
///
/// # Example
///
/// ```
/// use mathc_lex::{Lexer, Token};
///
/// let mut lexer = Lexer::new("print y;").unwrap();
///
/// assert_eq!(lexer.next_token(), Ok(Some(Token::Name("print".into()))));
/// assert_eq!(lexer.next_token(), Ok(Some(Token::Name("y".into()))));
/// assert_eq!(lexer.next_token(), Ok(Some(Token::Symbol(';'))));
/// assert_eq!(lexer.next_token(), Ok(None));
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The original source text.
    source: &'a str,

    /// Lexemes in source order, fixed after construction.
    lexemes: Vec<Lexeme<'a>>,

    /// Index of the next unread lexeme.
    current: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer, splitting `source` into lexemes.
    ///
    /// # Errors
    ///
    /// [`LexError::MissingTerminator`] if a line does not end with `;`, and
    /// [`LexError::UnterminatedQuote`] if a quote is still open at the end of
    /// a line.
    pub fn new(source: &'a str) -> Result<Self, LexError> {
        let lexemes = split(source)?;
        debug!(
            lexemes = lexemes.len(),
            bytes = source.len(),
            "split source"
        );

        Ok(Self {
            source,
            lexemes,
            current: 0,
        })
    }

    /// Returns the next token, or `Ok(None)` once every lexeme is consumed.
    ///
    /// The lexeme is consumed even when classification fails; callers are
    /// expected to stop at the first error.
    ///
    /// # Errors
    ///
    /// [`LexError::InvalidToken`] if the lexeme matches no token class.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        let Some(lexeme) = self.lexemes.get(self.current) else {
            return Ok(None);
        };
        self.current += 1;

        classify(lexeme).map(Some)
    }

    /// Number of lexemes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lexemes.len() - self.current
    }

    /// The source text this lexer was built from.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}
