//! Token definitions for the math language.
//!
//! A [`Token`] is an owned, immutable value. It never borrows from the source
//! text, so token streams can outlive the lexer that produced them.

use std::fmt;

/// The fixed set of single-character symbols, including the statement
/// terminator `;`.
pub const SYMBOLS: [char; 6] = ['-', '+', '=', ';', '*', '/'];

/// The statement terminator.
pub const TERMINATOR: char = ';';

/// Returns true if `c` is one of the operator/terminator symbols.
///
/// # Example
///
/// ```
/// use mathc_lex::token::is_symbol;
///
/// assert!(is_symbol('+'));
/// assert!(is_symbol(';'));
/// assert!(!is_symbol('%'));
/// ```
#[inline]
pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(&c)
}

/// A classified lexical token.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// Identifier starting with an alphabetic character.
    Name(String),
    /// Unsigned numeric literal.
    Number(f64),
    /// Quoted text, delimiters removed.
    StringLiteral(String),
    /// One of [`SYMBOLS`].
    Symbol(char),
}

/// The variant of a [`Token`] without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// [`Token::Name`]
    Name,
    /// [`Token::Number`]
    Number,
    /// [`Token::StringLiteral`]
    StringLiteral,
    /// [`Token::Symbol`]
    Symbol,
}

impl TokenKind {
    /// The variant name as written in token listings.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Name => "Name",
            TokenKind::Number => "Number",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::Symbol => "Symbol",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Token {
    /// Builds a symbol token, or `None` if `c` is not in [`SYMBOLS`].
    ///
    /// # Example
    ///
    /// ```
    /// use mathc_lex::Token;
    ///
    /// assert_eq!(Token::symbol('*'), Some(Token::Symbol('*')));
    /// assert_eq!(Token::symbol('%'), None);
    /// ```
    pub fn symbol(c: char) -> Option<Token> {
        is_symbol(c).then_some(Token::Symbol(c))
    }

    /// Returns the variant of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Name(_) => TokenKind::Name,
            Token::Number(_) => TokenKind::Number,
            Token::StringLiteral(_) => TokenKind::StringLiteral,
            Token::Symbol(_) => TokenKind::Symbol,
        }
    }

    /// Returns true for the statement terminator `;`.
    pub fn is_terminator(&self) -> bool {
        matches!(self, Token::Symbol(TERMINATOR))
    }
}

/// Source-like rendering: `let`, `5`, `"abc"`, `;`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Name(name) => f.write_str(name),
            Token::Number(value) => write!(f, "{}", value),
            Token::StringLiteral(text) => write!(f, "\"{}\"", text),
            Token::Symbol(c) => write!(f, "{}", c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_set() {
        for c in SYMBOLS {
            assert_eq!(Token::symbol(c), Some(Token::Symbol(c)));
        }
        for c in ['%', '(', '.', 'a', '"', ' '] {
            assert_eq!(Token::symbol(c), None);
        }
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Token::Name("x".to_string()), Token::Name(String::from("x")));
        assert_eq!(Token::Number(5.0), Token::Number(5.0));
        assert_ne!(Token::Name("x".into()), Token::StringLiteral("x".into()));
    }

    #[test]
    fn test_kind() {
        assert_eq!(Token::Name("let".into()).kind(), TokenKind::Name);
        assert_eq!(Token::Number(1.5).kind(), TokenKind::Number);
        assert_eq!(Token::StringLiteral("".into()).kind(), TokenKind::StringLiteral);
        assert_eq!(Token::Symbol(';').kind(), TokenKind::Symbol);
        assert_eq!(TokenKind::StringLiteral.to_string(), "StringLiteral");
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Name("print".into()).to_string(), "print");
        assert_eq!(Token::Number(5.0).to_string(), "5");
        assert_eq!(Token::Number(2.25).to_string(), "2.25");
        assert_eq!(Token::StringLiteral("a b".into()).to_string(), "\"a b\"");
        assert_eq!(Token::Symbol('-').to_string(), "-");
    }

    #[test]
    fn test_is_terminator() {
        assert!(Token::Symbol(';').is_terminator());
        assert!(!Token::Symbol('+').is_terminator());
        assert!(!Token::Name(";".into()).is_terminator());
    }
}
