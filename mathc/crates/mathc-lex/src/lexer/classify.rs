//! Lexeme classification.
//!
//! Classification is a stateless function of one lexeme. The rules are tried
//! in table order and the first whose predicate matches builds the token.

use tracing::{debug, trace};

use super::split::Lexeme;
use crate::error::LexError;
use crate::token::{is_symbol, Token};

/// One classification rule.
pub(crate) struct Rule {
    pub(crate) name: &'static str,
    pub(crate) matches: fn(&str) -> bool,
    pub(crate) build: fn(&str) -> Option<Token>,
}

/// Rules in priority order: quote, number, symbol, name.
pub(crate) static RULES: [Rule; 4] = [
    Rule {
        name: "string",
        matches: is_quoted,
        build: build_string,
    },
    Rule {
        name: "number",
        matches: is_number,
        build: build_number,
    },
    Rule {
        name: "symbol",
        matches: is_single_symbol,
        build: build_symbol,
    },
    Rule {
        name: "name",
        matches: is_name,
        build: build_name,
    },
];

/// Classifies a lexeme, failing with [`LexError::InvalidToken`] when no rule
/// matches.
pub(crate) fn classify(lexeme: &Lexeme<'_>) -> Result<Token, LexError> {
    RULES
        .iter()
        .find(|rule| (rule.matches)(lexeme.text))
        .and_then(|rule| {
            trace!(rule = rule.name, lexeme = lexeme.text, "classify");
            (rule.build)(lexeme.text)
        })
        .ok_or_else(|| {
            debug!(lexeme = lexeme.text, span = %lexeme.span, "unclassifiable lexeme");
            LexError::InvalidToken {
                lexeme: lexeme.text.to_string(),
                span: lexeme.span,
            }
        })
}

fn is_quoted(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('"') && text.ends_with('"')
}

fn build_string(text: &str) -> Option<Token> {
    Some(Token::StringLiteral(text[1..text.len() - 1].to_string()))
}

/// Digits with at most one `.`, and at least one digit.
fn is_number(text: &str) -> bool {
    let mut dots = 0;
    let mut digits = 0;
    for c in text.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

fn build_number(text: &str) -> Option<Token> {
    text.parse::<f64>().ok().map(Token::Number)
}

fn is_single_symbol(text: &str) -> bool {
    let mut chars = text.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if is_symbol(c))
}

fn build_symbol(text: &str) -> Option<Token> {
    text.chars().next().and_then(Token::symbol)
}

fn is_name(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_alphabetic)
}

fn build_name(text: &str) -> Option<Token> {
    Some(Token::Name(text.to_string()))
}
