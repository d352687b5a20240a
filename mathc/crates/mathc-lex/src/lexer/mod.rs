//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and the pull interface
//! - `split` - Eager lexeme segmentation and statement validation
//! - `classify` - Ordered lexeme classification rules

mod classify;
mod core;
mod split;

pub use core::Lexer;
pub use split::Lexeme;
