//! Edge case tests for mathc-lex
