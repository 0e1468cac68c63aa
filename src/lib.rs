//! AH-DB query front end.
//!
//! Currently this is the lexer only: [`tokenizer::tokenize`] turns a SQL query
//! string into classified tokens.

pub mod tokenizer;

pub use tokenizer::{tokenize, Token, TokenType, Tokenizer};
