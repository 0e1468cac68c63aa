use thiserror::Error;

/// Errors raised by the tokenizer
///
/// Tokenizing never fails on input text; unrecognized lexemes become
/// [`TokenType::Unknown`](super::TokenType::Unknown) tokens. The only error is
/// a token type tag outside the closed enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// A token type tag or name outside `Keyword..=Unknown`
    #[error("Invalid token type: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, TokenError>;
