use super::error::{Result, TokenError};
use std::fmt::Display;
use std::str::FromStr;

/// Represents the different kinds of SQL tokens
///
/// The discriminants are contiguous, from [`TokenType::MIN`] to
/// [`TokenType::MAX`]; raw tags outside that range are rejected.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum TokenType {
    /// Keywords in SQL (SELECT, FROM, GROUP BY, etc)
    Keyword = 0,
    /// Identifiers like table names, column names
    Identifier = 1,
    /// Quoted strings and numbers
    Literal = 2,
    /// Arithmetic, comparison and assignment symbols
    Operator = 3,
    /// Separators, brackets, quote marks and comment delimiters
    Punctuation = 4,
    Comment = 5,
    Whitespace = 6,
    /// Anything no recognizer rule accepted
    Unknown = 7,
}

impl TokenType {
    pub const MIN: TokenType = TokenType::Keyword;
    pub const MAX: TokenType = TokenType::Unknown;

    /// All token types in discriminant order
    pub const ALL: [TokenType; 8] = [
        TokenType::Keyword,
        TokenType::Identifier,
        TokenType::Literal,
        TokenType::Operator,
        TokenType::Punctuation,
        TokenType::Comment,
        TokenType::Whitespace,
        TokenType::Unknown,
    ];

    /// Returns the display name of the token type
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Keyword => "Keyword",
            TokenType::Identifier => "Identifier",
            TokenType::Literal => "Literal",
            TokenType::Operator => "Operator",
            TokenType::Punctuation => "Punctuation",
            TokenType::Comment => "Comment",
            TokenType::Whitespace => "Whitespace",
            TokenType::Unknown => "Unknown",
        }
    }
}

impl TryFrom<u8> for TokenType {
    type Error = TokenError;

    fn try_from(tag: u8) -> Result<Self> {
        if !(TokenType::MIN as u8..=TokenType::MAX as u8).contains(&tag) {
            return Err(TokenError::InvalidArgument(format!("tag {}", tag)));
        }
        Ok(TokenType::ALL[tag as usize])
    }
}

impl FromStr for TokenType {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        TokenType::ALL
            .iter()
            .copied()
            .find(|token_type| token_type.name() == s)
            .ok_or_else(|| TokenError::InvalidArgument(format!("name {:?}", s)))
    }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A classified lexical unit: a type tag plus its exact source text
///
/// Two-word keywords carry both words joined by a single space, e.g.
/// `"GROUP BY"`.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Token {
    token_type: TokenType,
    value: String,
}

impl Default for Token {
    fn default() -> Self {
        Self {
            token_type: TokenType::Unknown,
            value: String::new(),
        }
    }
}

impl Token {
    pub fn new(token_type: TokenType, value: impl Into<String>) -> Self {
        Self {
            token_type,
            value: value.into(),
        }
    }

    /// Builds a token from a raw type tag, rejecting tags outside the enumeration
    pub fn from_raw(tag: u8, value: impl Into<String>) -> Result<Self> {
        Ok(Self::new(TokenType::try_from(tag)?, value))
    }

    /// Returns the token type
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Returns the source text of the token
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_type(&mut self, token_type: TokenType) {
        self.token_type = token_type;
    }

    /// Retags the token from a raw type tag
    ///
    /// On error the token is left unchanged.
    pub fn set_raw_type(&mut self, tag: u8) -> Result<()> {
        self.token_type = TokenType::try_from(tag)?;
        Ok(())
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Consumes the token, returning its source text
    pub fn into_value(self) -> String {
        self.value
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.token_type, self.value)
    }
}
