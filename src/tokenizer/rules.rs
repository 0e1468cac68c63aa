//! Pattern recognizers for literals and identifiers
//!
//! Table lookups live on [`Tables`](super::Tables); the recognizers here match
//! on the shape of the lexeme alone.

use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, opt, recognize},
    sequence::{pair, tuple},
    IResult,
};
use regex::Regex;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

static STRICT_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z a-z_]+\b$").expect("identifier pattern is valid"));

static WORD_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z_0-9]*$").expect("identifier pattern is valid"));

/// Checks if the lexeme is a literal: a quoted string or a number
pub fn is_literal(lexeme: &str) -> bool {
    is_quoted_literal(lexeme) || is_numeric_literal(lexeme)
}

/// Checks if the lexeme starts and ends with the same quote character
///
/// The content between the quotes is not inspected.
pub fn is_quoted_literal(lexeme: &str) -> bool {
    if lexeme.len() < 2 {
        return false;
    }
    let bytes = lexeme.as_bytes();
    let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
    first == last && (first == b'"' || first == b'\'')
}

/// Checks if the whole lexeme is a number like `42`, `-3.`, `+.5` or `0.25`
pub fn is_numeric_literal(lexeme: &str) -> bool {
    all_consuming(number)(lexeme).is_ok()
}

fn number(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
    )))(input)
}

/// How identifiers are recognized
///
/// `Strict` accepts runs of letters, spaces and underscores ending on a word
/// character, and rejects digits. `Word` accepts the usual
/// `[A-Za-z_][A-Za-z_0-9]*` shape, so `column1` is an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierRule {
    Strict,
    #[default]
    Word,
}

impl IdentifierRule {
    /// Checks if the lexeme is an identifier under this rule
    pub fn matches(&self, lexeme: &str) -> bool {
        match self {
            IdentifierRule::Strict => STRICT_IDENTIFIER.is_match(lexeme),
            IdentifierRule::Word => WORD_IDENTIFIER.is_match(lexeme),
        }
    }
}

impl FromStr for IdentifierRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(IdentifierRule::Strict),
            "word" => Ok(IdentifierRule::Word),
            _ => Err(format!("Unknown identifier rule: {}", s)),
        }
    }
}

impl Display for IdentifierRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierRule::Strict => write!(f, "strict"),
            IdentifierRule::Word => write!(f, "word"),
        }
    }
}
