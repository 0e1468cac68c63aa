//! Query Segmentation
//!
//! Splits a raw query into candidate lexemes before classification. A single
//! pattern is matched left to right; its alternatives, in priority order, are:
//!
//! 1. a double-quoted string, backslash escapes allowed inside
//! 2. a single-quoted string, backslash escapes allowed inside
//! 3. an identifier-shaped word `[A-Za-z_][A-Za-z_0-9]*`
//! 4. a number with an optional fractional part
//! 5. one of `*` `=` `,` `;` `(` `)`
//! 6. a run of whitespace (dropped)
//! 7. any other single character
//!
//! # Unterminated quotes
//!
//! A quote character that does not open a complete quoted string is matched
//! on its own. When that happens every remaining non-blank lexeme is folded
//! into one trailing lexeme (`'` immediately followed by the rest, joined by
//! single spaces) and segmentation stops there.
//!
//! ```
//! use ahdb::tokenizer::segment;
//!
//! assert_eq!(segment("a = 'it is"), vec!["a", "=", "'it is"]);
//! ```

use itertools::Itertools;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::debug;

static SEGMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'|[A-Za-z_][A-Za-z_0-9]*|[0-9]+(?:\.[0-9]*)?|[*=,;()]|\s+|(?s:.)"#,
    )
    .expect("segment pattern is valid")
});

/// A candidate lexeme: borrowed from the query, or owned when aggregated
pub type Lexeme<'a> = Cow<'a, str>;

/// Splits the query into candidate lexemes, dropping whitespace
pub fn segment(query: &str) -> Vec<Lexeme<'_>> {
    let mut lexemes = Vec::new();
    let mut matches = SEGMENT_PATTERN
        .find_iter(query)
        .map(|m| m.as_str())
        .filter(|span| !is_blank(span));

    while let Some(span) = matches.next() {
        if is_bare_quote(span) {
            let rest = matches.join(" ");
            debug!(
                "Unterminated {} at lexeme {}, folding remainder ({} bytes)",
                span,
                lexemes.len(),
                rest.len()
            );
            lexemes.push(Cow::Owned(format!("{}{}", span, rest)));
            return lexemes;
        }
        lexemes.push(Cow::Borrowed(span));
    }

    lexemes
}

fn is_blank(span: &str) -> bool {
    span.chars().all(char::is_whitespace)
}

fn is_bare_quote(span: &str) -> bool {
    span == "\"" || span == "'"
}
