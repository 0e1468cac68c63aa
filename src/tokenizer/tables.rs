//! Keyword and Symbol Tables
//!
//! Read-only word lists consulted by the classifier:
//!
//! - single-word keywords (`SELECT`, `FROM`, ...), matched case-sensitively
//! - two-word keywords, as a map from the first word to the words that may follow it
//! - punctuation marks, including quote characters and comment delimiters
//! - operator symbols
//!
//! A [`Tables`] value is built once and then shared behind an `Arc`; nothing
//! mutates it afterwards.

use std::collections::{HashMap, HashSet};

const SINGLE_WORD_KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "INSERT", "UPDATE", "DELETE", "CREATE", "ALTER", "DROP", "TABLE",
    "JOIN", "HAVING", "DISTINCT", "UNION", "ALL", "AS", "AND", "OR", "NOT", "NULL", "IS", "LIKE",
    "IN", "INTO", "BETWEEN", "EXISTS", "CASE", "WHEN", "THEN", "ELSE", "END", "LIMIT", "OFFSET",
    "SET", "VALUES", "RETURNING", "WITH", "CTE", "ROW_NUMBER", "OVER", "INDEX", "VIEW", "TRIGGER",
    "PROCEDURE", "FUNCTION", "USER", "GRANT", "REVOKE", "COMMIT", "ROLLBACK", "TRANSACTION",
];

const TWO_WORDS_KEYWORDS: &[(&str, &[&str])] = &[
    ("GROUP", &["BY"]),
    ("ORDER", &["BY"]),
    ("PARTITION", &["BY"]),
    ("INNER", &["JOIN"]),
    ("LEFT", &["JOIN"]),
    ("RIGHT", &["JOIN"]),
    ("FULL", &["JOIN"]),
    ("NATURAL", &["JOIN"]),
];

const PUNCTUATION: &[&str] = &[",", ";", ".", "(", ")", "'", "\"", "`", "[", "]", "/*", "*/"];

const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "+=", "-=", "*=", "/=", "=", "!=", "<", ">", "<=", ">=",
];

/// The word lists used to classify lexemes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tables {
    single_word_keywords: HashSet<String>,
    two_words_keywords: HashMap<String, HashSet<String>>,
    punctuation: HashSet<String>,
    operators: HashSet<String>,
}

impl Tables {
    /// Returns the standard SQL tables
    pub fn sql() -> Self {
        let mut tables = Self::default()
            .with_keywords(SINGLE_WORD_KEYWORDS.iter().copied())
            .with_punctuation(PUNCTUATION.iter().copied())
            .with_operators(OPERATORS.iter().copied());
        for (first, seconds) in TWO_WORDS_KEYWORDS {
            tables = tables.with_two_words_keyword(*first, seconds.iter().copied());
        }
        tables
    }

    /// Adds single-word keywords
    pub fn with_keywords<'a>(mut self, words: impl IntoIterator<Item = &'a str>) -> Self {
        self.single_word_keywords
            .extend(words.into_iter().map(str::to_string));
        self
    }

    /// Adds the words that may follow `first` to form a two-word keyword
    pub fn with_two_words_keyword<'a>(
        mut self,
        first: &str,
        seconds: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        self.two_words_keywords
            .entry(first.to_string())
            .or_default()
            .extend(seconds.into_iter().map(str::to_string));
        self
    }

    pub fn with_punctuation<'a>(mut self, marks: impl IntoIterator<Item = &'a str>) -> Self {
        self.punctuation
            .extend(marks.into_iter().map(str::to_string));
        self
    }

    pub fn with_operators<'a>(mut self, symbols: impl IntoIterator<Item = &'a str>) -> Self {
        self.operators
            .extend(symbols.into_iter().map(str::to_string));
        self
    }

    /// Checks if the word is a single-word keyword
    pub fn is_single_word_keyword(&self, word: &str) -> bool {
        self.single_word_keywords.contains(word)
    }

    /// Checks if the word may start a two-word keyword
    pub fn is_start_of_two_words_keyword(&self, word: &str) -> bool {
        self.two_words_keywords.contains_key(word)
    }

    /// Checks if the two words together form a two-word keyword
    pub fn is_two_words_keyword(&self, first: &str, second: &str) -> bool {
        self.two_words_keywords
            .get(first)
            .is_some_and(|seconds| seconds.contains(second))
    }

    pub fn is_punctuation(&self, mark: &str) -> bool {
        self.punctuation.contains(mark)
    }

    pub fn is_operator(&self, symbol: &str) -> bool {
        self.operators.contains(symbol)
    }
}
