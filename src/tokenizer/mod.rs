//! SQL Tokenizer
//!
//! Turns a query string into an ordered list of [`Token`]s. It follows a
//! two-step process:
//! 1. Segmentation: split the query into candidate lexemes ([`segment`])
//! 2. Classification: assign each lexeme a [`TokenType`] ([`Classifier`])
//!
//! No grammar is checked. Any input tokenizes; lexemes nothing recognizes come
//! back as [`TokenType::Unknown`] tokens.
//!
//! # Example
//! ```
//! use ahdb::tokenizer::{tokenize, Token, TokenType};
//!
//! let tokens = tokenize("SELECT * FROM table;");
//! assert_eq!(tokens[0], Token::new(TokenType::Keyword, "SELECT"));
//! assert_eq!(tokens[3], Token::new(TokenType::Identifier, "table"));
//! ```

pub mod classifier;
pub mod error;
pub mod rules;
pub mod segmenter;
pub mod tables;
pub mod token;

pub use classifier::{Classifier, Rule};
pub use error::{Result, TokenError};
pub use rules::{is_literal, is_numeric_literal, is_quoted_literal, IdentifierRule};
pub use segmenter::{segment, Lexeme};
pub use tables::Tables;
pub use token::{Token, TokenType};

use std::sync::{Arc, LazyLock};
use tracing::debug;

static DEFAULT_TOKENIZER: LazyLock<Tokenizer> = LazyLock::new(Tokenizer::default);

/// Settings a [`Tokenizer`] is built from
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Keyword, punctuation and operator tables
    pub tables: Arc<Tables>,
    /// How identifiers are recognized
    pub identifier_rule: IdentifierRule,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            tables: Arc::new(Tables::sql()),
            identifier_rule: IdentifierRule::default(),
        }
    }
}

/// Drives segmentation then classification
///
/// Holds no mutable state, so one tokenizer can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    classifier: Classifier,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            classifier: Classifier::new(config.tables, config.identifier_rule),
        }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Tokenizes a query
    pub fn tokenize(&self, query: &str) -> Vec<Token> {
        let lexemes = segment(query);
        let tokens = self.classifier.classify(&lexemes);
        debug!(
            "Tokenized {} bytes into {} lexemes, {} tokens",
            query.len(),
            lexemes.len(),
            tokens.len()
        );
        tokens
    }
}

/// Tokenizes a query with the standard SQL tables and [`IdentifierRule::Word`]
pub fn tokenize(query: &str) -> Vec<Token> {
    DEFAULT_TOKENIZER.tokenize(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn token(token_type: TokenType, value: &str) -> Token {
        Token::new(token_type, value)
    }

    #[test]
    fn test_tokenize_select() {
        use TokenType::*;
        assert_eq!(
            tokenize("SELECT * FROM table;"),
            vec![
                token(Keyword, "SELECT"),
                token(Operator, "*"),
                token(Keyword, "FROM"),
                token(Identifier, "table"),
                token(Punctuation, ";"),
            ]
        );
    }

    #[test]
    fn test_tokenize_insert() {
        use TokenType::*;
        assert_eq!(
            tokenize("INSERT INTO table (column1) VALUES (value1);"),
            vec![
                token(Keyword, "INSERT"),
                token(Keyword, "INTO"),
                token(Identifier, "table"),
                token(Punctuation, "("),
                token(Identifier, "column1"),
                token(Punctuation, ")"),
                token(Keyword, "VALUES"),
                token(Punctuation, "("),
                token(Identifier, "value1"),
                token(Punctuation, ")"),
                token(Punctuation, ";"),
            ]
        );
    }

    #[test]
    fn test_tokenize_delete() {
        use TokenType::*;
        assert_eq!(
            tokenize("DELETE FROM table WHERE column1 = 'value1';"),
            vec![
                token(Keyword, "DELETE"),
                token(Keyword, "FROM"),
                token(Identifier, "table"),
                token(Keyword, "WHERE"),
                token(Identifier, "column1"),
                token(Operator, "="),
                token(Literal, "'value1'"),
                token(Punctuation, ";"),
            ]
        );
    }

    #[test]
    fn test_two_words_keywords_are_greedy() {
        use TokenType::*;
        assert_eq!(
            tokenize("INNER JOIN"),
            vec![token(Keyword, "INNER JOIN")]
        );
        assert_eq!(
            tokenize("SELECT a FROM t\nGROUP   BY a ORDER BY b"),
            vec![
                token(Keyword, "SELECT"),
                token(Identifier, "a"),
                token(Keyword, "FROM"),
                token(Identifier, "t"),
                token(Keyword, "GROUP BY"),
                token(Identifier, "a"),
                token(Keyword, "ORDER BY"),
                token(Identifier, "b"),
            ]
        );
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let tokens = tokenize("select FROM");
        assert_eq!(tokens[0].token_type(), TokenType::Identifier);
        assert_eq!(tokens[1].token_type(), TokenType::Keyword);
    }

    #[test]
    fn test_unterminated_quote_cuts_off_the_rest() {
        use TokenType::*;
        assert_eq!(
            tokenize("UPDATE t SET name = 'abc WHERE id = 1;"),
            vec![
                token(Keyword, "UPDATE"),
                token(Identifier, "t"),
                token(Keyword, "SET"),
                token(Identifier, "name"),
                token(Operator, "="),
                token(Unknown, "'abc WHERE id = 1 ;"),
            ]
        );
        // Escaped closing quote: the fold happens to end on a quote again
        assert_eq!(tokenize(r"x = 'a \'")[2], token(Literal, r"'a \ '"));
        assert_eq!(
            tokenize("x = \"abc"),
            vec![token(Identifier, "x"), token(Operator, "="), token(Unknown, "\"abc")]
        );
        assert_eq!(
            tokenize("x = \"abc 'd'\n;").last(),
            Some(&token(Unknown, "\"abc 'd' ;"))
        );
    }

    #[test]
    fn test_numbers_and_symbols() {
        use TokenType::*;
        assert_eq!(
            tokenize("price >= 10.5 AND qty != 3 /* c */"),
            vec![
                token(Identifier, "price"),
                token(Operator, ">"),
                token(Operator, "="),
                token(Literal, "10.5"),
                token(Keyword, "AND"),
                token(Identifier, "qty"),
                token(Unknown, "!"),
                token(Operator, "="),
                token(Literal, "3"),
                token(Operator, "/"),
                token(Operator, "*"),
                token(Identifier, "c"),
                token(Operator, "*"),
                token(Operator, "/"),
            ]
        );
    }

    #[test]
    fn test_empty_and_blank_queries() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_garbage_never_fails() {
        let queries = ["@@@", "\u{0}\u{7f}", "🦀 SELECT", "'", "\"\"\"", "((((", "1.2.3.4"];
        for query in queries {
            let tokens = tokenize(query);
            assert!(!tokens.is_empty(), "{:?}", query);
            for token in &tokens {
                assert!(!token.value().trim().is_empty(), "{:?}", query);
            }
        }
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        let query = "SELECT a, b FROM t LEFT JOIN u ON t.id = u.id WHERE x LIKE 'y%'";
        assert_eq!(tokenize(query), tokenize(query));
    }

    #[test]
    fn test_single_word_keywords_always_win() {
        let tokenizer = Tokenizer::default();
        let tables = tokenizer.classifier().tables();
        for word in ["SELECT", "FROM", "WHERE", "JOIN", "ROW_NUMBER", "NULL"] {
            assert!(tables.is_single_word_keyword(word));
            assert_eq!(
                tokenizer.tokenize(word),
                vec![token(TokenType::Keyword, word)]
            );
        }
    }

    #[test]
    fn test_strict_identifier_config() {
        let tokenizer = Tokenizer::new(TokenizerConfig {
            identifier_rule: IdentifierRule::Strict,
            ..TokenizerConfig::default()
        });
        let tokens = tokenizer.tokenize("SELECT name, col1 FROM users");
        assert_eq!(tokens[1], token(TokenType::Identifier, "name"));
        assert_eq!(tokens[3], token(TokenType::Unknown, "col1"));
        assert_eq!(tokens[5], token(TokenType::Identifier, "users"));
    }

    #[test]
    fn test_custom_tables() {
        let tables = Tables::default()
            .with_keywords(["MATCH", "RETURN"])
            .with_punctuation(["(", ")", ":"]);
        let tokenizer = Tokenizer::new(TokenizerConfig {
            tables: Arc::new(tables),
            identifier_rule: IdentifierRule::Word,
        });
        let types: Vec<TokenType> = tokenizer
            .tokenize("MATCH (n) RETURN n")
            .iter()
            .map(Token::token_type)
            .collect();
        assert_eq!(
            types,
            vec![
                TokenType::Keyword,
                TokenType::Punctuation,
                TokenType::Identifier,
                TokenType::Punctuation,
                TokenType::Keyword,
                TokenType::Identifier,
            ]
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let tokenizer = Arc::new(Tokenizer::default());
        let expected = tokenizer.tokenize("SELECT id FROM users WHERE id = 7;");

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let tokenizer = Arc::clone(&tokenizer);
                thread::spawn(move || tokenizer.tokenize("SELECT id FROM users WHERE id = 7;"))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().expect("tokenizer thread panicked"), expected);
        }
    }
}
