//! Lexeme Classification
//!
//! Each lexeme is tested against [`Rule::ORDER`]; the first rule that accepts
//! it decides the token type. Lexemes no rule accepts become
//! [`TokenType::Unknown`] tokens, so classification never fails.
//!
//! | Rule               | Accepts                                   | Token type  |
//! |--------------------|-------------------------------------------|-------------|
//! | `SingleWordKeyword`| member of the single-word keyword table   | Keyword     |
//! | `TwoWordsKeyword`  | start word + an allowed next lexeme       | Keyword     |
//! | `Punctuation`      | member of the punctuation table           | Punctuation |
//! | `Operator`         | member of the operator table              | Operator    |
//! | `Literal`          | quoted string or number                   | Literal     |
//! | `Identifier`       | the configured [`IdentifierRule`]         | Identifier  |

use super::rules::{self, IdentifierRule};
use super::segmenter::Lexeme;
use super::tables::Tables;
use super::token::{Token, TokenType};
use std::sync::Arc;
use tracing::trace;

/// A recognizer rule used to classify a lexeme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    SingleWordKeyword,
    TwoWordsKeyword,
    Punctuation,
    Operator,
    Literal,
    Identifier,
}

impl Rule {
    /// Rules in the order they are tried
    pub const ORDER: [Rule; 6] = [
        Rule::SingleWordKeyword,
        Rule::TwoWordsKeyword,
        Rule::Punctuation,
        Rule::Operator,
        Rule::Literal,
        Rule::Identifier,
    ];

    /// The token type produced when this rule accepts a lexeme
    pub fn token_type(&self) -> TokenType {
        match self {
            Rule::SingleWordKeyword | Rule::TwoWordsKeyword => TokenType::Keyword,
            Rule::Punctuation => TokenType::Punctuation,
            Rule::Operator => TokenType::Operator,
            Rule::Literal => TokenType::Literal,
            Rule::Identifier => TokenType::Identifier,
        }
    }

    /// Number of lexemes consumed when this rule accepts
    pub fn width(&self) -> usize {
        match self {
            Rule::TwoWordsKeyword => 2,
            _ => 1,
        }
    }
}

/// Classifies lexemes into tokens using a fixed set of tables
#[derive(Debug, Clone)]
pub struct Classifier {
    tables: Arc<Tables>,
    identifier_rule: IdentifierRule,
}

impl Classifier {
    pub fn new(tables: Arc<Tables>, identifier_rule: IdentifierRule) -> Self {
        Self {
            tables,
            identifier_rule,
        }
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn identifier_rule(&self) -> IdentifierRule {
        self.identifier_rule
    }

    /// Checks whether a single rule accepts the lexeme
    ///
    /// `next` is the following lexeme, if any; only `TwoWordsKeyword` looks at it.
    pub fn accepts(&self, rule: Rule, lexeme: &str, next: Option<&str>) -> bool {
        match rule {
            Rule::SingleWordKeyword => self.tables.is_single_word_keyword(lexeme),
            Rule::TwoWordsKeyword => next.is_some_and(|next| {
                self.tables.is_start_of_two_words_keyword(lexeme)
                    && self.tables.is_two_words_keyword(lexeme, next)
            }),
            Rule::Punctuation => self.tables.is_punctuation(lexeme),
            Rule::Operator => self.tables.is_operator(lexeme),
            Rule::Literal => rules::is_literal(lexeme),
            Rule::Identifier => self.identifier_rule.matches(lexeme),
        }
    }

    /// Returns the first rule accepting the lexeme, or `None` if it is unknown
    pub fn rule_for(&self, lexeme: &str, next: Option<&str>) -> Option<Rule> {
        Rule::ORDER
            .into_iter()
            .find(|rule| self.accepts(*rule, lexeme, next))
    }

    /// Classifies a whole lexeme sequence
    pub fn classify(&self, lexemes: &[Lexeme<'_>]) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(lexemes.len());
        let mut pos = 0;

        while pos < lexemes.len() {
            let lexeme: &str = &lexemes[pos];
            let next: Option<&str> = lexemes.get(pos + 1).map(|next| &**next);

            let rule = self.rule_for(lexeme, next);
            let token = match (rule, next) {
                (Some(Rule::TwoWordsKeyword), Some(second)) => {
                    Token::new(TokenType::Keyword, format!("{} {}", lexeme, second))
                }
                (Some(rule), _) => Token::new(rule.token_type(), lexeme),
                (None, _) => Token::new(TokenType::Unknown, lexeme),
            };
            trace!("Lexeme {} {:?} -> {}", pos, lexeme, token.token_type());

            pos += rule.map_or(1, |rule| rule.width());
            tokens.push(token);
        }

        tokens
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Arc::new(Tables::sql()), IdentifierRule::default())
    }
}
