//! Keyword case filter implementation.
//!
//! This module provides a filter that normalizes the casing of SQL keyword
//! tokens, or anonymizes them in [`CaseMode::Hash`] mode.
//!
//! # Examples
//!
//! ```
//! use sqlscrub::token_filter::{CaseMode, Filter, KeywordCaseFilter};
//! use sqlscrub::token::{IntoTokenStream, Token, TokenKind};
//!
//! let filter = KeywordCaseFilter::new(CaseMode::Upper);
//! let tokens = vec![
//!     Token::new(TokenKind::Keyword, "select"),
//!     Token::new(TokenKind::Name, "id"),
//! ];
//!
//! let result: Vec<_> = filter.filter(tokens.into_token_stream())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(result[0].text, "SELECT");
//! assert_eq!(result[1].text, "id"); // names are not keywords
//! ```

use crate::token::{TokenKind, TokenStream};
use crate::token_filter::{CaseMode, Filter};

/// A filter that rewrites the text of keyword tokens.
///
/// Only tokens of kind [`TokenKind::Keyword`] are touched; everything else
/// passes through unchanged. The rewrite is the configured [`CaseMode`].
#[derive(Clone, Copy, Debug)]
pub struct KeywordCaseFilter {
    mode: CaseMode,
}

impl KeywordCaseFilter {
    /// Create a new keyword case filter with the given mode.
    pub fn new(mode: CaseMode) -> Self {
        KeywordCaseFilter { mode }
    }

    /// Get the configured case mode.
    pub fn mode(&self) -> CaseMode {
        self.mode
    }
}

impl Filter for KeywordCaseFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let mode = self.mode;
        Box::new(tokens.map(move |item| {
            let token = item?;
            if token.kind == TokenKind::Keyword {
                let converted = mode.convert(&token.text);
                Ok(token.with_text(converted))
            } else {
                Ok(token)
            }
        }))
    }

    fn name(&self) -> &'static str {
        "keyword_case"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymize::anonymize;
    use crate::token::{IntoTokenStream, Token};

    fn run(filter: &KeywordCaseFilter, tokens: Vec<Token>) -> Vec<Token> {
        filter
            .filter(tokens.into_token_stream())
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_keyword_case_upper() {
        let filter = KeywordCaseFilter::new(CaseMode::Upper);
        let tokens = vec![
            Token::new(TokenKind::Keyword, "select"),
            Token::new(TokenKind::Name, "id"),
            Token::new(TokenKind::Keyword, "from"),
            Token::new(TokenKind::Other, " "),
        ];

        let result = run(&filter, tokens);

        assert_eq!(result.len(), 4);
        assert_eq!(result[0].text, "SELECT");
        assert_eq!(result[1].text, "id");
        assert_eq!(result[2].text, "FROM");
        assert_eq!(result[3].text, " ");
    }

    #[test]
    fn test_keyword_case_capitalize() {
        let filter = KeywordCaseFilter::new(CaseMode::Capitalize);
        let result = run(&filter, vec![Token::new(TokenKind::Keyword, "SELECT")]);
        assert_eq!(result[0].text, "Select");
    }

    #[test]
    fn test_keyword_case_hash() {
        let filter = KeywordCaseFilter::new(CaseMode::Hash);
        let result = run(&filter, vec![Token::new(TokenKind::Keyword, "grant")]);
        assert_eq!(result[0].text, anonymize("grant"));
    }

    #[test]
    fn test_keyword_case_preserves_kind() {
        let filter = KeywordCaseFilter::new(CaseMode::Lower);
        let result = run(&filter, vec![Token::new(TokenKind::Keyword, "WHERE")]);
        assert_eq!(result[0].kind, TokenKind::Keyword);
        assert_eq!(result[0].text, "where");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(KeywordCaseFilter::new(CaseMode::Upper).name(), "keyword_case");
    }
}
