//! Hash string filter implementation.
//!
//! This module provides a filter that replaces the content of single-quoted
//! string literals with its anonymized form, keeping the quoting style the
//! input used. Unlike the identifier case filter there is no quoted-content
//! exclusion here: a string literal's content is user data by definition,
//! never an escaped identifier.
//!
//! # Examples
//!
//! ```
//! use sqlscrub::anonymize::anonymize;
//! use sqlscrub::token_filter::{Filter, HashStringFilter};
//! use sqlscrub::token::{IntoTokenStream, Token, TokenKind};
//!
//! let filter = HashStringFilter::new();
//! let tokens = vec![Token::new(TokenKind::StringSingle, "'secret'")];
//!
//! let result: Vec<_> = filter.filter(tokens.into_token_stream())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(result[0].text, format!("'{}'", anonymize("secret")));
//! ```

use crate::anonymize::anonymize;
use crate::error::Result;
use crate::token::{Token, TokenKind, TokenStream};
use crate::token_filter::{Filter, split_quoted};

/// A filter that anonymizes the content of single-quoted string literals.
///
/// The digest and salt are fixed (see [`anonymize`]), so there is nothing
/// to configure. Empty literals and all other token kinds pass through
/// unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct HashStringFilter;

impl HashStringFilter {
    /// Create a new hash string filter.
    pub fn new() -> Self {
        HashStringFilter
    }
}

fn hash_literal(token: Token) -> Result<Token> {
    let (inner, quote) = split_quoted(&token.text)?;
    if inner.is_empty() {
        return Ok(token);
    }

    let hashed = anonymize(inner);
    Ok(token.with_text(format!("{quote}{hashed}{quote}")))
}

impl Filter for HashStringFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        Box::new(tokens.map(|item| {
            let token = item?;
            if token.kind != TokenKind::StringSingle {
                return Ok(token);
            }
            hash_literal(token)
        }))
    }

    fn name(&self) -> &'static str {
        "hash_string"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::IntoTokenStream;

    fn run(filter: &HashStringFilter, tokens: Vec<Token>) -> Vec<Token> {
        filter
            .filter(tokens.into_token_stream())
            .collect::<Result<_>>()
            .unwrap()
    }

    #[test]
    fn test_hash_simple_literal() {
        let filter = HashStringFilter::new();
        let result = run(&filter, vec![Token::new(TokenKind::StringSingle, "'secret'")]);

        assert_eq!(result[0].text, format!("'{}'", anonymize("secret")));
        assert_eq!(result[0].kind, TokenKind::StringSingle);
    }

    #[test]
    fn test_hash_doubled_quote_literal() {
        let filter = HashStringFilter::new();
        let result = run(
            &filter,
            vec![Token::new(TokenKind::StringSingle, "''secret''")],
        );

        assert_eq!(result[0].text, format!("''{}''", anonymize("secret")));
    }

    #[test]
    fn test_hash_is_deterministic() {
        let filter = HashStringFilter::new();
        let first = run(&filter, vec![Token::new(TokenKind::StringSingle, "'abc'")]);
        let second = run(&filter, vec![Token::new(TokenKind::StringSingle, "'abc'")]);
        assert_eq!(first[0].text, second[0].text);
    }

    #[test]
    fn test_empty_literal_unchanged() {
        let filter = HashStringFilter::new();
        let result = run(&filter, vec![Token::new(TokenKind::StringSingle, "''")]);
        assert_eq!(result[0].text, "''");
    }

    #[test]
    fn test_non_target_tokens_pass_through() {
        let filter = HashStringFilter::new();
        let tokens = vec![
            Token::new(TokenKind::Keyword, "where"),
            Token::new(TokenKind::Name, "password"),
        ];

        let result = run(&filter, tokens);

        assert_eq!(result[0].text, "where");
        assert_eq!(result[1].text, "password");
    }

    #[test]
    fn test_malformed_literal_is_error() {
        let filter = HashStringFilter::new();
        let tokens = vec![Token::new(TokenKind::StringSingle, "x")];

        let result: Vec<_> = filter.filter(tokens.into_token_stream()).collect();

        assert!(result[0].is_err());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(HashStringFilter::new().name(), "hash_string");
    }
}
