//! Identifier case filter implementation.
//!
//! This module provides a filter that normalizes or anonymizes identifier
//! tokens: bare names and quoted identifier symbols. Identifiers whose text
//! starts with a double quote are left verbatim, even under
//! [`CaseMode::Hash`] — quoted identifiers are escaped on purpose and are
//! not renameable.
//!
//! # Examples
//!
//! ```
//! use sqlscrub::token_filter::{CaseMode, Filter, IdentifierCaseFilter};
//! use sqlscrub::token::{IntoTokenStream, Token, TokenKind};
//!
//! let filter = IdentifierCaseFilter::new(CaseMode::Upper);
//! let tokens = vec![
//!     Token::new(TokenKind::Name, "mycol"),
//!     Token::new(TokenKind::Name, "\"MyCol\""),
//! ];
//!
//! let result: Vec<_> = filter.filter(tokens.into_token_stream())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(result[0].text, "MYCOL");
//! assert_eq!(result[1].text, "\"MyCol\""); // quoted identifiers are kept verbatim
//! ```

use crate::token::{Token, TokenKind, TokenStream};
use crate::token_filter::{CaseMode, Filter};

/// A filter that rewrites the text of identifier tokens.
///
/// Targets tokens of kind [`TokenKind::Name`] and [`TokenKind::StringSymbol`].
/// Tokens whose trimmed text begins with `"` are passed through unmodified.
#[derive(Clone, Copy, Debug)]
pub struct IdentifierCaseFilter {
    mode: CaseMode,
}

impl IdentifierCaseFilter {
    /// Create a new identifier case filter with the given mode.
    pub fn new(mode: CaseMode) -> Self {
        IdentifierCaseFilter { mode }
    }

    /// Get the configured case mode.
    pub fn mode(&self) -> CaseMode {
        self.mode
    }

    fn is_target(token: &Token) -> bool {
        matches!(token.kind, TokenKind::Name | TokenKind::StringSymbol)
            && !token.text.trim().starts_with('"')
    }
}

impl Filter for IdentifierCaseFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let mode = self.mode;
        Box::new(tokens.map(move |item| {
            let token = item?;
            if Self::is_target(&token) {
                let converted = mode.convert(&token.text);
                Ok(token.with_text(converted))
            } else {
                Ok(token)
            }
        }))
    }

    fn name(&self) -> &'static str {
        "identifier_case"
    }
}
