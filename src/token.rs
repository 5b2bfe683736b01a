//! Token types and utilities for the filter pipeline.
//!
//! This module defines the core data structures for representing lexical
//! tokens, which are the fundamental units that flow through the filter
//! pipeline.
//!
//! # Core Types
//!
//! - [`Token`] - A single lexical token with its kind and source text
//! - [`TokenKind`] - Lexical classification of a token (keyword, name, etc.)
//! - [`TokenStream`] - Type alias for a boxed, fallible iterator of tokens
//!
//! Tokens are produced by an external SQL tokenizer; this crate never
//! creates them from raw text, it only rewrites their text on the way
//! through the pipeline. Filters preserve cardinality and order: one output
//! element per input element, and only the text may change.
//!
//! # Examples
//!
//! Creating a token:
//!
//! ```
//! use sqlscrub::token::{Token, TokenKind};
//!
//! let token = Token::new(TokenKind::Keyword, "select");
//! assert_eq!(token.kind, TokenKind::Keyword);
//! assert_eq!(token.text, "select");
//! ```
//!
//! Rewriting the text while keeping the kind:
//!
//! ```
//! use sqlscrub::token::{Token, TokenKind};
//!
//! let token = Token::new(TokenKind::Name, "users");
//! let rewritten = token.with_text("USERS");
//! assert_eq!(rewritten.kind, TokenKind::Name);
//! assert_eq!(rewritten.text, "USERS");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Lexical classification of a token.
///
/// This mirrors the taxonomy owned by the external tokenizer. Only the kinds
/// the filters dispatch on are distinguished; everything else falls into
/// [`TokenKind::Other`] and always passes through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// SQL keywords (SELECT, FROM, WHERE, ...)
    Keyword,
    /// Bare identifiers (table, column, alias names)
    Name,
    /// Quoted identifier symbols (e.g. `"MyColumn"`)
    StringSymbol,
    /// Single-quoted string literals, quotes included in the text
    StringSingle,
    /// Everything else (whitespace, operators, numbers, ...)
    Other,
}

/// A token represents a single lexical unit of SQL source text.
///
/// This is the fundamental unit that flows through the filter pipeline. The
/// `text` field holds the literal source substring, including surrounding
/// quote characters for quoted identifiers and string literals.
///
/// # Examples
///
/// ```
/// use sqlscrub::token::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::StringSingle, "'hello'");
/// assert_eq!(token.text, "'hello'");
/// assert_eq!(token.len(), 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The lexical kind of the token
    pub kind: TokenKind,

    /// The literal source text of the token
    pub text: String,
}

impl Token {
    /// Create a new token with the given kind and text.
    pub fn new<S: Into<String>>(kind: TokenKind, text: S) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clone this token with updated text, keeping the kind.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        Token {
            kind: self.kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream is a lazily evaluated sequence of tokens.
///
/// Elements are `Result`s so that a filter hitting malformed input can
/// replace the offending token with an error in place, which propagates to
/// the consumer as a stream-level error signal. Filters pass `Err` elements
/// through unchanged.
pub type TokenStream = Box<dyn Iterator<Item = Result<Token>>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter().map(Ok))
    }
}
