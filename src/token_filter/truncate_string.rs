//! Truncate string filter implementation.
//!
//! This module provides a filter that shortens long single-quoted string
//! literals, replacing the cut-off tail with a placeholder character. Both
//! plain (`'...'`) and doubled (`''...''`) quoting styles are detected and
//! recreated on output.
//!
//! # Examples
//!
//! ```
//! use sqlscrub::token_filter::{Filter, TruncateStringFilter};
//! use sqlscrub::token::{IntoTokenStream, Token, TokenKind};
//!
//! let filter = TruncateStringFilter::new(5, '*');
//! let tokens = vec![Token::new(TokenKind::StringSingle, "'abcdefgh'")];
//!
//! let result: Vec<_> = filter.filter(tokens.into_token_stream())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(result[0].text, "'abcde*'");
//! ```

use crate::error::Result;
use crate::token::{Token, TokenKind, TokenStream};
use crate::token_filter::{Filter, split_quoted};

/// A filter that truncates over-long single-quoted string literals.
///
/// Literals whose inner content exceeds `width` characters are rewritten as
/// the first `width` characters followed by the placeholder, reclosed with
/// the same delimiter style the input used. Shorter literals and all other
/// token kinds pass through unchanged.
#[derive(Clone, Copy, Debug)]
pub struct TruncateStringFilter {
    width: usize,
    placeholder: char,
}

impl TruncateStringFilter {
    /// Create a new truncate filter with the given width and placeholder.
    pub fn new(width: usize, placeholder: char) -> Self {
        TruncateStringFilter { width, placeholder }
    }

    /// Get the maximum inner-content width, in characters.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the placeholder character appended to truncated literals.
    pub fn placeholder(&self) -> char {
        self.placeholder
    }
}

fn truncate(token: Token, width: usize, placeholder: char) -> Result<Token> {
    let (inner, quote) = split_quoted(&token.text)?;
    if inner.chars().count() <= width {
        return Ok(token);
    }

    let head: String = inner.chars().take(width).collect();
    let text = format!("{quote}{head}{placeholder}{quote}");
    Ok(token.with_text(text))
}

impl Filter for TruncateStringFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let width = self.width;
        let placeholder = self.placeholder;
        Box::new(tokens.map(move |item| {
            let token = item?;
            if token.kind != TokenKind::StringSingle {
                return Ok(token);
            }
            truncate(token, width, placeholder)
        }))
    }

    fn name(&self) -> &'static str {
        "truncate_string"
    }
}
