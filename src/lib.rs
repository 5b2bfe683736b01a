//! # sqlscrub
//!
//! Stream filters for normalizing, truncating, and anonymizing SQL token
//! streams.
//!
//! An external tokenizer produces an ordered sequence of `(kind, text)`
//! tokens; this crate rewrites the text of selected tokens on the way
//! through a lazily evaluated filter pipeline. Token count, order, and kind
//! are always preserved.
//!
//! ## Features
//!
//! - Keyword and identifier case normalization (upper, lower, capitalize)
//! - Salted, deterministic anonymization of identifiers and string contents
//! - Truncation of over-long string literals with a placeholder marker
//! - Lazy, single-pass, composable pipeline stages
//! - Declarative pipeline configuration from JSON
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use sqlscrub::pipeline::FilterPipeline;
//! use sqlscrub::token::{IntoTokenStream, Token, TokenKind};
//! use sqlscrub::token_filter::{CaseMode, HashStringFilter, KeywordCaseFilter};
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(Arc::new(KeywordCaseFilter::new(CaseMode::Upper)))
//!     .add_filter(Arc::new(HashStringFilter::new()));
//!
//! let tokens = vec![
//!     Token::new(TokenKind::Keyword, "select"),
//!     Token::new(TokenKind::StringSingle, "'secret'"),
//! ];
//!
//! let scrubbed = pipeline.process_tokens(tokens).unwrap();
//!
//! assert_eq!(scrubbed[0].text, "SELECT");
//! assert!(scrubbed[1].text.starts_with("'i"));
//! ```

pub mod anonymize;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod token;
pub mod token_filter;

pub mod prelude {
    //! Convenient re-exports of the most commonly used types.

    pub use crate::anonymize::anonymize;
    pub use crate::config::{FilterConfig, PipelineConfig};
    pub use crate::error::{Result, ScrubError};
    pub use crate::pipeline::FilterPipeline;
    pub use crate::token::{IntoTokenStream, Token, TokenKind, TokenStream};
    pub use crate::token_filter::{
        CaseMode, Filter, HashStringFilter, IdentifierCaseFilter, KeywordCaseFilter,
        TruncateStringFilter,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
