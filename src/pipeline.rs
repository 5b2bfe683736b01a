//! Filter pipeline that chains token filters.
//!
//! This is the main building block for embedders. It combines any number of
//! token filters into a single stream transformer; filters are applied
//! sequentially in the order they were added, and the caller decides which
//! filters to chain and in what sequence.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use sqlscrub::pipeline::FilterPipeline;
//! use sqlscrub::token::{IntoTokenStream, Token, TokenKind};
//! use sqlscrub::token_filter::{CaseMode, IdentifierCaseFilter, KeywordCaseFilter};
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(Arc::new(KeywordCaseFilter::new(CaseMode::Upper)))
//!     .add_filter(Arc::new(IdentifierCaseFilter::new(CaseMode::Lower)));
//!
//! let tokens = vec![
//!     Token::new(TokenKind::Keyword, "select"),
//!     Token::new(TokenKind::Name, "ID"),
//! ];
//!
//! let result = pipeline.process_tokens(tokens).unwrap();
//!
//! assert_eq!(result[0].text, "SELECT");
//! assert_eq!(result[1].text, "id");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::token::{IntoTokenStream, Token, TokenStream};
use crate::token_filter::Filter;

/// An ordered chain of token filters applied as one stream transformer.
///
/// Processing is lazy and single pass: each filter wraps the previous
/// stream, and nothing is consumed until the caller pulls on the output.
/// Every filter preserves token count and order, so the pipeline does too.
#[derive(Clone, Default)]
pub struct FilterPipeline {
    filters: Vec<Arc<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new, empty pipeline.
    pub fn new() -> Self {
        FilterPipeline {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the end of the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the filters in this pipeline.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Check whether the pipeline contains no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run a token stream through all filters in order.
    pub fn process(&self, tokens: TokenStream) -> TokenStream {
        let mut stream = tokens;
        for filter in &self.filters {
            stream = filter.filter(stream);
        }
        stream
    }

    /// Run a token vector through the pipeline, collecting the output.
    ///
    /// Convenience for callers that don't need streaming; the first
    /// in-stream error aborts and is returned.
    pub fn process_tokens(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        self.process(tokens.into_token_stream()).collect()
    }
}

impl fmt::Debug for FilterPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterPipeline")
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
