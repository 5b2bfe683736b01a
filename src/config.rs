//! Declarative pipeline configuration.
//!
//! Embedders that don't want to construct filters in code can describe a
//! pipeline as data, typically JSON, and build a [`FilterPipeline`] from it.
//! Filter order in the configuration is the order of application.
//!
//! # Examples
//!
//! ```
//! use sqlscrub::config::PipelineConfig;
//!
//! let config = PipelineConfig::from_json(
//!     r#"{
//!         "filters": [
//!             {"filter": "keyword_case", "case": "upper"},
//!             {"filter": "truncate_string", "width": 16, "placeholder": "…"}
//!         ]
//!     }"#,
//! ).unwrap();
//!
//! let pipeline = config.build().unwrap();
//! assert_eq!(pipeline.filters().len(), 2);
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrubError};
use crate::pipeline::FilterPipeline;
use crate::token_filter::{
    CaseMode, Filter, HashStringFilter, IdentifierCaseFilter, KeywordCaseFilter,
    TruncateStringFilter,
};

/// Configuration for a single filter in the pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "filter", rename_all = "snake_case")]
pub enum FilterConfig {
    /// Keyword case normalization or anonymization
    KeywordCase {
        /// Case mode to apply to keyword tokens
        case: CaseMode,
    },
    /// Identifier case normalization or anonymization
    IdentifierCase {
        /// Case mode to apply to identifier tokens
        case: CaseMode,
    },
    /// String literal truncation
    TruncateString {
        /// Maximum inner-content width in characters; must be positive
        width: usize,
        /// Character appended in place of the cut-off tail
        placeholder: char,
    },
    /// String literal anonymization
    HashString,
}

impl FilterConfig {
    fn build(&self) -> Result<Arc<dyn Filter>> {
        match *self {
            FilterConfig::KeywordCase { case } => Ok(Arc::new(KeywordCaseFilter::new(case))),
            FilterConfig::IdentifierCase { case } => Ok(Arc::new(IdentifierCaseFilter::new(case))),
            FilterConfig::TruncateString { width, placeholder } => {
                if width == 0 {
                    return Err(ScrubError::invalid_config(
                        "truncate_string width must be positive",
                    ));
                }
                Ok(Arc::new(TruncateStringFilter::new(width, placeholder)))
            }
            FilterConfig::HashString => Ok(Arc::new(HashStringFilter::new())),
        }
    }
}

/// Configuration for a whole filter pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Filters to chain, in application order
    #[serde(default)]
    pub filters: Vec<FilterConfig>,
}

impl PipelineConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Build the configured pipeline.
    pub fn build(&self) -> Result<FilterPipeline> {
        let mut pipeline = FilterPipeline::new();
        for filter in &self.filters {
            pipeline = pipeline.add_filter(filter.build()?);
        }
        Ok(pipeline)
    }
}
