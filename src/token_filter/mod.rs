//! Token filter implementations for token stream transformation.
//!
//! Each filter is a lazy, pull-based stream transformer: it wraps an input
//! [`TokenStream`] and yields exactly one output element per input element,
//! in order, rewriting the text of the tokens it targets and passing
//! everything else through untouched. Filters hold only construction-time
//! configuration and no cross-token state, so partial consumption of a
//! stream is always safe.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::anonymize::anonymize;
use crate::error::{Result, ScrubError};
use crate::token::TokenStream;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    ///
    /// The returned stream is lazy; no tokens are consumed until the caller
    /// pulls on it. `Err` elements from upstream pass through unchanged.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// How a case filter rewrites the text of its target tokens.
///
/// This is a closed enum instead of a name-to-method lookup: the four
/// behaviors are fixed and dispatch is an explicit match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// Uppercase the whole token text
    Upper,
    /// Lowercase the whole token text
    Lower,
    /// Uppercase the first character, lowercase the rest
    Capitalize,
    /// Replace the text with its anonymized form
    Hash,
}

impl CaseMode {
    /// Rewrite `text` according to this mode.
    pub fn convert(&self, text: &str) -> String {
        match self {
            CaseMode::Upper => text.to_uppercase(),
            CaseMode::Lower => text.to_lowercase(),
            CaseMode::Capitalize => capitalize(text),
            CaseMode::Hash => anonymize(text),
        }
    }
}

impl FromStr for CaseMode {
    type Err = ScrubError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "upper" => Ok(CaseMode::Upper),
            "lower" => Ok(CaseMode::Lower),
            "capitalize" => Ok(CaseMode::Capitalize),
            "hash" => Ok(CaseMode::Hash),
            other => Err(ScrubError::invalid_config(format!(
                "unknown case mode: {other}"
            ))),
        }
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaseMode::Upper => "upper",
            CaseMode::Lower => "lower",
            CaseMode::Capitalize => "capitalize",
            CaseMode::Hash => "hash",
        };
        write!(f, "{name}")
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Split a single-quoted string literal into its inner content and the
/// delimiter to reclose it with.
///
/// A literal opening with two consecutive single quotes uses the doubled
/// delimiter `''`; anything else uses a plain `'`. A bare `''` is an empty
/// simple literal. Literals the tokenizer should never have produced (too
/// short, unmatched closing quote) are rejected rather than misparsed.
pub(crate) fn split_quoted(text: &str) -> Result<(&str, &'static str)> {
    if let Some(rest) = text.strip_prefix("''") {
        if let Some(inner) = rest.strip_suffix("''") {
            return Ok((inner, "''"));
        }
        if rest.is_empty() {
            // `''` on its own is an empty simple-quoted literal
            return Ok(("", "'"));
        }
        return Err(ScrubError::malformed_literal(text));
    }

    if text.len() >= 2 {
        if let Some(inner) = text
            .strip_prefix('\'')
            .and_then(|rest| rest.strip_suffix('\''))
        {
            return Ok((inner, "'"));
        }
    }

    Err(ScrubError::malformed_literal(text))
}

// Individual filter modules
pub mod hash_string;
pub mod identifier_case;
pub mod keyword_case;
pub mod truncate_string;

// Re-export all filters for convenient access
pub use hash_string::HashStringFilter;
pub use identifier_case::IdentifierCaseFilter;
pub use keyword_case::KeywordCaseFilter;
pub use truncate_string::TruncateStringFilter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_mode_convert() {
        assert_eq!(CaseMode::Upper.convert("select"), "SELECT");
        assert_eq!(CaseMode::Lower.convert("SELECT"), "select");
        assert_eq!(CaseMode::Capitalize.convert("sELECT"), "Select");
        assert_eq!(CaseMode::Capitalize.convert(""), "");
    }

    #[test]
    fn test_case_mode_idempotent() {
        for mode in [CaseMode::Upper, CaseMode::Lower, CaseMode::Capitalize] {
            let once = mode.convert("GroupName");
            let twice = mode.convert(&once);
            assert_eq!(once, twice, "mode {mode} is not idempotent");
        }
    }

    #[test]
    fn test_case_mode_hash_uses_anonymize() {
        assert_eq!(CaseMode::Hash.convert("mycol"), anonymize("mycol"));
        // Exempt vocabulary survives hash mode verbatim
        assert_eq!(CaseMode::Hash.convert("SUM"), "SUM");
    }

    #[test]
    fn test_case_mode_from_str() {
        assert_eq!("upper".parse::<CaseMode>().unwrap(), CaseMode::Upper);
        assert_eq!("hash".parse::<CaseMode>().unwrap(), CaseMode::Hash);
        assert!("title".parse::<CaseMode>().is_err());
    }

    #[test]
    fn test_split_quoted_simple() {
        assert_eq!(split_quoted("'abc'").unwrap(), ("abc", "'"));
        assert_eq!(split_quoted("''").unwrap(), ("", "'"));
    }

    #[test]
    fn test_split_quoted_doubled() {
        assert_eq!(split_quoted("''secret''").unwrap(), ("secret", "''"));
        assert_eq!(split_quoted("''''").unwrap(), ("", "''"));
    }

    #[test]
    fn test_split_quoted_malformed() {
        assert!(split_quoted("x").is_err());
        assert!(split_quoted("'oops").is_err());
        assert!(split_quoted("''oops'").is_err());
        assert!(split_quoted("").is_err());
    }
}
