//! Salted anonymization of identifiers and string contents.
//!
//! This module provides [`anonymize`], a deterministic mapping from
//! potentially sensitive text to a short pseudo-identifier. It is used by
//! the case filters in `hash` mode and by the string hash filter.
//!
//! A fixed set of common SQL vocabulary (aggregate functions, NULL handling
//! keywords, ...) is exempt from anonymization: those words carry structural
//! rather than sensitive meaning, and rewriting them would corrupt query
//! semantics for downstream replay while adding no privacy value.
//!
//! # Examples
//!
//! ```
//! use sqlscrub::anonymize::anonymize;
//!
//! // Exempt vocabulary is returned verbatim, whatever its casing.
//! assert_eq!(anonymize("SUM"), "SUM");
//! assert_eq!(anonymize("Count"), "Count");
//!
//! // Everything else becomes `i` plus 8 hex characters, case-insensitively.
//! assert_eq!(anonymize("Users"), anonymize("users"));
//! assert!(anonymize("users").starts_with('i'));
//! ```

use std::collections::HashSet;
use std::fmt::Write;
use std::sync::LazyLock;

use sha1::{Digest, Sha1};

/// Salt prepended to the input before hashing.
///
/// Fixed so that anonymized output stays stable across runs and across
/// existing anonymized corpora. Known limitation: with the salt public,
/// short inputs can be reversed by dictionary search.
const ANON_SALT: &str = "eaa35b02507a834edd0d219343fd4bd075f21762";

/// Common SQL vocabulary excluded from anonymization.
const EXEMPT_WORDS: &[&str] = &[
    "sum",
    "if",
    "last_value",
    "trim",
    "nullif",
    "concat",
    "cast",
    "varchar",
    "concat_ws",
    "count",
    "coalesce",
    "min",
    "max",
    "lead",
    "row_number",
    "nulls",
    "null",
    "datediff",
    "lag",
];

/// Exempt vocabulary as a HashSet, keyed by lowercase form.
pub static EXEMPT_WORDS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| EXEMPT_WORDS.iter().copied().collect());

/// Anonymize a piece of text into a deterministic pseudo-identifier.
///
/// Exempt vocabulary is returned verbatim. Everything else is lowercased,
/// salted, hashed with SHA-1, and truncated to the first 8 hex characters
/// of the digest, prefixed with `i`. Identifiers can't start with a digit,
/// so the `i` prefix keeps the result syntactically valid; it is harmless
/// for string contents as well.
///
/// The mapping is case-insensitive and pure: the same input (up to casing)
/// always yields the same output. Truncating the digest to 32 bits makes
/// collisions possible; that is an accepted trade-off for short output.
pub fn anonymize(text: &str) -> String {
    let lowered = text.to_lowercase();
    if EXEMPT_WORDS_SET.contains(lowered.as_str()) {
        return text.to_string();
    }

    let mut hasher = Sha1::new();
    hasher.update(format!("{ANON_SALT}{text}").to_lowercase().as_bytes());
    let digest = hasher.finalize();

    let mut out = String::with_capacity(9);
    out.push('i');
    for byte in &digest[..4] {
        // 4 bytes render as exactly 8 hex characters
        let _ = write!(out, "{byte:02x}");
    }
    out
}
