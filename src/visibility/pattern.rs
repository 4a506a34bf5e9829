//! Wildcard pattern matching
//!
//! Mask halves are patterns: literal text, `?` for exactly one character,
//! `*` for any run of characters including the empty one. Patterns without
//! wildcards compare as case-insensitive literals; patterns with wildcards
//! are translated to anchored, case-insensitive regexes so `Get*` matches
//! `GetUser` but never `SetGetUser`.

use crate::error::VisibilityError;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::RwLock;

/// Check whether a pattern contains wildcard characters
pub(super) fn has_wildcards(pattern: &str) -> bool {
    pattern.contains(['*', '?'])
}

/// Translate a wildcard pattern into an anchored regex source string.
///
/// Literal characters are escaped, so a `.` in a pattern matches only a
/// literal `.`. The result matches the whole input, never a substring.
pub(super) fn translate(pattern: &str) -> String {
    let mut source = String::with_capacity(pattern.len() + 2);
    let mut literal = String::new();
    source.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' | '?' => {
                if !literal.is_empty() {
                    source.push_str(&regex::escape(&literal));
                    literal.clear();
                }
                source.push_str(if ch == '*' { ".*" } else { "." });
            }
            _ => literal.push(ch),
        }
    }
    if !literal.is_empty() {
        source.push_str(&regex::escape(&literal));
    }
    source.push('$');
    source
}

/// Compile a wildcard pattern into its case-insensitive anchored regex.
pub(super) fn compile(pattern: &str) -> Result<Regex, VisibilityError> {
    RegexBuilder::new(&translate(pattern))
        .case_insensitive(true)
        .build()
        .map_err(|e| VisibilityError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
}

/// Trial-compile a pattern without matching anything.
///
/// Used by configuration loading to surface bad masks at startup; the
/// engine itself compiles lazily.
pub(super) fn validate(pattern: &str) -> Result<(), VisibilityError> {
    if has_wildcards(pattern) {
        compile(pattern)?;
    }
    Ok(())
}

/// Cache of compiled wildcard patterns, keyed by pattern source.
///
/// An optimization only: recompiling on every call would produce the same
/// results. Only successful compilations are cached, so a bad pattern
/// keeps failing every call that needs it.
#[derive(Debug, Default)]
pub(super) struct PatternCache {
    compiled: RwLock<HashMap<String, Regex>>,
}

impl PatternCache {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Match `text` against `pattern`, full-string and case-insensitive.
    pub(super) fn matches(&self, text: &str, pattern: &str) -> Result<bool, VisibilityError> {
        if !has_wildcards(pattern) {
            // Locale-independent folding, the same the regex path applies.
            return Ok(text.to_lowercase() == pattern.to_lowercase());
        }

        {
            let cache = self.compiled.read().unwrap_or_else(|e| e.into_inner());
            if let Some(regex) = cache.get(pattern) {
                return Ok(regex.is_match(text));
            }
        }

        let regex = compile(pattern)?;
        let matched = regex.is_match(text);
        self.compiled
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(pattern.to_string(), regex);
        Ok(matched)
    }
}
