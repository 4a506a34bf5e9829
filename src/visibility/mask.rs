//! Catalogue mask model
//!
//! A mask selects operations by name: `GroupMask` alone, or
//! `GroupMask.OperationMask`, split at the first `.`. Each half is a
//! wildcard pattern with `?` and `*` support.

use crate::error::VisibilityError;
use crate::visibility::pattern::{self, PatternCache};
use std::fmt;

/// A single configured visibility mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    group_pattern: String,
    operation_pattern: Option<String>,
}

impl Mask {
    /// Parse a mask from its configured string form.
    ///
    /// Never fails: pattern syntax is checked lazily when the mask is
    /// first evaluated (or eagerly via [`validate`](Self::validate)).
    pub fn parse(mask: &str) -> Self {
        match mask.split_once('.') {
            Some((group, operation)) => Self {
                group_pattern: group.to_string(),
                operation_pattern: Some(operation.to_string()),
            },
            None => Self {
                group_pattern: mask.to_string(),
                operation_pattern: None,
            },
        }
    }

    /// The group half of the mask.
    pub fn group_pattern(&self) -> &str {
        &self.group_pattern
    }

    /// The operation half of the mask, if it has one.
    pub fn operation_pattern(&self) -> Option<&str> {
        self.operation_pattern.as_deref()
    }

    /// Trial-compile both halves of the mask.
    ///
    /// The engine compiles lazily; configuration loading calls this so a
    /// bad mask fails at startup instead of at catalogue-build time.
    pub fn validate(&self) -> Result<(), VisibilityError> {
        pattern::validate(&self.group_pattern)?;
        if let Some(operation_pattern) = &self.operation_pattern {
            pattern::validate(operation_pattern)?;
        }
        Ok(())
    }

    /// Check this mask against a (group, operation) pair.
    ///
    /// When the mask has no operation half, or the operation under test
    /// has no name, only the group pattern is consulted. The operation
    /// half discriminates among named operations only: `User.Get*` also
    /// matches an unnamed operation of `User`.
    pub(super) fn matches(
        &self,
        group: &str,
        operation: Option<&str>,
        cache: &PatternCache,
    ) -> Result<bool, VisibilityError> {
        let operation = operation.filter(|name| !name.is_empty());

        let (Some(operation_pattern), Some(operation_name)) =
            (self.operation_pattern.as_deref(), operation)
        else {
            return cache.matches(group, &self.group_pattern);
        };

        Ok(cache.matches(group, &self.group_pattern)?
            && cache.matches(operation_name, operation_pattern)?)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operation_pattern {
            Some(operation) => write!(f, "{}.{}", self.group_pattern, operation),
            None => write!(f, "{}", self.group_pattern),
        }
    }
}

impl From<&str> for Mask {
    fn from(mask: &str) -> Self {
        Mask::parse(mask)
    }
}

impl From<String> for Mask {
    fn from(mask: String) -> Self {
        Mask::parse(&mask)
    }
}
