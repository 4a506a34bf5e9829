//! Visibility decision engine

use crate::config::CatalogueConfig;
use crate::error::VisibilityError;
use crate::visibility::mask::Mask;
use crate::visibility::pattern::PatternCache;
use tracing::{debug, trace};

/// Decides whether a declared operation is advertised in the catalogue.
///
/// Holds the two configured mask lists. Operations matching an allow mask
/// are advertised; operations matching a deny mask are not. With no allow
/// list configured everything is advertised unless denied; with both lists
/// configured the deny list only ever narrows the allow set.
///
/// The mask lists are immutable after construction. Evaluation is pure and
/// synchronous, so a shared engine can be used from any number of threads
/// without external locking. Visibility has no effect on routing: a hidden
/// operation remains invokable.
pub struct VisibilityEngine {
    allow_masks: Vec<Mask>,
    deny_masks: Vec<Mask>,
    cache: PatternCache,
}

impl VisibilityEngine {
    /// Create an engine from allow and deny mask strings.
    ///
    /// Construction never fails: either list may be empty and mask syntax
    /// is not validated here. A malformed pattern surfaces as
    /// [`VisibilityError::InvalidPattern`] from the first
    /// [`is_visible`](Self::is_visible) call that needs it.
    pub fn new<A, D>(allow_masks: A, deny_masks: D) -> Self
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        Self {
            allow_masks: allow_masks
                .into_iter()
                .map(|mask| Mask::parse(mask.as_ref()))
                .collect(),
            deny_masks: deny_masks
                .into_iter()
                .map(|mask| Mask::parse(mask.as_ref()))
                .collect(),
            cache: PatternCache::new(),
        }
    }

    /// Engine with no masks configured: every operation is advertised.
    pub fn allow_all() -> Self {
        Self::new(Vec::<String>::new(), Vec::<String>::new())
    }

    /// Build an engine from the `[catalogue]` configuration section.
    pub fn from_config(config: &CatalogueConfig) -> Self {
        Self::new(&config.visible_items, &config.hidden_items)
    }

    /// Total number of configured masks.
    pub fn mask_count(&self) -> usize {
        self.allow_masks.len() + self.deny_masks.len()
    }

    /// Decide whether the operation `group`/`operation` is advertised.
    ///
    /// `group` identifies the owning group (controller) and must be
    /// non-empty. `operation` is the operation's caller-assigned friendly
    /// name, `None` (or empty) when it has none.
    ///
    /// # Errors
    ///
    /// [`VisibilityError::MissingGroupName`] when `group` is empty;
    /// [`VisibilityError::InvalidPattern`] when a consulted mask cannot
    /// be compiled. Pattern errors abort the call rather than counting as
    /// a non-match, so a misconfigured mask list cannot silently
    /// misclassify.
    pub fn is_visible(
        &self,
        group: &str,
        operation: Option<&str>,
    ) -> Result<bool, VisibilityError> {
        if group.is_empty() {
            return Err(VisibilityError::MissingGroupName);
        }

        // Default-allow until a configured allow list decides otherwise.
        let mut visible = true;

        if !self.allow_masks.is_empty() {
            visible = self.any_match(&self.allow_masks, group, operation)?;
        }

        // The deny list is consulted only while the operation is still
        // visible: it can remove entries from the allow set but never
        // re-include one the allow list already excluded.
        if visible && !self.deny_masks.is_empty() {
            visible = !self.any_match(&self.deny_masks, group, operation)?;
        }

        debug!(group, operation = ?operation, visible, "Resolved catalogue visibility");
        Ok(visible)
    }

    fn any_match(
        &self,
        masks: &[Mask],
        group: &str,
        operation: Option<&str>,
    ) -> Result<bool, VisibilityError> {
        for mask in masks {
            if mask.matches(group, operation, &self.cache)? {
                trace!(mask = %mask, group, "Mask matched");
                return Ok(true);
            }
        }
        Ok(false)
    }
}
