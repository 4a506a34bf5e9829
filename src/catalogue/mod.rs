//! Catalogue construction
//!
//! The host adapter enumerates the declared operations of its service
//! interface and hands them to [`Catalogue::build`] once at
//! catalogue-build time. The result is a listing with a per-entry
//! visibility flag for the rendering layer. Visibility is advisory only:
//! a hidden operation stays routable and invokable.

use crate::error::VisibilityError;
use crate::visibility::VisibilityEngine;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A declared operation as supplied by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationDescriptor {
    /// Owning group (controller) identifier; mandatory
    pub group: String,

    /// Caller-assigned friendly name, if the operation has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// HTTP method, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Route template, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Short human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl OperationDescriptor {
    /// Descriptor with only the mandatory group set.
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: None,
            method: None,
            path: None,
            summary: None,
        }
    }

    /// Set the operation's friendly name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A catalogue entry: a descriptor plus its resolved visibility.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogueEntry {
    #[serde(flatten)]
    pub operation: OperationDescriptor,

    /// Whether the operation is advertised in the catalogue
    pub visible: bool,
}

/// A built interface catalogue.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalogue {
    entries: Vec<CatalogueEntry>,
}

impl Catalogue {
    /// Classify every supplied operation through the engine.
    ///
    /// Calls [`VisibilityEngine::is_visible`] once per operation. The
    /// first mask error aborts the build: a misconfigured mask list
    /// should fail catalogue generation, not silently misclassify. The
    /// recovery decision (fail the process, skip the catalogue) belongs
    /// to the caller.
    pub fn build<I>(engine: &VisibilityEngine, operations: I) -> Result<Self, VisibilityError>
    where
        I: IntoIterator<Item = OperationDescriptor>,
    {
        let mut entries = Vec::new();
        for operation in operations {
            let visible = engine.is_visible(&operation.group, operation.name.as_deref())?;
            entries.push(CatalogueEntry { operation, visible });
        }

        debug!(
            total = entries.len(),
            visible = entries.iter().filter(|e| e.visible).count(),
            "Built catalogue"
        );

        Ok(Self { entries })
    }

    /// All entries, in the order the host supplied them.
    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    /// Entries that are advertised.
    pub fn visible(&self) -> impl Iterator<Item = &CatalogueEntry> {
        self.entries.iter().filter(|entry| entry.visible)
    }

    /// Entries that are hidden from the listing.
    pub fn hidden(&self) -> impl Iterator<Item = &CatalogueEntry> {
        self.entries.iter().filter(|entry| !entry.visible)
    }

    /// Number of advertised entries.
    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalogue has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
