//! Domain catalog: the ordered set of business domains and their tools.
//!
//! The catalog is immutable once built. Construction validates uniqueness of
//! domain ids across the catalog and of tool ids within each domain.

use std::collections::HashSet;

use super::error::CatalogError;
use super::identifiers::{DomainId, InvalidToolId, ToolId};

/// A named feature/view within a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDescriptor {
    id: ToolId,
    name: String,
    icon: String,
}

impl ToolDescriptor {
    /// Build a tool descriptor.
    ///
    /// `icon` is an opaque key resolved by the presentation layer.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
    ) -> Result<Self, InvalidToolId> {
        Ok(Self {
            id: ToolId::new(id)?,
            name: name.into(),
            icon: icon.into(),
        })
    }

    /// Tool id, unique within the owning domain.
    pub fn id(&self) -> &ToolId {
        &self.id
    }

    /// Display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Symbolic icon key.
    pub fn icon(&self) -> &str {
        &self.icon
    }
}

/// A business vertical with its ordered tool list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCatalogEntry {
    id: DomainId,
    name: String,
    tools: Vec<ToolDescriptor>,
}

impl DomainCatalogEntry {
    /// Build a domain entry, rejecting repeated tool ids.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidDomainId`] if `id` is not canonical
    /// - [`CatalogError::DuplicateTool`] if two tools share an id
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        tools: Vec<ToolDescriptor>,
    ) -> Result<Self, CatalogError> {
        let id = DomainId::new(id)?;

        let mut seen = HashSet::with_capacity(tools.len());
        for tool in &tools {
            if !seen.insert(tool.id()) {
                return Err(CatalogError::DuplicateTool {
                    domain: id,
                    tool: tool.id().clone(),
                });
            }
        }

        Ok(Self {
            id,
            name: name.into(),
            tools,
        })
    }

    /// Canonical id.
    pub fn id(&self) -> &DomainId {
        &self.id
    }

    /// Display label; may differ in casing/hyphenation from the id.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tools in display order.
    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Look up a tool by exact id.
    pub fn tool(&self, tool_id: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|tool| tool.id().as_str() == tool_id)
    }

    /// Position of a tool in display order.
    pub(crate) fn tool_position(&self, tool_id: &str) -> Option<usize> {
        self.tools
            .iter()
            .position(|tool| tool.id().as_str() == tool_id)
    }

    /// First tool in display order, used to pre-seed a tool context.
    pub fn default_tool(&self) -> Option<&ToolDescriptor> {
        self.tools.first()
    }

    /// Whether this domain appears in navigation (has at least one tool).
    pub fn is_navigable(&self) -> bool {
        !self.tools.is_empty()
    }
}

/// Returns the first tool of `domain`, if any.
///
/// Free-function form of [`DomainCatalogEntry::default_tool`] for callers
/// holding only a reference to the entry.
pub fn default_tool_for_domain(domain: &DomainCatalogEntry) -> Option<&ToolDescriptor> {
    domain.default_tool()
}

/// Ordered, immutable collection of domains.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DomainCatalog {
    entries: Vec<DomainCatalogEntry>,
}

impl DomainCatalog {
    /// Build a catalog, rejecting repeated domain ids.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateDomain`] for the first repeated id.
    pub fn new(entries: Vec<DomainCatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id()) {
                return Err(CatalogError::DuplicateDomain(entry.id().clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Look up a domain by canonical id.
    pub fn get(&self, id: &DomainId) -> Option<&DomainCatalogEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Look up a domain by raw id string (exact match only).
    pub fn get_by_str(&self, id: &str) -> Option<&DomainCatalogEntry> {
        self.entries.iter().find(|entry| entry.id().as_str() == id)
    }

    pub(crate) fn position(&self, id: &DomainId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    pub(crate) fn position_by_str(&self, id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id().as_str() == id)
    }

    pub(crate) fn entry_at(&self, index: usize) -> &DomainCatalogEntry {
        &self.entries[index]
    }

    /// All domains in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &DomainCatalogEntry> {
        self.entries.iter()
    }

    /// Domains surfaced in navigation (non-empty tool lists), in order.
    pub fn navigable(&self) -> impl Iterator<Item = &DomainCatalogEntry> {
        self.entries.iter().filter(|entry| entry.is_navigable())
    }

    /// Number of domains.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no domains.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
