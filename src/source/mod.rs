//! Catalog and content sources.
//!
//! This module provides the collaborators the selection core consumes:
//! - Built-in catalog and alias table
//! - File-backed catalog (TOML or JSON)
//! - Display content for tool-detail views
//! - Unified CatalogSource enum for the two catalog providers

use crate::model::{AliasTable, DomainCatalog, SourceError};
use std::path::PathBuf;

pub mod builtin;
pub mod catalog_file;
pub mod content;

pub use builtin::{builtin_aliases, builtin_catalog, DEFAULT_INITIAL_DOMAIN};
pub use catalog_file::{load_catalog_file, AliasSpec, CatalogFile, CatalogFormat};
pub use content::{ContentSource, StaticContentSource};

/// Where the domain catalog and alias table come from.
///
/// Sum type enforces exactly one provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Compiled-in catalog.
    Builtin,
    /// Catalog file at the given path.
    File(PathBuf),
}

impl CatalogSource {
    /// Pick the file provider when a path is configured, else the built-in one.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => CatalogSource::File(path),
            None => CatalogSource::Builtin,
        }
    }

    /// Load the catalog and alias table.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the file cannot be read, parsed or validated.
    pub fn load(&self) -> Result<(DomainCatalog, AliasTable), SourceError> {
        match self {
            CatalogSource::Builtin => {
                let catalog = builtin_catalog()?;
                let aliases = builtin_aliases().map_err(crate::model::CatalogError::from)?;
                Ok((catalog, aliases))
            }
            CatalogSource::File(path) => load_catalog_file(path.clone()),
        }
    }
}
