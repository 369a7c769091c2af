//! Error types for dashnav.
//!
//! This module defines a hierarchical error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the binary
//!   - [`ConfigError`] - Config file read/parse failures
//!   - [`SourceError`] - Catalog file read/parse failures
//!   - [`CatalogError`] - Catalog or alias table fails validation
//!   - [`SelectionError`] - A domain name or tool id did not resolve
//!   - [`PaginationError`] - Invalid page size
//!   - [`FetchError`] - No display content for a domain
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!
//! # Recovery Strategy
//!
//! Selection errors are **non-fatal**: the selector leaves its state untouched and the
//! presentation layer decides on a fallback. Catalog, alias table and page size errors are
//! programmer/configuration errors and are reported at construction time.

use std::path::PathBuf;
use thiserror::Error;

use super::identifiers::{DomainId, InvalidDomainId, InvalidToolId, ToolId};

pub use crate::config::ConfigError;
pub use crate::logging::LoggingError;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog file could not be loaded.
    #[error("Catalog source error: {0}")]
    Source(#[from] SourceError),

    /// Catalog or alias table is inconsistent.
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// A selection request did not resolve.
    #[error("Selection failed: {0}")]
    Selection(#[from] SelectionError),

    /// Invalid pagination arguments.
    #[error("Pagination error: {0}")]
    Pagination(#[from] PaginationError),

    /// Display content unavailable.
    #[error("Content error: {0}")]
    Fetch(#[from] FetchError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),
}

/// Validation failures while building a [`crate::model::DomainCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two domains share the same id.
    #[error("Duplicate domain id: {0}")]
    DuplicateDomain(DomainId),

    /// Two tools inside one domain share the same id.
    #[error("Duplicate tool id {tool} in domain {domain}")]
    DuplicateTool {
        /// Owning domain.
        domain: DomainId,
        /// Repeated tool id.
        tool: ToolId,
    },

    /// A domain id is not canonical.
    #[error(transparent)]
    InvalidDomainId(#[from] InvalidDomainId),

    /// A tool id is malformed.
    #[error(transparent)]
    InvalidToolId(#[from] InvalidToolId),

    /// The alias table is inconsistent.
    #[error(transparent)]
    Alias(#[from] AliasTableError),

    /// The configured initial domain does not resolve.
    #[error("Initial domain {0:?} does not match any domain in the catalog")]
    UnknownInitialDomain(String),
}

/// Validation failures while building an [`crate::model::AliasTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasTableError {
    /// Two keys collapse to the same normalized spelling.
    #[error("Alias keys {first:?} and {second:?} both normalize to {normalized:?}")]
    DuplicateNormalizedKey {
        /// Key declared first.
        first: String,
        /// Key declared later.
        second: String,
        /// Shared normalized form.
        normalized: String,
    },

    /// An alias points at a domain id missing from the catalog.
    #[error("Alias {alias:?} targets unknown domain {target}")]
    UnknownTarget {
        /// Alias key.
        alias: String,
        /// Missing target id.
        target: DomainId,
    },

    /// An alias target is not a canonical domain id.
    #[error("Alias {alias:?} has an invalid target: {source}")]
    InvalidTarget {
        /// Alias key.
        alias: String,
        /// Why the target was rejected.
        #[source]
        source: InvalidDomainId,
    },
}

/// A selection request that matched nothing. State is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No alias, normalized alias, or catalog id matched the raw name.
    #[error("No domain matches {raw:?}")]
    DomainResolution {
        /// The string supplied by the caller.
        raw: String,
    },

    /// The tool id is not part of the active domain.
    #[error("Tool {tool_id:?} is not part of domain {domain}")]
    ToolResolution {
        /// The requested tool id.
        tool_id: String,
        /// The active domain it was looked up in.
        domain: DomainId,
    },

    /// A tool was requested before any domain was selected.
    #[error("Cannot select tool {tool_id:?}: no active domain")]
    NoActiveDomain {
        /// The requested tool id.
        tool_id: String,
    },
}

/// Invalid pagination input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Items per page must be at least one.
    #[error("Items per page must be positive, got {0}")]
    InvalidPageSize(i64),
}

/// Failures of the display content collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The source has no content for this domain.
    #[error("No content available for domain {0}")]
    UnknownDomain(DomainId),
}

/// Errors loading a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// File could not be read.
    #[error("Failed to read catalog file at {path}: {reason}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// File contents did not parse.
    #[error("Invalid catalog file {path}: {reason}")]
    Parse {
        /// Path with invalid contents.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// Extension is neither `.toml` nor `.json`.
    #[error("Unsupported catalog format: {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    /// File parsed but failed validation.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
