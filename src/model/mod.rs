//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod alias;
pub mod catalog;
pub mod content;
pub mod error;
pub mod identifiers;

// Re-export for convenience
pub use alias::{normalize_domain_name, AliasTable};
pub use catalog::{default_tool_for_domain, DomainCatalog, DomainCatalogEntry, ToolDescriptor};
pub use content::{DealRecord, DomainContent, KpiCard, Trend};
pub use error::{
    AliasTableError, AppError, CatalogError, FetchError, PaginationError, SelectionError,
    SourceError,
};
pub use identifiers::{DomainId, InvalidDomainId, InvalidToolId, ToolId};
