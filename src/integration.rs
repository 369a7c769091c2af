//! Pure core integration functions.
//!
//! Glue between resolved configuration, the catalog providers and the
//! selection state machine. Only [`load_selector`] performs I/O.

use crate::config::ResolvedConfig;
use crate::model::{AliasTable, AppError, CatalogError, DomainCatalog};
use crate::source::{AliasSpec, CatalogSource};
use crate::state::DomainSelector;

/// Build a selector from a catalog, its alias table and configured extras.
///
/// Extra aliases are appended after the provider's aliases, then the initial
/// domain is selected.
///
/// # Errors
///
/// Any [`CatalogError`]: a duplicate or dangling alias, or an initial domain
/// that does not resolve.
pub fn assemble_selector(
    catalog: DomainCatalog,
    mut aliases: AliasTable,
    extra_aliases: &[AliasSpec],
    initial_domain: &str,
) -> Result<DomainSelector, CatalogError> {
    for alias in extra_aliases {
        aliases.insert(alias.name.as_str(), alias.domain.as_str())?;
    }
    DomainSelector::with_initial_domain(catalog, aliases, initial_domain)
}

/// Load the configured catalog and build the selector.
///
/// # Errors
///
/// Returns `AppError::Source` if the catalog cannot be loaded and
/// `AppError::Catalog` if it does not assemble.
pub fn load_selector(config: &ResolvedConfig) -> Result<DomainSelector, AppError> {
    let source = CatalogSource::from_path(config.catalog_path.clone());
    let (catalog, aliases) = source.load()?;
    let selector = assemble_selector(
        catalog,
        aliases,
        &config.extra_aliases,
        &config.initial_domain,
    )?;

    tracing::info!(
        source = ?source,
        domains = selector.catalog().len(),
        initial_domain = %config.initial_domain,
        "Selector ready"
    );
    Ok(selector)
}
