//! File-backed catalog provider.
//!
//! Reads a domain catalog and its alias table from a `.toml` or `.json`
//! file. Parsing happens at this boundary; callers receive validated
//! [`DomainCatalog`] and [`AliasTable`] values.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::model::{
    AliasTable, CatalogError, DomainCatalog, DomainCatalogEntry, SourceError, ToolDescriptor,
};

/// Supported catalog file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// TOML document.
    Toml,
    /// JSON document.
    Json,
}

impl CatalogFormat {
    /// Infer the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// One tool as written in a catalog file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ToolSpec {
    /// Tool id.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Icon key; empty when omitted.
    #[serde(default)]
    pub icon: String,
}

/// One domain as written in a catalog file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DomainSpec {
    /// Canonical id.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Tools in display order.
    #[serde(default)]
    pub tools: Vec<ToolSpec>,
}

/// One alias entry (`name` is the spelling variant, `domain` the canonical id).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AliasSpec {
    /// Display-name variant.
    pub name: String,
    /// Canonical domain id it maps to.
    pub domain: String,
}

/// Catalog file structure.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    /// Domains in display order.
    pub domains: Vec<DomainSpec>,
    /// Alias table in declaration order.
    #[serde(default)]
    pub aliases: Vec<AliasSpec>,
}

impl CatalogFile {
    /// Validate into a catalog and alias table.
    ///
    /// # Errors
    ///
    /// Any [`CatalogError`] raised while building the catalog or alias table.
    pub fn into_parts(self) -> Result<(DomainCatalog, AliasTable), CatalogError> {
        let entries = self
            .domains
            .into_iter()
            .map(|domain| {
                let tools = domain
                    .tools
                    .into_iter()
                    .map(|tool| ToolDescriptor::new(tool.id, tool.name, tool.icon))
                    .collect::<Result<Vec<_>, _>>()?;
                DomainCatalogEntry::new(domain.id, domain.name, tools)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = DomainCatalog::new(entries)?;
        let aliases = AliasTable::from_pairs(
            self.aliases
                .into_iter()
                .map(|alias| (alias.name, alias.domain)),
        )?;

        Ok((catalog, aliases))
    }
}

/// Parse catalog file contents in the given format.
///
/// `path` is only used for error messages.
///
/// # Errors
///
/// - [`SourceError::Parse`] for malformed contents
/// - [`SourceError::Catalog`] for contents that fail validation
pub fn parse_catalog(
    contents: &str,
    format: CatalogFormat,
    path: &Path,
) -> Result<(DomainCatalog, AliasTable), SourceError> {
    let parse_error = |reason: String| SourceError::Parse {
        path: path.to_path_buf(),
        reason,
    };

    let file: CatalogFile = match format {
        CatalogFormat::Toml => toml::from_str(contents).map_err(|e| parse_error(e.to_string()))?,
        CatalogFormat::Json => {
            serde_json::from_str(contents).map_err(|e| parse_error(e.to_string()))?
        }
    };

    Ok(file.into_parts()?)
}

/// Load a catalog file, choosing the parser from its extension.
///
/// # Errors
///
/// - [`SourceError::UnsupportedFormat`] for extensions other than `.toml`/`.json`
/// - [`SourceError::Read`] if the file cannot be read
/// - [`SourceError::Parse`] / [`SourceError::Catalog`] as for [`parse_catalog`]
pub fn load_catalog_file(
    path: impl Into<PathBuf>,
) -> Result<(DomainCatalog, AliasTable), SourceError> {
    let path = path.into();

    let format = CatalogFormat::from_path(&path)
        .ok_or_else(|| SourceError::UnsupportedFormat(path.clone()))?;

    let contents = std::fs::read_to_string(&path).map_err(|e| SourceError::Read {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let parts = parse_catalog(&contents, format, &path)?;
    tracing::debug!(
        path = %path.display(),
        domains = parts.0.len(),
        aliases = parts.1.len(),
        "Loaded catalog file"
    );
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    const TOML_CATALOG: &str = r#"
[[domains]]
id = "finance"
name = "Finance"

[[domains.tools]]
id = "portfolio-optimization"
name = "Portfolio Optimization"
icon = "trending-up"

[[domains.tools]]
id = "risk-analysis"
name = "Risk Analysis"

[[domains]]
id = "state-government"
name = "State Government"

[[domains.tools]]
id = "budget-tracking"
name = "Budget Tracking"
icon = "landmark"

[[aliases]]
name = "State Government"
domain = "state-government"
"#;

    fn path() -> PathBuf {
        PathBuf::from("catalog.toml")
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("a/b.TOML")),
            Some(CatalogFormat::Toml)
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("a.json")),
            Some(CatalogFormat::Json)
        );
        assert_eq!(CatalogFormat::from_path(Path::new("a.yaml")), None);
        assert_eq!(CatalogFormat::from_path(Path::new("catalog")), None);
    }

    #[test]
    fn parses_toml_catalog() {
        let (catalog, aliases) =
            parse_catalog(TOML_CATALOG, CatalogFormat::Toml, &path()).expect("valid catalog");

        assert_eq!(catalog.len(), 2);
        let finance = catalog.get_by_str("finance").expect("finance present");
        assert_eq!(finance.tools().len(), 2);
        assert_eq!(finance.tools()[1].icon(), "");
        assert_eq!(
            aliases.lookup_exact("State Government").map(|id| id.as_str()),
            Some("state-government")
        );
    }

    #[test]
    fn parses_json_catalog() {
        let json = r#"{
            "domains": [
                { "id": "retail", "name": "Retail",
                  "tools": [{ "id": "inventory", "name": "Inventory", "icon": "box" }] }
            ]
        }"#;

        let (catalog, aliases) =
            parse_catalog(json, CatalogFormat::Json, Path::new("c.json")).expect("valid catalog");

        assert_eq!(catalog.len(), 1);
        assert!(aliases.is_empty());
    }

    #[test]
    fn rejects_unknown_fields() {
        let toml = r#"
[[domains]]
id = "finance"
name = "Finance"
colour = "blue"
"#;
        let result = parse_catalog(toml, CatalogFormat::Toml, &path());
        assert!(matches!(result, Err(SourceError::Parse { .. })));
    }

    #[test]
    fn rejects_duplicate_normalized_aliases() {
        let toml = r#"
[[domains]]
id = "finance"
name = "Finance"

[[aliases]]
name = "Finance"
domain = "finance"

[[aliases]]
name = "FINANCE"
domain = "finance"
"#;
        let result = parse_catalog(toml, CatalogFormat::Toml, &path());
        assert!(matches!(
            result,
            Err(SourceError::Catalog(CatalogError::Alias(_)))
        ));
    }

    #[test]
    fn rejects_duplicate_domains() {
        let toml = r#"
[[domains]]
id = "finance"
name = "Finance"

[[domains]]
id = "finance"
name = "Finance again"
"#;
        let result = parse_catalog(toml, CatalogFormat::Toml, &path());
        assert!(matches!(
            result,
            Err(SourceError::Catalog(CatalogError::DuplicateDomain(_)))
        ));
    }

    #[test]
    fn load_rejects_unsupported_extension() {
        let result = load_catalog_file("/tmp/catalog.yaml");
        assert!(matches!(result, Err(SourceError::UnsupportedFormat(_))));
    }

    #[test]
    fn load_reports_missing_file() {
        let result = load_catalog_file("/nonexistent/dashnav/catalog.toml");
        assert!(matches!(result, Err(SourceError::Read { .. })));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let file = env::temp_dir().join("dashnav_test_catalog.toml");
        fs::write(&file, TOML_CATALOG).expect("Failed to write test catalog");

        let result = load_catalog_file(&file);

        fs::remove_file(&file).ok();
        let (catalog, _) = result.expect("catalog loads");
        assert_eq!(catalog.len(), 2);
    }
}
