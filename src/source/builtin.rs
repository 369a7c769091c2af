//! Built-in multi-industry catalog and alias table.

use crate::model::{
    AliasTable, AliasTableError, CatalogError, DomainCatalog, DomainCatalogEntry, ToolDescriptor,
};

/// `(tool id, display name, icon key)`
type ToolRow = (&'static str, &'static str, &'static str);

/// `(domain id, display name, tools)`
type DomainRow = (&'static str, &'static str, &'static [ToolRow]);

const DOMAINS: &[DomainRow] = &[
    (
        "finance",
        "Finance",
        &[
            ("portfolio-optimization", "Portfolio Optimization", "trending-up"),
            ("risk-analysis", "Risk Analysis", "shield-alert"),
            ("fraud-detection", "Fraud Detection", "scan-search"),
            ("deal-pipeline", "Deal Pipeline", "handshake"),
        ],
    ),
    (
        "oil-gas",
        "Oil & Gas",
        &[
            ("drilling-analytics", "Drilling Analytics", "drill"),
            ("pipeline-monitoring", "Pipeline Monitoring", "activity"),
            ("reservoir-modeling", "Reservoir Modeling", "layers"),
            ("predictive-maintenance", "Predictive Maintenance", "wrench"),
        ],
    ),
    (
        "healthcare",
        "Healthcare",
        &[
            ("patient-flow", "Patient Flow", "users"),
            ("clinical-outcomes", "Clinical Outcomes", "heart-pulse"),
            ("claims-processing", "Claims Processing", "file-check"),
        ],
    ),
    (
        "state-government",
        "State Government",
        &[
            ("budget-tracking", "Budget Tracking", "landmark"),
            ("citizen-services", "Citizen Services", "building"),
            ("grant-management", "Grant Management", "file-text"),
        ],
    ),
    (
        "manufacturing",
        "Manufacturing",
        &[
            ("production-planning", "Production Planning", "factory"),
            ("quality-control", "Quality Control", "badge-check"),
            ("predictive-maintenance", "Predictive Maintenance", "wrench"),
        ],
    ),
    (
        "retail",
        "Retail",
        &[
            ("demand-forecasting", "Demand Forecasting", "line-chart"),
            ("inventory-optimization", "Inventory Optimization", "package"),
            ("customer-segmentation", "Customer Segmentation", "pie-chart"),
        ],
    ),
    (
        "telecommunications",
        "Telecommunications",
        &[
            ("network-performance", "Network Performance", "signal"),
            ("churn-prediction", "Churn Prediction", "user-minus"),
        ],
    ),
    (
        "energy-utilities",
        "Energy & Utilities",
        &[
            ("grid-monitoring", "Grid Monitoring", "zap"),
            ("load-forecasting", "Load Forecasting", "gauge"),
            ("outage-management", "Outage Management", "alert-triangle"),
        ],
    ),
    (
        "education",
        "Education",
        &[
            ("enrollment-analytics", "Enrollment Analytics", "graduation-cap"),
            ("student-performance", "Student Performance", "book-open"),
        ],
    ),
    (
        "logistics",
        "Logistics",
        &[
            ("route-optimization", "Route Optimization", "map"),
            ("fleet-tracking", "Fleet Tracking", "truck"),
            ("warehouse-operations", "Warehouse Operations", "warehouse"),
        ],
    ),
];

const ALIASES: &[(&str, &str)] = &[
    ("Finance", "finance"),
    ("Oil & Gas", "oil-gas"),
    ("Oil and Gas", "oil-gas"),
    ("Healthcare", "healthcare"),
    ("Health Care", "healthcare"),
    ("State Government", "state-government"),
    ("Manufacturing", "manufacturing"),
    ("Retail", "retail"),
    ("Telecommunications", "telecommunications"),
    ("Telecom", "telecommunications"),
    ("Energy & Utilities", "energy-utilities"),
    ("Energy and Utilities", "energy-utilities"),
    ("Education", "education"),
    ("Logistics", "logistics"),
    ("Supply Chain", "logistics"),
];

/// Display name of the domain selected when nothing else is configured.
pub const DEFAULT_INITIAL_DOMAIN: &str = "Finance";

/// The built-in domain catalog.
///
/// # Errors
///
/// Only if the built-in table itself is inconsistent.
pub fn builtin_catalog() -> Result<DomainCatalog, CatalogError> {
    let entries = DOMAINS
        .iter()
        .map(|&(id, name, tools)| {
            let tools = tools
                .iter()
                .map(|&(id, name, icon)| ToolDescriptor::new(id, name, icon))
                .collect::<Result<Vec<_>, _>>()?;
            DomainCatalogEntry::new(id, name, tools)
        })
        .collect::<Result<Vec<_>, _>>()?;

    DomainCatalog::new(entries)
}

/// The built-in alias table.
///
/// # Errors
///
/// Only if the built-in table itself is inconsistent.
pub fn builtin_aliases() -> Result<AliasTable, AliasTableError> {
    AliasTable::from_pairs(ALIASES.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DomainSelector;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = builtin_catalog().expect("builtin catalog validates");
        assert_eq!(catalog.len(), DOMAINS.len());
        assert_eq!(catalog.navigable().count(), catalog.len());
    }

    #[test]
    fn builtin_aliases_target_builtin_domains() {
        let catalog = builtin_catalog().expect("builtin catalog validates");
        let aliases = builtin_aliases().expect("builtin aliases validate");
        assert_eq!(aliases.validate_against(&catalog), Ok(()));
    }

    #[test]
    fn every_display_name_resolves_to_its_domain() {
        let catalog = builtin_catalog().expect("builtin catalog validates");
        let aliases = builtin_aliases().expect("builtin aliases validate");
        let selector = DomainSelector::new(catalog.clone(), aliases).expect("valid selector");

        for entry in catalog.iter() {
            let (resolved, _) = selector
                .resolve_domain(entry.name())
                .unwrap_or_else(|| panic!("{} should resolve", entry.name()));
            assert_eq!(resolved.id(), entry.id());
        }
    }

    #[test]
    fn default_initial_domain_resolves() {
        let selector = DomainSelector::with_initial_domain(
            builtin_catalog().expect("builtin catalog validates"),
            builtin_aliases().expect("builtin aliases validate"),
            DEFAULT_INITIAL_DOMAIN,
        );
        assert!(selector.is_ok());
    }
}
