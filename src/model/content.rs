//! Display content handed to the presentation layer for a domain.

use serde::{Deserialize, Serialize};

/// Direction of a KPI compared to the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Improving.
    Up,
    /// Worsening.
    Down,
    /// No significant change.
    Flat,
}

/// A static KPI card ("Total Revenue: $4.2M, up").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiCard {
    /// Card title.
    pub label: String,
    /// Pre-formatted value.
    pub value: String,
    /// Period-over-period direction.
    pub trend: Trend,
}

/// One row of a domain's deals/projects table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealRecord {
    /// Deal or project name.
    pub name: String,
    /// Pipeline stage.
    pub stage: String,
    /// Value in whole US dollars.
    pub amount: u64,
}

/// Everything a tool-detail view needs for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DomainContent {
    /// KPI cards in display order.
    pub kpis: Vec<KpiCard>,
    /// Table rows, paginated by the caller.
    pub deals: Vec<DealRecord>,
}
