//! Display content collaborator.
//!
//! The presentation layer asks a [`ContentSource`] for the content of the
//! active domain. The selection core never depends on the result; no retry
//! or caching happens here.

use std::collections::HashMap;

use crate::model::{DealRecord, DomainContent, DomainId, FetchError, KpiCard, Trend};

/// Request/response source of display content keyed by domain.
pub trait ContentSource {
    /// Content for `domain`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::UnknownDomain`] if the source has nothing for it.
    fn fetch(&self, domain: &DomainId) -> Result<DomainContent, FetchError>;
}

/// In-memory content, by default the built-in mock data.
#[derive(Debug, Clone, Default)]
pub struct StaticContentSource {
    content: HashMap<DomainId, DomainContent>,
}

impl StaticContentSource {
    /// Source serving exactly `content`.
    pub fn new(content: HashMap<DomainId, DomainContent>) -> Self {
        Self { content }
    }

    /// Source serving the built-in mock data for every built-in domain.
    pub fn builtin() -> Self {
        let content = MOCK_KPIS
            .iter()
            .filter_map(|&(domain, kpis)| {
                let id = DomainId::new(domain).ok()?;
                let deals: Vec<DealRecord> = MOCK_DEALS
                    .iter()
                    .find(|&&(deal_domain, _)| deal_domain == domain)
                    .map(|&(_, rows)| rows.iter().map(deal).collect())
                    .unwrap_or_default();
                Some((
                    id,
                    DomainContent {
                        kpis: kpis.iter().map(kpi).collect(),
                        deals,
                    },
                ))
            })
            .collect();
        Self { content }
    }
}

impl ContentSource for StaticContentSource {
    fn fetch(&self, domain: &DomainId) -> Result<DomainContent, FetchError> {
        self.content
            .get(domain)
            .cloned()
            .ok_or_else(|| FetchError::UnknownDomain(domain.clone()))
    }
}

fn kpi(&(label, value, trend): &(&str, &str, Trend)) -> KpiCard {
    KpiCard {
        label: label.to_string(),
        value: value.to_string(),
        trend,
    }
}

fn deal(&(name, stage, amount): &(&str, &str, u64)) -> DealRecord {
    DealRecord {
        name: name.to_string(),
        stage: stage.to_string(),
        amount,
    }
}

type KpiRow = (&'static str, &'static str, Trend);
type DealRow = (&'static str, &'static str, u64);

const MOCK_KPIS: &[(&str, &[KpiRow])] = &[
    (
        "finance",
        &[
            ("Assets Under Management", "$4.2B", Trend::Up),
            ("Portfolio Return (YTD)", "8.7%", Trend::Up),
            ("Value at Risk (95%)", "$12.4M", Trend::Down),
        ],
    ),
    (
        "oil-gas",
        &[
            ("Daily Production", "142k bbl", Trend::Up),
            ("Rig Utilization", "87%", Trend::Flat),
            ("Pipeline Incidents", "3", Trend::Down),
        ],
    ),
    (
        "healthcare",
        &[
            ("Bed Occupancy", "82%", Trend::Up),
            ("Avg. Length of Stay", "4.3 days", Trend::Down),
            ("Readmission Rate", "11.2%", Trend::Down),
        ],
    ),
    (
        "state-government",
        &[
            ("Budget Executed", "61%", Trend::Up),
            ("Open Service Requests", "1,284", Trend::Down),
            ("Grants Disbursed", "$38M", Trend::Up),
        ],
    ),
    (
        "manufacturing",
        &[
            ("Overall Equipment Effectiveness", "78%", Trend::Up),
            ("Defect Rate", "0.8%", Trend::Down),
            ("Unplanned Downtime", "14 h", Trend::Flat),
        ],
    ),
    (
        "retail",
        &[
            ("Same-Store Sales", "+4.1%", Trend::Up),
            ("Inventory Turnover", "6.2x", Trend::Flat),
            ("Stockout Rate", "2.9%", Trend::Down),
        ],
    ),
    (
        "telecommunications",
        &[
            ("Network Uptime", "99.97%", Trend::Flat),
            ("Monthly Churn", "1.4%", Trend::Down),
            ("ARPU", "$52.10", Trend::Up),
        ],
    ),
    (
        "energy-utilities",
        &[
            ("Peak Load", "18.2 GW", Trend::Up),
            ("Renewable Share", "34%", Trend::Up),
            ("SAIDI", "96 min", Trend::Down),
        ],
    ),
    (
        "education",
        &[
            ("Enrollment", "24,310", Trend::Up),
            ("Graduation Rate", "88%", Trend::Flat),
            ("Student/Teacher Ratio", "16:1", Trend::Flat),
        ],
    ),
    (
        "logistics",
        &[
            ("On-Time Delivery", "94.6%", Trend::Up),
            ("Fleet Utilization", "81%", Trend::Flat),
            ("Cost per Mile", "$1.92", Trend::Down),
        ],
    ),
];

const MOCK_DEALS: &[(&str, &[DealRow])] = &[
    (
        "finance",
        &[
            ("Harbor Bancorp Acquisition", "Due Diligence", 420_000_000),
            ("Summit Credit Facility", "Term Sheet", 75_000_000),
            ("Northwind Bond Issuance", "Closed", 250_000_000),
            ("Redwood Equity Raise", "Prospecting", 40_000_000),
            ("Atlas Fund Restructuring", "Negotiation", 130_000_000),
            ("Keystone Refinancing", "Closed", 90_000_000),
            ("Meridian Pension Mandate", "Due Diligence", 610_000_000),
            ("Blue Ridge Leveraged Loan", "Term Sheet", 55_000_000),
            ("Cobalt Fintech Series C", "Negotiation", 32_000_000),
            ("Granite REIT Spin-off", "Prospecting", 280_000_000),
            ("Lakeshore Municipal Notes", "Closed", 18_000_000),
            ("Evergreen Treasury Swap", "Negotiation", 200_000_000),
        ],
    ),
    (
        "oil-gas",
        &[
            ("Permian Block 7 Farm-in", "Negotiation", 310_000_000),
            ("Gulf Coast LNG Offtake", "Term Sheet", 1_200_000_000),
            ("North Sea Decommissioning", "Prospecting", 95_000_000),
            ("Bakken Midstream JV", "Due Diligence", 460_000_000),
            ("Offshore Rig Charter", "Closed", 60_000_000),
            ("Pipeline Integrity Program", "Closed", 22_000_000),
            ("Carbon Capture Pilot", "Prospecting", 48_000_000),
        ],
    ),
    (
        "healthcare",
        &[
            ("Regional Clinic Network", "Due Diligence", 85_000_000),
            ("Imaging Center Expansion", "Negotiation", 12_000_000),
            ("EHR Migration Contract", "Closed", 9_500_000),
            ("Telehealth Platform", "Term Sheet", 27_000_000),
            ("Pharmacy Benefit Renewal", "Prospecting", 140_000_000),
            ("Oncology Wing Build-out", "Negotiation", 64_000_000),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::builtin::builtin_catalog;

    fn id(raw: &str) -> DomainId {
        DomainId::new(raw).expect("valid domain id")
    }

    #[test]
    fn builtin_covers_every_builtin_domain() {
        let source = StaticContentSource::builtin();
        let catalog = builtin_catalog().expect("builtin catalog validates");
        for entry in catalog.iter() {
            let content = source.fetch(entry.id()).expect("content for builtin domain");
            assert_eq!(content.kpis.len(), 3, "{} kpis", entry.id());
        }
    }

    #[test]
    fn finance_has_deals_to_paginate() {
        let content = StaticContentSource::builtin()
            .fetch(&id("finance"))
            .expect("finance content");
        assert_eq!(content.deals.len(), 12);
        assert_eq!(content.deals[0].name, "Harbor Bancorp Acquisition");
    }

    #[test]
    fn domains_without_deals_have_empty_table() {
        let content = StaticContentSource::builtin()
            .fetch(&id("education"))
            .expect("education content");
        assert!(content.deals.is_empty());
    }

    #[test]
    fn unknown_domain_is_an_error() {
        let source = StaticContentSource::new(HashMap::new());
        assert_eq!(
            source.fetch(&id("mining")),
            Err(FetchError::UnknownDomain(id("mining")))
        );
    }
}
