//! Text presentation layer.
//!
//! Renders selector state, catalogs, content and paginated tables as plain
//! text for the CLI. Icons and colors are left to richer front ends.

pub mod table;

use crate::model::{DealRecord, DomainCatalog, DomainContent, Trend};
use crate::state::{DomainSelector, PageMarker, PaginationState, SelectionPhase};

use table::{format_usd, render_columns};

/// Page bar with the current page bracketed: `1 … 5 [6] 7 … 10`.
pub fn render_page_bar(markers: &[PageMarker], current_page: usize) -> String {
    markers
        .iter()
        .map(|marker| match marker {
            PageMarker::Page(n) if *n == current_page => format!("[{n}]"),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per navigable domain: id, display name, tool ids.
pub fn render_domain_list(catalog: &DomainCatalog) -> String {
    let rows: Vec<Vec<String>> = catalog
        .navigable()
        .map(|domain| {
            let tools: Vec<&str> = domain.tools().iter().map(|t| t.id().as_str()).collect();
            vec![
                domain.id().to_string(),
                domain.name().to_string(),
                tools.join(", "),
            ]
        })
        .collect();
    render_columns(&rows)
}

/// Summary of the selector: active domain, display mode, tool.
pub fn render_selection(selector: &DomainSelector) -> String {
    let Some(domain) = selector.active_domain() else {
        return "Domain: (none)".to_string();
    };

    let mode = match selector.phase() {
        SelectionPhase::ToolDetail => "tool detail",
        SelectionPhase::DomainOverview | SelectionPhase::NoDomain => "overview",
    };

    let tool = match (selector.active_tool(), selector.default_tool()) {
        (Some(tool), _) => format!("{} ({})", tool.name(), tool.id()),
        (None, Some(default)) => format!("(none, default {})", default.id()),
        (None, None) => "(none)".to_string(),
    };

    let rows = vec![
        vec![
            "Domain:".to_string(),
            format!("{} ({})", domain.name(), domain.id()),
        ],
        vec!["Mode:".to_string(), mode.to_string()],
        vec!["Tool:".to_string(), tool],
    ];
    render_columns(&rows)
}

/// KPI cards, one per line, with a trend arrow.
pub fn render_content(content: &DomainContent) -> String {
    let rows: Vec<Vec<String>> = content
        .kpis
        .iter()
        .map(|kpi| {
            let arrow = match kpi.trend {
                Trend::Up => "↑",
                Trend::Down => "↓",
                Trend::Flat => "→",
            };
            vec![arrow.to_string(), kpi.label.clone(), kpi.value.clone()]
        })
        .collect();
    render_columns(&rows)
}

/// One page of deals followed by a "showing" line and the page bar.
pub fn render_deals_page(page: &PaginationState<'_, DealRecord>) -> String {
    let rows: Vec<Vec<String>> = page
        .current_items()
        .iter()
        .map(|deal| vec![deal.name.clone(), deal.stage.clone(), format_usd(deal.amount)])
        .collect();

    let showing = match page.item_range() {
        Some((first, last)) => format!("Showing {first}-{last} of {}", page.total_items()),
        None => "No deals".to_string(),
    };
    let bar = render_page_bar(page.page_numbers(), page.current_page());

    if rows.is_empty() {
        format!("{showing}\n{bar}")
    } else {
        format!("{}\n{showing}\n{bar}", render_columns(&rows))
    }
}
