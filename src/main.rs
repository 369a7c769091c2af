//! Dashboard navigator - Entry Point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::mpsc;
use tracing::{info, warn};

use dashnav::logging::Diagnostic;
use dashnav::model::{AppError, PaginationError};
use dashnav::source::{ContentSource, StaticContentSource};
use dashnav::state::{page_numbers, paginate, DomainSelector, PageSize};
use dashnav::view;

/// Dashboard navigator - domain/tool selection and pagination
#[derive(Parser, Debug)]
#[command(name = "dashnav")]
#[command(version)]
#[command(about = "Navigate industry dashboards: select domains and tools, page through tables")]
pub struct Args {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file (.toml or .json) replacing the built-in catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Domain selected at start (any alias spelling)
    #[arg(short, long, global = true)]
    pub domain: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List navigable domains
    Domains,

    /// Select a domain (and optionally a tool) and show the result
    Select {
        /// Domain name; keeps the initial domain when omitted
        domain: Option<String>,

        /// Tool id within the selected domain
        #[arg(short, long)]
        tool: Option<String>,
    },

    /// Page through the active domain's deals
    Deals {
        /// Requested page; clamped into range
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Rows per page; configured value when omitted
        #[arg(long, allow_negative_numbers = true)]
        per_page: Option<i64>,
    },

    /// Print the page bar for an arbitrary item count
    Pages {
        /// Total number of items
        #[arg(long)]
        items: usize,

        /// Rows per page; configured value when omitted
        #[arg(long, allow_negative_numbers = true)]
        per_page: Option<i64>,

        /// Requested page; clamped into range
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        page: i64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = dashnav::config::load_config_with_precedence(args.config.clone())?;
        let merged = dashnav::config::merge_config(config_file)?;
        let with_env = dashnav::config::apply_env_overrides(merged)?;
        dashnav::config::apply_cli_overrides(with_env, args.catalog.clone(), args.domain.clone())
    };

    let (diagnostics_tx, diagnostics_rx) = mpsc::channel();
    dashnav::logging::init_with_diagnostics(&config.log_file_path, diagnostics_tx)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let mut selector = dashnav::integration::load_selector(&config)?;
    let outcome = run(&args.command, &mut selector, config.items_per_page);

    for line in diagnostic_lines(&outcome, diagnostics_rx.try_iter()) {
        eprintln!("{line}");
    }

    println!("{}", outcome?);
    Ok(())
}

/// Diagnostics to show on stderr.
///
/// A failed command is reported once, through its returned error.
fn diagnostic_lines(
    outcome: &Result<String, AppError>,
    diagnostics: impl IntoIterator<Item = Diagnostic>,
) -> Vec<String> {
    match outcome {
        Ok(_) => diagnostics.into_iter().map(|d| d.to_string()).collect(),
        Err(_) => Vec::new(),
    }
}

fn page_size_or(per_page: Option<i64>, configured: PageSize) -> Result<PageSize, PaginationError> {
    per_page.map_or(Ok(configured), PageSize::try_from)
}

fn run(
    command: &Command,
    selector: &mut DomainSelector,
    configured_page_size: PageSize,
) -> Result<String, AppError> {
    match command {
        Command::Domains => Ok(view::render_domain_list(selector.catalog())),

        Command::Select { domain, tool } => {
            if let Some(domain) = domain {
                selector.select_domain(domain)?;
            }
            if let Some(tool) = tool {
                selector.select_tool(tool)?;
            }

            let mut output = view::render_selection(selector);
            if let Some(active) = selector.active_domain() {
                match StaticContentSource::builtin().fetch(active.id()) {
                    Ok(content) if !content.kpis.is_empty() => {
                        output.push_str("\n\n");
                        output.push_str(&view::render_content(&content));
                    }
                    Ok(_) => {}
                    Err(error) => warn!(%error, "No display content; showing selection only"),
                }
            }
            Ok(output)
        }

        Command::Deals { page, per_page } => {
            let page_size = page_size_or(*per_page, configured_page_size)?;
            let Some(active) = selector.active_domain() else {
                return Ok("No domain selected".to_string());
            };
            let content = StaticContentSource::builtin().fetch(active.id())?;
            let state = paginate(&content.deals, page_size, *page);
            Ok(view::render_deals_page(&state))
        }

        Command::Pages {
            items,
            per_page,
            page,
        } => {
            let page_size = page_size_or(*per_page, configured_page_size)?;
            let total = dashnav::state::pagination::total_pages(*items, page_size);
            let current = dashnav::state::pagination::clamp_page(*page, total);
            Ok(view::render_page_bar(&page_numbers(total, current), current))
        }
    }
}
