//! Domain/tool selection state machine.
//!
//! Resolves free-form domain names to catalog entries and tracks which domain
//! and tool are active and whether the UI shows the domain overview or a tool
//! detail view.
//!
//! ```text
//!              select_domain(ok)              select_tool(ok)
//!   NoDomain ───────────────────▶ DomainOverview ─────────────▶ ToolDetail
//!                                      ▲   ▲                        │
//!                                      │   └── select_domain(ok) ───┘
//!                                      └── select_domain(ok) (reset, even for same domain)
//! ```
//!
//! Failed resolutions return an error and leave the state untouched.

use tracing::{debug, warn};

use crate::model::{
    AliasTable, CatalogError, DomainCatalog, DomainCatalogEntry, DomainId, SelectionError,
    ToolDescriptor, ToolId,
};

/// Which view the presentation layer should mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Domain landing page.
    #[default]
    DomainOverview,
    /// A single tool's detail page.
    ToolDetail,
}

/// Coarse state of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Nothing selected yet.
    NoDomain,
    /// A domain is active, no tool.
    DomainOverview,
    /// A domain and one of its tools are active.
    ToolDetail,
}

/// Whether a successful operation moved the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The state differs from before the call.
    Changed,
    /// The request was valid but the state already matched it.
    Unchanged,
}

/// Which resolution rule matched a raw domain name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionRule {
    /// Exact alias-table key.
    ExactAlias,
    /// Alias-table key after normalization.
    NormalizedAlias,
    /// Catalog id.
    CatalogId,
}

/// Active domain/tool, as positions into the owning catalog.
///
/// # Cardinality
/// - `None`: 1 state
/// - `Overview`: domain_count states
/// - `Tool`: sum of tool counts over all domains
/// - Precision: 1.0 (a tool can only be active inside its own domain)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Focus {
    #[default]
    None,
    Overview {
        domain: usize,
    },
    Tool {
        domain: usize,
        tool: usize,
    },
}

impl Focus {
    fn domain(self) -> Option<usize> {
        match self {
            Focus::None => None,
            Focus::Overview { domain } | Focus::Tool { domain, .. } => Some(domain),
        }
    }
}

/// Snapshot of the selection, comparable for equality.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Last raw string that successfully selected a domain.
    active_domain_name: String,
    focus: Focus,
}

impl SelectionState {
    /// Raw name supplied with the last successful `select_domain`.
    pub fn active_domain_name(&self) -> &str {
        &self.active_domain_name
    }

    /// Coarse phase of this snapshot.
    pub fn phase(&self) -> SelectionPhase {
        match self.focus {
            Focus::None => SelectionPhase::NoDomain,
            Focus::Overview { .. } => SelectionPhase::DomainOverview,
            Focus::Tool { .. } => SelectionPhase::ToolDetail,
        }
    }
}

/// The selection state machine, owning its catalog and alias table.
#[derive(Debug, Clone)]
pub struct DomainSelector {
    catalog: DomainCatalog,
    aliases: AliasTable,
    state: SelectionState,
}

impl DomainSelector {
    /// Create a selector with no active domain.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Alias`] if an alias targets a domain missing
    /// from `catalog`.
    pub fn new(catalog: DomainCatalog, aliases: AliasTable) -> Result<Self, CatalogError> {
        aliases.validate_against(&catalog)?;
        Ok(Self {
            catalog,
            aliases,
            state: SelectionState::default(),
        })
    }

    /// Create a selector already showing the overview of `initial_domain`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Alias`] as for [`DomainSelector::new`]
    /// - [`CatalogError::UnknownInitialDomain`] if `initial_domain` does not resolve
    pub fn with_initial_domain(
        catalog: DomainCatalog,
        aliases: AliasTable,
        initial_domain: &str,
    ) -> Result<Self, CatalogError> {
        let mut selector = Self::new(catalog, aliases)?;
        selector
            .select_domain(initial_domain)
            .map_err(|_| CatalogError::UnknownInitialDomain(initial_domain.to_string()))?;
        Ok(selector)
    }

    /// Resolve a raw domain name without changing state.
    ///
    /// Rules, first match wins:
    /// 1. exact alias-table key
    /// 2. normalized alias-table key
    /// 3. exact catalog id
    pub fn resolve_domain(&self, raw: &str) -> Option<(&DomainCatalogEntry, ResolutionRule)> {
        self.resolve_index(raw)
            .map(|(index, rule)| (self.catalog.entry_at(index), rule))
    }

    fn resolve_index(&self, raw: &str) -> Option<(usize, ResolutionRule)> {
        let via_alias = |target: &DomainId| self.catalog.position(target);

        self.aliases
            .lookup_exact(raw)
            .and_then(via_alias)
            .map(|index| (index, ResolutionRule::ExactAlias))
            .or_else(|| {
                self.aliases
                    .lookup_normalized(raw)
                    .and_then(via_alias)
                    .map(|index| (index, ResolutionRule::NormalizedAlias))
            })
            .or_else(|| {
                self.catalog
                    .position_by_str(raw)
                    .map(|index| (index, ResolutionRule::CatalogId))
            })
    }

    /// Make the domain named by `raw` active and show its overview.
    ///
    /// Always clears the active tool, even when `raw` names the domain that
    /// is already active.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::DomainResolution`] if no rule matches; the
    /// state is left unchanged.
    pub fn select_domain(&mut self, raw: &str) -> Result<Transition, SelectionError> {
        let Some((domain, rule)) = self.resolve_index(raw) else {
            warn!(raw, "Domain name did not resolve; keeping current selection");
            return Err(SelectionError::DomainResolution {
                raw: raw.to_string(),
            });
        };

        debug!(
            raw,
            domain = %self.catalog.entry_at(domain).id(),
            ?rule,
            "Domain selected"
        );

        Ok(self.apply(SelectionState {
            active_domain_name: raw.to_string(),
            focus: Focus::Overview { domain },
        }))
    }

    /// Make `tool_id` of the active domain active and show its detail view.
    ///
    /// # Errors
    ///
    /// - [`SelectionError::NoActiveDomain`] if no domain is active
    /// - [`SelectionError::ToolResolution`] if the active domain has no such tool
    ///
    /// In both cases the state is left unchanged.
    pub fn select_tool(&mut self, tool_id: &str) -> Result<Transition, SelectionError> {
        let Some(domain) = self.state.focus.domain() else {
            warn!(tool_id, "Tool selected with no active domain; ignoring");
            return Err(SelectionError::NoActiveDomain {
                tool_id: tool_id.to_string(),
            });
        };

        let entry = self.catalog.entry_at(domain);
        let Some(tool) = entry.tool_position(tool_id) else {
            warn!(
                tool_id,
                domain = %entry.id(),
                "Tool is not part of the active domain; ignoring"
            );
            return Err(SelectionError::ToolResolution {
                tool_id: tool_id.to_string(),
                domain: entry.id().clone(),
            });
        };

        debug!(tool_id, domain = %entry.id(), "Tool selected");

        Ok(self.apply(SelectionState {
            active_domain_name: self.state.active_domain_name.clone(),
            focus: Focus::Tool { domain, tool },
        }))
    }

    fn apply(&mut self, next: SelectionState) -> Transition {
        if self.state == next {
            Transition::Unchanged
        } else {
            self.state = next;
            Transition::Changed
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Raw name supplied with the last successful `select_domain`.
    pub fn active_domain_name(&self) -> &str {
        self.state.active_domain_name()
    }

    /// Active domain, if any.
    pub fn active_domain(&self) -> Option<&DomainCatalogEntry> {
        self.state
            .focus
            .domain()
            .map(|index| self.catalog.entry_at(index))
    }

    /// Active tool, always an element of the active domain's tools.
    pub fn active_tool(&self) -> Option<&ToolDescriptor> {
        match self.state.focus {
            Focus::Tool { domain, tool } => self.catalog.entry_at(domain).tools().get(tool),
            Focus::None | Focus::Overview { .. } => None,
        }
    }

    /// Id of the active tool, `None` when no tool is selected.
    pub fn active_tool_id(&self) -> Option<&ToolId> {
        self.active_tool().map(ToolDescriptor::id)
    }

    /// View to mount. `DomainOverview` until a tool is selected.
    pub fn display_mode(&self) -> DisplayMode {
        match self.state.focus {
            Focus::Tool { .. } => DisplayMode::ToolDetail,
            Focus::None | Focus::Overview { .. } => DisplayMode::DomainOverview,
        }
    }

    /// Coarse phase, distinguishing "nothing selected" from the overview.
    pub fn phase(&self) -> SelectionPhase {
        self.state.phase()
    }

    /// First tool of the active domain, for pre-selecting menus.
    ///
    /// Does not change the display mode.
    pub fn default_tool(&self) -> Option<&ToolDescriptor> {
        self.active_domain()
            .and_then(DomainCatalogEntry::default_tool)
    }

    /// The catalog this selector resolves against.
    pub fn catalog(&self) -> &DomainCatalog {
        &self.catalog
    }

    /// The alias table this selector resolves against.
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
