//! Navigation state machines (pure).
//!
//! All state transitions are pure functions testable without a UI.

pub mod pagination;
pub mod selection;

// Re-export for convenience
pub use pagination::{paginate, page_numbers, PageMarker, PageSize, PaginationState};
pub use selection::{
    DisplayMode, DomainSelector, ResolutionRule, SelectionPhase, SelectionState, Transition,
};
