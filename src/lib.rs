//! Dashboard navigation core (dashnav)
//!
//! Domain/tool selection and pagination for multi-industry analytics
//! dashboards, kept free of any UI so every transition is testable.
//!
//! Layout follows the Pure Core / Impure Shell split:
//! - [`model`]: identifiers, catalog, aliases, content and errors
//! - [`state`]: the selection state machine and the pagination engine
//! - [`source`]: catalog and content providers (built-in or file)
//! - [`config`], [`logging`]: layered configuration and tracing setup
//! - [`view`]: plain-text rendering used by the CLI

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

// Glue between configuration, sources and the selector
pub mod integration;
