//! Core identifier newtypes with smart constructors.
//!
//! Domain ids are canonical (lowercase, hyphen-separated) at construction time.
//! Raw constructors are never exported - use smart constructors only.

use std::fmt;

/// Canonical identifier of a business domain (e.g., "state-government").
///
/// Invariant: one or more segments of lowercase ASCII letters or digits,
/// joined by single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainId(String);

impl DomainId {
    /// Smart constructor: validates the canonical lowercase-hyphenated form.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidDomainId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidDomainId::Empty);
        }
        let canonical = raw.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        });
        if !canonical {
            return Err(InvalidDomainId::NotCanonical(raw));
        }
        Ok(Self(raw))
    }

    /// The canonical id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DomainId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier of a tool, unique within its owning domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToolId(String);

impl ToolId {
    /// Smart constructor: validates a non-empty id without whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidToolId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidToolId::Empty);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(InvalidToolId::ContainsWhitespace(raw));
        }
        Ok(Self(raw))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ToolId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ===== Error Types =====

/// Rejected domain id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDomainId {
    /// Empty string.
    #[error("Domain ID cannot be empty")]
    Empty,

    /// Not lowercase-hyphenated.
    #[error("Domain ID {0:?} is not canonical (expected lowercase words joined by hyphens)")]
    NotCanonical(String),
}

/// Rejected tool id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidToolId {
    /// Empty string.
    #[error("Tool ID cannot be empty")]
    Empty,

    /// Whitespace inside the id.
    #[error("Tool ID {0:?} cannot contain whitespace")]
    ContainsWhitespace(String),
}

// ===== Tests =====
