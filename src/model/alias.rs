//! Display-name alias table.
//!
//! Maps known spelling variants of domain names ("State Government",
//! "Oil & Gas") to canonical [`DomainId`]s. Keys are matched exactly first,
//! then in normalized form (see [`normalize_domain_name`]).

use super::catalog::DomainCatalog;
use super::error::AliasTableError;
use super::identifiers::DomainId;

/// Lower-case `raw` and collapse every run of hyphens/whitespace into one space.
///
/// No trimming is applied: a leading or trailing run becomes a single space.
///
/// ```
/// # use dashnav::model::normalize_domain_name;
/// assert_eq!(normalize_domain_name("State-Government"), "state government");
/// assert_eq!(normalize_domain_name("state  -- government"), "state government");
/// ```
pub fn normalize_domain_name(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut in_separator = false;

    for ch in raw.chars() {
        if ch == '-' || ch.is_whitespace() {
            if !in_separator {
                normalized.push(' ');
                in_separator = true;
            }
        } else {
            normalized.extend(ch.to_lowercase());
            in_separator = false;
        }
    }

    normalized
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AliasEntry {
    key: String,
    normalized: String,
    target: DomainId,
}

/// Ordered mapping of display-name variants to canonical domain ids.
///
/// # Invariant
/// No two keys share a normalized form, so the normalized lookup has at most
/// one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(variant, canonical id)` pairs in declaration order.
    ///
    /// # Errors
    ///
    /// - [`AliasTableError::InvalidTarget`] if a target is not a canonical id
    /// - [`AliasTableError::DuplicateNormalizedKey`] if two keys normalize alike
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, AliasTableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::new();
        for (key, target) in pairs {
            table.insert(key, target)?;
        }
        Ok(table)
    }

    /// Append one alias.
    ///
    /// # Errors
    ///
    /// Same as [`AliasTable::from_pairs`].
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        target: impl Into<String>,
    ) -> Result<(), AliasTableError> {
        let key = key.into();
        let target = DomainId::new(target).map_err(|source| AliasTableError::InvalidTarget {
            alias: key.clone(),
            source,
        })?;
        let normalized = normalize_domain_name(&key);

        if let Some(existing) = self.entries.iter().find(|e| e.normalized == normalized) {
            return Err(AliasTableError::DuplicateNormalizedKey {
                first: existing.key.clone(),
                second: key,
                normalized,
            });
        }

        self.entries.push(AliasEntry {
            key,
            normalized,
            target,
        });
        Ok(())
    }

    /// Rule 1: exact key match.
    pub fn lookup_exact(&self, raw: &str) -> Option<&DomainId> {
        self.entries
            .iter()
            .find(|entry| entry.key == raw)
            .map(|entry| &entry.target)
    }

    /// Rule 2: match after normalizing both sides.
    pub fn lookup_normalized(&self, raw: &str) -> Option<&DomainId> {
        let normalized = normalize_domain_name(raw);
        self.entries
            .iter()
            .find(|entry| entry.normalized == normalized)
            .map(|entry| &entry.target)
    }

    /// Check that every alias target exists in `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`AliasTableError::UnknownTarget`] for the first dangling alias.
    pub fn validate_against(&self, catalog: &DomainCatalog) -> Result<(), AliasTableError> {
        match self
            .entries
            .iter()
            .find(|entry| catalog.get(&entry.target).is_none())
        {
            Some(dangling) => Err(AliasTableError::UnknownTarget {
                alias: dangling.key.clone(),
                target: dangling.target.clone(),
            }),
            None => Ok(()),
        }
    }

    /// `(variant, canonical id)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DomainId)> {
        self.entries
            .iter()
            .map(|entry| (entry.key.as_str(), &entry.target))
    }

    /// Number of aliases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::{DomainCatalogEntry, ToolDescriptor};

    #[test]
    fn normalize_lowercases_and_collapses_separators() {
        assert_eq!(normalize_domain_name("State Government"), "state government");
        assert_eq!(normalize_domain_name("state-government"), "state government");
        assert_eq!(normalize_domain_name("STATE--GOVERNMENT"), "state government");
        assert_eq!(normalize_domain_name("state \t- government"), "state government");
    }

    #[test]
    fn normalize_does_not_trim() {
        assert_eq!(normalize_domain_name("  finance-"), " finance ");
    }

    #[test]
    fn normalize_keeps_other_punctuation() {
        assert_eq!(normalize_domain_name("Oil & Gas"), "oil & gas");
    }

    #[test]
    fn exact_lookup_is_case_sensitive() {
        let table = AliasTable::from_pairs([("Finance", "finance")]).unwrap();
        assert!(table.lookup_exact("Finance").is_some());
        assert!(table.lookup_exact("finance").is_none());
    }

    #[test]
    fn normalized_lookup_ignores_case_and_hyphens() {
        let table = AliasTable::from_pairs([("State Government", "state-government")]).unwrap();
        for raw in ["state-government", "STATE GOVERNMENT", "State--Government"] {
            assert_eq!(
                table.lookup_normalized(raw).map(DomainId::as_str),
                Some("state-government"),
                "{raw:?} should resolve"
            );
        }
    }

    #[test]
    fn duplicate_normalized_keys_fail_fast() {
        let result = AliasTable::from_pairs([
            ("State Government", "state-government"),
            ("State-Government", "state-government"),
        ]);
        assert_eq!(
            result,
            Err(AliasTableError::DuplicateNormalizedKey {
                first: "State Government".to_string(),
                second: "State-Government".to_string(),
                normalized: "state government".to_string(),
            })
        );
    }

    #[test]
    fn non_canonical_target_is_rejected() {
        let result = AliasTable::from_pairs([("Finance", "Finance")]);
        assert!(matches!(
            result,
            Err(AliasTableError::InvalidTarget { ref alias, .. }) if alias == "Finance"
        ));
    }

    #[test]
    fn validate_against_reports_dangling_alias() {
        let tool = ToolDescriptor::new("a", "A", "box").unwrap();
        let entry = DomainCatalogEntry::new("finance", "Finance", vec![tool]).unwrap();
        let catalog = DomainCatalog::new(vec![entry]).unwrap();

        let good = AliasTable::from_pairs([("Finance", "finance")]).unwrap();
        assert_eq!(good.validate_against(&catalog), Ok(()));

        let bad = AliasTable::from_pairs([("Finance", "finance"), ("Retail", "retail")]).unwrap();
        assert!(matches!(
            bad.validate_against(&catalog),
            Err(AliasTableError::UnknownTarget { ref alias, .. }) if alias == "Retail"
        ));
    }

    #[test]
    fn iter_preserves_declaration_order() {
        let table = AliasTable::from_pairs([("B", "b"), ("A", "a")]).unwrap();
        let keys: Vec<&str> = table.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["B", "A"]);
    }
}
