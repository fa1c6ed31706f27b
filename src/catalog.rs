//! Immutable category pools and catalog loading.

use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::info;

use crate::constants::catalog::INLINE_ORIGIN;
use crate::data::Candidate;
use crate::errors::CatalogError;
use crate::types::CategoryId;
use crate::utils::normalize_category_id;

/// Candidates grouped by category id.
///
/// Category ids are stored exactly as first given; spellings that normalize
/// to the same id share one group, and lookups match through normalization.
/// Categories enumerate in first-insertion order, and candidates keep their
/// input order inside each category. Once built the pool cannot be mutated;
/// selections only ever read from it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryPool {
    groups: IndexMap<CategoryId, Vec<Candidate>>,
    /// Normalized id -> stored id.
    aliases: HashMap<CategoryId, CategoryId>,
}

/// Wrapped catalog file layout: `{ "candidates": [...] }`.
#[derive(Deserialize)]
struct WrappedCatalog {
    candidates: Vec<Candidate>,
}

impl CategoryPool {
    /// Group candidates under each of their category tags.
    ///
    /// Tags are deduplicated per candidate by normalized form, keeping the
    /// first spelling. A candidate listed under several tags lands in
    /// several pools.
    pub fn from_candidates<I>(candidates: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = Candidate>,
    {
        let mut pool = Self::default();
        for mut candidate in candidates {
            let mut seen = HashSet::new();
            let mut tags: Vec<CategoryId> = Vec::with_capacity(candidate.categories.len());
            for tag in &candidate.categories {
                let normalized = normalize_category_id(tag);
                if !normalized.is_empty() && seen.insert(normalized) {
                    tags.push(tag.clone());
                }
            }
            if tags.is_empty() {
                return Err(CatalogError::Uncategorized(candidate.id));
            }
            candidate.categories = tags.clone();
            for tag in tags {
                let category = pool.ensure_group(&tag);
                pool.push(category, candidate.clone())?;
            }
        }
        Ok(pool)
    }

    /// Build a pool from explicit `(category, candidates)` groups.
    ///
    /// Groups whose ids normalize to the same id are merged in order. A
    /// candidate not yet tagged with its group gets the group id appended to
    /// its tags. Empty groups are kept and simply sample to nothing.
    pub fn from_groups<I, K, L>(groups: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (K, L)>,
        K: AsRef<str>,
        L: IntoIterator<Item = Candidate>,
    {
        let mut pool = Self::default();
        for (category, members) in groups {
            let category = category.as_ref();
            if normalize_category_id(category).is_empty() {
                return Err(CatalogError::Configuration(
                    "category id is empty after normalization".to_string(),
                ));
            }
            let category = pool.ensure_group(category);
            for mut candidate in members {
                if !candidate.has_category(&category) {
                    candidate.categories.push(category.clone());
                }
                pool.push(category.clone(), candidate)?;
            }
        }
        Ok(pool)
    }

    /// Parse a catalog from JSON text.
    ///
    /// Accepts a bare array of candidates or an object with a `candidates` array.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        Self::parse_json(raw, INLINE_ORIGIN)
    }

    /// Parse a catalog from any reader.
    pub fn from_json_reader<R: Read>(mut reader: R) -> Result<Self, CatalogError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Self::parse_json(&raw, INLINE_ORIGIN)
    }

    /// Load a catalog file from disk.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let pool = Self::parse_json(&raw, &path.display().to_string())?;
        info!(
            path = %path.display(),
            categories = pool.len(),
            candidates = pool.candidate_count(),
            "loaded catalog"
        );
        Ok(pool)
    }

    fn parse_json(raw: &str, origin: &str) -> Result<Self, CatalogError> {
        let parse_error = |source: serde_json::Error| CatalogError::Parse {
            origin: origin.to_string(),
            source,
        };
        let candidates = if raw.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<Candidate>>(raw).map_err(parse_error)?
        } else {
            serde_json::from_str::<WrappedCatalog>(raw)
                .map_err(parse_error)?
                .candidates
        };
        Self::from_candidates(candidates)
    }

    /// Stored id for `raw`, creating an empty group on first sight.
    fn ensure_group(&mut self, raw: &str) -> CategoryId {
        let normalized = normalize_category_id(raw);
        if let Some(existing) = self.aliases.get(&normalized) {
            return existing.clone();
        }
        let category = raw.to_string();
        self.aliases.insert(normalized, category.clone());
        self.groups.insert(category.clone(), Vec::new());
        category
    }

    fn push(&mut self, category: CategoryId, candidate: Candidate) -> Result<(), CatalogError> {
        let members = self.groups.entry(category.clone()).or_default();
        if members.iter().any(|existing| existing.id == candidate.id) {
            return Err(CatalogError::DuplicateCandidate {
                category,
                candidate: candidate.id,
            });
        }
        members.push(candidate);
        Ok(())
    }

    /// Stored id for `category`: an exact match first, then a normalized one.
    pub fn resolve(&self, category: &str) -> Option<&str> {
        if let Some((stored, _)) = self.groups.get_key_value(category) {
            return Some(stored.as_str());
        }
        self.aliases
            .get(&normalize_category_id(category))
            .map(String::as_str)
    }

    /// Candidates of `category` (matched like [`CategoryPool::resolve`]).
    pub fn get(&self, category: &str) -> Option<&[Candidate]> {
        self.resolve(category)
            .and_then(|stored| self.groups.get(stored))
            .map(Vec::as_slice)
    }

    /// Category ids in enumeration order, as stored.
    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.keys().map(String::as_str)
    }

    /// `(category, candidates)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Candidate])> + '_ {
        self.groups
            .iter()
            .map(|(category, members)| (category.as_str(), members.as_slice()))
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when the pool has no categories.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of distinct candidate ids across all categories.
    pub fn candidate_count(&self) -> usize {
        self.groups
            .values()
            .flatten()
            .map(|candidate| candidate.id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}
