//! Category-aware assembly of seeded selections.
//!
//! Seed keys are derived as:
//! - `prefix + "all-" + category` for each category of an "all" selection,
//! - `prefix + "tab-" + category` for a single-category selection,
//!
//! where `category` is the pool's category id exactly as stored. A requested
//! id is matched to a stored one through normalization, but keys are never
//! built from the normalized form. Every call rebuilds its own generator from
//! the key, so results depend only on the pool and the key.

use std::fmt;
use tracing::debug;

use crate::catalog::CategoryPool;
use crate::config::SelectionConfig;
use crate::constants::selection::{ALL_CONTEXT, ALL_KEY_SEGMENT, CATEGORY_KEY_SEGMENT};
use crate::data::Candidate;
use crate::rng::seeded_rng;
use crate::sampler::pick_indices;
use crate::types::{CategoryId, SeedKey};
use crate::utils::normalize_category_id;

/// What the caller is looking at: every category, or one of them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectionContext {
    /// Shallow sample across every category.
    All,
    /// Deeper sample of one category, as requested by the caller.
    Category(CategoryId),
}

impl SelectionContext {
    /// Interpret a raw navigation value; `all` (any casing) selects every category.
    pub fn parse(raw: &str) -> Self {
        if normalize_category_id(raw) == ALL_CONTEXT {
            Self::All
        } else {
            Self::Category(raw.to_string())
        }
    }
}

impl From<&str> for SelectionContext {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for SelectionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CONTEXT),
            Self::Category(category) => f.write_str(category),
        }
    }
}

/// Seed key for `category` inside an "all" selection.
pub fn all_seed_key(seed_prefix: &str, category: &str) -> SeedKey {
    format!("{seed_prefix}{ALL_KEY_SEGMENT}{category}")
}

/// Seed key for a single-category selection.
pub fn category_seed_key(seed_prefix: &str, category: &str) -> SeedKey {
    format!("{seed_prefix}{CATEGORY_KEY_SEGMENT}{category}")
}

/// Sample size for a single category of `len` candidates.
///
/// `request` capped at `len`, but never below `minimum` while the pool has
/// that many candidates.
pub fn single_sample_size(len: usize, request: usize, minimum: usize) -> usize {
    request.min(len).max(minimum.min(len))
}

/// Seeded selection with the default sizes.
pub fn build_selection<'a>(
    pool: &'a CategoryPool,
    context: &SelectionContext,
    seed_prefix: &str,
) -> Vec<&'a Candidate> {
    CatalogSelector::new(pool, SelectionConfig::with_prefix(seed_prefix)).select(context)
}

/// A pool paired with a fixed [`SelectionConfig`].
///
/// Cheap to build and safe to share across threads; each call derives fresh
/// generator state from its seed key.
#[derive(Clone, Debug)]
pub struct CatalogSelector<'a> {
    pool: &'a CategoryPool,
    config: SelectionConfig,
}

impl<'a> CatalogSelector<'a> {
    /// Create a selector over `pool`.
    pub fn new(pool: &'a CategoryPool, config: SelectionConfig) -> Self {
        Self { pool, config }
    }

    /// Underlying pool.
    pub fn pool(&self) -> &'a CategoryPool {
        self.pool
    }

    /// Active configuration.
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Parse `raw` as a [`SelectionContext`] and select.
    pub fn select_str(&self, raw: &str) -> Vec<&'a Candidate> {
        self.select(&SelectionContext::parse(raw))
    }

    /// Assemble the selection for `context`.
    ///
    /// "All" concatenates per-category samples in pool order without
    /// reordering or deduplicating across categories. An unknown category
    /// yields an empty selection.
    pub fn select(&self, context: &SelectionContext) -> Vec<&'a Candidate> {
        match context {
            SelectionContext::All => self.select_all(),
            SelectionContext::Category(category) => self.select_category(category),
        }
    }

    fn select_all(&self) -> Vec<&'a Candidate> {
        let pool = self.pool;
        let mut selected = Vec::with_capacity(pool.len() * self.config.per_category_in_all);
        for (category, members) in pool.iter() {
            let key = all_seed_key(&self.config.seed_prefix, category);
            let mut rng = seeded_rng(&key);
            let picked = pick_indices(members.len(), self.config.per_category_in_all, &mut rng);
            selected.extend(picked.into_iter().map(|idx| &members[idx]));
        }
        debug!(
            categories = pool.len(),
            selected = selected.len(),
            seed_prefix = %self.config.seed_prefix,
            "assembled all-category selection"
        );
        selected
    }

    fn select_category(&self, category: &str) -> Vec<&'a Candidate> {
        let pool = self.pool;
        let Some(resolved) = pool.resolve(category) else {
            debug!(category, "category not in pool; empty selection");
            return Vec::new();
        };
        let members = pool.get(resolved).unwrap_or_default();
        let key = category_seed_key(&self.config.seed_prefix, resolved);
        let n = single_sample_size(
            members.len(),
            self.config.single_request,
            self.config.single_minimum,
        );
        let mut rng = seeded_rng(&key);
        let selected: Vec<&'a Candidate> = pick_indices(members.len(), n, &mut rng)
            .into_iter()
            .map(|idx| &members[idx])
            .collect();
        debug!(
            category = resolved,
            seed_key = %key,
            selected = selected.len(),
            "assembled category selection"
        );
        selected
    }
}
