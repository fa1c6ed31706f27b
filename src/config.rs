use crate::constants::selection::{
    PER_CATEGORY_IN_ALL, SINGLE_CATEGORY_MINIMUM, SINGLE_CATEGORY_REQUEST,
};
use crate::types::SeedPrefix;

/// Selection sizes and the seed prefix shared by every derived seed key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Prefix prepended to every derived seed key.
    ///
    /// Call sites that must agree on results (e.g. a page and its preview)
    /// have to use the same prefix.
    pub seed_prefix: SeedPrefix,
    /// Candidates drawn from each category when selecting "all".
    pub per_category_in_all: usize,
    /// Candidates requested when a single category is selected.
    pub single_request: usize,
    /// Lower bound for a single-category selection, capped by the pool size.
    pub single_minimum: usize,
}

impl SelectionConfig {
    /// Default sizes with the given seed prefix.
    pub fn with_prefix(seed_prefix: impl Into<SeedPrefix>) -> Self {
        Self {
            seed_prefix: seed_prefix.into(),
            ..Self::default()
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            seed_prefix: SeedPrefix::new(),
            per_category_in_all: PER_CATEGORY_IN_ALL,
            single_request: SINGLE_CATEGORY_REQUEST,
            single_minimum: SINGLE_CATEGORY_MINIMUM,
        }
    }
}
