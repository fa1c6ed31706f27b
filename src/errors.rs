use std::io;

use thiserror::Error;

use crate::types::{CandidateId, CategoryId};

/// Error type for catalog construction, loading, and CLI configuration failures.
///
/// Sampling and selection never fail; unknown categories yield empty results.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to parse catalog '{origin}': {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("candidate '{candidate}' appears more than once in category '{category}'")]
    DuplicateCandidate {
        category: CategoryId,
        candidate: CandidateId,
    },
    #[error("candidate '{0}' has no category tags")]
    Uncategorized(CandidateId),
    #[error("configuration error: {0}")]
    Configuration(String),
}
