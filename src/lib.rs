#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// CLI runners shared by the crate's binaries.
pub mod apps;
/// Immutable category pools and catalog loading.
pub mod catalog;
/// Selection configuration types.
pub mod config;
/// Centralized constants for the seeder, generator, and assembler.
pub mod constants;
/// Candidate record type.
pub mod data;
/// Built-in demo catalog.
pub mod demo;
/// String-keyed hash seeder.
pub mod hash;
/// Selection coverage metrics.
pub mod metrics;
/// Seeded generators and float sources.
pub mod rng;
/// No-replacement sampling.
pub mod sampler;
/// Category-aware selection assembly.
pub mod selection;
/// Shared type aliases.
pub mod types;
/// Identifier normalization helpers.
pub mod utils;

mod errors;

pub use catalog::CategoryPool;
pub use config::SelectionConfig;
pub use data::Candidate;
pub use errors::CatalogError;
pub use hash::HashSeeder;
pub use metrics::{CategoryCoverage, CategoryShare, category_coverage};
pub use rng::{Sfc32, ThreadUnit, UnitSource, seeded_rng};
pub use sampler::{pick_indices, pick_n, pick_n_unseeded};
pub use selection::{
    CatalogSelector, SelectionContext, all_seed_key, build_selection, category_seed_key,
    single_sample_size,
};
pub use types::{AttributeName, CandidateId, CategoryId, SeedKey, SeedPrefix};
