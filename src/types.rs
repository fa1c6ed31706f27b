/// Unique candidate identifier (stable across runs).
/// Example: `eng-017`
pub type CandidateId = String;
/// Identifier for a category pool, stored in normalized form.
/// Examples: `autocad`, `civil-3d`
pub type CategoryId = String;
/// Full key fed into the hash seeder.
/// Examples: `home-all-autocad`, `home-tab-revit`
pub type SeedKey = String;
/// Caller-chosen prefix prepended to every derived seed key.
/// Examples: `home-`, `x-`
pub type SeedPrefix = String;
/// Name of an opaque display attribute carried by a candidate.
/// Examples: `rate`, `rating`
pub type AttributeName = String;
