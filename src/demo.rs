//! Built-in engineer catalog grouped by skill.

use std::sync::LazyLock;

use crate::catalog::CategoryPool;
use crate::data::Candidate;

/// `(id, name, skills, hourly rate, rating)`
type EngineerRow = (&'static str, &'static str, &'static [&'static str], u32, f64);

const ENGINEERS: &[EngineerRow] = &[
    ("eng-001", "Amara Okafor", &["autocad"], 35, 4.9),
    ("eng-002", "Luis Ferreira", &["autocad", "civil-3d"], 42, 4.7),
    ("eng-003", "Hana Sato", &["autocad"], 28, 4.5),
    ("eng-004", "Mateo Rossi", &["autocad", "sketchup"], 31, 4.6),
    ("eng-005", "Ingrid Larsen", &["revit"], 55, 4.8),
    ("eng-006", "Omar Haddad", &["revit"], 47, 4.4),
    ("eng-007", "Priya Nair", &["revit", "etabs"], 60, 5.0),
    ("eng-008", "Tomasz Nowak", &["solidworks"], 50, 4.7),
    ("eng-009", "Chen Wei", &["solidworks"], 44, 4.6),
    ("eng-010", "Fatima Zahra", &["solidworks"], 39, 4.3),
    ("eng-011", "Daniel Mensah", &["civil-3d"], 52, 4.8),
    ("eng-012", "Sofia Alvarez", &["civil-3d"], 46, 4.5),
    ("eng-013", "Kwame Boateng", &["etabs"], 58, 4.9),
    ("eng-014", "Elena Petrova", &["etabs"], 49, 4.2),
    ("eng-015", "Yusuf Demir", &["sketchup"], 25, 4.4),
    ("eng-016", "Mai Nguyen", &["sketchup"], 27, 4.7),
];

static DEFAULT_POOL: LazyLock<CategoryPool> = LazyLock::new(|| {
    let candidates = ENGINEERS.iter().map(|(id, name, skills, rate, rating)| {
        skills
            .iter()
            .fold(Candidate::new(*id, *name), |candidate, skill| {
                candidate.with_category(*skill)
            })
            .with_attribute("rate", *rate)
            .with_attribute("rating", *rating)
    });
    CategoryPool::from_candidates(candidates).expect("built-in catalog is well formed")
});

/// The built-in catalog, built on first use and shared for the rest of the process.
pub fn default_pool() -> &'static CategoryPool {
    &DEFAULT_POOL
}
