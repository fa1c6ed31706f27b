use crate::catalog::CategoryPool;
use crate::data::Candidate;
use crate::types::CategoryId;

/// How evenly a selection covers the categories of its pool.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryCoverage {
    pub total: usize,
    pub categories: usize,
    pub covered: usize,
    pub min: usize,
    pub max: usize,
    pub max_share: f64,
    pub per_category: Vec<CategoryShare>,
}

/// Selected candidates tagged with one category.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryShare {
    pub category: CategoryId,
    pub count: usize,
    pub share: f64,
}

/// Count, per pool category (in pool order), the selected candidates tagged with it.
///
/// A candidate carrying several tags counts toward each of them, so shares
/// can sum above 1.0. Returns `None` for an empty pool.
pub fn category_coverage(
    pool: &CategoryPool,
    selection: &[&Candidate],
) -> Option<CategoryCoverage> {
    if pool.is_empty() {
        return None;
    }
    let total = selection.len();
    let per_category: Vec<CategoryShare> = pool
        .categories()
        .map(|category| {
            let count = selection
                .iter()
                .filter(|candidate| candidate.has_category(category))
                .count();
            CategoryShare {
                category: category.to_string(),
                count,
                share: if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64
                },
            }
        })
        .collect();
    let min = per_category
        .iter()
        .map(|entry| entry.count)
        .min()
        .unwrap_or(0);
    let max = per_category
        .iter()
        .map(|entry| entry.count)
        .max()
        .unwrap_or(0);
    Some(CategoryCoverage {
        total,
        categories: per_category.len(),
        covered: per_category.iter().filter(|entry| entry.count > 0).count(),
        min,
        max,
        max_share: if total == 0 {
            0.0
        } else {
            max as f64 / total as f64
        },
        per_category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, tags: &[&str]) -> Candidate {
        tags.iter()
            .fold(Candidate::new(id, id), |c, tag| c.with_category(*tag))
    }

    #[test]
    fn reports_balanced_coverage() {
        let pool = CategoryPool::from_candidates([
            candidate("a1", &["a"]),
            candidate("a2", &["a"]),
            candidate("b1", &["b"]),
            candidate("b2", &["b"]),
        ])
        .unwrap();
        let everyone: Vec<&Candidate> = pool.iter().flat_map(|(_, members)| members).collect();
        let coverage = category_coverage(&pool, &everyone).expect("coverage");
        assert_eq!(coverage.total, 4);
        assert_eq!(coverage.categories, 2);
        assert_eq!(coverage.covered, 2);
        assert_eq!(coverage.min, 2);
        assert_eq!(coverage.max, 2);
        assert!((coverage.max_share - 0.5).abs() < 1e-9);
        assert!(
            coverage
                .per_category
                .iter()
                .all(|entry| (entry.share - 0.5).abs() < 1e-9)
        );
    }

    #[test]
    fn multi_tag_candidates_count_for_each_category() {
        let candidates = [candidate("x", &["a", "b"]), candidate("y", &["c"])];
        let pool = CategoryPool::from_candidates(candidates).unwrap();
        let members = pool.get("a").unwrap();
        let selection: Vec<&Candidate> = members.iter().collect();
        let coverage = category_coverage(&pool, &selection).unwrap();
        assert_eq!(coverage.covered, 2);
        assert_eq!(coverage.min, 0);
        assert_eq!(coverage.per_category[2].category, "c");
        assert_eq!(coverage.per_category[2].count, 0);
    }

    #[test]
    fn explicit_groups_count_toward_their_category() {
        let pool = CategoryPool::from_groups([
            ("Revit", vec![Candidate::new("r1", "R1"), Candidate::new("r2", "R2")]),
            ("etabs", vec![candidate("e1", &["etabs"])]),
        ])
        .unwrap();
        let everyone: Vec<&Candidate> = pool.iter().flat_map(|(_, members)| members).collect();
        let coverage = category_coverage(&pool, &everyone).unwrap();
        assert_eq!(coverage.per_category[0].category, "Revit");
        assert_eq!(coverage.per_category[0].count, 2);
        assert_eq!(coverage.per_category[1].count, 1);
        assert_eq!(coverage.covered, 2);
    }

    #[test]
    fn empty_inputs() {
        assert!(category_coverage(&CategoryPool::default(), &[]).is_none());
        let single = candidate("a1", &["a"]);
        let pool = CategoryPool::from_candidates([single]).unwrap();
        let coverage = category_coverage(&pool, &[]).unwrap();
        assert_eq!(coverage.total, 0);
        assert_eq!(coverage.max_share, 0.0);
    }
}
