use std::collections::HashSet;
use std::thread;

use catalog_sampler::demo::default_pool;
use catalog_sampler::{
    Candidate, CatalogSelector, CategoryPool, SelectionConfig, SelectionContext, Sfc32,
    all_seed_key, build_selection, category_coverage, category_seed_key, pick_indices, pick_n,
    seeded_rng,
};

fn engineer(id: &str, tags: &[&str]) -> Candidate {
    tags.iter().fold(Candidate::new(id, id), |candidate, tag| {
        candidate.with_category(*tag)
    })
}

fn group(names: &[&str], tags: &[&str]) -> Vec<Candidate> {
    names.iter().map(|name| engineer(name, tags)).collect()
}

fn draws(rng: &mut Sfc32, count: usize) -> Vec<f64> {
    (0..count).map(|_| rng.next_f64()).collect()
}

fn ids(selection: &[&Candidate]) -> Vec<String> {
    selection.iter().map(|candidate| candidate.id.clone()).collect()
}

fn skill_pool() -> CategoryPool {
    CategoryPool::from_candidates([
        engineer("e1", &["skillX"]),
        engineer("e2", &["skillX"]),
        engineer("e3", &["skillX"]),
        engineer("e4", &["skillX"]),
    ])
    .unwrap()
}

#[test]
fn same_key_same_stream() {
    for key in ["", "a", "home-all-autocad", "ключ", "🙂-tab-revit"] {
        let first = draws(&mut seeded_rng(key), 64);
        let second = draws(&mut seeded_rng(key), 64);
        assert_eq!(first, second, "stream diverged for key {key:?}");
    }
}

#[test]
fn distinct_keys_give_distinct_streams() {
    let streams: Vec<Vec<f64>> = (0..20)
        .map(|idx| draws(&mut seeded_rng(&format!("independent-{idx}")), 5))
        .collect();
    let unique: HashSet<Vec<u64>> = streams
        .iter()
        .map(|stream| stream.iter().map(|value| value.to_bits()).collect())
        .collect();
    assert_eq!(unique.len(), streams.len());
}

#[test]
fn pick_n_never_repeats_and_never_invents() {
    let items: Vec<u32> = (100..140).collect();
    for seed in 0..100 {
        for n in [0, 1, 2, 3, 39, 40, 41] {
            let picked = pick_n(&items, n, &mut seeded_rng(&format!("inv-{seed}")));
            assert_eq!(picked.len(), n.min(items.len()));
            let unique: HashSet<u32> = picked.iter().copied().collect();
            assert_eq!(unique.len(), picked.len());
            assert!(picked.iter().all(|value| items.contains(value)));
        }
    }
}

#[test]
fn full_shuffle_is_a_permutation() {
    let picked = pick_indices(50, 50, &mut seeded_rng("perm"));
    let mut sorted = picked.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    assert_ne!(picked, sorted);
}

#[test]
fn scenario_single_skill_selection() {
    let pool = skill_pool();
    let context = SelectionContext::parse("skillX");
    let selection = build_selection(&pool, &context, "seed1-");
    assert_eq!(selection.len(), 3);
    let unique: HashSet<&str> = selection.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(unique.len(), 3);
    assert!(unique.is_subset(&HashSet::from(["e1", "e2", "e3", "e4"])));
    for _ in 0..5 {
        let repeat = build_selection(&pool, &context, "seed1-");
        assert_eq!(ids(&repeat), ids(&selection));
    }
}

#[test]
fn independent_call_sites_agree() {
    let pool = default_pool();
    let page = CatalogSelector::new(pool, SelectionConfig::with_prefix("x-"));
    let preview = build_selection(pool, &SelectionContext::parse("autocad"), "x-");
    assert_eq!(page.select_str("autocad"), preview);
    assert_eq!(page.select_str("AutoCAD"), preview);
    assert_eq!(
        page.select(&SelectionContext::All),
        build_selection(pool, &SelectionContext::All, "x-")
    );
}

#[test]
fn selection_matches_hand_derived_keys() {
    let pool = default_pool();
    let selection = build_selection(pool, &SelectionContext::All, "home-");
    let mut expected = Vec::new();
    for (category, members) in pool.iter() {
        let mut rng = seeded_rng(&all_seed_key("home-", category));
        expected.extend(pick_n(members, 2, &mut rng).into_iter().map(|c| c.id));
    }
    assert_eq!(ids(&selection), expected);

    let members = pool.get("etabs").unwrap();
    let mut rng = seeded_rng(&category_seed_key("home-", "etabs"));
    let expected: Vec<String> = pick_n(members, 3, &mut rng)
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(
        ids(&build_selection(pool, &SelectionContext::parse("etabs"), "home-")),
        expected
    );
}

#[test]
fn seed_keys_use_category_ids_verbatim() {
    let pool = CategoryPool::from_groups([
        ("A", group(&["a1", "a2", "a3"], &[])),
        ("B", group(&["b1", "b2"], &[])),
    ])
    .unwrap();
    let selection = build_selection(&pool, &SelectionContext::All, "s-");
    let mut expected = Vec::new();
    for (category, key) in [("A", "s-all-A"), ("B", "s-all-B")] {
        let members = pool.get(category).unwrap();
        let picked = pick_n(members, 2, &mut seeded_rng(key));
        expected.extend(picked.into_iter().map(|c| c.id));
    }
    assert_eq!(ids(&selection), expected);
    assert_eq!(ids(&selection), vec!["a3", "a2", "b1", "b2"]);

    let pool = skill_pool();
    let members = pool.get("skillX").unwrap();
    let expected: Vec<String> = pick_n(members, 3, &mut seeded_rng("seed1-tab-skillX"))
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(expected, vec!["e4", "e2", "e1"]);
    for requested in ["skillX", "skillx", " SKILLX "] {
        let selection = build_selection(&pool, &SelectionContext::parse(requested), "seed1-");
        assert_eq!(ids(&selection), expected, "requested as {requested:?}");
    }
}

#[test]
fn all_selection_keeps_category_blocks_in_pool_order() {
    let pool = CategoryPool::from_groups([
        ("A", group(&["a1", "a2", "a3"], &["a"])),
        ("B", group(&["b1", "b2"], &["b"])),
    ])
    .unwrap();
    let selection = build_selection(&pool, &SelectionContext::All, "s-");
    assert_eq!(selection.len(), 4);
    assert!(selection[..2].iter().all(|c| c.id.starts_with('a')));
    assert!(selection[2..].iter().all(|c| c.id.starts_with('b')));
}

#[test]
fn shared_candidates_may_repeat_in_all() {
    let candidates = [engineer("both", &["x", "y"]), engineer("y1", &["y"])];
    let pool = CategoryPool::from_candidates(candidates).unwrap();
    let selection = build_selection(&pool, &SelectionContext::All, "dup-");
    assert_eq!(selection.len(), 3);
    let occurrences = selection.iter().filter(|c| c.id == "both").count();
    assert_eq!(occurrences, 2);
}

#[test]
fn unknown_category_yields_nothing() {
    let pool = skill_pool();
    let unknown = build_selection(&pool, &SelectionContext::parse("nonexistent"), "s-");
    assert!(unknown.is_empty());
    let empty_pool = CategoryPool::default();
    let nothing = build_selection(&empty_pool, &SelectionContext::All, "s-");
    assert!(nothing.is_empty());
}

#[test]
fn selections_do_not_mutate_the_pool() {
    let pool = default_pool().clone();
    let snapshot = pool.clone();
    for prefix in ["a-", "b-", "c-"] {
        let _ = build_selection(&pool, &SelectionContext::All, prefix);
        let _ = build_selection(&pool, &SelectionContext::parse("revit"), prefix);
    }
    assert_eq!(pool, snapshot);
}

#[test]
fn all_selection_covers_every_category_evenly() {
    let pool = default_pool();
    let selection = build_selection(pool, &SelectionContext::All, "cov-");
    let coverage = category_coverage(pool, &selection).unwrap();
    assert_eq!(coverage.covered, coverage.categories);
    assert!(coverage.min >= 2);
}

#[test]
fn concurrent_callers_agree() {
    let pool = default_pool();
    let expected = ids(&build_selection(pool, &SelectionContext::All, "threads-"));
    let run = || ids(&build_selection(pool, &SelectionContext::All, "threads-"));
    thread::scope(|scope| {
        let handles: Vec<_> = (0..8).map(|_| scope.spawn(run)).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
