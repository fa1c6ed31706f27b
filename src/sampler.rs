//! No-replacement sampling over slices.

use crate::rng::{ThreadUnit, UnitSource};

/// Shuffle the indices `0..len` with a partial Fisher-Yates pass and return
/// the first `min(n, len)` of them.
///
/// The pass walks `i` from `len - 1` down to `1`, draws `r`, and swaps `i`
/// with `floor(r * (i + 1))`. It always consumes `len - 1` draws, so the
/// result for a smaller `n` is a prefix of the result for a larger `n`.
pub fn pick_indices<R>(len: usize, n: usize, rng: &mut R) -> Vec<usize>
where
    R: UnitSource + ?Sized,
{
    let mut order: Vec<usize> = (0..len).collect();
    for i in (1..len).rev() {
        let r = rng.next_unit();
        debug_assert!(
            (0.0..1.0).contains(&r),
            "unit source returned {r}, outside [0, 1)"
        );
        let j = ((r * (i + 1) as f64) as usize).min(i);
        order.swap(i, j);
    }
    order.truncate(n.min(len));
    order
}

/// Draw `min(n, items.len())` items without replacement.
///
/// `items` is left untouched; the shuffle runs over a copy of its indices.
pub fn pick_n<T, R>(items: &[T], n: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: UnitSource + ?Sized,
{
    pick_indices(items.len(), n, rng)
        .into_iter()
        .map(|idx| items[idx].clone())
        .collect()
}

/// Same as [`pick_n`] with a non-deterministic source.
///
/// Output differs between calls; never use it where results must be reproducible.
pub fn pick_n_unseeded<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    pick_n(items, n, &mut ThreadUnit::new())
}
