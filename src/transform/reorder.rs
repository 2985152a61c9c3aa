//! Reordering of opaque items by their frequency-domain round trip
//!
//! Each item is reduced to a scalar by a caller-supplied extractor. The scalar
//! sequence is pushed through a forward and an inverse transform, and items
//! are sorted by the real part of the result. The round trip is nearly the
//! identity, so the order closely tracks the extracted values, with ties and
//! near-ties decided by accumulated floating-point round-off.

use crate::transform::dft;
use num_complex::Complex64;
use std::cmp::Ordering;
use tracing::debug;

/// Compute ordering keys for a sequence of scalars
///
/// Returns the real component of `inverse(forward(values))`, index-aligned
/// with `values`.
pub fn round_trip_keys(values: &[f64]) -> Vec<f64> {
    let input: Vec<Complex64> = values.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    let spectrum = dft::forward(&input);
    dft::inverse(&spectrum).iter().map(|c| c.re).collect()
}

/// Stable ascending permutation of `keys`
///
/// Equal keys keep their original relative order. NaN sorts after every
/// number via [`f64::total_cmp`].
pub fn sorted_permutation(keys: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| match (keys.get(a), keys.get(b)) {
        (Some(x), Some(y)) => x.total_cmp(y),
        _ => Ordering::Equal,
    });
    order
}

/// Reorder items and return each one paired with its ordering key
///
/// Sequences of length 0 or 1 are returned as-is without calling
/// `extractor`, so a lone item carries no key (`None`). Longer sequences
/// report `Some(key)` for every item.
pub fn reorder_with_keys<T, F>(items: Vec<T>, extractor: F) -> Vec<(T, Option<f64>)>
where
    F: FnMut(&T) -> f64,
{
    if items.len() <= 1 {
        return items.into_iter().map(|item| (item, None)).collect();
    }

    let values: Vec<f64> = items.iter().map(extractor).collect();
    let keys = round_trip_keys(&values);
    debug!(samples = items.len(), "computed round-trip ordering keys");

    let mut pairs: Vec<(T, f64)> = items.into_iter().zip(keys).collect();
    pairs.sort_by(|a, b| a.1.total_cmp(&b.1));
    pairs
        .into_iter()
        .map(|(item, key)| (item, Some(key)))
        .collect()
}

/// Reorder owned items by their round-trip transformed values
///
/// The output holds exactly the input items, permuted. `extractor` is called
/// once per item when there are at least two items, and never otherwise.
pub fn reorder<T, F>(items: Vec<T>, extractor: F) -> Vec<T>
where
    F: FnMut(&T) -> f64,
{
    if items.len() <= 1 {
        return items;
    }
    reorder_with_keys(items, extractor)
        .into_iter()
        .map(|(item, _)| item)
        .collect()
}

/// Reorder a mutable slice in place
///
/// Same ordering as [`reorder`]. Items are moved with swaps, so `T` needs
/// neither `Clone` nor `Default`.
pub fn reorder_in_place<T, F>(items: &mut [T], extractor: F)
where
    F: FnMut(&T) -> f64,
{
    if items.len() <= 1 {
        return;
    }

    let values: Vec<f64> = items.iter().map(extractor).collect();
    let keys = round_trip_keys(&values);
    let order = sorted_permutation(&keys);
    debug!(samples = items.len(), "permuting slice in place");
    apply_permutation(items, &order);
}

// order[i] names the source index whose item belongs at position i
fn apply_permutation<T>(items: &mut [T], order: &[usize]) {
    let mut placed = vec![false; order.len()];
    for start in 0..order.len() {
        if placed.get(start).copied().unwrap_or(true) {
            continue;
        }
        let mut current = start;
        loop {
            if let Some(flag) = placed.get_mut(current) {
                *flag = true;
            }
            let Some(&source) = order.get(current) else {
                break;
            };
            if source == start {
                break;
            }
            items.swap(current, source);
            current = source;
        }
    }
}
