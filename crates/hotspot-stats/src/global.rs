//! Global (whole-surface) autocorrelation statistics.

use crate::error::{check_values, StatError};
use crate::moments::{CompensatedSum, Moments};
use hotspot_core::StatisticKind;
use hotspot_space::Neighbourhood;
use tracing::trace;

/// Compute one global statistic of `values` over `nbs`.
///
/// Weights are row-standardised (`w_ij = 1 / deg(i)`), `S0` is the number
/// of sites with at least one neighbour, and `dev_i = x_i - mean(x)`:
///
/// ```text
/// Moran  I = (n / S0) · Σ_i dev_i · mean_{j∈N(i)} dev_j / Σ_i dev_i²
/// Geary  C = (n − 1) · Σ_i mean_{j∈N(i)} (x_i − x_j)² / (2 · S0 · Σ_i dev_i²)
/// Getis  G = Σ_i x_i · mean_{j∈N(i)} x_j / Σ_i Σ_{j≠i} x_i x_j
/// ```
///
/// Sites with no neighbours add nothing to the neighbour terms but still
/// count towards the mean and the squared deviations.
///
/// # Degenerate inputs
///
/// Fewer than two sites, a constant vector, a neighbourhood without edges,
/// or a zero denominator all return [`StatisticKind::neutral_value`].
///
/// # Errors
///
/// [`StatError::LengthMismatch`] if `values.len() != nbs.site_count()`;
/// [`StatError::NonFiniteValue`] for NaN or infinite values.
///
/// # Examples
///
/// ```
/// use hotspot_space::NeighbourList;
/// use hotspot_stats::{statistic, StatisticKind};
///
/// let path = NeighbourList::from_lists(&[vec![1], vec![0, 2], vec![1, 3], vec![2]]).unwrap();
/// let i = statistic(&path, &[1.0, 2.0, 3.0, 4.0], StatisticKind::Moran).unwrap();
/// assert!((i - 0.4).abs() < 1e-12);
///
/// // Constant surfaces fall back to the neutral value.
/// let c = statistic(&path, &[5.0; 4], StatisticKind::Geary).unwrap();
/// assert_eq!(c, 1.0);
/// ```
pub fn statistic<N: Neighbourhood>(
    nbs: &N,
    values: &[f64],
    kind: StatisticKind,
) -> Result<f64, StatError> {
    check_values(nbs.site_count(), values)?;
    let moments = Moments::of(values);
    Ok(evaluate(nbs, values, &moments, kind))
}

/// Compute several global statistics of `values` in one pass over the
/// moments, returned in the order of `kinds`.
pub fn statistics<N: Neighbourhood>(
    nbs: &N,
    values: &[f64],
    kinds: &[StatisticKind],
) -> Result<Vec<f64>, StatError> {
    check_values(nbs.site_count(), values)?;
    let moments = Moments::of(values);
    Ok(kinds
        .iter()
        .map(|&kind| evaluate(nbs, values, &moments, kind))
        .collect())
}

fn evaluate<N: Neighbourhood>(
    nbs: &N,
    values: &[f64],
    moments: &Moments,
    kind: StatisticKind,
) -> f64 {
    if moments.n < 2 || moments.is_constant() {
        trace!(%kind, n = moments.n, "constant or too-short value vector");
        return kind.neutral_value();
    }
    let value = match kind {
        StatisticKind::Moran => moran(nbs, values, moments),
        StatisticKind::Geary => geary(nbs, values, moments),
        StatisticKind::GetisOrd => getis_ord(nbs, values),
    };
    value.unwrap_or_else(|| {
        trace!(%kind, "undefined statistic; returning neutral value");
        kind.neutral_value()
    })
}

/// `num / den`, or `None` when undefined.
pub(crate) fn finite_ratio(num: f64, den: f64) -> Option<f64> {
    if den == 0.0 {
        return None;
    }
    let r = num / den;
    r.is_finite().then_some(r)
}

fn moran<N: Neighbourhood>(nbs: &N, values: &[f64], moments: &Moments) -> Option<f64> {
    let dev = moments.deviations(values);
    let mut cross = CompensatedSum::new();
    let mut s0 = 0usize;
    for (i, d) in dev.iter().enumerate() {
        if let Some(mean_dev) = nbs.neighbour_mean(i, &dev) {
            s0 += 1;
            cross.add(d * mean_dev);
        }
    }
    if s0 == 0 {
        return None;
    }
    let n = moments.n as f64;
    finite_ratio(n / s0 as f64 * cross.total(), moments.m2)
}

fn geary<N: Neighbourhood>(nbs: &N, values: &[f64], moments: &Moments) -> Option<f64> {
    let dev = moments.deviations(values);
    let mut squares = CompensatedSum::new();
    let mut s0 = 0usize;
    for (i, &di) in dev.iter().enumerate() {
        let degree = nbs.degree(i);
        if degree == 0 {
            continue;
        }
        s0 += 1;
        let mut acc = 0.0;
        nbs.for_each_neighbour(i, |j| {
            let diff = di - dev[j];
            acc += diff * diff;
        });
        squares.add(acc / degree as f64);
    }
    if s0 == 0 {
        return None;
    }
    let n = moments.n as f64;
    finite_ratio(
        (n - 1.0) * squares.total(),
        2.0 * s0 as f64 * moments.m2,
    )
}

fn getis_ord<N: Neighbourhood>(nbs: &N, values: &[f64]) -> Option<f64> {
    let total = values.iter().copied().collect::<CompensatedSum>().total();
    let mut cross = CompensatedSum::new();
    let mut all_pairs = CompensatedSum::new();
    let mut s0 = 0usize;
    for (i, &xi) in values.iter().enumerate() {
        all_pairs.add(xi * (total - xi));
        if let Some(mean_nb) = nbs.neighbour_mean(i, values) {
            s0 += 1;
            cross.add(xi * mean_nb);
        }
    }
    if s0 == 0 {
        return None;
    }
    finite_ratio(cross.total(), all_pairs.total())
}
