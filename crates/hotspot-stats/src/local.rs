//! Local (per-site) decompositions of the global statistics.

use crate::error::{check_values, StatError};
use crate::global::finite_ratio;
use crate::moments::{CompensatedSum, Moments};
use hotspot_core::StatisticKind;
use hotspot_space::Neighbourhood;

/// Per-site local statistic of `values` over `nbs`.
///
/// With `dev_i = x_i - mean(x)` and `v = Σ dev² / n`:
///
/// ```text
/// local Moran  I_i = dev_i · mean_{j∈N(i)} dev_j / v
/// local Geary  c_i = mean_{j∈N(i)} (dev_i − dev_j)² / v
/// local Getis  G_i = Σ_{j∈N(i)} x_j / Σ_{j≠i} x_j
/// ```
///
/// Summing local Moran over all sites gives `S0 · I`, where `I` is the
/// global statistic and `S0` the number of sites with a neighbour.
///
/// Sites with no neighbours, and every site of a degenerate input (fewer
/// than two sites, a constant vector), get [`StatisticKind::neutral_value`].
///
/// # Errors
///
/// Same as [`statistic`](crate::statistic).
pub fn local_statistics<N: Neighbourhood>(
    nbs: &N,
    values: &[f64],
    kind: StatisticKind,
) -> Result<Vec<f64>, StatError> {
    check_values(nbs.site_count(), values)?;
    let moments = Moments::of(values);
    let neutral = kind.neutral_value();
    if moments.n < 2 || moments.is_constant() {
        return Ok(vec![neutral; values.len()]);
    }

    let out = match kind {
        StatisticKind::Moran => {
            let dev = moments.deviations(values);
            let variance = moments.m2 / moments.n as f64;
            dev.iter()
                .enumerate()
                .map(|(i, d)| {
                    nbs.neighbour_mean(i, &dev)
                        .and_then(|mean_dev| finite_ratio(d * mean_dev, variance))
                        .unwrap_or(neutral)
                })
                .collect()
        }
        StatisticKind::Geary => {
            let dev = moments.deviations(values);
            let variance = moments.m2 / moments.n as f64;
            dev.iter()
                .enumerate()
                .map(|(i, &di)| {
                    let degree = nbs.degree(i);
                    if degree == 0 {
                        return neutral;
                    }
                    let mut acc = 0.0;
                    nbs.for_each_neighbour(i, |j| {
                        let diff = di - dev[j];
                        acc += diff * diff;
                    });
                    finite_ratio(acc / degree as f64, variance).unwrap_or(neutral)
                })
                .collect()
        }
        StatisticKind::GetisOrd => {
            let total = values.iter().copied().collect::<CompensatedSum>().total();
            values
                .iter()
                .enumerate()
                .map(|(i, &xi)| {
                    let (sum, degree) = nbs.neighbour_sum(i, values);
                    if degree == 0 {
                        return neutral;
                    }
                    finite_ratio(sum, total - xi).unwrap_or(neutral)
                })
                .collect()
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistic;
    use hotspot_space::{EdgeBehavior, Grid2D, NeighbourList};
    use hotspot_test_utils::{assert_all_close, assert_close, checkerboard};

    fn path4() -> NeighbourList {
        NeighbourList::from_lists(&[vec![1], vec![0, 2], vec![1, 3], vec![2]]).unwrap()
    }

    #[test]
    fn local_moran_on_path_ramp() {
        // dev = [-1.5, -0.5, 0.5, 1.5], v = 5/4
        let l = local_statistics(&path4(), &[1.0, 2.0, 3.0, 4.0], StatisticKind::Moran).unwrap();
        assert_all_close(&l, &[0.6, 0.2, 0.2, 0.6], 1e-12);
    }

    #[test]
    fn local_moran_sums_to_scaled_global() {
        let nbs = NeighbourList::from_lists(&[vec![1], vec![0], vec![]]).unwrap();
        let x = [1.0, 3.0, 10.0];
        let local = local_statistics(&nbs, &x, StatisticKind::Moran).unwrap();
        let global = statistic(&nbs, &x, StatisticKind::Moran).unwrap();
        assert_eq!(local[2], 0.0);
        assert_close(local.iter().sum::<f64>(), 2.0 * global, 1e-12);
    }

    #[test]
    fn local_geary_on_checkerboard() {
        let grid = Grid2D::square(4, EdgeBehavior::Absorb).unwrap();
        let l = local_statistics(&grid, &checkerboard(4, 4), StatisticKind::Geary).unwrap();
        // Every neighbour differs by 2; v = 1.
        assert_all_close(&l, &[4.0; 16], 1e-12);
    }

    #[test]
    fn local_getis_ord_on_path() {
        let l = local_statistics(&path4(), &[1.0, 2.0, 3.0, 4.0], StatisticKind::GetisOrd)
            .unwrap();
        assert_all_close(&l, &[2.0 / 9.0, 4.0 / 8.0, 6.0 / 7.0, 3.0 / 6.0], 1e-12);
    }

    #[test]
    fn isolated_sites_are_neutral() {
        let nbs = NeighbourList::from_lists(&[vec![1], vec![0], vec![]]).unwrap();
        let l = local_statistics(&nbs, &[1.0, 5.0, 2.0], StatisticKind::Geary).unwrap();
        assert_eq!(l[2], 1.0);
    }

    #[test]
    fn constant_vector_is_neutral_everywhere() {
        for kind in StatisticKind::ALL {
            let l = local_statistics(&path4(), &[3.0; 4], kind).unwrap();
            assert_eq!(l, vec![kind.neutral_value(); 4]);
        }
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            local_statistics(&path4(), &[1.0], StatisticKind::Moran),
            Err(StatError::LengthMismatch { .. })
        ));
        assert!(matches!(
            local_statistics(&path4(), &[1.0, f64::NAN, 1.0, 1.0], StatisticKind::Moran),
            Err(StatError::NonFiniteValue { site: 1, .. })
        ));
    }
}
