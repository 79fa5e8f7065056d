//! Entry points over implicit 1D and 2D lattices.
//!
//! Lattices are built with an explicit [`EdgeBehavior`]; the entry points
//! without a `_with_edges` suffix use [`EdgeBehavior::Absorb`], where edge
//! and corner sites simply have fewer neighbours. The 2D lattice is
//! 4-connected and row-major; its neighbour order matches the graph built
//! by [`build_neighbours`](hotspot_space::build_neighbours) from the same
//! lattice coordinates, so the two paths give identical output under the
//! same stream.

use crate::error::{check_len, SimError};
use crate::ives::simulate;
use crate::params::IvesParams;
use hotspot_core::{IvesVariant, RandomStream};
use hotspot_space::{EdgeBehavior, Grid2D, Line1D};
use ndarray::Array2;

/// Final `size × size` state of the Coupled recurrence on an absorbing
/// square lattice, with a drawn initial state.
///
/// # Examples
///
/// ```
/// use hotspot_core::RandomStream;
/// use hotspot_sim::{simulate_grid_2d, IvesParams};
///
/// let params = IvesParams::neutral(0.5, 0.3, 1.0, 20).unwrap();
/// let surface = simulate_grid_2d(8, &params, &mut RandomStream::from_seed(3)).unwrap();
/// assert_eq!(surface.dim(), (8, 8));
/// ```
pub fn simulate_grid_2d(
    size: usize,
    params: &IvesParams,
    rng: &mut RandomStream,
) -> Result<Array2<f64>, SimError> {
    simulate_grid_2d_with_edges(size, EdgeBehavior::Absorb, params, rng)
}

/// [`simulate_grid_2d`] with an explicit boundary policy.
pub fn simulate_grid_2d_with_edges(
    size: usize,
    edge: EdgeBehavior,
    params: &IvesParams,
    rng: &mut RandomStream,
) -> Result<Array2<f64>, SimError> {
    let grid = Grid2D::square(size, edge)?;
    let state = simulate(&grid, params, IvesVariant::Coupled, None, rng)?;
    Ok(to_matrix(size, &state))
}

/// Final state of the Coupled recurrence on an absorbing line of `size`
/// sites, starting from `init`.
pub fn simulate_grid_1d(
    size: usize,
    params: &IvesParams,
    init: &[f64],
    rng: &mut RandomStream,
) -> Result<Vec<f64>, SimError> {
    simulate_grid_1d_with_edges(size, EdgeBehavior::Absorb, params, init, rng)
}

/// [`simulate_grid_1d`] with an explicit boundary policy.
pub fn simulate_grid_1d_with_edges(
    size: usize,
    edge: EdgeBehavior,
    params: &IvesParams,
    init: &[f64],
    rng: &mut RandomStream,
) -> Result<Vec<f64>, SimError> {
    let line = Line1D::new(size, edge)?;
    check_len("init", size, init)?;
    simulate(&line, params, IvesVariant::Coupled, Some(init), rng)
}

/// Final `size × size` state of the Coupled recurrence on an absorbing
/// square lattice, starting from the matrix `init`.
pub fn simulate_grid_2d_from(
    size: usize,
    params: &IvesParams,
    init: &Array2<f64>,
    rng: &mut RandomStream,
) -> Result<Array2<f64>, SimError> {
    simulate_grid_2d_from_with_edges(size, EdgeBehavior::Absorb, params, init, rng)
}

/// [`simulate_grid_2d_from`] with an explicit boundary policy.
pub fn simulate_grid_2d_from_with_edges(
    size: usize,
    edge: EdgeBehavior,
    params: &IvesParams,
    init: &Array2<f64>,
    rng: &mut RandomStream,
) -> Result<Array2<f64>, SimError> {
    let grid = Grid2D::square(size, edge)?;
    if init.dim() != (size, size) {
        return Err(SimError::ShapeMismatch {
            name: "init",
            expected: (size, size),
            actual: init.dim(),
        });
    }
    // Logical row-major order, whatever the memory layout of `init`.
    let flat: Vec<f64> = init.iter().copied().collect();
    let state = simulate(&grid, params, IvesVariant::Coupled, Some(&flat[..]), rng)?;
    Ok(to_matrix(size, &state))
}

fn to_matrix(size: usize, state: &[f64]) -> Array2<f64> {
    Array2::from_shape_fn((size, size), |(r, c)| state[r * size + c])
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotspot_space::SpaceError;
    use ndarray::array;

    fn frozen(steps: usize) -> IvesParams {
        IvesParams::builder()
            .alpha_t(1.0)
            .sd0(0.0)
            .steps(steps)
            .build()
            .unwrap()
    }

    #[test]
    fn size_zero_is_rejected() {
        let params = IvesParams::neutral(0.5, 0.5, 1.0, 2).unwrap();
        let err = simulate_grid_2d(0, &params, &mut RandomStream::from_seed(0)).unwrap_err();
        assert!(matches!(err, SimError::Space(SpaceError::EmptySpace)));
        let err = simulate_grid_1d(0, &params, &[], &mut RandomStream::from_seed(0)).unwrap_err();
        assert!(matches!(err, SimError::Space(SpaceError::EmptySpace)));
    }

    #[test]
    fn init_matrix_shape_checked() {
        let err = simulate_grid_2d_from(
            3,
            &frozen(1),
            &Array2::zeros((3, 2)),
            &mut RandomStream::from_seed(0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            SimError::ShapeMismatch {
                name: "init",
                expected: (3, 3),
                actual: (3, 2)
            }
        );
    }

    #[test]
    fn init_vector_length_checked() {
        let err = simulate_grid_1d(4, &frozen(1), &[0.0; 3], &mut RandomStream::from_seed(0))
            .unwrap_err();
        assert!(matches!(err, SimError::LengthMismatch { name: "init", .. }));
    }

    #[test]
    fn persistence_keeps_matrix_layout() {
        let init = array![[1.0, 2.0], [3.0, 4.0]];
        let out = simulate_grid_2d_from(2, &frozen(4), &init, &mut RandomStream::from_seed(0))
            .unwrap();
        assert_eq!(out, init);

        // A transposed view is read in logical order too.
        let t = init.t().to_owned();
        let out = simulate_grid_2d_from(2, &frozen(4), &t.t().to_owned(), &mut RandomStream::from_seed(0))
            .unwrap();
        assert_eq!(out, init);
    }

    // ── Boundary policy ───────────────────────────────────────────

    fn pure_smoothing() -> IvesParams {
        IvesParams::builder()
            .alpha_s(1.0)
            .sd0(0.0)
            .steps(1)
            .build()
            .unwrap()
    }

    #[test]
    fn absorb_line_ends_see_one_neighbour() {
        let out = simulate_grid_1d(
            4,
            &pure_smoothing(),
            &[1.0, 2.0, 3.0, 4.0],
            &mut RandomStream::from_seed(0),
        )
        .unwrap();
        assert_eq!(out, vec![2.0, 2.0, 3.0, 3.0]);
    }

    #[test]
    fn wrap_line_ends_see_the_far_end() {
        let out = simulate_grid_1d_with_edges(
            4,
            EdgeBehavior::Wrap,
            &pure_smoothing(),
            &[1.0, 2.0, 3.0, 4.0],
            &mut RandomStream::from_seed(0),
        )
        .unwrap();
        assert_eq!(out, vec![3.0, 2.0, 3.0, 2.0]);
    }

    #[test]
    fn absorb_corner_averages_two_neighbours() {
        let init = array![[0.0, 2.0, 0.0], [4.0, 0.0, 0.0], [0.0, 0.0, 6.0]];
        let out = simulate_grid_2d_from(3, &pure_smoothing(), &init, &mut RandomStream::from_seed(0))
            .unwrap();
        assert_eq!(out[[0, 0]], 3.0);
        assert_eq!(out[[2, 2]], 0.0);
        // Centre: (2 + 4 + 0 + 0) / 4.
        assert_eq!(out[[1, 1]], 1.5);
    }

    #[test]
    fn wrap_corner_averages_four_neighbours() {
        let init = array![[0.0, 2.0, 0.0], [4.0, 0.0, 0.0], [0.0, 0.0, 6.0]];
        let out = simulate_grid_2d_from_with_edges(
            3,
            EdgeBehavior::Wrap,
            &pure_smoothing(),
            &init,
            &mut RandomStream::from_seed(0),
        )
        .unwrap();
        // (0,0) wraps to (2,0) above and (0,2) to the left: (0 + 0 + 2 + 4) / 4.
        assert_eq!(out[[0, 0]], 1.5);
        // (2,2): north (1,2)=0, west (2,1)=0, east (2,0)=0, south (0,2)=0.
        assert_eq!(out[[2, 2]], 0.0);
    }

    #[test]
    fn constant_field_is_a_fixed_point_for_every_edge() {
        let init = Array2::from_elem((4, 4), 2.5);
        for edge in [EdgeBehavior::Absorb, EdgeBehavior::Clamp, EdgeBehavior::Wrap] {
            let out = simulate_grid_2d_from_with_edges(
                4,
                edge,
                &pure_smoothing(),
                &init,
                &mut RandomStream::from_seed(0),
            )
            .unwrap();
            assert_eq!(out, init, "{edge:?}");
        }
    }
}
