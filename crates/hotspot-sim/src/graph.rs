//! Entry points over an explicit neighbour graph.

use crate::error::SimError;
use crate::ives::{simulate, simulate_trajectory};
use crate::params::IvesParams;
use hotspot_core::{IvesVariant, RandomStream};
use hotspot_space::NeighbourList;
use ndarray::Array2;

/// Final state of the Coupled recurrence over `nbs`, with a drawn initial
/// state.
pub fn simulate_graph(
    nbs: &NeighbourList,
    params: &IvesParams,
    rng: &mut RandomStream,
) -> Result<Vec<f64>, SimError> {
    simulate(nbs, params, IvesVariant::Coupled, None, rng)
}

/// Final state of the Smoothed recurrence over `nbs`, with a drawn initial
/// state.
///
/// Each step applies the temporal update first and then blends every site
/// with the mean of its neighbours' updated values, weighted by `alpha_s`.
pub fn simulate_graph_spatial(
    nbs: &NeighbourList,
    params: &IvesParams,
    rng: &mut RandomStream,
) -> Result<Vec<f64>, SimError> {
    simulate(nbs, params, IvesVariant::Smoothed, None, rng)
}

/// Final state of the Coupled recurrence starting from `init`.
pub fn simulate_graph_from(
    nbs: &NeighbourList,
    params: &IvesParams,
    init: &[f64],
    rng: &mut RandomStream,
) -> Result<Vec<f64>, SimError> {
    simulate(nbs, params, IvesVariant::Coupled, Some(init), rng)
}

/// Full `nt × n` trajectory of the Coupled recurrence over `nbs`.
pub fn simulate_graph_trajectory(
    nbs: &NeighbourList,
    params: &IvesParams,
    rng: &mut RandomStream,
) -> Result<Array2<f64>, SimError> {
    simulate_trajectory(nbs, params, IvesVariant::Coupled, None, rng)
}

/// One neutral surface: Coupled recurrence with uniform scale `sd0` and no
/// drift.
///
/// This is the single-trial form of the Monte Carlo engine.
///
/// # Examples
///
/// ```
/// use hotspot_core::RandomStream;
/// use hotspot_sim::neutral_surface;
/// use hotspot_space::build_neighbours;
///
/// let nbs = build_neighbours(&[0.0, 1.0, 2.0], &[0.0, 0.0, 0.0]).unwrap();
/// let mut rng = RandomStream::from_seed(42);
/// let surface = neutral_surface(&nbs, 0.1, 0.1, 0.1, 100, &mut rng).unwrap();
/// assert_eq!(surface.len(), 3);
/// ```
pub fn neutral_surface(
    nbs: &NeighbourList,
    alpha_t: f64,
    alpha_s: f64,
    sd0: f64,
    nt: usize,
    rng: &mut RandomStream,
) -> Result<Vec<f64>, SimError> {
    let params = IvesParams::neutral(alpha_t, alpha_s, sd0, nt)?;
    simulate_graph(nbs, &params, rng)
}
