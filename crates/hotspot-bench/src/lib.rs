//! Benchmark profiles for the hotspot workspace.
//!
//! - [`random_points`]: deterministic uniform points from a seed
//! - [`reference_params`]: 50-step neutral parameters
//! - [`reference_engine`]: 2K-site point graph, 100 trials, all statistics

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hotspot_core::{IvesVariant, RandomStream, StatisticKind};
use hotspot_engine::{EngineConfig, EngineError, NeutralHotspotEngine};
use hotspot_sim::{IvesParams, SimError};
use hotspot_space::{build_neighbours, NeighbourList, SpaceError};

/// `n` points uniform in `[0, extent)²`, drawn from stream 0 of `seed`.
pub fn random_points(n: usize, extent: f64, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = RandomStream::from_seed(seed);
    (0..n)
        .map(|_| (rng.uniform() * extent, rng.uniform() * extent))
        .unzip()
}

/// Neighbour graph over [`random_points`].
pub fn random_graph(n: usize, seed: u64) -> Result<NeighbourList, SpaceError> {
    let extent = (n as f64).sqrt();
    let (x, y) = random_points(n, extent, seed);
    build_neighbours(&x, &y)
}

/// `alpha_t = alpha_s = 0.4`, `sd0 = 1`, 50 steps.
pub fn reference_params() -> Result<IvesParams, SimError> {
    IvesParams::neutral(0.4, 0.4, 1.0, 50)
}

/// 2K-site random graph, 100 trials, every statistic.
pub fn reference_engine(
    seed: u64,
    workers: Option<usize>,
) -> Result<NeutralHotspotEngine, EngineError> {
    let nbs = random_graph(2_000, seed).map_err(|e| EngineError::Params(e.into()))?;
    let config = EngineConfig {
        seed,
        ntests: 100,
        statistics: StatisticKind::ALL.to_vec(),
        variant: IvesVariant::Coupled,
        worker_count: workers,
    };
    let params = reference_params().map_err(EngineError::Params)?;
    NeutralHotspotEngine::new(nbs, params, config)
}
