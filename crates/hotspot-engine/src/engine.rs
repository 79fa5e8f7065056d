//! The Monte Carlo driver.

use crate::cancel::CancelToken;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::profile::{self, ProfileAccumulator};
use hotspot_core::RandomStream;
use hotspot_sim::{simulate, IvesParams};
use hotspot_space::{NeighbourList, Neighbourhood};
use hotspot_stats::{local_statistics, statistics};
use ndarray::Array2;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::{info, warn};

/// Trials evaluated per batch when accumulating rank profiles. Fixed so
/// the summation order never depends on the worker count.
const PROFILE_BATCH: usize = 64;

/// Repeated neutral simulations scored into an empirical null distribution.
///
/// The neighbour source and parameters are validated once in
/// [`new`](Self::new) and then shared read-only by every trial. Trial `t`
/// runs with `RandomStream::substream(seed, t)`.
///
/// # Examples
///
/// ```
/// use hotspot_core::StatisticKind;
/// use hotspot_engine::{EngineConfig, NeutralHotspotEngine};
/// use hotspot_sim::IvesParams;
/// use hotspot_space::build_neighbours;
///
/// let nbs = build_neighbours(&[0.0, 1.0, 2.0, 0.0], &[0.0, 0.0, 0.0, 1.0]).unwrap();
/// let params = IvesParams::neutral(0.1, 0.1, 0.1, 50).unwrap();
/// let config = EngineConfig {
///     seed: 1,
///     ntests: 20,
///     statistics: vec![StatisticKind::Moran, StatisticKind::Geary],
///     worker_count: Some(2),
///     ..EngineConfig::default()
/// };
/// let engine = NeutralHotspotEngine::new(nbs, params, config).unwrap();
/// let null = engine.run().unwrap();
/// assert_eq!(null.dim(), (20, 2));
/// ```
#[derive(Debug)]
pub struct NeutralHotspotEngine<N: Neighbourhood = NeighbourList> {
    nbs: N,
    params: IvesParams,
    config: EngineConfig,
    cancel: CancelToken,
}

impl<N: Neighbourhood> NeutralHotspotEngine<N> {
    /// Validate `config` and `params` against `nbs` and build the engine.
    pub fn new(nbs: N, params: IvesParams, config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        params
            .validate_for(nbs.site_count())
            .map_err(EngineError::Params)?;
        Ok(Self {
            nbs,
            params,
            config,
            cancel: CancelToken::new(),
        })
    }

    /// Engine over uniform-scale, zero-drift parameters.
    pub fn neutral(
        nbs: N,
        alpha_t: f64,
        alpha_s: f64,
        sd0: f64,
        nt: usize,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        let params =
            IvesParams::neutral(alpha_t, alpha_s, sd0, nt).map_err(EngineError::Params)?;
        Self::new(nbs, params, config)
    }

    /// Replace the cancellation token.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// A handle to this engine's cancellation token.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// The shared neighbour source.
    pub fn neighbourhood(&self) -> &N {
        &self.nbs
    }

    /// The shared simulation parameters.
    pub fn params(&self) -> &IvesParams {
        &self.params
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Final surface of trial `trial`.
    pub fn surface(&self, trial: usize) -> Result<Vec<f64>, EngineError> {
        let mut rng = RandomStream::substream(self.config.seed, trial as u64);
        simulate(&self.nbs, &self.params, self.config.variant, None, &mut rng)
            .map_err(|error| EngineError::Sim { trial, error })
    }

    /// Statistics of trial `trial`, in configured order.
    ///
    /// Equal to row `trial` of [`run`](Self::run).
    pub fn single_trial(&self, trial: usize) -> Result<Vec<f64>, EngineError> {
        let surface = self.surface(trial)?;
        statistics(&self.nbs, &surface, &self.config.statistics)
            .map_err(|error| EngineError::Stat { trial, error })
    }

    /// Run every trial and return the `ntests × statistics` matrix.
    ///
    /// # Errors
    ///
    /// The first failing trial's error, or [`EngineError::Cancelled`] if
    /// the token was cancelled before every trial had started.
    pub fn run(&self) -> Result<Array2<f64>, EngineError> {
        let pool = self.pool()?;
        let started = Instant::now();
        info!(
            trials = self.config.ntests,
            sites = self.nbs.site_count(),
            statistics = ?self.config.statistics,
            variant = %self.config.variant,
            workers = pool.current_num_threads(),
            "starting neutral hotspot run"
        );

        let rows = self.par_trials(&pool, 0..self.config.ntests, |t| self.single_trial(t))?;

        let cols = self.config.statistics.len();
        let mut out = Array2::zeros((rows.len(), cols));
        for (mut dst, row) in out.rows_mut().into_iter().zip(&rows) {
            for (d, &v) in dst.iter_mut().zip(row) {
                *d = v;
            }
        }
        info!(
            trials = rows.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "neutral hotspot run finished"
        );
        Ok(out)
    }

    /// Mean rank-order profile across all trials.
    ///
    /// Returns an `n × (1 + k)` matrix for `n` sites and `k` configured
    /// statistics. Column 0 is the mean of each trial's unit-scaled,
    /// descending-sorted surface; column `1 + j` is the same for the local
    /// form of statistic `j`.
    pub fn rank_profile(&self) -> Result<Array2<f64>, EngineError> {
        let pool = self.pool()?;
        let started = Instant::now();
        let n = self.nbs.site_count();
        let kinds = &self.config.statistics;
        info!(
            trials = self.config.ntests,
            sites = n,
            statistics = ?kinds,
            workers = pool.current_num_threads(),
            "starting rank profile run"
        );

        let mut acc = ProfileAccumulator::new(n, 1 + kinds.len());
        let mut start = 0;
        while start < self.config.ntests {
            let end = (start + PROFILE_BATCH).min(self.config.ntests);
            let batch = self.par_trials(&pool, start..end, |trial| {
                let surface = self.surface(trial)?;
                let mut columns = Vec::with_capacity(1 + kinds.len());
                for &kind in kinds {
                    let local = local_statistics(&self.nbs, &surface, kind)
                        .map_err(|error| EngineError::Stat { trial, error })?;
                    columns.push(profile::rank_profile(local));
                }
                columns.insert(0, profile::rank_profile(surface));
                Ok(columns)
            })?;
            for columns in &batch {
                acc.add(columns);
            }
            start = end;
        }

        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "rank profile run finished"
        );
        Ok(acc.mean())
    }

    fn pool(&self) -> Result<ThreadPool, EngineError> {
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.resolved_worker_count())
            .thread_name(|i| format!("hotspot-trial-{i}"))
            .build()
            .map_err(|e| EngineError::ThreadPool {
                reason: e.to_string(),
            })
    }

    /// Evaluate `trial_fn` over `trials` on `pool`, results in trial order.
    ///
    /// The cancel token is checked before each trial starts.
    fn par_trials<T, F>(
        &self,
        pool: &ThreadPool,
        trials: Range<usize>,
        trial_fn: F,
    ) -> Result<Vec<T>, EngineError>
    where
        T: Send,
        F: Fn(usize) -> Result<T, EngineError> + Sync,
    {
        let completed = AtomicUsize::new(0);
        let result = pool.install(|| {
            trials
                .into_par_iter()
                .map(|t| {
                    if self.cancel.is_cancelled() {
                        return Err(EngineError::Cancelled);
                    }
                    let out = trial_fn(t)?;
                    completed.fetch_add(1, Ordering::Relaxed);
                    Ok(out)
                })
                .collect::<Result<Vec<T>, EngineError>>()
        });
        if let Err(EngineError::Cancelled) = &result {
            warn!(
                completed = completed.load(Ordering::Relaxed),
                "run cancelled; discarding partial results"
            );
        }
        result
    }
}
