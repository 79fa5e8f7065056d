//! The Ives recurrence core shared by every entry point.
//!
//! ```text
//! Coupled:   x[i,t+1] = αt·x[i,t] + αs·mean(x[N(i),t]) + r[i] + s[i]·z
//! Smoothed:  y[i]     = αt·x[i,t] + r[i] + s[i]·z
//!            x[i,t+1] = (1 − αs)·y[i] + αs·mean(y[N(i)])
//! ```
//!
//! For Coupled the mean over an empty neighbour set is 0; for Smoothed a
//! site without neighbours keeps `y[i]`. `z` is one standard normal per
//! site per step, drawn in site order before the spatial term is formed.

use crate::error::{check_finite, check_len, SimError};
use crate::params::IvesParams;
use hotspot_core::{IvesVariant, RandomStream};
use hotspot_space::Neighbourhood;
use ndarray::Array2;
use tracing::trace;

/// Run `params.steps()` steps over `nbs` and return the final state.
///
/// When `init` is `None` the initial state is one innovation draw per
/// site (`s[i]·z`), taken from `rng` before step 1.
///
/// # Errors
///
/// [`SimError::LengthMismatch`] if `svec`, `rvec` or `init` do not match
/// `nbs.site_count()`; [`SimError::InvalidParameter`] for a non-finite
/// initial value. Nothing is drawn from `rng` on error.
///
/// # Examples
///
/// ```
/// use hotspot_core::{IvesVariant, RandomStream};
/// use hotspot_sim::{simulate, IvesParams};
/// use hotspot_space::NeighbourList;
///
/// let nbs = NeighbourList::from_lists(&[vec![1], vec![0]]).unwrap();
/// let params = IvesParams::builder()
///     .alpha_t(1.0)
///     .sd0(0.0)
///     .steps(10)
///     .build()
///     .unwrap();
/// let mut rng = RandomStream::from_seed(1);
/// let out = simulate(&nbs, &params, IvesVariant::Coupled, Some(&[2.0, 3.0][..]), &mut rng).unwrap();
/// assert_eq!(out, vec![2.0, 3.0]);
/// ```
pub fn simulate<N: Neighbourhood>(
    nbs: &N,
    params: &IvesParams,
    variant: IvesVariant,
    init: Option<&[f64]>,
    rng: &mut RandomStream,
) -> Result<Vec<f64>, SimError> {
    run(nbs, params, variant, init, rng, |_, _| {})
}

/// Like [`simulate`], but return every step's state as an `nt × n` matrix.
///
/// Row `t` is the state after step `t + 1`; the last row equals the
/// result of [`simulate`] under the same stream.
pub fn simulate_trajectory<N: Neighbourhood>(
    nbs: &N,
    params: &IvesParams,
    variant: IvesVariant,
    init: Option<&[f64]>,
    rng: &mut RandomStream,
) -> Result<Array2<f64>, SimError> {
    let mut out = Array2::zeros((params.steps(), nbs.site_count()));
    run(nbs, params, variant, init, rng, |t, state| {
        for (dst, &v) in out.row_mut(t).iter_mut().zip(state) {
            *dst = v;
        }
    })?;
    Ok(out)
}

/// The recurrence loop. `observe(t, state)` is called after step `t + 1`.
pub(crate) fn run<N, F>(
    nbs: &N,
    params: &IvesParams,
    variant: IvesVariant,
    init: Option<&[f64]>,
    rng: &mut RandomStream,
    mut observe: F,
) -> Result<Vec<f64>, SimError>
where
    N: Neighbourhood,
    F: FnMut(usize, &[f64]),
{
    let n = nbs.site_count();
    params.validate_for(n)?;
    if let Some(init) = init {
        check_len("init", n, init)?;
        check_finite("init", init)?;
    }
    trace!(
        sites = n,
        steps = params.steps(),
        %variant,
        stream = rng.stream_id(),
        "simulating"
    );

    let mut state = match init {
        Some(init) => init.to_vec(),
        None => (0..n)
            .map(|i| params.scale(i) * rng.standard_normal())
            .collect(),
    };
    let mut scratch = vec![0.0; n];
    let (alpha_t, alpha_s) = (params.alpha_t(), params.alpha_s());

    for t in 0..params.steps() {
        match variant {
            IvesVariant::Coupled => {
                for (i, next) in scratch.iter_mut().enumerate() {
                    let z = rng.standard_normal();
                    let spatial = nbs.neighbour_mean(i, &state).unwrap_or(0.0);
                    *next = alpha_t * state[i]
                        + alpha_s * spatial
                        + params.drift_at(i)
                        + params.scale(i) * z;
                }
                std::mem::swap(&mut state, &mut scratch);
            }
            IvesVariant::Smoothed => {
                for (i, y) in scratch.iter_mut().enumerate() {
                    let z = rng.standard_normal();
                    *y = alpha_t * state[i] + params.drift_at(i) + params.scale(i) * z;
                }
                for (i, next) in state.iter_mut().enumerate() {
                    let y = scratch[i];
                    *next = match nbs.neighbour_mean(i, &scratch) {
                        Some(mean) => (1.0 - alpha_s) * y + alpha_s * mean,
                        None => y,
                    };
                }
            }
        }
        observe(t, &state);
    }
    Ok(state)
}
