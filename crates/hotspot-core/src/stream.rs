//! Explicit, seedable random streams.
//!
//! Every stochastic entry point takes a `&mut RandomStream` rather than
//! touching a global generator. A Monte Carlo run derives one sub-stream per
//! trial from a master seed, so trial `t` sees the same draws no matter
//! which worker thread executes it or in what order.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A caller-owned ChaCha8 random stream.
///
/// Streams are identified by `(seed, stream_id)`. ChaCha's 64-bit stream
/// parameter selects an independent, non-overlapping keystream for the same
/// seed, so [`substream`](Self::substream) gives statistically independent
/// trials without any seed arithmetic.
///
/// # Examples
///
/// ```
/// use hotspot_core::RandomStream;
///
/// let mut a = RandomStream::from_seed(7);
/// let mut b = RandomStream::substream(7, 0);
/// assert_eq!(a.standard_normal(), b.standard_normal());
///
/// let mut c = RandomStream::substream(7, 1);
/// assert_ne!(a.standard_normal(), c.standard_normal());
/// ```
#[derive(Clone, Debug)]
pub struct RandomStream {
    rng: ChaCha8Rng,
    seed: u64,
    stream_id: u64,
}

impl RandomStream {
    /// Stream 0 of `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::substream(seed, 0)
    }

    /// Stream `stream_id` of `seed`.
    ///
    /// `substream(seed, 0)` is identical to `from_seed(seed)`.
    pub fn substream(seed: u64, stream_id: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(stream_id);
        Self {
            rng,
            seed,
            stream_id,
        }
    }

    /// Master seed this stream was derived from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sub-stream identifier.
    pub fn stream_id(&self) -> u64 {
        self.stream_id
    }

    /// Uniform sample in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Standard normal sample via the Box-Muller transform.
    ///
    /// Consumes exactly two uniforms per call, so the number of draws taken
    /// by a simulation depends only on its shape, never on its parameters.
    pub fn standard_normal(&mut self) -> f64 {
        let u1: f64 = self.rng.random::<f64>().max(1e-300); // avoid ln(0)
        let u2: f64 = self.rng.random();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }

    /// Zero-mean normal sample with standard deviation `scale`.
    ///
    /// A draw is consumed even when `scale == 0.0`.
    pub fn normal(&mut self, scale: f64) -> f64 {
        scale * self.standard_normal()
    }
}
