//! Simulation parameters and their builder.

use crate::error::{check_finite, check_len, SimError};

/// Per-site innovation scale.
#[derive(Clone, Debug, PartialEq)]
pub enum Innovation {
    /// The same standard deviation `sd0` at every site.
    Uniform(f64),
    /// One standard deviation per site (`svec`).
    PerSite(Vec<f64>),
}

impl Innovation {
    /// Innovation scale at `site`.
    #[inline]
    pub fn scale(&self, site: usize) -> f64 {
        match self {
            Self::Uniform(sd0) => *sd0,
            Self::PerSite(svec) => svec[site],
        }
    }

    fn check(&self) -> Result<(), SimError> {
        match self {
            Self::Uniform(sd0) => {
                if !sd0.is_finite() || *sd0 < 0.0 {
                    return Err(SimError::InvalidParameter {
                        name: "sd0",
                        reason: format!("must be finite and >= 0, got {sd0}"),
                    });
                }
            }
            Self::PerSite(svec) => {
                check_finite("svec", svec)?;
                if let Some((site, s)) = svec.iter().enumerate().find(|(_, s)| **s < 0.0) {
                    return Err(SimError::InvalidParameter {
                        name: "svec",
                        reason: format!("entry {site} is negative ({s})"),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Parameters of one Ives simulation run.
///
/// Immutable once built; validated against a site count by every entry
/// point before any random draw. Constructed via [`IvesParams::builder`]
/// or, for the uniform-scale zero-drift case, [`IvesParams::neutral`].
///
/// # Examples
///
/// ```
/// use hotspot_sim::IvesParams;
///
/// let params = IvesParams::builder()
///     .alpha_t(0.5)
///     .alpha_s(0.3)
///     .steps(100)
///     .scales(vec![0.1, 0.2, 0.1])
///     .drift(vec![1.0, 0.0, -1.0])
///     .build()
///     .unwrap();
/// assert_eq!(params.scale(1), 0.2);
/// assert!(params.validate_for(3).is_ok());
/// assert!(params.validate_for(4).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct IvesParams {
    alpha_t: f64,
    alpha_s: f64,
    steps: usize,
    innovation: Innovation,
    drift: Option<Vec<f64>>,
}

impl IvesParams {
    /// Create a new builder. `steps` is required.
    pub fn builder() -> IvesParamsBuilder {
        IvesParamsBuilder {
            alpha_t: 0.0,
            alpha_s: 0.0,
            steps: None,
            innovation: Innovation::Uniform(1.0),
            drift: None,
        }
    }

    /// Uniform scale `sd0`, zero drift: the neutral-surface parameter set.
    pub fn neutral(alpha_t: f64, alpha_s: f64, sd0: f64, nt: usize) -> Result<Self, SimError> {
        Self::builder()
            .alpha_t(alpha_t)
            .alpha_s(alpha_s)
            .sd0(sd0)
            .steps(nt)
            .build()
    }

    /// Temporal persistence coefficient.
    pub fn alpha_t(&self) -> f64 {
        self.alpha_t
    }

    /// Spatial coupling coefficient.
    pub fn alpha_s(&self) -> f64 {
        self.alpha_s
    }

    /// Number of time steps `nt`.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// How innovation scales are given.
    pub fn innovation(&self) -> &Innovation {
        &self.innovation
    }

    /// Per-site drift, if any.
    pub fn drift(&self) -> Option<&[f64]> {
        self.drift.as_deref()
    }

    /// Innovation scale at `site`.
    #[inline]
    pub fn scale(&self, site: usize) -> f64 {
        self.innovation.scale(site)
    }

    /// Drift at `site` (0 when no drift was given).
    #[inline]
    pub fn drift_at(&self, site: usize) -> f64 {
        self.drift.as_ref().map_or(0.0, |r| r[site])
    }

    /// Check per-site vectors against `site_count`.
    pub fn validate_for(&self, site_count: usize) -> Result<(), SimError> {
        if let Innovation::PerSite(svec) = &self.innovation {
            check_len("svec", site_count, svec)?;
        }
        if let Some(rvec) = &self.drift {
            check_len("rvec", site_count, rvec)?;
        }
        Ok(())
    }
}

/// Builder for [`IvesParams`].
///
/// Required field: `steps`. Defaults: `alpha_t = 0`, `alpha_s = 0`,
/// uniform innovation scale 1, no drift.
#[derive(Clone, Debug)]
pub struct IvesParamsBuilder {
    alpha_t: f64,
    alpha_s: f64,
    steps: Option<usize>,
    innovation: Innovation,
    drift: Option<Vec<f64>>,
}

impl IvesParamsBuilder {
    /// Set the temporal persistence coefficient.
    pub fn alpha_t(mut self, alpha_t: f64) -> Self {
        self.alpha_t = alpha_t;
        self
    }

    /// Set the spatial coupling coefficient.
    pub fn alpha_s(mut self, alpha_s: f64) -> Self {
        self.alpha_s = alpha_s;
        self
    }

    /// Set the number of time steps `nt` (must be >= 1).
    pub fn steps(mut self, nt: usize) -> Self {
        self.steps = Some(nt);
        self
    }

    /// Use one innovation scale `sd0` at every site.
    pub fn sd0(mut self, sd0: f64) -> Self {
        self.innovation = Innovation::Uniform(sd0);
        self
    }

    /// Use a per-site innovation scale `svec`.
    pub fn scales(mut self, svec: Vec<f64>) -> Self {
        self.innovation = Innovation::PerSite(svec);
        self
    }

    /// Set a per-site drift `rvec`.
    pub fn drift(mut self, rvec: Vec<f64>) -> Self {
        self.drift = Some(rvec);
        self
    }

    /// Build the parameter set, validating every field.
    ///
    /// # Errors
    ///
    /// - [`SimError::ZeroSteps`] if `steps` is unset or zero
    /// - [`SimError::InvalidParameter`] for non-finite alphas, negative or
    ///   non-finite scales, or non-finite drift
    ///
    /// Lengths of `svec`/`rvec` are checked later, against the site count,
    /// by [`IvesParams::validate_for`].
    pub fn build(self) -> Result<IvesParams, SimError> {
        let steps = match self.steps {
            Some(nt) if nt > 0 => nt,
            _ => return Err(SimError::ZeroSteps),
        };
        for (name, value) in [("alpha_t", self.alpha_t), ("alpha_s", self.alpha_s)] {
            if !value.is_finite() {
                return Err(SimError::InvalidParameter {
                    name,
                    reason: format!("must be finite, got {value}"),
                });
            }
        }
        self.innovation.check()?;
        if let Some(rvec) = &self.drift {
            check_finite("rvec", rvec)?;
        }
        Ok(IvesParams {
            alpha_t: self.alpha_t,
            alpha_s: self.alpha_s,
            steps,
            innovation: self.innovation,
            drift: self.drift,
        })
    }
}
