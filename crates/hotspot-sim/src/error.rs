//! Error types for simulation runs.

use hotspot_space::SpaceError;
use std::error::Error;
use std::fmt;

/// Errors from parameter validation and simulation entry points.
///
/// All shape checks run before the first random draw, so a failed call
/// leaves the caller's stream untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum SimError {
    /// `nt` is zero or was never set.
    ZeroSteps,
    /// A scalar or per-site parameter is out of its domain.
    InvalidParameter {
        /// Parameter name (`alpha_t`, `svec`, ...).
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// A per-site vector does not match the site count.
    LengthMismatch {
        /// Parameter name.
        name: &'static str,
        /// Site count.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },
    /// An initial matrix does not match the lattice shape.
    ShapeMismatch {
        /// Parameter name.
        name: &'static str,
        /// Lattice shape `(rows, cols)`.
        expected: (usize, usize),
        /// Supplied shape.
        actual: (usize, usize),
    },
    /// The neighbour source could not be built.
    Space(SpaceError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSteps => write!(f, "nt must be at least 1"),
            Self::InvalidParameter { name, reason } => write!(f, "invalid {name}: {reason}"),
            Self::LengthMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "{name} has {actual} entries but there are {expected} sites"
            ),
            Self::ShapeMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "{name} is {}x{} but the lattice is {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Self::Space(e) => write!(f, "neighbour source: {e}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for SimError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

/// Reject the first non-finite entry of `values`.
pub(crate) fn check_finite(name: &'static str, values: &[f64]) -> Result<(), SimError> {
    match values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        Some((site, v)) => Err(SimError::InvalidParameter {
            name,
            reason: format!("entry {site} is not finite ({v})"),
        }),
        None => Ok(()),
    }
}

/// Reject a vector whose length is not `site_count`.
pub(crate) fn check_len(
    name: &'static str,
    site_count: usize,
    values: &[f64],
) -> Result<(), SimError> {
    if values.len() == site_count {
        Ok(())
    } else {
        Err(SimError::LengthMismatch {
            name,
            expected: site_count,
            actual: values.len(),
        })
    }
}
