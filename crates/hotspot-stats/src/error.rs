//! Error types for statistic evaluation.

use std::fmt;

/// Errors from statistic evaluation.
///
/// Degenerate-but-valid inputs are not errors; see
/// [`StatisticKind::neutral_value`](hotspot_core::StatisticKind::neutral_value).
#[derive(Clone, Debug, PartialEq)]
pub enum StatError {
    /// The value vector length differs from the neighbourhood's site count.
    LengthMismatch {
        /// Site count of the neighbourhood.
        expected: usize,
        /// Length of the value vector.
        actual: usize,
    },
    /// A value is NaN or infinite.
    NonFiniteValue {
        /// Site index of the offending value.
        site: usize,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for StatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "value vector has {actual} entries but the neighbourhood has {expected} sites"
            ),
            Self::NonFiniteValue { site, value } => {
                write!(f, "value at site {site} is not finite: {value}")
            }
        }
    }
}

impl std::error::Error for StatError {}

/// Check `values` against a neighbourhood of `site_count` sites.
pub(crate) fn check_values(site_count: usize, values: &[f64]) -> Result<(), StatError> {
    if values.len() != site_count {
        return Err(StatError::LengthMismatch {
            expected: site_count,
            actual: values.len(),
        });
    }
    if let Some((site, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(StatError::NonFiniteValue { site, value });
    }
    Ok(())
}
