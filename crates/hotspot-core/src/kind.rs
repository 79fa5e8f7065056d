//! Closed selector enumerations for statistics and simulator variants.

use crate::error::SelectorError;
use std::fmt;
use std::str::FromStr;

/// Which spatial autocorrelation statistic to compute.
///
/// All statistics use row-standardised weights (`w_ij = 1 / deg(i)`).
///
/// # Examples
///
/// ```
/// use hotspot_core::StatisticKind;
///
/// let kind: StatisticKind = "geary".parse().unwrap();
/// assert_eq!(kind, StatisticKind::Geary);
/// assert_eq!(kind.neutral_value(), 1.0);
///
/// let err = "variogram".parse::<StatisticKind>().unwrap_err();
/// assert!(err.to_string().contains("moran, geary, getis_ord"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatisticKind {
    /// Moran's I: normalised covariance between a site's deviation from the
    /// global mean and its neighbours' mean deviation.
    Moran,
    /// Geary's C: normalised sum of squared differences between each site
    /// and its neighbours.
    Geary,
    /// Getis-Ord general G: share of the total cross-product mass that
    /// falls on neighbouring pairs.
    GetisOrd,
}

impl StatisticKind {
    /// Every kind, in declaration order.
    pub const ALL: [StatisticKind; 3] = [Self::Moran, Self::Geary, Self::GetisOrd];

    const NAMES: &'static [&'static str] = &["moran", "geary", "getis_ord"];

    /// Canonical lower-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Moran => "moran",
            Self::Geary => "geary",
            Self::GetisOrd => "getis_ord",
        }
    }

    /// Value returned when the statistic is undefined.
    ///
    /// Applies to constant value vectors, fewer than two sites, a
    /// neighbourhood with no edges, or a zero denominator. Each kind
    /// falls back to its "no association" value: 0 for Moran and
    /// Getis-Ord, 1 for Geary.
    pub fn neutral_value(self) -> f64 {
        match self {
            Self::Moran | Self::GetisOrd => 0.0,
            Self::Geary => 1.0,
        }
    }
}

impl fmt::Display for StatisticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StatisticKind {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.name() == normalised)
            .ok_or_else(|| SelectorError::Unknown {
                selector: "statistic kind",
                got: s.to_string(),
                valid: Self::NAMES,
            })
    }
}

/// Which form of the Ives recurrence a simulation runs.
///
/// - **Coupled** (`"ives"`): temporal persistence, neighbour mean, drift,
///   and innovation are summed in a single update from step-`t` state.
/// - **Smoothed** (`"ives_spatial"`): a temporal update (persistence,
///   drift, innovation) is computed first, then blended with the mean of
///   the *updated* neighbour values using `alpha_s` as the blend weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IvesVariant {
    /// Single-stage additive update.
    #[default]
    Coupled,
    /// Temporal update followed by spatial smoothing.
    Smoothed,
}

impl IvesVariant {
    /// Every variant, in declaration order.
    pub const ALL: [IvesVariant; 2] = [Self::Coupled, Self::Smoothed];

    const NAMES: &'static [&'static str] = &["ives", "ives_spatial"];

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Coupled => "ives",
            Self::Smoothed => "ives_spatial",
        }
    }
}

impl fmt::Display for IvesVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IvesVariant {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.name() == normalised)
            .ok_or_else(|| SelectorError::Unknown {
                selector: "simulator variant",
                got: s.to_string(),
                valid: Self::NAMES,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistic_names_round_trip() {
        for kind in StatisticKind::ALL {
            assert_eq!(kind.name().parse::<StatisticKind>().unwrap(), kind);
        }
    }

    #[test]
    fn statistic_parse_is_case_and_whitespace_tolerant() {
        assert_eq!(" Moran ".parse::<StatisticKind>(), Ok(StatisticKind::Moran));
        assert_eq!("GETIS_ORD".parse::<StatisticKind>(), Ok(StatisticKind::GetisOrd));
    }

    #[test]
    fn unknown_statistic_lists_valid_kinds() {
        let err = "lisa".parse::<StatisticKind>().unwrap_err();
        match &err {
            SelectorError::Unknown {
                selector,
                got,
                valid,
            } => {
                assert_eq!(*selector, "statistic kind");
                assert_eq!(got, "lisa");
                assert_eq!(*valid, &["moran", "geary", "getis_ord"]);
            }
        }
        let msg = err.to_string();
        assert!(msg.contains("'lisa'"));
        assert!(msg.contains("moran, geary, getis_ord"));
    }

    #[test]
    fn neutral_values() {
        assert_eq!(StatisticKind::Moran.neutral_value(), 0.0);
        assert_eq!(StatisticKind::Geary.neutral_value(), 1.0);
        assert_eq!(StatisticKind::GetisOrd.neutral_value(), 0.0);
    }

    #[test]
    fn variant_names_match_binding_layer() {
        assert_eq!("ives".parse::<IvesVariant>(), Ok(IvesVariant::Coupled));
        assert_eq!(
            "ives_spatial".parse::<IvesVariant>(),
            Ok(IvesVariant::Smoothed)
        );
        assert_eq!(IvesVariant::default(), IvesVariant::Coupled);
    }

    #[test]
    fn unknown_variant_lists_valid_variants() {
        let msg = "ives_temporal".parse::<IvesVariant>().unwrap_err().to_string();
        assert!(msg.contains("simulator variant"));
        assert!(msg.contains("ives, ives_spatial"));
    }
}
