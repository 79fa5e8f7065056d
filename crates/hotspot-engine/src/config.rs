//! Engine configuration and validation.

use hotspot_core::{IvesVariant, StatisticKind};
use indexmap::IndexSet;
use std::fmt;

/// Configuration for a [`NeutralHotspotEngine`](crate::NeutralHotspotEngine).
///
/// Validated by [`validate`](Self::validate) when the engine is created.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Master seed. Trial `t` uses sub-stream `t` of this seed.
    pub seed: u64,
    /// Number of trials. Must be at least 1.
    pub ntests: usize,
    /// Statistics scored per trial, in output column order. No duplicates.
    pub statistics: Vec<StatisticKind>,
    /// Recurrence form used for every trial.
    pub variant: IvesVariant,
    /// Number of worker threads. `None` = available parallelism.
    pub worker_count: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            ntests: 1000,
            statistics: vec![StatisticKind::Moran],
            variant: IvesVariant::Coupled,
            worker_count: None,
        }
    }
}

impl EngineConfig {
    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
                .clamp(1, 64),
        }
    }

    /// Check the configuration for structural errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ntests == 0 {
            return Err(ConfigError::ZeroTests);
        }
        if self.statistics.is_empty() {
            return Err(ConfigError::NoStatistics);
        }
        let mut seen = IndexSet::with_capacity(self.statistics.len());
        for &kind in &self.statistics {
            if !seen.insert(kind) {
                return Err(ConfigError::DuplicateStatistic { kind });
            }
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EngineConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `ntests` is zero.
    ZeroTests,
    /// No statistic was requested.
    NoStatistics,
    /// A statistic appears more than once.
    DuplicateStatistic {
        /// The repeated kind.
        kind: StatisticKind,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTests => write!(f, "ntests must be at least 1"),
            Self::NoStatistics => write!(f, "at least one statistic is required"),
            Self::DuplicateStatistic { kind } => {
                write!(f, "statistic '{kind}' requested more than once")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_tests_fails() {
        let cfg = EngineConfig {
            ntests: 0,
            ..EngineConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroTests));
    }

    #[test]
    fn empty_statistics_fails() {
        let cfg = EngineConfig {
            statistics: vec![],
            ..EngineConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NoStatistics));
    }

    #[test]
    fn duplicate_statistic_fails() {
        let cfg = EngineConfig {
            statistics: vec![StatisticKind::Geary, StatisticKind::Moran, StatisticKind::Geary],
            ..EngineConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::DuplicateStatistic {
                kind: StatisticKind::Geary
            })
        );
        assert!(cfg.validate().unwrap_err().to_string().contains("geary"));
    }

    #[test]
    fn resolved_worker_count_clamps_zero() {
        let cfg = EngineConfig {
            worker_count: Some(0),
            ..EngineConfig::default()
        };
        assert_eq!(cfg.resolved_worker_count(), 1);
    }

    #[test]
    fn resolved_worker_count_clamps_large() {
        let cfg = EngineConfig {
            worker_count: Some(200),
            ..EngineConfig::default()
        };
        assert_eq!(cfg.resolved_worker_count(), 64);
    }

    #[test]
    fn resolved_worker_count_auto() {
        let count = EngineConfig::default().resolved_worker_count();
        assert!((1..=64).contains(&count), "auto count {count} out of range");
    }
}
