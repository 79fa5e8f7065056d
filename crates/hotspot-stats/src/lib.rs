//! Spatial autocorrelation statistics over any [`Neighbourhood`].
//!
//! - [`statistic`]: one global scalar per value vector (Moran's I,
//!   Geary's C, Getis-Ord G), selected by [`StatisticKind`].
//! - [`local_statistics`]: the per-site decomposition of the same kinds.
//!
//! All statistics use row-standardised weights. Degenerate inputs (fewer
//! than two sites, a constant vector, no edges, a zero denominator) return
//! [`StatisticKind::neutral_value`] instead of NaN; invalid inputs (wrong
//! length, non-finite values) are errors.
//!
//! [`Neighbourhood`]: hotspot_space::Neighbourhood

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod global;
pub mod local;
pub mod moments;

pub use error::StatError;
pub use global::{statistic, statistics};
pub use hotspot_core::StatisticKind;
pub use local::local_statistics;
pub use moments::{CompensatedSum, Moments};
