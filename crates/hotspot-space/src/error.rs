//! Error types for neighbour construction.

use std::fmt;

/// Errors arising from neighbour-structure or lattice construction.
#[derive(Clone, Debug, PartialEq)]
pub enum SpaceError {
    /// The `x` and `y` coordinate sequences differ in length.
    CoordinateLengthMismatch {
        /// Length of `x`.
        x_len: usize,
        /// Length of `y`.
        y_len: usize,
    },
    /// A coordinate is NaN or infinite.
    NonFiniteCoordinate {
        /// Which axis (`"x"` or `"y"`).
        axis: &'static str,
        /// Site index of the offending coordinate.
        site: usize,
        /// The offending value.
        value: f64,
    },
    /// A neighbour list references a site that does not exist.
    NeighbourOutOfRange {
        /// Site whose list contains the bad reference.
        site: usize,
        /// The out-of-range neighbour index.
        neighbour: usize,
        /// Number of sites in the structure.
        site_count: usize,
    },
    /// A neighbour list contains the site itself.
    SelfLoop {
        /// The offending site.
        site: usize,
    },
    /// Attempted to construct a lattice with zero sites.
    EmptySpace,
    /// A lattice dimension is too large for the site count to fit `usize`.
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// The requested size.
        value: usize,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordinateLengthMismatch { x_len, y_len } => {
                write!(f, "x has {x_len} coordinates but y has {y_len}")
            }
            Self::NonFiniteCoordinate { axis, site, value } => {
                write!(f, "{axis}[{site}] is not finite: {value}")
            }
            Self::NeighbourOutOfRange {
                site,
                neighbour,
                site_count,
            } => write!(
                f,
                "site {site} lists neighbour {neighbour}, but only {site_count} sites exist"
            ),
            Self::SelfLoop { site } => write!(f, "site {site} lists itself as a neighbour"),
            Self::EmptySpace => write!(f, "lattice must have at least one site"),
            Self::DimensionTooLarge { name, value } => {
                write!(f, "lattice {name} = {value} overflows the site count")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
