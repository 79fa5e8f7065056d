//! Spatial neighbour structures for neutral hotspot analysis.
//!
//! This crate defines the [`Neighbourhood`] trait, the neighbour source
//! consumed by both the autocorrelation statistics and the simulator,
//! along with its implementations.
//!
//! # Neighbour sources
//!
//! - [`NeighbourList`]: explicit ragged adjacency in CSR layout, built from
//!   point coordinates with [`build_neighbours`] or from caller-supplied
//!   lists with [`NeighbourList::from_lists`]
//! - [`Line1D`]: implicit 1D lattice with configurable [`EdgeBehavior`]
//! - [`Grid2D`]: implicit 4-connected 2D lattice with configurable
//!   [`EdgeBehavior`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod lattice;
pub mod neighbourhood;
pub mod neighbours;
pub mod points;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use lattice::{Grid2D, Line1D};
pub use neighbourhood::Neighbourhood;
pub use neighbours::NeighbourList;
pub use points::{build_neighbours, PointSet};
