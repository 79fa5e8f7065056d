//! Ives-style spatiotemporal autoregressive simulator.
//!
//! One recurrence core ([`simulate`]) advances a state vector through `nt`
//! steps over any [`Neighbourhood`]. The graph entry points run it over an
//! explicit [`NeighbourList`]; the grid entry points run it over an
//! implicit [`Line1D`] or [`Grid2D`] lattice. Both [`IvesVariant`]s share
//! the core.
//!
//! Every entry point takes a caller-owned [`RandomStream`] and draws
//! exactly one standard normal per site per step, in site order, so two
//! code paths over the same neighbour order consume identical draws.
//!
//! [`Neighbourhood`]: hotspot_space::Neighbourhood
//! [`NeighbourList`]: hotspot_space::NeighbourList
//! [`Line1D`]: hotspot_space::Line1D
//! [`Grid2D`]: hotspot_space::Grid2D
//! [`IvesVariant`]: hotspot_core::IvesVariant
//! [`RandomStream`]: hotspot_core::RandomStream

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod graph;
pub mod grid;
pub mod ives;
pub mod params;

pub use error::SimError;
pub use graph::{
    neutral_surface, simulate_graph, simulate_graph_from, simulate_graph_spatial,
    simulate_graph_trajectory,
};
pub use grid::{
    simulate_grid_1d, simulate_grid_1d_with_edges, simulate_grid_2d, simulate_grid_2d_from,
    simulate_grid_2d_from_with_edges, simulate_grid_2d_with_edges,
};
pub use ives::{simulate, simulate_trajectory};
pub use params::{Innovation, IvesParams, IvesParamsBuilder};
