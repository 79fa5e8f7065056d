//! Hotspot: the computational core of a neutral hotspot test.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all hotspot sub-crates. For most users, adding `hotspot` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use hotspot::prelude::*;
//!
//! // Five points on a cross; the centre touches all arms.
//! let x = [0.0, -1.0, 1.0, 0.0, 0.0];
//! let y = [0.0, 0.0, 0.0, -1.0, 1.0];
//! let nbs = build_neighbours(&x, &y).unwrap();
//! assert_eq!(nbs.neighbours(0).len(), 4);
//!
//! // Score an observed surface.
//! let observed = [5.0, 1.0, 1.0, 1.0, 1.0];
//! let moran = statistic(&nbs, &observed, StatisticKind::Moran).unwrap();
//!
//! // Build its null distribution from 200 neutral surfaces.
//! let config = EngineConfig {
//!     seed: 42,
//!     ntests: 200,
//!     statistics: vec![StatisticKind::Moran],
//!     ..EngineConfig::default()
//! };
//! let engine = NeutralHotspotEngine::neutral(nbs, 0.1, 0.1, 0.1, 50, config).unwrap();
//! let null = engine.run().unwrap();
//! assert_eq!(null.dim(), (200, 1));
//! assert!(moran.is_finite());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `hotspot-core` | Selector enums, random streams |
//! | [`space`] | `hotspot-space` | Neighbour lists, point-set builder, lattices |
//! | [`stats`] | `hotspot-stats` | Global and local autocorrelation statistics |
//! | [`sim`] | `hotspot-sim` | Ives recurrence and simulation entry points |
//! | [`engine`] | `hotspot-engine` | Parallel Monte Carlo engine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Selector enums and random streams (`hotspot-core`).
pub use hotspot_core as types;

/// Neighbour structures (`hotspot-space`).
///
/// Provides the [`space::Neighbourhood`] trait, explicit
/// [`space::NeighbourList`]s built from points, and the implicit
/// [`space::Line1D`] and [`space::Grid2D`] lattices.
pub use hotspot_space as space;

/// Autocorrelation statistics (`hotspot-stats`).
pub use hotspot_stats as stats;

/// Spatiotemporal simulation (`hotspot-sim`).
///
/// [`sim::simulate`] is the shared recurrence; the graph and grid entry
/// points wrap it for specific neighbour sources.
pub use hotspot_sim as sim;

/// Monte Carlo engine (`hotspot-engine`).
pub use hotspot_engine as engine;

/// Common imports for typical hotspot usage.
///
/// ```rust
/// use hotspot::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use hotspot_core::{IvesVariant, RandomStream, SelectorError, StatisticKind};

    // Space
    pub use hotspot_space::{
        build_neighbours, EdgeBehavior, Grid2D, Line1D, NeighbourList, Neighbourhood, PointSet,
        SpaceError,
    };

    // Statistics
    pub use hotspot_stats::{local_statistics, statistic, statistics, StatError};

    // Simulation
    pub use hotspot_sim::{
        neutral_surface, simulate, simulate_graph, simulate_graph_from, simulate_graph_spatial,
        simulate_graph_trajectory, simulate_grid_1d, simulate_grid_2d, simulate_grid_2d_from,
        IvesParams, SimError,
    };

    // Engine
    pub use hotspot_engine::{CancelToken, EngineConfig, EngineError, NeutralHotspotEngine};
}
