//! Monte Carlo engine for neutral hotspot null distributions.
//!
//! [`NeutralHotspotEngine`] runs `ntests` independent simulations over one
//! shared neighbour source and scores each final surface with every
//! configured [`StatisticKind`](hotspot_core::StatisticKind), producing a
//! trials × statistics matrix. Trial `t` always draws from sub-stream `t`
//! of the master seed, so output is identical for any worker count.
//!
//! Runs can be stopped between trials through a [`CancelToken`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cancel;
pub mod config;
pub mod engine;
pub mod error;
pub mod profile;

pub use cancel::CancelToken;
pub use config::{ConfigError, EngineConfig};
pub use engine::NeutralHotspotEngine;
pub use error::EngineError;
