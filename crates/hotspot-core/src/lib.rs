//! Core types shared by every crate in the neutral hotspot workspace.
//!
//! This crate holds the pieces that the neighbour, statistic, simulator,
//! and engine crates all agree on:
//!
//! - [`StatisticKind`] and [`IvesVariant`]: closed selector enumerations,
//!   parsed from binding-layer strings via [`FromStr`](std::str::FromStr).
//! - [`RandomStream`]: the explicit, caller-owned random stream consumed by
//!   every stochastic entry point, with deterministic per-trial sub-streams.
//! - [`SelectorError`]: rejection of unknown selector strings.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod kind;
pub mod stream;

pub use error::SelectorError;
pub use kind::{IvesVariant, StatisticKind};
pub use stream::RandomStream;
