//! Error types for selector parsing.

use std::error::Error;
use std::fmt;

/// An unrecognised selector string was supplied for a closed enumeration.
///
/// The error carries the full list of accepted names so that a binding
/// layer can surface it directly to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorError {
    /// The string did not name any known variant.
    Unknown {
        /// Which selector was being parsed (e.g. `"statistic kind"`).
        selector: &'static str,
        /// The rejected input.
        got: String,
        /// Every accepted name, in declaration order.
        valid: &'static [&'static str],
    },
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown {
                selector,
                got,
                valid,
            } => write!(
                f,
                "unknown {selector} '{got}'; expected one of: {}",
                valid.join(", ")
            ),
        }
    }
}

impl Error for SelectorError {}
