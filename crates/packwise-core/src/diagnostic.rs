//! # Generation Diagnostics
//!
//! Unknown identifiers never fail generation: they contribute no rule matches
//! on their axis. They are recorded here so hosts can surface typos that
//! would otherwise go unnoticed.

use serde::{Deserialize, Serialize};

use crate::vocabulary::Axis;

/// A non-fatal observation made while resolving a trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The value is not part of the vocabulary for its axis.
    UnrecognizedIdentifier {
        /// Axis the value was found on.
        axis: Axis,
        /// The raw value as supplied.
        value: String,
    },
    /// The option exists but does not apply to the selected mode.
    InapplicableOption {
        /// Option axis.
        axis: Axis,
        /// The raw option value as supplied.
        value: String,
        /// The selected mode, or `None` when no mode was selected.
        mode: Option<String>,
    },
}

impl Diagnostic {
    /// The axis this diagnostic concerns.
    pub fn axis(&self) -> Axis {
        match self {
            Self::UnrecognizedIdentifier { axis, .. } | Self::InapplicableOption { axis, .. } => {
                *axis
            }
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedIdentifier { axis, value } => {
                write!(f, "unrecognized {axis} value '{value}'")
            }
            Self::InapplicableOption { axis, value, mode } => match mode {
                Some(mode) => write!(f, "{axis} value '{value}' does not apply to '{mode}'"),
                None => write!(f, "{axis} value '{value}' given without a mode"),
            },
        }
    }
}
