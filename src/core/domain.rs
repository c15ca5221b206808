//! Domain enumerations shared by all generator pipelines
//!
//! Capability domains, actions, and project phases travel through the
//! spreadsheet files as plain strings; these enums normalize them at the
//! boundaries instead of relying on loose string matching.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a capability as business-side or IT-side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapabilityDomain {
    Business,
    #[serde(rename = "IT")]
    It,
}

impl std::fmt::Display for CapabilityDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapabilityDomain::Business => write!(f, "Business"),
            CapabilityDomain::It => write!(f, "IT"),
        }
    }
}

impl std::str::FromStr for CapabilityDomain {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "business" => Ok(CapabilityDomain::Business),
            "it" => Ok(CapabilityDomain::It),
            _ => Err(ParseEnumError {
                kind: "capability domain",
                value: s.to_string(),
            }),
        }
    }
}

/// The nature of work a project performs on a capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Create,
    Update,
    Delete,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Create, Action::Update, Action::Delete];

    /// Effort multiplier applied to man-day estimates for this action.
    ///
    /// Creating a capability is the baseline; updates and deletions are
    /// progressively cheaper (1.0 > 0.6 > 0.3).
    pub fn multiplier(self) -> f64 {
        match self {
            Action::Create => 1.0,
            Action::Update => 0.6,
            Action::Delete => 0.3,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Create => write!(f, "Create"),
            Action::Update => write!(f, "Update"),
            Action::Delete => write!(f, "Delete"),
        }
    }
}

impl std::str::FromStr for Action {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "create" => Ok(Action::Create),
            "update" => Ok(Action::Update),
            "delete" => Ok(Action::Delete),
            _ => Err(ParseEnumError {
                kind: "action",
                value: s.to_string(),
            }),
        }
    }
}

/// Delivery phase of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Initiation,
    Intake,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Initiation => write!(f, "Initiation"),
            Phase::Intake => write!(f, "Intake"),
        }
    }
}

/// Error for unrecognized enum strings read from spreadsheet input
#[derive(Debug, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}
