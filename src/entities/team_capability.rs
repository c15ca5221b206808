//! Team-to-capability mapping rows

use serde::{Deserialize, Serialize};

use crate::core::CapabilityDomain;

/// One capability assigned to one team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamCapabilityRow {
    #[serde(rename = "Team Name")]
    pub team_name: String,

    #[serde(rename = "Capability Domain")]
    pub capability_domain: CapabilityDomain,

    #[serde(rename = "Capability Name")]
    pub capability_name: String,
}
