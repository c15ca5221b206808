//! Team roster rows

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One member of a team's roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMemberRow {
    #[serde(rename = "Team Name")]
    pub team_name: String,

    /// Unique within the team
    #[serde(rename = "Full Name")]
    pub full_name: String,

    #[serde(rename = "Job Function")]
    pub job_function: String,

    /// Exactly one member per team carries this flag. Written as
    /// "True"/"False" to match the spreadsheet convention.
    #[serde(
        rename = "Is Team Leader",
        serialize_with = "ser_leader_flag",
        deserialize_with = "de_leader_flag"
    )]
    pub is_team_leader: bool,

    /// Comma-joined role list; the leader's leadership role comes first
    #[serde(rename = "Roles")]
    pub roles: String,
}

fn ser_leader_flag<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *flag { "True" } else { "False" })
}

fn de_leader_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let s = String::deserialize(deserializer)?;
    match s.as_str() {
        "True" | "true" => Ok(true),
        "False" | "false" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid leader flag: {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CsvStore;
    use tempfile::tempdir;

    #[test]
    fn test_leader_flag_serializes_capitalized() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("members.csv");
        CsvStore::write(
            &path,
            &[TeamMemberRow {
                team_name: "Treasury Team".to_string(),
                full_name: "Emma Smith".to_string(),
                job_function: "Treasury Specialist".to_string(),
                is_team_leader: true,
                roles: "Team Lead, Treasury Dealer".to_string(),
            }],
        )
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains(",True,"));

        let rows: Vec<TeamMemberRow> = CsvStore::read(&path).unwrap();
        assert!(rows[0].is_team_leader);
    }
}
