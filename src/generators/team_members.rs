//! Team members generator
//!
//! Populates every roster team with a random set of named members, one of
//! whom is the leader. Full names are unique within a team; the name space
//! (20 first x 20 last) dwarfs the largest roster, so collision retries
//! terminate quickly in practice.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::catalog::{self, teams::TeamKind};
use crate::entities::TeamMemberRow;
use crate::generators::pick;

/// Generate the full roster across all teams
pub fn generate(rng: &mut impl Rng) -> Vec<TeamMemberRow> {
    let mut rows = Vec::new();
    for team in catalog::ROSTER_TEAMS {
        generate_team(team, rng, &mut rows);
    }
    rows
}

fn generate_team(team: &str, rng: &mut impl Rng, out: &mut Vec<TeamMemberRow>) {
    let kind = catalog::classify_team(team);
    let member_count = rng.random_range(5..=12);
    let leader_index = rng.random_range(0..member_count);

    let mut used_names: HashSet<String> = HashSet::new();
    for index in 0..member_count {
        let full_name = draw_unique_name(rng, &mut used_names);
        let job_function = *pick(rng, kind.job_functions());
        let is_leader = index == leader_index;

        let role_count = rng.random_range(1..=3);
        let mut roles: Vec<&str> = kind
            .roles()
            .choose_multiple(rng, role_count)
            .copied()
            .collect();
        if is_leader {
            roles.insert(0, catalog::leadership_role(kind));
        }

        out.push(TeamMemberRow {
            team_name: team.to_string(),
            full_name,
            job_function: job_function.to_string(),
            is_team_leader: is_leader,
            roles: roles.join(", "),
        });
    }
}

fn draw_unique_name(rng: &mut impl Rng, used: &mut HashSet<String>) -> String {
    loop {
        let name = format!(
            "{} {}",
            pick(rng, catalog::FIRST_NAMES),
            pick(rng, catalog::LAST_NAMES)
        );
        if used.insert(name.clone()) {
            return name;
        }
    }
}
