//! Team-to-capability mapping generator
//!
//! Shuffles the combined capability catalog once, then deals contiguous
//! chunks of 1..=4 capabilities to the mapping teams in list order. Every
//! capability lands with at most one team; once the pool runs dry the
//! remaining teams simply receive nothing.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog;
use crate::core::CapabilityDomain;
use crate::entities::TeamCapabilityRow;

pub fn generate(rng: &mut impl Rng) -> Vec<TeamCapabilityRow> {
    let mut pool: Vec<&'static str> = catalog::BUSINESS_CAPABILITIES
        .iter()
        .chain(catalog::IT_CAPABILITIES)
        .copied()
        .collect();
    pool.shuffle(rng);

    let mut rows = Vec::new();
    let mut next = 0;
    for team in catalog::MAPPING_TEAMS {
        let claim = rng.random_range(1..=4);
        for _ in 0..claim {
            if next >= pool.len() {
                break;
            }
            let capability = pool[next];
            next += 1;
            rows.push(TeamCapabilityRow {
                team_name: team.to_string(),
                capability_domain: catalog::domain_of(capability)
                    .unwrap_or(CapabilityDomain::It),
                capability_name: capability.to_string(),
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_no_capability_is_assigned_twice() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let rows = generate(&mut rng);
            let mut seen = HashSet::new();
            for row in &rows {
                assert!(
                    seen.insert(row.capability_name.as_str()),
                    "seed {seed}: {} assigned twice",
                    row.capability_name
                );
            }
        }
    }

    #[test]
    fn test_each_team_claims_at_most_four() {
        let mut rng = StdRng::seed_from_u64(7);
        let rows = generate(&mut rng);
        let mut per_team: HashMap<&str, usize> = HashMap::new();
        for row in &rows {
            *per_team.entry(&row.team_name).or_default() += 1;
        }
        for (team, count) in per_team {
            assert!((1..=4).contains(&count), "{team}: {count} capabilities");
        }
    }

    #[test]
    fn test_teams_are_served_in_list_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let rows = generate(&mut rng);
        let mut last_index = 0;
        for row in &rows {
            let index = catalog::MAPPING_TEAMS
                .iter()
                .position(|t| *t == row.team_name)
                .expect("unknown team");
            assert!(index >= last_index, "{} out of order", row.team_name);
            last_index = index;
        }
    }

    #[test]
    fn test_domains_match_source_catalog() {
        let mut rng = StdRng::seed_from_u64(9);
        for row in generate(&mut rng) {
            let expected = catalog::domain_of(&row.capability_name).expect("unknown capability");
            assert_eq!(row.capability_domain, expected);
        }
    }

    #[test]
    fn test_pool_never_overdrawn() {
        let total = catalog::BUSINESS_CAPABILITIES.len() + catalog::IT_CAPABILITIES.len();
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(generate(&mut rng).len() <= total);
        }
    }
}
