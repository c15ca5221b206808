//! Static vocabulary catalogs
//!
//! Every generator draws from these fixed lookup tables. They are compiled
//! into the binary and never change at runtime.

pub mod capabilities;
pub mod patterns;
pub mod teams;

pub use capabilities::{
    domain_of, tech_terms, ARCHITECTS, BUSINESS_CAPABILITIES, IT_CAPABILITIES, PROGRAMS,
    PROJECT_ACTIONS, PROJECT_COMPONENTS,
};
pub use patterns::{
    default_role, resolve_pattern, Pattern, PatternSource, ResolvedPattern, ResolvedRole,
    RoleTemplate, BUSINESS_FUNCTIONS, BUSINESS_RATIO_MAX, BUSINESS_RATIO_MIN, DEFAULT_ROLES,
    IT_FUNCTIONS,
};
pub use teams::{
    classify_team, leadership_role, TeamKind, FIRST_NAMES, LAST_NAMES, MAPPING_TEAMS,
    ROSTER_TEAMS,
};
