//! Team, job-function, role, and name catalogs

/// Full team list used for roster generation
pub const ROSTER_TEAMS: &[&str] = &[
    // Business domain teams
    "Retail Banking Team",
    "Corporate Banking Team",
    "Investment Banking Team",
    "Wealth Management Team",
    "Treasury Team",
    "Trade Finance Team",
    "Cards & Payments Team",
    "Lending Team",
    "Deposits Team",
    "Customer Service Team",
    "Risk Management Team",
    "Compliance Team",
    "Financial Control Team",
    "Product Development Team",
    "Sales Team",
    // Technology teams
    "Core Banking Platform Team",
    "Digital Banking Team",
    "API Platform Team",
    "Cloud Platform Team",
    "Security Operations Team",
    "Network Operations Team",
    "Database Team",
    "Data Analytics Team",
    "Enterprise Architecture Team",
    "DevOps Team",
    "Quality Assurance Team",
    "Infrastructure Team",
    "Integration Team",
    "Application Support Team",
    "Innovation Team",
    "Microservice Development Team",
    "Low-Code No-Code Development Team",
    "Site Reliability Engineering Team",
    "Central Monitoring Team",
];

/// Subset of teams that receive capability mappings
pub const MAPPING_TEAMS: &[&str] = &[
    // Business domain teams
    "Retail Banking Team",
    "Corporate Banking Team",
    "Investment Banking Team",
    "Wealth Management Team",
    "Treasury Team",
    "Trade Finance Team",
    "Cards & Payments Team",
    "Lending Team",
    "Deposits Team",
    "Customer Service Team",
    "Risk Management Team",
    "Compliance Team",
    "Financial Control Team",
    "Product Development Team",
    "Sales Team",
    // Technology teams
    "Core Banking Platform Team",
    "Digital Banking Team",
    "API Platform Team",
    "Cloud Platform Team",
    "Security Operations Team",
    "Network Operations Team",
    "Database Team",
    "Data Analytics Team",
    "Enterprise Architecture Team",
    "DevOps Team",
    "Quality Assurance Team",
    "Infrastructure Team",
    "Integration Team",
    "Application Support Team",
    "Innovation Team",
];

/// Keywords that mark a team name as a technology team
const TECHNOLOGY_KEYWORDS: &[&str] = &[
    "Platform",
    "DevOps",
    "Security",
    "Network",
    "Database",
    "Infrastructure",
    "Integration",
    "Architecture",
];

/// Classification of a team as business- or technology-oriented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamKind {
    Business,
    Technology,
}

impl TeamKind {
    pub fn job_functions(self) -> &'static [&'static str] {
        match self {
            TeamKind::Business => BUSINESS_JOB_FUNCTIONS,
            TeamKind::Technology => TECHNOLOGY_JOB_FUNCTIONS,
        }
    }

    pub fn roles(self) -> &'static [&'static str] {
        match self {
            TeamKind::Business => BUSINESS_ROLES,
            TeamKind::Technology => TECHNOLOGY_ROLES,
        }
    }
}

/// Classify a team by keyword match on its name. The keyword list is the
/// contract: "Data Analytics Team" is business, "Enterprise Architecture
/// Team" is technology.
pub fn classify_team(team: &str) -> TeamKind {
    if TECHNOLOGY_KEYWORDS.iter().any(|kw| team.contains(kw)) {
        TeamKind::Technology
    } else {
        TeamKind::Business
    }
}

/// Leadership role prepended to the team leader's role list
pub fn leadership_role(kind: TeamKind) -> &'static str {
    match kind {
        TeamKind::Business => "Team Lead",
        TeamKind::Technology => "Technical Team Lead",
    }
}

pub const BUSINESS_JOB_FUNCTIONS: &[&str] = &[
    "Business Analyst",
    "Product Owner",
    "Product Manager",
    "Business Process Expert",
    "Risk Analyst",
    "Compliance Officer",
    "Financial Analyst",
    "Investment Advisor",
    "Relationship Manager",
    "Credit Analyst",
    "Treasury Specialist",
    "Trade Finance Specialist",
    "Customer Service Representative",
    "Sales Manager",
    "Operations Manager",
];

pub const TECHNOLOGY_JOB_FUNCTIONS: &[&str] = &[
    "Software Engineer",
    "DevOps Engineer",
    "System Administrator",
    "Database Administrator",
    "Security Engineer",
    "Network Engineer",
    "Cloud Architect",
    "Solution Architect",
    "Enterprise Architect",
    "Data Scientist",
    "Test Engineer",
    "Scrum Master",
    "Technical Lead",
    "Integration Specialist",
    "Infrastructure Engineer",
    "Site Reliability Engineer",
    "Platform Engineer",
    "Microservice Developer",
    "Low-Code Developer",
    "Monitoring Specialist",
];

pub const BUSINESS_ROLES: &[&str] = &[
    "Product Champion",
    "Domain Expert",
    "Process Owner",
    "Business Stakeholder",
    "Risk Controller",
    "Compliance Guardian",
    "Financial Controller",
    "Client Advisor",
    "Account Manager",
    "Portfolio Manager",
    "Treasury Dealer",
    "Trade Specialist",
    "Service Lead",
    "Sales Coach",
    "Operations Coordinator",
];

pub const TECHNOLOGY_ROLES: &[&str] = &[
    "Tech Lead",
    "DevOps Champion",
    "System Owner",
    "Database Owner",
    "Security Officer",
    "Network Administrator",
    "Cloud Expert",
    "Architecture Owner",
    "Data Steward",
    "Quality Gate Keeper",
    "Agile Coach",
    "Technical Mentor",
    "Integration Lead",
    "Infrastructure Owner",
    "Innovation Champion",
    "SRE Champion",
    "Microservice Architect",
    "Low-Code Platform Owner",
    "Monitoring Lead",
    "Reliability Expert",
    "Platform Developer",
    "Observability Expert",
];

pub const FIRST_NAMES: &[&str] = &[
    "Emma", "Liam", "Olivia", "Noah", "Ava", "Oliver", "Isabella", "William", "Sophia", "James",
    "Charlotte", "Benjamin", "Mia", "Lucas", "Amelia", "Mason", "Harper", "Ethan", "Evelyn",
    "Alexander",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_list_sizes() {
        assert_eq!(ROSTER_TEAMS.len(), 34);
        assert_eq!(MAPPING_TEAMS.len(), 30);
    }

    #[test]
    fn test_mapping_teams_are_a_subset_of_roster_teams() {
        for team in MAPPING_TEAMS {
            assert!(ROSTER_TEAMS.contains(team), "{team} missing from roster");
        }
    }

    #[test]
    fn test_classify_by_keyword() {
        assert_eq!(classify_team("Cloud Platform Team"), TeamKind::Technology);
        assert_eq!(classify_team("DevOps Team"), TeamKind::Technology);
        assert_eq!(classify_team("Retail Banking Team"), TeamKind::Business);
    }

    #[test]
    fn test_classify_quirks_are_preserved() {
        // Keyword match only: no "Analytics" or "Monitoring" keywords.
        assert_eq!(classify_team("Data Analytics Team"), TeamKind::Business);
        assert_eq!(classify_team("Central Monitoring Team"), TeamKind::Business);
        assert_eq!(
            classify_team("Enterprise Architecture Team"),
            TeamKind::Technology
        );
    }

    #[test]
    fn test_name_catalogs() {
        assert_eq!(FIRST_NAMES.len(), 20);
        assert_eq!(LAST_NAMES.len(), 20);
    }
}
