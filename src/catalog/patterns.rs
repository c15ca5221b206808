//! Resource pattern tables and the three-tier pattern lookup
//!
//! A pattern describes which job functions staff a capability/action pair
//! and their expected effort. Resolution tries, in order:
//!
//! 1. a special override keyed on `(capability name, action)`,
//! 2. the standard pattern for `(domain, action)`,
//! 3. the domain's `Create` pattern with man-days scaled by the action
//!    multiplier,
//! 4. a domain-agnostic default role list, likewise scaled.
//!
//! The first strategy that produces a match wins.

use crate::core::{Action, CapabilityDomain};

/// A role template: one job function with its effort range and task list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleTemplate {
    pub function: &'static str,
    pub man_days: (u32, u32),
    pub tasks: &'static [&'static str],
}

/// A named set of role templates
pub type Pattern = &'static [RoleTemplate];

/// Job functions staffed on the business side of an allocation
pub const BUSINESS_FUNCTIONS: &[&str] = &[
    "Business Analyst",
    "Product Owner",
    "Business Process Expert",
    "Compliance Officer",
    "Risk Analyst",
];

/// Job functions staffed on the IT side of an allocation
pub const IT_FUNCTIONS: &[&str] = &[
    "Software Engineer",
    "Test Engineer",
    "Solution Architect",
    "Platform Engineer",
    "Site Reliability Engineer",
    "Security Engineer",
];

/// Bounds for the business share of a capability's people budget
pub const BUSINESS_RATIO_MIN: f64 = 0.30;
pub const BUSINESS_RATIO_MAX: f64 = 0.50;

const BUSINESS_CREATE: Pattern = &[
    RoleTemplate {
        function: "Business Analyst",
        man_days: (15, 30),
        tasks: &[
            "Requirements gathering and documentation",
            "Business process mapping",
            "Stakeholder interviews",
            "Process optimization analysis",
        ],
    },
    RoleTemplate {
        function: "Business Process Expert",
        man_days: (10, 20),
        tasks: &[
            "Process design review",
            "Business rules definition",
            "Process validation",
        ],
    },
    RoleTemplate {
        function: "Product Owner",
        man_days: (5, 10),
        tasks: &[
            "Feature prioritization",
            "Acceptance criteria definition",
            "Business value validation",
        ],
    },
];

const BUSINESS_UPDATE: Pattern = &[
    RoleTemplate {
        function: "Business Analyst",
        man_days: (10, 20),
        tasks: &[
            "Impact analysis",
            "Change requirements documentation",
            "Process update mapping",
        ],
    },
    RoleTemplate {
        function: "Business Process Expert",
        man_days: (5, 15),
        tasks: &["Process modification review", "Updated rules validation"],
    },
];

const BUSINESS_DELETE: Pattern = &[
    RoleTemplate {
        function: "Business Analyst",
        man_days: (5, 10),
        tasks: &[
            "Decommissioning impact analysis",
            "Transition plan documentation",
        ],
    },
    RoleTemplate {
        function: "Business Process Expert",
        man_days: (3, 8),
        tasks: &["Process dependency analysis", "Decommissioning validation"],
    },
];

const IT_CREATE: Pattern = &[
    RoleTemplate {
        function: "Software Engineer",
        man_days: (20, 40),
        tasks: &["Technical design", "Implementation", "Unit testing", "Code review"],
    },
    RoleTemplate {
        function: "Test Engineer",
        man_days: (10, 20),
        tasks: &[
            "Test planning",
            "Test case development",
            "Integration testing",
            "Performance testing",
        ],
    },
    RoleTemplate {
        function: "Solution Architect",
        man_days: (5, 15),
        tasks: &[
            "Architecture design",
            "Technical specifications",
            "Integration patterns definition",
        ],
    },
];

const IT_UPDATE: Pattern = &[
    RoleTemplate {
        function: "Software Engineer",
        man_days: (15, 30),
        tasks: &["Code modification", "Regression testing", "Documentation update"],
    },
    RoleTemplate {
        function: "Test Engineer",
        man_days: (8, 15),
        tasks: &[
            "Test case updates",
            "Integration testing",
            "Regression test execution",
        ],
    },
];

const IT_DELETE: Pattern = &[
    RoleTemplate {
        function: "Software Engineer",
        man_days: (5, 15),
        tasks: &[
            "Code removal planning",
            "Dependency cleanup",
            "System documentation update",
        ],
    },
    RoleTemplate {
        function: "Test Engineer",
        man_days: (3, 10),
        tasks: &["Decommissioning testing", "Test suite cleanup"],
    },
];

/// Standard pattern for a `(domain, action)` pair
pub fn standard_pattern(domain: CapabilityDomain, action: Action) -> Option<Pattern> {
    match (domain, action) {
        (CapabilityDomain::Business, Action::Create) => Some(BUSINESS_CREATE),
        (CapabilityDomain::Business, Action::Update) => Some(BUSINESS_UPDATE),
        (CapabilityDomain::Business, Action::Delete) => Some(BUSINESS_DELETE),
        (CapabilityDomain::It, Action::Create) => Some(IT_CREATE),
        (CapabilityDomain::It, Action::Update) => Some(IT_UPDATE),
        (CapabilityDomain::It, Action::Delete) => Some(IT_DELETE),
    }
}

/// Special overrides for capabilities that need specialized staffing.
/// All current overrides cover the `Create` action only.
const SPECIAL_PATTERNS: &[(&str, Action, Pattern)] = &[
    (
        "Container Orchestration (Kubernetes)",
        Action::Create,
        &[
            RoleTemplate {
                function: "Platform Engineer",
                man_days: (30, 50),
                tasks: &[
                    "Kubernetes cluster design",
                    "Infrastructure as Code implementation",
                    "CI/CD pipeline setup",
                    "Security hardening",
                ],
            },
            RoleTemplate {
                function: "Site Reliability Engineer",
                man_days: (20, 30),
                tasks: &[
                    "Monitoring setup",
                    "Alert configuration",
                    "SLO definition",
                    "Runbook creation",
                ],
            },
        ],
    ),
    (
        "Service Mesh (Istio/Linkerd)",
        Action::Create,
        &[
            RoleTemplate {
                function: "Platform Engineer",
                man_days: (25, 40),
                tasks: &[
                    "Service mesh architecture design",
                    "Traffic management setup",
                    "Security policy implementation",
                ],
            },
            RoleTemplate {
                function: "Site Reliability Engineer",
                man_days: (15, 25),
                tasks: &[
                    "Observability configuration",
                    "Performance baseline definition",
                    "Troubleshooting procedures",
                ],
            },
        ],
    ),
    (
        "AI/ML Platform",
        Action::Create,
        &[
            RoleTemplate {
                function: "Data Scientist",
                man_days: (40, 60),
                tasks: &[
                    "ML model architecture design",
                    "Model training pipeline setup",
                    "Model validation framework",
                    "AI infrastructure configuration",
                ],
            },
            RoleTemplate {
                function: "ML Engineer",
                man_days: (30, 45),
                tasks: &[
                    "Feature engineering pipeline",
                    "Model deployment automation",
                    "Performance optimization",
                    "Model monitoring setup",
                ],
            },
        ],
    ),
    (
        "Regulatory Compliance",
        Action::Create,
        &[
            RoleTemplate {
                function: "Compliance Officer",
                man_days: (25, 40),
                tasks: &[
                    "Regulatory requirements analysis",
                    "Compliance framework design",
                    "Control documentation",
                    "Regulatory reporting setup",
                ],
            },
            RoleTemplate {
                function: "Risk Analyst",
                man_days: (15, 25),
                tasks: &[
                    "Risk assessment",
                    "Control testing design",
                    "Compliance monitoring setup",
                ],
            },
        ],
    ),
    (
        "Infrastructure Architecture",
        Action::Create,
        &[
            RoleTemplate {
                function: "Infrastructure Architect",
                man_days: (35, 55),
                tasks: &[
                    "Infrastructure blueprint design",
                    "Scalability planning",
                    "Disaster recovery design",
                    "Security architecture",
                ],
            },
            RoleTemplate {
                function: "Platform Engineer",
                man_days: (25, 40),
                tasks: &[
                    "Infrastructure as Code implementation",
                    "Automation framework setup",
                    "Performance optimization",
                ],
            },
        ],
    ),
    (
        "Data Architecture",
        Action::Create,
        &[
            RoleTemplate {
                function: "Data Architect",
                man_days: (30, 50),
                tasks: &[
                    "Data model design",
                    "Data flow architecture",
                    "Data governance framework",
                    "Master data management setup",
                ],
            },
            RoleTemplate {
                function: "Data Engineer",
                man_days: (25, 40),
                tasks: &[
                    "ETL pipeline design",
                    "Data quality framework",
                    "Data integration patterns",
                ],
            },
        ],
    ),
    (
        "Private Banking Platform",
        Action::Create,
        &[
            RoleTemplate {
                function: "Business Process Expert",
                man_days: (35, 50),
                tasks: &[
                    "Wealth management workflow design",
                    "Investment process modeling",
                    "Client onboarding framework",
                    "Regulatory compliance integration",
                ],
            },
            RoleTemplate {
                function: "Financial System Architect",
                man_days: (25, 40),
                tasks: &[
                    "Portfolio management system design",
                    "Risk management integration",
                    "Reporting framework setup",
                ],
            },
        ],
    ),
    (
        "Event Streaming Platform",
        Action::Create,
        &[
            RoleTemplate {
                function: "Integration Architect",
                man_days: (30, 45),
                tasks: &[
                    "Event streaming architecture design",
                    "Message flow patterns",
                    "Scalability planning",
                    "Event schema design",
                ],
            },
            RoleTemplate {
                function: "Platform Engineer",
                man_days: (20, 35),
                tasks: &[
                    "Kafka cluster setup",
                    "Stream processing implementation",
                    "Monitoring and alerting configuration",
                ],
            },
        ],
    ),
    (
        "Security Operations Center",
        Action::Create,
        &[
            RoleTemplate {
                function: "Security Architect",
                man_days: (40, 60),
                tasks: &[
                    "Security monitoring architecture",
                    "Incident response framework",
                    "Security tool integration",
                    "Threat detection design",
                ],
            },
            RoleTemplate {
                function: "Security Engineer",
                man_days: (30, 45),
                tasks: &[
                    "SIEM implementation",
                    "Security automation setup",
                    "Threat hunting framework",
                ],
            },
        ],
    ),
    (
        "Digital Identity Platform",
        Action::Create,
        &[
            RoleTemplate {
                function: "Identity Architect",
                man_days: (35, 50),
                tasks: &[
                    "IAM architecture design",
                    "Authentication framework",
                    "Authorization model",
                    "Identity lifecycle management",
                ],
            },
            RoleTemplate {
                function: "Security Engineer",
                man_days: (25, 40),
                tasks: &[
                    "SSO implementation",
                    "MFA setup",
                    "Directory service integration",
                ],
            },
        ],
    ),
    (
        "API Gateway Platform",
        Action::Create,
        &[
            RoleTemplate {
                function: "API Architect",
                man_days: (30, 45),
                tasks: &[
                    "API gateway architecture",
                    "API security framework",
                    "Rate limiting design",
                    "API documentation framework",
                ],
            },
            RoleTemplate {
                function: "Platform Engineer",
                man_days: (20, 35),
                tasks: &[
                    "Gateway implementation",
                    "API monitoring setup",
                    "Developer portal configuration",
                ],
            },
        ],
    ),
];

/// Special override for a `(capability name, action)` pair
pub fn special_pattern(capability: &str, action: Action) -> Option<Pattern> {
    SPECIAL_PATTERNS
        .iter()
        .find(|(name, a, _)| *name == capability && *a == action)
        .map(|(_, _, roles)| *roles)
}

/// Default man-days ranges and tasks per job function. Effort draws for
/// staffed slots always come from this table, whatever pattern resolved.
pub const DEFAULT_ROLES: Pattern = &[
    // Business job functions
    RoleTemplate {
        function: "Business Analyst",
        man_days: (15, 30),
        tasks: &[
            "Requirements analysis",
            "Process documentation",
            "Stakeholder management",
        ],
    },
    RoleTemplate {
        function: "Product Owner",
        man_days: (10, 20),
        tasks: &["Backlog management", "Feature prioritization", "Value assessment"],
    },
    RoleTemplate {
        function: "Business Process Expert",
        man_days: (12, 25),
        tasks: &[
            "Process optimization",
            "Business rules definition",
            "Process implementation",
        ],
    },
    RoleTemplate {
        function: "Compliance Officer",
        man_days: (10, 20),
        tasks: &[
            "Compliance review",
            "Regulatory assessment",
            "Control documentation",
        ],
    },
    RoleTemplate {
        function: "Risk Analyst",
        man_days: (10, 20),
        tasks: &["Risk assessment", "Control design", "Risk monitoring"],
    },
    // IT job functions
    RoleTemplate {
        function: "Software Engineer",
        man_days: (20, 40),
        tasks: &["Technical implementation", "Code development", "Unit testing"],
    },
    RoleTemplate {
        function: "Test Engineer",
        man_days: (15, 30),
        tasks: &["Test planning", "Test execution", "Quality assurance"],
    },
    RoleTemplate {
        function: "Solution Architect",
        man_days: (15, 30),
        tasks: &["Architecture design", "Technical guidance", "Solution review"],
    },
    RoleTemplate {
        function: "Platform Engineer",
        man_days: (20, 35),
        tasks: &["Platform development", "Infrastructure setup", "Platform maintenance"],
    },
    RoleTemplate {
        function: "Site Reliability Engineer",
        man_days: (15, 30),
        tasks: &[
            "Reliability monitoring",
            "Performance optimization",
            "Incident response",
        ],
    },
    RoleTemplate {
        function: "Security Engineer",
        man_days: (15, 30),
        tasks: &["Security implementation", "Security testing", "Security monitoring"],
    },
];

/// Default entry for a job function
pub fn default_role(function: &str) -> Option<&'static RoleTemplate> {
    DEFAULT_ROLES.iter().find(|r| r.function == function)
}

/// Which lookup strategy produced a resolved pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSource {
    /// Exact `(capability, action)` override
    Special,
    /// Standard `(domain, action)` pattern
    Standard,
    /// Domain `Create` pattern rescaled by the action multiplier
    ScaledCreate,
    /// Domain-agnostic default list rescaled by the action multiplier
    Default,
}

/// One role of a resolved pattern, man-days possibly rescaled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRole {
    pub function: &'static str,
    pub man_days: (u32, u32),
    pub tasks: &'static [&'static str],
}

/// Outcome of the three-tier pattern lookup
#[derive(Debug, Clone)]
pub struct ResolvedPattern {
    pub source: PatternSource,
    pub roles: Vec<ResolvedRole>,
}

impl ResolvedPattern {
    /// Task list for a function, if this pattern names it
    pub fn tasks_for(&self, function: &str) -> Option<&'static [&'static str]> {
        self.roles
            .iter()
            .find(|r| r.function == function)
            .map(|r| r.tasks)
    }
}

/// Resolve the resource pattern for a capability assignment.
///
/// Lookup strategies are tried in order; the first match wins. The scaled
/// tiers only engage when no action-specific pattern exists.
pub fn resolve_pattern(
    capability: &str,
    domain: CapabilityDomain,
    action: Action,
) -> ResolvedPattern {
    if let Some(roles) = special_pattern(capability, action) {
        return ResolvedPattern {
            source: PatternSource::Special,
            roles: unscaled(roles),
        };
    }
    if let Some(roles) = standard_pattern(domain, action) {
        return ResolvedPattern {
            source: PatternSource::Standard,
            roles: unscaled(roles),
        };
    }
    if let Some(roles) = standard_pattern(domain, Action::Create) {
        return ResolvedPattern {
            source: PatternSource::ScaledCreate,
            roles: scaled(roles, action.multiplier()),
        };
    }
    ResolvedPattern {
        source: PatternSource::Default,
        roles: scaled(DEFAULT_ROLES, action.multiplier()),
    }
}

fn unscaled(roles: Pattern) -> Vec<ResolvedRole> {
    roles
        .iter()
        .map(|r| ResolvedRole {
            function: r.function,
            man_days: r.man_days,
            tasks: r.tasks,
        })
        .collect()
}

/// Rescale a pattern's man-day ranges by an action multiplier, flooring
/// both ends
pub fn scaled(roles: Pattern, multiplier: f64) -> Vec<ResolvedRole> {
    roles
        .iter()
        .map(|r| ResolvedRole {
            function: r.function,
            man_days: (
                (r.man_days.0 as f64 * multiplier).floor() as u32,
                (r.man_days.1 as f64 * multiplier).floor() as u32,
            ),
            tasks: r.tasks,
        })
        .collect()
}
