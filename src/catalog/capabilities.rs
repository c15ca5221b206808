//! Capability, program, and architect catalogs

use crate::core::CapabilityDomain;

/// BIAN-style banking business capabilities
pub const BUSINESS_CAPABILITIES: &[&str] = &[
    "Account Management",
    "Loan Processing",
    "Payment Execution",
    "Customer Identity Management",
    "Regulatory Compliance",
    "Risk Management",
    "Investment Portfolio Management",
    "Card Authorization",
    "Fraud Detection",
    "Customer Onboarding",
    "Trade Settlement",
    "Wealth Management",
    "Channel Management",
    "Product Pricing",
    "Collateral Management",
    "Customer Agreement",
    "Document Management",
    "Financial Accounting",
    "Market Research",
    "Sales Product Matching",
];

/// Combined IT capabilities: ITIL management practices plus CNCF runtime
/// capabilities
pub const IT_CAPABILITIES: &[&str] = &[
    // ITIL management capabilities
    "Incident Management",
    "Change Control",
    "IT Asset Management",
    "Service Desk",
    "Problem Management",
    "Release Management",
    "Service Configuration Management",
    "IT Continuity Management",
    "Capacity & Performance Management",
    "Service Validation & Testing",
    "Infrastructure Management",
    "Application Management",
    "Security Management",
    "API Management",
    "Data Management",
    "Cloud Management",
    "DevOps Management",
    "Monitoring & Event Management",
    "Service Level Management",
    "Knowledge Management",
    // CNCF runtime capabilities
    "Container Orchestration (Kubernetes)",
    "Service Mesh (Istio/Linkerd)",
    "Cloud Native Storage (Rook/Longhorn)",
    "Observability (Prometheus/Grafana)",
    "Serverless Platform (Knative/OpenFaaS)",
    "API Gateway (Envoy/Contour)",
    "Cloud Native Networking (Cilium/Calico)",
    "Distributed Tracing (Jaeger/OpenTelemetry)",
    "Continuous Delivery (Argo/Flux)",
    "Security Policy Enforcement (OPA/Falco)",
    "Event Streaming (NATS/Kafka)",
    "Container Registry (Harbor/Dragonfly)",
    "Database Orchestration (Vitess/TiKV)",
    "Workload Scheduling (KubeEdge/Volcano)",
    "Package Management (Helm/Brigade)",
    "Cloud Native CI/CD (Tekton/Spinnaker)",
    "Secret Management (Vault/Secrets Store CSI)",
    "Auto-scaling (KEDA/Cluster Autoscaler)",
];

/// Portfolio programs, one projects file per entry
pub const PROGRAMS: &[&str] = &[
    "Regulatory Program",
    "Digital Program",
    "IT Core Program",
    "Innovation Program",
    "Credit Program",
    "Market Mandatory Program",
    "KYC-KYT Program",
    "Data Program",
];

pub const ARCHITECTS: &[&str] = &[
    "John Doe",
    "Alice Smith",
    "Bob Wilson",
    "Emma Davis",
    "Mike Brown",
    "Ethan Miller",
    "Sophia Clark",
    "Liam Johnson",
];

/// Generic building blocks for synthesized project names
pub const PROJECT_COMPONENTS: &[&str] = &["Platform", "System", "Cluster"];
pub const PROJECT_ACTIONS: &[&str] = &["Upgrade", "Migration", "Implementation"];

/// Program-specific technology terms used in project names. Programs
/// without an entry fall back to the first word of the program name.
pub fn tech_terms(program: &str) -> &'static [&'static str] {
    match program {
        "IT Core Program" => &["Kubernetes", "Istio", "Prometheus"],
        "Innovation Program" => &["Blockchain", "AI/ML", "Quantum"],
        "Digital Program" => &["Mobile", "API", "Microservices"],
        "Data Program" => &[
            "Data Lake",
            "Analytics",
            "BI",
            "Machine Learning",
            "Data Warehouse",
        ],
        _ => &[],
    }
}

/// Which catalog a capability name belongs to, if any
pub fn domain_of(capability: &str) -> Option<CapabilityDomain> {
    if BUSINESS_CAPABILITIES.contains(&capability) {
        Some(CapabilityDomain::Business)
    } else if IT_CAPABILITIES.contains(&capability) {
        Some(CapabilityDomain::It)
    } else {
        None
    }
}
