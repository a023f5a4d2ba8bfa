//! File-path context registry.

use crate::agents;
use crate::pattern::ContextRule;

/// Acceptance floor applied by the execution strategy: context matches
/// below this confidence are discarded rather than returned.
pub const CONTEXT_CONFIDENCE_FLOOR: f64 = 0.8;

/// Confidence for the `project_type == "infrastructure"` fallback.
pub const INFRASTRUCTURE_PROJECT_CONFIDENCE: f64 = 0.85;

/// Build the ordered context rules, most specific first.
pub fn context_rules() -> Vec<ContextRule> {
    vec![
        ContextRule::new(
            r"(?i)(^|/)(dockerfile|docker-compose[^/]*\.ya?ml)$",
            agents::DEVOPS_ENGINEER,
            0.95,
            "container build file",
        ),
        ContextRule::new(
            r"(?i)\.(tf|tfvars)$",
            agents::DEVOPS_ENGINEER,
            0.95,
            "terraform source",
        ),
        ContextRule::new(
            r"(?i)(^|/)(k8s|kubernetes|helm|charts|manifests)/.*\.ya?ml$",
            agents::DEVOPS_ENGINEER,
            0.9,
            "kubernetes manifest",
        ),
        ContextRule::new(
            r"(?i)(^|/)migrations?/",
            agents::DATABASE_SPECIALIST,
            0.9,
            "migration directory",
        ),
        ContextRule::new(
            r"(?i)\.(sql|prisma)$",
            agents::DATABASE_SPECIALIST,
            0.9,
            "database schema source",
        ),
        ContextRule::new(
            r"(?i)(^|/)(\.eslintrc[^/]*|webpack\.config[^/]*|vite\.config[^/]*|babel\.config[^/]*|tsconfig\.json)$",
            agents::BUILD_ENGINEER,
            0.9,
            "build configuration file",
        ),
        ContextRule::new(
            r"(?i)\.(swift|kt|kts)$",
            agents::MOBILE_DEVELOPER,
            0.9,
            "mobile source file",
        ),
        ContextRule::new(
            r"(?i)\.ipynb$",
            agents::ML_ENGINEER,
            0.85,
            "notebook file",
        ),
        // Below the acceptance floor: recorded for the project-type
        // fallback path but never returned on their own.
        ContextRule::new(
            r"(?i)\.(tsx|jsx)$",
            agents::FRONTEND_DEVELOPER,
            0.7,
            "component source file",
        ),
        ContextRule::new(
            r"(?i)\.(go|rs|java|py|rb)$",
            agents::BACKEND_DEVELOPER,
            0.75,
            "backend source file",
        ),
    ]
}
