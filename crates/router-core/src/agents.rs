//! Well-known agent identifiers and phase eligibility sets.
//!
//! Agent ids are opaque keys owned by an external, mutable catalog; the
//! constants here name the roles this deployment ships with. They feed the
//! static fallback roster (used when the catalog is unavailable), the
//! category registry targets, and the per-phase eligibility checks. None of
//! them is trusted without a catalog membership check at resolution time.

/// Global default agent and backend-api category target.
pub const BACKEND_DEVELOPER: &str = "backend-developer";

/// Frontend component work (context rules only).
pub const FRONTEND_DEVELOPER: &str = "frontend-developer";

/// Architecture-level planning.
pub const SYSTEM_ARCHITECT: &str = "system-architect";

/// Step-by-step implementation planning.
pub const TASK_PLANNER: &str = "task-planner";

/// Fixed evaluation reviewer.
pub const CODE_REVIEWER: &str = "code-reviewer";

/// Build tooling: linters, formatters, bundlers, CI wiring.
pub const BUILD_ENGINEER: &str = "build-engineer";

/// Infrastructure-as-code and deployment environments.
pub const DEVOPS_ENGINEER: &str = "devops-engineer";

/// Database schema and migration work.
pub const DATABASE_SPECIALIST: &str = "database-specialist";

/// Model training, LLM and embedding work.
pub const ML_ENGINEER: &str = "ml-engineer";

/// iOS/Android/cross-platform app work.
pub const MOBILE_DEVELOPER: &str = "mobile-developer";

/// Agent meta-tooling: creating and configuring agents themselves.
pub const AGENT_EXPERT: &str = "agent-expert";

/// The agent used when every other resolution step is exhausted.
pub const DEFAULT_AGENT: &str = BACKEND_DEVELOPER;

/// The fixed reviewer every evaluation resolves to.
pub const EVALUATION_AGENT: &str = CODE_REVIEWER;

/// Conservative built-in roster used when the live catalog is unavailable
/// or empty.
pub const FALLBACK_ROSTER: &[&str] = &[
    BACKEND_DEVELOPER,
    FRONTEND_DEVELOPER,
    SYSTEM_ARCHITECT,
    TASK_PLANNER,
    CODE_REVIEWER,
    BUILD_ENGINEER,
    DEVOPS_ENGINEER,
    DATABASE_SPECIALIST,
    ML_ENGINEER,
    MOBILE_DEVELOPER,
    AGENT_EXPERT,
];

/// Agents an explicit request may name during planning.
pub const PLANNING_ELIGIBLE: &[&str] = &[SYSTEM_ARCHITECT, TASK_PLANNER];

/// Agents an explicit request may name during execution.
pub const EXECUTION_ELIGIBLE: &[&str] = &[
    BACKEND_DEVELOPER,
    FRONTEND_DEVELOPER,
    BUILD_ENGINEER,
    DEVOPS_ENGINEER,
    DATABASE_SPECIALIST,
    ML_ENGINEER,
    MOBILE_DEVELOPER,
    AGENT_EXPERT,
];

/// The built-in roster as owned strings.
pub fn fallback_roster() -> Vec<String> {
    FALLBACK_ROSTER.iter().map(|s| s.to_string()).collect()
}

/// Whether `id` may be explicitly requested during planning.
pub fn is_planning_eligible(id: &str) -> bool {
    PLANNING_ELIGIBLE.iter().any(|e| e.eq_ignore_ascii_case(id))
}

/// Whether `id` may be explicitly requested during execution.
pub fn is_execution_eligible(id: &str) -> bool {
    EXECUTION_ELIGIBLE.iter().any(|e| e.eq_ignore_ascii_case(id))
}

/// Find `id` in a catalog listing, case-insensitively, returning the
/// catalog's own casing.
pub fn find_in_catalog<'a>(catalog: &'a [String], id: &str) -> Option<&'a str> {
    catalog
        .iter()
        .find(|a| a.eq_ignore_ascii_case(id))
        .map(|a| a.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligibility_sets_are_disjoint() {
        for id in PLANNING_ELIGIBLE {
            assert!(!is_execution_eligible(id));
        }
        for id in EXECUTION_ELIGIBLE {
            assert!(!is_planning_eligible(id));
        }
    }

    #[test]
    fn test_reviewer_is_not_requestable() {
        assert!(!is_planning_eligible(CODE_REVIEWER));
        assert!(!is_execution_eligible(CODE_REVIEWER));
    }

    #[test]
    fn test_roster_covers_eligible_sets() {
        for id in PLANNING_ELIGIBLE.iter().chain(EXECUTION_ELIGIBLE) {
            assert!(FALLBACK_ROSTER.contains(id), "{id} missing from roster");
        }
    }

    #[test]
    fn test_find_in_catalog_is_case_insensitive() {
        let catalog = vec!["Backend-Developer".to_string(), "ml-engineer".to_string()];
        assert_eq!(
            find_in_catalog(&catalog, "backend-developer"),
            Some("Backend-Developer")
        );
        assert_eq!(find_in_catalog(&catalog, "mobile-developer"), None);
    }
}
