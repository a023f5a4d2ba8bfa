//! Per-project configuration consumed by the resolution engine.

use serde::{Deserialize, Serialize};

/// Externally loaded project settings.
///
/// Read-only to the engine and fetched fresh on every resolution call;
/// callers may cache upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Agent pinned to handle execution work for this project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_agent: Option<String>,

    /// Agents removed from the catalog before any resolution step runs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_agents: Vec<String>,
}

impl ProjectConfig {
    /// Whether `id` is excluded for this project (case-insensitive).
    pub fn is_excluded(&self, id: &str) -> bool {
        self.exclude_agents
            .iter()
            .any(|e| e.eq_ignore_ascii_case(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusion_is_case_insensitive() {
        let config = ProjectConfig {
            primary_agent: None,
            exclude_agents: vec!["Mobile-Developer".to_string()],
        };
        assert!(config.is_excluded("mobile-developer"));
        assert!(!config.is_excluded("backend-developer"));
    }

    #[test]
    fn test_deserializes_with_defaults() {
        let config: ProjectConfig = serde_json::from_str("{}").unwrap();
        assert!(config.primary_agent.is_none());
        assert!(config.exclude_agents.is_empty());

        let config: ProjectConfig =
            serde_json::from_str(r#"{"primary_agent": "ml-engineer"}"#).unwrap();
        assert_eq!(config.primary_agent.as_deref(), Some("ml-engineer"));
    }
}
