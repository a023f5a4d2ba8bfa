//! Resolution result and context types.

use serde::{Deserialize, Serialize};

/// Where a resolution decision came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// The prompt explicitly named the agent.
    Explicit,
    /// Project configuration or a carried-over recommendation.
    Config,
    /// File-path or project-type inference.
    Context,
    /// Prompt text classification.
    Intent,
    /// Fallback when no stronger signal applied.
    Default,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit => write!(f, "explicit"),
            Self::Config => write!(f, "config"),
            Self::Context => write!(f, "context"),
            Self::Intent => write!(f, "intent"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Optional side-channel hints supplied per resolution call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolutionContext {
    /// Path of the file the task concerns, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    /// Project type hint (e.g. "infrastructure").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
}

impl ResolutionContext {
    /// Context carrying only a file path.
    pub fn with_file(path: impl Into<String>) -> Self {
        Self {
            file_path: Some(path.into()),
            project_type: None,
        }
    }

    /// Context carrying only a project type.
    pub fn with_project_type(project_type: impl Into<String>) -> Self {
        Self {
            file_path: None,
            project_type: Some(project_type.into()),
        }
    }
}

/// The engine's sole output: which agent handles the work and why.
///
/// Always fully populated; `confidence` lies in `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Selected agent id, a member of the filtered catalog for the call
    /// (or the documented literal fallback when no agents are available).
    pub agent_name: String,
    /// Which signal produced the decision.
    pub source: Source,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    /// Auditable human-readable explanation.
    pub reason: String,
}

impl ResolutionResult {
    /// Create a resolution result.
    pub fn new(
        agent_name: impl Into<String>,
        source: Source,
        confidence: f64,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            agent_name: agent_name.into(),
            source,
            confidence,
            reason: reason.into(),
        }
    }
}
