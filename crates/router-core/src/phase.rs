//! Workflow phases and the localized phase keyword extractor.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Workflow stage driving which resolution strategy runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Deciding what to build and in which order.
    Planning,
    /// Doing the work.
    Execution,
    /// Reviewing the result.
    Evaluation,
}

/// Leading keywords that select the planning phase.
const PLANNING_KEYWORDS: &[&str] = &["plan", "planning", "계획", "플랜", "플래닝", "기획"];

/// Leading keywords that select the execution phase.
const EXECUTION_KEYWORDS: &[&str] = &["run", "execute", "implement", "실행", "구현", "작업"];

/// Leading keywords that select the evaluation phase.
const EVALUATION_KEYWORDS: &[&str] = &["review", "evaluate", "eval", "평가", "리뷰", "검토"];

impl Phase {
    /// Split a leading phase keyword off the input.
    ///
    /// The first whitespace-delimited token (with any trailing `:` removed)
    /// is looked up in the keyword tables; on a hit the phase and the rest
    /// of the input are returned. Anything else defaults to execution with
    /// the input untouched. A lookup, not a classifier.
    pub fn extract(input: &str) -> (Phase, &str) {
        let trimmed = input.trim_start();
        let Some(token) = trimmed.split_whitespace().next() else {
            return (Phase::Execution, trimmed);
        };

        let key = token.trim_end_matches(':').to_lowercase();
        let phase = if PLANNING_KEYWORDS.contains(&key.as_str()) {
            Phase::Planning
        } else if EXECUTION_KEYWORDS.contains(&key.as_str()) {
            Phase::Execution
        } else if EVALUATION_KEYWORDS.contains(&key.as_str()) {
            Phase::Evaluation
        } else {
            return (Phase::Execution, trimmed);
        };

        (phase, trimmed[token.len()..].trim_start())
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Planning => write!(f, "planning"),
            Self::Execution => write!(f, "execution"),
            Self::Evaluation => write!(f, "evaluation"),
        }
    }
}

impl std::str::FromStr for Phase {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planning" | "plan" => Ok(Self::Planning),
            "execution" | "execute" | "exec" => Ok(Self::Execution),
            "evaluation" | "evaluate" | "eval" | "review" => Ok(Self::Evaluation),
            other => Err(CoreError::UnknownPhase(other.to_string())),
        }
    }
}
