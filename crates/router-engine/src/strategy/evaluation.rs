//! Evaluation strategy.

use router_core::{agents, ResolutionResult, Source};

use super::{PhaseStrategy, StrategyInput};

/// Evaluation always routes to the fixed reviewer.
///
/// Prompt, configuration, context, and recommendations are all ignored:
/// review cycles are only comparable when the same role performs them.
pub(crate) struct EvaluationStrategy;

impl PhaseStrategy for EvaluationStrategy {
    fn resolve(&self, _input: &StrategyInput<'_>) -> ResolutionResult {
        ResolutionResult::new(
            agents::EVALUATION_AGENT,
            Source::Default,
            1.0,
            "evaluation always uses the fixed reviewer",
        )
    }
}
