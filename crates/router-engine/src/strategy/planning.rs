//! Planning strategy: a two-way choice between architecture-level design
//! and step-by-step implementation planning.

use tracing::debug;

use router_core::pattern::{PatternRule, TextPattern};
use router_core::registry;
use router_core::{agents, ResolutionResult, Source};

use super::{PhaseStrategy, StrategyInput};

/// Confidence when exactly one side of the vocabulary matched.
const SINGLE_MATCH_CONFIDENCE: f64 = 0.9;

/// Confidence when both sides matched and architecture took precedence.
const BOTH_MATCH_CONFIDENCE: f64 = 0.85;

pub(crate) struct PlanningStrategy {
    explicit: Vec<TextPattern>,
    architecture: Vec<PatternRule>,
    planning: Vec<PatternRule>,
}

impl PlanningStrategy {
    pub(crate) fn new() -> Self {
        Self {
            explicit: registry::explicit_request_patterns(),
            architecture: registry::architecture_rules(),
            planning: registry::planning_rules(),
        }
    }

    fn first_match<'r>(rules: &'r [PatternRule], prompt: &str) -> Option<&'r PatternRule> {
        rules.iter().find(|r| r.pattern.matches(prompt))
    }
}

impl PhaseStrategy for PlanningStrategy {
    fn resolve(&self, input: &StrategyInput<'_>) -> ResolutionResult {
        // 1. Explicit request, validated against catalog and the
        //    planning-eligible pair.
        if let Some(candidate) = registry::extract_explicit_request(&self.explicit, input.prompt) {
            if agents::is_planning_eligible(&candidate) {
                if let Some(agent) = agents::find_in_catalog(input.agents, &candidate) {
                    return ResolutionResult::new(
                        agent,
                        Source::Explicit,
                        1.0,
                        format!("explicitly requested {agent} in the prompt"),
                    );
                }
            }
            debug!(candidate = %candidate, "explicit candidate not eligible for planning");
        }

        // 2. Two-way intent classification.
        let architecture = Self::first_match(&self.architecture, input.prompt);
        let planning = Self::first_match(&self.planning, input.prompt);

        let architect = agents::find_in_catalog(input.agents, agents::SYSTEM_ARCHITECT);
        let planner = agents::find_in_catalog(input.agents, agents::TASK_PLANNER);

        match (architecture, planning) {
            (Some(rule), None) => {
                if let Some(agent) = architect {
                    return ResolutionResult::new(
                        agent,
                        Source::Intent,
                        SINGLE_MATCH_CONFIDENCE,
                        format!("architecture intent detected ({})", rule.description),
                    );
                }
            }
            (None, Some(rule)) => {
                if let Some(agent) = planner {
                    return ResolutionResult::new(
                        agent,
                        Source::Intent,
                        SINGLE_MATCH_CONFIDENCE,
                        format!("planning intent detected ({})", rule.description),
                    );
                }
            }
            (Some(rule), Some(_)) => {
                if let Some(agent) = architect {
                    return ResolutionResult::new(
                        agent,
                        Source::Intent,
                        BOTH_MATCH_CONFIDENCE,
                        format!(
                            "both architecture and planning intent matched; \
                             architecture takes precedence ({})",
                            rule.description
                        ),
                    );
                }
            }
            (None, None) => {}
        }

        // Neither matched, or the matched side's agent is unavailable:
        // architecture is the planning default, then the planner, then the
        // global default literal.
        if let Some(agent) = architect {
            ResolutionResult::new(
                agent,
                Source::Default,
                1.0,
                "no planning intent detected, using the architecture agent",
            )
        } else if let Some(agent) = planner {
            ResolutionResult::new(
                agent,
                Source::Default,
                1.0,
                "architecture agent unavailable, using the planning agent",
            )
        } else {
            ResolutionResult::new(
                agents::DEFAULT_AGENT,
                Source::Default,
                0.5,
                "no planning agents available, using the global default",
            )
        }
    }
}
