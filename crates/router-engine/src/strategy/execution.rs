//! Execution strategy: the full multi-source precedence chain.
//!
//! Ordered precedence, first satisfied step wins:
//!
//! 1. explicit request in the prompt
//! 2. recommendation carried over from planning
//! 3. project configuration's pinned agent
//! 4. meta-discussion short-circuit (skips step 5)
//! 5. ordered category matching
//! 6. file-path / project-type context inference
//! 7. default fallback

use tracing::{debug, warn};

use router_core::pattern::{CategoryCheck, ContextRule, TextPattern};
use router_core::registry::{self, CONTEXT_CONFIDENCE_FLOOR, INFRASTRUCTURE_PROJECT_CONFIDENCE};
use router_core::{agents, MetaDiscussionFilter, ResolutionResult, Source};

use super::{PhaseStrategy, StrategyInput};

pub(crate) struct ExecutionStrategy {
    explicit: Vec<TextPattern>,
    categories: Vec<CategoryCheck>,
    context: Vec<ContextRule>,
    meta_filter: MetaDiscussionFilter,
}

impl ExecutionStrategy {
    pub(crate) fn new() -> Self {
        Self {
            explicit: registry::explicit_request_patterns(),
            categories: registry::execution_categories(),
            context: registry::context_rules(),
            meta_filter: MetaDiscussionFilter::new(),
        }
    }

    /// Step 5: first category with any matching rule wins.
    fn match_categories(&self, input: &StrategyInput<'_>) -> Option<ResolutionResult> {
        for category in &self.categories {
            let Some(agent) = agents::find_in_catalog(input.agents, category.handler) else {
                continue;
            };
            for rule in &category.rules {
                if rule.pattern.matches(input.prompt) {
                    return Some(ResolutionResult::new(
                        agent,
                        Source::Intent,
                        rule.confidence,
                        format!("{} request detected ({})", category.label, rule.description),
                    ));
                }
            }
        }
        None
    }

    /// Step 6: file-path inference with the acceptance floor, then the
    /// infrastructure project-type fallback.
    fn infer_from_context(&self, input: &StrategyInput<'_>) -> Option<ResolutionResult> {
        let context = input.context?;

        if let Some(path) = context.file_path.as_deref() {
            if let Some(rule) = self.context.iter().find(|r| r.pattern.matches(path)) {
                if rule.confidence >= CONTEXT_CONFIDENCE_FLOOR {
                    if let Some(agent) = agents::find_in_catalog(input.agents, rule.handler) {
                        return Some(ResolutionResult::new(
                            agent,
                            Source::Context,
                            rule.confidence,
                            format!("file path indicates {} ({})", rule.handler, rule.description),
                        ));
                    }
                } else {
                    debug!(
                        confidence = rule.confidence,
                        description = rule.description,
                        "context match below acceptance floor, discarding"
                    );
                }
            }
        }

        if context.project_type.as_deref() == Some("infrastructure") {
            if let Some(agent) = agents::find_in_catalog(input.agents, agents::DEVOPS_ENGINEER) {
                return Some(ResolutionResult::new(
                    agent,
                    Source::Context,
                    INFRASTRUCTURE_PROJECT_CONFIDENCE,
                    "infrastructure project type",
                ));
            }
        }

        None
    }

    /// Step 7: never fails, even with an empty catalog.
    fn default_fallback(input: &StrategyInput<'_>) -> ResolutionResult {
        if let Some(agent) = agents::find_in_catalog(input.agents, agents::DEFAULT_AGENT) {
            return ResolutionResult::new(
                agent,
                Source::Default,
                1.0,
                "no stronger signal, using the default agent",
            );
        }
        if let Some(agent) = input.agents.first() {
            return ResolutionResult::new(
                agent.as_str(),
                Source::Default,
                0.8,
                "default agent excluded, using the first available agent",
            );
        }
        ResolutionResult::new(
            agents::DEFAULT_AGENT,
            Source::Default,
            0.5,
            "no agents available, falling back to the default agent id",
        )
    }
}

impl PhaseStrategy for ExecutionStrategy {
    fn resolve(&self, input: &StrategyInput<'_>) -> ResolutionResult {
        // 1. Explicit request, validated against catalog and the
        //    execution-eligible set.
        if let Some(candidate) = registry::extract_explicit_request(&self.explicit, input.prompt) {
            if agents::is_execution_eligible(&candidate) {
                if let Some(agent) = agents::find_in_catalog(input.agents, &candidate) {
                    return ResolutionResult::new(
                        agent,
                        Source::Explicit,
                        1.0,
                        format!("explicitly requested {agent} in the prompt"),
                    );
                }
            }
            debug!(candidate = %candidate, "explicit candidate not eligible for execution");
        }

        // 2. Recommendation carried over from the planning phase.
        if let Some(recommended) = input.recommended {
            if let Some(agent) = agents::find_in_catalog(input.agents, recommended) {
                return ResolutionResult::new(
                    agent,
                    Source::Config,
                    1.0,
                    "recommended by the planning phase",
                );
            }
            warn!(recommended = %recommended, "recommended agent not in catalog, ignoring");
        }

        // 3. Project configuration's pinned agent.
        if let Some(primary) = input.config.and_then(|c| c.primary_agent.as_deref()) {
            if let Some(agent) = agents::find_in_catalog(input.agents, primary) {
                return ResolutionResult::new(
                    agent,
                    Source::Config,
                    1.0,
                    "pinned as primary agent in project configuration",
                );
            }
            warn!(primary = %primary, "configured primary agent not in catalog, ignoring");
        }

        // 4-5. Category matching, unless the prompt discusses agents
        //      instead of requesting work.
        if self.meta_filter.is_meta_discussion(input.prompt) {
            debug!("meta-discussion prompt, skipping category matching");
        } else if let Some(result) = self.match_categories(input) {
            return result;
        }

        // 6. Context inference.
        if let Some(result) = self.infer_from_context(input) {
            return result;
        }

        // 7. Default fallback.
        Self::default_fallback(input)
    }
}
