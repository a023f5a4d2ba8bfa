//! The resolution facade.

use std::sync::Arc;

use tracing::{debug, warn};

use router_core::{Phase, ProjectConfig, ResolutionContext, ResolutionResult};

use crate::catalog::{AgentCatalog, CatalogAccessor};
use crate::sources::ProjectConfigSource;
use crate::strategy::{
    EvaluationStrategy, ExecutionStrategy, PhaseStrategy, PlanningStrategy, StrategyInput,
};

/// Resolves work requests to agents.
///
/// Holds the injected I/O seams and one compiled strategy per phase; no
/// state is carried between calls, so a single instance serves unlimited
/// concurrent resolutions.
pub struct AgentResolver {
    accessor: CatalogAccessor,
    config_source: Arc<dyn ProjectConfigSource>,
    evaluation: EvaluationStrategy,
    planning: PlanningStrategy,
    execution: ExecutionStrategy,
}

impl AgentResolver {
    /// Create a resolver over the injected catalog and config sources.
    pub fn new(
        catalog: Arc<dyn AgentCatalog>,
        config_source: Arc<dyn ProjectConfigSource>,
    ) -> Self {
        Self {
            accessor: CatalogAccessor::new(catalog),
            config_source,
            evaluation: EvaluationStrategy,
            planning: PlanningStrategy::new(),
            execution: ExecutionStrategy::new(),
        }
    }

    /// Resolve the agent for one work request.
    ///
    /// Always returns a fully populated result: catalog and config
    /// failures degrade to defaults and are never surfaced.
    pub async fn resolve(
        &self,
        phase: Phase,
        prompt: &str,
        context: Option<&ResolutionContext>,
        recommended: Option<&str>,
    ) -> ResolutionResult {
        // Evaluation ignores every input, including the catalog; skip the
        // I/O round-trips entirely.
        if phase == Phase::Evaluation {
            return self.evaluation.resolve(&StrategyInput {
                prompt,
                context,
                recommended,
                agents: &[],
                config: None,
            });
        }

        let config = self.load_config_quietly().await;
        let agents = self.accessor.available_agents(config.as_ref()).await;

        let input = StrategyInput {
            prompt,
            context,
            recommended,
            agents: &agents,
            config: config.as_ref(),
        };

        let result = match phase {
            Phase::Planning => self.planning.resolve(&input),
            Phase::Execution => self.execution.resolve(&input),
            Phase::Evaluation => unreachable!("handled above"),
        };

        debug!(
            phase = %phase,
            agent = %result.agent_name,
            source = %result.source,
            confidence = result.confidence,
            "resolved agent"
        );
        result
    }

    /// Load the project config, degrading failures to `None`.
    ///
    /// One load serves both the exclusion filter and the pinned-agent
    /// step; a failure therefore reads as "no exclusions, no pin".
    async fn load_config_quietly(&self) -> Option<ProjectConfig> {
        match self.config_source.load().await {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "project config unavailable, continuing without it");
                None
            }
        }
    }
}
