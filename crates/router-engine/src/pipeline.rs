//! Bounded plan/execute/evaluate workflow loop.
//!
//! The pipeline consumes the resolver's output; it contains no resolution
//! logic of its own. Its one routing responsibility is carrying the
//! planning result into execution as the recommended agent.

use std::sync::Arc;

use tracing::{debug, info};

use router_core::{Phase, ResolutionResult};

use crate::error::Result;
use crate::resolver::AgentResolver;

/// Runs one phase of work with the resolved agent.
#[async_trait::async_trait]
pub trait PhaseRunner: Send + Sync {
    /// Execute `task` as `agent` for `phase`.
    async fn run_phase(&self, phase: Phase, agent: &str, task: &str) -> Result<PhaseOutcome>;
}

/// What a phase run produced.
#[derive(Debug, Clone)]
pub struct PhaseOutcome {
    /// Human-readable summary of the phase's output.
    pub summary: String,
    /// Quality score in `[0, 1]`; evaluation scores gate the retry loop.
    pub score: f64,
}

/// Pipeline tuning knobs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Evaluation score at which the loop stops retrying.
    pub quality_threshold: f64,
    /// Maximum execution attempts (at least one always runs).
    pub max_attempts: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            quality_threshold: 0.8,
            max_attempts: 3,
        }
    }
}

/// One resolved-and-run step of the workflow.
#[derive(Debug, Clone)]
pub struct PipelineStep {
    /// Which phase ran.
    pub phase: Phase,
    /// How the agent was chosen.
    pub resolution: ResolutionResult,
    /// Quality score reported by the runner.
    pub score: f64,
    /// Runner output summary.
    pub summary: String,
}

/// Drives planning, execution, and evaluation until the quality threshold
/// is met or the retry budget is exhausted.
pub struct WorkflowPipeline {
    resolver: Arc<AgentResolver>,
    runner: Arc<dyn PhaseRunner>,
    config: PipelineConfig,
}

impl WorkflowPipeline {
    /// Create a pipeline over a resolver and a phase runner.
    pub fn new(
        resolver: Arc<AgentResolver>,
        runner: Arc<dyn PhaseRunner>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            resolver,
            runner,
            config,
        }
    }

    /// Run the workflow for one task, returning the step transcript.
    pub async fn run(&self, task: &str) -> Result<Vec<PipelineStep>> {
        let mut steps = Vec::new();

        let planning = self
            .resolver
            .resolve(Phase::Planning, task, None, None)
            .await;
        let outcome = self
            .runner
            .run_phase(Phase::Planning, &planning.agent_name, task)
            .await?;
        let recommended = planning.agent_name.clone();
        steps.push(PipelineStep {
            phase: Phase::Planning,
            resolution: planning,
            score: outcome.score,
            summary: outcome.summary,
        });

        for attempt in 1..=self.config.max_attempts {
            let execution = self
                .resolver
                .resolve(Phase::Execution, task, None, Some(&recommended))
                .await;
            let outcome = self
                .runner
                .run_phase(Phase::Execution, &execution.agent_name, task)
                .await?;
            debug!(attempt, agent = %execution.agent_name, "execution attempt finished");
            steps.push(PipelineStep {
                phase: Phase::Execution,
                resolution: execution,
                score: outcome.score,
                summary: outcome.summary,
            });

            let evaluation = self
                .resolver
                .resolve(Phase::Evaluation, task, None, None)
                .await;
            let outcome = self
                .runner
                .run_phase(Phase::Evaluation, &evaluation.agent_name, task)
                .await?;
            let score = outcome.score;
            steps.push(PipelineStep {
                phase: Phase::Evaluation,
                resolution: evaluation,
                score,
                summary: outcome.summary,
            });

            if score >= self.config.quality_threshold {
                break;
            }
            info!(
                attempt,
                score,
                threshold = self.config.quality_threshold,
                "quality below threshold, retrying execution"
            );
        }

        Ok(steps)
    }
}
