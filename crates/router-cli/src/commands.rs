//! Command execution.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use router_core::{Phase, ResolutionContext, ResolutionResult};
use router_engine::{
    paths, AgentResolver, CatalogAccessor, FileCatalog, FileConfigSource, PhaseOutcome,
    PhaseRunner, PipelineConfig, ProjectConfigSource, WorkflowPipeline,
};

use crate::cli::{Commands, OutputFormat};

/// Result type for CLI commands.
pub type Result<T> = router_engine::Result<T>;

/// Execute a parsed command.
pub async fn execute(command: Commands, state_dir: &Path) -> Result<()> {
    match command {
        Commands::Resolve {
            phase,
            file,
            project_type,
            recommend,
            format,
            prompt,
        } => {
            resolve(
                state_dir,
                phase,
                file,
                project_type,
                recommend,
                format,
                &prompt.join(" "),
            )
            .await
        }
        Commands::Agents { format } => agents(state_dir, format).await,
        Commands::Run {
            threshold,
            max_attempts,
            task,
        } => run(state_dir, threshold, max_attempts, &task.join(" ")).await,
    }
}

/// Build a resolver over the file-backed sources in the state directory.
fn build_resolver(state_dir: &Path) -> AgentResolver {
    AgentResolver::new(
        Arc::new(FileCatalog::new(paths::roster_file(state_dir))),
        Arc::new(FileConfigSource::new(paths::config_file(state_dir))),
    )
}

async fn resolve(
    state_dir: &Path,
    phase: Option<String>,
    file: Option<String>,
    project_type: Option<String>,
    recommend: Option<String>,
    format: OutputFormat,
    prompt: &str,
) -> Result<()> {
    // An explicit --phase wins; otherwise a leading prompt keyword picks
    // the phase and is stripped from the text.
    let (phase, prompt) = match phase {
        Some(name) => match name.parse::<Phase>() {
            Ok(phase) => (phase, prompt),
            Err(e) => {
                warn!(error = %e, "unrecognized --phase value, extracting from prompt");
                Phase::extract(prompt)
            }
        },
        None => Phase::extract(prompt),
    };

    let context = if file.is_some() || project_type.is_some() {
        Some(ResolutionContext {
            file_path: file,
            project_type,
        })
    } else {
        None
    };

    let resolver = build_resolver(state_dir);
    let result = resolver
        .resolve(phase, prompt, context.as_ref(), recommend.as_deref())
        .await;

    print_result(phase, &result, format)?;
    Ok(())
}

fn print_result(phase: Phase, result: &ResolutionResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Table => {
            println!("phase:      {phase}");
            println!("agent:      {}", result.agent_name);
            println!("source:     {}", result.source);
            println!("confidence: {:.2}", result.confidence);
            println!("reason:     {}", result.reason);
        }
    }
    Ok(())
}

async fn agents(state_dir: &Path, format: OutputFormat) -> Result<()> {
    let accessor = CatalogAccessor::new(Arc::new(FileCatalog::new(paths::roster_file(state_dir))));
    let source = FileConfigSource::new(paths::config_file(state_dir));

    let config = source.load().await.unwrap_or_default();
    let agents = accessor.available_agents(config.as_ref()).await;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&agents)?),
        OutputFormat::Table => {
            for agent in agents {
                println!("{agent}");
            }
        }
    }
    Ok(())
}

/// Phase runner that prints each dispatch instead of executing work.
struct DryRunRunner;

#[async_trait::async_trait]
impl PhaseRunner for DryRunRunner {
    async fn run_phase(&self, phase: Phase, agent: &str, task: &str) -> Result<PhaseOutcome> {
        info!(%phase, %agent, "dispatching phase");
        println!("[{phase}] {agent}: {task}");
        Ok(PhaseOutcome {
            summary: format!("{phase} dispatched to {agent}"),
            score: 1.0,
        })
    }
}

async fn run(state_dir: &Path, threshold: f64, max_attempts: u32, task: &str) -> Result<()> {
    let resolver = Arc::new(build_resolver(state_dir));
    let pipeline = WorkflowPipeline::new(
        resolver,
        Arc::new(DryRunRunner),
        PipelineConfig {
            quality_threshold: threshold,
            max_attempts,
        },
    );

    let steps = pipeline.run(task).await?;
    for step in steps {
        println!(
            "{:<10} {:<22} {:<8} {:.2}  {}",
            step.phase.to_string(),
            step.resolution.agent_name,
            step.resolution.source.to_string(),
            step.resolution.confidence,
            step.resolution.reason
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_runs_against_empty_state_dir() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = build_resolver(dir.path());
        let result = resolver
            .resolve(Phase::Execution, "eslint 설정 변경해줘", None, None)
            .await;
        assert_eq!(result.agent_name, "build-engineer");
    }

    #[tokio::test]
    async fn test_state_dir_config_is_honored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            paths::config_file(dir.path()),
            r#"{"primary_agent": "devops-engineer"}"#,
        )
        .unwrap();

        let resolver = build_resolver(dir.path());
        let result = resolver
            .resolve(Phase::Execution, "아무 작업이나 해줘", None, None)
            .await;
        assert_eq!(result.agent_name, "devops-engineer");
    }
}
