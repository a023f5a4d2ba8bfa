//! Router Engine - the multi-source agent resolution engine.
//!
//! Given a workflow phase and a task prompt, the engine picks the single
//! best-fitting agent out of a dynamic catalog, with an auditable reason
//! and confidence score. Signals are combined under a strict priority
//! order; conflicts are resolved by declared precedence, never by scoring.
//!
//! # Overview
//!
//! - [`AgentResolver`]: the facade - `resolve(phase, prompt, context,
//!   recommended)` always returns a fully populated
//!   [`router_core::ResolutionResult`], degrading every upstream failure
//!   to a safe default.
//! - [`AgentCatalog`] / [`ProjectConfigSource`]: injected async seams for
//!   the live agent listing and per-project configuration.
//! - [`CatalogAccessor`]: fallback-to-roster catalog fetch plus the
//!   project exclusion filter.
//! - [`WorkflowPipeline`]: a bounded plan/execute/evaluate loop that
//!   consumes resolutions and carries the planning choice into execution.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use router_core::Phase;
//! use router_engine::{AgentResolver, StaticCatalog, StaticConfigSource};
//!
//! let resolver = AgentResolver::new(
//!     Arc::new(StaticCatalog::roster()),
//!     Arc::new(StaticConfigSource::empty()),
//! );
//! let result = resolver.resolve(Phase::Execution, "eslint 설정 변경해줘", None, None).await;
//! assert_eq!(result.agent_name, "build-engineer");
//! ```

pub mod catalog;
pub mod error;
pub mod paths;
pub mod pipeline;
pub mod resolver;
pub mod sources;

mod strategy;

// Re-export commonly used items
pub use catalog::{AgentCatalog, CatalogAccessor};
pub use error::{EngineError, Result};
pub use pipeline::{PhaseOutcome, PhaseRunner, PipelineConfig, PipelineStep, WorkflowPipeline};
pub use resolver::AgentResolver;
pub use sources::{
    FileCatalog, FileConfigSource, ProjectConfigSource, StaticCatalog, StaticConfigSource,
};
