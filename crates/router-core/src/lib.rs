//! Router Core - pattern registries and resolution types for AI Router.
//!
//! This crate holds the immutable building blocks of the agent resolution
//! engine:
//!
//! - **agents**: the well-known agent roster, fallback catalog, and
//!   per-phase eligibility sets
//! - **pattern**: the `TextPattern` primitive and rule record types
//! - **registry**: ordered pattern tables (execution categories, planning
//!   intent, explicit requests, file-path context)
//! - **meta_filter**: detection of prompts that discuss agents instead of
//!   requesting work
//! - **phase**: the workflow phase enum and localized keyword extractor
//! - **resolution**: the `ResolutionResult` record returned by the engine
//! - **project_config**: the per-project configuration record
//!
//! Everything here is data plus pure functions; the decision logic that
//! consumes these tables lives in `router-engine`.

pub mod agents;
pub mod error;
pub mod meta_filter;
pub mod pattern;
pub mod phase;
pub mod project_config;
pub mod registry;
pub mod resolution;

// Re-export commonly used items
pub use error::{CoreError, Result};
pub use meta_filter::MetaDiscussionFilter;
pub use pattern::{CategoryCheck, ContextRule, PatternRule, TextPattern};
pub use phase::Phase;
pub use project_config::ProjectConfig;
pub use resolution::{ResolutionContext, ResolutionResult, Source};
