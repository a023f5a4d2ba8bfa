//! Catalog and configuration sources.
//!
//! File-backed implementations for deployments that keep their roster and
//! project settings under the state directory, plus static in-memory
//! implementations for embedding and tests.

use std::path::PathBuf;

use tracing::debug;

use router_core::ProjectConfig;

use crate::catalog::AgentCatalog;
use crate::error::Result;

/// Source of the per-project configuration record.
///
/// Loaded fresh on each resolution call; callers may cache upstream.
#[async_trait::async_trait]
pub trait ProjectConfigSource: Send + Sync {
    /// Load the project configuration, or `None` when none exists.
    async fn load(&self) -> Result<Option<ProjectConfig>>;
}

/// Agent roster stored as a JSON string array on disk.
///
/// A missing file reads as an empty listing, which the accessor turns
/// into the built-in roster.
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    /// Create a catalog reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl AgentCatalog for FileCatalog {
    async fn list_agents(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no roster file");
            return Ok(Vec::new());
        }
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let agents: Vec<String> = serde_json::from_str(&raw)?;
        Ok(agents)
    }
}

/// Project configuration stored as JSON on disk.
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl ProjectConfigSource for FileConfigSource {
    async fn load(&self) -> Result<Option<ProjectConfig>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let config: ProjectConfig = serde_json::from_str(&raw)?;
        Ok(Some(config))
    }
}

/// In-memory catalog with a fixed listing.
pub struct StaticCatalog {
    agents: Vec<String>,
}

impl StaticCatalog {
    /// Catalog over the given ids.
    pub fn new(agents: Vec<String>) -> Self {
        Self { agents }
    }

    /// Catalog over the built-in roster.
    pub fn roster() -> Self {
        Self::new(router_core::agents::fallback_roster())
    }
}

#[async_trait::async_trait]
impl AgentCatalog for StaticCatalog {
    async fn list_agents(&self) -> Result<Vec<String>> {
        Ok(self.agents.clone())
    }
}

/// In-memory config source with a fixed record.
pub struct StaticConfigSource {
    config: Option<ProjectConfig>,
}

impl StaticConfigSource {
    /// Source returning the given configuration.
    pub fn new(config: ProjectConfig) -> Self {
        Self {
            config: Some(config),
        }
    }

    /// Source returning no configuration.
    pub fn empty() -> Self {
        Self { config: None }
    }
}

#[async_trait::async_trait]
impl ProjectConfigSource for StaticConfigSource {
    async fn load(&self) -> Result<Option<ProjectConfig>> {
        Ok(self.config.clone())
    }
}
