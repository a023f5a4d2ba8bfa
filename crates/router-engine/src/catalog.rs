//! Catalog access with fallback and exclusion filtering.

use std::sync::Arc;

use tracing::{debug, warn};

use router_core::agents;
use router_core::ProjectConfig;

use crate::error::Result;

/// Source of the currently available agent identifiers.
///
/// Implementations own their timeout policy; the accessor only requires
/// that failures surface as errors it can catch.
#[async_trait::async_trait]
pub trait AgentCatalog: Send + Sync {
    /// List the agent ids currently available.
    async fn list_agents(&self) -> Result<Vec<String>>;
}

/// Fetches the working catalog for a resolution call.
///
/// A failed or empty listing falls back to the built-in roster and is
/// never propagated; the project's `exclude_agents` are then removed
/// case-insensitively.
pub struct CatalogAccessor {
    catalog: Arc<dyn AgentCatalog>,
}

impl CatalogAccessor {
    /// Create an accessor over the injected catalog source.
    pub fn new(catalog: Arc<dyn AgentCatalog>) -> Self {
        Self { catalog }
    }

    /// The exclusion-filtered catalog for one resolution call.
    ///
    /// `config` is the project configuration already loaded for this call;
    /// `None` (including load failures upstream) means no exclusions.
    pub async fn available_agents(&self, config: Option<&ProjectConfig>) -> Vec<String> {
        let mut agents = match self.catalog.list_agents().await {
            Ok(list) if !list.is_empty() => list,
            Ok(_) => {
                debug!("agent catalog returned no entries, using built-in roster");
                agents::fallback_roster()
            }
            Err(e) => {
                warn!(error = %e, "agent catalog unavailable, using built-in roster");
                agents::fallback_roster()
            }
        };

        if let Some(config) = config {
            if !config.exclude_agents.is_empty() {
                let before = agents.len();
                agents.retain(|a| !config.is_excluded(a));
                debug!(
                    excluded = before - agents.len(),
                    remaining = agents.len(),
                    "applied project agent exclusions"
                );
            }
        }

        agents
    }
}
