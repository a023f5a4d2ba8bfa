//! State directory layout.
//!
//! All router state lives under `~/.ai-router/`:
//!
//! ```text
//! ~/.ai-router/
//! ├── config.json   # per-project configuration
//! └── agents.json   # agent roster
//! ```

use std::path::PathBuf;

/// Environment variable overriding the state directory.
pub const STATE_DIR_ENV: &str = "AI_ROUTER_STATE_DIR";

/// Default state directory name under home.
const DEFAULT_STATE_DIR: &str = ".ai-router";

/// Get the router state directory.
///
/// Resolution order: `AI_ROUTER_STATE_DIR`, then `~/.ai-router`, then
/// `.ai-router` in the current directory when no home is available.
pub fn state_dir() -> PathBuf {
    std::env::var(STATE_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .map(|h| h.join(DEFAULT_STATE_DIR))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
        })
}

/// Path of the project configuration file.
pub fn config_file(state_dir: &std::path::Path) -> PathBuf {
    state_dir.join("config.json")
}

/// Path of the agent roster file.
pub fn roster_file(state_dir: &std::path::Path) -> PathBuf {
    state_dir.join("agents.json")
}
