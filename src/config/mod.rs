//! Configuration module for clasp-shell
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CLASP_SHELL_*)
//! 3. Project config (./.clasp-shell.toml)
//! 4. User config (<config dir>/clasp-shell/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{AnimationMode, ColorMode, Config, OutputConfig, ToolConfig, WatchConfig};
