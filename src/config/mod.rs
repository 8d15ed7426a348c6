//! Configuration module for elm-live
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ELM_LIVE_*)
//! 3. Project config (./elm-live.toml)
//! 4. User config (~/.config/elm-live/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigSource, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{
    ColorMode, CompilerConfig, Config, HooksConfig, OutputConfig, ServerConfig, WatchConfig,
};
