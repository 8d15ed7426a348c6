//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::compiler::DEFAULT_COMPILER;

/// Compiler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilerConfig {
    #[serde(default = "default_compiler")]
    pub command: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            command: default_compiler(),
        }
    }
}

fn default_compiler() -> String {
    DEFAULT_COMPILER.to_string()
}

/// Dev server configuration
///
/// `command` is a template; `{port}`, `{host}` and `{dir}` are substituted
/// in every element. An empty command disables the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_server_command")]
    pub command: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            dir: default_dir(),
            command: default_server_command(),
        }
    }
}

fn default_port() -> u16 {
    8000
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_server_command() -> Vec<String> {
    [
        "python3",
        "-m",
        "http.server",
        "{port}",
        "--bind",
        "{host}",
        "--directory",
        "{dir}",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// File watching configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// File extensions that trigger a rebuild
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Gitignore-style patterns excluded from watching
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,

    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignore: default_ignore(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["elm".to_string()]
}

fn default_ignore() -> Vec<String> {
    vec![
        "elm-stuff/".to_string(),
        "node_modules/".to_string(),
        ".git/".to_string(),
    ]
}

fn default_debounce_ms() -> u64 {
    100
}

/// Build hook configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HooksConfig {
    #[serde(default)]
    pub before_build: Option<String>,

    #[serde(default)]
    pub after_build: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub compiler: CompilerConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub hooks: HooksConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// URL the dev server answers on
    pub fn server_url(&self) -> String {
        format!("http://{}:{}/", self.server.host, self.server.port)
    }
}
