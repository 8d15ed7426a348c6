//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LiveError, LiveResult};

use super::types::{ColorMode, Config};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "elm-live.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A resolved configuration and where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from (`None` for built-in defaults)
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LiveResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LiveError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Where configuration outside the project directory comes from: the
/// environment and the platform config directory.
pub struct ConfigSource {
    get_env: Box<dyn Fn(&str) -> Option<String>>,
    config_dir: Option<PathBuf>,
}

impl ConfigSource {
    /// The real process environment and `dirs::config_dir()`.
    pub fn system() -> Self {
        Self::new(|key| std::env::var(key).ok(), dirs::config_dir())
    }

    pub fn new(
        get_env: impl Fn(&str) -> Option<String> + 'static,
        config_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            get_env: Box::new(get_env),
            config_dir,
        }
    }

    /// No environment and no user config: project config and defaults only.
    pub fn isolated() -> Self {
        Self::new(|_| None, None)
    }

    fn var(&self, key: &str) -> Option<String> {
        (self.get_env)(key)
    }

    /// User-level config file.
    ///
    /// `ELM_LIVE_USER_CONFIG_PATH` wins, then `$XDG_CONFIG_HOME/elm-live/config.toml`,
    /// then the platform config directory.
    pub fn user_config_path(&self) -> Option<PathBuf> {
        if let Some(path) = self.var("ELM_LIVE_USER_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        self.var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| self.config_dir.clone())
            .map(|dir| dir.join("elm-live").join("config.toml"))
    }

    /// Resolve configuration for a run started in `cwd`:
    /// project config, then user config, then defaults. Environment overrides
    /// are applied on top of whichever was found.
    pub fn discover(&self, cwd: &Path) -> LiveResult<LoadedConfig> {
        let candidates =
            std::iter::once(cwd.join(PROJECT_CONFIG_FILE)).chain(self.user_config_path());

        for path in candidates {
            if path.is_file() {
                let (config, warnings) = load_with_warnings(&path)?;
                return Ok(LoadedConfig {
                    config: with_env_overrides_from(config, |key| self.var(key)),
                    source: Some(path),
                    warnings,
                });
            }
        }

        Ok(LoadedConfig {
            config: with_env_overrides_from(Config::default(), |key| self.var(key)),
            source: None,
            warnings: Vec::new(),
        })
    }
}

/// Apply environment variable overrides (ELM_LIVE_* prefix)
pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(command) = get_env("ELM_LIVE_COMPILER").filter(|c| !c.trim().is_empty()) {
        config.compiler.command = command;
    }

    // Unparseable ports are ignored rather than fatal
    if let Some(port) = get_env("ELM_LIVE_PORT").and_then(|p| p.trim().parse().ok()) {
        config.server.port = port;
    }

    if let Some(host) = get_env("ELM_LIVE_HOST").filter(|h| !h.trim().is_empty()) {
        config.server.host = host;
    }

    if let Some(dir) = get_env("ELM_LIVE_DIR").filter(|d| !d.trim().is_empty()) {
        config.server.dir = PathBuf::from(dir);
    }

    if let Some(color) = get_env("ELM_LIVE_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "compiler",
        "server",
        "port",
        "host",
        "dir",
        "command",
        "watch",
        "extensions",
        "ignore",
        "debounce_ms",
        "hooks",
        "before_build",
        "after_build",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
