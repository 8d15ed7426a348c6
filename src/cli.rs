//! Tool option parsing
//!
//! The router in [`crate::args`] decides which tokens belong to elm-live;
//! clap then parses and validates just those tokens.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ColorMode, Config};
use crate::error::{LiveError, LiveResult};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// elm-live's own options
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "elm-live")]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
pub struct ToolOptions {
    /// Show the manual page
    #[arg(short, long)]
    pub help: bool,

    /// Port of the dev server
    #[arg(long)]
    pub port: Option<u16>,

    /// Host the dev server binds to
    #[arg(long, allow_hyphen_values = true)]
    pub host: Option<String>,

    /// Directory served by the dev server
    #[arg(long, allow_hyphen_values = true)]
    pub dir: Option<PathBuf>,

    /// Open the served URL in the default browser
    #[arg(long)]
    pub open: bool,

    /// Compiler binary to invoke
    #[arg(long = "path-to-elm-make", value_name = "PATH", allow_hyphen_values = true)]
    pub compiler: Option<String>,

    /// Command run before every build
    #[arg(long, value_name = "COMMAND", allow_hyphen_values = true)]
    pub before_build: Option<String>,

    /// Command run after every successful build
    #[arg(long, value_name = "COMMAND", allow_hyphen_values = true)]
    pub after_build: Option<String>,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbose diagnostics (repeatable)
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ToolOptions {
    /// Parse the tool tokens produced by the router.
    pub fn from_tool_args(tool_args: &[String]) -> LiveResult<Self> {
        Self::try_parse_from(tool_args)
            .map_err(|e| LiveError::ToolUsage(e.to_string().trim_end().to_string()))
    }

    /// Layer CLI flags over `config` (flags win).
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(dir) = &self.dir {
            config.server.dir = dir.clone();
        }
        if let Some(compiler) = &self.compiler {
            config.compiler.command = compiler.clone();
        }
        if let Some(cmd) = &self.before_build {
            config.hooks.before_build = Some(cmd.clone());
        }
        if let Some(cmd) = &self.after_build {
            config.hooks.after_build = Some(cmd.clone());
        }
        if let Some(color) = self.color {
            config.output.color = match color {
                ColorWhen::Auto => ColorMode::Auto,
                ColorWhen::Always => ColorMode::Always,
                ColorWhen::Never => ColorMode::Never,
            };
        }
    }
}
