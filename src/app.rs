//! One elm-live invocation, from argv to exit code
//!
//! [`App::run`] is the only place a result becomes an exit code; `main`
//! just hands the code to the OS.

use std::path::Path;

use crate::args::route;
use crate::cli::ToolOptions;
use crate::compiler::{self, CommandRunner, CompilerCommand, CompilerInvocationResult};
use crate::config::{ConfigSource, HooksConfig};
use crate::exit_code::{self, map_exit_code};
use crate::help;
use crate::hooks::{run_hook, Hook};
use crate::report;
use crate::session::{SessionEvent, SessionPlan, Supervisor};
use crate::ui::console::Console;
use crate::ui::context::UiContext;
use crate::ui::error::{format_config_warning, format_live_error, format_usage_error};
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::views::session as view;

/// Name used in elm-live's own messages
pub const PROGRAM: &str = "elm-live";

pub struct App<R, S> {
    runner: R,
    supervisor: S,
    caps: TerminalCapabilities,
    config_source: ConfigSource,
}

impl<R: CommandRunner, S: Supervisor> App<R, S> {
    pub fn new(runner: R, supervisor: S) -> Self {
        Self {
            runner,
            supervisor,
            caps: detect_capabilities(),
            config_source: ConfigSource::system(),
        }
    }

    pub fn with_capabilities(mut self, caps: TerminalCapabilities) -> Self {
        self.caps = caps;
        self
    }

    /// Where the environment and user config are read from.
    pub fn with_config_source(mut self, source: ConfigSource) -> Self {
        self.config_source = source;
        self
    }

    /// Run elm-live with `args` (argv without the program name) from `cwd`.
    pub fn run(&self, args: &[String], cwd: &Path, console: &mut Console<'_>) -> i32 {
        let routed = route(args);
        if routed.help {
            return help::show_manual(&self.runner, console);
        }

        let options = match ToolOptions::from_tool_args(&routed.tool_args) {
            Ok(options) => options,
            Err(e) => {
                console.eprint(&format_usage_error(&e.to_string()));
                return exit_code::USAGE;
            }
        };

        let loaded = match self.config_source.discover(cwd) {
            Ok(loaded) => loaded,
            Err(e) => {
                console.eprint(&format_live_error(&e, false, self.caps.supports_unicode));
                return exit_code::FAILURE;
            }
        };

        let mut config = loaded.config;
        options.apply_to(&mut config);
        console.ui = UiContext::from_caps(options.verbose, options.color, &config.output, self.caps);

        let ui = console.ui;
        for warning in &loaded.warnings {
            console.eprint(&format_config_warning(warning, ui.color, ui.unicode));
        }
        match &loaded.source {
            Some(source) => console.debug(format!("config: {}", source.display())),
            None => console.debug("config: built-in defaults"),
        }

        let command = CompilerCommand::new(config.compiler.command.clone(), routed.compiler_args());

        let result = self.build(&command, &config.hooks, console);
        if !result.is_success() {
            return map_exit_code(&result);
        }

        let plan = SessionPlan::new(&config, cwd, options.open);
        let url = (!plan.server_command.is_empty()).then_some(plan.url.as_str());
        console.print(&view::render_session_header(url, cwd, ui.color, ui.unicode));

        let mut on_event = |event: SessionEvent| {
            let line = view::render_session_event(&view::timestamp(), &event, ui.color, ui.unicode);
            match event {
                SessionEvent::Warning { .. } => console.eprint(&line),
                SessionEvent::FilesChanged { .. } => {
                    console.print(&line);
                    self.rebuild(&command, &config.hooks, console);
                }
                _ => console.print(&line),
            }
        };

        let outcome = self.supervisor.supervise(&plan, &mut on_event);
        match outcome {
            Ok(()) => exit_code::SUCCESS,
            Err(e) => {
                console.eprint(&format_live_error(&e, ui.color, ui.unicode));
                exit_code::FAILURE
            }
        }
    }

    /// Hooks around one compiler run, with the compiler's output relayed.
    fn build(
        &self,
        command: &CompilerCommand,
        hooks: &HooksConfig,
        console: &mut Console<'_>,
    ) -> CompilerInvocationResult {
        if let Some(hook) = &hooks.before_build {
            if let Err(e) = run_hook(&self.runner, Hook::BeforeBuild, hook) {
                console.warn(e);
            }
        }

        console.debug(format!("running {}", command.command_line()));
        let result = compiler::invoke(&self.runner, command);
        if let Some(stderr) = report::forwarded_stderr(&result) {
            console.emit(&stderr);
        }
        console.emit(&report::render(PROGRAM, &command.program, &result));

        if result.is_success() {
            if let Some(hook) = &hooks.after_build {
                if let Err(e) = run_hook(&self.runner, Hook::AfterBuild, hook) {
                    console.warn(e);
                }
            }
        }

        result
    }

    /// A failed rebuild is reported and the session carries on.
    fn rebuild(&self, command: &CompilerCommand, hooks: &HooksConfig, console: &mut Console<'_>) {
        let ui = console.ui;
        console.print(&view::render_rebuild_started(&view::timestamp(), ui.color, ui.unicode));
        let result = self.build(command, hooks, console);
        console.print(&view::render_rebuild_finished(
            &view::timestamp(),
            result.is_success(),
            ui.color,
            ui.unicode,
        ));
    }
}
