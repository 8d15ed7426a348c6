//! Compiler invocation
//!
//! Runs the external compiler once, synchronously, and classifies what
//! happened. Nothing here returns an error: launch problems and compiler
//! failures are both reported through [`CompilerInvocationResult`].

#[cfg(test)]
pub(crate) mod fake;
mod runner;
#[cfg(test)]
mod tests;

use std::io;

pub use runner::{shell_command, CommandRunner, Completion, SystemRunner};

/// Default compiler binary
pub const DEFAULT_COMPILER: &str = "elm-make";

/// Outcome of one compiler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompilerInvocationResult {
    /// The compiler exited cleanly. Anything it wrote to stderr (warnings)
    /// is kept for relay too.
    Success { stdout: String, stderr: String },
    /// The compiler binary could not be located
    NotFound,
    /// The compiler ran (or failed to launch) and reported a problem
    Failed {
        status: Option<i32>,
        message: String,
    },
}

impl CompilerInvocationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, CompilerInvocationResult::Success { .. })
    }
}

/// The compiler binary and the arguments routed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl CompilerCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Human-readable command line, arguments with spaces quoted.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(|part| {
                if part.contains(char::is_whitespace) {
                    format!("\"{}\"", part)
                } else {
                    part.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Run the compiler once and classify the result.
pub fn invoke(runner: &dyn CommandRunner, command: &CompilerCommand) -> CompilerInvocationResult {
    let mut captured = Vec::new();

    match runner.run_captured(&command.program, &command.args, &mut captured) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => CompilerInvocationResult::NotFound,
        Err(e) => CompilerInvocationResult::Failed {
            status: None,
            message: e.to_string().trim_end().to_string(),
        },
        Ok(completion) if completion.success() => CompilerInvocationResult::Success {
            stdout: String::from_utf8_lossy(&captured).into_owned(),
            stderr: completion.stderr,
        },
        Ok(completion) => CompilerInvocationResult::Failed {
            status: completion.status,
            message: failure_message(command, &completion, &captured),
        },
    }
}

fn failure_message(command: &CompilerCommand, completion: &Completion, stdout: &[u8]) -> String {
    let stderr = completion.stderr.trim_end();
    if !stderr.is_empty() {
        return stderr.to_string();
    }

    let stdout = String::from_utf8_lossy(stdout);
    let stdout = stdout.trim_end();
    if !stdout.is_empty() {
        return stdout.to_string();
    }

    match completion.status {
        Some(code) => format!(
            "Command failed: {} (exit status {})",
            command.command_line(),
            code
        ),
        None => format!(
            "Command failed: {} (terminated by signal)",
            command.command_line()
        ),
    }
}
