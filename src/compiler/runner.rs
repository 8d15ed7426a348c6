//! Subprocess runner
//!
//! Every external program elm-live starts synchronously goes through
//! [`CommandRunner`], so the orchestration logic can be tested with a fake.

use std::io::{self, Write};
use std::process::{Command, Stdio};

/// How a finished subprocess exited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    /// Exit status, `None` when terminated by a signal
    pub status: Option<i32>,
    /// Captured stderr (empty when stderr was attached to the terminal)
    pub stderr: String,
}

impl Completion {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

pub trait CommandRunner {
    /// Run `program` to completion, copying its stdout into `stdout` and
    /// capturing its stderr.
    ///
    /// Launch failures are returned as `Err`; a program that launched and
    /// failed is an `Ok` with a nonzero status.
    fn run_captured(
        &self,
        program: &str,
        args: &[String],
        stdout: &mut dyn Write,
    ) -> io::Result<Completion>;

    /// Run `program` to completion attached to the terminal.
    fn run_attached(&self, program: &str, args: &[String]) -> io::Result<Completion>;
}

/// Runs real processes via `std::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run_captured(
        &self,
        program: &str,
        args: &[String],
        stdout: &mut dyn Write,
    ) -> io::Result<Completion> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .output()?;

        stdout.write_all(&output.stdout)?;

        Ok(Completion {
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn run_attached(&self, program: &str, args: &[String]) -> io::Result<Completion> {
        let status = Command::new(program).args(args).status()?;
        Ok(Completion {
            status: status.code(),
            stderr: String::new(),
        })
    }
}

/// Program and arguments that run `command_line` through the platform shell.
pub fn shell_command(command_line: &str) -> (String, Vec<String>) {
    if cfg!(windows) {
        (
            "cmd".to_string(),
            vec!["/C".to_string(), command_line.to_string()],
        )
    } else {
        (
            "sh".to_string(),
            vec!["-c".to_string(), command_line.to_string()],
        )
    }
}
