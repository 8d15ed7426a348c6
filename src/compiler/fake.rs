//! Scripted [`CommandRunner`] for tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Write};

use super::{CommandRunner, Completion};

#[derive(Debug, Clone)]
pub(crate) enum Scripted {
    NotFound,
    LaunchError(String),
    Exit {
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

impl Scripted {
    pub(crate) fn ok(stdout: &str) -> Self {
        Scripted::Exit {
            status: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    pub(crate) fn fail(status: i32, stderr: &str) -> Self {
        Scripted::Exit {
            status: Some(status),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub attached: bool,
}

/// Replays scripted outcomes in order, then repeats the fallback.
pub(crate) struct FakeRunner {
    script: RefCell<VecDeque<Scripted>>,
    fallback: Scripted,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeRunner {
    pub(crate) fn new(fallback: Scripted) -> Self {
        Self {
            script: RefCell::new(VecDeque::new()),
            fallback,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn then(self, next: Scripted) -> Self {
        self.script.borrow_mut().push_back(next);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn next(&self, program: &str, args: &[String], attached: bool) -> Scripted {
        self.calls.borrow_mut().push(Call {
            program: program.to_string(),
            args: args.to_vec(),
            attached,
        });
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl CommandRunner for FakeRunner {
    fn run_captured(
        &self,
        program: &str,
        args: &[String],
        stdout: &mut dyn Write,
    ) -> io::Result<Completion> {
        match self.next(program, args, false) {
            Scripted::NotFound => Err(io::Error::new(io::ErrorKind::NotFound, "not found")),
            Scripted::LaunchError(message) => Err(io::Error::other(message)),
            Scripted::Exit {
                status,
                stdout: out,
                stderr,
            } => {
                stdout.write_all(out.as_bytes())?;
                Ok(Completion { status, stderr })
            }
        }
    }

    fn run_attached(&self, program: &str, args: &[String]) -> io::Result<Completion> {
        match self.next(program, args, true) {
            Scripted::NotFound => Err(io::Error::new(io::ErrorKind::NotFound, "not found")),
            Scripted::LaunchError(message) => Err(io::Error::other(message)),
            Scripted::Exit { status, .. } => Ok(Completion {
                status,
                stderr: String::new(),
            }),
        }
    }
}
