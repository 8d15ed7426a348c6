//! Static file server
//!
//! elm-live does not serve files itself. It launches the configured server
//! command and stops it when the session ends.

use std::io;
use std::path::Path;
use std::process::{Child, Command, Stdio};

use crate::error::{LiveError, LiveResult};

/// Substitute `{port}`, `{host}` and `{dir}` in every element of `template`.
pub fn expand_template(template: &[String], port: u16, host: &str, dir: &Path) -> Vec<String> {
    let port = port.to_string();
    let dir = dir.display().to_string();
    template
        .iter()
        .map(|part| {
            part.replace("{port}", &port)
                .replace("{host}", host)
                .replace("{dir}", &dir)
        })
        .collect()
}

/// A running server process, killed on drop.
#[derive(Debug)]
pub struct CommandServer {
    child: Child,
}

impl CommandServer {
    /// `command` must be non-empty; its first element is the program.
    pub fn spawn(command: &[String], cwd: &Path) -> LiveResult<Self> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| LiveError::Server("empty server command".to_string()))?;

        let child = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => {
                    LiveError::Server(format!("can't find the server command `{}`", program))
                }
                _ => LiveError::Server(format!("`{}`: {}", program, e)),
            })?;

        Ok(Self { child })
    }

    /// Exit status if the server already stopped on its own.
    pub fn exited(&mut self) -> Option<i32> {
        match self.child.try_wait() {
            Ok(Some(status)) => Some(status.code().unwrap_or(-1)),
            _ => None,
        }
    }
}

impl Drop for CommandServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
