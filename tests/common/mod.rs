//! Test environment for running the elm-live binary in isolation.
//!
//! Each [`TestEnv`] owns a project directory, a home directory (so no real
//! user config leaks in) and a `bin` directory that is put first on `PATH`
//! for fake `elm-make` / `man` scripts.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};

use tempfile::TempDir;

pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

pub struct TestEnv {
    pub project: TempDir,
    pub home: TempDir,
    pub bin: TempDir,
    inherit_path: bool,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project: TempDir::new().unwrap(),
            home: TempDir::new().unwrap(),
            bin: TempDir::new().unwrap(),
            inherit_path: true,
        }
    }

    /// Only the fake `bin` directory is searched for programs.
    pub fn isolated_path(mut self) -> Self {
        self.inherit_path = false;
        self
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Install an executable shell script named `name` on the test `PATH`.
    #[cfg(unix)]
    pub fn install_script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// A project config that runs no server, so sessions stay local.
    pub fn disable_server(&self) {
        self.write_project_file("elm-live.toml", "[server]\ncommand = []\n");
    }

    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_elm-live"));
        cmd.args(args)
            .current_dir(self.project.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("PATH", self.search_path())
            .env_remove("ELM_LIVE_COMPILER")
            .env_remove("ELM_LIVE_PORT")
            .env_remove("ELM_LIVE_HOST")
            .env_remove("ELM_LIVE_DIR")
            .env_remove("ELM_LIVE_COLOR")
            .env_remove("ELM_LIVE_USER_CONFIG_PATH")
            .stdin(Stdio::null());
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.command(args).output().unwrap().into()
    }

    /// Start elm-live without waiting; used for dev sessions.
    pub fn spawn(&self, args: &[&str]) -> Child {
        self.command(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap()
    }

    fn search_path(&self) -> String {
        let bin = self.bin.path().display().to_string();
        match std::env::var("PATH") {
            Ok(path) if self.inherit_path => format!("{}:{}", bin, path),
            _ => bin,
        }
    }
}

/// Read a log written by a fake script, one entry per line.
pub fn read_log(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
