//! Build hooks
//!
//! `before_build` runs ahead of every compiler invocation and `after_build`
//! after every successful one. Both run through the platform shell with the
//! terminal attached. A failing hook is reported but never stops the build.

use crate::compiler::{shell_command, CommandRunner};
use crate::error::{LiveError, LiveResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    BeforeBuild,
    AfterBuild,
}

impl Hook {
    pub fn label(self) -> &'static str {
        match self {
            Hook::BeforeBuild => "before-build",
            Hook::AfterBuild => "after-build",
        }
    }
}

pub fn run_hook(runner: &dyn CommandRunner, hook: Hook, command: &str) -> LiveResult<()> {
    let (program, args) = shell_command(command);

    let failed = |message: String| LiveError::Hook {
        hook: hook.label(),
        command: command.to_string(),
        message,
    };

    let completion = runner
        .run_attached(&program, &args)
        .map_err(|e| failed(e.to_string()))?;

    match completion.status {
        Some(0) => Ok(()),
        Some(code) => Err(failed(format!("exit status {}", code))),
        None => Err(failed("terminated by signal".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::fake::{FakeRunner, Scripted};

    #[test]
    fn runs_through_the_shell_attached() {
        let runner = FakeRunner::new(Scripted::ok(""));
        run_hook(&runner, Hook::BeforeBuild, "make css").unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].attached);
        let (program, args) = shell_command("make css");
        assert_eq!(calls[0].program, program);
        assert_eq!(calls[0].args, args);
    }

    #[test]
    fn nonzero_exit_is_an_error() {
        let runner = FakeRunner::new(Scripted::fail(4, ""));
        let err = run_hook(&runner, Hook::AfterBuild, "notify").unwrap_err();
        assert_eq!(
            err.to_string(),
            "after-build hook `notify` failed: exit status 4"
        );
    }

    #[test]
    fn launch_failure_is_an_error() {
        let runner = FakeRunner::new(Scripted::NotFound);
        let err = run_hook(&runner, Hook::BeforeBuild, "x").unwrap_err();
        assert!(matches!(err, LiveError::Hook { hook: "before-build", .. }));
    }
}
