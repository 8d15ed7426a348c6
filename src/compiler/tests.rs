//! Tests for compiler invocation

use super::fake::{FakeRunner, Scripted};
use super::*;

fn elm_make(args: &[&str]) -> CompilerCommand {
    CompilerCommand::new(
        DEFAULT_COMPILER,
        args.iter().map(|s| s.to_string()).collect(),
    )
}

#[test]
fn test_invoke_runs_compiler_with_routed_args() {
    let runner = FakeRunner::new(Scripted::ok(""));
    let command = elm_make(&["Main.elm", "--output=elm.js"]);

    invoke(&runner, &command);

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, "elm-make");
    assert_eq!(calls[0].args, vec!["Main.elm", "--output=elm.js"]);
    assert!(!calls[0].attached);
}

#[test]
fn test_invoke_success_keeps_stdout() {
    let runner = FakeRunner::new(Scripted::ok("Hello there!\nHow's it going?\n"));
    let result = invoke(&runner, &elm_make(&[]));
    assert_eq!(
        result,
        CompilerInvocationResult::Success {
            stdout: "Hello there!\nHow's it going?\n".to_string(),
            stderr: String::new(),
        }
    );
    assert!(result.is_success());
}

#[test]
fn test_invoke_missing_binary_is_not_found() {
    let runner = FakeRunner::new(Scripted::NotFound);
    assert_eq!(
        invoke(&runner, &elm_make(&[])),
        CompilerInvocationResult::NotFound
    );
}

#[test]
fn test_invoke_failure_keeps_status_and_trimmed_stderr() {
    let runner = FakeRunner::new(Scripted::fail(9, "whatever\n\n"));
    assert_eq!(
        invoke(&runner, &elm_make(&[])),
        CompilerInvocationResult::Failed {
            status: Some(9),
            message: "whatever".to_string(),
        }
    );
}

#[test]
fn test_invoke_failure_falls_back_to_stdout() {
    let runner = FakeRunner::new(Scripted::Exit {
        status: Some(1),
        stdout: "-- SYNTAX PROBLEM ---\n".to_string(),
        stderr: "  \n".to_string(),
    });
    assert_eq!(
        invoke(&runner, &elm_make(&[])),
        CompilerInvocationResult::Failed {
            status: Some(1),
            message: "-- SYNTAX PROBLEM ---".to_string(),
        }
    );
}

#[test]
fn test_invoke_silent_failure_describes_command() {
    let runner = FakeRunner::new(Scripted::fail(77, ""));
    let result = invoke(&runner, &elm_make(&["whatever 2"]));
    assert_eq!(
        result,
        CompilerInvocationResult::Failed {
            status: Some(77),
            message: "Command failed: elm-make \"whatever 2\" (exit status 77)".to_string(),
        }
    );
}

#[test]
fn test_invoke_signal_has_no_status() {
    let runner = FakeRunner::new(Scripted::Exit {
        status: None,
        stdout: String::new(),
        stderr: String::new(),
    });
    match invoke(&runner, &elm_make(&[])) {
        CompilerInvocationResult::Failed { status, message } => {
            assert_eq!(status, None);
            assert!(message.contains("terminated by signal"));
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn test_invoke_other_launch_error_is_failure() {
    let runner = FakeRunner::new(Scripted::LaunchError("permission denied\n".to_string()));
    assert_eq!(
        invoke(&runner, &elm_make(&[])),
        CompilerInvocationResult::Failed {
            status: None,
            message: "permission denied".to_string(),
        }
    );
}

#[test]
fn test_invoke_success_keeps_stderr_warnings() {
    let runner = FakeRunner::new(Scripted::Exit {
        status: Some(0),
        stdout: "ok\n".to_string(),
        stderr: "WARNING: unused import\n".to_string(),
    });
    assert_eq!(
        invoke(&runner, &elm_make(&[])),
        CompilerInvocationResult::Success {
            stdout: "ok\n".to_string(),
            stderr: "WARNING: unused import\n".to_string(),
        }
    );
}

#[test]
fn test_command_line_quotes_spaces() {
    let command = elm_make(&["--anything", "whatever 2"]);
    assert_eq!(command.command_line(), "elm-make --anything \"whatever 2\"");
}
