//! Compiler output and diagnostics
//!
//! Renders a [`CompilerInvocationResult`] as the text elm-live prints. The
//! text is always plain (no colour, no icons) so it can be piped and grepped.

use crate::compiler::CompilerInvocationResult;

const INDENT: &str = "  ";

/// Where a rendered block belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Out,
    Err,
}

/// A rendered block and its destination stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub stream: Stream,
    pub text: String,
}

/// Render the result of one compiler run.
///
/// `program` is elm-live's own name, `compiler` the command that was run.
pub fn render(program: &str, compiler: &str, result: &CompilerInvocationResult) -> Report {
    match result {
        CompilerInvocationResult::Success { stdout, .. } => Report {
            stream: Stream::Out,
            text: success(compiler, stdout),
        },
        CompilerInvocationResult::NotFound => Report {
            stream: Stream::Err,
            text: not_found(program, compiler),
        },
        CompilerInvocationResult::Failed { message, .. } => Report {
            stream: Stream::Err,
            text: failed(program, compiler, message),
        },
    }
}

/// Stderr from a successful build, relayed unchanged to the error stream.
///
/// `None` when the compiler printed nothing there or the build failed (a
/// failure's stderr is already part of its message).
pub fn forwarded_stderr(result: &CompilerInvocationResult) -> Option<Report> {
    match result {
        CompilerInvocationResult::Success { stderr, .. } if !stderr.is_empty() => {
            let mut text = stderr.clone();
            if !text.ends_with('\n') {
                text.push('\n');
            }
            Some(Report {
                stream: Stream::Err,
                text,
            })
        }
        _ => None,
    }
}

/// Captured compiler stdout, annotated with the command name.
pub fn success(compiler: &str, stdout: &str) -> String {
    format!("{}:\n{}\n", compiler, indent(stdout))
}

/// The compiler could not be launched at all.
pub fn not_found(program: &str, compiler: &str) -> String {
    let body = format!(
        "I can't find the command `{compiler}`!\n\
         Looks like {compiler} isn't installed. Make sure the compiler is\n\
         installed and that you can call `{compiler}` from your command line.\n\
         \n\
         You can point {program} at another binary with `--path-to-elm-make`.\n"
    );
    format!("{}:\n{}\n", program, indent(&body))
}

/// The compiler ran and reported a problem.
pub fn failed(program: &str, compiler: &str, message: &str) -> String {
    format!(
        "{}: Error while calling `{}`! The output may be helpful:\n{}\n",
        program,
        compiler,
        indent(message)
    )
}

/// Prefix every line, blank ones included, with two spaces. The result
/// always ends with a newline unless `text` is empty.
pub fn indent(text: &str) -> String {
    let mut out = String::new();
    for line in text.lines() {
        out.push_str(INDENT);
        out.push_str(line);
        out.push('\n');
    }
    out
}
