//! Process exit codes

use crate::compiler::CompilerInvocationResult;

pub const SUCCESS: i32 = 0;
/// The compiler binary is missing. Also the fallback for failures without a status.
pub const COMPILER_NOT_FOUND: i32 = 1;
pub const FAILURE: i32 = 1;
/// Malformed elm-live flags (same code clap uses for usage errors)
pub const USAGE: i32 = 2;

/// Exit code for the result of a compiler run.
pub fn map_exit_code(result: &CompilerInvocationResult) -> i32 {
    match result {
        CompilerInvocationResult::Success { .. } => SUCCESS,
        CompilerInvocationResult::NotFound => COMPILER_NOT_FOUND,
        CompilerInvocationResult::Failed {
            status: Some(code), ..
        } => *code,
        CompilerInvocationResult::Failed { status: None, .. } => FAILURE,
    }
}
