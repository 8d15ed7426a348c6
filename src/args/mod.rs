//! Argument routing
//!
//! Splits elm-live's flat argument list between elm-live and the compiler:
//! - tokens recognised by [`TOOL_FLAGS`] (plus their values) stay with elm-live
//! - everything else goes to the compiler
//! - after the first bare `--`, everything goes to the compiler unread

mod flags;

pub use flags::{lookup, Arity, FlagEffect, FlagMatch, FlagSpec, TOOL_FLAGS};

/// Token that switches routing into pass-through mode.
pub const SEPARATOR: &str = "--";

/// Arguments split by destination. Each input token lands in exactly one list,
/// in its original relative order. The separator itself is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutedArgs {
    pub tool_args: Vec<String>,
    pub compiler_args_before_separator: Vec<String>,
    pub compiler_args_after_separator: Vec<String>,
    /// `--help` was recognised as a tool flag
    pub help: bool,
}

impl RoutedArgs {
    /// Everything the compiler receives, in order.
    pub fn compiler_args(&self) -> Vec<String> {
        self.compiler_args_before_separator
            .iter()
            .chain(&self.compiler_args_after_separator)
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
enum ScanState {
    Recognizing,
    AwaitingValue,
    PassThrough,
}

/// Route `args` (argv without the program name) using the built-in flag table.
pub fn route<S: AsRef<str>>(args: &[S]) -> RoutedArgs {
    route_with(args, TOOL_FLAGS)
}

/// Route `args` using a custom flag table.
pub fn route_with<S: AsRef<str>>(args: &[S], table: &[FlagSpec]) -> RoutedArgs {
    let mut routed = RoutedArgs::default();
    let mut state = ScanState::Recognizing;

    for token in args {
        let token: &str = token.as_ref();
        state = match state {
            ScanState::PassThrough => {
                routed.compiler_args_after_separator.push(token.to_string());
                ScanState::PassThrough
            }
            ScanState::Recognizing | ScanState::AwaitingValue if token == SEPARATOR => {
                ScanState::PassThrough
            }
            ScanState::AwaitingValue => {
                routed.tool_args.push(token.to_string());
                ScanState::Recognizing
            }
            ScanState::Recognizing => match lookup(token, table) {
                Some((spec, flag_match)) => {
                    routed.tool_args.push(token.to_string());
                    if spec.effect == FlagEffect::Help {
                        routed.help = true;
                    }
                    match flag_match {
                        FlagMatch::Complete => ScanState::Recognizing,
                        FlagMatch::NeedsValue => ScanState::AwaitingValue,
                    }
                }
                None => {
                    routed.compiler_args_before_separator.push(token.to_string());
                    ScanState::Recognizing
                }
            },
        };
    }

    routed
}
