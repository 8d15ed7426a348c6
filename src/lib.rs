//! elm-live - a live-reload dev environment for Elm
//!
//! elm-live splits its command line between itself and the compiler, runs
//! the compiler once, relays what it printed, and on success keeps a dev
//! server and a source watcher running, rebuilding on every change.

pub mod app;
pub mod args;
pub mod cli;
pub mod compiler;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod help;
pub mod hooks;
pub mod report;
pub mod session;
pub mod ui;

// Re-exports for convenience
pub use app::{App, PROGRAM};
pub use args::{route, RoutedArgs};
pub use compiler::{invoke, CompilerCommand, CompilerInvocationResult, SystemRunner};
pub use config::Config;
pub use error::{LiveError, LiveResult};
pub use exit_code::map_exit_code;
pub use session::{LiveSupervisor, SessionEvent, SessionPlan, Supervisor};
