//! elm-live CLI
//!
//! Usage: elm-live [OPTIONS] [ELM-MAKE-ARGS]... [-- ELM-MAKE-ARGS...]

use std::io;

use anyhow::{Context, Result};

use elm_live::ui::console::Console;
use elm_live::ui::error::format_error;
use elm_live::ui::terminal::detect_capabilities;
use elm_live::{exit_code, App, LiveSupervisor, SystemRunner};

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            let caps = detect_capabilities();
            eprint!("{}", format_error(&err, caps.supports_color, caps.supports_unicode));
            exit_code::FAILURE
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let cwd = std::env::current_dir().context("could not determine the working directory")?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let mut console = Console::new(&mut out, &mut err);

    let app = App::new(SystemRunner, LiveSupervisor::new());
    Ok(app.run(&args, &cwd, &mut console))
}
