use std::process::{Command, Stdio};

use crate::error::{LiveError, LiveResult};

/// Platform command that opens `url` in the default browser.
pub fn opener_command(url: &str) -> (String, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open".to_string(), vec![url.to_string()])
    } else if cfg!(windows) {
        (
            "cmd".to_string(),
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                url.to_string(),
            ],
        )
    } else {
        ("xdg-open".to_string(), vec![url.to_string()])
    }
}

/// The opener is reaped on a background thread so the session never waits on it.
pub fn open_browser(url: &str) -> LiveResult<()> {
    let (program, args) = opener_command(url);
    let mut child = Command::new(&program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            LiveError::Server(format!("could not open browser with `{}`: {}", program, e))
        })?;

    std::thread::spawn(move || {
        let _ = child.wait();
    });
    Ok(())
}
