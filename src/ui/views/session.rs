use std::path::Path;

use crate::session::SessionEvent;
use crate::ui::blocks::header::SessionHeader;
use crate::ui::primitives::icon::Icon;

pub fn render_session_header(
    url: Option<&str>,
    root: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = SessionHeader::new(Icon::Watch, "elm-live");
    if let Some(url) = url {
        header.add("Server", url);
    }
    header.add("Watching", root.display().to_string());
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

/// Current local time as shown in front of session events.
pub fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

pub fn render_session_event(
    timestamp: &str,
    event: &SessionEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    match event {
        SessionEvent::ServerStarted { url } => {
            format!("{} {} Serving at {}\n", prefix, icon(Icon::Server), url)
        }
        SessionEvent::BrowserOpened { url } => {
            format!("{} {} Opened {}\n", prefix, icon(Icon::Browser), url)
        }
        SessionEvent::WatchStarted { root } => format!(
            "{} {} Watching: {}\n",
            prefix,
            icon(Icon::Watch),
            root.display()
        ),
        SessionEvent::FilesChanged { paths } => {
            let mut out = String::new();
            for path in paths {
                out.push_str(&format!(
                    "{} {} Changed: {}\n",
                    prefix,
                    icon(Icon::Arrow),
                    path.display()
                ));
            }
            out
        }
        SessionEvent::Warning { message } => {
            format!("{} {} {}\n", prefix, icon(Icon::Warning), message)
        }
        SessionEvent::Shutdown => {
            format!("\n{} {} Stopped.\n", prefix, icon(Icon::Watch))
        }
    }
}

pub fn render_rebuild_started(timestamp: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "[{}] {} Rebuilding...\n",
        timestamp,
        Icon::Progress.colored(supports_color, supports_unicode)
    )
}

pub fn render_rebuild_finished(
    timestamp: &str,
    success: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (icon, text) = if success {
        (Icon::Success, "Build succeeded")
    } else {
        (Icon::Error, "Build failed")
    };
    format!(
        "[{}] {} {}\n",
        timestamp,
        icon.colored(supports_color, supports_unicode),
        text
    )
}
