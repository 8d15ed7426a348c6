use crate::config::ConfigWarning;
use crate::error::LiveError;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, Tone};

/// Top-level failure line for errors that escape `App::run`.
pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    match err.downcast_ref::<LiveError>() {
        Some(live) => format_live_error(live, supports_color, supports_unicode),
        None => format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            paint(&format!("{:#}", err), Tone::Error, supports_color)
        ),
    }
}

pub fn format_live_error(err: &LiveError, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Error.colored(supports_color, supports_unicode);
    match err {
        LiveError::InvalidConfig { file, message } => format!(
            "{} Invalid config in {}\n{}\n",
            icon,
            file.display(),
            indent_lines(message.trim_end())
        ),
        other => format!("{} {}\n", icon, other),
    }
}

/// Usage errors keep clap's wording under the tool's name.
pub fn format_usage_error(message: &str) -> String {
    format!("elm-live: {}\n", message.trim_start_matches("error: "))
}

pub fn format_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = Icon::Warning.colored(supports_color, supports_unicode);
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut out = format!("{} Unknown config key '{}' in {}\n", icon, warning.key, location);
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
    }
    out
}

fn indent_lines(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
