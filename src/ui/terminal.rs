use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    /// No color, ASCII only. Used when output is not a terminal at all.
    pub fn plain() -> Self {
        Self {
            is_tty: false,
            supports_color: false,
            supports_unicode: false,
            is_ci: false,
        }
    }
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some();
    let is_ci = is_ci_env(&get_env);

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !term_is_dumb && !no_color,
        supports_unicode: !term_is_dumb && unicode_locale(&get_env),
        is_ci,
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "JENKINS_HOME",
        "BUILDKITE",
        "CIRCLECI",
        "TRAVIS",
        "TEAMCITY_VERSION",
    ];

    KEYS.iter().any(|k| get_env(k).is_some())
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for k in KEYS {
        if let Some(val) = get_env(k) {
            let v = val.to_lowercase();
            if v.contains("utf-8") || v.contains("utf8") {
                return true;
            }
            if !v.is_empty() {
                return false;
            }
        }
    }

    // Default to true on modern systems unless explicitly "dumb".
    true
}
