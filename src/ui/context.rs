use crate::cli::ColorWhen;
use crate::config::{ColorMode, OutputConfig};
use crate::ui::terminal::TerminalCapabilities;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    /// No color, ASCII icons, quiet.
    pub fn plain() -> Self {
        Self {
            verbose: 0,
            caps: TerminalCapabilities::plain(),
            color: false,
            unicode: false,
        }
    }

    pub(crate) fn from_caps(
        verbose: u8,
        cli_color: Option<ColorWhen>,
        output: &OutputConfig,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            verbose,
            caps,
            color,
            unicode,
        }
    }
}
