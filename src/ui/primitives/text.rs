use crossterm::style::Stylize;

use crate::ui::theme;

/// Semantic color of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl Tone {
    fn color(self) -> crossterm::style::Color {
        match self {
            Tone::Success => theme::colors::SUCCESS,
            Tone::Error => theme::colors::ERROR,
            Tone::Warning => theme::colors::WARNING,
            Tone::Info => theme::colors::INFO,
            Tone::Dim => theme::colors::DIM,
        }
    }
}

/// Color `text` when the terminal supports it, otherwise return it unchanged.
pub fn paint(text: &str, tone: Tone, supports_color: bool) -> String {
    if supports_color {
        format!("{}", text.with(tone.color()))
    } else {
        text.to_string()
    }
}

/// Like [`paint`], in bold.
pub fn paint_bold(text: &str, tone: Tone, supports_color: bool) -> String {
    if supports_color {
        format!("{}", text.with(tone.color()).bold())
    } else {
        text.to_string()
    }
}
