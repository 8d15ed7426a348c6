//! Output sinks for one elm-live run.
//!
//! Writes are best effort: a closed stdout must not turn a compiler result
//! into a crash, so IO errors are dropped here.

use std::fmt::Display;
use std::io::Write;

use crate::report::{Report, Stream};
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub struct Console<'a> {
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    pub ui: UiContext,
}

impl<'a> Console<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self {
            out,
            err,
            ui: UiContext::plain(),
        }
    }

    /// Write a rendered compiler report to its stream.
    pub fn emit(&mut self, report: &Report) {
        match report.stream {
            Stream::Out => self.print(&report.text),
            Stream::Err => self.eprint(&report.text),
        }
    }

    pub fn print(&mut self, text: &str) {
        let _ = self.out.write_all(text.as_bytes());
        let _ = self.out.flush();
    }

    pub fn eprint(&mut self, text: &str) {
        let _ = self.err.write_all(text.as_bytes());
        let _ = self.err.flush();
    }

    pub fn warn(&mut self, message: impl Display) {
        let icon = Icon::Warning.colored(self.ui.color, self.ui.unicode);
        self.eprint(&format!("{} {}\n", icon, message));
    }

    /// Only shown with `--verbose`.
    pub fn debug(&mut self, message: impl Display) {
        if self.ui.verbose == 0 {
            return;
        }
        let icon = Icon::Arrow.colored(self.ui.color, self.ui.unicode);
        self.eprint(&format!("{} {}\n", icon, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_routes_by_stream() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        {
            let mut console = Console::new(&mut out, &mut err);
            console.emit(&Report {
                stream: Stream::Out,
                text: "to out\n".to_string(),
            });
            console.emit(&Report {
                stream: Stream::Err,
                text: "to err\n".to_string(),
            });
        }
        assert_eq!(String::from_utf8(out).unwrap(), "to out\n");
        assert_eq!(String::from_utf8(err).unwrap(), "to err\n");
    }

    #[test]
    fn debug_is_silent_unless_verbose() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        {
            let mut console = Console::new(&mut out, &mut err);
            console.debug("hidden");
            console.ui.verbose = 1;
            console.debug("shown");
        }
        let err = String::from_utf8(err).unwrap();
        assert!(!err.contains("hidden"));
        assert!(err.contains("[>] shown"));
    }

    #[test]
    fn warn_goes_to_err() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        Console::new(&mut out, &mut err).warn("careful");
        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap(), "[WARN] careful\n");
    }
}
