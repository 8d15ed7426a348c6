//! Tool flag table
//!
//! Everything elm-live recognises on its own command line. Any token that is
//! not listed here belongs to the compiler.

/// How many values a tool flag takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Bare switch, matched only as `--name`
    Switch,
    /// One value, as `--name=value` or `--name value`
    Value,
}

/// What a recognised flag does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagEffect {
    Help,
    Port,
    Host,
    Dir,
    Open,
    Compiler,
    BeforeBuild,
    AfterBuild,
    Color,
    Verbose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    pub name: &'static str,
    pub short: Option<&'static str>,
    pub arity: Arity,
    pub effect: FlagEffect,
}

impl FlagSpec {
    const fn switch(name: &'static str, effect: FlagEffect) -> Self {
        Self {
            name,
            short: None,
            arity: Arity::Switch,
            effect,
        }
    }

    const fn value(name: &'static str, effect: FlagEffect) -> Self {
        Self {
            name,
            short: None,
            arity: Arity::Value,
            effect,
        }
    }

    const fn with_short(mut self, short: &'static str) -> Self {
        self.short = Some(short);
        self
    }

    /// Match a single token against this flag.
    pub fn matches(&self, token: &str) -> Option<FlagMatch> {
        if self.short == Some(token) {
            return Some(match self.arity {
                Arity::Switch => FlagMatch::Complete,
                Arity::Value => FlagMatch::NeedsValue,
            });
        }

        let rest = token.strip_prefix("--")?.strip_prefix(self.name)?;
        match (self.arity, rest) {
            (Arity::Switch, "") => Some(FlagMatch::Complete),
            (Arity::Value, "") => Some(FlagMatch::NeedsValue),
            (Arity::Value, r) if r.starts_with('=') => Some(FlagMatch::Complete),
            _ => None,
        }
    }
}

/// Result of matching a token against a [`FlagSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagMatch {
    /// The token carries everything the flag needs
    Complete,
    /// The flag's value is the next token
    NeedsValue,
}

/// Flags owned by elm-live itself.
pub const TOOL_FLAGS: &[FlagSpec] = &[
    FlagSpec::switch("help", FlagEffect::Help).with_short("-h"),
    FlagSpec::value("port", FlagEffect::Port),
    FlagSpec::value("host", FlagEffect::Host),
    FlagSpec::value("dir", FlagEffect::Dir),
    FlagSpec::switch("open", FlagEffect::Open),
    FlagSpec::value("path-to-elm-make", FlagEffect::Compiler),
    FlagSpec::value("before-build", FlagEffect::BeforeBuild),
    FlagSpec::value("after-build", FlagEffect::AfterBuild),
    FlagSpec::value("color", FlagEffect::Color),
    FlagSpec::switch("verbose", FlagEffect::Verbose),
];

/// Find the first flag in `table` that recognises `token`.
pub fn lookup<'t>(token: &str, table: &'t [FlagSpec]) -> Option<(&'t FlagSpec, FlagMatch)> {
    table
        .iter()
        .find_map(|spec| spec.matches(token).map(|m| (spec, m)))
}
