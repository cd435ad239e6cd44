//! Color enablement
//!
//! Decides whether escape sequences are emitted at all. `Auto` looks at the
//! environment and whether the target stream is a terminal.

use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::tty::IsTty;

static EXTERNAL_COLOR_FLAG: AtomicBool = AtomicBool::new(true);

/// Set the process-wide flag read by [`ColorMode::InheritExternalFlag`]
///
/// The flag also gates [`ColorMode::Auto`]: when it is off, auto never
/// enables color.
pub fn set_color_enabled(enabled: bool) {
    EXTERNAL_COLOR_FLAG.store(enabled, Ordering::Relaxed);
}

/// Current value of the process-wide color flag
pub fn color_enabled() -> bool {
    EXTERNAL_COLOR_FLAG.load(Ordering::Relaxed)
}

/// Stream whose terminal status drives `Auto`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorOutput {
    Stdout,
    Stderr,
}

impl ColorOutput {
    fn is_tty(self) -> bool {
        match self {
            ColorOutput::Stdout => std::io::stdout().is_tty(),
            ColorOutput::Stderr => std::io::stderr().is_tty(),
        }
    }
}

/// When escape sequences are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    Always,
    Never,
    /// Follow [`set_color_enabled`]
    InheritExternalFlag,
    /// Decide from the environment and TTY status of the stream
    Auto(ColorOutput),
}

impl Default for ColorMode {
    fn default() -> Self {
        ColorMode::Auto(ColorOutput::Stdout)
    }
}

impl ColorMode {
    /// Resolve against the real process environment
    pub fn is_enabled(&self) -> bool {
        self.resolve(color_enabled(), |key| std::env::var(key).ok(), ColorOutput::is_tty)
    }

    /// Resolve with explicit inputs
    ///
    /// Auto checks, in order: `CHROMA_NO_COLOR` (non-empty disables),
    /// `FORCE_COLOR` (non-empty and not `0` enables), `NO_COLOR` (non-empty
    /// disables), `TERM=dumb` (disables), then the TTY status.
    pub fn resolve<E, T>(&self, external_flag: bool, env: E, is_tty: T) -> bool
    where
        E: Fn(&str) -> Option<String>,
        T: Fn(ColorOutput) -> bool,
    {
        match *self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::InheritExternalFlag => external_flag,
            ColorMode::Auto(output) => {
                if !external_flag {
                    return false;
                }
                let non_empty = |key: &str| env(key).is_some_and(|v| !v.is_empty());

                if non_empty("CHROMA_NO_COLOR") {
                    return false;
                }
                if env("FORCE_COLOR").is_some_and(|v| !v.is_empty() && v != "0") {
                    return true;
                }
                if non_empty("NO_COLOR") {
                    return false;
                }
                if env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb")) {
                    return false;
                }
                is_tty(output)
            }
        }
    }
}
