//! Console output for `sfci` commands.
//!
//! Everything a command prints goes through [`OutputContext`] so `--quiet`
//! and `--no-color` apply uniformly. Failures are reported by `main`.

pub mod reporter;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;
pub use reporter::TerminalReporter;
pub use styles::Styles;

/// Styling and verbosity shared by every command.
pub struct OutputContext {
    pub styles: Styles,
    /// Drop everything except failures.
    pub quiet: bool,
}

impl OutputContext {
    /// Colors are used only on a terminal, and never when `no_color` is set
    /// or `NO_COLOR` is present in the environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let colored = !no_color
            && std::env::var_os("NO_COLOR").is_none()
            && Term::stdout().is_term();

        let mut styles = Styles::default();
        if colored {
            styles.colorize();
        }
        Self { styles, quiet }
    }

    /// `✓ msg`
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Title line above a command's summary.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    /// One summary field, label dimmed.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }
}
