//! Terminal palette.

use owo_colors::Style;

/// Plain by default; [`Styles::colorize`] switches on the palette.
#[derive(Default, Clone)]
pub struct Styles {
    /// `✓` marker.
    pub success: Style,
    /// `!` marker for skipped or degraded steps.
    pub warning: Style,
    /// `→` marker for sf invocations in flight.
    pub step: Style,
    /// Summary labels.
    pub dim: Style,
    /// Command titles.
    pub header: Style,
}

impl Styles {
    pub fn colorize(&mut self) {
        self.success = Style::new().green();
        self.warning = Style::new().yellow();
        self.step = Style::new().cyan();
        self.dim = Style::new().dimmed();
        self.header = Style::new().bold().cyan();
    }
}
