//! Progress formatter: sections collect indicator ticks on one line.

use crate::options::ProgressOptions;
use crate::renderables::align::LayoutEngine;
use crate::style::Style;

const DEFAULT_INDICATOR: &str = ".";

/// Accumulates progress indicators into a pending line that is written
/// when the section ends (or before any other line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressFormatter {
    indicator: String,
    style: Style,
    pending: String,
    open_sections: usize,
}

impl Default for ProgressFormatter {
    fn default() -> Self {
        Self::new(ProgressOptions::default())
    }
}

impl ProgressFormatter {
    /// Create a formatter from its options.
    #[must_use]
    pub fn new(options: ProgressOptions) -> Self {
        Self {
            indicator: options
                .indicator
                .unwrap_or_else(|| DEFAULT_INDICATOR.to_string()),
            style: Style::from_options(options.color, options.bold),
            pending: String::new(),
            open_sections: 0,
        }
    }

    /// Number of open sections.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open_sections
    }

    /// Indicators not yet written.
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub(crate) fn open(&mut self) {
        self.open_sections += 1;
    }

    pub(crate) fn close(&mut self) -> Option<String> {
        self.open_sections = self.open_sections.saturating_sub(1);
        self.take_pending()
    }

    /// Append one indicator, or `override_text` in its place.
    pub(crate) fn tick(&mut self, override_text: Option<&str>, engine: &LayoutEngine) {
        let text = override_text.unwrap_or(&self.indicator);
        let styled = engine.apply_style(text, self.style);
        self.pending.push_str(&styled);
    }

    pub(crate) fn take_pending(&mut self) -> Option<String> {
        (!self.pending.is_empty()).then(|| std::mem::take(&mut self.pending))
    }
}
