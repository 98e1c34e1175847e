//! Reporting styles for sections.
//!
//! A section is a titled unit of work run through
//! [`Reporter::report`](crate::reporter::Reporter::report). The active
//! [`Formatter`] decides how sections show up:
//!
//! - [`progress`](ProgressFormatter): indicator ticks collected on one line.
//! - [`nested`](NestedFormatter): an opening and a closing line per section,
//!   indented by nesting depth.
//!
//! Formatters only produce lines; the reporter writes them.

pub mod nested;
pub mod progress;

use std::str::FromStr;

pub use nested::{NestedFormatter, ReportSection};
pub use progress::ProgressFormatter;

use crate::error::{Error, Result};
use crate::options::{NestedOptions, ProgressOptions};
use crate::renderables::align::LayoutEngine;

/// The active reporting style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formatter {
    Progress(ProgressFormatter),
    Nested(NestedFormatter),
}

impl Default for Formatter {
    fn default() -> Self {
        Self::Nested(NestedFormatter::default())
    }
}

impl Formatter {
    /// Select a formatter by name: `progress` or `nested`.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] for any other name.
    pub fn select(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "progress" => Ok(Self::Progress(ProgressFormatter::default())),
            "nested" => Ok(Self::Nested(NestedFormatter::default())),
            _ => Err(Error::config(format!(
                "invalid formatter `{name}`, expected progress or nested"
            ))),
        }
    }

    /// A configured progress formatter.
    #[must_use]
    pub fn progress(options: ProgressOptions) -> Self {
        Self::Progress(ProgressFormatter::new(options))
    }

    /// A configured nested formatter.
    #[must_use]
    pub fn nested(options: NestedOptions) -> Self {
        Self::Nested(NestedFormatter::new(options))
    }

    /// Name accepted by [`select`](Self::select).
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Progress(_) => "progress",
            Self::Nested(_) => "nested",
        }
    }

    /// Number of open sections.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Progress(formatter) => formatter.depth(),
            Self::Nested(formatter) => formatter.depth(),
        }
    }

    /// Lines written when a section opens.
    pub(crate) fn open_section(&mut self, title: &str, engine: &LayoutEngine) -> Option<String> {
        match self {
            Self::Progress(formatter) => {
                formatter.open();
                None
            }
            Self::Nested(formatter) => Some(formatter.open(title, engine)),
        }
    }

    /// Lines written when a section closes.
    pub(crate) fn close_section(
        &mut self,
        succeeded: bool,
        engine: &LayoutEngine,
    ) -> Option<String> {
        match self {
            Self::Progress(formatter) => formatter.close(),
            Self::Nested(formatter) => formatter.close(succeeded, engine),
        }
    }

    /// Record one progress tick. The nested style ignores ticks.
    pub(crate) fn tick(&mut self, override_text: Option<&str>, engine: &LayoutEngine) {
        if let Self::Progress(formatter) = self {
            formatter.tick(override_text, engine);
        }
    }

    /// Progress indicators waiting to be written.
    pub(crate) fn take_pending(&mut self) -> Option<String> {
        match self {
            Self::Progress(formatter) => formatter.take_pending(),
            Self::Nested(_) => None,
        }
    }
}

impl FromStr for Formatter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::select(s)
    }
}
