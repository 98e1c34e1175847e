//! Reporter-wide defaults.
//!
//! Options left unset on an individual operation fall back to the values
//! held here.

use crate::renderables::align::Alignment;

/// Width used when neither the operation nor the reporter sets one.
pub const DEFAULT_WIDTH: usize = 100;

/// Default timestamp pattern, in `time` format-description syntax.
///
/// Renders as e.g. `2024-03-05 -  2:07:09PM`.
pub const DEFAULT_DATETIME_FORMAT: &str =
    "[year]-[month]-[day] - [hour repr:12 padding:space]:[minute]:[second][period]";

struct EnvSettings {
    no_color: Option<String>,
}

fn read_env_settings() -> EnvSettings {
    EnvSettings {
        no_color: std::env::var("NO_COLOR").ok(),
    }
}

/// Defaults applied by a [`Reporter`](crate::reporter::Reporter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterConfig {
    /// Line and table width.
    pub width: usize,
    /// Text alignment.
    pub align: Alignment,
    /// Timestamp pattern for datetime lines.
    pub datetime_format: String,
    /// Emit ANSI escape codes.
    pub color: bool,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            align: Alignment::Left,
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            color: true,
        }
    }
}

impl ReporterConfig {
    /// Defaults adjusted by the process environment.
    ///
    /// A non-empty `NO_COLOR` turns escape codes off.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env(&read_env_settings())
    }

    fn with_env(mut self, env: &EnvSettings) -> Self {
        if env.no_color.as_deref().is_some_and(|value| !value.is_empty()) {
            self.color = false;
        }
        self
    }
}
