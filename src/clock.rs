//! Wall-clock access for datetime lines.
//!
//! Patterns use the `time` crate's format-description syntax
//! (`[year]-[month]-[day]`, `[hour]:[minute]`, ...).

use std::fmt;

use time::OffsetDateTime;
use time::format_description::OwnedFormatItem;

use crate::error::{Error, Result};

/// Source of the current time, already formatted.
pub trait Clock: fmt::Debug + Send + Sync {
    /// Format "now" with `pattern`.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] if the pattern cannot be parsed or applied.
    fn format_now(&self, pattern: &str) -> Result<String>;
}

/// Parse a format-description pattern.
///
/// # Errors
///
/// [`Error::Configuration`] naming the pattern when it is malformed.
pub fn parse_format(pattern: &str) -> Result<OwnedFormatItem> {
    time::format_description::parse_owned::<2>(pattern)
        .map_err(|err| Error::config(format!("invalid datetime format `{pattern}`: {err}")))
}

/// Format `moment` with `pattern`.
///
/// # Errors
///
/// See [`parse_format`].
pub fn format_datetime(moment: OffsetDateTime, pattern: &str) -> Result<String> {
    let items = parse_format(pattern)?;
    moment
        .format(&items)
        .map_err(|err| Error::config(format!("cannot format datetime with `{pattern}`: {err}")))
}

/// The real clock, in local time when the offset is known and UTC otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn format_now(&self, pattern: &str) -> Result<String> {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        format_datetime(now, pattern)
    }
}

/// A clock stuck at one moment.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn format_now(&self, pattern: &str) -> Result<String> {
        format_datetime(self.0, pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DATETIME_FORMAT;
    use time::macros::datetime;

    #[test]
    fn test_fixed_clock_default_format() {
        let clock = FixedClock(datetime!(2024-03-05 14:07:09 UTC));
        assert_eq!(
            clock.format_now(DEFAULT_DATETIME_FORMAT).unwrap(),
            "2024-03-05 -  2:07:09PM"
        );
    }

    #[test]
    fn test_custom_format() {
        let clock = FixedClock(datetime!(2024-12-31 23:59:00 UTC));
        assert_eq!(clock.format_now("[year]/[month]").unwrap(), "2024/12");
    }

    #[test]
    fn test_bad_pattern_is_configuration_error() {
        let clock = FixedClock(datetime!(2024-01-01 00:00:00 UTC));
        let err = clock.format_now("[nonsense]").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_system_clock_formats() {
        let year = SystemClock.format_now("[year]").unwrap();
        assert_eq!(year.len(), 4);
    }
}
