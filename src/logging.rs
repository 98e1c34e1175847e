//! Logging integration for the `log` crate.
//!
//! [`ReportLogger`] writes log records through a [`Sink`] in the same
//! line-oriented way reports are written: an optional timestamp, a padded
//! and colored level name, then the message.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::clock::{Clock, SystemClock};
use crate::color::Color;
use crate::renderables::align::LayoutEngine;
use crate::sink::{Sink, StdoutSink};
use crate::style::Style;
use crate::sync::lock_recover;

const DEFAULT_TIME_FORMAT: &str = "[hour]:[minute]:[second]";

/// Logger that renders records as report lines.
///
/// # Thread Safety
///
/// The sink sits behind a mutex with poison recovery, so records from
/// several threads never interleave within a line.
pub struct ReportLogger {
    sink: Mutex<Box<dyn Sink + Send>>,
    clock: Box<dyn Clock>,
    engine: LayoutEngine,
    level: LevelFilter,
    show_time: bool,
    show_level: bool,
    show_target: bool,
    time_format: String,
}

impl Default for ReportLogger {
    fn default() -> Self {
        Self::new(StdoutSink)
    }
}

impl ReportLogger {
    /// Create a logger writing to `sink` at `Info` level.
    #[must_use]
    pub fn new(sink: impl Sink + Send + 'static) -> Self {
        Self {
            sink: Mutex::new(Box::new(sink)),
            clock: Box::new(SystemClock),
            engine: LayoutEngine::new(),
            level: LevelFilter::Info,
            show_time: true,
            show_level: true,
            show_target: false,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Enable or disable level names.
    #[must_use]
    pub fn show_level(mut self, show: bool) -> Self {
        self.show_level = show;
        self
    }

    /// Append the record target after the message.
    #[must_use]
    pub fn show_target(mut self, show: bool) -> Self {
        self.show_target = show;
        self
    }

    /// Override the timestamp pattern.
    #[must_use]
    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = format.into();
        self
    }

    /// Use a specific clock.
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Emit plain lines without escape codes.
    #[must_use]
    pub fn plain(mut self) -> Self {
        self.engine = LayoutEngine::plain();
        self
    }

    /// Install as the global logger.
    ///
    /// # Errors
    ///
    /// Fails if another logger is already installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    fn level_style(level: Level) -> Style {
        match level {
            Level::Trace => Style::new().color(Color::BrightBlack),
            Level::Debug => Style::new().color(Color::Blue),
            Level::Info => Style::new().color(Color::Green),
            Level::Warn => Style::new().color(Color::Yellow),
            Level::Error => Style::new().color(Color::Red).bold(),
        }
    }

    fn format_record(&self, record: &Record<'_>) -> String {
        let mut line = String::new();

        if self.show_time {
            // A bad pattern drops the timestamp rather than the record.
            if let Ok(stamp) = self.clock.format_now(&self.time_format) {
                line.push_str(&stamp);
                line.push(' ');
            }
        }

        if self.show_level {
            let padded = format!("{:<5}", record.level());
            line.push_str(
                &self
                    .engine
                    .apply_style(&padded, Self::level_style(record.level())),
            );
            line.push(' ');
        }

        line.push_str(&record.args().to_string());

        if self.show_target {
            line.push_str(" [");
            line.push_str(record.target());
            line.push(']');
        }
        line
    }
}

impl std::fmt::Debug for ReportLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportLogger")
            .field("level", &self.level)
            .field("show_time", &self.show_time)
            .field("show_level", &self.show_level)
            .field("show_target", &self.show_target)
            .field("time_format", &self.time_format)
            .finish_non_exhaustive()
    }
}

impl Log for ReportLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_record(record);
        let mut sink = lock_recover(&self.sink);
        // Logging must never fail the caller.
        let _ = sink.write_line(&line);
    }

    fn flush(&self) {}
}
