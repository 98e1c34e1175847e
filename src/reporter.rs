//! Reporter - the entry point for writing reports.
//!
//! A [`Reporter`] owns an output [`Sink`], a [`Clock`], the reporter-wide
//! [`ReporterConfig`] and the active [`Formatter`]. Each operation lays out
//! all of its lines first and only then writes them, so a rejected option
//! never leaves partial output behind.
//!
//! # Example
//!
//! ```rust
//! use cli_report::options::{SectionOptions, TableOptions};
//! use cli_report::reporter::Reporter;
//! use cli_report::sink::BufferSink;
//!
//! let buffer = BufferSink::new();
//! let mut reporter = Reporter::builder().width(20).build(buffer.clone());
//!
//! reporter.header(&SectionOptions::titled("Inventory")).unwrap();
//! reporter
//!     .table(TableOptions::default(), |table| {
//!         table.add_row_cells(["apples", "3"]);
//!         Ok::<_, cli_report::Error>(())
//!     })
//!     .unwrap();
//!
//! assert_eq!(buffer.lines()[0], "Inventory");
//! assert_eq!(buffer.lines()[2], "apples    3         ");
//! ```

use crate::clock::{Clock, SystemClock};
use crate::config::ReporterConfig;
use crate::error::{Error, Result};
use crate::formatter::Formatter;
use crate::options::{AlignedOptions, DatetimeOptions, RuleOptions, SectionOptions, TableOptions};
use crate::renderables::align::{Alignment, LayoutEngine};
use crate::renderables::composer::ReportComposer;
use crate::renderables::table::Table;
use crate::sink::{Sink, StdoutSink};

/// Writes report lines to a sink.
#[derive(Debug)]
pub struct Reporter<S: Sink = StdoutSink> {
    sink: S,
    clock: Box<dyn Clock>,
    config: ReporterConfig,
    formatter: Formatter,
}

impl Default for Reporter<StdoutSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter<StdoutSink> {
    /// Reporter on standard output, configured from the environment.
    #[must_use]
    pub fn new() -> Self {
        ReporterBuilder::from_env().build(StdoutSink)
    }
}

impl Reporter {
    /// Builder starting from the built-in defaults.
    #[must_use]
    pub fn builder() -> ReporterBuilder {
        ReporterBuilder::new()
    }
}

impl<S: Sink> Reporter<S> {
    /// Reporter on `sink` with the built-in defaults.
    pub fn with_sink(sink: S) -> Self {
        ReporterBuilder::new().build(sink)
    }

    /// The reporter-wide defaults.
    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    /// Borrow the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrow the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Recover the sink. Pending progress ticks are discarded.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// The active formatter.
    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Replace the active formatter.
    pub fn set_formatter(&mut self, formatter: Formatter) {
        self.formatter = formatter;
    }

    /// Replace the active formatter by name: `progress` or `nested`.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] for an unknown name; the current formatter
    /// stays in place.
    pub fn select_formatter(&mut self, name: &str) -> Result<()> {
        self.formatter = Formatter::select(name)?;
        Ok(())
    }

    fn engine(&self) -> LayoutEngine {
        if self.config.color {
            LayoutEngine::new()
        } else {
            LayoutEngine::plain()
        }
    }

    fn composer(&self) -> ReportComposer<'_> {
        ReportComposer::new(self.engine(), self.clock.as_ref(), &self.config)
    }

    fn write(&mut self, line: &str) -> Result<()> {
        if let Some(pending) = self.formatter.take_pending() {
            self.sink.write_line(&pending)?;
        }
        self.sink.write_line(line)?;
        Ok(())
    }

    fn write_all(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            self.write(line)?;
        }
        Ok(())
    }

    /// Write `text` as one aligned line.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] when the text does not fit.
    pub fn aligned(&mut self, text: &str, options: &AlignedOptions) -> Result<()> {
        let line = self.composer().aligned(text, options)?;
        self.write(&line)
    }

    /// Write a horizontal rule.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] for a bad character or width.
    pub fn horizontal_rule(&mut self, options: &RuleOptions) -> Result<()> {
        let line = self.composer().horizontal_rule(options)?;
        self.write(&line)
    }

    /// Write the current time.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] for a bad pattern or a timestamp wider than
    /// the line.
    pub fn datetime(&mut self, options: &DatetimeOptions) -> Result<()> {
        let line = self.composer().datetime(options)?;
        self.write(&line)
    }

    /// Write a header: title, timestamp, rule, then blank lines.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] for any invalid option, before anything is
    /// written.
    pub fn header(&mut self, options: &SectionOptions) -> Result<()> {
        let lines = self.composer().header(options)?;
        log::trace!("header: {} writes", lines.len());
        self.write_all(&lines)
    }

    /// Write a footer: blank lines, rule, title, then timestamp.
    ///
    /// # Errors
    ///
    /// Same as [`header`](Self::header).
    pub fn footer(&mut self, options: &SectionOptions) -> Result<()> {
        let lines = self.composer().footer(options)?;
        log::trace!("footer: {} writes", lines.len());
        self.write_all(&lines)
    }

    /// Write `lines` blank lines as a single write.
    ///
    /// Zero still performs one empty write.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the sink fails.
    pub fn vertical_spacing(&mut self, lines: usize) -> Result<()> {
        self.write(&ReportComposer::vertical_spacing(lines))
    }

    /// Build a table in `build`, then render it.
    ///
    /// The table only lives for this call. If `build` fails, its error is
    /// returned unchanged and nothing is written.
    ///
    /// # Errors
    ///
    /// The error from `build`, or a rendering error converted into `E`.
    pub fn table<F, E>(&mut self, mut options: TableOptions, build: F) -> Result<(), E>
    where
        F: FnOnce(&mut Table) -> Result<(), E>,
        E: From<Error>,
    {
        if options.width.is_none() {
            options.width = Some(self.config.width);
        }
        let mut table = Table::new(options);
        build(&mut table)?;
        self.render_table(table).map_err(E::from)
    }

    /// Render a prepared table.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] when the table has no rows or a row does not
    /// fit; nothing is written in that case.
    pub fn render_table(&mut self, table: Table) -> Result<()> {
        log::debug!(
            "rendering table of {} rows at width {}",
            table.row_count(),
            table.width()
        );
        let lines = table.render(&self.engine())?;
        self.write_all(&lines)
    }

    /// Run `body` as a titled section of the active formatter.
    ///
    /// The formatter writes its opening line, `body` runs with this
    /// reporter, then the closing line is written. An error from `body` is
    /// returned exactly as it was raised; the section is still closed, but
    /// without a closing line.
    ///
    /// # Errors
    ///
    /// The error from `body`, or a sink failure converted into `E`.
    pub fn report<T, E, F>(&mut self, title: &str, body: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self) -> Result<T, E>,
        E: From<Error>,
    {
        let engine = self.engine();
        if let Some(line) = self.formatter.open_section(title, &engine)
            && let Err(err) = self.write(&line)
        {
            self.formatter.close_section(false, &engine);
            return Err(err.into());
        }
        log::debug!(
            "entered section {title:?} at depth {}",
            self.formatter.depth()
        );

        let outcome = body(self);

        let closing = self.formatter.close_section(outcome.is_ok(), &engine);
        if let Some(line) = closing {
            let written = self.write(&line);
            if let (Ok(_), Err(err)) = (&outcome, written) {
                return Err(err.into());
            }
        }
        outcome
    }

    /// Record one progress tick, or `override_text` in place of the
    /// indicator. Only the progress formatter shows ticks.
    pub fn progress(&mut self, override_text: Option<&str>) {
        let engine = self.engine();
        self.formatter.tick(override_text, &engine);
    }

    /// Write any pending progress ticks now.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the sink fails.
    pub fn flush(&mut self) -> Result<()> {
        if let Some(pending) = self.formatter.take_pending() {
            self.sink.write_line(&pending)?;
        }
        Ok(())
    }
}

/// Builder for creating a [`Reporter`] with custom settings.
#[derive(Debug, Default)]
pub struct ReporterBuilder {
    config: ReporterConfig,
    clock: Option<Box<dyn Clock>>,
    formatter: Option<Formatter>,
}

impl ReporterBuilder {
    /// Start from the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from defaults adjusted by the environment (`NO_COLOR`).
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            config: ReporterConfig::from_env(),
            ..Self::default()
        }
    }

    /// Set the default width.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.config.width = width;
        self
    }

    /// Set the default alignment.
    #[must_use]
    pub fn align(mut self, align: Alignment) -> Self {
        self.config.align = align;
        self
    }

    /// Set the default datetime pattern.
    #[must_use]
    pub fn datetime_format(mut self, format: impl Into<String>) -> Self {
        self.config.datetime_format = format.into();
        self
    }

    /// Enable or disable escape codes.
    #[must_use]
    pub fn color(mut self, enabled: bool) -> Self {
        self.config.color = enabled;
        self
    }

    /// Disable escape codes.
    #[must_use]
    pub fn no_color(self) -> Self {
        self.color(false)
    }

    /// Use a specific clock.
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Use a specific formatter.
    #[must_use]
    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Build the reporter around `sink`.
    pub fn build<S: Sink>(self, sink: S) -> Reporter<S> {
        Reporter {
            sink,
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            config: self.config,
            formatter: self.formatter.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::color::Color;
    use crate::options::{ColumnOptions, ProgressOptions, RowOptions};
    use crate::sink::BufferSink;
    use time::macros::datetime;

    fn reporter() -> (Reporter<BufferSink>, BufferSink) {
        let buffer = BufferSink::new();
        let reporter = Reporter::builder()
            .clock(FixedClock(datetime!(2024-03-05 14:07:09 UTC)))
            .build(buffer.clone());
        (reporter, buffer)
    }

    #[test]
    fn test_builder_defaults() {
        let (reporter, _) = reporter();
        assert_eq!(reporter.config().width, 100);
        assert_eq!(reporter.formatter().name(), "nested");
    }

    #[test]
    fn test_header_then_footer_ordering() {
        let (mut reporter, buffer) = reporter();
        reporter.header(&SectionOptions::titled("title")).unwrap();
        assert_eq!(buffer.lines(), vec!["title", "\n"]);
        buffer.clear();
        reporter.footer(&SectionOptions::titled("title")).unwrap();
        assert_eq!(buffer.lines(), vec!["\n", "title"]);
    }

    #[test]
    fn test_failed_header_writes_nothing() {
        let (mut reporter, buffer) = reporter();
        let options = SectionOptions::titled("title").width(30).rule_char("==");
        assert!(reporter.header(&options).is_err());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_vertical_spacing_zero_probes() {
        let (mut reporter, buffer) = reporter();
        reporter.vertical_spacing(0).unwrap();
        reporter.vertical_spacing(2).unwrap();
        assert_eq!(buffer.lines(), vec!["", "\n\n"]);
    }

    #[test]
    fn test_no_color_builder() {
        let buffer = BufferSink::new();
        let mut reporter = Reporter::builder().no_color().build(buffer.clone());
        reporter
            .aligned(
                "plain",
                &AlignedOptions {
                    color: Some(Color::Red),
                    bold: true,
                    ..AlignedOptions::default()
                },
            )
            .unwrap();
        assert_eq!(buffer.lines(), vec!["plain"]);
    }

    #[test]
    fn test_table_uses_reporter_width() {
        let buffer = BufferSink::new();
        let mut reporter = Reporter::builder().width(8).build(buffer.clone());
        reporter
            .table(TableOptions::default(), |table| {
                table
                    .row(RowOptions::default())
                    .column("a", ColumnOptions::default().width(2))
                    .column("b", ColumnOptions::default());
                Ok::<_, Error>(())
            })
            .unwrap();
        assert_eq!(buffer.lines(), vec!["a b     "]);
    }

    #[test]
    fn test_table_build_error_renders_nothing() {
        let (mut reporter, buffer) = reporter();
        let result: Result<(), Error> = reporter.table(TableOptions::default(), |table| {
            table.add_row_cells(["never shown"]);
            Err(Error::config("stop"))
        });
        assert_eq!(result.unwrap_err().to_string(), "configuration error: stop");
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_progress_flushes_before_next_line() {
        let (mut reporter, buffer) = reporter();
        reporter.set_formatter(Formatter::progress(ProgressOptions::default()));
        reporter
            .report("work", |r| {
                r.progress(None);
                r.progress(None);
                r.aligned("note", &AlignedOptions::default())?;
                r.progress(Some("!"));
                Ok::<_, Error>(())
            })
            .unwrap();
        assert_eq!(buffer.lines(), vec!["..", "note", "!"]);
    }

    #[test]
    fn test_flush_writes_pending() {
        let (mut reporter, buffer) = reporter();
        reporter.select_formatter("progress").unwrap();
        reporter.progress(None);
        assert!(buffer.is_empty());
        reporter.flush().unwrap();
        assert_eq!(buffer.lines(), vec!["."]);
    }

    #[test]
    fn test_select_formatter_keeps_current_on_error() {
        let (mut reporter, _) = reporter();
        assert!(reporter.select_formatter("bogus").is_err());
        assert_eq!(reporter.formatter().name(), "nested");
    }
}
