//! Composite report lines: headers, footers, timestamps, rules and spacing.
//!
//! The composer only produces lines. Every option is validated and every
//! line laid out before anything is returned, so a caller that writes the
//! result either writes all of it or, on error, nothing.

use crate::clock::Clock;
use crate::config::ReporterConfig;
use crate::error::{Error, Result, validate_width};
use crate::options::{AlignedOptions, DatetimeOptions, RuleOptions, SectionOptions};
use crate::renderables::align::{LayoutEngine, LineSpec, text_len};
use crate::renderables::rule::Rule;
use crate::style::Style;

/// Blank lines written around a header or footer when unset.
pub const DEFAULT_SPACING: usize = 1;

/// Builds multi-line report pieces on top of the layout engine.
pub struct ReportComposer<'a> {
    engine: LayoutEngine,
    clock: &'a dyn Clock,
    config: &'a ReporterConfig,
}

/// The validated pieces of a header or footer, in header order.
struct SectionParts {
    title: Option<String>,
    timestamp: Option<String>,
    rule: Option<String>,
    spacing: Option<String>,
}

impl<'a> ReportComposer<'a> {
    /// Compose with the given engine, clock and defaults.
    pub fn new(engine: LayoutEngine, clock: &'a dyn Clock, config: &'a ReporterConfig) -> Self {
        Self {
            engine,
            clock,
            config,
        }
    }

    /// One aligned line of `text`.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] when `text` does not fit the width.
    pub fn aligned(&self, text: &str, options: &AlignedOptions) -> Result<String> {
        let spec = LineSpec::new(text)
            .width(options.width.unwrap_or(self.config.width))
            .align(options.align.unwrap_or(self.config.align))
            .style(Style::from_options(options.color, options.bold));
        self.engine.render_line(&spec)
    }

    /// One line of a repeated rule character.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] for a bad character or a zero width.
    pub fn horizontal_rule(&self, options: &RuleOptions) -> Result<String> {
        let mut rule = Rule::new(options.width.unwrap_or(self.config.width))
            .style(Style::from_options(options.color, options.bold));
        if let Some(character) = &options.character {
            rule = rule.character(character.as_str());
        }
        rule.render(&self.engine)
    }

    /// The current time, formatted and aligned.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] for a bad pattern or a timestamp longer than
    /// the width.
    pub fn datetime(&self, options: &DatetimeOptions) -> Result<String> {
        let width = validate_width(options.width.unwrap_or(self.config.width), "width")?;
        let pattern = options
            .format
            .as_deref()
            .unwrap_or(&self.config.datetime_format);
        let stamp = self.clock.format_now(pattern)?;
        if text_len(&stamp) > width {
            return Err(Error::config(format!(
                "timestamp `{stamp}` too large for width {width}"
            )));
        }
        log::trace!("datetime line {stamp:?}");
        let spec = LineSpec::new(stamp)
            .width(width)
            .align(options.align.unwrap_or(self.config.align))
            .style(Style::from_options(options.color, options.bold));
        self.engine.render_line(&spec)
    }

    /// Title, timestamp, rule, then the spacing write.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] for any invalid option; no lines are
    /// returned in that case.
    pub fn header(&self, options: &SectionOptions) -> Result<Vec<String>> {
        let parts = self.section_parts(options)?;
        Ok([parts.title, parts.timestamp, parts.rule, parts.spacing]
            .into_iter()
            .flatten()
            .collect())
    }

    /// The spacing write, then rule, title and timestamp.
    ///
    /// The separator leads here, unlike [`header`](Self::header).
    ///
    /// # Errors
    ///
    /// Same as [`header`](Self::header).
    pub fn footer(&self, options: &SectionOptions) -> Result<Vec<String>> {
        let parts = self.section_parts(options)?;
        Ok([parts.spacing, parts.rule, parts.title, parts.timestamp]
            .into_iter()
            .flatten()
            .collect())
    }

    /// A single write of `lines` newlines; empty for zero.
    #[must_use]
    pub fn vertical_spacing(lines: usize) -> String {
        "\n".repeat(lines)
    }

    fn section_parts(&self, options: &SectionOptions) -> Result<SectionParts> {
        let width = validate_width(options.width.unwrap_or(self.config.width), "width")?;
        let align = options.align.unwrap_or(self.config.align);

        let title = match &options.title {
            Some(title) => {
                if text_len(title) > width {
                    return Err(Error::config(format!(
                        "title `{title}` too large for width {width}"
                    )));
                }
                Some(self.aligned(
                    title,
                    &AlignedOptions {
                        align: Some(align),
                        width: Some(width),
                        color: options.color,
                        bold: options.bold,
                    },
                )?)
            }
            None => None,
        };

        let timestamp = if options.timestamp {
            Some(self.datetime(&DatetimeOptions {
                format: None,
                align: Some(align),
                width: Some(width),
                color: options.color,
                bold: options.bold,
            })?)
        } else {
            None
        };

        let rule = if options.rule.is_enabled() {
            Some(self.horizontal_rule(&RuleOptions {
                character: options.rule.character().map(str::to_string),
                width: Some(width),
                color: options.color,
                bold: options.bold,
            })?)
        } else {
            None
        };

        let lines = options.spacing.unwrap_or(DEFAULT_SPACING);
        let spacing = (lines > 0).then(|| Self::vertical_spacing(lines));

        Ok(SectionParts {
            title,
            timestamp,
            rule,
            spacing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::renderables::align::Alignment;
    use time::macros::datetime;

    const CLOCK: FixedClock = FixedClock(datetime!(2024-03-05 14:07:09 UTC));

    fn with_composer<T>(f: impl FnOnce(&ReportComposer<'_>) -> T) -> T {
        let config = ReporterConfig::default();
        let composer = ReportComposer::new(LayoutEngine::new(), &CLOCK, &config);
        f(&composer)
    }

    #[test]
    fn test_header_title_then_spacing() {
        let lines = with_composer(|c| c.header(&SectionOptions::titled("title"))).unwrap();
        assert_eq!(lines, vec!["title".to_string(), "\n".to_string()]);
    }

    #[test]
    fn test_footer_spacing_then_title() {
        let lines = with_composer(|c| c.footer(&SectionOptions::titled("title"))).unwrap();
        assert_eq!(lines, vec!["\n".to_string(), "title".to_string()]);
    }

    #[test]
    fn test_header_full_order() {
        let options = SectionOptions::titled("Report")
            .width(30)
            .timestamp()
            .rule_char("=")
            .spacing(2);
        let lines = with_composer(|c| c.header(&options)).unwrap();
        assert_eq!(
            lines,
            vec![
                "Report".to_string(),
                "2024-03-05 -  2:07:09PM".to_string(),
                "=".repeat(30),
                "\n\n".to_string(),
            ]
        );
    }

    #[test]
    fn test_footer_full_order() {
        let options = SectionOptions::titled("End").width(10).rule().timestamp();
        let err = with_composer(|c| c.footer(&options)).unwrap_err();
        // the timestamp does not fit in 10 columns
        assert!(err.to_string().contains("too large for width 10"));

        let options = SectionOptions::titled("End").width(30).rule().timestamp();
        let lines = with_composer(|c| c.footer(&options)).unwrap();
        assert_eq!(lines[0], "\n");
        assert_eq!(lines[1], "\u{2014}".repeat(30));
        assert_eq!(lines[2], "End");
        assert_eq!(lines[3], "2024-03-05 -  2:07:09PM");
    }

    #[test]
    fn test_zero_spacing_suppresses_write() {
        let lines =
            with_composer(|c| c.header(&SectionOptions::titled("t").spacing(0))).unwrap();
        assert_eq!(lines, vec!["t".to_string()]);
    }

    #[test]
    fn test_title_too_wide() {
        let err = with_composer(|c| c.footer(&SectionOptions::titled("test").width(3)))
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_centered_header_uses_width() {
        let options = SectionOptions::titled("ab").width(6).align(Alignment::Center);
        let lines = with_composer(|c| c.header(&options)).unwrap();
        assert_eq!(lines[0], "  ab  ");
    }

    #[test]
    fn test_datetime_right_aligned() {
        let options = DatetimeOptions {
            format: Some("[hour]:[minute]".to_string()),
            align: Some(Alignment::Right),
            width: Some(8),
            ..DatetimeOptions::default()
        };
        assert_eq!(with_composer(|c| c.datetime(&options)).unwrap(), "   14:07");
    }

    #[test]
    fn test_vertical_spacing_strings() {
        assert_eq!(ReportComposer::vertical_spacing(0), "");
        assert_eq!(ReportComposer::vertical_spacing(3), "\n\n\n");
    }
}
