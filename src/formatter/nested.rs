//! Nested formatter: indents each section by its depth.

use crate::options::NestedOptions;
use crate::renderables::align::LayoutEngine;
use crate::style::Style;

const DEFAULT_MESSAGE: &str = "working";
const DEFAULT_COMPLETE: &str = "complete";
const DEFAULT_INDENT_SIZE: usize = 2;
/// Indentation never grows past this many spaces.
pub const MAX_INDENT: usize = 1024;

/// One open section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    /// Title the section was opened with.
    pub title: String,
    /// Nesting depth; the outermost section is 0.
    pub depth: usize,
}

/// Writes an opening line per section and a closing line when it finishes,
/// both indented by `depth * indent_size` spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedFormatter {
    message: String,
    complete: String,
    indent_size: usize,
    style: Style,
    sections: Vec<ReportSection>,
}

impl Default for NestedFormatter {
    fn default() -> Self {
        Self::new(NestedOptions::default())
    }
}

impl NestedFormatter {
    /// Create a formatter from its options.
    #[must_use]
    pub fn new(options: NestedOptions) -> Self {
        Self {
            message: options
                .message
                .unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
            complete: options
                .complete
                .unwrap_or_else(|| DEFAULT_COMPLETE.to_string()),
            indent_size: options.indent_size.unwrap_or(DEFAULT_INDENT_SIZE),
            style: Style::from_options(options.color, options.bold),
            sections: Vec::new(),
        }
    }

    /// Current nesting depth (number of open sections).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.sections.len()
    }

    /// Open sections, outermost first.
    #[must_use]
    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    fn indent(&self, depth: usize) -> String {
        " ".repeat(depth.saturating_mul(self.indent_size).min(MAX_INDENT))
    }

    /// Push a section and return its opening line.
    ///
    /// An empty title falls back to the configured message.
    pub(crate) fn open(&mut self, title: &str, engine: &LayoutEngine) -> String {
        let depth = self.sections.len();
        let text = if title.is_empty() {
            self.message.as_str()
        } else {
            title
        };
        let line = format!("{}{text}", self.indent(depth));
        self.sections.push(ReportSection {
            title: title.to_string(),
            depth,
        });
        engine.apply_style(&line, self.style)
    }

    /// Pop the innermost section. Only a section whose body succeeded gets
    /// a closing line.
    pub(crate) fn close(&mut self, succeeded: bool, engine: &LayoutEngine) -> Option<String> {
        let section = self.sections.pop()?;
        succeeded.then(|| {
            let line = format!("{}{}", self.indent(section.depth), self.complete);
            engine.apply_style(&line, self.style)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_depth_indents() {
        let engine = LayoutEngine::new();
        let mut formatter = NestedFormatter::default();
        assert_eq!(formatter.open("outer", &engine), "outer");
        assert_eq!(formatter.open("inner", &engine), "  inner");
        assert_eq!(formatter.depth(), 2);
        assert_eq!(formatter.sections()[1].depth, 1);
        assert_eq!(formatter.close(true, &engine).as_deref(), Some("  complete"));
        assert_eq!(formatter.close(true, &engine).as_deref(), Some("complete"));
        assert_eq!(formatter.depth(), 0);
        assert_eq!(formatter.close(true, &engine), None);
    }

    #[test]
    fn test_options_override_defaults() {
        let engine = LayoutEngine::new();
        let mut formatter = NestedFormatter::new(NestedOptions {
            message: Some("busy".to_string()),
            complete: Some("done".to_string()),
            indent_size: Some(4),
            color: Some(Color::Green),
            bold: false,
        });
        formatter.open("", &engine);
        assert_eq!(formatter.open("", &engine), "\x1b[32m    busy\x1b[0m");
        assert_eq!(
            formatter.close(true, &engine).as_deref(),
            Some("\x1b[32m    done\x1b[0m")
        );
    }

    #[test]
    fn test_huge_indent_size_is_clamped() {
        let engine = LayoutEngine::plain();
        let mut formatter = NestedFormatter::new(NestedOptions {
            indent_size: Some(usize::MAX),
            ..NestedOptions::default()
        });
        assert_eq!(formatter.open("a", &engine), "a");
        let inner = formatter.open("b", &engine);
        assert_eq!(inner, format!("{}b", " ".repeat(MAX_INDENT)));
        let innermost = formatter.open("c", &engine);
        assert_eq!(innermost.len(), MAX_INDENT + 1);
    }

    #[test]
    fn test_failed_section_pops_without_closing_line() {
        let engine = LayoutEngine::new();
        let mut formatter = NestedFormatter::default();
        formatter.open("task", &engine);
        assert_eq!(formatter.close(false, &engine), None);
        assert_eq!(formatter.depth(), 0);
    }
}
