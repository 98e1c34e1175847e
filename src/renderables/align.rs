//! Align - single-line layout within a fixed width.
//!
//! This is the layout engine every other renderable goes through: it checks
//! that text fits its width, computes the leading and trailing padding for
//! the requested [`Alignment`] and applies the line's [`Style`].
//!
//! # Example
//!
//! ```rust
//! use cli_report::renderables::align::{Alignment, LayoutEngine, LineSpec};
//!
//! let engine = LayoutEngine::new();
//! let line = engine
//!     .render_line(&LineSpec::new("title").width(11).align(Alignment::Center))
//!     .unwrap();
//! assert_eq!(line, "   title   ");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::color::Color;
use crate::config::DEFAULT_WIDTH;
use crate::error::{Error, Result, validate_width};
use crate::style::{Attributes, Style};

/// Horizontal alignment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// Align content to the left (default).
    #[default]
    Left,
    /// Align content to the right.
    Right,
    /// Center content horizontally.
    Center,
}

impl Alignment {
    /// Split `pad` spaces into (leading, trailing) for this alignment.
    ///
    /// Centering puts the odd space on the right. Left alignment reports its
    /// padding as trailing; whether it is emitted is up to the caller.
    #[must_use]
    pub fn split(self, pad: usize) -> (usize, usize) {
        match self {
            Self::Left => (0, pad),
            Self::Right => (pad, 0),
            Self::Center => {
                let left = pad / 2;
                (left, pad - left)
            }
        }
    }

    /// Lowercase name as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Alignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" => Ok(Self::Center),
            _ => Err(Error::config(format!(
                "invalid align `{s}`, expected one of left, right, center"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Alignment {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Number of display cells in `text`.
///
/// One character is one cell; escape sequences are never passed in here.
#[must_use]
pub fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Everything needed to lay out one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSpec {
    /// Text to place.
    pub text: String,
    /// Target width in cells.
    pub width: usize,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Style applied to the padded line.
    pub style: Style,
}

impl LineSpec {
    /// A left-aligned, unstyled spec at the default width.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            width: DEFAULT_WIDTH,
            align: Alignment::Left,
            style: Style::new(),
        }
    }

    /// Set the target width.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the alignment.
    #[must_use]
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set the foreground color.
    #[must_use]
    pub fn color(mut self, color: Option<Color>) -> Self {
        self.style.color = color;
        self
    }

    /// Set or clear bold.
    #[must_use]
    pub fn bold(mut self, bold: bool) -> Self {
        self.style.attributes.set(Attributes::BOLD, bold);
        self
    }

    /// Replace the whole style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// Computes aligned, padded, styled lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEngine {
    styling: bool,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine {
    /// Engine that emits escape codes.
    #[must_use]
    pub fn new() -> Self {
        Self { styling: true }
    }

    /// Engine that validates styles but never emits escape codes.
    #[must_use]
    pub fn plain() -> Self {
        Self { styling: false }
    }

    /// Whether escape codes are emitted.
    #[must_use]
    pub fn styling(&self) -> bool {
        self.styling
    }

    /// Render one line. Left-aligned text gets no trailing padding.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] when the width is zero or the text does not
    /// fit. Nothing is produced in that case.
    pub fn render_line(&self, spec: &LineSpec) -> Result<String> {
        let (leading, trailing) = Self::padding(spec)?;
        // Left-aligned output is just the text, whatever the width.
        let trailing = if spec.align == Alignment::Left {
            0
        } else {
            trailing
        };
        let mut line = String::with_capacity(leading + spec.text.len() + trailing);
        push_spaces(&mut line, leading);
        line.push_str(&spec.text);
        push_spaces(&mut line, trailing);
        Ok(self.apply_style(&line, spec.style))
    }

    /// Render one cell: like [`render_line`](Self::render_line) but always
    /// exactly `width` cells wide, left alignment included.
    ///
    /// # Errors
    ///
    /// Same as [`render_line`](Self::render_line).
    pub fn render_cell(&self, spec: &LineSpec) -> Result<String> {
        let (leading, trailing) = Self::padding(spec)?;
        let mut cell = String::with_capacity(spec.text.len());
        push_spaces(&mut cell, leading);
        cell.push_str(&spec.text);
        push_spaces(&mut cell, trailing);
        Ok(self.apply_style(&cell, spec.style))
    }

    /// Apply `style` to an already laid-out line.
    #[must_use]
    pub fn apply_style(&self, line: &str, style: Style) -> String {
        if self.styling {
            style.wrap(line)
        } else {
            line.to_string()
        }
    }

    fn padding(spec: &LineSpec) -> Result<(usize, usize)> {
        let width = validate_width(spec.width, "width")?;
        let len = text_len(&spec.text);
        if len > width {
            return Err(Error::config(format!(
                "content too large for width: {len} characters do not fit in {width}"
            )));
        }
        Ok(spec.align.split(width - len))
    }
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n(' ', count));
}
