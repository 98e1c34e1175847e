//! ANSI style wrapping.
//!
//! A [`Style`] is a foreground [`Color`] plus a set of [`Attributes`].
//! [`Style::wrap`] surrounds a finished line with the escape codes for the
//! style and a single trailing reset.

use bitflags::bitflags;

use crate::color::Color;

/// Escape sequence that clears every attribute and color.
pub const RESET: &str = "\x1b[0m";

bitflags! {
    /// Text attribute flags.
    ///
    /// Each flag corresponds to an ANSI SGR (Select Graphic Rendition) code.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attributes: u8 {
        /// Bold/bright text (SGR 1).
        const BOLD      = 1 << 0;
        /// Single underline (SGR 4).
        const UNDERLINE = 1 << 1;
        /// Reverse video (SGR 7).
        const REVERSE   = 1 << 2;
    }
}

impl Attributes {
    /// Map of attribute flags to their ANSI SGR codes, in emission order.
    const SGR_CODES: [(Self, u8); 3] = [
        (Self::BOLD, 1),
        (Self::UNDERLINE, 4),
        (Self::REVERSE, 7),
    ];

    /// Get the ANSI SGR codes for enabled attributes.
    #[must_use]
    pub fn to_sgr_codes(&self) -> Vec<u8> {
        Self::SGR_CODES
            .iter()
            .filter_map(|(attr, code)| self.contains(*attr).then_some(*code))
            .collect()
    }
}

/// Visual style for a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color.
    pub color: Option<Color>,
    /// Enabled attributes.
    pub attributes: Attributes,
}

impl Style {
    /// Create an empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a style from the `color`/`bold` pair most options carry.
    #[must_use]
    pub fn from_options(color: Option<Color>, bold: bool) -> Self {
        let style = Self {
            color,
            ..Self::default()
        };
        if bold { style.bold() } else { style }
    }

    /// Set the foreground color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Enable bold text.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.attributes.insert(Attributes::BOLD);
        self
    }

    /// Enable underlined text.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.attributes.insert(Attributes::UNDERLINE);
        self
    }

    /// Enable reverse video.
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.attributes.insert(Attributes::REVERSE);
        self
    }

    /// Returns true when the style emits no escape codes.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.color.is_none() && self.attributes.is_empty()
    }

    /// Opening escape sequence: one code per attribute, then the color.
    #[must_use]
    pub fn prefix(&self) -> String {
        let mut out: String = self
            .attributes
            .to_sgr_codes()
            .into_iter()
            .map(|code| format!("\x1b[{code}m"))
            .collect();
        if let Some(color) = self.color {
            out.push_str(&color.escape());
        }
        out
    }

    /// Wrap a finished line in this style.
    ///
    /// A plain style returns the line unchanged; anything else is terminated
    /// by exactly one [`RESET`].
    #[must_use]
    pub fn wrap(&self, line: &str) -> String {
        if self.is_plain() {
            return line.to_string();
        }
        let prefix = self.prefix();
        let mut out = String::with_capacity(prefix.len() + line.len() + RESET.len());
        out.push_str(&prefix);
        out.push_str(line);
        out.push_str(RESET);
        out
    }

    /// `fallback` when this style is entirely plain, otherwise `self`.
    ///
    /// Styles are not merged field by field: a style with only underline set
    /// keeps no color even if `fallback` has one.
    #[must_use]
    pub fn or(self, fallback: Style) -> Style {
        if self.is_plain() { fallback } else { self }
    }
}

/// Wrap `line` in bold and/or color codes.
///
/// Bold precedes color and a single reset ends the sequence. With neither
/// option set the input comes back unchanged.
#[must_use]
pub fn wrap(line: &str, color: Option<Color>, bold: bool) -> String {
    Style::from_options(color, bold).wrap(line)
}
