//! Named terminal colors.
//!
//! Colors form a closed set: the eight standard ANSI colors plus their
//! bright variants. Each maps to a fixed SGR foreground code.
//!
//! # Examples
//!
//! ```
//! use cli_report::color::Color;
//!
//! let red: Color = "red".parse().unwrap();
//! assert_eq!(red, Color::Red);
//! assert_eq!(red.sgr_code(), 31);
//!
//! // Names are case-insensitive; `light_` and `bright_` are interchangeable.
//! assert_eq!(Color::parse("Light_Blue").unwrap(), Color::BrightBlue);
//!
//! assert!(Color::parse("chartreuse").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};

/// A named foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// Lookup table from color to its canonical name and SGR code.
const COLOR_TABLE: [(Color, &str, u8); 16] = [
    (Color::Black, "black", 30),
    (Color::Red, "red", 31),
    (Color::Green, "green", 32),
    (Color::Yellow, "yellow", 33),
    (Color::Blue, "blue", 34),
    (Color::Magenta, "magenta", 35),
    (Color::Cyan, "cyan", 36),
    (Color::White, "white", 37),
    (Color::BrightBlack, "bright_black", 90),
    (Color::BrightRed, "bright_red", 91),
    (Color::BrightGreen, "bright_green", 92),
    (Color::BrightYellow, "bright_yellow", 93),
    (Color::BrightBlue, "bright_blue", 94),
    (Color::BrightMagenta, "bright_magenta", 95),
    (Color::BrightCyan, "bright_cyan", 96),
    (Color::BrightWhite, "bright_white", 97),
];

impl Color {
    /// Every recognized color, in SGR order.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    /// Parse a color name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] for names outside the closed set.
    pub fn parse(name: &str) -> Result<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        let normalized = match normalized.as_str() {
            "gray" | "grey" => "bright_black".to_string(),
            other => match other.strip_prefix("light_") {
                Some(base) => format!("bright_{base}"),
                None => normalized,
            },
        };

        COLOR_TABLE
            .iter()
            .find(|(_, known, _)| *known == normalized)
            .map(|(color, _, _)| *color)
            .ok_or_else(|| Error::config(format!("unknown color `{name}`")))
    }

    fn entry(self) -> &'static (Color, &'static str, u8) {
        // The table holds every variant exactly once, in declaration order.
        &COLOR_TABLE[self as usize]
    }

    /// Canonical lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.entry().1
    }

    /// SGR foreground code for this color.
    #[must_use]
    pub fn sgr_code(self) -> u8 {
        self.entry().2
    }

    /// Full escape sequence that switches to this foreground color.
    #[must_use]
    pub fn escape(self) -> String {
        format!("\x1b[{}m", self.sgr_code())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Self::parse(&name).map_err(serde::de::Error::custom)
    }
}
