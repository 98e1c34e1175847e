//! Rule - a horizontal line of one repeated character.

use crate::error::{Error, Result, validate_width};
use crate::renderables::align::{LayoutEngine, LineSpec};
use crate::style::Style;

/// Default rule character (em dash).
pub const DEFAULT_RULE_CHAR: char = '\u{2014}';

/// A horizontal rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Character to use for the rule line.
    character: String,
    /// Number of characters.
    width: usize,
    /// Style for the rule line.
    style: Style,
}

impl Rule {
    /// A default-character rule of `width` characters.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            character: DEFAULT_RULE_CHAR.to_string(),
            width,
            style: Style::new(),
        }
    }

    /// Set the rule character.
    #[must_use]
    pub fn character(mut self, ch: impl Into<String>) -> Self {
        self.character = ch.into();
        self
    }

    /// Set the rule style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Render the rule as one line.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] when the character is not exactly one
    /// printable character or the width is zero.
    pub fn render(&self, engine: &LayoutEngine) -> Result<String> {
        let ch = validate_rule_char(&self.character)?;
        let width = validate_width(self.width, "rule width")?;
        let line = ch.to_string().repeat(width);
        engine.render_line(&LineSpec::new(line).width(width).style(self.style))
    }
}

/// Check that `candidate` is exactly one printable character.
///
/// # Errors
///
/// [`Error::Configuration`] naming the rejected value.
pub fn validate_rule_char(candidate: &str) -> Result<char> {
    let mut chars = candidate.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if !ch.is_control() => Ok(ch),
        _ => Err(Error::config(format!(
            "rule char must be exactly one printable character, got {candidate:?}"
        ))),
    }
}
