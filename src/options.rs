//! Option sets for every public operation.
//!
//! Each operation takes a structured option type with a closed set of keys.
//! Callers working from dynamic data (a JSON object, a config file section)
//! go through [`OptionSet::from_value`], the single place unknown keys are
//! rejected:
//!
//! ```rust
//! use cli_report::options::{OptionSet, SectionOptions};
//! use serde_json::json;
//!
//! let ok = SectionOptions::from_value(json!({"title": "Build", "spacing": 2})).unwrap();
//! assert_eq!(ok.title.as_deref(), Some("Build"));
//!
//! let err = SectionOptions::from_value(json!({"bogus": 1})).unwrap_err();
//! assert!(err.to_string().contains("unknown field `bogus`"));
//! ```

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::renderables::align::Alignment;

/// A closed, per-operation set of option keys.
pub trait OptionSet: DeserializeOwned + Default {
    /// Build the option set from a dynamic mapping.
    ///
    /// `null` yields the defaults. Any key outside the set, or a value of
    /// the wrong type, is rejected with a message naming it.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] describing the offending key or value.
    fn from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value)
            .map_err(|err| Error::config(format!("invalid options: {err}")))
    }
}

/// Options for a single aligned line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlignedOptions {
    pub align: Option<Alignment>,
    pub width: Option<usize>,
    pub color: Option<Color>,
    pub bold: bool,
}

impl OptionSet for AlignedOptions {}

/// Options for a horizontal rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleOptions {
    /// Rule character; exactly one printable character.
    #[serde(rename = "char")]
    pub character: Option<String>,
    pub width: Option<usize>,
    pub color: Option<Color>,
    pub bold: bool,
}

impl OptionSet for RuleOptions {}

/// Options for a timestamp line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatetimeOptions {
    /// Pattern in `time` format-description syntax.
    pub format: Option<String>,
    pub align: Option<Alignment>,
    pub width: Option<usize>,
    pub color: Option<Color>,
    pub bold: bool,
}

impl OptionSet for DatetimeOptions {}

/// The `rule` key of a header or footer: off, on with the default
/// character, or on with a given character.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RuleMark {
    Enabled(bool),
    Char(String),
}

impl Default for RuleMark {
    fn default() -> Self {
        Self::Enabled(false)
    }
}

impl RuleMark {
    /// Whether a rule line is drawn.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Enabled(false))
    }

    /// Explicit rule character, if one was given.
    #[must_use]
    pub fn character(&self) -> Option<&str> {
        match self {
            Self::Char(character) => Some(character),
            Self::Enabled(_) => None,
        }
    }
}

/// Options shared by headers and footers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionOptions {
    pub title: Option<String>,
    pub width: Option<usize>,
    pub align: Option<Alignment>,
    /// Blank lines around the section; defaults to 1.
    pub spacing: Option<usize>,
    /// Add a timestamp line under the title.
    pub timestamp: bool,
    pub rule: RuleMark,
    pub color: Option<Color>,
    pub bold: bool,
}

impl OptionSet for SectionOptions {}

impl SectionOptions {
    /// Options with just a title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Set the width.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the alignment.
    #[must_use]
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    /// Set the number of blank lines.
    #[must_use]
    pub fn spacing(mut self, spacing: usize) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Add a timestamp line.
    #[must_use]
    pub fn timestamp(mut self) -> Self {
        self.timestamp = true;
        self
    }

    /// Draw a rule with the default character.
    #[must_use]
    pub fn rule(mut self) -> Self {
        self.rule = RuleMark::Enabled(true);
        self
    }

    /// Draw a rule with `character`.
    #[must_use]
    pub fn rule_char(mut self, character: impl Into<String>) -> Self {
        self.rule = RuleMark::Char(character.into());
        self
    }

    /// Set the color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Make the section bold.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Options for a header line block.
pub type HeaderOptions = SectionOptions;
/// Options for a footer line block.
pub type FooterOptions = SectionOptions;

/// Border character set of a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// `|` and `-`.
    #[default]
    Ascii,
    /// `│` and `─`.
    Unicode,
}

/// Options for a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableOptions {
    /// Width budget shared by each row's columns.
    pub width: Option<usize>,
    pub border: bool,
    pub encoding: Encoding,
}

impl OptionSet for TableOptions {}

/// Options for a table row; columns inherit the style when they set none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RowOptions {
    pub color: Option<Color>,
    pub bold: bool,
}

impl OptionSet for RowOptions {}

/// Options for a table column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnOptions {
    /// Explicit width; unset columns share what the row leaves over.
    pub width: Option<usize>,
    pub align: Alignment,
    pub color: Option<Color>,
    pub bold: bool,
    pub underline: bool,
    pub reversed: bool,
    /// Spaces on each side of the content, inside the width.
    pub padding: usize,
}

impl OptionSet for ColumnOptions {}

impl ColumnOptions {
    /// Set an explicit width.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the alignment.
    #[must_use]
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set the color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Make the column bold.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set padding on each side.
    #[must_use]
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }
}

/// Options for the progress formatter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgressOptions {
    /// Text appended per progress tick; defaults to `.`.
    pub indicator: Option<String>,
    pub color: Option<Color>,
    pub bold: bool,
}

impl OptionSet for ProgressOptions {}

/// Options for the nested formatter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NestedOptions {
    /// Opening line when a section has no title; defaults to `working`.
    pub message: Option<String>,
    /// Closing line; defaults to `complete`.
    pub complete: Option<String>,
    /// Spaces per nesting level; defaults to 2.
    pub indent_size: Option<usize>,
    pub color: Option<Color>,
    pub bold: bool,
}

impl OptionSet for NestedOptions {}
