//! Line-level layout for reports.
//!
//! - [`LayoutEngine`]: fit one piece of text into a fixed width
//! - [`Rule`]: a line of one repeated character
//! - [`Table`]: rows of fixed-width columns with optional borders
//! - [`ReportComposer`]: headers, footers, timestamps and spacing
//!
//! Everything here returns finished lines; nothing writes to a sink.
//!
//! # Examples
//!
//! ```rust
//! use cli_report::renderables::{Alignment, LayoutEngine, LineSpec};
//!
//! let engine = LayoutEngine::plain();
//! let line = engine
//!     .render_line(&LineSpec::new("total").width(11).align(Alignment::Center))
//!     .unwrap();
//! assert_eq!(line, "   total   ");
//! ```

pub mod align;
pub mod composer;
pub mod rule;
pub mod table;

pub use align::{Alignment, LayoutEngine, LineSpec, text_len};
pub use composer::{DEFAULT_SPACING, ReportComposer};
pub use rule::{DEFAULT_RULE_CHAR, Rule, validate_rule_char};
pub use table::{
    ASCII_BORDER, BorderChars, Column, Row, Table, UNICODE_BORDER, resolve_widths,
};
