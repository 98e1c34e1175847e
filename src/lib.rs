//! # cli_report
//!
//! Fixed-width text reports for the terminal.
//!
//! Lines are laid out to an exact width, aligned, optionally colored, and
//! written one at a time to a [`Sink`]. On top of that sit headers and
//! footers, horizontal rules, timestamps, bordered tables, and two reporting
//! styles for titled sections of work.
//!
//! ## Quick Start
//!
//! ```rust
//! use cli_report::prelude::*;
//!
//! let buffer = BufferSink::new();
//! let mut reporter = Reporter::builder().width(30).no_color().build(buffer.clone());
//!
//! reporter
//!     .header(&SectionOptions::titled("Nightly build").align(Alignment::Center).rule())
//!     .unwrap();
//! reporter
//!     .report("compile", |r| {
//!         r.aligned("all targets", &AlignedOptions::default())?;
//!         Ok::<_, cli_report::Error>(())
//!     })
//!     .unwrap();
//!
//! assert_eq!(buffer.lines()[0], "        Nightly build         ");
//! assert_eq!(buffer.lines().last().unwrap(), "complete");
//! ```
//!
//! ## Core Concepts
//!
//! - **Reporter**: writes report pieces to a sink
//! - **LayoutEngine**: fits text into a width, with alignment and style
//! - **Table**: rows of fixed or shared-width columns
//! - **Formatter**: how titled sections of work are announced
//! - **Options**: typed, serde-backed option sets that reject unknown keys

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod clock;
pub mod color;
pub mod config;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod options;
pub mod renderables;
pub mod reporter;
pub mod sink;
pub mod style;
pub mod sync;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::color::Color;
    pub use crate::config::ReporterConfig;
    pub use crate::error::{Error, Result};
    pub use crate::formatter::{Formatter, NestedFormatter, ProgressFormatter};
    pub use crate::options::{
        AlignedOptions, ColumnOptions, DatetimeOptions, Encoding, FooterOptions, HeaderOptions,
        NestedOptions, OptionSet, ProgressOptions, RowOptions, RuleMark, RuleOptions,
        SectionOptions, TableOptions,
    };
    pub use crate::renderables::{
        Alignment, Column, LayoutEngine, LineSpec, ReportComposer, Row, Rule, Table,
    };
    pub use crate::reporter::{Reporter, ReporterBuilder};
    pub use crate::sink::{BufferSink, Sink, StdoutSink, WriterSink};
    pub use crate::style::{Attributes, Style};
}

// Re-export key types at crate root
pub use color::Color;
pub use error::{Error, Result};
pub use renderables::{Alignment, LayoutEngine, Table};
pub use reporter::{Reporter, ReporterBuilder};
pub use sink::{BufferSink, Sink};
pub use style::Style;
