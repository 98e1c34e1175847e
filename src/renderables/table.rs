//! Table - rows of columns laid out against a width budget.
//!
//! A [`Table`] holds an optional header row and any number of body rows.
//! Every row is laid out on its own: columns with an explicit width keep it,
//! and the columns without one share what is left of the table width in
//! equal, rounded-down parts. Rows may therefore have different shapes.
//!
//! # Examples
//!
//! ```
//! use cli_report::options::{ColumnOptions, RowOptions, TableOptions};
//! use cli_report::renderables::align::LayoutEngine;
//! use cli_report::renderables::table::Table;
//!
//! let mut table = Table::new(TableOptions {
//!     width: Some(20),
//!     border: true,
//!     ..TableOptions::default()
//! });
//! table
//!     .row(RowOptions::default())
//!     .column("Name", ColumnOptions::default().width(8))
//!     .column("Age", ColumnOptions::default());
//!
//! let lines = table.render(&LayoutEngine::new()).unwrap();
//! assert_eq!(lines[1], "|Name    |Age         |");
//! ```
//!
//! With `border` set, a rule of dashes is drawn above the first row, between
//! the header and the body, and after the last row.

use crate::config::DEFAULT_WIDTH;
use crate::error::{Error, Result, validate_width};
use crate::options::{ColumnOptions, Encoding, RowOptions, TableOptions};
use crate::renderables::align::{LayoutEngine, LineSpec};
use crate::style::Style;

/// Characters used to draw a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    /// Between and around cells.
    pub vertical: char,
    /// Rule lines.
    pub horizontal: char,
}

/// `|` and `-`.
pub const ASCII_BORDER: BorderChars = BorderChars {
    vertical: '|',
    horizontal: '-',
};

/// `│` and `─`.
pub const UNICODE_BORDER: BorderChars = BorderChars {
    vertical: '\u{2502}',
    horizontal: '\u{2500}',
};

impl From<Encoding> for BorderChars {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Ascii => ASCII_BORDER,
            Encoding::Unicode => UNICODE_BORDER,
        }
    }
}

/// A table cell: content plus its layout options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Cell text.
    pub content: String,
    /// Width, alignment and style.
    pub options: ColumnOptions,
}

impl Column {
    /// Create a column.
    #[must_use]
    pub fn new(content: impl Into<String>, options: ColumnOptions) -> Self {
        Self {
            content: content.into(),
            options,
        }
    }

    /// The column's own style, without row inheritance.
    #[must_use]
    pub fn style(&self) -> Style {
        let mut style = Style::from_options(self.options.color, self.options.bold);
        if self.options.underline {
            style = style.underline();
        }
        if self.options.reversed {
            style = style.reverse();
        }
        style
    }

    fn render(&self, width: usize, style: Style, engine: &LayoutEngine) -> Result<String> {
        if width == 0 {
            return Err(Error::config(format!(
                "column `{}` resolves to zero width",
                self.content
            )));
        }
        let padding = self.options.padding;
        let inner = padding
            .checked_mul(2)
            .and_then(|both| width.checked_sub(both))
            .filter(|inner| *inner > 0)
            .ok_or_else(|| {
                Error::config(format!(
                    "padding {padding} leaves no room in a column of width {width}"
                ))
            })?;
        let spec = LineSpec::new(self.content.as_str())
            .width(inner)
            .align(self.options.align);
        let body = engine.render_cell(&spec)?;
        let pad = " ".repeat(padding);
        Ok(engine.apply_style(&format!("{pad}{body}{pad}"), style))
    }
}

/// An ordered list of columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    columns: Vec<Column>,
    style: Style,
}

impl Row {
    /// Create an empty row.
    #[must_use]
    pub fn new(options: RowOptions) -> Self {
        Self {
            columns: Vec::new(),
            style: Style::from_options(options.color, options.bold),
        }
    }

    /// Append a column.
    pub fn column(&mut self, content: impl Into<String>, options: ColumnOptions) -> &mut Self {
        self.columns.push(Column::new(content, options));
        self
    }

    /// Append a prepared column.
    pub fn push(&mut self, column: Column) -> &mut Self {
        self.columns.push(column);
        self
    }

    /// The columns so far.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when the row has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Resolve the width of every column in one row.
///
/// Explicit widths are kept. The `k` implicit columns each get
/// `(table_width - explicit_sum) / k`, rounded down.
///
/// # Errors
///
/// [`Error::Configuration`] when an explicit width is zero or the explicit
/// widths add up to more than `table_width`.
pub fn resolve_widths(table_width: usize, columns: &[Column]) -> Result<Vec<usize>> {
    let mut explicit = 0usize;
    let mut implicit = 0usize;
    for column in columns {
        match column.options.width {
            Some(0) => {
                return Err(Error::config(format!(
                    "column `{}` width must be a positive integer, got 0",
                    column.content
                )));
            }
            Some(width) => explicit = explicit.saturating_add(width),
            None => implicit += 1,
        }
    }

    if explicit > table_width {
        return Err(Error::config(format!(
            "column widths total {explicit}, more than the table width {table_width}"
        )));
    }

    let share = if implicit > 0 {
        (table_width - explicit) / implicit
    } else {
        0
    };
    Ok(columns
        .iter()
        .map(|column| column.options.width.unwrap_or(share))
        .collect())
}

/// A table under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    width: usize,
    border: bool,
    border_chars: BorderChars,
    header: Option<Row>,
    rows: Vec<Row>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new(TableOptions::default())
    }
}

impl Table {
    /// Create an empty table.
    #[must_use]
    pub fn new(options: TableOptions) -> Self {
        Self {
            width: options.width.unwrap_or(DEFAULT_WIDTH),
            border: options.border,
            border_chars: options.encoding.into(),
            header: None,
            rows: Vec::new(),
        }
    }

    /// Start the header row, replacing any previous one.
    ///
    /// The header always renders bold.
    pub fn header(&mut self, options: RowOptions) -> &mut Row {
        self.header.insert(Row::new(options))
    }

    /// Start a body row.
    pub fn row(&mut self, options: RowOptions) -> &mut Row {
        self.rows.push(Row::new(options));
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// Add a body row of implicit-width, left-aligned columns.
    pub fn add_row_cells<T: Into<String>>(&mut self, cells: impl IntoIterator<Item = T>) {
        let row = self.row(RowOptions::default());
        for cell in cells {
            row.column(cell, ColumnOptions::default());
        }
    }

    /// Width budget of each row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of body rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Lay out every row and decoration.
    ///
    /// The table is consumed: once rendered it cannot be extended.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] when there are no rows at all, the table
    /// width is zero, or any row fails to lay out. No lines are returned in that case.
    pub fn render(self, engine: &LayoutEngine) -> Result<Vec<String>> {
        if self.header.is_none() && self.rows.is_empty() {
            return Err(Error::config("no rows defined"));
        }
        validate_width(self.width, "table width")?;

        let header = self
            .header
            .as_ref()
            .map(|row| self.render_row(row, true, engine))
            .transpose()?;
        let body = self
            .rows
            .iter()
            .map(|row| self.render_row(row, false, engine))
            .collect::<Result<Vec<_>>>()?;

        let rule_width = header
            .iter()
            .chain(body.iter())
            .map(|(_, visible)| *visible)
            .max()
            .unwrap_or(0);
        let rule = self.border_chars.horizontal.to_string().repeat(rule_width);

        let mut lines = Vec::with_capacity(body.len() + 4);
        if self.border {
            lines.push(rule.clone());
        }
        if let Some((line, _)) = header {
            lines.push(line);
            if self.border && !body.is_empty() {
                lines.push(rule.clone());
            }
        }
        lines.extend(body.into_iter().map(|(line, _)| line));
        if self.border {
            lines.push(rule);
        }
        Ok(lines)
    }

    /// Render one row, returning the line and its visible width.
    fn render_row(
        &self,
        row: &Row,
        is_header: bool,
        engine: &LayoutEngine,
    ) -> Result<(String, usize)> {
        let widths = resolve_widths(self.width, &row.columns)?;
        log::debug!("resolved column widths {widths:?} against table width {}", self.width);

        let vertical = self.border_chars.vertical;
        let mut line = String::new();
        if self.border {
            line.push(vertical);
        }
        for (column, width) in row.columns.iter().zip(&widths) {
            let mut style = column.style().or(row.style);
            if is_header {
                style = style.bold();
            }
            line.push_str(&column.render(*width, style, engine)?);
            if self.border {
                line.push(vertical);
            }
        }

        let mut visible: usize = widths.iter().sum();
        if self.border {
            visible += widths.len() + 1;
        }
        Ok((line, visible))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::renderables::align::Alignment;

    fn implicit(content: &str) -> Column {
        Column::new(content, ColumnOptions::default())
    }

    fn sized(content: &str, width: usize) -> Column {
        Column::new(content, ColumnOptions::default().width(width))
    }

    #[test]
    fn test_single_implicit_column_takes_full_width() {
        assert_eq!(resolve_widths(100, &[implicit("a")]).unwrap(), vec![100]);
    }

    #[test]
    fn test_implicit_gets_remainder() {
        let widths = resolve_widths(100, &[sized("a", 30), implicit("b")]).unwrap();
        assert_eq!(widths, vec![30, 70]);
    }

    #[test]
    fn test_implicit_share_rounds_down() {
        let widths =
            resolve_widths(100, &[sized("a", 10), implicit("b"), implicit("c"), implicit("d")])
                .unwrap();
        assert_eq!(widths, vec![10, 30, 30, 30]);
    }

    #[test]
    fn test_explicit_over_budget_fails() {
        let err = resolve_widths(100, &[sized("a", 60), sized("b", 50)]).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("more than the table width 100"));
    }

    #[test]
    fn test_explicit_zero_width_fails() {
        assert!(resolve_widths(100, &[sized("a", 0)]).is_err());
    }

    #[test]
    fn test_no_rows_defined() {
        let err = Table::default().render(&LayoutEngine::new()).unwrap_err();
        assert!(err.to_string().contains("no rows defined"));
    }

    #[test]
    fn test_unbordered_rows_concatenate() {
        let mut table = Table::new(TableOptions {
            width: Some(10),
            ..TableOptions::default()
        });
        table
            .row(RowOptions::default())
            .column("ab", ColumnOptions::default().width(4))
            .column("cd", ColumnOptions::default().align(Alignment::Right));
        let lines = table.render(&LayoutEngine::new()).unwrap();
        assert_eq!(lines, vec!["ab      cd".to_string()]);
    }

    #[test]
    fn test_rows_resolve_independently() {
        let mut table = Table::new(TableOptions {
            width: Some(6),
            ..TableOptions::default()
        });
        table.add_row_cells(["a"]);
        table.add_row_cells(["b", "c"]);
        let lines = table.render(&LayoutEngine::new()).unwrap();
        assert_eq!(lines, vec!["a     ".to_string(), "b  c  ".to_string()]);
    }

    #[test]
    fn test_bordered_with_header() {
        let mut table = Table::new(TableOptions {
            width: Some(6),
            border: true,
            ..TableOptions::default()
        });
        table
            .header(RowOptions::default())
            .column("H", ColumnOptions::default())
            .column("I", ColumnOptions::default());
        table.add_row_cells(["x", "y"]);
        let lines = table.render(&LayoutEngine::plain()).unwrap();
        assert_eq!(
            lines,
            vec![
                "---------".to_string(),
                "|H  |I  |".to_string(),
                "---------".to_string(),
                "|x  |y  |".to_string(),
                "---------".to_string(),
            ]
        );
    }

    #[test]
    fn test_header_is_bold() {
        let mut table = Table::new(TableOptions {
            width: Some(3),
            ..TableOptions::default()
        });
        table
            .header(RowOptions::default())
            .column("H", ColumnOptions::default());
        let lines = table.render(&LayoutEngine::new()).unwrap();
        assert_eq!(lines, vec!["\x1b[1mH  \x1b[0m".to_string()]);
    }

    #[test]
    fn test_unicode_border() {
        let mut table = Table::new(TableOptions {
            width: Some(2),
            border: true,
            encoding: Encoding::Unicode,
        });
        table.add_row_cells(["ok"]);
        let lines = table.render(&LayoutEngine::new()).unwrap();
        assert_eq!(lines[0], "\u{2500}".repeat(4));
        assert_eq!(lines[1], "\u{2502}ok\u{2502}");
    }

    #[test]
    fn test_column_style_beats_row_style() {
        let mut table = Table::new(TableOptions {
            width: Some(4),
            ..TableOptions::default()
        });
        table
            .row(RowOptions {
                color: Some(Color::Red),
                bold: false,
            })
            .column("a", ColumnOptions::default().width(2))
            .column("b", ColumnOptions::default().color(Color::Blue));
        let lines = table.render(&LayoutEngine::new()).unwrap();
        assert_eq!(lines[0], "\x1b[31ma \x1b[0m\x1b[34mb \x1b[0m");
    }

    #[test]
    fn test_padding_inside_width() {
        let mut table = Table::new(TableOptions {
            width: Some(5),
            ..TableOptions::default()
        });
        table
            .row(RowOptions::default())
            .column("ab", ColumnOptions::default().padding(1));
        let lines = table.render(&LayoutEngine::new()).unwrap();
        assert_eq!(lines[0], " ab  ");
    }

    #[test]
    fn test_padding_too_large() {
        let mut table = Table::new(TableOptions {
            width: Some(2),
            ..TableOptions::default()
        });
        table
            .row(RowOptions::default())
            .column("", ColumnOptions::default().padding(1));
        assert!(table.render(&LayoutEngine::new()).is_err());
    }

    #[test]
    fn test_content_too_wide_for_column() {
        let mut table = Table::new(TableOptions {
            width: Some(3),
            ..TableOptions::default()
        });
        table.add_row_cells(["abcd"]);
        let err = table.render(&LayoutEngine::new()).unwrap_err();
        assert!(err.to_string().contains("too large for width"));
    }

    #[test]
    fn test_huge_padding_is_rejected() {
        let mut table = Table::new(TableOptions {
            width: Some(10),
            ..TableOptions::default()
        });
        table
            .row(RowOptions::default())
            .column("x", ColumnOptions::default().padding(usize::MAX / 2 + 1));
        let err = table.render(&LayoutEngine::new()).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("leaves no room"));
    }

    #[test]
    fn test_underline_and_reverse() {
        let column = Column::new(
            "x",
            ColumnOptions {
                underline: true,
                reversed: true,
                ..ColumnOptions::default()
            },
        );
        assert_eq!(column.style(), Style::new().underline().reverse());
    }
}
