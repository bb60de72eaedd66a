#![forbid(unsafe_code)]

//! Render options and their environment overrides.
//!
//! # Environment variables
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `OCDIFF_COLUMNS` | total width (falls back to `COLUMNS`) |
//! | `OCDIFF_TABSIZE` | tab stop distance |
//! | `OCDIFF_CONTEXT` | context lines, `all` or `-1` for the whole file |
//! | `OCDIFF_LINE_NUMBERS` | `1/0`, `true/false`, `on/off`, `yes/no` |
//! | `OCDIFF_COLUMN_LIMIT` | HTML width limit, `none` to disable |
//! | `NO_COLOR` | any non-empty value disables color |
//!
//! Values that do not parse are ignored.

use ocdiff_render::HtmlLayout;
use std::fmt;

const ENV_COLUMNS: &str = "OCDIFF_COLUMNS";
const ENV_TERM_COLUMNS: &str = "COLUMNS";
const ENV_TABSIZE: &str = "OCDIFF_TABSIZE";
const ENV_CONTEXT: &str = "OCDIFF_CONTEXT";
const ENV_LINE_NUMBERS: &str = "OCDIFF_LINE_NUMBERS";
const ENV_COLUMN_LIMIT: &str = "OCDIFF_COLUMN_LIMIT";
const ENV_NO_COLOR: &str = "NO_COLOR";

/// Columns taken from each half by the line-number gutter and separators.
const GUTTER_RESERVE: usize = 10;
/// Columns taken from each half without line numbers.
const PLAIN_RESERVE: usize = 2;

/// Invalid render options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// `columns` is zero.
    ZeroColumns,
    /// `columns` leaves no room for text.
    ColumnsTooNarrow { columns: usize, minimum: usize },
    /// `column_limit` leaves no room for text.
    ColumnLimitTooNarrow { limit: usize, minimum: usize },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColumns => write!(f, "columns must be positive"),
            Self::ColumnsTooNarrow { columns, minimum } => {
                write!(f, "{columns} columns is too narrow, need at least {minimum}")
            }
            Self::ColumnLimitTooNarrow { limit, minimum } => {
                write!(f, "column limit {limit} is too narrow, need at least {minimum}")
            }
        }
    }
}

impl std::error::Error for OptionsError {}

fn reject(err: OptionsError) -> OptionsError {
    tracing::debug!(error = %err, "rejected options");
    err
}

/// Options for one render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    /// Total output width of the terminal table.
    pub columns: usize,
    /// Tab stop distance used by [`DiffOptions::split_lines`].
    pub tabsize: usize,
    /// Unchanged lines kept around each change; `None` keeps the whole file.
    pub context_lines: Option<usize>,
    /// Draw the line-number gutter.
    pub line_numbers: bool,
    /// Emit ANSI colors.
    pub color: bool,
    /// Total width limit of the HTML table; `None` never wraps.
    pub column_limit: Option<usize>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            columns: 80,
            tabsize: 4,
            context_lines: Some(5),
            line_numbers: true,
            color: true,
            column_limit: None,
        }
    }
}

impl DiffOptions {
    /// Default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total width.
    #[must_use]
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Set the tab size.
    #[must_use]
    pub fn tabsize(mut self, tabsize: usize) -> Self {
        self.tabsize = tabsize;
        self
    }

    /// Set the context size (`None` = whole file).
    #[must_use]
    pub fn context_lines(mut self, context_lines: Option<usize>) -> Self {
        self.context_lines = context_lines;
        self
    }

    /// Set whether line numbers are drawn.
    #[must_use]
    pub fn line_numbers(mut self, line_numbers: bool) -> Self {
        self.line_numbers = line_numbers;
        self
    }

    /// Set whether colors are emitted.
    #[must_use]
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Set the HTML width limit.
    #[must_use]
    pub fn column_limit(mut self, column_limit: Option<usize>) -> Self {
        self.column_limit = column_limit;
        self
    }

    /// Defaults overridden from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Defaults overridden through a custom environment lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();
        if let Some(columns) = env_usize(&get_env, ENV_COLUMNS)
            .or_else(|| env_usize(&get_env, ENV_TERM_COLUMNS))
        {
            options.columns = columns;
        }
        if let Some(tabsize) = env_usize(&get_env, ENV_TABSIZE) {
            options.tabsize = tabsize;
        }
        if let Some(context) = get_env(ENV_CONTEXT).and_then(|v| parse_context(&v)) {
            options.context_lines = context;
        }
        if let Some(line_numbers) = get_env(ENV_LINE_NUMBERS).and_then(|v| parse_bool(&v)) {
            options.line_numbers = line_numbers;
        }
        if let Some(limit) = get_env(ENV_COLUMN_LIMIT).and_then(|v| parse_limit(&v)) {
            options.column_limit = limit;
        }
        if get_env(ENV_NO_COLOR).is_some_and(|v| !v.is_empty()) {
            options.color = false;
        }
        options
    }

    /// Expand the tabs of one line to this option's tab stops.
    #[must_use]
    pub fn expand_tabs(&self, line: &str) -> String {
        ocdiff_text::expand_tabs(line, self.tabsize)
    }

    /// Split `text` into lines with tabs expanded to this option's tab stops,
    /// ready to be marked up and paired.
    #[must_use]
    pub fn split_lines(&self, text: &str) -> Vec<String> {
        ocdiff_text::split_lines(text, self.tabsize)
    }

    /// Maximum text width of one side of the terminal table.
    ///
    /// # Errors
    /// Returns [`OptionsError`] if `columns` leaves no room for text.
    pub fn wrap_column(&self) -> Result<usize, OptionsError> {
        if self.columns == 0 {
            return Err(reject(OptionsError::ZeroColumns));
        }
        let reserve = if self.line_numbers {
            GUTTER_RESERVE
        } else {
            PLAIN_RESERVE
        };
        (self.columns / 2)
            .checked_sub(reserve)
            .filter(|&width| width > 0)
            .ok_or_else(|| {
                reject(OptionsError::ColumnsTooNarrow {
                    columns: self.columns,
                    minimum: 2 * (reserve + 1),
                })
            })
    }

    /// Wrap width of the HTML table for line numbers of `layout`'s size.
    ///
    /// # Errors
    /// Returns [`OptionsError::ColumnLimitTooNarrow`] if the limit leaves no
    /// room for text.
    pub fn html_wrap_width(&self, layout: &HtmlLayout) -> Result<Option<usize>, OptionsError> {
        let Some(limit) = self.column_limit else {
            return Ok(None);
        };
        layout.wrap_width(limit).map(Some).ok_or_else(|| {
            reject(OptionsError::ColumnLimitTooNarrow {
                limit,
                minimum: 2 * (layout.gutter_width() + 1),
            })
        })
    }

    /// Check the options used by the terminal renderer, and the column
    /// limit against the narrowest possible gutter.
    ///
    /// # Errors
    /// Returns the first [`OptionsError`] found.
    pub fn validate(&self) -> Result<(), OptionsError> {
        self.wrap_column()?;
        self.html_wrap_width(&HtmlLayout { lineno_width: 1 })?;
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_context(value: &str) -> Option<Option<usize>> {
    match value.trim().to_ascii_lowercase().as_str() {
        "all" | "-1" => Some(None),
        other => other.parse().ok().map(Some),
    }
}

fn parse_limit(value: &str) -> Option<Option<usize>> {
    match value.trim().to_ascii_lowercase().as_str() {
        "none" | "off" => Some(None),
        other => other.parse().ok().map(Some),
    }
}

fn env_usize<F>(get_env: &F, key: &str) -> Option<usize>
where
    F: Fn(&str) -> Option<String>,
{
    get_env(key).and_then(|value| value.trim().parse().ok())
}
