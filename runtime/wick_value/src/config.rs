//! Rendering and segmentation settings shared by coercion and chunking.

use std::fmt;
use std::str::FromStr;

use wick_chunk::Delimiters;
use wick_numeric::NumberFormat;

use crate::error::{access_failed, ValueError};
use crate::value::Value;

/// strftime pattern used when none is configured.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Separator written between lines when text is reassembled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LineEnding {
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    /// The host convention: CRLF on Windows, LF elsewhere.
    pub fn platform() -> Self {
        if cfg!(windows) {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        LineEnding::platform()
    }
}

impl FromStr for LineEnding {
    type Err = ValueError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "lf" => Ok(LineEnding::Lf),
            "crlf" => Ok(LineEnding::CrLf),
            "cr" => Ok(LineEnding::Cr),
            _ => Err(access_failed(format!("unknown line ending '{name}'"))),
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineEnding::Lf => "lf",
            LineEnding::CrLf => "crlf",
            LineEnding::Cr => "cr",
        })
    }
}

/// Settings consulted whenever a value is rendered, parsed or chunked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueConfig {
    pub number_format: NumberFormat,
    pub delimiters: Delimiters,
    pub line_ending: LineEnding,
    pub date_format: String,
}

impl ValueConfig {
    #[must_use]
    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }

    #[must_use]
    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    #[must_use]
    pub fn with_item_delimiter(mut self, item: char) -> Self {
        self.delimiters = self.delimiters.with_item(item);
        self
    }

    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }
}

impl Default for ValueConfig {
    fn default() -> Self {
        ValueConfig {
            number_format: NumberFormat::default(),
            delimiters: Delimiters::default(),
            line_ending: LineEnding::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Context for reading values: settings plus variable lookup.
///
/// Implemented by `ValueConfig` (no variables) and `VariableStore`.
pub trait Resolver {
    fn config(&self) -> &ValueConfig;

    /// Current value of a declared variable.
    fn variable(&self, name: &str) -> Option<Value>;
}

impl Resolver for ValueConfig {
    fn config(&self) -> &ValueConfig {
        self
    }

    fn variable(&self, _name: &str) -> Option<Value> {
        None
    }
}
