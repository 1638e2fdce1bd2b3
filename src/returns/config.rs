//! CSV output settings.

use serde::{Deserialize, Serialize};

/// Record terminator for generated CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineTerminator {
    /// `\r\n`, the conventional CSV terminator.
    Crlf,
    /// `\n`.
    Lf,
}

impl From<LineTerminator> for csv::Terminator {
    fn from(t: LineTerminator) -> Self {
        match t {
            LineTerminator::Crlf => csv::Terminator::CRLF,
            LineTerminator::Lf => csv::Terminator::Any(b'\n'),
        }
    }
}

/// Configuration for return CSV generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Record terminator.
    pub terminator: LineTerminator,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            terminator: LineTerminator::Crlf,
        }
    }
}

/// Builder for [`ReportConfig`].
///
/// # Example
///
/// ```
/// use gstbook::returns::{LineTerminator, ReportConfigBuilder};
///
/// let config = ReportConfigBuilder::new()
///     .terminator(LineTerminator::Lf)
///     .build();
/// assert_eq!(config.delimiter, b',');
/// ```
#[derive(Debug, Default)]
pub struct ReportConfigBuilder {
    config: ReportConfig,
}

impl ReportConfigBuilder {
    /// Start from the defaults: comma delimiter, CRLF terminator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Set the record terminator.
    pub fn terminator(mut self, terminator: LineTerminator) -> Self {
        self.config.terminator = terminator;
        self
    }

    pub fn build(self) -> ReportConfig {
        self.config
    }
}
