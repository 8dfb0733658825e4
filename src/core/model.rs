// LineSift - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies. These types are the shared vocabulary across
// all layers.

use crate::util::error::{Result, SiftError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// One newline-delimited unit of text with its terminator stripped.
pub type Line = String;

// =============================================================================
// Text encoding
// =============================================================================

/// How input bytes are decoded into lines. Output is always UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextEncoding {
    /// Strict UTF-8: invalid byte sequences are an I/O error.
    #[default]
    #[serde(rename = "utf-8")]
    Utf8,

    /// UTF-8 with invalid sequences replaced by U+FFFD.
    #[serde(rename = "utf-8-lossy")]
    Utf8Lossy,
}

impl TextEncoding {
    /// Parse a config/CLI label (case-insensitive, `utf8` accepted for `utf-8`).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Some(Self::Utf8),
            "utf-8-lossy" | "utf8-lossy" => Some(Self::Utf8Lossy),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf8Lossy => "utf-8-lossy",
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Run results
// =============================================================================

/// Outcome of one filter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    /// Number of input lines that contained the keyword.
    pub matched_line_count: usize,

    /// Wall-clock duration of the whole call.
    pub elapsed: Duration,
}

/// Serialisable summary of a run, printed by the CLI with `--json`.
///
/// Paths are stored in display form so non-UTF-8 paths still serialise.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input: String,
    pub output: String,
    pub keyword: String,
    pub encoding: TextEncoding,
    pub matched_line_count: usize,
    pub elapsed_ms: f64,
    pub started_at: DateTime<Utc>,
}

impl RunReport {
    pub fn new(
        input: &Path,
        output: &Path,
        keyword: &str,
        encoding: TextEncoding,
        result: RunResult,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            input: input.display().to_string(),
            output: output.display().to_string(),
            keyword: keyword.to_string(),
            encoding,
            matched_line_count: result.matched_line_count,
            elapsed_ms: result.elapsed.as_secs_f64() * 1_000.0,
            started_at,
        }
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(SiftError::Report)
    }
}
