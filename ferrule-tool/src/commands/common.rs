//! Common types and utilities for ferrule commands.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ============================================================================
// Output Format
// ============================================================================

/// Supported report formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per identifier
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Render `rows` as JSON, or as text with `line` applied to each row.
pub fn render<T, F>(rows: &[T], format: OutputFormat, line: F) -> Result<String>
where
    T: Serialize,
    F: Fn(&T) -> String,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Text => Ok(rows.iter().map(line).collect::<Vec<_>>().join("\n")),
    }
}
