//! Output rendering for training summaries
//!
//! Summaries are rendered either as the fixed-template text line or as a
//! single-line JSON object for downstream tooling.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::InfoMessage;

pub mod json;
pub mod text;

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Render one summary in the requested format, without a trailing newline
pub fn render(info: &InfoMessage, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(info)),
        OutputFormat::Json => json::render(info),
    }
}
