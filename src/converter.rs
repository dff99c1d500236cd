use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::caption_parser::{self, is_cue_timing};
use crate::caption_renderer;
use crate::errors::ConversionError;

// @module: Conversion orchestrator dispatching raw markup to a serializer

/// Target output format for a conversion
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// Indexed, timestamped transcript blocks
    #[default]
    Transcript,
    /// Deduplicated plain-text reading version
    Reading,
}

impl OutputKind {
    // @returns: File extension the caller maps this kind to
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Transcript => "srt",
            Self::Reading => "txt",
        }
    }

    // @returns: Capitalized kind name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Transcript => "Transcript",
            Self::Reading => "Reading",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transcript => write!(f, "transcript"),
            Self::Reading => write!(f, "reading"),
        }
    }
}

impl std::str::FromStr for OutputKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "transcript" | "srt" => Ok(Self::Transcript),
            "reading" | "txt" => Ok(Self::Reading),
            _ => Err(anyhow!("Invalid output kind: {}", s)),
        }
    }
}

/// Convert raw caption markup into the requested output format.
///
/// Each call is a pure function of its arguments: the parser and the
/// serializers own all of their intermediate state, so the function is safe
/// to invoke concurrently from any number of threads. A panic anywhere in
/// the string processing is caught here and reported as
/// `ConversionError::Failed` instead of unwinding into the caller.
pub fn convert(raw: &str, kind: OutputKind) -> Result<String, ConversionError> {
    let result = catch_unwind(AssertUnwindSafe(|| match kind {
        OutputKind::Transcript => convert_transcript(raw),
        OutputKind::Reading => convert_reading(raw),
    }));

    match result {
        Ok(rendered) => rendered,
        Err(_) => Err(ConversionError::Failed(
            "internal fault while processing caption markup".to_string(),
        )),
    }
}

/// Check that the input carries at least one recognizable cue timing line.
fn has_cue_timing(raw: &str) -> bool {
    raw.lines().any(|line| is_cue_timing(line.trim()))
}

fn convert_transcript(raw: &str) -> Result<String, ConversionError> {
    if raw.trim().is_empty() || !has_cue_timing(raw) {
        return Err(ConversionError::EmptyInput);
    }

    let sequence = caption_parser::parse(raw);
    if sequence.is_empty() {
        return Err(ConversionError::NoCuesProduced);
    }

    Ok(caption_renderer::render_transcript(&sequence))
}

fn convert_reading(raw: &str) -> Result<String, ConversionError> {
    if raw.trim().is_empty() || !has_cue_timing(raw) {
        return Err(ConversionError::EmptyInput);
    }

    let text = caption_renderer::render_reading(raw);
    if text.is_empty() {
        return Err(ConversionError::NoCuesProduced);
    }

    Ok(text)
}
