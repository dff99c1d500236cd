/*!
 * Caption source collaborators.
 *
 * The conversion engine never performs I/O itself: raw caption markup is
 * supplied by a `CaptionSource` implementation keyed by a video reference
 * and a language code. The crate ships a local-file source; fetching from a
 * remote service is deliberately left to external implementations.
 */

use std::fmt::Debug;
use std::fs;
use std::path::PathBuf;

use crate::errors::SourceError;
use crate::video_url;

/// Reference to the video whose captions are requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoRef {
    /// Raw caption markup already present on the local filesystem
    File(PathBuf),
    /// A video identified by its watch-page id
    Remote {
        /// Bare video identifier extracted from a watch URL
        video_id: String,
    },
}

impl VideoRef {
    /// Resolve user input into a video reference: watch URLs become
    /// `Remote` refs keyed by the extracted id, anything else is treated
    /// as a local file path.
    pub fn parse(input: &str) -> Result<Self, SourceError> {
        if video_url::is_video_url(input) {
            let video_id = video_url::extract_video_id(input)
                .map_err(|e| SourceError::Unsupported(e.to_string()))?;
            Ok(VideoRef::Remote { video_id })
        } else {
            Ok(VideoRef::File(PathBuf::from(input)))
        }
    }

    /// Stem used when naming converted files for this reference.
    pub fn output_stem(&self, language: &str) -> String {
        match self {
            VideoRef::File(path) => {
                let stem = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_else(|| "captions".to_string());
                format!("{}.{}", stem, language)
            }
            VideoRef::Remote { video_id } => format!("{}_{}", video_id, language),
        }
    }
}

/// Common trait for caption source collaborators
///
/// Implementations deliver the raw timed-caption markup for a video
/// reference and language code. The engine only ever sees the returned
/// string; storage and transport stay behind this seam.
pub trait CaptionSource: Debug {
    /// Fetch raw caption markup for the given reference and language
    fn fetch_raw_captions(&self, video: &VideoRef, language: &str) -> Result<String, SourceError>;
}

/// Caption source backed by local caption files
#[derive(Debug, Default)]
pub struct FileCaptionSource;

impl FileCaptionSource {
    pub fn new() -> Self {
        FileCaptionSource
    }
}

impl CaptionSource for FileCaptionSource {
    fn fetch_raw_captions(&self, video: &VideoRef, _language: &str) -> Result<String, SourceError> {
        match video {
            VideoRef::File(path) => {
                if !path.exists() {
                    return Err(SourceError::NotFound(path.display().to_string()));
                }
                fs::read_to_string(path).map_err(|e| SourceError::Io(e.to_string()))
            }
            VideoRef::Remote { video_id } => Err(SourceError::Unsupported(format!(
                "remote caption fetching is not available here (video {})",
                video_id
            ))),
        }
    }
}
