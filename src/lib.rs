/*!
 * # subtext - caption track converter
 *
 * A Rust library for converting timed-caption markup into downloadable
 * subtitle formats.
 *
 * ## Features
 *
 * - Parse timed-caption markup (WebVTT-style) into deduplicated cue records
 * - Render cues as an indexed, timestamped transcript (SRT-style)
 * - Render a plain-text reading version, deduplicated at line and
 *   sentence granularity
 * - Pluggable caption sources keyed by video reference and language code
 * - Cache maintenance for converted files (retention, size trimming)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `caption_parser`: Cue model and timed-caption markup parsing
 * - `caption_renderer`: Transcript and reading-text serializers
 * - `converter`: Conversion orchestrator and output kind selection
 * - `caption_source`: Caption source collaborators (local files, mocks)
 * - `video_url`: Video watch-URL to id resolution
 * - `file_utils`: File system operations and cache maintenance
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod caption_parser;
pub mod caption_renderer;
pub mod caption_source;
pub mod converter;
pub mod errors;
pub mod file_utils;
pub mod video_url;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use caption_parser::{Cue, CueSequence};
pub use caption_source::{CaptionSource, FileCaptionSource, VideoRef};
pub use converter::{OutputKind, convert};
pub use errors::{AppError, ConversionError, SourceError};
