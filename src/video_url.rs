use anyhow::{Result, anyhow};
use regex::Regex;
use once_cell::sync::Lazy;

/// Video URL utilities
///
/// This module resolves a watch-page URL into the bare video identifier
/// used to key cached caption files.
// @const: watch/short/embed URL forms carrying the id in the path or query
static VIDEO_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)").unwrap()
});

// @const: watch URLs where v= is not the first query parameter
static VIDEO_ID_QUERY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"youtube\.com/watch\?.*v=([^&\n?#]+)").unwrap());

/// Check whether an input string looks like a video watch URL rather than
/// a local file path.
pub fn is_video_url(input: &str) -> bool {
    input.contains("youtube.com") || input.contains("youtu.be")
}

/// Extract the video identifier from a watch, short or embed URL.
pub fn extract_video_id(url: &str) -> Result<String> {
    for pattern in [&VIDEO_ID_RE, &VIDEO_ID_QUERY_RE] {
        if let Some(caps) = pattern.captures(url) {
            if let Some(id) = caps.get(1) {
                return Ok(id.as_str().to_string());
            }
        }
    }

    Err(anyhow!("Could not extract video id from URL: {}", url))
}
