use std::collections::HashSet;
use regex::Regex;
use once_cell::sync::Lazy;

use crate::caption_parser::{CueSequence, is_cue_timing, is_header_marker, strip_markup};

// @module: Serializers for parsed caption content

// @const: Runs of sentence-ending punctuation followed by whitespace
static SENTENCE_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+\s+").unwrap());

/// Render a cue sequence as an indexed, timestamped transcript.
///
/// Each cue emits four lines: its 1-based index, its timespan, its text and
/// a blank separator. The last cue keeps its trailing blank line, so a
/// non-empty result ends with a single newline. An empty sequence renders
/// as the empty string.
pub fn render_transcript(sequence: &CueSequence) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(sequence.len() * 4);

    for (index, cue) in sequence.iter().enumerate() {
        lines.push((index + 1).to_string());
        lines.push(cue.timespan.clone());
        lines.push(cue.text.clone());
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render raw caption markup as deduplicated reading text.
///
/// Cue boundaries are ignored here: captions routinely break sentences
/// across timespans, so the text is re-derived straight from the raw lines.
/// Dedup happens twice — once at line grain against every line kept so far
/// (rolling auto-captions repeat raw lines), and once at sentence grain
/// after the flat text is re-split on sentence-ending punctuation.
pub fn render_reading(raw: &str) -> String {
    let mut kept_lines: Vec<String> = Vec::new();
    let mut seen_lines: HashSet<String> = HashSet::new();

    for line in raw.lines() {
        let line = line.trim();

        // Same skip rules as the parser: headers, timing lines, blanks
        if line.is_empty() || is_header_marker(line) || is_cue_timing(line) {
            continue;
        }

        let clean_line = strip_markup(line);
        if clean_line.is_empty() || seen_lines.contains(&clean_line) {
            continue;
        }

        seen_lines.insert(clean_line.clone());
        kept_lines.push(clean_line);
    }

    let flat_text = kept_lines.join(" ");

    let mut sentences: Vec<String> = Vec::new();
    let mut seen_sentences: HashSet<String> = HashSet::new();

    for segment in SENTENCE_BREAK_RE.split(&flat_text) {
        let segment = segment.trim();
        if segment.is_empty() || seen_sentences.contains(segment) {
            continue;
        }

        seen_sentences.insert(segment.to_string());
        sentences.push(segment.to_string());
    }

    sentences.join("\n")
}
