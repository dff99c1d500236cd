use std::collections::HashSet;
use std::fmt;
use regex::Regex;
use once_cell::sync::Lazy;

// @module: Timed-caption markup parsing

// @const: Inline positioning/styling annotations found on cue timing lines
static ALIGN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" align:\w+").unwrap());
static POSITION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" position:\d+%").unwrap());
static SIZE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" size:\d+%").unwrap());
static LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" line:[^\s]+").unwrap());

// @const: HTML-like markup wrapped around cue text
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Header and metadata markers that never carry cue content.
const HEADER_MARKERS: [&str; 4] = ["WEBVTT", "Kind:", "Language:", "NOTE"];

// @struct: Single caption cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    // @field: Normalized timecode span (HH:MM:SS,mmm --> HH:MM:SS,mmm)
    pub timespan: String,

    // @field: Markup-stripped, single-line display text
    pub text: String,
}

impl Cue {
    pub fn new(timespan: String, text: String) -> Self {
        Cue { timespan, text }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.timespan)?;
        writeln!(f, "{}", self.text)
    }
}

/// Ordered collection of cues with no two entries sharing the same text.
///
/// Insertion order matches source order. The duplicate check runs against
/// every previously kept cue, not just the previous one, so rolling
/// auto-caption repeats are suppressed wherever they reappear.
#[derive(Debug, Default)]
pub struct CueSequence {
    cues: Vec<Cue>,
    seen_text: HashSet<String>,
}

impl CueSequence {
    pub fn new() -> Self {
        CueSequence {
            cues: Vec::new(),
            seen_text: HashSet::new(),
        }
    }

    /// Append a cue unless its text is empty or already present anywhere
    /// in the sequence. Returns whether the cue was kept.
    pub fn push_unique(&mut self, cue: Cue) -> bool {
        if cue.text.is_empty() || self.seen_text.contains(&cue.text) {
            return false;
        }
        self.seen_text.insert(cue.text.clone());
        self.cues.push(cue);
        true
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cue> {
        self.cues.iter()
    }
}

impl fmt::Display for CueSequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Cue Sequence")?;
        writeln!(f, "Cues: {}", self.cues.len())?;
        Ok(())
    }
}

/// Check whether a trimmed line is a header/metadata marker line.
pub fn is_header_marker(line: &str) -> bool {
    HEADER_MARKERS.iter().any(|marker| line.starts_with(marker))
}

/// Check whether a trimmed line encodes a cue timing span.
///
/// A timing line contains the `-->` arrow and at least one `:` timecode
/// separator. Ordinary text can contain either alone, never both.
pub fn is_cue_timing(line: &str) -> bool {
    line.contains("-->") && line.contains(':')
}

/// Normalize a cue timing line into the transcript timecode syntax.
///
/// Strips the known positioning/styling annotations, trims, then converts
/// every `.` to `,` as the fractional-second separator. The substitution is
/// a blind character replacement over the whole line; it is safe because
/// the annotations that could carry a `.` are stripped first.
pub fn normalize_timespan(line: &str) -> String {
    let cleaned = ALIGN_RE.replace_all(line, "");
    let cleaned = POSITION_RE.replace_all(&cleaned, "");
    let cleaned = SIZE_RE.replace_all(&cleaned, "");
    let cleaned = LINE_RE.replace_all(&cleaned, "");
    cleaned.trim().replace('.', ",")
}

/// Strip HTML-like tags from a caption text line and trim the result.
pub fn strip_markup(line: &str) -> String {
    TAG_RE.replace_all(line, "").trim().to_string()
}

/// Parse raw timed-caption markup into a deduplicated cue sequence.
///
/// Walks the input with a cursor: header/metadata lines and blank lines are
/// skipped, a timing line opens a cue, and the following non-empty lines are
/// collected as that cue's text until the next blank line or timing line.
/// Collected lines are tag-stripped and joined with single spaces; a cue
/// whose text matches any previously kept cue is discarded.
pub fn parse(raw: &str) -> CueSequence {
    let lines: Vec<&str> = raw.lines().collect();
    let mut sequence = CueSequence::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();

        // Skip header and empty lines
        if line.is_empty() || is_header_marker(line) {
            i += 1;
            continue;
        }

        if !is_cue_timing(line) {
            // Plain text outside any recognized cue
            i += 1;
            continue;
        }

        let timespan = normalize_timespan(line);
        i += 1;

        // Collect text lines until an empty line or the next timing line,
        // leaving the boundary line for the outer loop
        let mut text_lines: Vec<String> = Vec::new();
        while i < lines.len() {
            let text_line = lines[i].trim();
            if text_line.is_empty() || is_cue_timing(text_line) {
                break;
            }

            let clean_text = strip_markup(text_line);
            if !clean_text.is_empty() {
                text_lines.push(clean_text);
            }
            i += 1;
        }

        // Only keep the cue if it has text and the normalized header really
        // was a timing span
        if !text_lines.is_empty() && timespan.contains("-->") {
            sequence.push_unique(Cue::new(timespan, text_lines.join(" ")));
        }
    }

    sequence
}
