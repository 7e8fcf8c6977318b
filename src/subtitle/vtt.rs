// WebVTT parsing
use once_cell::sync::Lazy;
use regex::Regex;

use super::{timecode, SubtitleEntry};
use crate::error::Result;
use crate::format::SubtitleFormat;

static TIMESTAMP_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}:\d{2}:\d{2}\.\d{3}) --> (\d{2}:\d{2}:\d{2}\.\d{3})").unwrap()
});

/// Parse a WebVTT document with a single line-by-line pass.
///
/// A timestamp line opens a new cue window, replacing any previous one. Each
/// following non-blank, non-header text line commits an entry of its own; the
/// window stays open until the next timestamp line, so a multi-line cue comes
/// out as several entries sharing the same timestamps. Callers depend on the
/// per-line split; do not collapse the lines into one entry.
pub fn parse(content: &str) -> Result<Vec<SubtitleEntry>> {
    let mut entries = Vec::new();
    let mut window: Option<(f64, f64)> = None;

    for line in content.split('\n') {
        if let Some(captures) = TIMESTAMP_LINE.captures(line) {
            window = Some((
                timecode::parse(SubtitleFormat::Vtt, &captures[1])?,
                timecode::parse(SubtitleFormat::Vtt, &captures[2])?,
            ));
            continue;
        }
        if line.trim().is_empty() || line.starts_with("WEBVTT") {
            continue;
        }
        if let Some((start, end)) = window {
            entries.push(SubtitleEntry {
                start,
                end,
                text: line.trim().to_string(),
            });
        }
    }

    Ok(entries)
}
