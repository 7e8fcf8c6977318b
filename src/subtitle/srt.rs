// SubRip parsing and serialization
use once_cell::sync::Lazy;
use regex::Regex;

use super::{timecode, SubtitleEntry};
use crate::error::Result;
use crate::format::SubtitleFormat;

static TIMESTAMP_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}:\d{2}:\d{2},\d{3}) --> (\d{2}:\d{2}:\d{2},\d{3})").unwrap()
});

/// Parse a SubRip document.
///
/// The document splits on blank-line boundaries; a block needs at least three
/// lines and a matching timestamp line in second position, otherwise it is
/// dropped. Everything from the third line onward is the cue text.
pub fn parse(content: &str) -> Result<Vec<SubtitleEntry>> {
    let mut entries = Vec::new();

    for block in content.split("\n\n") {
        let lines: Vec<&str> = block.split('\n').collect();
        if lines.len() < 3 {
            continue;
        }
        let captures = match TIMESTAMP_LINE.captures(lines[1]) {
            Some(captures) => captures,
            None => continue,
        };

        entries.push(SubtitleEntry {
            start: timecode::parse(SubtitleFormat::Srt, &captures[1])?,
            end: timecode::parse(SubtitleFormat::Srt, &captures[2])?,
            text: lines[2..].join("\n").trim().to_string(),
        });
    }

    Ok(entries)
}

/// Render canonical entries as a SubRip document.
///
/// Cue indices are 1-based positions in the given order; entries are never
/// reordered by time.
pub fn serialize(entries: &[SubtitleEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{}\n{} --> {}\n{}\n",
                i + 1,
                timecode::format_srt(entry.start),
                timecode::format_srt(entry.end),
                entry.text.trim()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
