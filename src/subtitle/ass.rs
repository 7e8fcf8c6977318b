// ASS/SSA parsing
use once_cell::sync::Lazy;
use regex::Regex;

use super::{timecode, SubtitleEntry};
use crate::error::Result;
use crate::format::SubtitleFormat;

// Inline style overrides like {\an8} or {\pos(10,20)}
static STYLE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^}]*\}").unwrap());

/// Parse an ASS or SSA document. Both variants share this parser; `format`
/// only affects error reporting.
///
/// Only `Dialogue:` lines are cues. A line is dropped unless it comma-splits
/// into at least ten fields; fields 1 and 2 are the start and end timecodes
/// and everything from field 9 onward is rejoined as the text, since dialogue
/// may itself contain commas. Style override tags are stripped from the text.
pub fn parse(format: SubtitleFormat, content: &str) -> Result<Vec<SubtitleEntry>> {
    let mut entries = Vec::new();

    for line in content.split('\n') {
        if !line.starts_with("Dialogue:") {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 10 {
            continue;
        }

        let start = timecode::parse(format, fields[1])?;
        let end = timecode::parse(format, fields[2])?;
        let text = fields[9..].join(",");

        entries.push(SubtitleEntry {
            start,
            end,
            text: STYLE_TAG.replace_all(&text, "").trim().to_string(),
        });
    }

    Ok(entries)
}
