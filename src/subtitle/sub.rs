// Legacy frame-indexed "sub" dialect parsing
use super::{timecode, SubtitleEntry};
use crate::error::Result;
use crate::format::SubtitleFormat;

/// Parse a legacy `sub` document.
///
/// Cues come in fixed groups of three lines: a time-code line holding
/// `start,end`, a single text line, and a separator line. A group whose
/// time-code line does not split into exactly two fields is dropped, and a
/// trailing partial group is ignored. The format has no multi-line text.
pub fn parse(content: &str) -> Result<Vec<SubtitleEntry>> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut entries = Vec::new();

    let mut i = 0;
    while i + 2 < lines.len() {
        let times: Vec<&str> = lines[i].split(',').collect();
        if let [start, end] = times.as_slice() {
            entries.push(SubtitleEntry {
                start: timecode::parse(SubtitleFormat::Sub, start)?,
                end: timecode::parse(SubtitleFormat::Sub, end)?,
                text: lines[i + 1].trim().to_string(),
            });
        }
        i += 3;
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_cue() {
        let input = "00:00:01,00:00:02\nHello world\n\n";
        let entries = parse(input).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].start, 1.0);
        assert_eq!(entries[0].end, 2.0);
        assert_eq!(entries[0].text, "Hello world");
    }

    #[test]
    fn test_parse_multiple_groups() {
        let input = "00:00:01,00:00:02\nFirst\n\n00:00:03,00:00:04\nSecond\n\n";
        let entries = parse(input).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].text, "Second");
        assert_eq!(entries[1].start, 3.0);
    }

    #[test]
    fn test_parse_drops_group_with_wrong_field_count() {
        let input = "00:00:01\nNo end time\n\n00:00:03,00:00:04\nKept\n\n";
        let entries = parse(input).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "Kept");
    }

    #[test]
    fn test_parse_ignores_trailing_partial_group() {
        let input = "00:00:01,00:00:02\nComplete\n\n00:00:03,00:00:04";
        let entries = parse(input).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "Complete");
    }

    #[test]
    fn test_parse_malformed_timecode_is_fatal() {
        let input = "bogus,00:00:02\nText\n\n";
        assert!(parse(input).is_err());
    }
}
