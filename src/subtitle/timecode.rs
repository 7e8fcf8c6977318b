use crate::error::{ConvertError, Result};
use crate::format::SubtitleFormat;

/// Parse a timecode string in the given source format into seconds.
pub fn parse(format: SubtitleFormat, timecode: &str) -> Result<f64> {
    match format {
        SubtitleFormat::Srt => fractional(format, timecode, ',', 1000.0),
        SubtitleFormat::Vtt => fractional(format, timecode, '.', 1000.0),
        // ASS/SSA fractions are centiseconds, not milliseconds.
        SubtitleFormat::Ass | SubtitleFormat::Ssa => fractional(format, timecode, '.', 100.0),
        SubtitleFormat::Sub => plain(format, timecode),
    }
}

/// `H:MM:SS` with a fractional field after `separator`, scaled by `divisor`.
fn fractional(
    format: SubtitleFormat,
    timecode: &str,
    separator: char,
    divisor: f64,
) -> Result<f64> {
    let fields: Vec<&str> = timecode.split(':').collect();
    let (hours, minutes, rest) = match fields.as_slice() {
        [h, m, rest] => (h, m, rest),
        _ => return Err(malformed(format, timecode)),
    };
    let (seconds, fraction) = match rest.split_once(separator) {
        Some(split) => split,
        None => return Err(malformed(format, timecode)),
    };

    Ok(number(format, timecode, hours)? * 3600.0
        + number(format, timecode, minutes)? * 60.0
        + number(format, timecode, seconds)?
        + number(format, timecode, fraction)? / divisor)
}

/// `HH:MM:SS`, no fractional field.
fn plain(format: SubtitleFormat, timecode: &str) -> Result<f64> {
    let fields: Vec<&str> = timecode.split(':').collect();
    let (hours, minutes, seconds) = match fields.as_slice() {
        [h, m, s] => (h, m, s),
        _ => return Err(malformed(format, timecode)),
    };

    Ok(number(format, timecode, hours)? * 3600.0
        + number(format, timecode, minutes)? * 60.0
        + number(format, timecode, seconds)?)
}

fn number(format: SubtitleFormat, timecode: &str, field: &str) -> Result<f64> {
    field
        .trim()
        .parse()
        .map_err(|_| malformed(format, timecode))
}

fn malformed(format: SubtitleFormat, timecode: &str) -> ConvertError {
    ConvertError::MalformedTimecode {
        format,
        timecode: timecode.to_string(),
    }
}

/// Render seconds as a SubRip timestamp (`HH:MM:SS,mmm`).
///
/// Hours are not wrapped at 24. The value is rounded to whole milliseconds
/// before decomposition so millisecond-precision times survive a
/// serialize/parse round trip.
pub fn format_srt(seconds: f64) -> String {
    let total_ms = (seconds * 1000.0).round().max(0.0) as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;
    format!("{hours:02}:{minutes:02}:{secs:02},{millis:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_srt_timecode() {
        assert_eq!(parse(SubtitleFormat::Srt, "00:00:01,500").unwrap(), 1.5);
        let t = parse(SubtitleFormat::Srt, "01:01:01,123").unwrap();
        assert!((t - 3661.123).abs() < 1e-9);
    }

    #[test]
    fn test_parse_vtt_timecode() {
        assert_eq!(parse(SubtitleFormat::Vtt, "00:00:01.500").unwrap(), 1.5);
    }

    #[test]
    fn test_parse_ass_timecode_is_centiseconds() {
        assert_eq!(parse(SubtitleFormat::Ass, "0:00:01.50").unwrap(), 1.5);
        assert_eq!(parse(SubtitleFormat::Ssa, "0:00:00.05").unwrap(), 0.05);
    }

    #[test]
    fn test_parse_sub_timecode() {
        assert_eq!(parse(SubtitleFormat::Sub, "00:01:05").unwrap(), 65.0);
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        let err = parse(SubtitleFormat::Srt, "00:01,500").unwrap_err();
        assert!(matches!(
            err,
            ConvertError::MalformedTimecode { format: SubtitleFormat::Srt, timecode }
                if timecode == "00:01,500"
        ));

        assert!(parse(SubtitleFormat::Sub, "00:01").is_err());
        assert!(parse(SubtitleFormat::Ass, "0:00:01").is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric_fields() {
        assert!(parse(SubtitleFormat::Srt, "0a:00:01,000").is_err());
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        assert_eq!(parse(SubtitleFormat::Ass, " 0:00:01.50").unwrap(), 1.5);
        assert_eq!(parse(SubtitleFormat::Sub, "00:00:02\r").unwrap(), 2.0);
    }

    #[test]
    fn test_format_srt() {
        assert_eq!(format_srt(1.5), "00:00:01,500");
        assert_eq!(format_srt(3661.123), "01:01:01,123");
        assert_eq!(format_srt(0.0), "00:00:00,000");
    }

    #[test]
    fn test_format_srt_hours_not_wrapped() {
        assert_eq!(format_srt(100.0 * 3600.0), "100:00:00,000");
    }

    #[test]
    fn test_round_trip_at_millisecond_precision() {
        for &t in &[0.0, 0.001, 1.001, 59.999, 3599.5, 7323.042] {
            let parsed = parse(SubtitleFormat::Srt, &format_srt(t)).unwrap();
            assert!((parsed - t).abs() < 1e-9, "round trip failed for {t}");
        }
    }
}
