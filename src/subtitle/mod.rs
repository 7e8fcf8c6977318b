pub mod ass;
pub mod srt;
pub mod sub;
pub mod timecode;
pub mod vtt;

use crate::error::Result;
use crate::format::SubtitleFormat;

/// A single cue in the canonical, format-independent representation.
///
/// Times are seconds. `start <= end` is expected but not enforced; a source
/// document with reversed or out-of-order timings parses as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleEntry {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Parse a raw subtitle document into canonical entries in document order.
///
/// Cues failing the format's per-cue shape checks (unmatched timestamp line,
/// short block, missing fields) are dropped silently; a timecode that cannot
/// be decomposed aborts the whole parse with `MalformedTimecode`.
pub fn parse(format: SubtitleFormat, content: &str) -> Result<Vec<SubtitleEntry>> {
    match format {
        SubtitleFormat::Srt => srt::parse(content),
        SubtitleFormat::Vtt => vtt::parse(content),
        SubtitleFormat::Ass | SubtitleFormat::Ssa => ass::parse(format, content),
        SubtitleFormat::Sub => sub::parse(content),
    }
}
