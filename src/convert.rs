use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::format::SubtitleFormat;
use crate::subtitle::{self, srt};

/// Convert a raw subtitle document to SubRip.
///
/// Returns the serialized text. When `output` is given, the text is also
/// written there, replacing any existing content; a failed write aborts the
/// call and the file should be treated as unreliable.
pub fn convert(format: SubtitleFormat, content: &str, output: Option<&Path>) -> Result<String> {
    let entries = subtitle::parse(format, content)?;
    debug!("Parsed {} cue(s) from {} input", entries.len(), format);

    let serialized = srt::serialize(&entries);

    if let Some(path) = output {
        fs::write(path, &serialized)?;
        info!("Wrote {} cue(s) to {}", entries.len(), path.display());
    }

    Ok(serialized)
}

/// Convert with a string format tag (`srt`, `vtt`, `ass`, `ssa`, `sub`).
///
/// An unrecognized tag fails with `UnsupportedFormat` before any parsing or
/// writing happens.
pub fn convert_tag(tag: &str, content: &str, output: Option<&Path>) -> Result<String> {
    convert(tag.parse()?, content, output)
}
