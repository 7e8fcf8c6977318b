use crate::error::ConvertError;

/// The subtitle formats the converter can read. Output is always SubRip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubtitleFormat {
    #[default]
    Srt,
    Vtt,
    Ass,
    Ssa,
    Sub,
}

impl SubtitleFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            SubtitleFormat::Srt => "srt",
            SubtitleFormat::Vtt => "vtt",
            SubtitleFormat::Ass => "ass",
            SubtitleFormat::Ssa => "ssa",
            SubtitleFormat::Sub => "sub",
        }
    }
}

impl std::fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for SubtitleFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "srt" => Ok(SubtitleFormat::Srt),
            "vtt" => Ok(SubtitleFormat::Vtt),
            "ass" => Ok(SubtitleFormat::Ass),
            "ssa" => Ok(SubtitleFormat::Ssa),
            "sub" => Ok(SubtitleFormat::Sub),
            _ => Err(ConvertError::UnsupportedFormat(s.to_string())),
        }
    }
}
