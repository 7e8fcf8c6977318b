use thiserror::Error;

use crate::format::SubtitleFormat;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Unsupported subtitle format: {0}")]
    UnsupportedFormat(String),

    #[error("Malformed {format} timecode: {timecode}")]
    MalformedTimecode {
        format: SubtitleFormat,
        timecode: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
