pub mod convert;
pub mod error;
pub mod format;
pub mod subtitle;

pub use convert::{convert, convert_tag};
pub use error::{ConvertError, Result};
pub use format::SubtitleFormat;
pub use subtitle::SubtitleEntry;
