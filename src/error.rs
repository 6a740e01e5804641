//! Crate-level error types.

use std::fmt;

/// Errors produced by the handcam crate.
///
/// Only the file-facing surfaces (option presets, frame recordings) can
/// fail. Per-frame updates never return errors.
#[derive(Debug)]
pub enum HandcamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A sensor frame could not be decoded.
    FrameParse {
        /// 1-based line number within the recording (0 for a single frame).
        line: usize,
        /// Decoder message.
        message: String,
    },
}

impl fmt::Display for HandcamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::FrameParse { line: 0, message } => {
                write!(f, "frame parse error: {message}")
            }
            Self::FrameParse { line, message } => {
                write!(f, "frame parse error on line {line}: {message}")
            }
        }
    }
}

impl std::error::Error for HandcamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HandcamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_parse_message_includes_line() {
        let err = HandcamError::FrameParse {
            line: 3,
            message: "expected value".into(),
        };
        assert_eq!(
            err.to_string(),
            "frame parse error on line 3: expected value"
        );

        let single = HandcamError::FrameParse {
            line: 0,
            message: "eof".into(),
        };
        assert_eq!(single.to_string(), "frame parse error: eof");
    }

    #[test]
    fn io_error_is_exposed_as_source() {
        use std::error::Error;
        let err: HandcamError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
        assert!(HandcamError::OptionsParse("bad".into()).source().is_none());
    }
}
