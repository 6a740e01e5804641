use std::path::Path;

use super::Frame;
use crate::error::HandcamError;

/// A sequence of frames captured from the sensor, stored as JSON lines
/// (one frame message per line).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameRecording {
    frames: Vec<Frame>,
}

impl FrameRecording {
    /// Parse JSON-lines text. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, HandcamError> {
        let mut frames = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let frame = serde_json::from_str(line).map_err(|e| {
                HandcamError::FrameParse {
                    line: idx + 1,
                    message: e.to_string(),
                }
            })?;
            frames.push(frame);
        }
        log::debug!("parsed frame recording: {} frames", frames.len());
        Ok(Self { frames })
    }

    /// Load a recording from disk.
    pub fn load(path: &Path) -> Result<Self, HandcamError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Recorded frames in capture order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of recorded frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the recording holds no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl From<Vec<Frame>> for FrameRecording {
    fn from(frames: Vec<Frame>) -> Self {
        Self { frames }
    }
}
