//! ASCII SchDoc format detection

use crate::record::{ASCII_MARKER, DETECT_HEAD_LEN};

/// Configuration for format detection
#[derive(Debug, Clone)]
pub struct DetectConfig {
    /// How many leading bytes of the buffer to inspect for the marker
    pub head_len: usize,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self { head_len: DETECT_HEAD_LEN }
    }
}

/// Detects the ASCII variant of the SchDoc format
pub struct Detector {
    config: DetectConfig,
}

impl Detector {
    /// Create a detector with the default configuration
    pub fn new() -> Self {
        Self { config: DetectConfig::default() }
    }

    /// Create a detector with a custom configuration
    pub fn with_config(config: DetectConfig) -> Self {
        Self { config }
    }

    /// Check whether the buffer is an ASCII SchDoc document.
    ///
    /// Decodes the head of the buffer as UTF-8 and looks for the signature
    /// line Protel writes at the top of ASCII schematic files. A head that
    /// fails to decode is a detection miss, not an error; this includes a
    /// head boundary that cuts a multi-byte sequence in half.
    pub fn is_ascii_schdoc(&self, data: &[u8]) -> bool {
        let head_len = self.config.head_len.min(data.len());
        match std::str::from_utf8(&data[..head_len]) {
            Ok(head) => head.contains(ASCII_MARKER),
            Err(_) => false,
        }
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a buffer with the default detector configuration.
pub fn is_ascii_schdoc(data: &[u8]) -> bool {
    Detector::new().is_ascii_schdoc(data)
}
