//! Record data structures and format constants

// ASCII SchDoc format constants
pub const ASCII_MARKER: &str = "Protel for Windows - Schematic Capture Ascii File";
pub const DETECT_HEAD_LEN: usize = 256;

// Binary record layout constants
pub const RECORD_HEADER_LEN: usize = 4; // u16 length + padding + record type
pub const RECORD_TYPE_ASCII: u8 = 0x00;
pub const MAX_PAYLOAD_LEN: usize = 0xFFFF; // length field is u16

/// A single binary record of the FileHeader stream.
///
/// The payload is the UTF-8 text of one attribute line followed by a single
/// NUL terminator. On the wire each record is prefixed with a 4-byte header:
/// payload length (u16 little-endian), one padding byte (0x00), and the
/// record type byte (0x00 for records produced from ASCII sources).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    payload: Vec<u8>,
}

impl Record {
    /// Build a record from one line of ASCII SchDoc text.
    ///
    /// Returns `None` for lines that do not carry an attribute: empty lines,
    /// comments, and anything that does not start with `|` once an optional
    /// `L<digits>:` line-number prefix has been removed.
    pub fn from_line(line: &str) -> Option<Self> {
        if line.is_empty() {
            return None;
        }

        let line = strip_line_number_prefix(line);
        if !line.starts_with('|') {
            return None;
        }

        let mut payload = Vec::with_capacity(line.len() + 1);
        payload.extend_from_slice(line.as_bytes());
        payload.push(0x00);
        Some(Self { payload })
    }

    /// Build a record from raw payload bytes taken off an encoded stream.
    pub fn from_payload(payload: impl Into<Vec<u8>>) -> Self {
        Self { payload: payload.into() }
    }

    /// The raw payload bytes, trailing NUL included.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Payload length in bytes, trailing NUL included.
    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }

    /// Total on-wire size of this record, header included.
    pub fn encoded_len(&self) -> usize {
        RECORD_HEADER_LEN + self.payload.len()
    }

    /// The payload text with the trailing NUL stripped.
    ///
    /// Returns `None` if the payload is not valid UTF-8 (possible for records
    /// read back from a foreign stream, never for records built by this
    /// crate).
    pub fn text(&self) -> Option<&str> {
        let bytes = self
            .payload
            .strip_suffix(&[0x00])
            .unwrap_or(&self.payload);
        std::str::from_utf8(bytes).ok()
    }
}

/// Strip an optional line-number prefix like `L123: ` from a line.
///
/// The prefix is a literal `L`, one or more ASCII digits, a `:`, and any
/// amount of whitespace, all of which is removed. Lines without the full
/// prefix are returned unchanged; only one strip attempt is made.
pub fn strip_line_number_prefix(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix('L') {
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits_end > 0 {
            if let Some(after) = rest[digits_end..].strip_prefix(':') {
                return after.trim_start();
            }
        }
    }
    line
}

/// Error type for encoding an ASCII document into a record stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Input buffer is not valid UTF-8 (caller skipped format detection)
    InvalidUtf8 { valid_up_to: usize },

    /// A single attribute line's payload exceeds the u16 length field
    PayloadTooLarge { line_number: usize, payload_len: usize },
}

impl std::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodeError::InvalidUtf8 { valid_up_to } => {
                write!(f, "Input is not valid UTF-8 (first invalid byte at offset {})", valid_up_to)
            }
            EncodeError::PayloadTooLarge { line_number, payload_len } => {
                write!(
                    f,
                    "Line {} is too long to encode into a single record ({} payload bytes, max {})",
                    line_number, payload_len, MAX_PAYLOAD_LEN
                )
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Error type for decoding an encoded record stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Stream ends inside a record header
    TruncatedHeader { offset: usize, available: usize },

    /// Stream ends inside a record payload
    TruncatedPayload { offset: usize, expected: usize, available: usize },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::TruncatedHeader { offset, available } => {
                write!(
                    f,
                    "Truncated record header at offset {} ({} bytes left, need {})",
                    offset, available, RECORD_HEADER_LEN
                )
            }
            DecodeError::TruncatedPayload { offset, expected, available } => {
                write!(
                    f,
                    "Truncated record payload at offset {} (length field says {} bytes, {} left)",
                    offset, expected, available
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_number_prefix() {
        assert_eq!(strip_line_number_prefix("L42: |RECORD=1"), "|RECORD=1");
        assert_eq!(strip_line_number_prefix("L1:|RECORD=1"), "|RECORD=1");
        assert_eq!(strip_line_number_prefix("L123:\t|RECORD=1"), "|RECORD=1");
        assert_eq!(strip_line_number_prefix("|RECORD=1"), "|RECORD=1");
    }

    #[test]
    fn test_strip_line_number_prefix_incomplete() {
        // Missing digits, missing colon, or wrong leading letter: unchanged
        assert_eq!(strip_line_number_prefix("L: |X"), "L: |X");
        assert_eq!(strip_line_number_prefix("L42 |X"), "L42 |X");
        assert_eq!(strip_line_number_prefix("Label: |X"), "Label: |X");
        assert_eq!(strip_line_number_prefix("42: |X"), "42: |X");
    }

    #[test]
    fn test_strip_line_number_prefix_once() {
        // Only one prefix is removed
        assert_eq!(strip_line_number_prefix("L1: L2: |X"), "L2: |X");
    }

    #[test]
    fn test_record_from_attribute_line() {
        let record = Record::from_line("|RECORD=1").unwrap();
        assert_eq!(record.payload(), b"|RECORD=1\0");
        assert_eq!(record.payload_len(), 10);
        assert_eq!(record.encoded_len(), 14);
        assert_eq!(record.text(), Some("|RECORD=1"));
    }

    #[test]
    fn test_record_from_prefixed_line() {
        let plain = Record::from_line("|DESIGNATOR Value").unwrap();
        let prefixed = Record::from_line("L42: |DESIGNATOR Value").unwrap();
        assert_eq!(plain, prefixed);
    }

    #[test]
    fn test_record_skips_non_attribute_lines() {
        assert!(Record::from_line("").is_none());
        assert!(Record::from_line("ignored comment").is_none());
        assert!(Record::from_line("RECORD=1").is_none());
        // Prefix strips to an empty line
        assert!(Record::from_line("L42: ").is_none());
    }

    #[test]
    fn test_record_bare_delimiter() {
        // A lone '|' is still an attribute line
        let record = Record::from_line("|").unwrap();
        assert_eq!(record.payload(), b"|\0");
    }

    #[test]
    fn test_record_text_strips_nul() {
        let record = Record::from_payload(b"|X=1\0".to_vec());
        assert_eq!(record.text(), Some("|X=1"));

        // A payload without the terminator is still readable
        let record = Record::from_payload(b"|X=1".to_vec());
        assert_eq!(record.text(), Some("|X=1"));
    }

    #[test]
    fn test_record_text_invalid_utf8() {
        let record = Record::from_payload(vec![0xFF, 0xFE, 0x00]);
        assert_eq!(record.text(), None);
    }
}
