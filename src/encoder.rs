//! ASCII document to record stream encoder

use crate::record::{EncodeError, Record, MAX_PAYLOAD_LEN, RECORD_TYPE_ASCII};
use anyhow::Result;

/// Encodes an ASCII SchDoc document into a binary record stream
pub struct Encoder {
    // Currently stateless, but reserved for future options
}

impl Encoder {
    /// Create a new encoder
    pub fn new() -> Self {
        Self {}
    }

    /// Encode a full ASCII document into the FileHeader record stream.
    ///
    /// The whole buffer must be valid UTF-8 — callers are expected to have
    /// run detection first, so a decode failure here aborts the encode with
    /// [`EncodeError::InvalidUtf8`] rather than skipping anything.
    ///
    /// Each attribute line becomes one record in source order; empty lines
    /// and non-attribute lines produce nothing. A line whose payload would
    /// overflow the u16 length field aborts the whole encode with
    /// [`EncodeError::PayloadTooLarge`].
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>, EncodeError> {
        let text = std::str::from_utf8(data)
            .map_err(|e| EncodeError::InvalidUtf8 { valid_up_to: e.valid_up_to() })?;

        let mut output = Vec::new();
        for (line_index, line) in text.lines().enumerate() {
            let record = match Record::from_line(line) {
                Some(record) => record,
                None => continue,
            };

            let payload_len = record.payload_len();
            if payload_len > MAX_PAYLOAD_LEN {
                return Err(EncodeError::PayloadTooLarge {
                    line_number: line_index + 1,
                    payload_len,
                });
            }

            output.extend_from_slice(&(payload_len as u16).to_le_bytes());
            output.push(0x00); // padding
            output.push(RECORD_TYPE_ASCII);
            output.extend_from_slice(record.payload());
        }

        Ok(output)
    }

    /// Encode a document directly to a writer
    pub fn encode_to_writer<W: std::io::Write>(&self, data: &[u8], mut writer: W) -> Result<()> {
        let encoded = self.encode(data)?;
        writer.write_all(&encoded)?;
        Ok(())
    }

    /// Encode a document to a file
    pub fn encode_to_file(&self, data: &[u8], path: &std::path::Path) -> Result<()> {
        let encoded = self.encode(data)?;
        std::fs::write(path, encoded)?;
        Ok(())
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
