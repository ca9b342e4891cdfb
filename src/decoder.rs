//! Record stream decoder

use crate::record::{DecodeError, Record, RECORD_HEADER_LEN};

/// Splits an encoded record stream back into its records
pub struct Decoder {
    // Currently stateless, but reserved for future options
}

impl Decoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self {}
    }

    /// Decode a record stream into its ordered list of records.
    ///
    /// The stream has no framing of its own; each record's length field is
    /// what delimits it from the next. Padding and record-type bytes are
    /// carried but not validated. The only malformation rejected is a stream
    /// that ends mid-header or mid-payload.
    pub fn decode(&self, data: &[u8]) -> Result<Vec<Record>, DecodeError> {
        let mut records = Vec::new();
        let mut offset = 0;

        while offset < data.len() {
            let available = data.len() - offset;
            if available < RECORD_HEADER_LEN {
                return Err(DecodeError::TruncatedHeader { offset, available });
            }

            let payload_len = u16::from_le_bytes([data[offset], data[offset + 1]]) as usize;
            let payload_start = offset + RECORD_HEADER_LEN;
            let available = data.len() - payload_start;
            if available < payload_len {
                return Err(DecodeError::TruncatedPayload {
                    offset,
                    expected: payload_len,
                    available,
                });
            }

            records.push(Record::from_payload(
                &data[payload_start..payload_start + payload_len],
            ));
            offset = payload_start + payload_len;
        }

        Ok(records)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::Encoder;

    #[test]
    fn test_decode_empty_stream() {
        let decoder = Decoder::new();
        assert!(decoder.decode(b"").unwrap().is_empty());
    }

    #[test]
    fn test_decode_single_record() {
        let mut stream = vec![5, 0, 0, 0];
        stream.extend_from_slice(b"|A=1\0");

        let decoder = Decoder::new();
        let records = decoder.decode(&stream).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].payload(), b"|A=1\0");
        assert_eq!(records[0].text(), Some("|A=1"));
    }

    #[test]
    fn test_decode_round_trip() {
        let input = b"Protel for Windows - Schematic Capture Ascii File\n|RECORD=1\nignored comment\nL7: |RECORD=2\n";

        let encoder = Encoder::new();
        let stream = encoder.encode(input).unwrap();

        let decoder = Decoder::new();
        let records = decoder.decode(&stream).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text(), Some("|RECORD=1"));
        assert_eq!(records[1].text(), Some("|RECORD=2"));

        // Re-encoding each payload reproduces the stream byte for byte
        let mut rebuilt = Vec::new();
        for record in &records {
            rebuilt.extend_from_slice(&(record.payload_len() as u16).to_le_bytes());
            rebuilt.extend_from_slice(&[0x00, 0x00]);
            rebuilt.extend_from_slice(record.payload());
        }
        assert_eq!(rebuilt, stream);
    }

    #[test]
    fn test_decode_zero_length_payload() {
        // Header-only record is valid as far as the walk is concerned
        let stream = [0u8, 0, 0, 0];
        let decoder = Decoder::new();
        let records = decoder.decode(&stream).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].payload().is_empty());
    }

    #[test]
    fn test_decode_truncated_header() {
        let decoder = Decoder::new();
        let err = decoder.decode(&[5, 0, 0]).unwrap_err();
        assert_eq!(err, DecodeError::TruncatedHeader { offset: 0, available: 3 });
    }

    #[test]
    fn test_decode_truncated_payload() {
        let mut stream = vec![5, 0, 0, 0];
        stream.extend_from_slice(b"|A");

        let decoder = Decoder::new();
        let err = decoder.decode(&stream).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TruncatedPayload { offset: 0, expected: 5, available: 2 }
        );
    }

    #[test]
    fn test_decode_truncation_after_first_record() {
        let mut stream = vec![5, 0, 0, 0];
        stream.extend_from_slice(b"|A=1\0");
        stream.extend_from_slice(&[9, 0]);

        let decoder = Decoder::new();
        let err = decoder.decode(&stream).unwrap_err();
        assert_eq!(err, DecodeError::TruncatedHeader { offset: 9, available: 2 });
    }
}
