//! Example walking a raw record stream byte by byte
//!
//! Shows the exact on-wire layout of each record: the little-endian length
//! field, the padding and record-type bytes, and the NUL-terminated payload.

use schdoc_ascii::{Encoder, RECORD_HEADER_LEN};

fn main() -> anyhow::Result<()> {
    let ascii_doc = "|RECORD=1|NAME=R1\n|RECORD=2|NAME=C3\n";

    let encoder = Encoder::new();
    let stream = encoder.encode(ascii_doc.as_bytes())?;

    println!("Stream: {} bytes total\n", stream.len());

    let mut offset = 0;
    let mut index = 0;
    while offset < stream.len() {
        let header = &stream[offset..offset + RECORD_HEADER_LEN];
        let payload_len = u16::from_le_bytes([header[0], header[1]]) as usize;
        let payload = &stream[offset + RECORD_HEADER_LEN..offset + RECORD_HEADER_LEN + payload_len];

        println!("record {} at offset {}", index, offset);
        println!("  length field: {:02X} {:02X} ({} bytes)", header[0], header[1], payload_len);
        println!("  padding:      {:02X}", header[2]);
        println!("  record type:  {:02X}", header[3]);
        println!("  payload:      {:?}", String::from_utf8_lossy(payload));
        println!();

        offset += RECORD_HEADER_LEN + payload_len;
        index += 1;
    }

    Ok(())
}
