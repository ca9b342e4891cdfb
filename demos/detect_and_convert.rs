//! Example demonstrating detection and conversion of an ASCII schematic
//!
//! Builds a small ASCII SchDoc document in memory, runs format detection,
//! converts it to the binary record stream, and verifies the stream by
//! decoding it back.

use schdoc_ascii::{is_ascii_schdoc, Decoder, Encoder};

fn main() -> anyhow::Result<()> {
    println!("=== ASCII SchDoc Conversion Example ===\n");

    let ascii_doc = "\
|HEADER=Protel for Windows - Schematic Capture Ascii File
|RECORD=31|FONTIDCOUNT=1|SIZE1=10|FONTNAME1=Times New Roman
L3: |RECORD=1|LOCATION.X=450|LOCATION.Y=310
this line is not an attribute and will be dropped

|RECORD=41|TEXT=Title Block
";

    // 1. Detection
    let detected = is_ascii_schdoc(ascii_doc.as_bytes());
    println!("Detected as ASCII SchDoc: {}", detected);

    // 2. Conversion
    let encoder = Encoder::new();
    let stream = encoder.encode(ascii_doc.as_bytes())?;
    println!("Encoded stream: {} bytes\n", stream.len());

    // 3. Decode back and compare against the source attribute lines
    let decoder = Decoder::new();
    let records = decoder.decode(&stream)?;

    println!("Records ({}):", records.len());
    println!("----------------");
    for (i, record) in records.iter().enumerate() {
        println!(
            "{}. {} payload bytes | {}",
            i + 1,
            record.payload_len(),
            record.text().unwrap_or("<non-UTF-8>")
        );
    }

    let expected = [
        "|HEADER=Protel for Windows - Schematic Capture Ascii File",
        "|RECORD=31|FONTIDCOUNT=1|SIZE1=10|FONTNAME1=Times New Roman",
        "|RECORD=1|LOCATION.X=450|LOCATION.Y=310",
        "|RECORD=41|TEXT=Title Block",
    ];

    println!("\nRound-trip verification:");
    for (record, expected_text) in records.iter().zip(expected.iter()) {
        let matches = record.text() == Some(expected_text);
        println!(
            "  {}: {}",
            expected_text,
            if matches { "OK" } else { "MISMATCH" }
        );
    }

    Ok(())
}
