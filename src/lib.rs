//! # schdoc-ascii
//!
//! Protel ASCII schematic to FileHeader record stream converter.
//!
//! This crate detects the ASCII variant of Protel/Altium schematic capture
//! files and converts them into the binary record stream a binary SchDoc
//! carries in its OLE `FileHeader` stream. The document container itself is
//! out of scope here: both sides of the conversion are plain in-memory byte
//! buffers owned by the caller.
//!
//! ## ASCII Source Format
//!
//! An ASCII SchDoc is a line-oriented text file. The signature line appears
//! near the top, and every schematic attribute is one `|`-delimited line,
//! optionally carrying an `L<digits>:` line-number prefix:
//!
//! ```text
//! |HEADER=Protel for Windows - Schematic Capture Ascii File
//! |RECORD=1|LOCATION.X=100|LOCATION.Y=200
//! L42: |RECORD=2|NAME=R1
//! ```
//!
//! Blank lines and lines without the `|` delimiter are not part of the
//! format's payload and are dropped during conversion.
//!
//! ## Binary Record Stream
//!
//! Each attribute line becomes one record: a 2-byte little-endian payload
//! length, a padding byte, a record type byte (zero for ASCII-sourced
//! records), and the line text with a single trailing NUL. Records are
//! concatenated back to back with no stream header or trailer — every
//! record's own length field is what delimits it.
//!
//! ## Detection Rules
//!
//! A buffer is taken to be an ASCII SchDoc when:
//! 1. Its first 256 bytes (or the whole buffer, if shorter) decode as UTF-8
//! 2. The decoded head contains the Protel ASCII signature
//!
//! Anything else — including a head that fails to decode — is a detection
//! miss, and the caller should try its other format handlers.

pub mod decoder;
pub mod detector;
pub mod encoder;
pub mod record;

pub use decoder::Decoder;
pub use detector::{is_ascii_schdoc, DetectConfig, Detector};
pub use encoder::Encoder;
pub use record::{
    strip_line_number_prefix, DecodeError, EncodeError, Record, ASCII_MARKER, DETECT_HEAD_LEN,
    MAX_PAYLOAD_LEN, RECORD_HEADER_LEN, RECORD_TYPE_ASCII,
};
