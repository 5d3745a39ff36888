//! Protocol module containing the line format and the streaming decoder.

pub mod decoder;
pub mod line;

pub use decoder::{LineDecoder, MAX_LINE_LEN};
pub use line::{encode_reading, parse_line, AdcReading, FrameError, LINE_PREFIX};
