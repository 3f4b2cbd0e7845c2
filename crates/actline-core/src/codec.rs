use crate::checksum::validate_line_checksum;
use crate::timestamp::{millis_from_act_timestamp, TimestampFormatError};

/// Timestamp and checksum primitives behind one seam so an embedding
/// application can swap in an accelerated implementation at startup.
pub trait LineCodec {
    fn timestamp_millis(&self, raw: &str) -> Result<i64, TimestampFormatError>;
    fn validate_checksum(&self, line: &str, index: u64) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct DefaultLineCodec;

impl LineCodec for DefaultLineCodec {
    fn timestamp_millis(&self, raw: &str) -> Result<i64, TimestampFormatError> {
        millis_from_act_timestamp(raw)
    }

    fn validate_checksum(&self, line: &str, index: u64) -> bool {
        validate_line_checksum(line, index)
    }
}

#[cfg(test)]
#[path = "codec_test.rs"]
mod tests;
