pub mod checksum;
pub mod codec;
pub mod fields;
pub mod timestamp;

pub use checksum::{
    validate_line_checksum, validate_line_checksum_with, ChecksumAlgorithm,
    UnknownChecksumAlgorithm,
};
pub use codec::{DefaultLineCodec, LineCodec};
pub use fields::{
    f32_from_field, u16_from_field, u16x2_from_field, u32_from_field, u64_from_field,
    u8_from_decimal_field, u8x4_from_field, FieldDecodeError,
};
pub use timestamp::{millis_from_act_timestamp, TimestampFormatError};
