use std::num::ParseIntError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldDecodeError {
    #[error("field {field:?} is not a hex integer")]
    NotHex {
        field: String,
        #[source]
        source: ParseIntError,
    },
    #[error("field {field:?} is not a decimal integer")]
    NotDecimal {
        field: String,
        #[source]
        source: ParseIntError,
    },
}

pub fn u16_from_field(field: &str) -> Result<u16, FieldDecodeError> {
    u16::from_str_radix(field, 16).map_err(|source| not_hex(field, source))
}

pub fn u32_from_field(field: &str) -> Result<u32, FieldDecodeError> {
    u32::from_str_radix(field, 16).map_err(|source| not_hex(field, source))
}

pub fn u64_from_field(field: &str) -> Result<u64, FieldDecodeError> {
    u64::from_str_radix(field, 16).map_err(|source| not_hex(field, source))
}

/// One hex word packing two 16-bit halves, high half first.
pub fn u16x2_from_field(field: &str) -> Result<(u16, u16), FieldDecodeError> {
    let word = u32_from_field(field)?;
    Ok(((word >> 16) as u16, word as u16))
}

/// One hex word packing four bytes, most significant first.
pub fn u8x4_from_field(field: &str) -> Result<(u8, u8, u8, u8), FieldDecodeError> {
    let word = u32_from_field(field)?;
    Ok((
        (word >> 24) as u8,
        (word >> 16) as u8,
        (word >> 8) as u8,
        word as u8,
    ))
}

/// IEEE-754 bit pattern rendered as hex.
pub fn f32_from_field(field: &str) -> Result<f32, FieldDecodeError> {
    Ok(f32::from_bits(u32_from_field(field)?))
}

pub fn u8_from_decimal_field(field: &str) -> Result<u8, FieldDecodeError> {
    field.parse::<u8>().map_err(|source| FieldDecodeError::NotDecimal {
        field: field.to_string(),
        source,
    })
}

fn not_hex(field: &str, source: ParseIntError) -> FieldDecodeError {
    FieldDecodeError::NotHex {
        field: field.to_string(),
        source,
    }
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;
