use super::{
    f32_from_field, u16_from_field, u16x2_from_field, u32_from_field, u64_from_field,
    u8_from_decimal_field, u8x4_from_field, FieldDecodeError,
};

#[test]
fn decodes_fixed_width_hex_integers() {
    assert_eq!(u16_from_field("4FB1").expect("must decode"), 0x4FB1);
    assert_eq!(u16_from_field("0000").expect("must decode"), 0);
    assert_eq!(u32_from_field("40000001").expect("must decode"), 0x4000_0001);
    assert_eq!(
        u64_from_field("00000000075BCD15").expect("must decode"),
        123_456_789
    );
}

#[test]
fn hex_decoding_accepts_both_letter_cases() {
    assert_eq!(u32_from_field("10909B23").expect("must decode"), 0x1090_9B23);
    assert_eq!(u32_from_field("10909b23").expect("must decode"), 0x1090_9B23);
}

#[test]
fn splits_packed_word_into_high_and_low_halves() {
    assert_eq!(
        u16x2_from_field("80034FB1").expect("must decode"),
        (0x8003, 0x4FB1)
    );
    // Short fields decode with an implicit zero high half.
    assert_eq!(u16x2_from_field("01AB").expect("must decode"), (0, 0x01AB));
}

#[test]
fn splits_packed_word_into_four_bytes() {
    assert_eq!(
        u8x4_from_field("01020304").expect("must decode"),
        (1, 2, 3, 4)
    );
    assert_eq!(
        u8x4_from_field("FF000A10").expect("must decode"),
        (0xFF, 0, 0x0A, 0x10)
    );
}

#[test]
fn reinterprets_hex_as_float_bit_pattern() {
    assert_eq!(f32_from_field("3F800000").expect("must decode"), 1.0);
    assert_eq!(f32_from_field("42C80000").expect("must decode"), 100.0);
    assert_eq!(f32_from_field("C2C80000").expect("must decode"), -100.0);
    assert_eq!(
        f32_from_field("40490FDB").expect("must decode"),
        std::f32::consts::PI
    );
}

#[test]
fn decodes_small_decimal_fields() {
    assert_eq!(u8_from_decimal_field("0").expect("must decode"), 0);
    assert_eq!(u8_from_decimal_field("13").expect("must decode"), 13);
    assert_eq!(u8_from_decimal_field("255").expect("must decode"), 255);
}

#[test]
fn non_hex_content_is_reported_with_the_field_text() {
    let error = u16_from_field("ZZZZ").expect_err("must fail");
    assert!(matches!(error, FieldDecodeError::NotHex { ref field, .. } if field == "ZZZZ"));
}

#[test]
fn oversized_hex_is_rejected() {
    assert!(u16_from_field("12345").is_err());
    assert!(u32_from_field("123456789").is_err());
}

#[test]
fn non_decimal_content_is_reported_with_the_field_text() {
    let error = u8_from_decimal_field("Add").expect_err("must fail");
    assert!(matches!(error, FieldDecodeError::NotDecimal { ref field, .. } if field == "Add"));
    assert!(u8_from_decimal_field("300").is_err());
    assert!(u8_from_decimal_field("-1").is_err());
}
