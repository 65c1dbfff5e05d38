use super::*;

#[test]
fn test_plain_integer() {
    assert_eq!(DigitSpec::parse("123"), Ok(123));
    assert_eq!(DigitSpec::parse("7615236"), Ok(7_615_236));
}

#[test]
fn test_surrounding_whitespace_trimmed() {
    assert_eq!(DigitSpec::parse("  42\n"), Ok(42));
}

#[test]
fn test_suffixes() {
    assert_eq!(DigitSpec::parse("1K"), Ok(1_000));
    assert_eq!(DigitSpec::parse("10M"), Ok(10_000_000));
    assert_eq!(DigitSpec::parse("2G"), Ok(2_000_000_000));
    assert_eq!(DigitSpec::parse("132876K"), Ok(132_876_000));
}

#[test]
fn test_suffixes_case_insensitive() {
    assert_eq!(DigitSpec::parse("1k"), Ok(1_000));
    assert_eq!(DigitSpec::parse("3m"), Ok(3_000_000));
    assert_eq!(DigitSpec::parse("1g"), Ok(1_000_000_000));
}

#[test]
fn test_space_before_suffix() {
    assert_eq!(DigitSpec::parse("5 K"), Ok(5_000));
}

#[test]
fn test_scientific_notation() {
    assert_eq!(DigitSpec::parse("1e6"), Ok(1_000_000));
    assert_eq!(DigitSpec::parse("3E7"), Ok(30_000_000));
    assert_eq!(DigitSpec::parse("25e0"), Ok(25));
}

#[test]
fn test_empty_rejected() {
    assert_eq!(DigitSpec::parse(""), Err(DigitSpecError::Empty));
    assert_eq!(DigitSpec::parse("   "), Err(DigitSpecError::Empty));
}

#[test]
fn test_missing_mantissa_rejected() {
    assert!(matches!(
        DigitSpec::parse("e6"),
        Err(DigitSpecError::InvalidScientific(_))
    ));
}

#[test]
fn test_missing_exponent_rejected() {
    assert!(matches!(
        DigitSpec::parse("1e"),
        Err(DigitSpecError::InvalidScientific(_))
    ));
}

#[test]
fn test_negative_exponent_rejected() {
    let result = DigitSpec::parse("1e-3");
    assert!(matches!(result, Err(DigitSpecError::NegativeExponent(_))));
    assert!(result.unwrap_err().to_string().contains("Negative exponent"));
}

#[test]
fn test_negative_count_rejected() {
    assert!(matches!(
        DigitSpec::parse("-5"),
        Err(DigitSpecError::NotPositive(_))
    ));
    assert!(matches!(
        DigitSpec::parse("-2K"),
        Err(DigitSpecError::NotPositive(_))
    ));
}

#[test]
fn test_zero_rejected() {
    assert!(matches!(
        DigitSpec::parse("0"),
        Err(DigitSpecError::NotPositive(_))
    ));
    assert!(matches!(
        DigitSpec::parse("0K"),
        Err(DigitSpecError::NotPositive(_))
    ));
    assert!(matches!(
        DigitSpec::parse("0e50"),
        Err(DigitSpecError::NotPositive(_))
    ));
}

#[test]
fn test_suffix_without_number_rejected() {
    assert!(matches!(
        DigitSpec::parse("K"),
        Err(DigitSpecError::MissingNumber(_))
    ));
}

#[test]
fn test_garbage_rejected() {
    assert!(matches!(
        DigitSpec::parse("abc"),
        Err(DigitSpecError::InvalidNumber(_))
    ));
    assert!(matches!(
        DigitSpec::parse("1.5K"),
        Err(DigitSpecError::InvalidNumber(_))
    ));
    assert!(matches!(
        DigitSpec::parse("1e6K"),
        Err(DigitSpecError::InvalidScientific(_))
    ));
}

#[test]
fn test_overflow_rejected() {
    assert!(matches!(
        DigitSpec::parse("1e30"),
        Err(DigitSpecError::Overflow(_))
    ));
    assert!(matches!(
        DigitSpec::parse("18446744073709551615T"),
        Err(DigitSpecError::Overflow(_))
    ));
}

#[test]
fn test_too_many_digits_rejected() {
    assert_eq!(
        DigitSpec::parse("5G"),
        Err(DigitSpecError::TooManyDigits {
            value: 5_000_000_000,
            max: MAX_DIGITS,
        })
    );
    assert_eq!(DigitSpec::parse("4294967295"), Ok(MAX_DIGITS));
}

#[test]
fn test_error_message_quotes_input() {
    let err = DigitSpec::parse("12x").unwrap_err();
    assert_eq!(err.to_string(), "Invalid number in \"12x\"");
}
