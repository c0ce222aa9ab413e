//! Formatting helper tests

use alloy::primitives::U256;
use crowdfund_client::view::format::{
    calculate_progress, format_address, format_time_remaining, format_token_amount,
    parse_token_amount, progress_bar, AmountError,
};

use crate::common::tokens;

#[test]
fn test_token_amount_grouping_and_rounding() {
    let amount = tokens(1_234_567) + U256::from(891_250_000_000_000_000u64);
    assert_eq!(format_token_amount(amount, 18, 4), "1,234,567.8913");

    assert_eq!(format_token_amount(tokens(1_000), 18, 4), "1,000");
    assert_eq!(format_token_amount(tokens(3) / U256::from(2), 18, 4), "1.5");
    assert_eq!(format_token_amount(U256::ZERO, 18, 4), "0");
}

#[test]
fn test_whole_part_grouped_in_thousands() {
    assert_eq!(format_token_amount(U256::from(1u64), 0, 4), "1");
    assert_eq!(format_token_amount(U256::from(1_000u64), 0, 4), "1,000");
    assert_eq!(format_token_amount(U256::from(123_456_789u64), 0, 4), "123,456,789");
}

#[test]
fn test_token_amount_rounds_up_into_whole_units() {
    // 0.99999 tokens shown with four digits
    let amount = U256::from(999_990_000_000_000_000u64);
    assert_eq!(format_token_amount(amount, 18, 4), "1");

    // A single base unit rounds away
    assert_eq!(format_token_amount(U256::from(1), 18, 4), "0");
}

#[test]
fn test_token_amount_without_decimals() {
    assert_eq!(format_token_amount(U256::from(1_234), 0, 4), "1,234");
    assert_eq!(format_token_amount(U256::from(1_234), 2, 4), "12.34");
}

#[test]
fn test_parse_token_amount() {
    assert_eq!(parse_token_amount("1.5", 18), Ok(tokens(3) / U256::from(2)));
    assert_eq!(parse_token_amount(" 100 ", 18), Ok(tokens(100)));
    assert_eq!(parse_token_amount("", 18), Err(AmountError::Empty));
    assert_eq!(parse_token_amount("-1", 18), Err(AmountError::Negative));
    assert!(matches!(
        parse_token_amount("abc", 18),
        Err(AmountError::Invalid(_, _))
    ));
}

#[test]
fn test_format_address() {
    assert_eq!(
        format_address("0x1234567890abcdef", 6, 6),
        "0x1234...abcdef"
    );
    assert_eq!(format_address("0x1234", 6, 6), "0x1234");
    assert_eq!(format_address("0x1234567890ab", 6, 6), "0x1234567890ab");
}

#[test]
fn test_time_remaining() {
    assert_eq!(format_time_remaining(100, 100, 6), "Expired");
    assert_eq!(format_time_remaining(200, 100, 6), "Expired");

    // 15 000 blocks at 6 s = 25 hours
    assert_eq!(format_time_remaining(0, 15_000, 6), "1d 1h remaining");
    assert_eq!(format_time_remaining(0, 600, 6), "1h remaining");
    assert_eq!(format_time_remaining(0, 50, 6), "5m remaining");
    assert_eq!(format_time_remaining(0, 5, 6), "0m remaining");
}

#[test]
fn test_progress_is_clamped() {
    assert_eq!(calculate_progress(tokens(40), tokens(100)), 40.0);
    assert_eq!(calculate_progress(tokens(60), tokens(50)), 100.0);
    assert_eq!(calculate_progress(tokens(1), tokens(3)), 33.33);
    assert_eq!(calculate_progress(tokens(5), U256::ZERO), 0.0);
    assert_eq!(calculate_progress(U256::MAX, U256::from(1)), 100.0);
}

#[test]
fn test_progress_bar_fills_proportionally() {
    assert_eq!(progress_bar(50.0, 10), "[#####-----]");
    assert_eq!(progress_bar(150.0, 4), "[####]");
    assert_eq!(progress_bar(0.0, 3), "[---]");
}
