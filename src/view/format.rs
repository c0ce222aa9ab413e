//! Display formatting helpers
//!
//! Amounts are kept as base-unit `U256` values everywhere and only turned
//! into decimal strings here.

use alloy::primitives::utils::{parse_units, ParseUnits};
use alloy::primitives::{Address, U256};

/// Errors parsing a user-entered token amount
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount is required")]
    Empty,

    #[error("amount must not be negative")]
    Negative,

    #[error("invalid amount '{0}': {1}")]
    Invalid(String, String),
}

/// Parse a decimal amount (e.g. `"1.25"`) into base units
pub fn parse_token_amount(input: &str, token_decimals: u8) -> Result<U256, AmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AmountError::Empty);
    }
    if input.starts_with('-') {
        return Err(AmountError::Negative);
    }

    match parse_units(input, token_decimals) {
        Ok(ParseUnits::U256(value)) => Ok(value),
        Ok(ParseUnits::I256(value)) if !value.is_negative() => Ok(value.unsigned_abs()),
        Ok(ParseUnits::I256(_)) => Err(AmountError::Negative),
        Err(e) => Err(AmountError::Invalid(input.to_string(), e.to_string())),
    }
}

/// Format base units as a grouped decimal with at most `max_fraction_digits`
///
/// Rounds half up and trims trailing zeros, e.g. `1234567.891250` with four
/// digits becomes `1,234,567.8913`.
pub fn format_token_amount(amount: U256, token_decimals: u8, max_fraction_digits: u8) -> String {
    let digits = max_fraction_digits.min(token_decimals);
    let shift = token_decimals - digits;

    let scaled = if shift == 0 {
        amount
    } else {
        let divisor = pow10(shift);
        amount.saturating_add(divisor / U256::from(2u8)) / divisor
    };

    let unit = pow10(digits);
    let whole = scaled / unit;
    let fraction = scaled % unit;

    let mut formatted = group_thousands(&whole.to_string());
    if !fraction.is_zero() {
        let padded = format!("{:0>width$}", fraction.to_string(), width = digits as usize);
        formatted.push('.');
        formatted.push_str(padded.trim_end_matches('0'));
    }
    formatted
}

fn pow10(exponent: u8) -> U256 {
    U256::from(10u8).pow(U256::from(exponent))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Shorten an address to `start...end`; short inputs are returned unchanged
pub fn format_address(address: &str, start_chars: usize, end_chars: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= start_chars + end_chars {
        return address.to_string();
    }

    let head: String = chars[..start_chars].iter().collect();
    let tail: String = chars[chars.len() - end_chars..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Checksummed address shortened to six characters on each side
pub fn short_address(address: &Address) -> String {
    format_address(&address.to_string(), 6, 6)
}

/// Human-readable time left before `deadline`
///
/// Uses the assumed block time, so the figure is approximate.
pub fn format_time_remaining(current_block: u64, deadline: u32, block_time_secs: u64) -> String {
    let deadline = u64::from(deadline);
    if deadline <= current_block {
        return "Expired".to_string();
    }

    let seconds = (deadline - current_block).saturating_mul(block_time_secs);
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;

    if days > 0 {
        return format!("{}d {}h remaining", days, hours);
    }
    if hours > 0 {
        return format!("{}h remaining", hours);
    }

    let minutes = (seconds % 3_600) / 60;
    format!("{}m remaining", minutes)
}

/// Funding progress as a percentage in `0.0..=100.0`
///
/// A zero goal reports 0. Precision is two decimals.
pub fn calculate_progress(raised: U256, goal: U256) -> f64 {
    if goal.is_zero() {
        return 0.0;
    }

    let full = U256::from(10_000u32);
    let basis_points = (raised.saturating_mul(full) / goal).min(full);
    basis_points.to::<u64>() as f64 / 100.0
}

/// Fixed-width text progress bar
pub fn progress_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
