//! Integer literal parsing for operands.
//!
//! Two grammars:
//! - byte literals (`hex`): base 16 only, optional `0x` prefix, 0..=255
//! - lengths and IDs (`pad`, `zero`, `vlan`): C-style prefix selects the
//!   radix (`0x` hex, leading `0` octal, otherwise decimal)
//!
//! The whole token must be consumed. Signs and whitespace are rejected.

use crate::error::EncodeError;

/// Parse a base-16 byte such as `ff`, `0A` or `0x7f`.
pub fn parse_hex_byte(literal: &str) -> Result<u8, EncodeError> {
    let digits = strip_hex_prefix(literal).unwrap_or(literal);
    if !is_digits(digits, 16) {
        return Err(EncodeError::numeric(literal, "byte"));
    }
    u8::from_str_radix(digits, 16).map_err(|_| EncodeError::numeric(literal, "byte"))
}

/// Parse a non-negative integer with C-style radix prefix.
///
/// `reason` names the operand in the error (`len`, `vid`, ...).
pub fn parse_integer(literal: &str, reason: &'static str) -> Result<u64, EncodeError> {
    let (digits, radix) = if let Some(rest) = strip_hex_prefix(literal) {
        (rest, 16)
    } else if literal.len() > 1 && literal.starts_with('0') {
        (&literal[1..], 8)
    } else {
        (literal, 10)
    };

    if !is_digits(digits, radix) {
        return Err(EncodeError::numeric(literal, reason));
    }
    u64::from_str_radix(digits, radix).map_err(|_| EncodeError::numeric(literal, reason))
}

fn strip_hex_prefix(literal: &str) -> Option<&str> {
    literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))
}

// from_str_radix alone would accept a leading '+'
fn is_digits(digits: &str, radix: u32) -> bool {
    !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
}
