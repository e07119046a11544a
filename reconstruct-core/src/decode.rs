//! Decoding of base-N digit strings into exact big integers.

use num_bigint::BigInt;
use num_traits::Zero;

/// The error type for [`decode_value`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The digit string was empty.
    #[error("empty digit string")]
    EmptyDigits,
    /// The base is smaller than 2.
    #[error("unsupported base {0}, must be at least 2")]
    UnsupportedBase(u32),
    /// A character is not a valid digit in the given base.
    #[error("invalid digit '{digit}' for base {base}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// The base the digit string is written in.
        base: u32,
    },
}

/// Decodes `digits` as a number written in `base` into a [`BigInt`].
///
/// Digits `0`-`9` carry their numeric value, letters of either case count
/// from `a` = 10 up to `z` = 35. Every digit value must be smaller than
/// `base`; anything else is rejected instead of being wrapped or skipped.
pub fn decode_value(digits: &str, base: u32) -> Result<BigInt, DecodeError> {
    if base < 2 {
        return Err(DecodeError::UnsupportedBase(base));
    }
    if digits.is_empty() {
        return Err(DecodeError::EmptyDigits);
    }
    let mut result = BigInt::zero();
    for ch in digits.chars() {
        let digit = match ch {
            '0'..='9' => ch as u32 - '0' as u32,
            'a'..='z' => ch as u32 - 'a' as u32 + 10,
            'A'..='Z' => ch as u32 - 'A' as u32 + 10,
            _ => return Err(DecodeError::InvalidDigit { digit: ch, base }),
        };
        if digit >= base {
            return Err(DecodeError::InvalidDigit { digit: ch, base });
        }
        result = result * base + digit;
    }
    Ok(result)
}
