//! Textual instruction words.
//!
//! The crate works on `u32` words throughout. This module converts the two
//! accepted textual forms into that representation:
//!
//! * a 32-character binary string, most-significant bit first
//!   (`"00000001001010100100000000100000"`);
//! * a `0x`-prefixed hexadecimal literal of at most eight digits (`"0x012A4020"`).
//!
//! Binary strings are validated up front, so a short or long string is rejected
//! instead of being sliced into misleading fields.

use crate::common::{Error, Result};
use crate::isa::instruction::INSTRUCTION_WIDTH;

/// Parses a 32-character binary string into an instruction word.
///
/// Length is checked before content.
///
/// # Errors
///
/// * [`Error::InvalidEncodingLength`] if `text` is not exactly 32 characters.
/// * [`Error::InvalidBitCharacter`] for the first character that is not `'0'` or `'1'`.
pub fn parse_bits(text: &str) -> Result<u32> {
    let found = text.chars().count();
    if found != INSTRUCTION_WIDTH as usize {
        return Err(Error::InvalidEncodingLength { found });
    }

    text.chars()
        .enumerate()
        .try_fold(0u32, |word, (position, character)| match character {
            '0' => Ok(word << 1),
            '1' => Ok((word << 1) | 1),
            _ => Err(Error::InvalidBitCharacter {
                character,
                position,
            }),
        })
}

/// Parses either textual form into an instruction word.
///
/// Whitespace is not stripped; a binary string with a trailing space is 33
/// characters long and is rejected.
///
/// # Errors
///
/// * [`Error::InvalidHexWord`] for a malformed or over-wide `0x` literal.
/// * Any error from [`parse_bits`] otherwise.
pub fn parse_word(text: &str) -> Result<u32> {
    match text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        Some(digits) => parse_hex(digits).ok_or_else(|| Error::InvalidHexWord(text.to_owned())),
        None => parse_bits(text),
    }
}

/// Formats a word as a 32-character binary string.
pub fn to_bits(word: u32) -> String {
    format!("{word:032b}")
}

fn parse_hex(digits: &str) -> Option<u32> {
    let digits = digits.replace('_', "");
    if digits.is_empty() || digits.len() > 8 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(&digits, 16).ok()
}
