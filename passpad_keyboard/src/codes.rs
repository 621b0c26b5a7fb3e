// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key codes for the numeric pad and parsing of code lists.
//!
//! Codes are Unicode scalar values where one exists, so printable keys sit above
//! [`PRINTABLE_THRESHOLD`] and control keys (delete, clear) at or below it.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::error::CodeError;

/// Delete the last entered character (ASCII backspace).
pub const KEYCODE_DELETE: i32 = 0x08;

/// Clear the whole entry. The default accept-key code.
pub const KEYCODE_CLEAR: i32 = -3;

/// Codes at or below this value are control codes and never take part in
/// proximity ranking.
pub const PRINTABLE_THRESHOLD: i32 = 32;

/// The code list a synthetic delete is sent with.
pub const KEY_DELETE: [i32; 1] = [KEYCODE_DELETE];

/// Code for a decimal digit `0..=9`.
pub const fn digit_code(digit: u8) -> i32 {
    b'0' as i32 + digit as i32
}

/// The digit character a code stands for, if it is one.
pub fn code_to_digit(code: i32) -> Option<char> {
    let c = char::from_u32(u32::try_from(code).ok()?)?;
    c.is_ascii_digit().then_some(c)
}

/// Parse one decimal key-code token. Surrounding whitespace is ignored.
pub fn parse_code(token: &str) -> Result<i32, CodeError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(CodeError::Empty);
    }
    token.parse().map_err(|source| CodeError::Malformed {
        token: token.to_string(),
        source,
    })
}

/// Parse a comma-separated list of key codes.
///
/// Empty tokens are ignored. Malformed tokens are skipped with a warning and do
/// not stop the remaining tokens from being read.
pub fn parse_codes(value: &str) -> Vec<i32> {
    let mut out = Vec::new();
    for token in value.split(',') {
        match parse_code(token) {
            Ok(code) => out.push(code),
            Err(CodeError::Empty) => {}
            Err(err) => log::warn!("skipping key code in `{value}`: {err}"),
        }
    }
    out
}
