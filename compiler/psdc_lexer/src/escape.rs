//! Escape-sequence decoding for character and string literals.
//!
//! Literal contents are accumulated as UTF-16 code units, so escapes that
//! produce raw units (`\u`, octal, out-of-range `\x`) can pair up into one
//! scalar: two `\u` escapes spelling a surrogate pair decode to one emoji.
//!
//! | escape            | result                                       |
//! |-------------------|----------------------------------------------|
//! | `\'` `\"` `\\`    | itself                                       |
//! | `\a` ... `\v`     | BEL BS FF LF CR TAB VT                       |
//! | `\e`              | ESC                                          |
//! | `\x` + 1-8 hex    | scalar if valid, else truncated raw unit     |
//! | `\u` + 4 hex      | raw unit                                     |
//! | `\U` + 8 hex      | as `\x`                                      |
//! | 1-3 octal digits  | raw unit                                     |
//! | anything else     | the character itself, plus a diagnostic      |

use crate::cursor::Cursor;

const MAX_OCTAL_DIGITS: u32 = 3;
const UTF16_DIGITS: u32 = 4;
const UTF32_DIGITS: u32 = 8;

/// A malformed escape. Decoding always continues after one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct InvalidEscape {
    /// The character after the backslash.
    pub(crate) escape: char,
    /// What the escape requires, when it has a requirement.
    pub(crate) requirement: Option<&'static str>,
}

/// Decode the escape whose letter `escape` was just consumed, reading any
/// digits from `cursor` and appending the result to `units`.
pub(crate) fn decode(
    escape: char,
    cursor: &mut Cursor,
    units: &mut Vec<u16>,
) -> Result<(), InvalidEscape> {
    match escape {
        '\'' | '"' | '\\' => push_char(units, escape),
        'a' => push_char(units, '\u{07}'),
        'b' => push_char(units, '\u{08}'),
        'f' => push_char(units, '\u{0C}'),
        'n' => push_char(units, '\n'),
        'r' => push_char(units, '\r'),
        't' => push_char(units, '\t'),
        'v' => push_char(units, '\u{0B}'),
        'e' => push_char(units, '\u{1B}'),
        'x' => {
            let (value, digits) = read_digits(cursor, 16, UTF32_DIGITS);
            if digits == 0 {
                return Err(InvalidEscape {
                    escape,
                    requirement: Some("must be followed by at least 1 hexadecimal digit"),
                });
            }
            push_utf32(units, value);
        }
        'u' => {
            let (value, digits) = read_digits(cursor, 16, UTF16_DIGITS);
            if digits < UTF16_DIGITS {
                return Err(InvalidEscape {
                    escape,
                    requirement: Some("must be followed by 4 hexadecimal digits"),
                });
            }
            units.push(truncate(value));
        }
        'U' => {
            let (value, digits) = read_digits(cursor, 16, UTF32_DIGITS);
            if digits < UTF32_DIGITS {
                return Err(InvalidEscape {
                    escape,
                    requirement: Some("must be followed by 8 hexadecimal digits"),
                });
            }
            push_utf32(units, value);
        }
        '0'..='7' => {
            let first = escape.to_digit(8).unwrap_or_default();
            let (rest, digits) = read_digits(cursor, 8, MAX_OCTAL_DIGITS - 1);
            let value = first * 8u32.pow(digits) + rest;
            debug_assert!(value < 512);
            units.push(truncate(value));
        }
        _ => {
            push_char(units, escape);
            return Err(InvalidEscape {
                escape,
                requirement: None,
            });
        }
    }
    Ok(())
}

/// Read up to `max` digits in `radix`. Returns the value and the digit count.
fn read_digits(cursor: &mut Cursor, radix: u32, max: u32) -> (u32, u32) {
    let mut value: u32 = 0;
    let mut digits = 0;
    while digits < max {
        let Some(digit) = cursor.eat_map(|c| c.to_digit(radix)) else {
            break;
        };
        value = value.wrapping_mul(radix).wrapping_add(digit);
        digits += 1;
    }
    (value, digits)
}

#[inline]
fn push_char(units: &mut Vec<u16>, c: char) {
    let mut buf = [0; 2];
    units.extend_from_slice(c.encode_utf16(&mut buf));
}

/// A valid scalar is encoded; anything else keeps its low 16 bits as a raw unit.
#[inline]
fn push_utf32(units: &mut Vec<u16>, value: u32) {
    match char::from_u32(value) {
        Some(c) => push_char(units, c),
        None => units.push(truncate(value)),
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "raw code units keep the low 16 bits by definition"
)]
#[inline]
fn truncate(value: u32) -> u16 {
    value as u16
}
