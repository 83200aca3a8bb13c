//! ISO 3779 check-digit verification (position 9, modulo 11).

use crate::alphabet::VIN_LENGTH;

/// Per-position weights for the check-digit sum. Index 8 is the
/// check-digit slot itself and weighs 0.
const WEIGHTS: [u32; VIN_LENGTH] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Transliterate a VIN character to its check-digit value (0–9).
///
/// The letter values follow the published table verbatim — they are not
/// alphabetical (I, O and Q are skipped, and some values repeat).
fn transliterate(c: char) -> Option<u32> {
    let value = match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A' => 1,
        'B' => 2,
        'C' => 3,
        'D' => 4,
        'E' => 5,
        'F' => 6,
        'G' => 7,
        'H' => 8,
        'J' => 1,
        'K' => 2,
        'L' => 3,
        'M' => 4,
        'N' => 5,
        'P' => 7,
        'R' => 9,
        'S' => 2,
        'T' => 3,
        'U' => 4,
        'V' => 5,
        'W' => 6,
        'X' => 7,
        'Y' => 8,
        'Z' => 9,
        _ => return None,
    };
    Some(value)
}

/// Compute the check character a 17-character VIN should carry at
/// position 9: the weighted transliteration sum modulo 11, rendered as
/// `'X'` for remainder 10 and the decimal digit otherwise.
///
/// Returns `None` if the input is not 17 characters long or contains a
/// character without a transliteration value.
pub fn expected_check_char(vin: &str) -> Option<char> {
    let mut sum: u32 = 0;
    let mut count = 0;
    for (i, c) in vin.chars().enumerate() {
        if i >= VIN_LENGTH {
            return None;
        }
        sum += transliterate(c)? * WEIGHTS[i];
        count += 1;
    }
    if count != VIN_LENGTH {
        return None;
    }
    let remainder = sum % 11;
    if remainder == 10 {
        Some('X')
    } else {
        char::from_digit(remainder, 10)
    }
}

/// Verify the check digit of a 17-character VIN.
///
/// Returns `false` rather than panicking for inputs that cannot be
/// transliterated or have the wrong length. A `false` here does not make
/// the VIN structurally invalid — European-market VINs often do not
/// follow the North-American check-digit convention.
pub fn verify_check_digit(vin: &str) -> bool {
    match (expected_check_char(vin), vin.chars().nth(8)) {
        (Some(expected), Some(actual)) => expected == actual,
        _ => false,
    }
}
