//! The restricted VIN character set.
//!
//! ISO 3779 excludes the letters I, O and Q from VINs because they are
//! visually confusable with the digits 1, 0 and 9.

/// A complete VIN is always exactly 17 characters.
pub const VIN_LENGTH: usize = 17;

/// The 33 characters permitted in a VIN (no I, O, Q).
pub const VIN_ALPHABET: &str = "ABCDEFGHJKLMNPRSTUVWXYZ0123456789";

/// Check whether `c` is a permitted VIN character.
pub fn is_vin_char(c: char) -> bool {
    matches!(c, 'A'..='H' | 'J'..='N' | 'P' | 'R'..='Z' | '0'..='9')
}

/// The digit an excluded letter is commonly mistyped for, if any.
///
/// Used to attach a corrective hint to invalid-character errors:
/// I→1, O→0, Q→9.
pub fn confusable_digit(c: char) -> Option<char> {
    match c {
        'I' => Some('1'),
        'O' => Some('0'),
        'Q' => Some('9'),
        _ => None,
    }
}
