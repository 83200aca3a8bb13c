//! Structural validation errors.
//!
//! Malformed input is the expected common case (interactive typing), so
//! every failure is returned as data — this crate never panics on input.

use serde::Serialize;
use thiserror::Error;

use crate::alphabet::confusable_digit;

/// Why a candidate VIN failed structural validation.
///
/// A closed set: callers can exhaustively branch on the kind instead of
/// matching message strings. Positions are stored 0-indexed; messages
/// render them 1-indexed for display.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VinError {
    /// No input left after trimming.
    #[error("no VIN supplied")]
    Empty,

    /// Fewer than 17 characters; recoverable by continued typing.
    #[error("VIN incomplete: {len}/17 characters")]
    TooShort { len: usize },

    /// More than 17 characters.
    #[error("VIN too long: {len} characters, expected 17")]
    TooLong { len: usize },

    /// A character outside the VIN alphabet. Scanning stops at the first
    /// violation; `position` is the 0-indexed character offset.
    #[error("{}", invalid_character_message(.position, .found))]
    InvalidCharacter { position: usize, found: char },
}

impl VinError {
    /// 0-indexed position of the offending character, if this is an
    /// [`VinError::InvalidCharacter`].
    pub fn position(&self) -> Option<usize> {
        match self {
            VinError::InvalidCharacter { position, .. } => Some(*position),
            VinError::Empty | VinError::TooShort { .. } | VinError::TooLong { .. } => None,
        }
    }

    /// Corrective hint for an excluded letter (I→'1', O→'0', Q→'9').
    pub fn suggestion(&self) -> Option<char> {
        match self {
            VinError::InvalidCharacter { found, .. } => confusable_digit(*found),
            VinError::Empty | VinError::TooShort { .. } | VinError::TooLong { .. } => None,
        }
    }
}

fn invalid_character_message(position: &usize, found: &char) -> String {
    match confusable_digit(*found) {
        Some(digit) => format!(
            "invalid character '{found}' at position {} (did you mean '{digit}'?)",
            position + 1
        ),
        None => format!("invalid character '{found}' at position {}", position + 1),
    }
}
