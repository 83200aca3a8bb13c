//! Input normalization.

/// Normalize raw VIN input: trim surrounding whitespace, uppercase.
///
/// Always succeeds, even on empty input, and is idempotent. Normalization
/// does not validate — a normalized string may still contain characters
/// outside the VIN alphabet.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}
