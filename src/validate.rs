//! Full structural validation and result assembly.

use serde::Serialize;

use crate::alphabet::{VIN_LENGTH, is_vin_char};
use crate::check_digit::verify_check_digit;
use crate::error::VinError;
use crate::normalize::normalize;
use crate::partial::{PartialInfo, partial_info_normalized};

/// The outcome of validating one candidate VIN.
///
/// A fresh value object per call; nothing is cached or shared. Note the
/// two independent signals: `is_valid` covers structure (length and
/// alphabet) only, while `check_digit_valid` is a separate soft warning —
/// a structurally valid VIN may still fail the check-digit convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Length is exactly 17 and every character is in the VIN alphabet.
    pub is_valid: bool,
    /// Uppercased, trimmed VIN; present only when valid.
    pub normalized_vin: Option<String>,
    /// Populated only on failure.
    pub error: Option<VinError>,
    /// Manufacturer name when the WMI prefix is in the known table.
    pub manufacturer: Option<&'static str>,
    /// Whether the manufacturer lookup succeeded.
    pub is_known_regional_vehicle: bool,
    /// Modulo-11 check-digit verification; computed whenever the VIN has
    /// full structural length.
    pub check_digit_valid: bool,
    /// Best-effort decode, available once ≥ 3 characters were supplied.
    pub partial_info: Option<PartialInfo>,
}

impl ValidationResult {
    fn failure(error: VinError, partial_info: Option<PartialInfo>) -> Self {
        ValidationResult {
            is_valid: false,
            normalized_vin: None,
            error: Some(error),
            manufacturer: None,
            is_known_regional_vehicle: false,
            check_digit_valid: false,
            partial_info,
        }
    }
}

/// Validate a candidate VIN.
///
/// Never panics: malformed input is the expected common case and always
/// comes back as a structured result. Length checks short-circuit before
/// the character scan; a too-short prefix still gets best-effort
/// [`PartialInfo`] so interactive callers can preview while typing.
pub fn validate(raw: &str) -> ValidationResult {
    let vin = normalize(raw);
    let len = vin.chars().count();

    if len == 0 {
        return ValidationResult::failure(VinError::Empty, None);
    }
    if len < VIN_LENGTH {
        let partial = partial_info_normalized(&vin);
        return ValidationResult::failure(VinError::TooShort { len }, partial);
    }
    if len > VIN_LENGTH {
        return ValidationResult::failure(VinError::TooLong { len }, None);
    }

    // First violation only, scanning left to right.
    if let Some((position, found)) = vin.chars().enumerate().find(|&(_, c)| !is_vin_char(c)) {
        return ValidationResult::failure(VinError::InvalidCharacter { position, found }, None);
    }

    let partial = partial_info_normalized(&vin);
    let manufacturer = partial.as_ref().and_then(|p| p.manufacturer);
    ValidationResult {
        is_valid: true,
        check_digit_valid: verify_check_digit(&vin),
        normalized_vin: Some(vin),
        error: None,
        manufacturer,
        is_known_regional_vehicle: manufacturer.is_some(),
        partial_info: partial,
    }
}
