//! Incremental validation for live-typing input fields.
//!
//! Input fields call [`is_partially_valid`] on every keystroke to decide
//! whether to accept the character at all, and [`partial_info`] to render
//! an inline preview ("Looks like a BMW from Europe…") before all 17
//! characters are entered.

use serde::Serialize;

use crate::alphabet::{VIN_LENGTH, is_vin_char};
use crate::model_year::model_year;
use crate::normalize::normalize;
use crate::region::{Region, region_of_origin};
use crate::wmi::wmi_manufacturer;

/// What can be decoded from an incomplete VIN prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartialInfo {
    /// Always exactly the first 3 characters of the supplied prefix.
    pub wmi: String,
    /// Manufacturer name when the WMI is in the known-prefix table.
    pub manufacturer: Option<&'static str>,
    /// ISO 3779 region band of the first character.
    pub country_of_origin_region: Option<Region>,
    /// Model year, available once the 10th character is present.
    pub model_year: Option<u16>,
}

/// Relaxed predicate for a VIN still being typed.
///
/// True for the empty string, and for any prefix of at most 17
/// characters whose every character (after normalization) is in the VIN
/// alphabet. Callers use this to reject keystrokes outright rather than
/// flag them afterwards.
pub fn is_partially_valid(prefix: &str) -> bool {
    let prefix = normalize(prefix);
    prefix.chars().count() <= VIN_LENGTH && prefix.chars().all(is_vin_char)
}

/// Best-effort decode of an incomplete VIN.
///
/// Returns `Some` once at least 3 characters are present. The WMI is
/// taken verbatim from the prefix; lookups that miss simply leave their
/// field empty.
pub fn partial_info(prefix: &str) -> Option<PartialInfo> {
    partial_info_normalized(&normalize(prefix))
}

/// [`partial_info`] for input that is already normalized.
pub(crate) fn partial_info_normalized(vin: &str) -> Option<PartialInfo> {
    let mut chars = vin.chars();
    let wmi: String = chars.by_ref().take(3).collect();
    if wmi.chars().count() < 3 {
        return None;
    }
    Some(PartialInfo {
        manufacturer: wmi_manufacturer(&wmi),
        country_of_origin_region: vin.chars().next().and_then(region_of_origin),
        model_year: vin.chars().nth(9).and_then(model_year),
        wmi,
    })
}
