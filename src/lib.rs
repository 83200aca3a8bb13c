//! # fahrgestell
//!
//! Structural validation and static decoding of Vehicle Identification
//! Numbers (VINs) — the 17-character identifier defined by ISO 3779.
//!
//! The crate is pure computation: no network, no I/O, no shared state.
//! It validates VIN structure (length, restricted alphabet), verifies the
//! modulo-11 check digit at position 9, and decodes what the VIN positions
//! statically encode: manufacturer via the WMI prefix, world region from
//! the first character, and model year from the tenth.
//!
//! A check-digit mismatch is deliberately a *soft* signal: European-market
//! VINs legitimately do not follow the North-American check-digit
//! convention, so [`ValidationResult::check_digit_valid`] is reported
//! separately from [`ValidationResult::is_valid`].
//!
//! ## Quick Start
//!
//! ```rust
//! use fahrgestell::validate;
//!
//! let result = validate("wbadt63452ck12345");
//! assert!(result.is_valid);
//! assert_eq!(result.normalized_vin.as_deref(), Some("WBADT63452CK12345"));
//! assert_eq!(result.manufacturer, Some("BMW"));
//! assert!(!result.check_digit_valid); // soft warning, not a rejection
//! ```
//!
//! Live-typing input fields use the relaxed incremental predicate:
//!
//! ```rust
//! use fahrgestell::is_partially_valid;
//!
//! assert!(is_partially_valid("WBADT6"));
//! assert!(!is_partially_valid("WBADTQ")); // Q is never a VIN character
//! ```

mod alphabet;
mod check_digit;
mod error;
mod model_year;
mod normalize;
mod partial;
mod region;
mod validate;
mod wmi;

pub use alphabet::{VIN_ALPHABET, VIN_LENGTH, is_vin_char};
pub use check_digit::{expected_check_char, verify_check_digit};
pub use error::VinError;
pub use model_year::model_year;
pub use normalize::normalize;
pub use partial::{PartialInfo, is_partially_valid, partial_info};
pub use region::{Region, region_of_origin};
pub use validate::{ValidationResult, validate};
pub use wmi::wmi_manufacturer;
