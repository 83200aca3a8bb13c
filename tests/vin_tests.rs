//! End-to-end validation tests against the public API.

use fahrgestell::{
    Region, VinError, expected_check_char, is_partially_valid, model_year, normalize, partial_info,
    region_of_origin, validate, verify_check_digit, wmi_manufacturer,
};

// ── Full validation ──────────────────────────────────────────────────────────

#[test]
fn bmw_sample_round_trip() {
    let r = validate("WBADT63452CK12345");
    assert!(r.is_valid);
    assert_eq!(r.normalized_vin.as_deref(), Some("WBADT63452CK12345"));
    assert_eq!(r.manufacturer, Some("BMW"));
    assert!(r.is_known_regional_vehicle);
}

#[test]
fn lowercase_and_padding_normalized() {
    let r = validate("\t wbadt63452ck12345 \n");
    assert!(r.is_valid);
    assert_eq!(r.normalized_vin.as_deref(), Some("WBADT63452CK12345"));
}

#[test]
fn empty_and_whitespace_only() {
    assert_eq!(validate("").error, Some(VinError::Empty));
    assert_eq!(validate("   ").error, Some(VinError::Empty));
}

#[test]
fn boundary_lengths() {
    let sixteen = validate("WBADT63452CK1234");
    assert_eq!(sixteen.error, Some(VinError::TooShort { len: 16 }));
    assert!(sixteen.error.unwrap().to_string().contains("16/17"));

    let eighteen = validate("WBADT63452CK123456");
    assert_eq!(eighteen.error, Some(VinError::TooLong { len: 18 }));

    assert!(validate("WBADT63452CK12345").is_valid);
}

#[test]
fn invalid_character_position_and_hint() {
    // 'I' at 0-indexed position 9.
    let r = validate("WBADT6345ICK12345");
    let err = r.error.unwrap();
    assert_eq!(err.position(), Some(9));
    assert_eq!(err.suggestion(), Some('1'));
    // Messages render 1-indexed.
    assert_eq!(
        err.to_string(),
        "invalid character 'I' at position 10 (did you mean '1'?)"
    );
}

#[test]
fn mercedes_and_volkswagen_prefixes() {
    let r = validate("WDBUF56X48B123456");
    assert!(r.is_valid);
    assert_eq!(r.manufacturer, Some("Mercedes-Benz"));

    let r = validate("WVWZZZ1JZXW000001");
    assert!(r.is_valid);
    assert_eq!(r.manufacturer, Some("Volkswagen"));
}

#[test]
fn unknown_wmi_is_not_an_error() {
    let r = validate("1HGCM82633A004352");
    assert!(r.is_valid);
    assert_eq!(r.manufacturer, None);
    assert!(!r.is_known_regional_vehicle);
}

// ── Check digit ──────────────────────────────────────────────────────────────

#[test]
fn check_digit_verified_on_valid_vins() {
    // North-American VIN with a correct check digit ('X', remainder 10).
    let r = validate("1M8GDM9AXKP042788");
    assert!(r.is_valid);
    assert!(r.check_digit_valid);
}

#[test]
fn check_digit_failure_does_not_invalidate() {
    let r = validate("WBADT63452CK12345");
    assert!(r.is_valid);
    assert!(!r.check_digit_valid);
}

#[test]
fn expected_check_char_exposed_for_fixups() {
    assert_eq!(expected_check_char("WBADT63452CK12345"), Some('6'));
    assert!(verify_check_digit("WBADT63462CK12345"));
}

// ── Partial input ────────────────────────────────────────────────────────────

#[test]
fn too_short_attaches_partial_info() {
    let r = validate("WBA");
    assert_eq!(r.error, Some(VinError::TooShort { len: 3 }));
    let p = r.partial_info.unwrap();
    assert_eq!(p.wmi, "WBA");
    assert_eq!(p.manufacturer, Some("BMW"));
    assert_eq!(p.country_of_origin_region, Some(Region::Europe));
    assert_eq!(p.model_year, None);
}

#[test]
fn partial_model_year_at_ten_characters() {
    let p = partial_info("WBADT6345L").unwrap();
    assert_eq!(p.model_year, Some(2020));
}

#[test]
fn keystroke_gating() {
    assert!(is_partially_valid(""));
    assert!(is_partially_valid("W"));
    assert!(is_partially_valid("WBADT6"));
    assert!(!is_partially_valid("WBADTQ"));
    assert!(!is_partially_valid("WBADT63452CK123456"));
}

// ── Direct table access ──────────────────────────────────────────────────────

#[test]
fn direct_lookups() {
    assert_eq!(wmi_manufacturer("WP0"), Some("Porsche"));
    assert_eq!(wmi_manufacturer("1HG"), None);
    assert_eq!(region_of_origin('J'), Some(Region::Asia));
    assert_eq!(model_year('R'), Some(2024));
}

#[test]
fn normalize_is_exposed_and_idempotent() {
    assert_eq!(normalize(" wba "), "WBA");
    assert_eq!(normalize(&normalize(" wba ")), "WBA");
}

// ── Serialization for the app surfaces ───────────────────────────────────────

#[test]
fn result_json_shape() {
    let json = serde_json::to_value(validate("WBADT63452CK12345")).unwrap();
    assert_eq!(json["is_valid"], true);
    assert_eq!(json["manufacturer"], "BMW");
    assert_eq!(json["check_digit_valid"], false);
    assert_eq!(json["error"], serde_json::Value::Null);
    assert_eq!(json["partial_info"]["country_of_origin_region"], "Europe");
}

#[test]
fn error_json_shape() {
    let json = serde_json::to_value(validate("WBADT6345ICK12345")).unwrap();
    assert_eq!(json["error"]["kind"], "invalid_character");
    assert_eq!(json["error"]["position"], 9);
    assert_eq!(json["error"]["found"], "I");
}
