#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — malformed input is the expected common case.
        let first = fahrgestell::validate(s);
        let second = fahrgestell::validate(s);
        assert_eq!(first, second);
    }
});
