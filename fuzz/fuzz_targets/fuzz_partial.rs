#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = fahrgestell::is_partially_valid(s);
        let _ = fahrgestell::partial_info(s);
    }
});
