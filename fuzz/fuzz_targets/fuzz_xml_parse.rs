#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Rejecting input is fine; panicking is a bug.
        let _ = inprofile::xml::parse_str(s);
    }
});
