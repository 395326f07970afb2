#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tree) = inprofile::xml::parse_str(s) {
            // Extraction is a total function over whatever parsed.
            let _ = inprofile::core::normalize(&tree);
            let _ = inprofile::core::try_normalize(&tree);
        }
    }
});
