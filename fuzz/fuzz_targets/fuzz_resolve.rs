#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First line is the dotted path, the rest is the document.
    if let Ok(s) = std::str::from_utf8(data) {
        let (path, xml) = s.split_once('\n').unwrap_or(("", s));
        if let Ok(tree) = inprofile::xml::parse_str(xml) {
            let _ = inprofile::core::resolve(&tree, path);
        }
    }
});
