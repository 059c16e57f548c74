#![no_main]

use bretz::{parse_location, ParseFailure};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    match parse_location(text) {
        Ok(location) => {
            assert!(!location.name.is_empty());
            assert!(!location.section.as_slice().is_empty());
            let reparsed = parse_location(&location.canonical_line());
            assert_eq!(reparsed.as_ref().map(|l| &l.section), Ok(&location.section));
        },
        Err(failure) => {
            if let Some(position) = failure.position() {
                assert!(position <= text.trim().len());
            }
            if text.trim().is_empty() {
                assert_eq!(failure, ParseFailure::EmptyInput);
            }
        },
    }
});
