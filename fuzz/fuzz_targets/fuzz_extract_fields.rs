#![no_main]
use cert_authenticity::analyzers::ExtractedFields;
use libfuzzer_sys::fuzz_target;

/// Fuzz certificate field extraction with arbitrary text.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = ExtractedFields::parse(s);
    }
});
