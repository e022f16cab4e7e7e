#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Either envelope is fine; panics are not
        let analysis = cstep::analyze(s);
        let _ = analysis.to_json(false);
    }
});
