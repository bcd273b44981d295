#![no_main]

use libfuzzer_sys::fuzz_target;

use santa_core::participant::Roster;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Parsing and validating arbitrary input must never panic.
    let _ = Roster::from_json(text);
});
