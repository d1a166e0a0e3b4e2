//! Fuzz target for options file parsing.
//!
//! Feeds arbitrary UTF-8 to the YAML options parser and validates whatever
//! parses, checking for panics.

#![no_main]

use cv3::options::Options;
use cv3::validation::{validate_options, ValidateOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(options) = Options::from_yaml_str(text) {
        let _ = validate_options(&options, &ValidateOptions::default());
    }
});
