//! Fuzz target for color expression parsing and resolution.
//!
//! Feeds arbitrary UTF-8 to the color expression parser and resolves
//! whatever parses, checking for panics.

#![no_main]

use cv3::color::{resolve_color, ChannelCount, ColorExpr, ColorOrder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(expr) = text.parse::<ColorExpr>() {
        for channels in [ChannelCount::Gray, ChannelCount::Color, ChannelCount::ColorAlpha] {
            let _ = resolve_color(&expr, channels, ColorOrder::Bgr);
        }
    }
});
