//! Fuzz target for box normalization.
//!
//! Interprets the input as a mode selector, a frame and four floats and
//! runs the full to_xyxy/xyxy_to round trip, checking for panics and that
//! only finite input is ever accepted.

#![no_main]

use cv3::geom::{to_xyxy, xyxy_to, BoxMode, Frame};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 1 + 8 + 32 {
        return;
    }

    let mode = BoxMode::ALL[(data[0] % 4) as usize];
    let rel = data[0] & 0x80 != 0;
    let frame = Frame::new(
        i32::from_le_bytes([data[1], data[2], data[3], data[4]]) as i64,
        i32::from_le_bytes([data[5], data[6], data[7], data[8]]) as i64,
    );

    let mut values = [0f64; 4];
    for (i, v) in values.iter_mut().enumerate() {
        let start = 9 + i * 8;
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&data[start..start + 8]);
        *v = f64::from_le_bytes(bytes);
    }

    let bbox = (values[0], values[1], values[2], values[3]);
    if let Ok(pixels) = to_xyxy(bbox, mode, rel, Some(frame)) {
        assert!(values.iter().all(|v| v.is_finite()), "accepted {:?}", bbox);
        let _ = xyxy_to(pixels, mode, rel, Some(frame));
    }
});
