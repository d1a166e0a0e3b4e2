#![allow(dead_code)]

use cv3::geom::{BBoxXYXY, BoxMode, BoxTuple, Frame, Pixel, Relative};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

/// Allowed error per coordinate, in pixels, after one rounding step.
pub const PIXEL_TOLERANCE: f64 = 1.0 + 1e-9;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(256);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn arb_mode() -> impl Strategy<Value = BoxMode> {
    prop::sample::select(BoxMode::ALL.to_vec())
}

pub fn arb_frame() -> impl Strategy<Value = Frame> {
    (1i64..=4096, 1i64..=4096).prop_map(|(w, h)| Frame::new(w, h))
}

/// A well-formed pixel box with float corners, written in `mode`.
pub fn arb_pixel_box(mode: BoxMode) -> impl Strategy<Value = BoxTuple> {
    (
        -100.0f64..2000.0,
        -100.0f64..2000.0,
        0.0f64..1000.0,
        0.0f64..1000.0,
    )
        .prop_map(move |(x, y, w, h)| BBoxXYXY::<Pixel>::from_xywh(x, y, w, h).to_mode(mode))
}

/// A well-formed pixel box with integer corners, in XYXY.
pub fn arb_integer_box() -> impl Strategy<Value = (i64, i64, i64, i64)> {
    (-100i64..2000, -100i64..2000, 0i64..1000, 0i64..1000)
        .prop_map(|(x, y, w, h)| (x, y, x + w, y + h))
}

/// A well-formed relative box, written in `mode`. Values may leave [0, 1].
pub fn arb_relative_box(mode: BoxMode) -> impl Strategy<Value = BoxTuple> {
    (-0.2f64..1.0, -0.2f64..1.0, 0.0f64..1.2, 0.0f64..1.2)
        .prop_map(move |(x, y, w, h)| BBoxXYXY::<Relative>::from_xywh(x, y, w, h).to_mode(mode))
}

/// Which axis each coordinate of a box in `mode` lies along.
pub fn axes(mode: BoxMode) -> [Axis; 4] {
    match mode {
        BoxMode::Yyxx => [Axis::Y, Axis::Y, Axis::X, Axis::X],
        _ => [Axis::X, Axis::Y, Axis::X, Axis::Y],
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Axis {
    X,
    Y,
}

pub fn as_array(b: BoxTuple) -> [f64; 4] {
    [b.0, b.1, b.2, b.3]
}

/// Checks every coordinate of `actual` against `expected` within
/// `tolerance` pixels, scaling relative values by `frame` when given.
pub fn assert_box_close(
    mode: BoxMode,
    expected: BoxTuple,
    actual: BoxTuple,
    frame: Option<Frame>,
    tolerance: f64,
) -> Result<(), String> {
    for (i, ((e, a), axis)) in as_array(expected)
        .iter()
        .zip(as_array(actual))
        .zip(axes(mode))
        .enumerate()
    {
        let scale = match (frame, axis) {
            (Some(f), Axis::X) => f.width as f64,
            (Some(f), Axis::Y) => f.height as f64,
            (None, _) => 1.0,
        };
        let diff = (e - a).abs() * scale;
        if diff > tolerance {
            return Err(format!(
                "{mode} coordinate {i}: expected {e}, got {a} (off by {diff} px)"
            ));
        }
    }
    Ok(())
}
