//! Frame dimensions and single-axis relative/absolute conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Cv3Error;

/// The (width, height) of the image that relative coordinates refer to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    pub width: i64,
    pub height: i64,
}

impl Frame {
    /// Creates a frame. Dimensions are checked when the frame is used.
    #[inline]
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// Returns `Err(InvalidDimension)` if either side is not positive.
    pub fn check(&self) -> Result<(), Cv3Error> {
        check_dimension(self.width)?;
        check_dimension(self.height)
    }
}

impl From<(i64, i64)> for Frame {
    fn from((width, height): (i64, i64)) -> Self {
        Self::new(width, height)
    }
}

impl From<(u32, u32)> for Frame {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(i64::from(width), i64::from(height))
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parses `WIDTHxHEIGHT`, e.g. `640x480`.
impl FromStr for Frame {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
        let width = w
            .trim()
            .parse::<i64>()
            .map_err(|e| format!("invalid frame width '{}': {}", w, e))?;
        let height = h
            .trim()
            .parse::<i64>()
            .map_err(|e| format!("invalid frame height '{}': {}", h, e))?;
        Ok(Frame::new(width, height))
    }
}

fn check_dimension(dimension: i64) -> Result<(), Cv3Error> {
    if dimension <= 0 {
        Err(Cv3Error::InvalidDimension(dimension))
    } else {
        Ok(())
    }
}

/// Converts a relative coordinate to an absolute pixel coordinate.
///
/// Rounds to the nearest integer (halves away from zero). The value is not
/// clamped: `rel2abs(1.2, 100)` is `120`. A non-finite value, or one whose
/// pixel position overflows `i64`, fails with `InvalidCoordinate`.
pub fn rel2abs(value: f64, dimension: i64) -> Result<i64, Cv3Error> {
    check_dimension(dimension)?;
    if !value.is_finite() {
        return Err(Cv3Error::InvalidCoordinate(value));
    }
    round_px(value * dimension as f64)
}

/// Converts an absolute pixel coordinate to a relative one.
pub fn abs2rel(value: f64, dimension: i64) -> Result<f64, Cv3Error> {
    check_dimension(dimension)?;
    Ok(value / dimension as f64)
}

// 2^63; `i64::MAX` itself is not representable as f64.
const PIXEL_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// The single rounding rule used for every absolute-pixel result.
///
/// `as i64` saturates, so range is checked first.
#[inline]
pub(crate) fn round_px(value: f64) -> Result<i64, Cv3Error> {
    let rounded = value.round();
    if (-PIXEL_LIMIT..PIXEL_LIMIT).contains(&rounded) {
        Ok(rounded as i64)
    } else {
        Err(Cv3Error::InvalidCoordinate(value))
    }
}
