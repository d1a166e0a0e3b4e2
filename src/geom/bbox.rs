//! Bounding boxes in canonical XYXY form, with conversions to every mode.

use serde::{Deserialize, Serialize};

use super::frame::{round_px, Frame};
use super::mode::BoxMode;
use super::point::Point;
use super::{Pixel, Relative};
use crate::error::Cv3Error;

/// A box as four plain numbers, in whatever [`BoxMode`] the caller uses.
pub type BoxTuple = (f64, f64, f64, f64);

/// A box in absolute integer pixels, `(x0, y0, x1, y1)`.
pub type PixelBox = (i64, i64, i64, i64);

/// An axis-aligned box stored as (left, top) and (right, bottom) corners.
///
/// The constructors do not check ordering, so a malformed box can still be
/// represented and reported. [`BBoxXYXY::check_extent`] rejects it.
#[derive(Clone, Copy, PartialEq)]
pub struct BBoxXYXY<TSpace> {
    pub min: Point<TSpace>,
    pub max: Point<TSpace>,
}

impl<TSpace> BBoxXYXY<TSpace> {
    #[inline]
    pub fn new(min: Point<TSpace>, max: Point<TSpace>) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn from_xyxy(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[inline]
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_xyxy(x, y, x + width, y + height)
    }

    #[inline]
    pub fn from_ccwh(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        Self::from_xyxy(cx - hw, cy - hh, cx + hw, cy + hh)
    }

    /// Legacy axis-swapped form: (top, bottom, left, right).
    #[inline]
    pub fn from_yyxx(y0: f64, y1: f64, x0: f64, x1: f64) -> Self {
        Self::from_xyxy(x0, y0, x1, y1)
    }

    /// Builds a box from four numbers written in `mode`.
    pub fn from_mode(mode: BoxMode, (a, b, c, d): BoxTuple) -> Self {
        match mode {
            BoxMode::Xyxy => Self::from_xyxy(a, b, c, d),
            BoxMode::Xywh => Self::from_xywh(a, b, c, d),
            BoxMode::Ccwh => Self::from_ccwh(a, b, c, d),
            BoxMode::Yyxx => Self::from_yyxx(a, b, c, d),
        }
    }

    #[inline]
    pub fn xmin(&self) -> f64 {
        self.min.x
    }

    #[inline]
    pub fn ymin(&self) -> f64 {
        self.min.y
    }

    #[inline]
    pub fn xmax(&self) -> f64 {
        self.max.x
    }

    #[inline]
    pub fn ymax(&self) -> f64 {
        self.max.y
    }

    /// Negative if the box is malformed (xmax < xmin).
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Negative if the box is malformed (ymax < ymin).
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Fails with `InvalidCoordinate` on the first NaN or infinite corner value.
    pub fn check_finite(&self) -> Result<(), Cv3Error> {
        if self.is_finite() {
            return Ok(());
        }
        let (x0, y0, x1, y1) = self.to_xyxy();
        let bad = [x0, y0, x1, y1]
            .into_iter()
            .find(|v| !v.is_finite())
            .unwrap_or(f64::NAN);
        Err(Cv3Error::InvalidCoordinate(bad))
    }

    /// Fails with `InvalidExtent` if width or height is negative.
    ///
    /// Zero-extent boxes (lines, points) are accepted.
    pub fn check_extent(&self) -> Result<(), Cv3Error> {
        if self.is_ordered() {
            Ok(())
        } else {
            Err(Cv3Error::InvalidExtent {
                width: self.width(),
                height: self.height(),
            })
        }
    }

    #[inline]
    pub fn to_xyxy(&self) -> BoxTuple {
        (self.xmin(), self.ymin(), self.xmax(), self.ymax())
    }

    #[inline]
    pub fn to_xywh(&self) -> BoxTuple {
        (self.xmin(), self.ymin(), self.width(), self.height())
    }

    #[inline]
    pub fn to_ccwh(&self) -> BoxTuple {
        (
            (self.xmin() + self.xmax()) / 2.0,
            (self.ymin() + self.ymax()) / 2.0,
            self.width(),
            self.height(),
        )
    }

    #[inline]
    pub fn to_yyxx(&self) -> BoxTuple {
        (self.ymin(), self.ymax(), self.xmin(), self.xmax())
    }

    /// Writes the box as four numbers in `mode`.
    pub fn to_mode(&self, mode: BoxMode) -> BoxTuple {
        match mode {
            BoxMode::Xyxy => self.to_xyxy(),
            BoxMode::Xywh => self.to_xywh(),
            BoxMode::Ccwh => self.to_ccwh(),
            BoxMode::Yyxx => self.to_yyxx(),
        }
    }
}

impl BBoxXYXY<Pixel> {
    /// Divides by the frame. Fails if a frame side is not positive.
    pub fn to_relative(&self, frame: Frame) -> Result<BBoxXYXY<Relative>, Cv3Error> {
        frame.check()?;
        let (w, h) = (frame.width as f64, frame.height as f64);
        Ok(BBoxXYXY::from_xyxy(
            self.min.x / w,
            self.min.y / h,
            self.max.x / w,
            self.max.y / h,
        ))
    }

    /// Rounds every corner to the nearest whole pixel.
    ///
    /// Fails with `InvalidCoordinate` if a corner does not fit in `i64`.
    pub fn round(&self) -> Result<PixelBox, Cv3Error> {
        Ok((
            round_px(self.min.x)?,
            round_px(self.min.y)?,
            round_px(self.max.x)?,
            round_px(self.max.y)?,
        ))
    }
}

impl From<PixelBox> for BBoxXYXY<Pixel> {
    fn from((x0, y0, x1, y1): PixelBox) -> Self {
        BBoxXYXY::from_xyxy(x0 as f64, y0 as f64, x1 as f64, y1 as f64)
    }
}

impl BBoxXYXY<Relative> {
    /// Multiplies by the frame without rounding.
    pub fn to_pixel(&self, frame: Frame) -> Result<BBoxXYXY<Pixel>, Cv3Error> {
        frame.check()?;
        let (w, h) = (frame.width as f64, frame.height as f64);
        Ok(BBoxXYXY::from_xyxy(
            self.min.x * w,
            self.min.y * h,
            self.max.x * w,
            self.max.y * h,
        ))
    }
}

impl<TSpace> std::fmt::Debug for BBoxXYXY<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BBoxXYXY")
            .field("x0", &self.min.x)
            .field("y0", &self.min.y)
            .field("x1", &self.max.x)
            .field("y1", &self.max.y)
            .finish()
    }
}

impl<TSpace> Default for BBoxXYXY<TSpace> {
    fn default() -> Self {
        Self::from_xyxy(0.0, 0.0, 0.0, 0.0)
    }
}

// Serialized as a flat [x0, y0, x1, y1] array; TSpace needs no serde bounds.
impl<TSpace> Serialize for BBoxXYXY<TSpace> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.min.x, self.min.y, self.max.x, self.max.y].serialize(serializer)
    }
}

impl<'de, TSpace> Deserialize<'de> for BBoxXYXY<TSpace> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [x0, y0, x1, y1] = <[f64; 4]>::deserialize(deserializer)?;
        Ok(BBoxXYXY::from_xyxy(x0, y0, x1, y1))
    }
}
