//! Typed points using PhantomData for compile-time space safety.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use super::frame::{abs2rel, rel2abs, round_px, Frame};
use super::{Pixel, Relative};
use crate::error::Cv3Error;

/// A 2D point tagged with its coordinate space.
///
/// `TSpace` is [`Pixel`] or [`Relative`].
#[derive(Clone, Copy, PartialEq)]
pub struct Point<TSpace> {
    pub x: f64,
    pub y: f64,
    _space: PhantomData<TSpace>,
}

impl<TSpace> Point<TSpace> {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            _space: PhantomData,
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Point<Relative> {
    /// Scales the point by the frame and rounds to whole pixels.
    pub fn to_pixel(&self, frame: Frame) -> Result<(i64, i64), Cv3Error> {
        Ok((rel2abs(self.x, frame.width)?, rel2abs(self.y, frame.height)?))
    }
}

impl Point<Pixel> {
    pub fn to_relative(&self, frame: Frame) -> Result<Point<Relative>, Cv3Error> {
        Ok(Point::new(
            abs2rel(self.x, frame.width)?,
            abs2rel(self.y, frame.height)?,
        ))
    }
}

impl<TSpace> std::fmt::Debug for Point<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Point")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<TSpace> Default for Point<TSpace> {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

// Hand-written so that TSpace needs no serde bounds.
impl<TSpace> Serialize for Point<TSpace> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.x, self.y).serialize(serializer)
    }
}

impl<'de, TSpace> Deserialize<'de> for Point<TSpace> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (x, y) = <(f64, f64)>::deserialize(deserializer)?;
        Ok(Point::new(x, y))
    }
}

/// Resolves a drawing point to absolute pixels.
///
/// With `rel = false` the point is already in pixels and is only rounded, so
/// float inputs like `(10.4, 7.6)` are accepted.
pub fn point_to_abs(
    point: (f64, f64),
    rel: bool,
    frame: Option<Frame>,
) -> Result<(i64, i64), Cv3Error> {
    if rel {
        let frame = frame.ok_or(Cv3Error::MissingFrame)?;
        Point::<Relative>::new(point.0, point.1).to_pixel(frame)
    } else {
        Ok((round_px(point.0)?, round_px(point.1)?))
    }
}

/// Inverse of [`point_to_abs`]: expresses a pixel point in the requested space.
pub fn point_to_rel(
    point: (i64, i64),
    rel: bool,
    frame: Option<Frame>,
) -> Result<(f64, f64), Cv3Error> {
    let px = Point::<Pixel>::new(point.0 as f64, point.1 as f64);
    if rel {
        let frame = frame.ok_or(Cv3Error::MissingFrame)?;
        let r = px.to_relative(frame)?;
        Ok((r.x, r.y))
    } else {
        Ok((px.x, px.y))
    }
}
