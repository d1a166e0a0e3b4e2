//! Coordinate space marker types.
//!
//! Zero-sized types used as type parameters so that absolute pixel boxes and
//! relative (fraction-of-frame) boxes cannot be mixed at compile time.

use std::fmt;

/// Marker for absolute pixel coordinates, origin at the top-left corner.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {}

/// Marker for relative coordinates, where 0.0 and 1.0 are the frame edges.
///
/// Values outside `[0, 1]` are allowed and land outside the frame once
/// scaled.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relative {}

impl fmt::Debug for Pixel {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl fmt::Debug for Relative {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}
