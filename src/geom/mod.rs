//! Box and point normalization.
//!
//! Every drawing or cropping call eventually needs a box as absolute
//! `(x0, y0, x1, y1)` integer pixels. This module turns the friendlier forms
//! callers write (`xywh`, `ccwh`, legacy `yyxx`, relative fractions, float
//! coordinates) into that canonical form and back.
//!
//! # Design Principles
//!
//! 1. **Type Safety**: [`BBoxXYXY`] and [`Point`] carry a [`Pixel`] or
//!    [`Relative`] marker so the two unit systems cannot be mixed.
//!
//! 2. **One Rounding Rule**: values are rounded to the nearest integer
//!    (halves away from zero) exactly once, at the final pixel step.
//!
//! 3. **No Silent Fixes**: a negative extent or a missing frame is an error,
//!    never clamped or swapped.
//!
//! # Example
//!
//! ```
//! use cv3::geom::{to_xyxy, xyxy_to, BoxMode, Frame};
//!
//! let frame = Some(Frame::new(640, 480));
//! let px = to_xyxy((0.5, 0.5, 0.25, 0.25), BoxMode::Ccwh, true, frame).unwrap();
//! assert_eq!(px, (240, 180, 400, 300));
//!
//! let back = xyxy_to(px, BoxMode::Ccwh, true, frame).unwrap();
//! assert_eq!(back, (0.5, 0.5, 0.25, 0.25));
//! ```

mod bbox;
mod frame;
mod mode;
mod normalize;
mod point;
mod space;

pub use bbox::{BBoxXYXY, BoxTuple, PixelBox};
pub use frame::{abs2rel, rel2abs, Frame};
pub use mode::BoxMode;
pub use normalize::{convert_box, to_xyxy, xyxy_to};
pub use point::{point_to_abs, point_to_rel, Point};
pub use space::{Pixel, Relative};
