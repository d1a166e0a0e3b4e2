//! Box normalization to and from canonical absolute XYXY pixels.
//!
//! Drawing and cropping collaborators consume `(x0, y0, x1, y1)` integer
//! pixels. Callers may hand in boxes in any [`BoxMode`], in relative or
//! absolute units, with float coordinates. Rounding happens exactly once, at
//! the final absolute-pixel step, so relative values never accumulate error.

use super::bbox::{BBoxXYXY, BoxTuple, PixelBox};
use super::frame::Frame;
use super::mode::BoxMode;
use super::{Pixel, Relative};
use crate::error::Cv3Error;

/// Converts a box written in `mode` to absolute XYXY pixels.
///
/// # Errors
///
/// - `MissingFrame` if `rel` is set and no frame is given
/// - `InvalidDimension` if a frame side is not positive
/// - `InvalidCoordinate` if a value is NaN or infinite, or its pixel
///   position does not fit in `i64`
/// - `InvalidExtent` if the box has negative width or height
///
/// # Example
///
/// ```
/// use cv3::geom::{to_xyxy, BoxMode, Frame};
///
/// let px = to_xyxy((10.0, 20.0, 30.0, 40.0), BoxMode::Xywh, false, None).unwrap();
/// assert_eq!(px, (10, 20, 40, 60));
///
/// let frame = Frame::new(600, 400);
/// let px = to_xyxy((0.1, 0.2, 0.4, 0.45), BoxMode::Xyxy, true, Some(frame)).unwrap();
/// assert_eq!(px, (60, 80, 240, 180));
/// ```
pub fn to_xyxy(
    bbox: BoxTuple,
    mode: BoxMode,
    rel: bool,
    frame: Option<Frame>,
) -> Result<PixelBox, Cv3Error> {
    let pixel = if rel {
        let frame = frame.ok_or(Cv3Error::MissingFrame)?;
        let relative = BBoxXYXY::<Relative>::from_mode(mode, bbox);
        relative.check_finite()?;
        relative.to_pixel(frame)?
    } else {
        BBoxXYXY::<Pixel>::from_mode(mode, bbox)
    };
    pixel.check_finite()?;
    pixel.check_extent()?;
    pixel.round()
}

/// Inverse of [`to_xyxy`]: writes an absolute XYXY pixel box in `mode`,
/// optionally as fractions of `frame`.
///
/// Same error conditions as [`to_xyxy`].
pub fn xyxy_to(
    bbox: PixelBox,
    mode: BoxMode,
    rel: bool,
    frame: Option<Frame>,
) -> Result<BoxTuple, Cv3Error> {
    let pixel = BBoxXYXY::<Pixel>::from(bbox);
    pixel.check_extent()?;
    if rel {
        let frame = frame.ok_or(Cv3Error::MissingFrame)?;
        Ok(pixel.to_relative(frame)?.to_mode(mode))
    } else {
        Ok(pixel.to_mode(mode))
    }
}

/// Converts between any two modes and unit systems via absolute pixels.
pub fn convert_box(
    bbox: BoxTuple,
    from: (BoxMode, bool),
    to: (BoxMode, bool),
    frame: Option<Frame>,
) -> Result<BoxTuple, Cv3Error> {
    let px = to_xyxy(bbox, from.0, from.1, frame)?;
    xyxy_to(px, to.0, to.1, frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xywh_scenario() {
        assert_eq!(
            to_xyxy((10.0, 20.0, 30.0, 40.0), BoxMode::Xywh, false, None).unwrap(),
            (10, 20, 40, 60)
        );
    }

    #[test]
    fn test_relative_scenario() {
        let frame = Some(Frame::new(600, 400));
        assert_eq!(
            to_xyxy((0.1, 0.2, 0.4, 0.45), BoxMode::Xyxy, true, frame).unwrap(),
            (60, 80, 240, 180)
        );
    }

    #[test]
    fn test_absolute_xyxy_is_identity() {
        let bbox = (3.0, 4.0, 17.0, 90.0);
        assert_eq!(
            to_xyxy(bbox, BoxMode::Xyxy, false, None).unwrap(),
            (3, 4, 17, 90)
        );
        assert_eq!(
            xyxy_to((3, 4, 17, 90), BoxMode::Xyxy, false, None).unwrap(),
            bbox
        );
    }

    #[test]
    fn test_float_coordinates_round_once() {
        assert_eq!(
            to_xyxy((10.4, 20.5, 30.49, 40.6), BoxMode::Xyxy, false, None).unwrap(),
            (10, 21, 30, 41)
        );
    }

    #[test]
    fn test_ccwh_and_yyxx() {
        assert_eq!(
            to_xyxy((50.0, 40.0, 20.0, 10.0), BoxMode::Ccwh, false, None).unwrap(),
            (40, 35, 60, 45)
        );
        assert_eq!(
            to_xyxy((20.0, 60.0, 10.0, 40.0), BoxMode::Yyxx, false, None).unwrap(),
            (10, 20, 40, 60)
        );
    }

    #[test]
    fn test_relative_ccwh() {
        let frame = Some(Frame::new(200, 100));
        assert_eq!(
            to_xyxy((0.5, 0.5, 0.5, 0.2), BoxMode::Ccwh, true, frame).unwrap(),
            (50, 40, 150, 60)
        );
    }

    #[test]
    fn test_missing_frame() {
        assert!(matches!(
            to_xyxy((0.1, 0.1, 0.2, 0.2), BoxMode::Xyxy, true, None),
            Err(Cv3Error::MissingFrame)
        ));
        assert!(matches!(
            xyxy_to((1, 1, 2, 2), BoxMode::Xyxy, true, None),
            Err(Cv3Error::MissingFrame)
        ));
    }

    #[test]
    fn test_invalid_dimension() {
        assert!(matches!(
            to_xyxy((0.1, 0.1, 0.2, 0.2), BoxMode::Xyxy, true, Some(Frame::new(100, 0))),
            Err(Cv3Error::InvalidDimension(0))
        ));
    }

    #[test]
    fn test_negative_extent_is_rejected() {
        assert!(matches!(
            to_xyxy((10.0, 10.0, -1.0, 5.0), BoxMode::Xywh, false, None),
            Err(Cv3Error::InvalidExtent { .. })
        ));
        assert!(matches!(
            to_xyxy((30.0, 10.0, 20.0, 40.0), BoxMode::Xyxy, false, None),
            Err(Cv3Error::InvalidExtent { .. })
        ));
        assert!(matches!(
            xyxy_to((30, 10, 20, 40), BoxMode::Xywh, false, None),
            Err(Cv3Error::InvalidExtent { .. })
        ));
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let frame = Some(Frame::new(100, 100));
        let inputs = [
            (0.0, 0.0, f64::INFINITY, 10.0),
            (f64::NAN, 0.0, 10.0, 10.0),
            (0.0, f64::NEG_INFINITY, 10.0, 10.0),
        ];
        for bbox in inputs {
            for mode in BoxMode::ALL {
                assert!(
                    matches!(
                        to_xyxy(bbox, mode, false, None),
                        Err(Cv3Error::InvalidCoordinate(_))
                    ),
                    "{mode} {bbox:?}"
                );
                assert!(
                    matches!(
                        to_xyxy(bbox, mode, true, frame),
                        Err(Cv3Error::InvalidCoordinate(_))
                    ),
                    "{mode} rel {bbox:?}"
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_pixels_are_rejected() {
        assert!(matches!(
            to_xyxy((0.0, 0.0, 1e300, 1.0), BoxMode::Xyxy, true, Some(Frame::new(100, 100))),
            Err(Cv3Error::InvalidCoordinate(_))
        ));
        assert!(matches!(
            to_xyxy((0.0, 0.0, 1e300, 1.0), BoxMode::Xyxy, false, None),
            Err(Cv3Error::InvalidCoordinate(_))
        ));
        // Finite inputs whose sum overflows to infinity.
        assert!(matches!(
            to_xyxy((f64::MAX, 0.0, f64::MAX, 1.0), BoxMode::Xywh, false, None),
            Err(Cv3Error::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_frame_not_needed_for_absolute() {
        // A bad frame is ignored when nothing is relative.
        assert!(to_xyxy((1.0, 1.0, 2.0, 2.0), BoxMode::Xyxy, false, Some(Frame::new(0, 0))).is_ok());
    }

    #[test]
    fn test_xyxy_to_relative_xywh() {
        let frame = Some(Frame::new(600, 400));
        let (x, y, w, h) = xyxy_to((60, 80, 240, 180), BoxMode::Xywh, true, frame).unwrap();
        assert!((x - 0.1).abs() < 1e-12);
        assert!((y - 0.2).abs() < 1e-12);
        assert!((w - 0.3).abs() < 1e-12);
        assert!((h - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_convert_box_between_modes() {
        let out = convert_box(
            (10.0, 20.0, 30.0, 40.0),
            (BoxMode::Xywh, false),
            (BoxMode::Ccwh, false),
            None,
        )
        .unwrap();
        assert_eq!(out, (25.0, 40.0, 30.0, 40.0));
    }

    #[test]
    fn test_roundtrip_every_mode() {
        let frame = Some(Frame::new(640, 480));
        let boxes = [
            (BoxMode::Xyxy, (11.0, 22.0, 111.0, 222.0)),
            (BoxMode::Xywh, (11.0, 22.0, 100.0, 200.0)),
            (BoxMode::Ccwh, (61.0, 122.0, 101.0, 201.0)),
            (BoxMode::Yyxx, (22.0, 222.0, 11.0, 111.0)),
        ];
        for (mode, bbox) in boxes {
            let px = to_xyxy(bbox, mode, false, frame).unwrap();
            let back = xyxy_to(px, mode, false, frame).unwrap();
            assert!((back.0 - bbox.0).abs() <= 1.0, "{mode}: {back:?} vs {bbox:?}");
            assert!((back.1 - bbox.1).abs() <= 1.0, "{mode}: {back:?} vs {bbox:?}");
            assert!((back.2 - bbox.2).abs() <= 1.0, "{mode}: {back:?} vs {bbox:?}");
            assert!((back.3 - bbox.3).abs() <= 1.0, "{mode}: {back:?} vs {bbox:?}");
        }
    }
}
