//! Parameter defaulting for drawing and video collaborators.
//!
//! A drawing call gathers what the caller passed into a [`DrawRequest`],
//! resolves it against [`Options`], and hands the concrete [`DrawParams`]
//! to the underlying library.

use serde::Serialize;

use crate::color::{ChannelCount, ColorExpr};
use crate::error::Cv3Error;
use crate::geom::{point_to_abs, to_xyxy, BoxMode, BoxTuple, Frame, PixelBox};
use crate::options::{Font, FourCC, LineType, Options};

/// Draw parameters as passed by the caller; `None` means "use the default".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawRequest {
    pub color: Option<ColorExpr>,
    pub thickness: Option<i32>,
    /// Fill the shape. Overrides `thickness`.
    pub fill: bool,
    pub font: Option<Font>,
    pub scale: Option<f64>,
    pub pt_radius: Option<i32>,
    pub line_type: Option<LineType>,
}

/// Fully resolved draw parameters.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DrawParams {
    /// One value per target channel, in the configured color order.
    pub color: Vec<f64>,
    pub thickness: i32,
    pub line_type: LineType,
    pub font: Font,
    pub scale: f64,
    pub pt_radius: i32,
}

/// Fills every omitted field of `request` from `options`.
pub fn resolve_draw(
    request: &DrawRequest,
    options: &Options,
    channels: ChannelCount,
) -> Result<DrawParams, Cv3Error> {
    let color = options.resolve_color(request.color.as_ref(), channels)?;
    let thickness = if request.fill {
        LineType::Filled.code()
    } else {
        request.thickness.unwrap_or(options.thickness)
    };

    Ok(DrawParams {
        color,
        thickness,
        line_type: request.line_type.unwrap_or(options.line_type),
        font: request.font.unwrap_or(options.font),
        scale: request.scale.unwrap_or(options.scale),
        pt_radius: request.pt_radius.unwrap_or(options.pt_radius),
    })
}

/// Resolves everything a rectangle call needs: the box in absolute pixels
/// and the draw parameters.
pub fn resolve_rectangle(
    bbox: BoxTuple,
    mode: BoxMode,
    rel: bool,
    frame: Option<Frame>,
    request: &DrawRequest,
    options: &Options,
    channels: ChannelCount,
) -> Result<(PixelBox, DrawParams), Cv3Error> {
    let pixels = to_xyxy(bbox, mode, rel, frame)?;
    let params = resolve_draw(request, options, channels)?;
    Ok((pixels, params))
}

/// Resolves a point call: the center in absolute pixels and the draw
/// parameters (whose `pt_radius` is the radius to draw).
pub fn resolve_point(
    point: (f64, f64),
    rel: bool,
    frame: Option<Frame>,
    request: &DrawRequest,
    options: &Options,
    channels: ChannelCount,
) -> Result<((i64, i64), DrawParams), Cv3Error> {
    let center = point_to_abs(point, rel, frame)?;
    let params = resolve_draw(request, options, channels)?;
    Ok((center, params))
}

/// Video writer parameters as passed by the caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VideoRequest {
    pub fps: Option<f64>,
    pub fourcc: Option<FourCC>,
}

/// Fully resolved video writer parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VideoParams {
    pub fps: f64,
    pub fourcc: FourCC,
}

/// Fills the omitted video writer parameters from `options`.
///
/// Nothing can fail here: `FourCC` is checked when it is built, and the
/// frame rate is taken as given.
pub fn resolve_video(request: &VideoRequest, options: &Options) -> VideoParams {
    VideoParams {
        fps: request.fps.unwrap_or(options.fps),
        fourcc: request.fourcc.unwrap_or(options.fourcc),
    }
}
