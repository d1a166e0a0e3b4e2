//! Color resolution.
//!
//! Drawing calls accept a color as a name, a single scalar, or an explicit
//! tuple. [`resolve_color`] turns any of those into exactly as many channel
//! values as the target image has, in the configured [`ColorOrder`].
//!
//! Nothing is padded, truncated or reduced behind the caller's back: a tuple
//! of the wrong length, or a named color against a gray target, is an error.

pub mod convert;
mod expr;
pub mod palette;

pub use convert::{cvt_color, ColorCode};
pub use expr::{ChannelCount, ColorExpr, ColorOrder};

use crate::error::Cv3Error;

/// Alpha value used when a color does not specify one.
pub const OPAQUE: f64 = 255.0;

/// Resolves `expr` to `channels.count()` values in `order`.
///
/// # Example
///
/// ```
/// use cv3::color::{resolve_color, ChannelCount, ColorExpr, ColorOrder};
///
/// let red = ColorExpr::named("red");
/// assert_eq!(
///     resolve_color(&red, ChannelCount::Color, ColorOrder::Rgb).unwrap(),
///     vec![255.0, 0.0, 0.0]
/// );
/// assert_eq!(
///     resolve_color(&red, ChannelCount::Color, ColorOrder::Bgr).unwrap(),
///     vec![0.0, 0.0, 255.0]
/// );
/// ```
pub fn resolve_color(
    expr: &ColorExpr,
    channels: ChannelCount,
    order: ColorOrder,
) -> Result<Vec<f64>, Cv3Error> {
    match expr {
        ColorExpr::Named(name) => {
            let rgb = palette::lookup(name)
                .ok_or_else(|| Cv3Error::InvalidColorName(name.clone()))?;
            if channels == ChannelCount::Gray {
                return Err(Cv3Error::ChannelMismatch {
                    expected: 1,
                    got: 3,
                });
            }
            let [r, g, b] = rgb.map(f64::from);
            let mut values = match order {
                ColorOrder::Rgb => vec![r, g, b],
                ColorOrder::Bgr => vec![b, g, r],
            };
            if channels == ChannelCount::ColorAlpha {
                values.push(OPAQUE);
            }
            Ok(values)
        }
        ColorExpr::Scalar(value) => Ok(match channels {
            ChannelCount::Gray => vec![*value],
            ChannelCount::Color => vec![*value; 3],
            ChannelCount::ColorAlpha => vec![*value, *value, *value, OPAQUE],
        }),
        ColorExpr::Tuple(values) => {
            if values.len() != channels.count() {
                return Err(Cv3Error::ChannelMismatch {
                    expected: channels.count(),
                    got: values.len(),
                });
            }
            Ok(values.clone())
        }
    }
}
