//! Color-space conversion of single color values.
//!
//! These mirror the image-level conversion codes of the underlying vision
//! library, applied to one color on the 8-bit scale. They let callers turn a
//! configured color into what a gray, alpha or HSV target needs without a
//! round trip through an image. Results are not rounded.

use std::fmt;
use std::str::FromStr;

use crate::error::Cv3Error;

/// Conversion codes. Names follow the `src2dst` convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorCode {
    Rgb2Bgr,
    Bgr2Rgb,
    Rgba2Bgra,
    Bgra2Rgba,
    Rgb2Gray,
    Bgr2Gray,
    Gray2Rgb,
    Gray2Bgr,
    Gray2Rgba,
    Gray2Bgra,
    Rgb2Hsv,
    Bgr2Hsv,
    Hsv2Rgb,
    Hsv2Bgr,
}

impl ColorCode {
    pub const ALL: [ColorCode; 14] = [
        ColorCode::Rgb2Bgr,
        ColorCode::Bgr2Rgb,
        ColorCode::Rgba2Bgra,
        ColorCode::Bgra2Rgba,
        ColorCode::Rgb2Gray,
        ColorCode::Bgr2Gray,
        ColorCode::Gray2Rgb,
        ColorCode::Gray2Bgr,
        ColorCode::Gray2Rgba,
        ColorCode::Gray2Bgra,
        ColorCode::Rgb2Hsv,
        ColorCode::Bgr2Hsv,
        ColorCode::Hsv2Rgb,
        ColorCode::Hsv2Bgr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorCode::Rgb2Bgr => "rgb2bgr",
            ColorCode::Bgr2Rgb => "bgr2rgb",
            ColorCode::Rgba2Bgra => "rgba2bgra",
            ColorCode::Bgra2Rgba => "bgra2rgba",
            ColorCode::Rgb2Gray => "rgb2gray",
            ColorCode::Bgr2Gray => "bgr2gray",
            ColorCode::Gray2Rgb => "gray2rgb",
            ColorCode::Gray2Bgr => "gray2bgr",
            ColorCode::Gray2Rgba => "gray2rgba",
            ColorCode::Gray2Bgra => "gray2bgra",
            ColorCode::Rgb2Hsv => "rgb2hsv",
            ColorCode::Bgr2Hsv => "bgr2hsv",
            ColorCode::Hsv2Rgb => "hsv2rgb",
            ColorCode::Hsv2Bgr => "hsv2bgr",
        }
    }

    /// Channel count the input must have.
    pub fn source_channels(&self) -> usize {
        match self {
            ColorCode::Rgba2Bgra | ColorCode::Bgra2Rgba => 4,
            ColorCode::Gray2Rgb
            | ColorCode::Gray2Bgr
            | ColorCode::Gray2Rgba
            | ColorCode::Gray2Bgra => 1,
            _ => 3,
        }
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorCode {
    type Err = Cv3Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['_', '-'], "");
        ColorCode::ALL
            .into_iter()
            .find(|code| code.as_str() == key)
            .ok_or_else(|| Cv3Error::InvalidColorCode(s.to_string()))
    }
}

/// Converts one color value according to `code`.
///
/// Fails with `ChannelMismatch` when `values` does not have the channel count
/// the code reads; in particular the `gray2*` codes only accept one channel.
#[doc(alias = "cvtColor")]
pub fn cvt_color(values: &[f64], code: ColorCode) -> Result<Vec<f64>, Cv3Error> {
    let expected = code.source_channels();
    if values.len() != expected {
        return Err(Cv3Error::ChannelMismatch {
            expected,
            got: values.len(),
        });
    }

    let out = match code {
        ColorCode::Rgb2Bgr | ColorCode::Bgr2Rgb => vec![values[2], values[1], values[0]],
        ColorCode::Rgba2Bgra | ColorCode::Bgra2Rgba => {
            vec![values[2], values[1], values[0], values[3]]
        }
        ColorCode::Rgb2Gray => vec![luma(values[0], values[1], values[2])],
        ColorCode::Bgr2Gray => vec![luma(values[2], values[1], values[0])],
        ColorCode::Gray2Rgb | ColorCode::Gray2Bgr => vec![values[0]; 3],
        ColorCode::Gray2Rgba | ColorCode::Gray2Bgra => {
            vec![values[0], values[0], values[0], 255.0]
        }
        ColorCode::Rgb2Hsv => hsv_from_rgb(values[0], values[1], values[2]).to_vec(),
        ColorCode::Bgr2Hsv => hsv_from_rgb(values[2], values[1], values[0]).to_vec(),
        ColorCode::Hsv2Rgb => rgb_from_hsv(values[0], values[1], values[2]).to_vec(),
        ColorCode::Hsv2Bgr => {
            let [r, g, b] = rgb_from_hsv(values[0], values[1], values[2]);
            vec![b, g, r]
        }
    };
    Ok(out)
}

macro_rules! shorthand {
    ($($name:ident => $code:ident),* $(,)?) => {
        $(
            #[doc = concat!("Shorthand for [`cvt_color`] with [`ColorCode::", stringify!($code), "`].")]
            pub fn $name(values: &[f64]) -> Result<Vec<f64>, Cv3Error> {
                cvt_color(values, ColorCode::$code)
            }
        )*
    };
}

/// Name used by the underlying library.
pub use self::cvt_color as cvtColor;

// `rgb`/`bgr` read "into this order"; a channel swap is its own inverse.
shorthand! {
    rgb => Bgr2Rgb,
    bgr => Rgb2Bgr,
    rgba => Bgra2Rgba,
    bgra => Rgba2Bgra,
    rgb2bgr => Rgb2Bgr,
    bgr2rgb => Bgr2Rgb,
    rgba2bgra => Rgba2Bgra,
    bgra2rgba => Bgra2Rgba,
    rgb2gray => Rgb2Gray,
    bgr2gray => Bgr2Gray,
    gray2rgb => Gray2Rgb,
    gray2bgr => Gray2Bgr,
    gray2rgba => Gray2Rgba,
    gray2bgra => Gray2Bgra,
    rgb2hsv => Rgb2Hsv,
    bgr2hsv => Bgr2Hsv,
    hsv2rgb => Hsv2Rgb,
    hsv2bgr => Hsv2Bgr,
}

#[inline]
fn luma(r: f64, g: f64, b: f64) -> f64 {
    0.299 * r + 0.587 * g + 0.114 * b
}

/// 8-bit HSV: H in [0, 180), S and V in [0, 255].
fn hsv_from_rgb(r: f64, g: f64, b: f64) -> [f64; 3] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max > 0.0 { delta / max * 255.0 } else { 0.0 };
    let mut h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (g - b) / delta
    } else if max == g {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };
    if h < 0.0 {
        h += 360.0;
    }
    // A tiny negative hue can round up to exactly 360.
    if h >= 360.0 {
        h -= 360.0;
    }
    [h / 2.0, s, max]
}

fn rgb_from_hsv(h: f64, s: f64, v: f64) -> [f64; 3] {
    let c = v * (s / 255.0);
    let hp = (h * 2.0).rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    [r + m, g + m, b + m]
}
