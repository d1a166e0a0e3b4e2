//! Color expressions and the types needed to resolve them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Cv3Error;

/// A color as a caller writes it.
///
/// In configuration files this is `red`, `128` or `[255, 0, 0]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorExpr {
    /// A registry name such as `red`.
    Named(String),
    /// One value broadcast to every color channel.
    Scalar(f64),
    /// Explicit channel values, already in the configured order.
    Tuple(Vec<f64>),
}

impl ColorExpr {
    pub fn named(name: impl Into<String>) -> Self {
        ColorExpr::Named(name.into())
    }
}

impl Default for ColorExpr {
    fn default() -> Self {
        ColorExpr::named("red")
    }
}

impl From<&str> for ColorExpr {
    fn from(name: &str) -> Self {
        ColorExpr::named(name)
    }
}

impl From<f64> for ColorExpr {
    fn from(value: f64) -> Self {
        ColorExpr::Scalar(value)
    }
}

impl From<Vec<f64>> for ColorExpr {
    fn from(values: Vec<f64>) -> Self {
        ColorExpr::Tuple(values)
    }
}

impl<const N: usize> From<[f64; N]> for ColorExpr {
    fn from(values: [f64; N]) -> Self {
        ColorExpr::Tuple(values.to_vec())
    }
}

impl fmt::Display for ColorExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorExpr::Named(name) => f.write_str(name),
            ColorExpr::Scalar(v) => write!(f, "{}", v),
            ColorExpr::Tuple(values) => {
                let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "{}", parts.join(","))
            }
        }
    }
}

/// Parses `red`, `128`, `255,0,0` or `(255, 0, 0)`.
impl FromStr for ColorExpr {
    type Err = Cv3Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.contains(',') {
            let inner = trimmed
                .trim_start_matches(['(', '['])
                .trim_end_matches([')', ']']);
            let values = inner
                .split(',')
                .map(|part| part.trim().parse::<f64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| Cv3Error::InvalidColorExpr(s.to_string()))?;
            return Ok(ColorExpr::Tuple(values));
        }
        if let Ok(value) = trimmed.parse::<f64>() {
            return Ok(ColorExpr::Scalar(value));
        }
        let is_name = !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if is_name {
            Ok(ColorExpr::Named(trimmed.to_string()))
        } else {
            Err(Cv3Error::InvalidColorExpr(s.to_string()))
        }
    }
}

/// Whether multi-channel colors are written red-first or blue-first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorOrder {
    #[default]
    Rgb,
    Bgr,
}

impl fmt::Display for ColorOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorOrder::Rgb => f.write_str("RGB"),
            ColorOrder::Bgr => f.write_str("BGR"),
        }
    }
}

/// Number of channels in the target image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelCount {
    Gray = 1,
    Color = 3,
    ColorAlpha = 4,
}

impl ChannelCount {
    #[inline]
    pub fn count(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for ChannelCount {
    type Error = Cv3Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ChannelCount::Gray),
            3 => Ok(ChannelCount::Color),
            4 => Ok(ChannelCount::ColorAlpha),
            other => Err(Cv3Error::UnsupportedChannels(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_expressions() {
        assert_eq!("red".parse::<ColorExpr>().unwrap(), ColorExpr::named("red"));
        assert_eq!("128".parse::<ColorExpr>().unwrap(), ColorExpr::Scalar(128.0));
        assert_eq!(
            "255, 0, 0".parse::<ColorExpr>().unwrap(),
            ColorExpr::Tuple(vec![255.0, 0.0, 0.0])
        );
        assert_eq!(
            "(1,2,3,4)".parse::<ColorExpr>().unwrap(),
            ColorExpr::Tuple(vec![1.0, 2.0, 3.0, 4.0])
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "1,x,3".parse::<ColorExpr>(),
            Err(Cv3Error::InvalidColorExpr(_))
        ));
        assert!(matches!(
            "".parse::<ColorExpr>(),
            Err(Cv3Error::InvalidColorExpr(_))
        ));
        assert!(matches!(
            "#ff0000".parse::<ColorExpr>(),
            Err(Cv3Error::InvalidColorExpr(_))
        ));
    }

    #[test]
    fn test_serde_untagged_forms() {
        let named: ColorExpr = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(named, ColorExpr::named("blue"));
        let scalar: ColorExpr = serde_json::from_str("200").unwrap();
        assert_eq!(scalar, ColorExpr::Scalar(200.0));
        let tuple: ColorExpr = serde_json::from_str("[0, 128, 255]").unwrap();
        assert_eq!(tuple, ColorExpr::Tuple(vec![0.0, 128.0, 255.0]));
    }

    #[test]
    fn test_channel_count_try_from() {
        assert_eq!(ChannelCount::try_from(3).unwrap(), ChannelCount::Color);
        assert_eq!(ChannelCount::ColorAlpha.count(), 4);
        assert!(matches!(
            ChannelCount::try_from(2),
            Err(Cv3Error::UnsupportedChannels(2))
        ));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        let expr = ColorExpr::Tuple(vec![10.0, 20.5, 30.0]);
        assert_eq!(expr.to_string().parse::<ColorExpr>().unwrap(), expr);
    }
}
