//! Value types for draw and video defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Cv3Error;

/// Hershey vector fonts, numbered as the underlying library numbers them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Font {
    #[default]
    HersheySimplex,
    HersheyPlain,
    HersheyDuplex,
    HersheyComplex,
    HersheyTriplex,
    HersheyComplexSmall,
    HersheyScriptSimplex,
    HersheyScriptComplex,
}

impl Font {
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Line rasterization mode. `Filled` doubles as the "fill the shape"
/// thickness value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineType {
    Filled,
    Line4,
    #[default]
    Line8,
    AntiAliased,
}

impl LineType {
    pub fn code(self) -> i32 {
        match self {
            LineType::Filled => -1,
            LineType::Line4 => 4,
            LineType::Line8 => 8,
            LineType::AntiAliased => 16,
        }
    }
}

/// A four-character video codec code such as `mp4v` or `XVID`.
///
/// Always holds four printable ASCII characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FourCC([u8; 4]);

impl FourCC {
    pub fn new(code: &str) -> Result<Self, Cv3Error> {
        let bytes = code.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            return Err(Cv3Error::InvalidOption {
                field: "fourcc",
                message: format!("'{}' is not four printable ASCII characters", code),
            });
        }
        Ok(Self([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII.
        std::str::from_utf8(&self.0).unwrap_or("????")
    }

    /// Packs the characters little-endian, as video writers expect.
    pub fn code(&self) -> i32 {
        i32::from_le_bytes(self.0)
    }
}

impl Default for FourCC {
    fn default() -> Self {
        Self(*b"mp4v")
    }
}

impl FromStr for FourCC {
    type Err = Cv3Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FourCC::new(s)
    }
}

impl TryFrom<String> for FourCC {
    type Error = Cv3Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FourCC::new(&value)
    }
}

impl From<FourCC> for String {
    fn from(value: FourCC) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Debug for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCC({})", self.as_str())
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourcc_validation() {
        assert_eq!(FourCC::new("XVID").unwrap().as_str(), "XVID");
        assert!(FourCC::new("XVI").is_err());
        assert!(FourCC::new("XVIDX").is_err());
        assert!(FourCC::new("X\nID").is_err());
    }

    #[test]
    fn test_fourcc_code_packing() {
        let code = FourCC::new("mp4v").unwrap().code();
        assert_eq!(code & 0xff, b'm' as i32);
        assert_eq!((code >> 24) & 0xff, b'v' as i32);
    }

    #[test]
    fn test_fourcc_serde_as_string() {
        let json = serde_json::to_string(&FourCC::new("MJPG").unwrap()).unwrap();
        assert_eq!(json, "\"MJPG\"");
        assert!(serde_json::from_str::<FourCC>("\"toolong\"").is_err());
    }

    #[test]
    fn test_font_and_line_codes() {
        assert_eq!(Font::HersheySimplex.code(), 0);
        assert_eq!(Font::HersheyScriptComplex.code(), 7);
        assert_eq!(LineType::AntiAliased.code(), 16);
        assert_eq!(LineType::Filled.code(), -1);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Font::HersheyComplexSmall).unwrap(),
            "\"hershey_complex_small\""
        );
        assert_eq!(
            serde_json::from_str::<LineType>("\"anti_aliased\"").unwrap(),
            LineType::AntiAliased
        );
    }
}
