//! Box representations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Cv3Error;

/// The four interchangeable ways of writing the same box as four numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxMode {
    /// (left, top, right, bottom)
    #[default]
    Xyxy,
    /// (left, top, width, height)
    Xywh,
    /// (center_x, center_y, width, height)
    Ccwh,
    /// (top, bottom, left, right), kept for older call sites.
    Yyxx,
}

impl BoxMode {
    pub const ALL: [BoxMode; 4] = [BoxMode::Xyxy, BoxMode::Xywh, BoxMode::Ccwh, BoxMode::Yyxx];

    pub fn as_str(&self) -> &'static str {
        match self {
            BoxMode::Xyxy => "xyxy",
            BoxMode::Xywh => "xywh",
            BoxMode::Ccwh => "ccwh",
            BoxMode::Yyxx => "yyxx",
        }
    }
}

impl fmt::Display for BoxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoxMode {
    type Err = Cv3Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xyxy" => Ok(BoxMode::Xyxy),
            "xywh" => Ok(BoxMode::Xywh),
            "ccwh" => Ok(BoxMode::Ccwh),
            "yyxx" => Ok(BoxMode::Yyxx),
            _ => Err(Cv3Error::InvalidMode(s.to_string())),
        }
    }
}
