//! Default options consulted when a call omits a parameter.
//!
//! [`Options`] is a plain value: callers may build their own and pass it by
//! reference. A process-wide instance (see [`options()`], [`update`] and the
//! grouped setters re-exported here) serves as the default source.
//!
//! Direct field assignment is never validated. The grouped setters
//! ([`Options::set_draw`], [`Options::set_video`]) validate the fields they
//! change and apply all of them or none.

mod global;
mod types;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use global::{
    load_options, options, replace_options, reset_options, set_bgr, set_draw, set_experimental,
    set_rgb, set_video, update, with_options,
};
pub use types::{Font, FourCC, LineType};

use crate::color::{resolve_color, ChannelCount, ColorExpr, ColorOrder};
use crate::error::Cv3Error;
use crate::validation::{validate_options, ValidateOptions};

/// The full set of defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Colors are red-first when true, blue-first otherwise.
    pub rgb: bool,
    pub color: ColorExpr,
    /// Line thickness in pixels; -1 fills the shape.
    pub thickness: i32,
    pub font: Font,
    /// Font scale factor.
    pub scale: f64,
    /// Radius used when drawing points.
    pub pt_radius: i32,
    pub line_type: LineType,
    /// Frame rate for video writers.
    pub fps: f64,
    pub fourcc: FourCC,
    /// Gates functions whose behavior may still change.
    pub experimental: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            rgb: true,
            color: ColorExpr::named("red"),
            thickness: 1,
            font: Font::HersheySimplex,
            scale: 1.0,
            pt_radius: 2,
            line_type: LineType::Line8,
            fps: 30.0,
            fourcc: FourCC::default(),
            experimental: false,
        }
    }
}

/// Draw defaults to change together. `None` leaves a field as it is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawDefaults {
    pub color: Option<ColorExpr>,
    pub thickness: Option<i32>,
    pub font: Option<Font>,
    pub scale: Option<f64>,
    pub pt_radius: Option<i32>,
    pub line_type: Option<LineType>,
}

/// Video defaults to change together. `None` leaves a field as it is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VideoDefaults {
    pub fps: Option<f64>,
    pub fourcc: Option<FourCC>,
}

impl Options {
    /// The channel order implied by the `rgb` flag.
    pub fn color_order(&self) -> ColorOrder {
        if self.rgb {
            ColorOrder::Rgb
        } else {
            ColorOrder::Bgr
        }
    }

    /// Interprets color tuples red-first.
    pub fn set_rgb(&mut self) {
        self.rgb = true;
    }

    /// Interprets color tuples blue-first.
    pub fn set_bgr(&mut self) {
        self.rgb = false;
    }

    pub fn set_experimental(&mut self, enabled: bool) {
        self.experimental = enabled;
    }

    /// Applies every provided draw default, or none if any is invalid.
    pub fn set_draw(&mut self, draw: DrawDefaults) -> Result<(), Cv3Error> {
        let mut candidate = self.clone();
        let mut changed = Vec::new();

        if let Some(color) = draw.color {
            candidate.color = color;
            changed.push("color");
        }
        if let Some(thickness) = draw.thickness {
            candidate.thickness = thickness;
            changed.push("thickness");
        }
        if let Some(font) = draw.font {
            candidate.font = font;
            changed.push("font");
        }
        if let Some(scale) = draw.scale {
            candidate.scale = scale;
            changed.push("scale");
        }
        if let Some(pt_radius) = draw.pt_radius {
            candidate.pt_radius = pt_radius;
            changed.push("pt_radius");
        }
        if let Some(line_type) = draw.line_type {
            candidate.line_type = line_type;
            changed.push("line_type");
        }

        self.commit(candidate, &changed)
    }

    /// Applies every provided video default, or none if any is invalid.
    pub fn set_video(&mut self, video: VideoDefaults) -> Result<(), Cv3Error> {
        let mut candidate = self.clone();
        let mut changed = Vec::new();

        if let Some(fps) = video.fps {
            candidate.fps = fps;
            changed.push("fps");
        }
        if let Some(fourcc) = video.fourcc {
            candidate.fourcc = fourcc;
            changed.push("fourcc");
        }

        self.commit(candidate, &changed)
    }

    // Only errors on the changed fields block the commit, so an earlier
    // unchecked assignment elsewhere does not make every setter fail.
    fn commit(&mut self, candidate: Options, changed: &[&'static str]) -> Result<(), Cv3Error> {
        let report = validate_options(&candidate, &ValidateOptions::default());
        if let Some(issue) = report.errors().find(|i| changed.contains(&i.field)) {
            return Err(Cv3Error::InvalidOption {
                field: issue.field,
                message: issue.message.clone(),
            });
        }
        *self = candidate;
        Ok(())
    }

    /// Resolves `color`, or the default color when `None`, for a target with
    /// `channels` channels in this instance's color order.
    pub fn resolve_color(
        &self,
        color: Option<&ColorExpr>,
        channels: ChannelCount,
    ) -> Result<Vec<f64>, Cv3Error> {
        resolve_color(color.unwrap_or(&self.color), channels, self.color_order())
    }

    /// Fails unless experimental functionality is enabled.
    pub fn require_experimental(&self, feature: &str) -> Result<(), Cv3Error> {
        if self.experimental {
            Ok(())
        } else {
            Err(Cv3Error::ExperimentalDisabled(feature.to_string()))
        }
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Reads options from a `.yaml`/`.yml` or `.json` file. Keys that are
    /// missing take their default values.
    pub fn from_path(path: &Path) -> Result<Self, Cv3Error> {
        let data = fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let options = match ext.as_deref() {
            Some("yaml") | Some("yml") => {
                Self::from_yaml_str(&data).map_err(|source| Cv3Error::ConfigYamlParse {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            Some("json") => {
                Self::from_json_str(&data).map_err(|source| Cv3Error::ConfigJsonParse {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            _ => {
                return Err(Cv3Error::UnsupportedFormat(format!(
                    "options file '{}' (supported: .yaml, .yml, .json)",
                    path.display()
                )));
            }
        };

        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    pub fn to_yaml_string(&self) -> Result<String, Cv3Error> {
        serde_yaml::to_string(self).map_err(|e| Cv3Error::ConfigSerialize(e.to_string()))
    }

    pub fn to_json_string(&self) -> Result<String, Cv3Error> {
        serde_json::to_string_pretty(self).map_err(|e| Cv3Error::ConfigSerialize(e.to_string()))
    }
}
