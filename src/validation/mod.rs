//! Option validation.
//!
//! Fields of [`Options`] can be assigned directly without checks. This module
//! reports values that a drawing or video call would reject:
//! - Draw defaults (thickness, point radius, scale, default color)
//! - Video defaults (frame rate)
//! - Flags worth a second look (experimental mode)
//!
//! The grouped setters on [`Options`] run the same checks before committing.

mod report;

pub use report::{IssueCode, Severity, ValidationIssue, ValidationReport};

use crate::color::{palette, ColorExpr};
use crate::options::Options;

/// Options for validation behavior.
#[derive(Clone, Debug, Default)]
pub struct ValidateOptions {
    /// If true, treat warnings as errors.
    pub strict: bool,
}

/// Validates every field of `options` and returns all issues found.
pub fn validate_options(options: &Options, _opts: &ValidateOptions) -> ValidationReport {
    let mut report = ValidationReport::new();

    validate_draw(options, &mut report);
    validate_color(&options.color, &mut report);
    validate_video(options, &mut report);

    if options.experimental {
        report.add(ValidationIssue::warning(
            IssueCode::ExperimentalEnabled,
            "Experimental functionality is enabled",
            "experimental",
        ));
    }

    report
}

fn validate_draw(options: &Options, report: &mut ValidationReport) {
    if options.thickness < -1 {
        report.add(ValidationIssue::error(
            IssueCode::InvalidThickness,
            format!(
                "Thickness {} is below -1 (use -1 for filled shapes)",
                options.thickness
            ),
            "thickness",
        ));
    }

    if options.pt_radius < 0 {
        report.add(ValidationIssue::error(
            IssueCode::NegativePointRadius,
            format!("Point radius {} is negative", options.pt_radius),
            "pt_radius",
        ));
    }

    if !options.scale.is_finite() || options.scale <= 0.0 {
        report.add(ValidationIssue::error(
            IssueCode::InvalidScale,
            format!("Font scale {} must be a positive number", options.scale),
            "scale",
        ));
    }
}

fn validate_color(color: &ColorExpr, report: &mut ValidationReport) {
    match color {
        ColorExpr::Named(name) => {
            if palette::lookup(name).is_none() {
                report.add(ValidationIssue::error(
                    IssueCode::UnknownColorName,
                    format!("Unknown color name '{}'", name),
                    "color",
                ));
            }
        }
        ColorExpr::Scalar(value) => check_channel_range(&[*value], report),
        ColorExpr::Tuple(values) => {
            if !matches!(values.len(), 1 | 3 | 4) {
                report.add(ValidationIssue::error(
                    IssueCode::InvalidColorChannels,
                    format!(
                        "Color has {} channel(s); expected 1, 3 or 4",
                        values.len()
                    ),
                    "color",
                ));
            }
            check_channel_range(values, report);
        }
    }
}

fn check_channel_range(values: &[f64], report: &mut ValidationReport) {
    if let Some(v) = values.iter().find(|v| !(0.0..=255.0).contains(*v)) {
        report.add(ValidationIssue::warning(
            IssueCode::ColorOutOfRange,
            format!("Color channel value {} is outside 0..=255", v),
            "color",
        ));
    }
}

fn validate_video(options: &Options, report: &mut ValidationReport) {
    if !options.fps.is_finite() || options.fps <= 0.0 {
        report.add(ValidationIssue::error(
            IssueCode::InvalidFps,
            format!("Frame rate {} must be a positive number", options.fps),
            "fps",
        ));
    }
}
