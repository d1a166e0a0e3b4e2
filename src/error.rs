use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationReport;

/// The main error type for cv3 operations.
#[derive(Debug, Error)]
pub enum Cv3Error {
    #[error("Invalid box mode '{0}' (expected one of: xyxy, xywh, ccwh, yyxx)")]
    InvalidMode(String),

    #[error("Relative coordinates require a frame (width, height)")]
    MissingFrame,

    #[error("Invalid frame dimension {0} (must be positive)")]
    InvalidDimension(i64),

    #[error("Unknown color name '{0}'")]
    InvalidColorName(String),

    #[error("Color has {got} channel(s) but the target expects {expected}")]
    ChannelMismatch { expected: usize, got: usize },

    #[error("Unsupported channel count {0} (expected 1, 3 or 4)")]
    UnsupportedChannels(usize),

    #[error("Coordinate {0} is not finite or does not fit in the pixel range")]
    InvalidCoordinate(f64),

    #[error("Box has negative extent (width {width}, height {height})")]
    InvalidExtent { width: f64, height: f64 },

    #[error("Invalid color expression '{0}'")]
    InvalidColorExpr(String),

    #[error("Unknown color conversion code '{0}'")]
    InvalidColorCode(String),

    #[error("Invalid value for option '{field}': {message}")]
    InvalidOption {
        field: &'static str,
        message: String,
    },

    #[error("'{0}' is experimental; enable the experimental option to use it")]
    ExperimentalDisabled(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML options from {path}: {source}")]
    ConfigYamlParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse JSON options from {path}: {source}")]
    ConfigJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize options: {0}")]
    ConfigSerialize(String),

    #[error("Options validation failed with {error_count} error(s) and {warning_count} warning(s)")]
    ValidationFailed {
        error_count: usize,
        warning_count: usize,
        report: ValidationReport,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
