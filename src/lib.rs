//! cv3: friendly parameters for computer-vision calls.
//!
//! Drawing, cropping and video calls in the underlying vision library want
//! absolute integer pixel boxes, channel tuples in the image's own order and
//! a full set of explicit parameters. cv3 lets callers write boxes in several
//! layouts and in relative units, name their colors, and omit parameters in
//! favor of configurable defaults, then resolves all of that up front.
//!
//! # Modules
//!
//! - [`geom`]: Box and point normalization (`to_xyxy`, `xyxy_to`, `rel2abs`, ...)
//! - [`color`]: Color expressions, the named-color registry and conversions
//! - [`options`]: Default options and the process-wide instance
//! - [`params`]: Filling omitted draw and video parameters from options
//! - [`validation`]: Structured checks of option values
//! - [`error`]: Error types for cv3 operations

pub mod color;
pub mod error;
pub mod geom;
pub mod options;
pub mod params;
pub mod validation;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::Cv3Error;

use color::{cvt_color, palette, resolve_color, ChannelCount, ColorCode, ColorExpr};
use geom::{to_xyxy, xyxy_to, BoxMode, Frame};

/// The cv3 CLI application.
#[derive(Parser)]
#[command(name = "cv3")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Options file (.yaml, .yml or .json) applied before the command runs.
    #[arg(long, global = true, env = "CV3_CONFIG")]
    config: Option<PathBuf>,

    /// Use blue-first color order regardless of the options file.
    #[arg(long, global = true)]
    bgr: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Convert a box between modes and between relative and absolute units.
    Box(BoxArgs),
    /// Resolve a color expression to channel values.
    Color(ColorArgs),
    /// Convert a single color value between color spaces.
    Convert(ConvertArgs),
    /// List the named colors.
    Colors,
    /// Show the effective options.
    Options(ShowArgs),
    /// Validate an options file.
    Validate(ValidateArgs),
}

#[derive(clap::Args)]
struct BoxArgs {
    /// The four box values, in the --from mode.
    #[arg(
        num_args = 4,
        required = true,
        value_names = ["A", "B", "C", "D"],
        allow_negative_numbers = true
    )]
    values: Vec<f64>,

    /// Mode of the input box ('xyxy', 'xywh', 'ccwh' or 'yyxx').
    #[arg(long, default_value = "xyxy")]
    from: BoxMode,

    /// Mode of the output box.
    #[arg(long, default_value = "xyxy")]
    to: BoxMode,

    /// Input values are fractions of the frame.
    #[arg(long)]
    rel: bool,

    /// Write output values as fractions of the frame.
    #[arg(long)]
    to_rel: bool,

    /// Frame size as WIDTHxHEIGHT, required with --rel or --to-rel.
    #[arg(long)]
    frame: Option<Frame>,

    /// Output format ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

#[derive(clap::Args)]
struct ColorArgs {
    /// A color name, a scalar, or comma-separated channel values.
    #[arg(value_parser = <ColorExpr as std::str::FromStr>::from_str)]
    expr: ColorExpr,

    /// Channel count of the target image (1, 3 or 4).
    #[arg(long, default_value_t = 3)]
    channels: usize,

    /// Output format ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

#[derive(clap::Args)]
struct ConvertArgs {
    /// Channel values of the input color.
    #[arg(num_args = 1..=4, required = true, allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Conversion code, e.g. 'rgb2bgr', 'rgb2hsv', 'gray2rgba'.
    #[arg(long)]
    code: ColorCode,
}

#[derive(clap::Args)]
struct ShowArgs {
    /// Output format ('yaml' or 'json').
    #[arg(long, default_value = "yaml")]
    output: String,
}

#[derive(clap::Args)]
struct ValidateArgs {
    /// Options file to validate.
    input: PathBuf,

    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Run the cv3 CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), Cv3Error> {
    let cli = Cli::parse();

    if let Some(path) = &cli.config {
        options::load_options(path)?;
    }
    if cli.bgr {
        options::set_bgr();
    }

    match cli.command {
        Some(Commands::Box(args)) => run_box(args),
        Some(Commands::Color(args)) => run_color(args),
        Some(Commands::Convert(args)) => run_convert(args),
        Some(Commands::Colors) => run_colors(),
        Some(Commands::Options(args)) => run_show(args),
        Some(Commands::Validate(args)) => run_validate(args),
        None => {
            println!("cv3 {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Friendly parameters for computer-vision calls.");
            println!();
            println!("Run 'cv3 --help' for usage information.");
            Ok(())
        }
    }
}

fn check_output(output: &str, supported: &[&str]) -> Result<(), Cv3Error> {
    if supported.contains(&output) {
        Ok(())
    } else {
        Err(Cv3Error::UnsupportedFormat(format!(
            "output '{}' (supported: {})",
            output,
            supported.join(", ")
        )))
    }
}

fn join_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Execute the box subcommand.
fn run_box(args: BoxArgs) -> Result<(), Cv3Error> {
    check_output(&args.output, &["text", "json"])?;

    let input = (args.values[0], args.values[1], args.values[2], args.values[3]);
    let pixels = to_xyxy(input, args.from, args.rel, args.frame)?;
    let (a, b, c, d) = xyxy_to(pixels, args.to, args.to_rel, args.frame)?;

    match args.output.as_str() {
        "json" => {
            let value = serde_json::json!({
                "mode": args.to,
                "rel": args.to_rel,
                "box": [a, b, c, d],
                "pixels": [pixels.0, pixels.1, pixels.2, pixels.3],
            });
            println!("{}", value);
        }
        _ => println!("{}", join_values(&[a, b, c, d])),
    }
    Ok(())
}

/// Execute the color subcommand.
fn run_color(args: ColorArgs) -> Result<(), Cv3Error> {
    check_output(&args.output, &["text", "json"])?;

    let channels = ChannelCount::try_from(args.channels)?;
    let order = options::with_options(|o| o.color_order());
    let values = resolve_color(&args.expr, channels, order)?;

    match args.output.as_str() {
        "json" => {
            let value = serde_json::json!({
                "order": order,
                "channels": values,
            });
            println!("{}", value);
        }
        _ => println!("{}", join_values(&values)),
    }
    Ok(())
}

/// Execute the convert subcommand.
fn run_convert(args: ConvertArgs) -> Result<(), Cv3Error> {
    let values = cvt_color(&args.values, args.code)?;
    println!("{}", join_values(&values));
    Ok(())
}

/// Execute the colors subcommand.
fn run_colors() -> Result<(), Cv3Error> {
    for name in palette::names() {
        if let Some([r, g, b]) = palette::lookup(name) {
            println!("{:<10} {:>3} {:>3} {:>3}", name, r, g, b);
        }
    }
    Ok(())
}

/// Execute the options subcommand.
fn run_show(args: ShowArgs) -> Result<(), Cv3Error> {
    check_output(&args.output, &["yaml", "json"])?;

    let current = options::options();
    match args.output.as_str() {
        "json" => println!("{}", current.to_json_string()?),
        _ => print!("{}", current.to_yaml_string()?),
    }
    Ok(())
}

/// Execute the validate subcommand.
fn run_validate(args: ValidateArgs) -> Result<(), Cv3Error> {
    check_output(&args.output, &["text", "json"])?;

    let loaded = options::Options::from_path(&args.input)?;
    let opts = validation::ValidateOptions {
        strict: args.strict,
    };
    let report = validation::validate_options(&loaded, &opts);

    match args.output.as_str() {
        "json" => {
            let value = serde_json::json!({
                "error_count": report.error_count(),
                "warning_count": report.warning_count(),
                "issues": report.issues,
            });
            let text = serde_json::to_string_pretty(&value)
                .map_err(|e| Cv3Error::ConfigSerialize(e.to_string()))?;
            println!("{}", text);
        }
        _ => print!("{}", report),
    }

    let has_errors = report.error_count() > 0;
    let has_warnings = report.warning_count() > 0;

    if has_errors || (args.strict && has_warnings) {
        Err(Cv3Error::ValidationFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            report,
        })
    } else {
        Ok(())
    }
}
