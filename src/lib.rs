//! regionmask: normalized regions in, inpainting masks out.
//!
//! Regions of interest are given as `(left, top, right, bottom)` fractions of
//! the frame, in either a math-style (`left-bottom`) or image-style
//! (`left-top`) convention. They are validated, converted to one canonical
//! convention, and rasterized into a binary mask marking the pixels an
//! inpainting model should repaint.
//!
//! # Modules
//!
//! - [`region`]: Region types and the conversion between conventions
//! - [`source`]: Gathering regions from tuples and JSON files
//! - [`validation`]: Geometric checks and validation reports
//! - [`mask`]: The binary mask and its rasterizer
//! - [`export`]: Writing masks as images
//! - [`pipeline`]: Region sets and the mask interface used by inference
//! - [`frames`]: Reading frame dimensions from extracted frames
//! - [`error`]: Error types for regionmask operations

pub mod error;
pub mod export;
pub mod frames;
pub mod mask;
pub mod pipeline;
pub mod region;
pub mod source;
pub mod validation;

use std::path::{Path, PathBuf};

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};

pub use error::RegionMaskError;
pub use mask::Mask;
pub use pipeline::{FrameMaskProvider, MaskJob, RegionSet};
pub use region::OriginConvention;

use source::RegionSource;

const DEFAULT_OUTPUT_DIR: &str = "results";

/// The regionmask CLI application.
#[derive(Parser)]
#[command(name = "regionmask")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a mask image from normalized regions.
    Mask(MaskArgs),
    /// Check regions for errors and warnings without building a mask.
    Check(CheckArgs),
}

/// Where regions come from and how to read them.
#[derive(clap::Args)]
struct RegionArgs {
    /// Normalized region as LEFT TOP RIGHT BOTTOM. Repeat for multiple regions.
    #[arg(
        long = "region",
        num_args = 4,
        value_names = ["LEFT", "TOP", "RIGHT", "BOTTOM"],
        allow_negative_numbers = true,
        action = clap::ArgAction::Append
    )]
    regions: Vec<f64>,

    /// JSON file holding an array of [left, top, right, bottom] regions.
    #[arg(long)]
    region_json: Option<PathBuf>,

    /// Coordinate origin the regions are written in.
    #[arg(long, value_enum, env = "REGIONMASK_ORIGIN", default_value_t = OriginConvention::LeftBottom)]
    origin: OriginConvention,
}

impl RegionArgs {
    fn to_source(&self) -> RegionSource {
        let mut source = RegionSource::new().with_flat_tuples(&self.regions);
        if let Some(path) = &self.region_json {
            source = source.with_json_file(path);
        }
        source
    }
}

/// Arguments for the mask subcommand.
#[derive(clap::Args)]
#[command(group(ArgGroup::new("size").required(true).args(["width", "frames"])))]
struct MaskArgs {
    #[command(flatten)]
    regions: RegionArgs,

    /// Frame width in pixels.
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Frame height in pixels.
    #[arg(long, requires = "width")]
    height: Option<u32>,

    /// Directory of extracted frames; the resolution is read from the first one.
    #[arg(long, conflicts_with_all = ["width", "height"])]
    frames: Option<PathBuf>,

    /// Output file, or directory with --per-frame. Defaults under ./results.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write one mask per frame instead of a single shared mask.
    #[arg(long)]
    per_frame: bool,

    /// Number of frames for --per-frame when no --frames directory is given.
    #[arg(long)]
    frame_count: Option<usize>,
}

/// Arguments for the check subcommand.
#[derive(clap::Args)]
struct CheckArgs {
    #[command(flatten)]
    regions: RegionArgs,

    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    output: ReportFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

/// Run the regionmask CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), RegionMaskError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Mask(args)) => run_mask(args),
        Some(Commands::Check(args)) => run_check(args),
        None => {
            println!("regionmask {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Normalized regions to inpainting masks.");
            println!();
            println!("Run 'regionmask --help' for usage information.");
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // A logger may already be installed when run() is called more than once.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init();
}

/// Execute the mask subcommand.
fn run_mask(args: MaskArgs) -> Result<(), RegionMaskError> {
    let region_set = args
        .regions
        .to_source()
        .into_region_set(args.regions.origin)?;

    let (width, height, frame_count, name) = match (&args.frames, args.width, args.height) {
        (Some(dir), _, _) => {
            let frames = frames::probe_frames(dir)?;
            let name = dir
                .file_name()
                .map(|name| format!("{}_mask", name.to_string_lossy()))
                .unwrap_or_else(|| "mask".to_string());
            (frames.width, frames.height, Some(frames.frame_count), name)
        }
        (None, Some(width), Some(height)) => (width, height, None, "mask".to_string()),
        _ => {
            return Err(RegionMaskError::InvalidOptions {
                message: "provide either --width and --height, or --frames".to_string(),
            });
        }
    };

    let mask = region_set.build_mask(width, height)?;

    if args.per_frame {
        let frame_count = args.frame_count.or(frame_count).ok_or_else(|| {
            RegionMaskError::InvalidOptions {
                message: "--per-frame needs --frames or --frame-count".to_string(),
            }
        })?;
        let dir = args
            .output
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_DIR).join(format!("{name}_frames")));
        if dir.extension().is_some() {
            return Err(RegionMaskError::InvalidOptions {
                message: format!(
                    "with --per-frame, --output must be a directory path, got {}",
                    dir.display()
                ),
            });
        }
        export::export_mask_frames(&mask, &dir, frame_count)?;
        println!("Wrote {} mask frames to {}", frame_count, dir.display());
    } else {
        let mut path = args
            .output
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_DIR).join(format!("{name}.png")));
        if path.is_dir() {
            path = path.join("mask.png");
        }
        export::export_mask(&mask, &path)?;
        println!("Wrote mask image to {}", path.display());
    }

    println!(
        "Input resolution: {}x{}, regions: {}",
        width,
        height,
        region_set.len()
    );
    Ok(())
}

/// Execute the check subcommand.
fn run_check(args: CheckArgs) -> Result<(), RegionMaskError> {
    let regions = args.regions.to_source().collect()?;

    let opts = validation::ValidateOptions {
        strict: args.strict,
    };
    let report = validation::validate_regions(&regions, args.regions.origin, &opts);

    match args.output {
        ReportFormat::Json => {
            let json = report
                .to_json_string()
                .map_err(|err| RegionMaskError::Io(std::io::Error::other(err)))?;
            println!("{}", json);
        }
        ReportFormat::Text => print!("{}", report),
    }

    let has_errors = report.error_count() > 0;
    let has_warnings = report.warning_count() > 0;

    if has_errors || (opts.strict && has_warnings) {
        Err(RegionMaskError::ValidationFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            report,
        })
    } else {
        Ok(())
    }
}
