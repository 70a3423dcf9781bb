use std::path::PathBuf;
use thiserror::Error;

use crate::region::{OriginConvention, RawRegion};
use crate::validation::{RegionViolation, ValidationReport};

/// The main error type for regionmask operations.
#[derive(Debug, Error)]
pub enum RegionMaskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed region input from {source_name}: {message}")]
    MalformedInput {
        source_name: String,
        message: String,
    },

    #[error("Failed to read region file {path}: {source}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write region JSON to {path}: {source}")]
    RegionJsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Region #{index} {region} is invalid under {origin} origin: {violation}")]
    InvalidRegion {
        index: usize,
        region: RawRegion,
        origin: OriginConvention,
        #[source]
        violation: RegionViolation,
    },

    #[error("Region #{index} {region} collapsed to nothing on a {width}x{height} frame")]
    RegionOutsideFrame {
        index: usize,
        region: RawRegion,
        width: u32,
        height: u32,
    },

    #[error("Invalid frame dimensions {width}x{height} (must be non-zero and at most 1073741824 pixels)")]
    InvalidFrameDimensions { width: u32, height: u32 },

    #[error("Failed to write mask image to {path}: {source}")]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid options: {message}")]
    InvalidOptions { message: String },

    #[error("Failed to probe frames in {path}: {message}")]
    FrameProbe { path: PathBuf, message: String },

    #[error("Validation failed with {error_count} error(s) and {warning_count} warning(s)")]
    ValidationFailed {
        error_count: usize,
        warning_count: usize,
        report: ValidationReport,
    },
}
