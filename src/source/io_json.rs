//! Region files: a JSON array of `[left, top, right, bottom]` arrays.
//!
//! ```json
//! [
//!   [0.0, 1.0, 1.0, 0.85],
//!   [0.0, 0.15, 1.0, 0.0]
//! ]
//! ```
//!
//! Parsing goes through [`serde_json::Value`] rather than straight into
//! `Vec<RawRegion>` so that a bad entry is reported by index along with what
//! was found there.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use serde_json::Value;

use crate::error::RegionMaskError;
use crate::region::RawRegion;

const INLINE_SOURCE: &str = "inline JSON";

/// Reads regions from a JSON file.
///
/// # Errors
/// [`RegionMaskError::InputUnavailable`] if the file cannot be read, and
/// [`RegionMaskError::MalformedInput`] if it is not JSON or has the wrong
/// shape.
pub fn read_region_json(path: &Path) -> Result<Vec<RawRegion>, RegionMaskError> {
    let bytes = fs::read(path).map_err(|source| RegionMaskError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    parse_regions(&bytes, &path.display().to_string())
}

/// Writes regions to a file in the region file format.
///
/// # Errors
/// [`RegionMaskError::Io`] if the file cannot be created, and
/// [`RegionMaskError::RegionJsonWrite`] if writing the JSON fails.
pub fn write_region_json(path: &Path, regions: &[RawRegion]) -> Result<(), RegionMaskError> {
    let file = File::create(path).map_err(RegionMaskError::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, regions).map_err(|source| {
        RegionMaskError::RegionJsonWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Parses regions from a JSON string.
pub fn from_json_str(json: &str) -> Result<Vec<RawRegion>, RegionMaskError> {
    from_json_slice(json.as_bytes())
}

/// Parses regions from raw bytes.
///
/// Useful for fuzzing and for callers that already hold the file contents.
pub fn from_json_slice(bytes: &[u8]) -> Result<Vec<RawRegion>, RegionMaskError> {
    parse_regions(bytes, INLINE_SOURCE)
}

/// Serializes regions in the region file format.
pub fn to_json_string(regions: &[RawRegion]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(regions)
}

fn parse_regions(bytes: &[u8], source_name: &str) -> Result<Vec<RawRegion>, RegionMaskError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|err| RegionMaskError::MalformedInput {
            source_name: source_name.to_string(),
            message: format!("not valid JSON: {}", err),
        })?;

    regions_from_value(&value, source_name)
}

fn regions_from_value(value: &Value, source_name: &str) -> Result<Vec<RawRegion>, RegionMaskError> {
    let malformed = |message: String| RegionMaskError::MalformedInput {
        source_name: source_name.to_string(),
        message,
    };

    let Value::Array(entries) = value else {
        return Err(malformed(format!(
            "expected a top-level array of [left, top, right, bottom] entries, found {}",
            json_kind(value)
        )));
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            region_from_entry(entry).map_err(|message| malformed(format!("entry #{index}: {message}")))
        })
        .collect()
}

fn region_from_entry(entry: &Value) -> Result<RawRegion, String> {
    let Value::Array(items) = entry else {
        return Err(format!(
            "expected a [left, top, right, bottom] array, found {}",
            json_kind(entry)
        ));
    };

    if items.len() != RawRegion::COMPONENTS {
        return Err(format!(
            "expected {} values, found {}",
            RawRegion::COMPONENTS,
            items.len()
        ));
    }

    let mut values = [0.0_f64; RawRegion::COMPONENTS];
    for (slot, item) in values.iter_mut().zip(items) {
        *slot = item
            .as_f64()
            .ok_or_else(|| format!("expected a number, found {}", json_kind(item)))?;
    }

    Ok(RawRegion::from(values))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
