//! Gathering raw regions from the places a user can declare them.
//!
//! Regions come from explicit `(left, top, right, bottom)` tuples, from a
//! JSON region file, or both. Tuples come first, then file entries, each in
//! the order given. No source at all is fine and yields an empty list.

pub mod io_json;

use std::path::{Path, PathBuf};

use crate::error::RegionMaskError;
use crate::pipeline::RegionSet;
use crate::region::{OriginConvention, RawRegion};

const TUPLE_SOURCE: &str = "--region";

/// A description of where regions come from, read by [`RegionSource::collect`].
#[derive(Clone, Debug, Default)]
pub struct RegionSource {
    tuples: Vec<Vec<f64>>,
    json_file: Option<PathBuf>,
}

impl RegionSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one explicit region. The component count is checked by
    /// [`collect`](Self::collect), not here.
    pub fn with_tuple(mut self, components: impl Into<Vec<f64>>) -> Self {
        self.tuples.push(components.into());
        self
    }

    /// Adds regions from a flat list of values, four per region.
    ///
    /// This is the shape command-line parsers produce for a repeated
    /// four-value flag. A leftover group of fewer than four values is kept as
    /// its own tuple and rejected by [`collect`](Self::collect).
    pub fn with_flat_tuples(mut self, values: &[f64]) -> Self {
        self.tuples.extend(
            values
                .chunks(RawRegion::COMPONENTS)
                .map(|chunk| chunk.to_vec()),
        );
        self
    }

    /// Adds a JSON region file, read once when the source is collected.
    pub fn with_json_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_file = Some(path.into());
        self
    }

    pub fn json_file(&self) -> Option<&Path> {
        self.json_file.as_deref()
    }

    /// Returns true if neither tuples nor a file were supplied.
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty() && self.json_file.is_none()
    }

    /// Reads every source and returns the regions in declaration order.
    ///
    /// # Errors
    /// [`RegionMaskError::MalformedInput`] for a tuple without exactly four
    /// values or a badly shaped file, and
    /// [`RegionMaskError::InputUnavailable`] if the file cannot be read.
    pub fn collect(&self) -> Result<Vec<RawRegion>, RegionMaskError> {
        let mut regions = Vec::with_capacity(self.tuples.len());

        for (index, tuple) in self.tuples.iter().enumerate() {
            let region = RawRegion::from_components(tuple).ok_or_else(|| {
                RegionMaskError::MalformedInput {
                    source_name: TUPLE_SOURCE.to_string(),
                    message: format!(
                        "region #{index} has {} value(s), expected {} (left top right bottom)",
                        tuple.len(),
                        RawRegion::COMPONENTS
                    ),
                }
            })?;
            regions.push(region);
        }

        if let Some(path) = &self.json_file {
            let from_file = io_json::read_region_json(path)?;
            log::debug!(
                "Read {} region(s) from {}",
                from_file.len(),
                path.display()
            );
            regions.extend(from_file);
        }

        if regions.is_empty() {
            log::warn!("No regions supplied; the mask will not cover any pixel");
        }

        Ok(regions)
    }

    /// Collects the regions and binds them to the run's origin convention.
    pub fn into_region_set(self, origin: OriginConvention) -> Result<RegionSet, RegionMaskError> {
        Ok(RegionSet::new(origin, self.collect()?))
    }
}
