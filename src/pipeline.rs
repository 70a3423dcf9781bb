//! From a region set to a frame mask.
//!
//! [`RegionSet`] ties the raw regions of one run to that run's origin
//! convention. [`MaskJob`] is what an inference pipeline holds on to: it
//! hands out the mask for a frame size and optionally drops a copy on disk
//! for inspection.

use std::path::{Path, PathBuf};

use crate::error::RegionMaskError;
use crate::export::export_mask;
use crate::mask::{pixel_count, rasterize, Mask, PixelBounds};
use crate::region::{CanonicalRect, Normalized, OriginConvention, RawRegion};
use crate::validation::validate_region;

/// Anything that can supply the mask for frames of a given size.
///
/// [`MaskJob`] returns the same mask for every frame. Pipelines that vary
/// the mask over time provide their own implementation.
pub trait FrameMaskProvider {
    fn mask_for(&self, width: u32, height: u32) -> Result<Mask, RegionMaskError>;
}

/// The regions of one run, all written in the same origin convention.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionSet {
    origin: OriginConvention,
    regions: Vec<RawRegion>,
}

impl RegionSet {
    pub fn new(origin: OriginConvention, regions: Vec<RawRegion>) -> Self {
        Self { origin, regions }
    }

    pub fn origin(&self) -> OriginConvention {
        self.origin
    }

    pub fn regions(&self) -> &[RawRegion] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Validates every region, then converts them to canonical rectangles.
    ///
    /// # Errors
    /// [`RegionMaskError::InvalidRegion`] for the first region that fails
    /// validation. Nothing is converted in that case.
    pub fn canonical_rects(&self) -> Result<Vec<CanonicalRect<Normalized>>, RegionMaskError> {
        for (index, region) in self.regions.iter().enumerate() {
            validate_region(region, self.origin).map_err(|violation| {
                RegionMaskError::InvalidRegion {
                    index,
                    region: *region,
                    origin: self.origin,
                    violation,
                }
            })?;
        }

        Ok(self
            .regions
            .iter()
            .map(|region| region.to_canonical(self.origin))
            .collect())
    }

    /// Builds the union mask of all regions for a `width x height` frame.
    ///
    /// # Errors
    /// [`RegionMaskError::InvalidFrameDimensions`] for a zero-sized or
    /// oversized frame (see [`MAX_PIXELS`](crate::mask::MAX_PIXELS)),
    /// [`RegionMaskError::InvalidRegion`] for a region that fails
    /// validation, and [`RegionMaskError::RegionOutsideFrame`] for a valid
    /// region that lies entirely off the frame and would mask nothing.
    pub fn build_mask(&self, width: u32, height: u32) -> Result<Mask, RegionMaskError> {
        if pixel_count(width, height).is_none() {
            return Err(RegionMaskError::InvalidFrameDimensions { width, height });
        }

        let rects = self.canonical_rects()?;

        for (index, (region, rect)) in self.regions.iter().zip(&rects).enumerate() {
            let bounds = PixelBounds::from_rect(&rect.to_pixel(width, height), width, height);
            if bounds.is_empty() {
                return Err(RegionMaskError::RegionOutsideFrame {
                    index,
                    region: *region,
                    width,
                    height,
                });
            }
            if rect.exceeds_unit_square() {
                log::warn!(
                    "Region #{} {} reaches outside the frame; clamped to {:?}",
                    index,
                    region,
                    bounds
                );
            }
            log::debug!("Region #{} {} -> {:?}", index, region, bounds);
        }

        Ok(rasterize(width, height, &rects))
    }
}

/// A region set ready to be turned into masks, with an optional debug copy.
#[derive(Clone, Debug)]
pub struct MaskJob {
    regions: RegionSet,
    debug_output: Option<PathBuf>,
}

impl MaskJob {
    pub fn new(regions: RegionSet) -> Self {
        Self {
            regions,
            debug_output: None,
        }
    }

    /// Also writes every computed mask to `path` as an image.
    ///
    /// The write is best-effort: a failure is logged and the mask is still
    /// returned.
    pub fn with_debug_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.debug_output = Some(path.into());
        self
    }

    pub fn regions(&self) -> &RegionSet {
        &self.regions
    }

    pub fn debug_output(&self) -> Option<&Path> {
        self.debug_output.as_deref()
    }
}

impl FrameMaskProvider for MaskJob {
    fn mask_for(&self, width: u32, height: u32) -> Result<Mask, RegionMaskError> {
        let mask = self.regions.build_mask(width, height)?;

        if let Some(path) = &self.debug_output {
            if let Err(err) = export_mask(&mask, path) {
                log::warn!("Debug mask export skipped: {}", err);
            }
        }

        Ok(mask)
    }
}

/// Parses a region file body and builds its mask under both conventions.
#[cfg(feature = "fuzzing")]
pub fn fuzz_build_mask(bytes: &[u8]) -> Result<(), RegionMaskError> {
    let regions = crate::source::io_json::from_json_slice(bytes)?;
    for origin in [OriginConvention::LeftBottom, OriginConvention::LeftTop] {
        let _ = RegionSet::new(origin, regions.clone()).build_mask(64, 36);
    }
    Ok(())
}
