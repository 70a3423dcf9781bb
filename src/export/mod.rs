//! Writing masks as viewable single-channel images.
//!
//! Masked pixels are written as 255 (white) and unmasked pixels as 0
//! (black), which is the mask layout inpainting tools expect. The image
//! format follows the file extension.

use std::fs;
use std::path::Path;

use image::error::{ParameterError, ParameterErrorKind};
use image::{GrayImage, ImageError};

use crate::error::RegionMaskError;
use crate::mask::Mask;

fn to_gray_image(mask: &Mask, path: &Path) -> Result<GrayImage, RegionMaskError> {
    GrayImage::from_raw(mask.width(), mask.height(), mask.to_gray_bytes()).ok_or_else(|| {
        output_error(
            path,
            ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch,
            )),
        )
    })
}

fn output_error(path: &Path, source: ImageError) -> RegionMaskError {
    RegionMaskError::OutputUnavailable {
        path: path.to_path_buf(),
        source,
    }
}

fn ensure_parent(path: &Path) -> Result<(), RegionMaskError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|source| output_error(path, ImageError::IoError(source))),
        _ => Ok(()),
    }
}

/// Writes `mask` to `path`, creating parent directories as needed.
///
/// # Errors
/// [`RegionMaskError::OutputUnavailable`] if the directory or the image
/// cannot be written, or the extension names no supported format.
pub fn export_mask(mask: &Mask, path: &Path) -> Result<(), RegionMaskError> {
    ensure_parent(path)?;

    let image = to_gray_image(mask, path)?;

    image.save(path).map_err(|source| output_error(path, source))?;
    log::info!(
        "Wrote {}x{} mask to {}",
        mask.width(),
        mask.height(),
        path.display()
    );
    Ok(())
}

/// Writes one copy of `mask` per frame into `dir` as `00000.png`,
/// `00001.png`, and so on.
///
/// For inpainting tools that expect a mask frame for every video frame.
pub fn export_mask_frames(
    mask: &Mask,
    dir: &Path,
    frame_count: usize,
) -> Result<(), RegionMaskError> {
    fs::create_dir_all(dir).map_err(|source| output_error(dir, ImageError::IoError(source)))?;

    let image = to_gray_image(mask, dir)?;

    for index in 0..frame_count {
        let path = dir.join(format!("{index:05}.png"));
        image.save(&path).map_err(|source| output_error(&path, source))?;
    }

    log::info!("Wrote {} mask frame(s) to {}", frame_count, dir.display());
    Ok(())
}
