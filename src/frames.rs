//! Reading frame dimensions from a directory of extracted video frames.
//!
//! Mask dimensions must match the frames they are applied to. When frames
//! have been extracted to images, the first one (by file name) gives the
//! resolution and the number of images gives the frame count.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::RegionMaskError;

pub const FRAME_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "tif", "tiff"];

/// Resolution and length of a frame directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameSet {
    pub width: u32,
    pub height: u32,
    pub frame_count: usize,
    /// The frame the dimensions were read from.
    pub sample: PathBuf,
}

/// Probes `dir` for image frames (not recursive).
///
/// # Errors
/// [`RegionMaskError::FrameProbe`] if the directory cannot be listed,
/// contains no frames, or the first frame's header cannot be read.
pub fn probe_frames(dir: &Path) -> Result<FrameSet, RegionMaskError> {
    let frames = list_frames(dir)?;

    let Some(sample) = frames.first() else {
        return Err(RegionMaskError::FrameProbe {
            path: dir.to_path_buf(),
            message: format!(
                "no image frames found (looked for: {})",
                FRAME_EXTENSIONS.join(", ")
            ),
        });
    };

    let (width, height) = read_frame_dimensions(sample)?;
    log::debug!(
        "Probed {} frame(s) at {}x{} from {}",
        frames.len(),
        width,
        height,
        sample.display()
    );

    Ok(FrameSet {
        width,
        height,
        frame_count: frames.len(),
        sample: sample.clone(),
    })
}

fn list_frames(dir: &Path) -> Result<Vec<PathBuf>, RegionMaskError> {
    let mut frames = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry.map_err(|source| RegionMaskError::FrameProbe {
            path: dir.to_path_buf(),
            message: format!("failed while listing directory: {source}"),
        })?;

        if entry.file_type().is_file() && has_frame_extension(entry.path()) {
            frames.push(entry.into_path());
        }
    }

    frames.sort();
    Ok(frames)
}

fn has_frame_extension(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    FRAME_EXTENSIONS
        .iter()
        .any(|allowed| ext.eq_ignore_ascii_case(allowed))
}

fn read_frame_dimensions(path: &Path) -> Result<(u32, u32), RegionMaskError> {
    let probe_error = |message: String| RegionMaskError::FrameProbe {
        path: path.to_path_buf(),
        message,
    };

    let size = imagesize::size(path)
        .map_err(|source| probe_error(format!("failed to read image header: {source}")))?;

    let width: u32 = size
        .width
        .try_into()
        .map_err(|_| probe_error(format!("image width {} does not fit in u32", size.width)))?;
    let height: u32 = size
        .height
        .try_into()
        .map_err(|_| probe_error(format!("image height {} does not fit in u32", size.height)))?;

    Ok((width, height))
}
