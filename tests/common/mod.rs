#![allow(dead_code)]

use std::fs;
use std::path::Path;

use image::GrayImage;

/// A minimal uncompressed 24-bit BMP; enough for a header probe.
pub fn bmp_bytes(width: u32, height: u32) -> Vec<u8> {
    let row_stride = (width * 3).div_ceil(4) * 4;
    let pixel_array_size = row_stride * height;
    let file_size = 54 + pixel_array_size;

    let mut bytes = Vec::with_capacity(file_size as usize);
    bytes.extend_from_slice(b"BM");
    bytes.extend_from_slice(&file_size.to_le_bytes());
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes.extend_from_slice(&54u32.to_le_bytes());

    bytes.extend_from_slice(&40u32.to_le_bytes());
    bytes.extend_from_slice(&(width as i32).to_le_bytes());
    bytes.extend_from_slice(&(height as i32).to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&24u16.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&pixel_array_size.to_le_bytes());
    bytes.extend_from_slice(&2835u32.to_le_bytes());
    bytes.extend_from_slice(&2835u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());

    bytes.resize(file_size as usize, 0);
    bytes
}

/// Fills `dir` with `count` extracted-frame stand-ins named `00000.bmp`, ...
pub fn write_frame_dir(dir: &Path, count: usize, width: u32, height: u32) {
    fs::create_dir_all(dir).expect("create frame dir");
    let bytes = bmp_bytes(width, height);
    for index in 0..count {
        fs::write(dir.join(format!("{index:05}.bmp")), &bytes).expect("write frame");
    }
}

pub fn read_mask_image(path: &Path) -> GrayImage {
    image::open(path).expect("open mask image").to_luma8()
}

/// Number of white (masked) pixels in a mask image.
pub fn white_count(img: &GrayImage) -> usize {
    img.pixels().filter(|p| p.0[0] == u8::MAX).count()
}

/// Whether every pixel of row `y` is white.
pub fn row_is_white(img: &GrayImage, y: u32) -> bool {
    (0..img.width()).all(|x| img.get_pixel(x, y).0[0] == u8::MAX)
}

/// Whether every pixel of row `y` is black.
pub fn row_is_black(img: &GrayImage, y: u32) -> bool {
    (0..img.width()).all(|x| img.get_pixel(x, y).0[0] == 0)
}
