//! Scaling canonical rectangles onto a pixel grid.

use super::Mask;
use crate::region::{CanonicalRect, Normalized, Pixel};

/// Half-open pixel bounds `[x_min, x_max) x [y_min, y_max)` on a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelBounds {
    pub x_min: u32,
    pub y_min: u32,
    pub x_max: u32,
    pub y_max: u32,
}

impl PixelBounds {
    pub fn new(x_min: u32, y_min: u32, x_max: u32, y_max: u32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Snaps a pixel-space rectangle outward to whole pixels and clamps it
    /// into a `width x height` frame.
    ///
    /// Minimum edges round down and maximum edges round up, so any pixel the
    /// rectangle touches is included. An edge within [`EDGE_TOLERANCE`] of a
    /// pixel boundary is taken to lie on it, so `1.0 - 0.85` of 200 rows ends
    /// at row 30 rather than 31. Snapping never empties a span: a rectangle
    /// thinner than the tolerance keeps the pixel plain floor/ceil gives it.
    /// Edges past the frame are clamped, which is how slightly out-of-range
    /// regions bleed to the border.
    pub fn from_rect(rect: &CanonicalRect<Pixel>, width: u32, height: u32) -> Self {
        let (x_min, x_max) = snap_span(rect.x_min, rect.x_max, width);
        let (y_min, y_max) = snap_span(rect.y_min, rect.y_max, height);
        Self::new(x_min, y_min, x_max, y_max)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.y_max - self.y_min
    }

    /// Returns true if the bounds cover no pixel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Distance in pixels under which an edge counts as sitting on a boundary.
pub const EDGE_TOLERANCE: f64 = 1e-9;

fn round_edge(edge: f64, direction: fn(f64) -> f64) -> f64 {
    let nearest = edge.round();
    if (edge - nearest).abs() <= EDGE_TOLERANCE {
        nearest
    } else {
        direction(edge)
    }
}

/// Rounds `[min, max)` outward to whole pixels and clamps it to `[0, limit]`.
fn snap_span(min: f64, max: f64, limit: u32) -> (u32, u32) {
    let low = round_edge(min, f64::floor);
    let high = round_edge(max, f64::ceil);
    let (low, high) = if high > low {
        (low, high)
    } else {
        (min.floor(), max.ceil())
    };

    let low = clamp_edge(low, limit);
    (low, clamp_edge(high, limit).max(low))
}

/// Clamps an already-rounded edge into `[0, limit]`.
fn clamp_edge(edge: f64, limit: u32) -> u32 {
    // `as` saturates, and NaN maps to 0.
    (edge.max(0.0) as u32).min(limit)
}

/// Renders the union of `rects` onto a `width x height` mask.
///
/// Rectangles may overlap and come in any order; the result only depends on
/// the set of rectangles. An empty slice yields an empty mask.
pub fn rasterize(width: u32, height: u32, rects: &[CanonicalRect<Normalized>]) -> Mask {
    let mut mask = Mask::new(width, height);
    for rect in rects {
        let bounds = PixelBounds::from_rect(&rect.to_pixel(width, height), width, height);
        log::trace!("Rasterizing {:?} as {:?}", rect, bounds);
        if !bounds.is_empty() {
            mask.fill(&bounds);
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> CanonicalRect<Normalized> {
        CanonicalRect::new(x_min, y_min, x_max, y_max)
    }

    #[test]
    fn test_bounds_round_outward() {
        let rect: CanonicalRect<Pixel> = CanonicalRect::new(10.2, 3.9, 20.1, 7.0);
        assert_eq!(
            PixelBounds::from_rect(&rect, 100, 100),
            PixelBounds::new(10, 3, 21, 7)
        );
    }

    #[test]
    fn test_bounds_ignore_float_noise() {
        // (1.0 - 0.85) * 200 is 30.000000000000004 in f64.
        let rect: CanonicalRect<Pixel> = CanonicalRect::new(0.0, 0.0, 100.0, (1.0 - 0.85) * 200.0);
        assert_eq!(PixelBounds::from_rect(&rect, 100, 200).y_max, 30);
    }

    #[test]
    fn test_bounds_keep_sub_tolerance_span() {
        let mask = rasterize(10, 10, &[norm(0.5, 0.5, 0.5 + 1e-12, 0.6)]);
        assert_eq!(mask.masked_count(), 1);
        assert!(mask.get(5, 5));
        assert!(!mask.get(4, 5));
        assert!(!mask.get(6, 5));
    }

    #[test]
    fn test_bounds_clamp_to_frame() {
        let rect: CanonicalRect<Pixel> = CanonicalRect::new(-5.0, -0.5, 130.0, 250.0);
        assert_eq!(
            PixelBounds::from_rect(&rect, 100, 200),
            PixelBounds::new(0, 0, 100, 200)
        );
    }

    #[test]
    fn test_bounds_fully_outside_are_empty() {
        let rect: CanonicalRect<Pixel> = CanonicalRect::new(120.0, 10.0, 150.0, 20.0);
        let bounds = PixelBounds::from_rect(&rect, 100, 100);
        assert!(bounds.is_empty());
        assert_eq!(bounds.x_min, 100);
    }

    #[test]
    fn test_empty_rect_list() {
        let mask = rasterize(64, 48, &[]);
        assert!(mask.is_empty());
        assert_eq!(mask.width(), 64);
        assert_eq!(mask.height(), 48);
    }

    #[test]
    fn test_full_frame() {
        let mask = rasterize(7, 5, &[norm(0.0, 0.0, 1.0, 1.0)]);
        assert_eq!(mask.masked_count(), 35);
    }

    #[test]
    fn test_centered_square() {
        let mask = rasterize(100, 100, &[norm(0.25, 0.25, 0.75, 0.75)]);
        assert_eq!(mask.masked_count(), 50 * 50);
        assert!(mask.get(25, 25));
        assert!(mask.get(74, 74));
        assert!(!mask.get(75, 50));
        assert!(!mask.get(24, 50));
    }

    #[test]
    fn test_overlapping_rects_union() {
        let mask = rasterize(
            10,
            10,
            &[norm(0.0, 0.0, 0.5, 0.5), norm(0.3, 0.3, 0.8, 0.8)],
        );
        // 25 + 25 - 4 overlapping pixels.
        assert_eq!(mask.masked_count(), 46);
    }

    #[test]
    fn test_order_does_not_matter() {
        let a = norm(0.1, 0.2, 0.4, 0.9);
        let b = norm(0.35, 0.0, 0.95, 0.3);
        assert_eq!(rasterize(33, 17, &[a, b]), rasterize(33, 17, &[b, a]));
    }

    #[test]
    fn test_tiny_rect_covers_at_least_one_pixel() {
        let mask = rasterize(100, 100, &[norm(0.501, 0.501, 0.502, 0.502)]);
        assert_eq!(mask.masked_count(), 1);
        assert!(mask.get(50, 50));
    }
}
