//! Canonical rectangles in the fixed internal convention.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use super::{Normalized, Pixel};

/// An axis-aligned rectangle `(x_min, y_min, x_max, y_max)` with the origin
/// at the top-left and Y growing downward, as in raster images.
///
/// The `TSpace` parameter is either [`Normalized`] or [`Pixel`].
///
/// Rectangles produced from validated regions satisfy `x_min < x_max` and
/// `y_min < y_max`. The constructor does not enforce it, so that tests and
/// diagnostics can describe malformed rectangles too.
#[derive(Clone, Copy, PartialEq)]
pub struct CanonicalRect<TSpace> {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
    _space: PhantomData<TSpace>,
}

impl<TSpace> CanonicalRect<TSpace> {
    #[inline]
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
            _space: PhantomData,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Returns true if both axes have strictly positive extent.
    #[inline]
    pub fn has_area(&self) -> bool {
        self.x_min < self.x_max && self.y_min < self.y_max
    }
}

impl CanonicalRect<Normalized> {
    /// Scales the rectangle onto a `width x height` pixel frame.
    ///
    /// No rounding or clamping happens here; see
    /// [`PixelBounds`](crate::mask::PixelBounds) for that step.
    pub fn to_pixel(&self, width: u32, height: u32) -> CanonicalRect<Pixel> {
        let (w, h) = (f64::from(width), f64::from(height));
        CanonicalRect::new(
            self.x_min * w,
            self.y_min * h,
            self.x_max * w,
            self.y_max * h,
        )
    }

    /// Returns true if any edge lies outside the nominal `[0, 1]` range.
    pub fn exceeds_unit_square(&self) -> bool {
        [self.x_min, self.y_min, self.x_max, self.y_max]
            .iter()
            .any(|v| !(0.0..=1.0).contains(v))
    }
}

impl<TSpace> std::fmt::Debug for CanonicalRect<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanonicalRect")
            .field("x_min", &self.x_min)
            .field("y_min", &self.y_min)
            .field("x_max", &self.x_max)
            .field("y_max", &self.y_max)
            .finish()
    }
}

// Written by hand so TSpace needs no serde bounds.
impl<TSpace> Serialize for CanonicalRect<TSpace> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("CanonicalRect", 4)?;
        state.serialize_field("x_min", &self.x_min)?;
        state.serialize_field("y_min", &self.y_min)?;
        state.serialize_field("x_max", &self.x_max)?;
        state.serialize_field("y_max", &self.y_max)?;
        state.end()
    }
}

impl<'de, TSpace> Deserialize<'de> for CanonicalRect<TSpace> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RectData {
            x_min: f64,
            y_min: f64,
            x_max: f64,
            y_max: f64,
        }
        let data = RectData::deserialize(deserializer)?;
        Ok(CanonicalRect::new(
            data.x_min, data.y_min, data.x_max, data.y_max,
        ))
    }
}
