//! Conversion between user conventions and the canonical rectangle.
//!
//! This is the only code that branches on [`OriginConvention`]. Everything
//! downstream sees [`CanonicalRect`] values with Y growing downward.

use super::{CanonicalRect, Normalized, OriginConvention, RawRegion};

impl RawRegion {
    /// Maps the region into the canonical left-top convention.
    ///
    /// The X axis is shared by both conventions. Under `left-bottom` the Y
    /// values are flipped (`y = 1 - v`); under `left-top` they pass through.
    ///
    /// Call this only on regions that passed
    /// [`validate_region`](crate::validation::validate_region); the ordering
    /// guarantee of the result depends on it.
    pub fn to_canonical(&self, origin: OriginConvention) -> CanonicalRect<Normalized> {
        let (y_min, y_max) = match origin {
            OriginConvention::LeftBottom => (1.0 - self.top, 1.0 - self.bottom),
            OriginConvention::LeftTop => (self.top, self.bottom),
        };
        CanonicalRect::new(self.left, y_min, self.right, y_max)
    }
}

impl CanonicalRect<Normalized> {
    /// Re-derives the user-facing region under `origin`.
    pub fn to_raw(&self, origin: OriginConvention) -> RawRegion {
        let (top, bottom) = match origin {
            OriginConvention::LeftBottom => (1.0 - self.y_min, 1.0 - self.y_max),
            OriginConvention::LeftTop => (self.y_min, self.y_max),
        };
        RawRegion::new(self.x_min, top, self.x_max, bottom)
    }
}
