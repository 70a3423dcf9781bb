//! User-supplied regions, before validation or conversion.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A region exactly as the user gave it: `(left, top, right, bottom)` in
/// normalized units under whatever [`OriginConvention`](super::OriginConvention)
/// the run uses.
///
/// Values are not clamped; a region may reach past the frame edges on
/// purpose. Serializes as a bare `[left, top, right, bottom]` array, which is
/// the region file format.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct RawRegion {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl RawRegion {
    pub const COMPONENTS: usize = 4;

    #[inline]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Builds a region from a slice in `(left, top, right, bottom)` order.
    ///
    /// Returns `None` unless the slice holds exactly four values.
    pub fn from_components(values: &[f64]) -> Option<Self> {
        match values {
            [left, top, right, bottom] => Some(Self::new(*left, *top, *right, *bottom)),
            _ => None,
        }
    }

    #[inline]
    pub fn components(&self) -> [f64; 4] {
        [self.left, self.top, self.right, self.bottom]
    }

    /// Returns true if no component is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.components().iter().all(|v| v.is_finite())
    }

    /// Returns true if any component lies outside `[0, 1]`.
    pub fn is_out_of_range(&self) -> bool {
        self.components()
            .iter()
            .any(|v| !(0.0..=1.0).contains(v))
    }
}

impl From<[f64; 4]> for RawRegion {
    fn from([left, top, right, bottom]: [f64; 4]) -> Self {
        Self::new(left, top, right, bottom)
    }
}

impl From<RawRegion> for [f64; 4] {
    fn from(region: RawRegion) -> Self {
        region.components()
    }
}

impl fmt::Display for RawRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
