//! Coordinate space marker types.
//!
//! Zero-sized types used as type parameters so that a rectangle measured in
//! frame fractions can never be handed to code expecting pixel units.

use std::fmt;

/// Marker for pixel units on a concrete frame, origin at the top-left
/// corner with Y growing downward.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {}

/// Marker for normalized units, where 1.0 spans the full frame width or
/// height.
///
/// Values outside `[0.0, 1.0]` are representable; the rasterizer clamps
/// them onto the grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalized {}

impl fmt::Debug for Pixel {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl fmt::Debug for Normalized {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}
