//! Region types shared by every stage of mask construction.
//!
//! A [`RawRegion`] is what the user typed, interpreted under one
//! [`OriginConvention`]. After validation it is converted once into a
//! [`CanonicalRect`], which uses a single fixed convention (top-left origin,
//! Y down) so later stages never need to know which convention was used.
//!
//! # Example
//!
//! ```
//! use regionmask::region::{OriginConvention, RawRegion};
//!
//! let subtitles = RawRegion::new(0.0, 0.15, 1.0, 0.0);
//! let rect = subtitles.to_canonical(OriginConvention::LeftBottom);
//! assert_eq!(rect.y_max, 1.0);
//! ```

mod convert;
mod origin;
mod raw;
mod rect;
mod space;

pub use origin::OriginConvention;
pub use raw::RawRegion;
pub use rect::CanonicalRect;
pub use space::{Normalized, Pixel};
