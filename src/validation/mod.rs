//! Region validation.
//!
//! Regions are checked on their raw coordinates, under the origin
//! convention they were written for, before any conversion:
//! - every component is finite
//! - `left < right`
//! - `top > bottom` under `left-bottom`, `top < bottom` under `left-top`
//!
//! Checking the raw form keeps "these two values are swapped" separate from
//! "this region has no area", which is what a user needs to fix their input.
//! Coordinates outside `[0, 1]` are allowed; the rasterizer clamps them.

mod report;

pub use report::{IssueCode, IssueContext, Severity, ValidationIssue, ValidationReport};

use std::cmp::Ordering;
use std::fmt;

use crate::region::{OriginConvention, RawRegion};

/// How an ordering check failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderFault {
    /// The two values are strictly reversed, usually swapped arguments.
    Swapped,
    /// The two values are equal, leaving no width or height.
    ZeroArea,
}

/// The specific check a region failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionViolation {
    NotFinite,
    /// `left < right` does not hold.
    HorizontalOrder(OrderFault),
    /// The vertical ordering required by `origin` does not hold.
    VerticalOrder {
        origin: OriginConvention,
        fault: OrderFault,
    },
}

impl fmt::Display for RegionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionViolation::NotFinite => write!(f, "coordinates must be finite numbers"),
            RegionViolation::HorizontalOrder(fault) => {
                write!(f, "expected left < right, {}", describe_horizontal(*fault))
            }
            RegionViolation::VerticalOrder { origin, fault } => write!(
                f,
                "expected {} under {} origin, {}",
                origin.vertical_rule(),
                origin,
                describe_vertical(*fault, *origin)
            ),
        }
    }
}

impl std::error::Error for RegionViolation {}

impl RegionViolation {
    /// Returns the ordering fault, if the violation is an ordering one.
    pub fn fault(&self) -> Option<OrderFault> {
        match self {
            RegionViolation::NotFinite => None,
            RegionViolation::HorizontalOrder(fault) => Some(*fault),
            RegionViolation::VerticalOrder { fault, .. } => Some(*fault),
        }
    }

    fn issue_code(&self) -> IssueCode {
        match self {
            RegionViolation::NotFinite => IssueCode::NonFiniteRegion,
            RegionViolation::HorizontalOrder(OrderFault::Swapped) => IssueCode::SwappedHorizontal,
            RegionViolation::HorizontalOrder(OrderFault::ZeroArea) => IssueCode::ZeroWidth,
            RegionViolation::VerticalOrder {
                fault: OrderFault::Swapped,
                ..
            } => IssueCode::SwappedVertical,
            RegionViolation::VerticalOrder {
                fault: OrderFault::ZeroArea,
                ..
            } => IssueCode::ZeroHeight,
        }
    }
}

fn describe_horizontal(fault: OrderFault) -> &'static str {
    match fault {
        OrderFault::Swapped => "but left > right (are left and right swapped?)",
        OrderFault::ZeroArea => "but left == right (zero-width region)",
    }
}

fn describe_vertical(fault: OrderFault, origin: OriginConvention) -> String {
    match fault {
        OrderFault::Swapped => {
            let other = match origin {
                OriginConvention::LeftBottom => OriginConvention::LeftTop,
                OriginConvention::LeftTop => OriginConvention::LeftBottom,
            };
            format!(
                "but the values are reversed (swapped top/bottom, or coordinates written for {} origin?)",
                other
            )
        }
        OrderFault::ZeroArea => "but top == bottom (zero-height region)".to_string(),
    }
}

/// Classifies `low < high`, returning the fault when it does not hold.
fn check_order(low: f64, high: f64) -> Result<(), OrderFault> {
    match low.partial_cmp(&high) {
        Some(Ordering::Less) => Ok(()),
        Some(Ordering::Equal) => Err(OrderFault::ZeroArea),
        // Incomparable values are rejected earlier by the finiteness check.
        _ => Err(OrderFault::Swapped),
    }
}

/// Checks a single raw region under `origin`.
///
/// Returns the first failed check, in the order documented at module level.
pub fn validate_region(region: &RawRegion, origin: OriginConvention) -> Result<(), RegionViolation> {
    if !region.is_finite() {
        return Err(RegionViolation::NotFinite);
    }

    check_order(region.left, region.right).map_err(RegionViolation::HorizontalOrder)?;

    let vertical = match origin {
        OriginConvention::LeftBottom => check_order(region.bottom, region.top),
        OriginConvention::LeftTop => check_order(region.top, region.bottom),
    };
    vertical.map_err(|fault| RegionViolation::VerticalOrder { origin, fault })
}

/// Options for validation behavior.
#[derive(Clone, Debug, Default)]
pub struct ValidateOptions {
    /// If true, treat warnings as errors.
    pub strict: bool,
}

/// Validates every region and returns a report of all issues found.
///
/// Unlike [`validate_region`], this does not stop at the first problem.
/// Out-of-range coordinates and an empty region set are reported as
/// warnings, since a mask can still be built from them.
pub fn validate_regions(
    regions: &[RawRegion],
    origin: OriginConvention,
    _opts: &ValidateOptions,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    if regions.is_empty() {
        report.add(ValidationIssue::warning(
            IssueCode::NoRegions,
            "No regions supplied; the mask will not cover any pixel",
            IssueContext::RegionSet,
        ));
    }

    for (index, region) in regions.iter().enumerate() {
        let context = IssueContext::Region { index };

        if let Err(violation) = validate_region(region, origin) {
            report.add(ValidationIssue::error(
                violation.issue_code(),
                format!("Region {}: {}", region, violation),
                context,
            ));
            continue;
        }

        if region.is_out_of_range() {
            report.add(ValidationIssue::warning(
                IssueCode::OutOfRange,
                format!(
                    "Region {} reaches outside [0, 1]; it will be clamped to the frame",
                    region
                ),
                context,
            ));
        }
    }

    report
}
