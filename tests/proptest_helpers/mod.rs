#![allow(dead_code)]

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};
use regionmask::region::{OriginConvention, RawRegion};

/// Denominator of the coordinate grid used by exact-equality properties.
///
/// Multiples of `1 / 1024` survive `1 - v` without rounding, so round trips
/// through the origin flip can be compared with `==`.
pub const GRID: u32 = 1024;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn arb_origin() -> impl Strategy<Value = OriginConvention> {
    prop_oneof![Just(OriginConvention::LeftBottom), Just(OriginConvention::LeftTop)]
}

/// A grid value in `[0, 1]`.
pub fn grid_value() -> impl Strategy<Value = f64> {
    (0..=GRID).prop_map(|k| k as f64 / GRID as f64)
}

/// Two distinct grid values in increasing order.
pub fn grid_span() -> impl Strategy<Value = (f64, f64)> {
    (0..GRID)
        .prop_flat_map(|low| (Just(low), (low + 1)..=GRID))
        .prop_map(|(low, high)| (low as f64 / GRID as f64, high as f64 / GRID as f64))
}

/// A valid region under `left-bottom`: `left < right`, `top > bottom`.
pub fn valid_left_bottom_region() -> BoxedStrategy<RawRegion> {
    (grid_span(), grid_span())
        .prop_map(|((left, right), (bottom, top))| RawRegion::new(left, top, right, bottom))
        .boxed()
}

/// A valid region under `left-top`: `left < right`, `top < bottom`.
pub fn valid_left_top_region() -> BoxedStrategy<RawRegion> {
    (grid_span(), grid_span())
        .prop_map(|((left, right), (top, bottom))| RawRegion::new(left, top, right, bottom))
        .boxed()
}

pub fn valid_region(origin: OriginConvention) -> BoxedStrategy<RawRegion> {
    match origin {
        OriginConvention::LeftBottom => valid_left_bottom_region(),
        OriginConvention::LeftTop => valid_left_top_region(),
    }
}

/// An origin together with a region that is valid under it.
pub fn origin_and_region() -> impl Strategy<Value = (OriginConvention, RawRegion)> {
    arb_origin().prop_flat_map(|origin| (Just(origin), valid_region(origin)))
}

/// Frame sizes small enough to keep mask comparisons cheap.
pub fn frame_dims() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=96, 1u32..=96)
}

/// A finite coordinate, possibly outside `[0, 1]`.
pub fn loose_value() -> impl Strategy<Value = f64> {
    -2.0f64..2.0
}
