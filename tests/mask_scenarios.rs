//! End-to-end mask scenarios, from region source to exported image.

mod common;

use regionmask::export::export_mask;
use regionmask::mask::PixelBounds;
use regionmask::region::{OriginConvention, RawRegion};
use regionmask::source::RegionSource;
use regionmask::{FrameMaskProvider, MaskJob, RegionMaskError, RegionSet};

fn left_bottom(regions: &[[f64; 4]]) -> RegionSet {
    RegionSet::new(
        OriginConvention::LeftBottom,
        regions.iter().map(|r| RawRegion::from(*r)).collect(),
    )
}

#[test]
fn centered_square_on_square_frame() {
    let regions = left_bottom(&[[0.25, 0.75, 0.75, 0.25]]);

    let rect = regions.canonical_rects().unwrap()[0].to_pixel(100, 100);
    assert_eq!(
        PixelBounds::from_rect(&rect, 100, 100),
        PixelBounds::new(25, 25, 75, 75)
    );

    let mask = regions.build_mask(100, 100).unwrap();
    assert_eq!(mask.masked_count(), 50 * 50);
    for y in 0..100 {
        let expected = (25..75).contains(&y);
        assert_eq!(mask.get(25, y), expected, "row {y}");
        assert_eq!(mask.get(74, y), expected, "row {y}");
        assert!(!mask.get(24, y));
        assert!(!mask.get(75, y));
    }
}

#[test]
fn top_fifteen_percent_of_tall_frame() {
    let mask = left_bottom(&[[0.0, 1.0, 1.0, 0.85]])
        .build_mask(100, 200)
        .unwrap();

    for y in 0..30 {
        assert!(mask.row(y).iter().all(|&p| p), "row {y} should be masked");
    }
    for y in 30..200 {
        assert!(mask.row(y).iter().all(|&p| !p), "row {y} should be clear");
    }
    assert_eq!(mask.masked_count(), 100 * 30);
}

#[test]
fn top_and_bottom_bands_leave_middle_clear() {
    let mask = left_bottom(&[[0.0, 1.0, 1.0, 0.85], [0.0, 0.15, 1.0, 0.0]])
        .build_mask(100, 200)
        .unwrap();

    assert!(mask.row(10).iter().all(|&p| p));
    assert!(mask.row(100).iter().all(|&p| !p));
    assert!(mask.row(190).iter().all(|&p| p));
    assert_eq!(mask.masked_count(), 100 * 60);
}

#[test]
fn tuples_and_file_combine_into_one_mask() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("bottom.json");
    std::fs::write(&file, "[[0.0, 0.15, 1.0, 0.0]]").unwrap();

    let regions = RegionSource::new()
        .with_tuple([0.0, 1.0, 1.0, 0.85])
        .with_json_file(&file)
        .into_region_set(OriginConvention::LeftBottom)
        .unwrap();
    assert_eq!(regions.len(), 2);
    assert_eq!(regions.regions()[0], RawRegion::new(0.0, 1.0, 1.0, 0.85));

    let from_file = regions.build_mask(100, 200).unwrap();
    let from_tuples = left_bottom(&[[0.0, 1.0, 1.0, 0.85], [0.0, 0.15, 1.0, 0.0]])
        .build_mask(100, 200)
        .unwrap();
    assert_eq!(from_file, from_tuples);
}

#[test]
fn bad_region_stops_the_job_before_any_frame() {
    let job = MaskJob::new(left_bottom(&[[0.0, 1.0, 1.0, 0.85], [0.6, 1.0, 0.4, 0.0]]));
    let err = job.mask_for(100, 200).unwrap_err();

    match err {
        RegionMaskError::InvalidRegion { index, violation, .. } => {
            assert_eq!(index, 1);
            assert!(violation.to_string().contains("left > right"), "{violation}");
        }
        other => panic!("expected InvalidRegion, got {other:?}"),
    }
}

#[test]
fn job_mask_is_reused_for_every_frame() {
    let job = MaskJob::new(left_bottom(&[[0.0, 1.0, 1.0, 0.85]]));
    let first = job.mask_for(64, 36).unwrap();
    let second = job.mask_for(64, 36).unwrap();
    assert_eq!(first, second);
}

#[test]
fn exported_image_matches_mask() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bands.png");

    let mask = left_bottom(&[[0.0, 1.0, 1.0, 0.85], [0.0, 0.15, 1.0, 0.0]])
        .build_mask(100, 200)
        .unwrap();
    export_mask(&mask, &path).unwrap();

    let img = common::read_mask_image(&path);
    assert_eq!(img.dimensions(), (100, 200));
    assert_eq!(common::white_count(&img), mask.masked_count());
    assert!(common::row_is_white(&img, 10));
    assert!(common::row_is_black(&img, 100));
    assert!(common::row_is_white(&img, 190));
}
