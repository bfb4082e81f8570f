use payplot::data::scale::{build_scales, nice_max, XScale};
use payplot::{Bounds, Sample, Series, ZoomMode, ZoomTransform};

fn demo_series() -> Series {
    Series::time(vec![
        Sample::new(0.0, 0.0),
        Sample::new(1.0, 10.0),
        Sample::new(2.0, 5.0),
    ])
}

const BOUNDS: Bounds = Bounds::new(200.0, 100.0);

#[test]
fn scale_build_is_idempotent() {
    let series = demo_series();
    let a = build_scales(&series, BOUNDS, ZoomTransform::IDENTITY, ZoomMode::Both);
    let b = build_scales(&series, BOUNDS, ZoomTransform::IDENTITY, ZoomMode::Both);
    for sample in series.samples() {
        assert_eq!(a.x.scale(sample.x), b.x.scale(sample.x));
        assert_eq!(a.y.scale(sample.y), b.y.scale(sample.y));
    }
}

#[test]
fn identity_mapping_matches_expected_pixels() {
    let series = demo_series();
    let scales = build_scales(&series, BOUNDS, ZoomTransform::IDENTITY, ZoomMode::Both);

    // y is inverted: larger values render higher (smaller pixel y).
    assert_eq!(scales.x.scale(0.0), 0.0);
    assert_eq!(scales.y.scale(0.0), 100.0);
    assert_eq!(scales.x.scale(1.0), 100.0);
    assert_eq!(scales.y.scale(10.0), 0.0);
    assert_eq!(scales.x.scale(2.0), 200.0);
    assert_eq!(scales.y.scale(5.0), 50.0);
}

#[test]
fn y_domain_uses_nice_upper_bound() {
    let series = Series::time(vec![Sample::new(0.0, 1.0), Sample::new(1.0, 7.3)]);
    let scales = build_scales(&series, BOUNDS, ZoomTransform::IDENTITY, ZoomMode::Both);
    assert_eq!(scales.y.domain(), (0.0, 8.0));
}

#[test]
fn empty_series_falls_back_to_unit_domains() {
    let series = Series::empty();
    let scales = build_scales(&series, BOUNDS, ZoomTransform::IDENTITY, ZoomMode::Both);
    assert!(scales.x.scale(0.5).is_finite());
    assert_eq!(scales.y.domain(), (0.0, 1.0));
}

#[test]
fn single_sample_does_not_collapse_the_domain() {
    let series = Series::time(vec![Sample::new(42.0, 3.0)]);
    let scales = build_scales(&series, BOUNDS, ZoomTransform::IDENTITY, ZoomMode::Both);
    let px = scales.x.scale(42.0);
    assert!(px.is_finite());
    assert!(scales.x.invert(px).is_finite());
}

#[test]
fn constant_zero_series_keeps_finite_scales() {
    let series = Series::time(vec![Sample::new(0.0, 0.0), Sample::new(1.0, 0.0)]);
    let scales = build_scales(&series, BOUNDS, ZoomTransform::IDENTITY, ZoomMode::Both);
    assert_eq!(scales.y.domain(), (0.0, 1.0));
    assert_eq!(scales.y.scale(0.0), 100.0);
}

#[test]
fn zoomed_scales_compose_the_transform() {
    let series = demo_series();
    let t = ZoomTransform {
        k: 2.0,
        tx: -100.0,
        ty: -50.0,
    };
    let scales = build_scales(&series, BOUNDS, t, ZoomMode::Both);
    // Base pixel of x=1 is 100; transformed: 2*100 - 100 = 100.
    assert_eq!(scales.x.scale(1.0), 100.0);
    // Base pixel of x=0 is 0; transformed: -100 (off-screen to the left).
    assert_eq!(scales.x.scale(0.0), -100.0);
    // Inverting the visible window recovers the zoomed-in domain.
    let (lo, hi) = scales.x.visible_domain((0.0, BOUNDS.width));
    assert!((lo - 0.5).abs() < 1e-12);
    assert!((hi - 1.5).abs() < 1e-12);
}

#[test]
fn x_only_mode_leaves_y_untransformed() {
    let series = demo_series();
    let t = ZoomTransform {
        k: 2.0,
        tx: -100.0,
        ty: -50.0,
    };
    let scales = build_scales(&series, BOUNDS, t, ZoomMode::X);
    assert_eq!(scales.y.scale(0.0), 100.0);
    assert_eq!(scales.y.scale(10.0), 0.0);
}

#[test]
fn resize_preserves_zoom_and_only_moves_ranges() {
    let series = demo_series();
    let t = ZoomTransform {
        k: 2.0,
        tx: -120.0,
        ty: 0.0,
    };
    let small = build_scales(&series, Bounds::new(200.0, 100.0), t, ZoomMode::X);
    let wide = build_scales(&series, Bounds::new(400.0, 100.0), t, ZoomMode::X);
    // Same transform in, same domains out; only pixel ranges differ.
    match (&small.x, &wide.x) {
        (XScale::Linear(a), XScale::Linear(b)) => {
            assert_eq!(a.domain(), b.domain());
            assert_ne!(a.range(), b.range());
        }
        _ => panic!("expected linear x scales"),
    }
}

#[test]
fn categorical_series_builds_a_point_scale() {
    let series = Series::categorical(
        vec!["Q1".into(), "Q2".into(), "Q3".into()],
        vec![5.0, 9.0, 7.0],
    );
    let scales = build_scales(&series, BOUNDS, ZoomTransform::IDENTITY, ZoomMode::X);
    assert_eq!(scales.x.scale(0.0), 0.0);
    assert_eq!(scales.x.scale(1.0), 100.0);
    assert_eq!(scales.x.scale(2.0), 200.0);
    assert_eq!(scales.x.invert(92.0), 1.0);
}

#[test]
fn nice_max_examples() {
    assert_eq!(nice_max(10.0), 10.0);
    assert_eq!(nice_max(0.73), 0.8);
    assert_eq!(nice_max(1_640_000.0), 2_000_000.0);
}
