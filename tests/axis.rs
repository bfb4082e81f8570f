use payplot::data::axis::{x_axis_ticks, y_axis_ticks};
use payplot::data::scale::build_scales;
use payplot::data::x_formatter::EpochUnit;
use payplot::{
    Bounds, Sample, Series, XFormatter, YFormatter, ZoomMode, ZoomTransform,
};

const BOUNDS: Bounds = Bounds::new(200.0, 100.0);

fn demo_series() -> Series {
    Series::time(vec![
        Sample::new(0.0, 0.0),
        Sample::new(1.0, 10.0),
        Sample::new(2.0, 5.0),
    ])
}

#[test]
fn y_ticks_land_on_round_values() {
    let series = demo_series();
    let scales = build_scales(&series, BOUNDS, ZoomTransform::IDENTITY, ZoomMode::Both);
    let ticks = y_axis_ticks(&scales, BOUNDS, None, &YFormatter::Auto);
    let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![0.0, 5.0, 10.0]);
    assert_eq!(ticks[0].pixel, 100.0);
    assert_eq!(ticks[2].pixel, 0.0);
    assert_eq!(ticks[1].label, "5");
}

#[test]
fn tick_count_override_changes_the_step() {
    let series = demo_series();
    let scales = build_scales(&series, BOUNDS, ZoomTransform::IDENTITY, ZoomMode::Both);
    let ticks = y_axis_ticks(&scales, BOUNDS, Some(5), &YFormatter::Auto);
    let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
}

#[test]
fn zoomed_ticks_stay_inside_the_bounds() {
    let series = demo_series();
    let t = ZoomTransform {
        k: 2.0,
        tx: -100.0,
        ty: -50.0,
    };
    let scales = build_scales(&series, BOUNDS, t, ZoomMode::Both);
    for tick in x_axis_ticks(&series, &scales, BOUNDS, None, &XFormatter::Auto) {
        assert!(tick.pixel >= -0.5 && tick.pixel <= BOUNDS.width + 0.5);
    }
    for tick in y_axis_ticks(&scales, BOUNDS, None, &YFormatter::Auto) {
        assert!(tick.pixel >= -0.5 && tick.pixel <= BOUNDS.height + 0.5);
    }
}

#[test]
fn time_series_ticks_get_time_labels() {
    let t0 = 1_700_000_000.0;
    let series = Series::time(vec![
        Sample::new(t0, 3.0),
        Sample::new(t0 + 3_600.0, 6.0),
        Sample::new(t0 + 7_200.0, 4.0),
    ]);
    let scales = build_scales(&series, BOUNDS, ZoomTransform::IDENTITY, ZoomMode::Both);
    let ticks = x_axis_ticks(&series, &scales, BOUNDS, None, &XFormatter::Auto);
    assert!(!ticks.is_empty());
    for tick in &ticks {
        assert!(
            tick.label.contains(':'),
            "expected a time label, got {:?}",
            tick.label
        );
    }
}

#[test]
fn millisecond_epoch_series_formats_through_the_unit() {
    let t0 = 1_700_000_000_000.0;
    let series = Series::time_with_unit(
        vec![
            Sample::new(t0, 1.0),
            Sample::new(t0 + 1_800_000.0, 2.0),
            Sample::new(t0 + 3_600_000.0, 3.0),
        ],
        EpochUnit::Milliseconds,
    );
    let scales = build_scales(&series, BOUNDS, ZoomTransform::IDENTITY, ZoomMode::Both);
    let ticks = x_axis_ticks(&series, &scales, BOUNDS, None, &XFormatter::Auto);
    assert!(!ticks.is_empty());
    assert!(ticks[0].label.contains(':'));
}

#[test]
fn categorical_ticks_use_the_labels_and_thin_out() {
    let series = Series::categorical(
        vec!["Mon".into(), "Tue".into(), "Wed".into(), "Thu".into(), "Fri".into()],
        vec![4.0, 7.0, 5.0, 9.0, 6.0],
    );
    let scales = build_scales(&series, BOUNDS, ZoomTransform::IDENTITY, ZoomMode::X);
    // Narrow bounds leave room for two labels; every other category is kept.
    let ticks = x_axis_ticks(&series, &scales, BOUNDS, None, &XFormatter::Auto);
    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["Mon", "Wed", "Fri"]);

    // With an explicit count override every category keeps its tick.
    let all = x_axis_ticks(&series, &scales, BOUNDS, Some(5), &XFormatter::Auto);
    assert_eq!(all.len(), 5);
}

#[test]
fn currency_labels_on_the_y_axis() {
    let series = Series::time(vec![
        Sample::new(0.0, 500_000.0),
        Sample::new(1.0, 1_900_000.0),
    ]);
    let scales = build_scales(&series, BOUNDS, ZoomTransform::IDENTITY, ZoomMode::Both);
    let ticks = y_axis_ticks(&scales, BOUNDS, Some(4), &YFormatter::currency("$"));
    assert!(ticks.iter().any(|t| t.label == "$1,000,000"));
}
