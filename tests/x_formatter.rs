use payplot::data::x_formatter::*;
use payplot::data::y_formatter::YFormatter;

// Helper: build a LOCAL timestamp as seconds (labels render in local time)
fn local_secs(year: i32, month: u32, day: u32, h: u32, m: u32, s: u32) -> f64 {
    use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
    let ndt = NaiveDateTime::new(
        NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        NaiveTime::from_hms_opt(h, m, s).unwrap(),
    );
    Local
        .from_local_datetime(&ndt)
        .earliest()
        .map(|dt| dt.timestamp() as f64)
        .unwrap_or(0.0)
}

#[test]
fn epoch_unit_units_per_second() {
    assert_eq!(EpochUnit::Seconds.units_per_second(), 1.0);
    assert_eq!(EpochUnit::Milliseconds.units_per_second(), 1_000.0);
    assert!((EpochUnit::Milliseconds.to_seconds(3_000.0) - 3.0).abs() < 1e-12);
}

#[test]
fn determine_resolution_wide_range_returns_minutes() {
    let tf = TimeFormatter::default();
    assert_eq!(tf.determine_resolution(86_400.0), TimeResolution::Minutes);
}

#[test]
fn determine_resolution_just_below_seconds_threshold() {
    let tf = TimeFormatter::default();
    assert_eq!(tf.determine_resolution(21_599.0), TimeResolution::Seconds);
}

#[test]
fn determine_resolution_narrow_range_returns_milliseconds() {
    let tf = TimeFormatter::default();
    assert_eq!(tf.determine_resolution(30.0), TimeResolution::Milliseconds);
}

#[test]
fn max_resolution_caps_the_granularity() {
    let tf = TimeFormatter {
        max_resolution: TimeResolution::Seconds,
        ..TimeFormatter::default()
    };
    assert_eq!(tf.determine_resolution(0.5), TimeResolution::Seconds);
}

#[test]
fn min_resolution_floors_the_granularity() {
    let tf = TimeFormatter {
        min_resolution: TimeResolution::Seconds,
        ..TimeFormatter::default()
    };
    assert_eq!(tf.determine_resolution(86_400.0), TimeResolution::Seconds);
}

#[test]
fn format_no_date_when_range_within_day() {
    let tf = TimeFormatter::default();
    let t = local_secs(2024, 1, 15, 12, 0, 0);
    let out = tf.format(t, (t - 120.0, t + 120.0));
    let colon_count = out.chars().filter(|&c| c == ':').count();
    assert_eq!(colon_count, 2, "Expected HH:MM:SS format, got: {}", out);
    assert!(!out.contains('-'), "Unexpected date in: {}", out);
}

#[test]
fn format_shows_date_when_range_crosses_midnight() {
    let tf = TimeFormatter::default();
    let t_before = local_secs(2024, 1, 15, 23, 59, 55);
    let t_after = local_secs(2024, 1, 16, 0, 0, 5);
    let out = tf.format(t_before, (t_before, t_after));
    assert!(out.contains('-'), "Expected date in: {}", out);
}

#[test]
fn format_shows_year_when_year_changes() {
    let tf = TimeFormatter::default();
    let t_dec31 = local_secs(2023, 12, 31, 23, 59, 55);
    let t_jan01 = local_secs(2024, 1, 1, 0, 0, 5);
    let out = tf.format(t_dec31, (t_dec31, t_jan01));
    assert!(
        out.contains("2023") || out.contains("2024"),
        "No year in: {}",
        out
    );
}

#[test]
fn format_hides_year_when_forced_date_within_one_year() {
    let tf = TimeFormatter {
        force_date_visible: true,
        ..TimeFormatter::default()
    };
    let t = local_secs(2024, 3, 10, 9, 30, 0);
    let out = tf.format(t, (t - 60.0, t + 60.0));
    assert!(out.contains("03-10"), "Expected date in: {}", out);
    assert!(!out.contains("2024"), "Unexpected year in: {}", out);
}

#[test]
fn format_appends_milliseconds_on_narrow_ranges() {
    let tf = TimeFormatter::default();
    let t = local_secs(2024, 1, 15, 12, 0, 0) + 0.25;
    let out = tf.format(t, (t - 5.0, t + 5.0));
    assert!(out.ends_with(".250"), "Expected .250 suffix in: {}", out);
}

#[test]
fn format_handles_millisecond_epoch_unit() {
    let tf = TimeFormatter::for_epoch_unit(EpochUnit::Milliseconds);
    let t_ms = local_secs(2024, 1, 15, 12, 0, 0) * 1_000.0;
    // A two-hour visible range expressed in milliseconds.
    let out = tf.format(t_ms, (t_ms, t_ms + 7_200_000.0));
    assert!(out.contains("12:00"), "Expected local noon in: {}", out);
}

#[test]
fn non_finite_values_fall_back_to_the_epoch() {
    let tf = TimeFormatter::default();
    let out = tf.format(f64::NAN, (0.0, 100.0));
    assert!(!out.is_empty());
}

#[test]
fn decimal_formatter_appends_unit() {
    let df = DecimalFormatter {
        decimal_places: 1,
        unit: Some("ms".to_string()),
    };
    assert_eq!(df.format(12.34), "12.3 ms");
}

#[test]
fn xformatter_auto_uses_time_formatting() {
    let t = local_secs(2024, 5, 2, 8, 15, 0);
    let out = XFormatter::Auto.format(t, (t - 30.0, t + 30.0), EpochUnit::Seconds);
    assert!(out.contains(':'), "Expected a time label, got: {}", out);
}

#[test]
fn yformatter_currency_label() {
    let f = YFormatter::currency("$");
    assert_eq!(f.format(2_500_000.0, 500_000.0), "$2,500,000");
}
