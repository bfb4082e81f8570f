//! Demo: monthly settlement totals as a categorical area chart.
//!
//! What it demonstrates
//! - The categorical x-axis (month labels instead of timestamps).
//! - Currency tick labels and the light color scheme.
//! - Launching via `run_chart` without writing an eframe app.
//!
//! How to run
//! ```bash
//! cargo run --example settlements
//! ```

use payplot::{ChartConfig, ColorScheme, Curve, Series, Variant, YFormatter, ZoomMode};

fn main() -> eframe::Result<()> {
    let labels = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ]
    .map(String::from)
    .to_vec();
    let totals = vec![
        1_120_000.0,
        980_500.0,
        1_310_250.0,
        1_205_000.0,
        1_480_900.0,
        1_390_400.0,
        1_525_000.0,
        1_610_750.0,
        1_455_300.0,
        1_702_100.0,
        1_830_000.0,
        2_040_600.0,
    ];
    let series = Series::categorical(labels, totals);

    let mut config = ChartConfig::default();
    config.title = "Monthly settlements".to_string();
    config.variant = Variant::Area;
    config.curve = Curve::Monotone;
    config.color_scheme = ColorScheme::Light;
    config.y_formatter = YFormatter::currency("€");
    config.axis_labels.x = Some("Month".to_string());
    config.axis_labels.y = Some("Settled".to_string());
    // Categorical charts only ever zoom along x.
    config.zoom.mode = ZoomMode::X;

    payplot::run_chart(series, config)
}
