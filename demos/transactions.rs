//! Demo: live transaction-volume chart with zoom, pan and an external tooltip.
//!
//! What it demonstrates
//! - Feeding a refreshed `Series` into an embedded `ChartView` while the
//!   user's zoom level is preserved across refreshes.
//! - Rendering a host-side tooltip from the resolved hovered sample.
//!
//! How to run
//! ```bash
//! cargo run --example transactions
//! ```
//! Scroll to zoom, drag to pan, double-click to reset the view.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use eframe::egui;
use payplot::{ChartConfig, ChartView, Sample, Series, Variant, YFormatter};

const REFRESH_INTERVAL_SECS: f64 = 0.25;
const MAX_POINTS: usize = 2400;

fn now_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// Synthetic settled-volume signal: a daily-ish swell plus short-term chop.
fn volume_at(t: f64) -> f64 {
    let base = 125_000.0;
    let swell = 40_000.0 * (t / 90.0).sin();
    let chop = 12_000.0 * (t / 7.0).sin() + 4_000.0 * (t / 1.7).cos();
    (base + swell + chop).max(0.0)
}

struct DemoApp {
    view: ChartView,
    samples: Vec<Sample>,
    last_push: f64,
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let t = now_secs();
        if t - self.last_push >= REFRESH_INTERVAL_SECS {
            self.last_push = t;
            self.samples.push(Sample::new(t, volume_at(t)));
            if self.samples.len() > MAX_POINTS {
                let excess = self.samples.len() - MAX_POINTS;
                self.samples.drain(..excess);
            }
            // Replacing the series does not reset the zoom transform.
            self.view.set_series(Series::time(self.samples.clone()));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let chart = self.view.show(ui);
            if let Some(hovered) = chart.hovered {
                let pos = chart.response.rect.min
                    + egui::vec2(hovered.pixel.x as f32 + 66.0, hovered.pixel.y as f32);
                egui::Area::new(egui::Id::new("volume_tooltip"))
                    .fixed_pos(pos)
                    .show(ctx, |ui| {
                        egui::Frame::popup(ui.style()).show(ui, |ui| {
                            ui.label(format!("${:.0}", hovered.sample.y));
                        });
                    });
            }
        });

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

fn main() -> eframe::Result<()> {
    let mut config = ChartConfig::default();
    config.title = "Transaction volume".to_string();
    config.variant = Variant::Area;
    config.axis_labels.y = Some("Settled volume".to_string());
    config.y_formatter = YFormatter::currency("$");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(1000.0, 620.0)),
        ..Default::default()
    };
    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| {
            Ok(Box::new(DemoApp {
                view: ChartView::new(config),
                samples: Vec::new(),
                last_push: 0.0,
            }))
        }),
    )
}
