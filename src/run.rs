//! Top-level entry point for running a chart as a native window.
//!
//! [`run_chart`] is the quickest way to put a series on screen: it wraps a
//! [`ChartView`] in a minimal eframe app and blocks until the window closes.
//! Embedding hosts skip this and call [`ChartView::show`] from their own UI.

use eframe::egui;

use crate::chart::ChartView;
use crate::config::ChartConfig;
use crate::data::series::Series;

struct ChartApp {
    view: ChartView,
    applied_scheme: bool,
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.applied_scheme {
            self.view.config().color_scheme.apply(ctx);
            self.applied_scheme = true;
        }
        egui::CentralPanel::default().show(ctx, |ui| {
            self.view.show(ui);
        });
    }
}

/// Open a native window showing the given series until the window is closed.
pub fn run_chart(series: Series, mut config: ChartConfig) -> eframe::Result<()> {
    let title = config.title.clone();
    let mut opts = config.native_options.take().unwrap_or_default();
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts.viewport.clone().with_inner_size(egui::vec2(1000.0, 620.0));
    }

    let view = ChartView::with_series(series, config);
    eframe::run_native(
        &title,
        opts,
        Box::new(|_cc| {
            Ok(Box::new(ChartApp {
                view,
                applied_scheme: false,
            }))
        }),
    )
}
