//! payplot crate root: re-exports and module wiring.
//!
//! An interactive time-series chart widget built on egui/eframe, made for the
//! transaction/volume visualizations of payment back-office dashboards:
//! - `data`: the chart engine: series, scales, zoom transform, curve
//!   geometry, axis ticks, hover resolution
//! - `chart`: the egui widget tying the engine to input and painting
//! - `config`: chart configuration (variant, curve, zoom limits, formatters)
//! - `theme`: color schemes
//! - `persistence`: JSON save/restore of the user's view state
//! - `run`: one-call native-window launcher

pub mod chart;
pub mod config;
pub mod data;
pub mod persistence;
pub mod run;
pub mod theme;

// Public re-exports for a compact external API
pub use chart::{ChartResponse, ChartView};
pub use config::{
    AxisLabels, ChartConfig, Curve, FeatureFlags, ResponsiveLayout, TickCounts, TranslateExtent,
    Variant, ZoomConfig, ZoomMode,
};
pub use data::hover::HoveredSample;
pub use data::series::{Sample, Series, XKind};
pub use data::transform::ZoomTransform;
pub use data::viewport::{Bounds, Margin, PixelPoint, Viewport};
pub use data::x_formatter::{EpochUnit, TimeFormatter, XFormatter};
pub use data::y_formatter::YFormatter;
pub use persistence::{load_view_state, save_view_state, ChartViewState};
pub use run::run_chart;
pub use theme::{ChartPalette, ColorScheme};
