//! Configuration types for the chart widget.

use serde::{Deserialize, Serialize};

use crate::data::viewport::{Margin, PixelPoint};
use crate::data::x_formatter::XFormatter;
use crate::data::y_formatter::YFormatter;
use crate::theme::ColorScheme;

// ─────────────────────────────────────────────────────────────────────────────
// Render variant and curve
// ─────────────────────────────────────────────────────────────────────────────

/// What the series renders as. One engine serves both: the area variant is the
/// line variant plus a fill closed against the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    Line,
    Area,
}

impl Default for Variant {
    fn default() -> Self {
        Variant::Line
    }
}

/// Interpolation between sample points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Curve {
    /// Straight segments.
    Linear,
    /// Monotone cubic interpolation; never overshoots past the local extrema
    /// of adjacent samples, so the curve implies no value that was not
    /// observed.
    Monotone,
}

impl Default for Curve {
    fn default() -> Self {
        Curve::Monotone
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Zoom configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Which axes a zoom gesture affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomMode {
    X,
    Y,
    Both,
}

impl Default for ZoomMode {
    fn default() -> Self {
        ZoomMode::Both
    }
}

impl ZoomMode {
    pub fn zooms_x(&self) -> bool {
        matches!(self, ZoomMode::X | ZoomMode::Both)
    }

    pub fn zooms_y(&self) -> bool {
        matches!(self, ZoomMode::Y | ZoomMode::Both)
    }
}

/// Rectangle in base pixel space the view may not pan beyond.
/// Defaults to the drawable bounds, i.e. zero overscroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslateExtent {
    pub min: PixelPoint,
    pub max: PixelPoint,
}

/// Limits for the zoom/pan controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    /// Allowed scale-factor interval `[kMin, kMax]`; gestures outside it are
    /// clamped to the nearest bound.
    pub scale_extent: (f64, f64),
    /// Pan limits in base pixel space. `None` = the drawable bounds.
    pub translate_extent: Option<TranslateExtent>,
    /// Which axes zoom and pan apply to.
    pub mode: ZoomMode,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            scale_extent: (1.0, 32.0),
            translate_extent: None,
            mode: ZoomMode::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Presentation configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Axis title strings. Pure presentation data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisLabels {
    pub x: Option<String>,
    pub y: Option<String>,
}

/// Optional overrides for the number of ticks per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickCounts {
    pub x: Option<usize>,
    pub y: Option<usize>,
}

/// Toggle individual chart features on or off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Background grid lines at tick positions.
    pub grid: bool,
    /// X-axis tick labels.
    pub x_tick_labels: bool,
    /// Y-axis tick labels.
    pub y_tick_labels: bool,
    /// Axis domain lines along the bottom and left edges. Disable for a
    /// minimalist look.
    pub axis_lines: bool,
    /// Vertical crosshair at the hovered sample.
    pub crosshair: bool,
    /// Marker dot on the hovered sample (the tooltip anchor).
    pub hover_marker: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            grid: true,
            x_tick_labels: true,
            y_tick_labels: true,
            axis_lines: true,
            crosshair: true,
            hover_marker: true,
        }
    }
}

/// Minimum-size thresholds that control responsive hide/show of labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsiveLayout {
    /// Minimum plot width (px) required to show Y-axis tick labels.
    pub min_width_for_y_ticklabels: f64,
    /// Minimum plot height (px) required to show X-axis tick labels.
    pub min_height_for_x_ticklabels: f64,
}

impl Default for ResponsiveLayout {
    fn default() -> Self {
        Self {
            min_width_for_y_ticklabels: 200.0,
            min_height_for_x_ticklabels: 120.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ChartConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for a chart.
///
/// | Field          | Purpose |
/// |----------------|---------|
/// | `variant`      | Line or area rendering |
/// | `curve`        | Interpolation between samples |
/// | `zoom`         | Scale/translate extents and zoom mode |
/// | `features`     | Toggle individual chart features |
/// | `layout`       | Responsive hide/show thresholds |
/// | `color_scheme` | Visual theme |
#[derive(Clone)]
pub struct ChartConfig {
    /// Native window title when launched via the run helper.
    pub title: String,
    pub variant: Variant,
    pub curve: Curve,
    /// Inset reserved for axis labels; viewport minus margin = drawable area.
    pub margin: Margin,
    pub zoom: ZoomConfig,
    pub axis_labels: AxisLabels,
    /// X tick-label formatting (adaptive time labels by default).
    pub x_formatter: XFormatter,
    /// Y tick-label formatting (plain numbers by default, currency opt-in).
    pub y_formatter: YFormatter,
    pub tick_counts: TickCounts,
    pub color_scheme: ColorScheme,
    pub features: FeatureFlags,
    pub layout: ResponsiveLayout,
    /// Fixed widget size; `None` fills the available space and follows the
    /// host container through resizes.
    pub size_hint: Option<egui::Vec2>,
    /// Optional eframe native-window options for the run helper.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "payplot".to_string(),
            variant: Variant::default(),
            curve: Curve::default(),
            margin: Margin::default(),
            zoom: ZoomConfig::default(),
            axis_labels: AxisLabels::default(),
            x_formatter: XFormatter::default(),
            y_formatter: YFormatter::default(),
            tick_counts: TickCounts::default(),
            color_scheme: ColorScheme::default(),
            features: FeatureFlags::default(),
            layout: ResponsiveLayout::default(),
            size_hint: None,
            native_options: None,
        }
    }
}
