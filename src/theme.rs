//! Color schemes for the chart surface.

use egui::{Color32, Context, Visuals};

/// Concrete colors used when painting a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPalette {
    /// Fill behind the whole widget, including the margin.
    pub background: Color32,
    /// Grid lines at tick positions.
    pub grid: Color32,
    /// Axis domain lines and tick marks.
    pub axis: Color32,
    /// Tick-label and axis-title text.
    pub text: Color32,
    /// Curve stroke.
    pub line: Color32,
    /// Area fill under the curve (pre-multiplied alpha).
    pub area_fill: Color32,
    /// Hovered-sample marker and crosshair.
    pub hover: Color32,
}

/// Visual theme for the chart, including user-defined custom palettes.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorScheme {
    Dark,
    Light,
    /// User-defined palette.
    Custom(ChartPalette),
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::Dark
    }
}

impl ColorScheme {
    /// Built-in schemes (useful for combo-box UIs).
    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Dark, ColorScheme::Light]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "Dark",
            ColorScheme::Light => "Light",
            ColorScheme::Custom(_) => "Custom",
        }
    }

    /// Apply matching window visuals to an egui context. Used by the run
    /// helper so the surrounding chrome agrees with the chart surface.
    pub fn apply(&self, ctx: &Context) {
        match self {
            ColorScheme::Light => ctx.set_visuals(Visuals::light()),
            ColorScheme::Dark | ColorScheme::Custom(_) => ctx.set_visuals(Visuals::dark()),
        }
    }

    /// The paint palette for this scheme.
    pub fn palette(&self) -> ChartPalette {
        match self {
            ColorScheme::Dark => ChartPalette {
                background: Color32::from_rgb(16, 18, 24),
                grid: Color32::from_rgb(38, 42, 52),
                axis: Color32::from_rgb(92, 99, 112),
                text: Color32::from_rgb(168, 176, 188),
                line: Color32::from_rgb(77, 148, 255),
                area_fill: Color32::from_rgba_unmultiplied(77, 148, 255, 48),
                hover: Color32::from_rgb(255, 184, 77),
            },
            ColorScheme::Light => ChartPalette {
                background: Color32::WHITE,
                grid: Color32::from_rgb(229, 231, 235),
                axis: Color32::from_rgb(156, 163, 175),
                text: Color32::from_rgb(75, 85, 99),
                line: Color32::from_rgb(37, 99, 235),
                area_fill: Color32::from_rgba_unmultiplied(37, 99, 235, 36),
                hover: Color32::from_rgb(217, 119, 6),
            },
            ColorScheme::Custom(palette) => palette.clone(),
        }
    }
}
