//! Tick layout for the axis renderer.
//!
//! This module computes tick positions and label strings from the current
//! (possibly rescaled) scales; the widget paints them. Tick lists are rebuilt
//! from scratch on every transform change; they are small, and recomputing
//! them is what keeps zoom redraws free of stale axis state.

use crate::data::scale::{nice_step, ScaleSet, XScale};
use crate::data::series::{Series, XKind};
use crate::data::viewport::Bounds;
use crate::data::x_formatter::{EpochUnit, XFormatter};
use crate::data::y_formatter::YFormatter;

/// One tick: a pixel position along the axis and its formatted label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub pixel: f64,
    pub value: f64,
    pub label: String,
}

/// Tolerance for keeping ticks that land exactly on the bounds edge.
const EDGE_EPS: f64 = 0.5;

/// Approximate label footprint used to derive default tick counts.
const X_LABEL_SPACE: f64 = 80.0;
const Y_LABEL_SPACE: f64 = 36.0;

fn default_x_count(bounds: Bounds) -> usize {
    ((bounds.width / X_LABEL_SPACE) as usize).clamp(2, 12)
}

fn default_y_count(bounds: Bounds) -> usize {
    ((bounds.height / Y_LABEL_SPACE) as usize).clamp(2, 10)
}

/// Evenly stepped tick values covering the visible interval, low to high.
/// Returns the step alongside so label formatting can adapt precision.
fn linear_tick_values(visible: (f64, f64), target: usize) -> (f64, Vec<f64>) {
    let (lo, hi) = visible;
    let span = hi - lo;
    if !span.is_finite() || span <= 0.0 {
        return (1.0, vec![lo]);
    }
    let step = nice_step(span / target.max(1) as f64);
    let mut v = (lo / step).ceil() * step;
    let mut out = Vec::new();
    while v <= hi + step * 1e-3 {
        out.push(v);
        v += step;
    }
    (step, out)
}

/// X-axis ticks for the current frame.
pub fn x_axis_ticks(
    series: &Series,
    scales: &ScaleSet,
    bounds: Bounds,
    count: Option<usize>,
    formatter: &XFormatter,
) -> Vec<AxisTick> {
    let target = count.unwrap_or_else(|| default_x_count(bounds));
    match &scales.x {
        XScale::Linear(s) => {
            let unit = match series.x_kind() {
                XKind::Time(unit) => *unit,
                XKind::Category(_) => EpochUnit::Seconds,
            };
            let visible = s.visible_domain((0.0, bounds.width));
            let (_, values) = linear_tick_values(visible, target);
            values
                .into_iter()
                .map(|v| AxisTick {
                    pixel: s.scale(v),
                    value: v,
                    label: formatter.format(v, visible, unit),
                })
                .filter(|t| t.pixel >= -EDGE_EPS && t.pixel <= bounds.width + EDGE_EPS)
                .collect()
        }
        XScale::Point(s) => {
            // One tick per visible category, thinned when labels would collide.
            let visible: Vec<usize> = (0..s.len())
                .filter(|&i| {
                    let p = s.position(i);
                    p >= -EDGE_EPS && p <= bounds.width + EDGE_EPS
                })
                .collect();
            let stride = (visible.len() / target.max(1)).max(1);
            visible
                .into_iter()
                .step_by(stride)
                .map(|i| AxisTick {
                    pixel: s.position(i),
                    value: i as f64,
                    label: series.label(i).unwrap_or_default().to_string(),
                })
                .collect()
        }
    }
}

/// Y-axis ticks for the current frame.
pub fn y_axis_ticks(
    scales: &ScaleSet,
    bounds: Bounds,
    count: Option<usize>,
    formatter: &YFormatter,
) -> Vec<AxisTick> {
    let target = count.unwrap_or_else(|| default_y_count(bounds));
    let visible = scales.y.visible_domain((bounds.height, 0.0));
    let (step, values) = linear_tick_values(visible, target);
    values
        .into_iter()
        .map(|v| AxisTick {
            pixel: scales.y.scale(v),
            value: v,
            label: formatter.format(v, step),
        })
        .filter(|t| t.pixel >= -EDGE_EPS && t.pixel <= bounds.height + EDGE_EPS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_values_are_round_multiples() {
        let (step, values) = linear_tick_values((0.0, 10.0), 5);
        assert_eq!(step, 2.0);
        assert_eq!(values, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn tick_values_survive_degenerate_span() {
        let (_, values) = linear_tick_values((3.0, 3.0), 5);
        assert_eq!(values, vec![3.0]);
    }

    #[test]
    fn tick_values_cover_offset_ranges() {
        let (step, values) = linear_tick_values((13.2, 47.8), 5);
        assert_eq!(step, 10.0);
        assert_eq!(values, vec![20.0, 30.0, 40.0]);
    }
}
