//! The chart widget: wires input, scales, geometry and painting together.
//!
//! `ChartView` is retained by the host app and shown once per frame. Each
//! `show` call runs the full recomputation pipeline (measure, gestures,
//! scales, geometry, ticks, hover) from the current inputs. Nothing derived
//! is cached across frames, so a change to the series, the container size or
//! the transform is always reflected in the same frame it happens.

use egui::{pos2, vec2, Align2, Rect, Sense, Shape, Stroke, TextStyle, Ui};

use crate::config::{ChartConfig, Variant};
use crate::data::axis::{x_axis_ticks, y_axis_ticks, AxisTick};
use crate::data::hover::{self, HoveredSample};
use crate::data::path::{build_area_path, build_line_path};
use crate::data::scale::{build_scales, ScaleSet};
use crate::data::series::Series;
use crate::data::transform::ZoomTransform;
use crate::data::viewport::{Bounds, DimensionTracker, PixelPoint};
use crate::data::zoom::{GestureEvent, ZoomController};

/// What one `show` call reports back to the host.
pub struct ChartResponse {
    pub response: egui::Response,
    /// Sample under the pointer, for an externally-rendered tooltip.
    pub hovered: Option<HoveredSample>,
    /// The transform that produced this frame.
    pub transform: ZoomTransform,
    /// Drawable area used for this frame.
    pub bounds: Bounds,
}

/// An interactive line/area time-series chart.
pub struct ChartView {
    config: ChartConfig,
    series: Series,
    tracker: DimensionTracker,
    zoom: ZoomController,
    hovered: Option<HoveredSample>,
}

impl ChartView {
    pub fn new(config: ChartConfig) -> Self {
        let zoom = ZoomController::new(config.zoom);
        Self {
            config,
            series: Series::empty(),
            tracker: DimensionTracker::new(),
            zoom,
            hovered: None,
        }
    }

    pub fn with_series(series: Series, config: ChartConfig) -> Self {
        let mut view = Self::new(config);
        view.series = series;
        view
    }

    /// Replace the series (e.g. after a poll refresh). The zoom transform is
    /// preserved so a background refresh does not jar the current view; call
    /// [`reset_view`](Self::reset_view) to return to the full extent.
    pub fn set_series(&mut self, series: Series) {
        self.series = series;
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ChartConfig {
        &mut self.config
    }

    /// The sample resolved under the pointer in the most recent frame.
    pub fn hovered_sample(&self) -> Option<&HoveredSample> {
        self.hovered.as_ref()
    }

    pub fn transform(&self) -> ZoomTransform {
        self.zoom.transform()
    }

    /// Install a transform (e.g. from persisted view state). The scale factor
    /// is clamped immediately; the translation is re-clamped against the
    /// container once it has been measured.
    pub fn restore_transform(&mut self, transform: ZoomTransform) {
        self.zoom.restore(transform);
        if let Some(vp) = self.tracker.current() {
            self.zoom.reclamp(vp.bounds(&self.config.margin));
        }
    }

    /// Back to the identity transform (full data extent).
    pub fn reset_view(&mut self) {
        self.zoom.reset();
    }

    /// Stop reacting to input. Call when the hosting container goes away
    /// while gestures may still be in flight.
    pub fn detach(&mut self) {
        self.zoom.detach();
    }

    /// Lay out, handle input, and paint one frame.
    pub fn show(&mut self, ui: &mut Ui) -> ChartResponse {
        let size = self.config.size_hint.unwrap_or_else(|| ui.available_size());
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        let bounds = self.bounds_for(rect);
        if self
            .tracker
            .observe(rect.width() as f64, rect.height() as f64)
        {
            // Resize: keep the zoom, only the pan limits follow the box.
            self.zoom.reclamp(bounds);
        }
        let origin = pos2(
            rect.min.x + self.config.margin.left as f32,
            rect.min.y + self.config.margin.top as f32,
        );
        let to_local = |pos: egui::Pos2| {
            PixelPoint::new((pos.x - origin.x) as f64, (pos.y - origin.y) as f64)
        };

        // ── Input → gestures ────────────────────────────────────────────────
        let hover_pos = response.hover_pos();
        let mut gestures: Vec<GestureEvent> = Vec::new();
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                gestures.push(GestureEvent::DragStart {
                    pixel: to_local(pos),
                });
            }
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                gestures.push(GestureEvent::DragMove {
                    pixel: to_local(pos),
                });
            }
        }
        if response.drag_stopped() {
            gestures.push(GestureEvent::DragEnd);
        }
        if response.hovered() {
            let scroll = ui.ctx().input(|i| i.raw_scroll_delta);
            if scroll.y != 0.0 {
                if let Some(pos) = hover_pos {
                    gestures.push(GestureEvent::Wheel {
                        pixel: to_local(pos),
                        delta_y: -scroll.y as f64,
                    });
                }
            }
        }
        if hover_pos.is_none() {
            gestures.push(GestureEvent::Leave);
        }
        for gesture in gestures {
            self.zoom.handle(gesture, bounds);
        }
        if response.double_clicked() {
            self.zoom.reset();
        }

        // ── Recompute pipeline ──────────────────────────────────────────────
        let transform = self.zoom.transform();
        let scales = build_scales(&self.series, bounds, transform, self.config.zoom.mode);
        self.hovered =
            hover_pos.and_then(|pos| hover::resolve(to_local(pos), &self.series, &scales, bounds));

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, origin, bounds, &scales);
        }

        ChartResponse {
            response,
            hovered: self.hovered,
            transform,
            bounds,
        }
    }

    fn bounds_for(&self, rect: Rect) -> Bounds {
        crate::data::viewport::Viewport::new(rect.width() as f64, rect.height() as f64)
            .bounds(&self.config.margin)
    }

    fn paint(&self, ui: &Ui, rect: Rect, origin: egui::Pos2, bounds: Bounds, scales: &ScaleSet) {
        let palette = self.config.color_scheme.palette();
        let features = &self.config.features;
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, egui::CornerRadius::ZERO, palette.background);

        let plot_rect = Rect::from_min_size(
            origin,
            vec2(bounds.width as f32, bounds.height as f32),
        );
        let plot_painter = painter.with_clip_rect(plot_rect.expand(1.0));
        let at = |p: PixelPoint| pos2(origin.x + p.x as f32, origin.y + p.y as f32);

        let show_x_labels = features.x_tick_labels
            && bounds.height >= self.config.layout.min_height_for_x_ticklabels;
        let show_y_labels = features.y_tick_labels
            && bounds.width >= self.config.layout.min_width_for_y_ticklabels;

        let x_ticks = if features.grid || show_x_labels {
            x_axis_ticks(
                &self.series,
                scales,
                bounds,
                self.config.tick_counts.x,
                &self.config.x_formatter,
            )
        } else {
            Vec::new()
        };
        let y_ticks = if features.grid || show_y_labels {
            y_axis_ticks(
                scales,
                bounds,
                self.config.tick_counts.y,
                &self.config.y_formatter,
            )
        } else {
            Vec::new()
        };

        if features.grid {
            let stroke = Stroke::new(1.0, palette.grid);
            for tick in &x_ticks {
                let x = origin.x + tick.pixel as f32;
                painter.line_segment(
                    [pos2(x, plot_rect.min.y), pos2(x, plot_rect.max.y)],
                    stroke,
                );
            }
            for tick in &y_ticks {
                let y = origin.y + tick.pixel as f32;
                painter.line_segment(
                    [pos2(plot_rect.min.x, y), pos2(plot_rect.max.x, y)],
                    stroke,
                );
            }
        }

        // ── Curve ───────────────────────────────────────────────────────────
        let line = build_line_path(&self.series, scales, self.config.curve);
        let points: Vec<egui::Pos2> = line.flatten().into_iter().map(at).collect();
        if self.config.variant == Variant::Area && points.len() >= 2 {
            // The fill is painted as convex vertical strips down to the
            // baseline; a single concave polygon would not tessellate safely.
            let base_y = origin.y + bounds.height as f32;
            for pair in points.windows(2) {
                let quad = vec![
                    pair[0],
                    pair[1],
                    pos2(pair[1].x, base_y),
                    pos2(pair[0].x, base_y),
                ];
                plot_painter.add(Shape::convex_polygon(
                    quad,
                    palette.area_fill,
                    Stroke::NONE,
                ));
            }
        }
        if points.len() >= 2 {
            plot_painter.add(Shape::line(points, Stroke::new(2.0, palette.line)));
        }

        // ── Axes ────────────────────────────────────────────────────────────
        let font = TextStyle::Small.resolve(ui.style());
        let axis_stroke = Stroke::new(1.0, palette.axis);
        let bottom = pos2(origin.x, origin.y + bounds.height as f32);
        if features.axis_lines {
            painter.line_segment(
                [bottom, pos2(bottom.x + bounds.width as f32, bottom.y)],
                axis_stroke,
            );
            painter.line_segment([origin, bottom], axis_stroke);
        }
        if show_x_labels {
            for AxisTick { pixel, label, .. } in &x_ticks {
                let x = origin.x + *pixel as f32;
                painter.line_segment([pos2(x, bottom.y), pos2(x, bottom.y + 4.0)], axis_stroke);
                painter.text(
                    pos2(x, bottom.y + 6.0),
                    Align2::CENTER_TOP,
                    label,
                    font.clone(),
                    palette.text,
                );
            }
        }
        if show_y_labels {
            for AxisTick { pixel, label, .. } in &y_ticks {
                let y = origin.y + *pixel as f32;
                painter.line_segment([pos2(origin.x - 4.0, y), pos2(origin.x, y)], axis_stroke);
                painter.text(
                    pos2(origin.x - 6.0, y),
                    Align2::RIGHT_CENTER,
                    label,
                    font.clone(),
                    palette.text,
                );
            }
        }
        if let Some(label) = &self.config.axis_labels.x {
            painter.text(
                pos2(origin.x + bounds.width as f32 / 2.0, rect.max.y - 2.0),
                Align2::CENTER_BOTTOM,
                label,
                font.clone(),
                palette.text,
            );
        }
        if let Some(label) = &self.config.axis_labels.y {
            painter.text(
                pos2(rect.min.x + 4.0, rect.min.y + 2.0),
                Align2::LEFT_TOP,
                label,
                font.clone(),
                palette.text,
            );
        }

        // ── Hover ───────────────────────────────────────────────────────────
        if let Some(hovered) = &self.hovered {
            let anchor = at(hovered.pixel);
            if features.crosshair {
                plot_painter.line_segment(
                    [
                        pos2(anchor.x, plot_rect.min.y),
                        pos2(anchor.x, plot_rect.max.y),
                    ],
                    Stroke::new(1.0, palette.hover),
                );
            }
            if features.hover_marker {
                plot_painter.circle_filled(anchor, 3.5, palette.hover);
                plot_painter.circle_stroke(anchor, 5.5, Stroke::new(1.0, palette.hover));
            }
        }
    }
}
