//! Pointer-driven zoom and pan.
//!
//! The controller is the single writer of the [`ZoomTransform`]. Host input
//! (wheel, mouse drag, touch drag) is normalized into [`GestureEvent`]s first,
//! so the state machine has one input type regardless of device. Every
//! accepted event mutates, clamps, and returns the transform in the same call;
//! there is no batching between a gesture and the redraw that consumes it.

use crate::config::{TranslateExtent, ZoomConfig};
use crate::data::transform::ZoomTransform;
use crate::data::viewport::{Bounds, PixelPoint};

/// Wheel-to-zoom conversion rate: `factor = 2^(-delta_y * RATE)`.
/// A wheel step of -100 (zoom in) yields a factor of ~1.149.
const WHEEL_ZOOM_RATE: f64 = 0.002;

/// A normalized pointer gesture, in drawable-area pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// One discrete wheel tick. Negative `delta_y` zooms in.
    Wheel { pixel: PixelPoint, delta_y: f64 },
    /// Pointer pressed inside the bounds.
    DragStart { pixel: PixelPoint },
    /// Pointer moved while pressed; carries the absolute position, the
    /// controller tracks the delta since the previous event itself.
    DragMove { pixel: PixelPoint },
    /// Pointer released.
    DragEnd,
    /// Pointer left the bounds.
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging { last: PixelPoint },
}

/// Owns and mutates the zoom transform in response to gestures.
///
/// Wheel zoom is pointer-anchored: the translation is solved so the domain
/// point under the cursor maps back to the same pixel after the scale change.
/// Both the scale factor and the translation are clamped on every mutation,
/// so the visible window never exits the translate extent.
pub struct ZoomController {
    transform: ZoomTransform,
    config: ZoomConfig,
    state: DragState,
    detached: bool,
}

impl ZoomController {
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            transform: ZoomTransform::IDENTITY,
            config,
            state: DragState::Idle,
            detached: false,
        }
    }

    pub fn transform(&self) -> ZoomTransform {
        self.transform
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Restore the identity transform (e.g. on a fit-to-view action).
    pub fn reset(&mut self) {
        self.transform = ZoomTransform::IDENTITY;
        self.state = DragState::Idle;
    }

    /// Install a transform directly (e.g. from persisted view state), clamped
    /// against the given bounds.
    pub fn set_transform(&mut self, transform: ZoomTransform, bounds: Bounds) {
        let (k_min, k_max) = self.config.scale_extent;
        let mut t = transform;
        t.k = t.k.clamp(k_min, k_max);
        self.transform = self.clamp_translation(t, bounds);
    }

    /// Install a transform before the container has been measured. Only the
    /// scale factor can be clamped here; the translation is clamped on the
    /// next [`reclamp`](Self::reclamp) or gesture.
    pub fn restore(&mut self, transform: ZoomTransform) {
        let (k_min, k_max) = self.config.scale_extent;
        self.transform = ZoomTransform {
            k: transform.k.clamp(k_min, k_max),
            ..transform
        };
        self.state = DragState::Idle;
    }

    /// Stop accepting events. Called on host teardown; any event arriving
    /// afterwards is a no-op and the last fully-applied transform stands.
    pub fn detach(&mut self) {
        self.detached = true;
        self.state = DragState::Idle;
    }

    /// Re-clamp the translation after the bounds changed. Resizing keeps the
    /// scale factor; only the pan limits move with the container.
    pub fn reclamp(&mut self, bounds: Bounds) {
        self.transform = self.clamp_translation(self.transform, bounds);
    }

    /// Feed one gesture. Returns the updated transform when it changed.
    pub fn handle(&mut self, event: GestureEvent, bounds: Bounds) -> Option<ZoomTransform> {
        if self.detached {
            return None;
        }
        match event {
            GestureEvent::Wheel { pixel, delta_y } => {
                let factor = (-delta_y * WHEEL_ZOOM_RATE).exp2();
                let (k_min, k_max) = self.config.scale_extent;
                let new_k = (self.transform.k * factor).clamp(k_min, k_max);
                let anchored = self.transform.scaled_about(new_k, pixel);
                self.commit(anchored, bounds)
            }
            GestureEvent::DragStart { pixel } => {
                if bounds.contains(pixel) {
                    self.state = DragState::Dragging { last: pixel };
                }
                None
            }
            GestureEvent::DragMove { pixel } => {
                let DragState::Dragging { last } = self.state else {
                    return None;
                };
                self.state = DragState::Dragging { last: pixel };
                let shifted = self.transform.translated(pixel.x - last.x, pixel.y - last.y);
                self.commit(shifted, bounds)
            }
            GestureEvent::DragEnd | GestureEvent::Leave => {
                self.state = DragState::Idle;
                None
            }
        }
    }

    fn commit(&mut self, candidate: ZoomTransform, bounds: Bounds) -> Option<ZoomTransform> {
        let clamped = self.clamp_translation(candidate, bounds);
        if clamped == self.transform {
            return None;
        }
        self.transform = clamped;
        Some(clamped)
    }

    /// Clamp the translation so the viewport stays inside the translate
    /// extent. Per axis the admissible interval is
    /// `[view - k * extent_max, -k * extent_min]`; when the zoomed-out content
    /// cannot cover the viewport the interval is empty and the content is
    /// centered instead. Axes outside the zoom mode are pinned to zero.
    fn clamp_translation(&self, t: ZoomTransform, bounds: Bounds) -> ZoomTransform {
        let extent = self.config.translate_extent.unwrap_or(TranslateExtent {
            min: PixelPoint::new(0.0, 0.0),
            max: PixelPoint::new(bounds.width, bounds.height),
        });
        let mode = self.config.mode;
        let tx = if mode.zooms_x() {
            clamp_axis(t.tx, t.k, bounds.width, extent.min.x, extent.max.x)
        } else {
            0.0
        };
        let ty = if mode.zooms_y() {
            clamp_axis(t.ty, t.k, bounds.height, extent.min.y, extent.max.y)
        } else {
            0.0
        };
        ZoomTransform { k: t.k, tx, ty }
    }
}

fn clamp_axis(t: f64, k: f64, view: f64, lo: f64, hi: f64) -> f64 {
    let min = view - k * hi;
    let max = -k * lo;
    if min > max {
        (min + max) / 2.0
    } else {
        t.clamp(min, max)
    }
}
