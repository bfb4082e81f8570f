//! Domain↔pixel scale construction.
//!
//! Scales are derived, never stored: [`build_scales`] recomputes the pair from
//! series + bounds + transform whenever any input changes, so there is no
//! cached scale object to go stale. The zoom transform is folded into the
//! pixel range, which makes the composed mapping identical to rescaling the
//! domain while keeping `scale`/`invert` a plain affine pair.

use crate::config::ZoomMode;
use crate::data::series::{Series, XKind};
use crate::data::transform::ZoomTransform;
use crate::data::viewport::Bounds;

/// Invertible affine mapping from a numeric domain to a pixel range.
/// The range may be inverted (`r0 > r1`), as it is for the y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    /// A degenerate domain (zero width or non-finite) falls back to unit
    /// width so the internal ratio never divides by zero.
    pub fn new(d0: f64, d1: f64, r0: f64, r1: f64) -> Self {
        let (d0, d1) = if !d0.is_finite() || !d1.is_finite() {
            (0.0, 1.0)
        } else if d0 == d1 {
            (d0, d0 + 1.0)
        } else {
            (d0, d1)
        };
        Self { d0, d1, r0, r1 }
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    pub fn range(&self) -> (f64, f64) {
        (self.r0, self.r1)
    }

    /// Domain value -> pixel.
    pub fn scale(&self, v: f64) -> f64 {
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    /// Pixel -> domain value. A collapsed range (zero-width container) maps
    /// every pixel to the domain start.
    pub fn invert(&self, p: f64) -> f64 {
        if self.r0 == self.r1 {
            return self.d0;
        }
        self.d0 + (p - self.r0) / (self.r1 - self.r0) * (self.d1 - self.d0)
    }

    /// The domain interval visible through the given pixel window, low first.
    pub fn visible_domain(&self, pixel_window: (f64, f64)) -> (f64, f64) {
        let a = self.invert(pixel_window.0);
        let b = self.invert(pixel_window.1);
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

/// Ordinal scale for categorical x: evenly spaced positions, one per index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointScale {
    len: usize,
    r0: f64,
    r1: f64,
}

impl PointScale {
    pub fn new(len: usize, r0: f64, r1: f64) -> Self {
        Self { len, r0, r1 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn step(&self) -> f64 {
        if self.len > 1 {
            (self.r1 - self.r0) / (self.len - 1) as f64
        } else {
            0.0
        }
    }

    /// Pixel position of a category index. A single category sits centered.
    pub fn position(&self, index: usize) -> f64 {
        if self.len <= 1 {
            (self.r0 + self.r1) / 2.0
        } else {
            self.r0 + self.step() * index as f64
        }
    }

    /// Nearest category index for a pixel position, clamped to the key set.
    pub fn nearest_index(&self, p: f64) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let step = self.step();
        if step == 0.0 {
            return Some(0);
        }
        let raw = (p - self.r0) / step;
        Some(raw.round().clamp(0.0, (self.len - 1) as f64) as usize)
    }
}

/// The x-axis scale: continuous for time, point-indexed for categories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum XScale {
    Linear(LinearScale),
    Point(PointScale),
}

impl XScale {
    /// Domain value (timestamp, or category index as f64) -> pixel.
    pub fn scale(&self, x: f64) -> f64 {
        match self {
            XScale::Linear(s) => s.scale(x),
            XScale::Point(s) => s.position(x.max(0.0).round() as usize),
        }
    }

    /// Pixel -> domain value (nearest index for point scales).
    pub fn invert(&self, p: f64) -> f64 {
        match self {
            XScale::Linear(s) => s.invert(p),
            XScale::Point(s) => s.nearest_index(p).unwrap_or(0) as f64,
        }
    }

    /// Visible domain interval through the pixel window, low first.
    pub fn visible_domain(&self, pixel_window: (f64, f64)) -> (f64, f64) {
        match self {
            XScale::Linear(s) => s.visible_domain(pixel_window),
            XScale::Point(s) => {
                let a = s.nearest_index(pixel_window.0).unwrap_or(0) as f64;
                let b = s.nearest_index(pixel_window.1).unwrap_or(0) as f64;
                if a <= b {
                    (a, b)
                } else {
                    (b, a)
                }
            }
        }
    }
}

/// The scale pair for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleSet {
    pub x: XScale,
    pub y: LinearScale,
}

/// Build the x/y scales for the current frame.
///
/// The y domain is `[0, nice_max(max y)]` mapped onto `[height, 0]` so larger
/// values render higher. A non-identity transform is composed into the pixel
/// range of each zoomed axis, which keeps the data point under the pointer
/// stationary across a zoom step (the controller solves the translation for
/// that anchor; the composition here preserves it).
pub fn build_scales(
    series: &Series,
    bounds: Bounds,
    transform: ZoomTransform,
    mode: ZoomMode,
) -> ScaleSet {
    let (w, h) = (bounds.width, bounds.height);

    let (xr0, xr1) = if mode.zooms_x() {
        (transform.apply_x(0.0), transform.apply_x(w))
    } else {
        (0.0, w)
    };
    let x = match series.x_kind() {
        XKind::Time(_) => {
            let (lo, hi) = series.x_extent().unwrap_or((0.0, 1.0));
            XScale::Linear(LinearScale::new(lo, hi, xr0, xr1))
        }
        XKind::Category(labels) => XScale::Point(PointScale::new(labels.len(), xr0, xr1)),
    };

    let (yr0, yr1) = if mode.zooms_y() {
        (transform.apply_y(h), transform.apply_y(0.0))
    } else {
        (h, 0.0)
    };
    let y_top = match series.y_max() {
        Some(m) if m.is_finite() && m > 0.0 => nice_max(m),
        _ => 1.0,
    };
    let y = LinearScale::new(0.0, y_top, yr0, yr1);

    ScaleSet { x, y }
}

/// Round a step size up to the nearest 1/2/5 × 10ⁿ value.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10.0_f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let factor = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Round an axis maximum up to a human-friendly bound so tick labels land on
/// round numbers: the next multiple of a 1/2/5 step sized for ~5 ticks.
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let step = nice_step(max / 5.0);
    (max / step).ceil() * step
}
