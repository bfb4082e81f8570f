//! The zoom/pan affine state shared by every chart component.
//!
//! A [`ZoomTransform`] maps *base* pixel positions (what the scales produce at
//! identity) to on-screen pixel positions: `p' = k * p + t`, with independent
//! translations for x and y but a single scale factor. The zoom controller is
//! the only writer; scale building, axis layout and hit-testing all read the
//! value passed to them for the current frame and never cache it.

use serde::{Deserialize, Serialize};

use crate::data::viewport::PixelPoint;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    /// Scale factor, `>= kMin` and `<= kMax` after clamping.
    pub k: f64,
    /// Horizontal translation in pixels.
    pub tx: f64,
    /// Vertical translation in pixels.
    pub ty: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self {
        k: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Base pixel x -> transformed pixel x.
    pub fn apply_x(&self, px: f64) -> f64 {
        self.k * px + self.tx
    }

    /// Base pixel y -> transformed pixel y.
    pub fn apply_y(&self, py: f64) -> f64 {
        self.k * py + self.ty
    }

    /// Transformed pixel x -> base pixel x.
    pub fn invert_x(&self, px: f64) -> f64 {
        (px - self.tx) / self.k
    }

    /// Transformed pixel y -> base pixel y.
    pub fn invert_y(&self, py: f64) -> f64 {
        (py - self.ty) / self.k
    }

    /// Shifted by a pixel delta.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            k: self.k,
            tx: self.tx + dx,
            ty: self.ty + dy,
        }
    }

    /// Change the scale factor to `new_k` while keeping the given pixel fixed:
    /// the base position under `anchor` maps to the same screen pixel before
    /// and after. Solved by `t' = p - (p - t) * (k'/k)` per axis.
    pub fn scaled_about(&self, new_k: f64, anchor: PixelPoint) -> Self {
        let ratio = new_k / self.k;
        Self {
            k: new_k,
            tx: anchor.x - (anchor.x - self.tx) * ratio,
            ty: anchor.y - (anchor.y - self.ty) * ratio,
        }
    }
}
