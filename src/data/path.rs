//! Curve geometry for line and area rendering.
//!
//! Samples are projected through the current scales first; interpolation then
//! happens in pixel space. Monotone interpolation uses Fritsch–Carlson
//! tangents, which keep the curve inside the y-range of each pair of adjacent
//! samples: the rendering never implies a value that was not observed.

use crate::config::Curve;
use crate::data::scale::ScaleSet;
use crate::data::series::Series;
use crate::data::viewport::{Bounds, PixelPoint};

/// One drawing instruction, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(PixelPoint),
    LineTo(PixelPoint),
    CurveTo {
        c1: PixelPoint,
        c2: PixelPoint,
        to: PixelPoint,
    },
    Close,
}

/// Renderable curve geometry: a segment list convertible to an SVG path data
/// string or flattened to a polyline for painting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathGeometry {
    segments: Vec<PathSegment>,
}

/// Polyline points emitted per cubic segment by [`PathGeometry::flatten`].
const CURVE_FLATTEN_STEPS: usize = 16;

impl PathGeometry {
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// SVG path data (`M`/`L`/`C`/`Z`). Empty geometry yields an empty string.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        for seg in &self.segments {
            if !out.is_empty() {
                out.push(' ');
            }
            match seg {
                PathSegment::MoveTo(p) => {
                    out.push_str(&format!("M{},{}", fmt(p.x), fmt(p.y)));
                }
                PathSegment::LineTo(p) => {
                    out.push_str(&format!("L{},{}", fmt(p.x), fmt(p.y)));
                }
                PathSegment::CurveTo { c1, c2, to } => {
                    out.push_str(&format!(
                        "C{},{} {},{} {},{}",
                        fmt(c1.x),
                        fmt(c1.y),
                        fmt(c2.x),
                        fmt(c2.y),
                        fmt(to.x),
                        fmt(to.y)
                    ));
                }
                PathSegment::Close => out.push('Z'),
            }
        }
        out
    }

    /// Flatten to a polyline for painting. Cubic segments are subdivided
    /// uniformly; `Close` appends the start point to close the loop.
    pub fn flatten(&self) -> Vec<PixelPoint> {
        let mut pts: Vec<PixelPoint> = Vec::new();
        let mut start: Option<PixelPoint> = None;
        for seg in &self.segments {
            match *seg {
                PathSegment::MoveTo(p) => {
                    start = Some(p);
                    pts.push(p);
                }
                PathSegment::LineTo(p) => pts.push(p),
                PathSegment::CurveTo { c1, c2, to } => {
                    let from = *pts.last().unwrap_or(&to);
                    for i in 1..=CURVE_FLATTEN_STEPS {
                        let t = i as f64 / CURVE_FLATTEN_STEPS as f64;
                        pts.push(cubic_point(from, c1, c2, to, t));
                    }
                }
                PathSegment::Close => {
                    if let Some(s) = start {
                        pts.push(s);
                    }
                }
            }
        }
        pts
    }
}

fn fmt(v: f64) -> String {
    // Trim trailing zeros so path strings stay compact.
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn cubic_point(p0: PixelPoint, c1: PixelPoint, c2: PixelPoint, p1: PixelPoint, t: f64) -> PixelPoint {
    let u = 1.0 - t;
    let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    PixelPoint::new(
        a * p0.x + b * c1.x + c * c2.x + d * p1.x,
        a * p0.y + b * c1.y + c * c2.y + d * p1.y,
    )
}

/// Project the series through the scales, skipping non-finite samples.
fn project(series: &Series, scales: &ScaleSet) -> Vec<PixelPoint> {
    series
        .samples()
        .iter()
        .filter(|s| s.x.is_finite() && s.y.is_finite())
        .map(|s| PixelPoint::new(scales.x.scale(s.x), scales.y.scale(s.y)))
        .collect()
}

/// Build the stroke geometry for the series. Empty (or all-non-finite) series
/// produce empty geometry rather than an error.
pub fn build_line_path(series: &Series, scales: &ScaleSet, curve: Curve) -> PathGeometry {
    let pts = project(series, scales);
    PathGeometry {
        segments: curve_segments(&pts, curve),
    }
}

/// Build the filled-region geometry: the curve, closed down to the baseline.
/// The default baseline is the bottom of the bounds (value 0 at identity);
/// a custom baseline is given in domain units.
pub fn build_area_path(
    series: &Series,
    scales: &ScaleSet,
    curve: Curve,
    baseline: Option<f64>,
    bounds: Bounds,
) -> PathGeometry {
    let pts = project(series, scales);
    let mut segments = curve_segments(&pts, curve);
    if segments.is_empty() {
        return PathGeometry::default();
    }
    let base_y = baseline.map_or(bounds.height, |b| scales.y.scale(b));
    let first = pts[0];
    let last = pts[pts.len() - 1];
    segments.push(PathSegment::LineTo(PixelPoint::new(last.x, base_y)));
    segments.push(PathSegment::LineTo(PixelPoint::new(first.x, base_y)));
    segments.push(PathSegment::Close);
    PathGeometry { segments }
}

fn curve_segments(pts: &[PixelPoint], curve: Curve) -> Vec<PathSegment> {
    match pts {
        [] => Vec::new(),
        [p] => vec![PathSegment::MoveTo(*p)],
        _ => match curve {
            Curve::Linear => {
                let mut segs = Vec::with_capacity(pts.len());
                segs.push(PathSegment::MoveTo(pts[0]));
                segs.extend(pts[1..].iter().map(|p| PathSegment::LineTo(*p)));
                segs
            }
            Curve::Monotone => monotone_segments(pts),
        },
    }
}

/// Fritsch–Carlson monotone cubic interpolation, expressed as cubic Béziers.
///
/// Tangents are the secant averages, zeroed at local extrema and limited so
/// the interpolant stays monotone on every interval. Control points are the
/// Hermite form `p ± m·h/3`, which the limiting keeps inside each interval's
/// y-range.
fn monotone_segments(pts: &[PixelPoint]) -> Vec<PathSegment> {
    let n = pts.len();
    let mut dx = vec![0.0; n - 1];
    let mut slope = vec![0.0; n - 1];
    for i in 0..n - 1 {
        dx[i] = pts[i + 1].x - pts[i].x;
        slope[i] = if dx[i].abs() > f64::EPSILON {
            (pts[i + 1].y - pts[i].y) / dx[i]
        } else {
            0.0
        };
    }

    let mut m = vec![0.0; n];
    m[0] = slope[0];
    m[n - 1] = slope[n - 2];
    for i in 1..n - 1 {
        m[i] = if slope[i - 1] * slope[i] <= 0.0 {
            0.0
        } else {
            (slope[i - 1] + slope[i]) / 2.0
        };
    }
    for i in 0..n - 1 {
        if slope[i] == 0.0 {
            m[i] = 0.0;
            m[i + 1] = 0.0;
            continue;
        }
        let a = m[i] / slope[i];
        let b = m[i + 1] / slope[i];
        let s = a * a + b * b;
        if s > 9.0 {
            let t = 3.0 / s.sqrt();
            m[i] = t * a * slope[i];
            m[i + 1] = t * b * slope[i];
        }
    }

    let mut segs = Vec::with_capacity(n);
    segs.push(PathSegment::MoveTo(pts[0]));
    for i in 0..n - 1 {
        if dx[i].abs() <= f64::EPSILON {
            // Coincident x positions: no interval to interpolate over.
            segs.push(PathSegment::LineTo(pts[i + 1]));
            continue;
        }
        let h = dx[i] / 3.0;
        segs.push(PathSegment::CurveTo {
            c1: PixelPoint::new(pts[i].x + h, pts[i].y + m[i] * h),
            c2: PixelPoint::new(pts[i + 1].x - h, pts[i + 1].y - m[i + 1] * h),
            to: pts[i + 1],
        });
    }
    segs
}
