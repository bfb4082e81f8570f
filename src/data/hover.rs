//! Pointer position → nearest sample resolution for tooltips.

use crate::data::scale::ScaleSet;
use crate::data::series::{Sample, Series};
use crate::data::viewport::{Bounds, PixelPoint};

/// The sample under the pointer and its pixel anchor for tooltip placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoveredSample {
    pub sample: Sample,
    /// Index of the sample within the series.
    pub index: usize,
    /// Pixel position of the sample under the current scales.
    pub pixel: PixelPoint,
}

/// Resolve the sample nearest to a pointer position.
///
/// Inverts the x-scale and binary-searches the x-sorted samples, so lookup is
/// `O(log n)` even for large series. Returns `None` when the pointer is
/// outside the bounds or the series is empty. Each call is independent: only
/// the current series and scales are consulted, never a previous hover.
pub fn resolve(
    pointer: PixelPoint,
    series: &Series,
    scales: &ScaleSet,
    bounds: Bounds,
) -> Option<HoveredSample> {
    if !bounds.contains(pointer) {
        return None;
    }
    let samples = series.samples();
    if samples.is_empty() {
        return None;
    }

    let x = scales.x.invert(pointer.x);
    let right = samples.partition_point(|s| s.x < x);
    let index = match right {
        0 => 0,
        i if i >= samples.len() => samples.len() - 1,
        i => {
            // Closer of the two neighbors around the inverted position.
            if (x - samples[i - 1].x).abs() <= (samples[i].x - x).abs() {
                i - 1
            } else {
                i
            }
        }
    };

    let sample = samples[index];
    Some(HoveredSample {
        sample,
        index,
        pixel: PixelPoint::new(scales.x.scale(sample.x), scales.y.scale(sample.y)),
    })
}
