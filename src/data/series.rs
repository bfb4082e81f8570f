//! Sample and series types fed to the chart by the host page.
//!
//! The engine never fetches or sorts data: callers hand over a finite sequence
//! of samples already ordered by `x`, and replace the whole series when new
//! data arrives. Replacing the series deliberately leaves the zoom transform
//! untouched so a polling refresh does not jar the user's current view.

use crate::data::x_formatter::EpochUnit;

/// One observation. `x` is seconds (or another [`EpochUnit`]) since the UNIX
/// epoch for time series, or the ordinal index for categorical series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// How the x values of a series are interpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum XKind {
    /// Timestamps expressed in the given epoch unit.
    Time(EpochUnit),
    /// Ordinal categories; sample `x` is the index into the label list.
    Category(Vec<String>),
}

/// An immutable ordered sequence of samples for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    samples: Vec<Sample>,
    x_kind: XKind,
}

impl Default for Series {
    fn default() -> Self {
        Self::empty()
    }
}

impl Series {
    /// An empty time series; the state while upstream data is still loading.
    pub fn empty() -> Self {
        Self {
            samples: Vec::new(),
            x_kind: XKind::Time(EpochUnit::Seconds),
        }
    }

    /// A time series with x in seconds since the epoch.
    /// Samples must already be sorted by `x`.
    pub fn time(samples: Vec<Sample>) -> Self {
        Self::time_with_unit(samples, EpochUnit::Seconds)
    }

    /// A time series with x in the given epoch unit.
    pub fn time_with_unit(samples: Vec<Sample>, unit: EpochUnit) -> Self {
        Self {
            samples,
            x_kind: XKind::Time(unit),
        }
    }

    /// A categorical series: one value per label, x = label index.
    pub fn categorical(labels: Vec<String>, values: Vec<f64>) -> Self {
        let samples = values
            .into_iter()
            .enumerate()
            .map(|(i, y)| Sample::new(i as f64, y))
            .collect();
        Self {
            samples,
            x_kind: XKind::Category(labels),
        }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn x_kind(&self) -> &XKind {
        &self.x_kind
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Category label for a sample index, when this is a categorical series.
    pub fn label(&self, index: usize) -> Option<&str> {
        match &self.x_kind {
            XKind::Category(labels) => labels.get(index).map(String::as_str),
            XKind::Time(_) => None,
        }
    }

    /// `(min x, max x)` over finite x values, or `None` for an empty series.
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        let mut it = self.samples.iter().filter(|s| s.x.is_finite());
        let first = it.next()?;
        let (mut lo, mut hi) = (first.x, first.x);
        for s in it {
            lo = lo.min(s.x);
            hi = hi.max(s.x);
        }
        Some((lo, hi))
    }

    /// Largest finite y value, or `None` for an empty series.
    pub fn y_max(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(|s| s.y)
            .filter(|y| y.is_finite())
            .fold(None, |acc, y| Some(acc.map_or(y, |m: f64| m.max(y))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_skips_non_finite_x() {
        let s = Series::time(vec![
            Sample::new(f64::NAN, 1.0),
            Sample::new(2.0, 3.0),
            Sample::new(5.0, 0.5),
        ]);
        assert_eq!(s.x_extent(), Some((2.0, 5.0)));
    }

    #[test]
    fn categorical_assigns_index_x() {
        let s = Series::categorical(
            vec!["Jan".into(), "Feb".into(), "Mar".into()],
            vec![10.0, 20.0, 15.0],
        );
        assert_eq!(s.samples()[2], Sample::new(2.0, 15.0));
        assert_eq!(s.label(1), Some("Feb"));
        assert_eq!(s.label(7), None);
    }

    #[test]
    fn empty_series_has_no_extents() {
        let s = Series::empty();
        assert_eq!(s.x_extent(), None);
        assert_eq!(s.y_max(), None);
    }
}
