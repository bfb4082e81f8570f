//! X-axis tick-label formatters: plain decimal and adaptive time formatting.
//!
//! The main entry point is [`XFormatter`], set on the chart config to control
//! how x tick labels are rendered. The default (`Auto`) picks time formatting
//! for time series and index formatting otherwise.

use chrono::{Datelike, TimeZone, Timelike};

// ─────────────────────────────────────────────────────────────────────────────
// EpochUnit
// ─────────────────────────────────────────────────────────────────────────────

/// The unit in which raw x values are expressed for time series.
///
/// All values travel as `f64` through the pipeline; this enum tells the
/// formatter what "1 unit" means in wall-clock terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EpochUnit {
    /// Seconds since the UNIX epoch (e.g. `1_700_000_000.0`).
    Seconds,
    /// Milliseconds since the UNIX epoch (e.g. `1_700_000_000_000.0`).
    Milliseconds,
}

impl EpochUnit {
    /// How many of this unit make up one second.
    pub fn units_per_second(&self) -> f64 {
        match self {
            EpochUnit::Seconds => 1.0,
            EpochUnit::Milliseconds => 1_000.0,
        }
    }

    /// Convert a value expressed in this unit to seconds.
    pub fn to_seconds(&self, value: f64) -> f64 {
        value / self.units_per_second()
    }
}

impl Default for EpochUnit {
    fn default() -> Self {
        EpochUnit::Seconds
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TimeResolution
// ─────────────────────────────────────────────────────────────────────────────

/// Granularity of the time-of-day portion of a label, coarsest first.
/// The ordering is used to enforce the `min_resolution`/`max_resolution`
/// bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeResolution {
    /// `HH:MM`.
    Minutes,
    /// `HH:MM:SS`.
    Seconds,
    /// `HH:MM:SS.mmm`.
    Milliseconds,
}

// ─────────────────────────────────────────────────────────────────────────────
// TimeFormatter
// ─────────────────────────────────────────────────────────────────────────────

/// Adaptive timestamp formatter for x tick labels.
///
/// Behaviour is driven by the *visible* x range, so labels tighten as the user
/// zooms in:
/// * the date portion is hidden unless the visible range crosses a calendar
///   date boundary (or [`force_date_visible`](Self::force_date_visible));
/// * the year is hidden unless the range crosses a year boundary (or
///   [`force_show_year`](Self::force_show_year));
/// * seconds appear below [`seconds_threshold`](Self::seconds_threshold)
///   (default 6 h), milliseconds below
///   [`milliseconds_threshold`](Self::milliseconds_threshold) (default 60 s);
/// * `min_resolution`/`max_resolution` are a hard floor/ceiling on the
///   granularity, overriding the thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeFormatter {
    /// Unit of the raw x values passed to [`format`](Self::format).
    pub epoch_unit: EpochUnit,
    /// Always show the date part, even within a single calendar day.
    pub force_date_visible: bool,
    /// Always show the four-digit year when the date is shown.
    pub force_show_year: bool,
    /// Visible range (seconds) below which seconds are shown. Default 21 600.
    pub seconds_threshold: f64,
    /// Visible range (seconds) below which milliseconds are shown. Default 60.
    pub milliseconds_threshold: f64,
    /// Never produce output coarser than this.
    pub min_resolution: TimeResolution,
    /// Never produce output finer than this.
    pub max_resolution: TimeResolution,
}

impl Default for TimeFormatter {
    fn default() -> Self {
        Self {
            epoch_unit: EpochUnit::Seconds,
            force_date_visible: false,
            force_show_year: false,
            seconds_threshold: 21_600.0,
            milliseconds_threshold: 60.0,
            min_resolution: TimeResolution::Minutes,
            max_resolution: TimeResolution::Milliseconds,
        }
    }
}

impl TimeFormatter {
    /// A `TimeFormatter` for the given epoch unit, defaults otherwise.
    pub fn for_epoch_unit(epoch_unit: EpochUnit) -> Self {
        Self {
            epoch_unit,
            ..Self::default()
        }
    }

    /// Format one x value given the visible x range, both expressed in
    /// [`epoch_unit`](Self::epoch_unit). Out-of-range timestamps fall back to
    /// the UNIX epoch rather than panicking.
    pub fn format(&self, value_raw: f64, x_range_raw: (f64, f64)) -> String {
        let value_secs = self.epoch_unit.to_seconds(value_raw);
        let a = self.epoch_unit.to_seconds(x_range_raw.0);
        let b = self.epoch_unit.to_seconds(x_range_raw.1);
        let (range_lo, range_hi) = if a <= b { (a, b) } else { (b, a) };

        let start_dt = secs_to_local(range_lo);
        let end_dt = secs_to_local(range_hi);
        let value_dt = secs_to_local(value_secs);

        let show_date = start_dt.date_naive() != end_dt.date_naive() || self.force_date_visible;
        let show_year = show_date && (start_dt.year() != end_dt.year() || self.force_show_year);

        let resolution = self.determine_resolution(range_hi - range_lo);

        let time_part = match resolution {
            TimeResolution::Minutes => value_dt.format("%H:%M").to_string(),
            TimeResolution::Seconds => value_dt.format("%H:%M:%S").to_string(),
            TimeResolution::Milliseconds => {
                let ms = value_dt.nanosecond() / 1_000_000;
                format!("{}.{:03}", value_dt.format("%H:%M:%S"), ms)
            }
        };

        if show_date {
            let date_part = if show_year {
                value_dt.format("%Y-%m-%d").to_string()
            } else {
                value_dt.format("%m-%d").to_string()
            };
            format!("{} {}", date_part, time_part)
        } else {
            time_part
        }
    }

    /// Select the [`TimeResolution`] for the given visible span in seconds,
    /// clamped to `[min_resolution, max_resolution]`.
    pub fn determine_resolution(&self, range_span_secs: f64) -> TimeResolution {
        let mut res = TimeResolution::Minutes;
        if range_span_secs < self.seconds_threshold {
            res = TimeResolution::Seconds;
        }
        if range_span_secs < self.milliseconds_threshold {
            res = TimeResolution::Milliseconds;
        }
        res.max(self.min_resolution).min(self.max_resolution)
    }
}

/// Convert seconds-since-epoch to local time, clamped to the valid range;
/// values outside fall back to the UNIX epoch.
fn secs_to_local(secs: f64) -> chrono::DateTime<chrono::Local> {
    if !secs.is_finite() {
        return chrono::Local
            .timestamp_opt(0, 0)
            .single()
            .unwrap_or_default();
    }
    let s = secs.floor() as i64;
    let ns = (((secs - s as f64) * 1e9).round() as u32).min(999_999_999);
    chrono::DateTime::from_timestamp(s, ns)
        .unwrap_or_else(|| chrono::DateTime::from_timestamp(0, 0).unwrap())
        .with_timezone(&chrono::Local)
}

// ─────────────────────────────────────────────────────────────────────────────
// DecimalFormatter
// ─────────────────────────────────────────────────────────────────────────────

/// A plain decimal formatter with a fixed number of decimal places.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalFormatter {
    pub decimal_places: usize,
    /// Optional unit suffix appended after the number (e.g. `"ms"`).
    pub unit: Option<String>,
}

impl Default for DecimalFormatter {
    fn default() -> Self {
        Self {
            decimal_places: 0,
            unit: None,
        }
    }
}

impl DecimalFormatter {
    pub fn format(&self, value: f64) -> String {
        let s = format!("{:.*}", self.decimal_places, value);
        match &self.unit {
            Some(u) => format!("{} {}", s, u),
            None => s,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// XFormatter  (the enum exported to users)
// ─────────────────────────────────────────────────────────────────────────────

/// Selects how x tick labels are formatted.
#[derive(Debug, Clone, PartialEq)]
pub enum XFormatter {
    /// Time formatting with default settings, using the series' epoch unit.
    Auto,
    /// Fixed decimal notation.
    Decimal(DecimalFormatter),
    /// Adaptive timestamp formatting (see [`TimeFormatter`]).
    Time(Box<TimeFormatter>),
}

impl Default for XFormatter {
    fn default() -> Self {
        XFormatter::Auto
    }
}

impl XFormatter {
    /// Convenience constructor for a `Time` variant.
    pub fn time(tf: TimeFormatter) -> Self {
        XFormatter::Time(Box::new(tf))
    }

    /// Format a tick value given the visible x range (same unit as `value`)
    /// and the epoch unit the series declared.
    pub fn format(&self, value: f64, visible_range: (f64, f64), unit: EpochUnit) -> String {
        match self {
            XFormatter::Auto => TimeFormatter::for_epoch_unit(unit).format(value, visible_range),
            XFormatter::Decimal(df) => df.format(value),
            XFormatter::Time(tf) => tf.format(value, visible_range),
        }
    }
}
