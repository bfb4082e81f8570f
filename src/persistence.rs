//! View-state persistence: save and restore the user's chart view as JSON.
//!
//! Only view state is persisted: the zoom transform and the render toggles a
//! user may have changed. Series data always comes fresh from upstream and is
//! never written to disk.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chart::ChartView;
use crate::config::{Curve, FeatureFlags, Variant};
use crate::data::transform::ZoomTransform;

/// Serializable snapshot of a chart's view state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartViewState {
    pub transform: ZoomTransform,
    pub variant: Variant,
    pub curve: Curve,
    pub features: FeatureFlags,
}

impl From<&ChartView> for ChartViewState {
    fn from(view: &ChartView) -> Self {
        Self {
            transform: view.transform(),
            variant: view.config().variant,
            curve: view.config().curve,
            features: view.config().features.clone(),
        }
    }
}

impl ChartViewState {
    /// Apply this snapshot to a chart. The restored transform is clamped to
    /// the chart's configured extents.
    pub fn apply_to(&self, view: &mut ChartView) {
        view.config_mut().variant = self.variant;
        view.config_mut().curve = self.curve;
        view.config_mut().features = self.features.clone();
        view.restore_transform(self.transform);
    }
}

/// Save a chart's view state to a JSON file.
pub fn save_view_state(path: &Path, view: &ChartView) -> std::io::Result<()> {
    let state = ChartViewState::from(view);
    let json = serde_json::to_string_pretty(&state).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Load view state from a JSON file and apply it to a chart.
pub fn load_view_state(path: &Path, view: &mut ChartView) -> std::io::Result<()> {
    let json = std::fs::read_to_string(path)?;
    let state: ChartViewState = serde_json::from_str(&json).map_err(std::io::Error::other)?;
    state.apply_to(view);
    Ok(())
}
