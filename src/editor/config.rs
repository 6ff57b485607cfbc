use serde::{Deserialize, Serialize};

/// Tunables of the interaction engine. Hosts may deserialize this from their
/// settings store; every field has a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Uniform size of a task's visual box, in world units.
    pub node_width: f64,
    pub node_height: f64,
    /// Edge anchors sit on the node box grown by this margin, so a line
    /// terminates just outside the rendered border.
    pub edge_margin: f64,
    /// Pointer travel (screen units) below which a gesture is a click.
    pub drag_threshold: f64,
    /// Zoom snaps to exactly 1.0 when within this window of it.
    pub zoom_snap_tolerance: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            node_width: 150.0,
            node_height: 80.0,
            edge_margin: 8.0,
            drag_threshold: 5.0,
            zoom_snap_tolerance: 0.1,
            min_zoom: 0.1,
            max_zoom: 5.0,
        }
    }
}

impl EditorConfig {
    pub fn drag_threshold_squared(&self) -> f64 {
        self.drag_threshold * self.drag_threshold
    }
}
