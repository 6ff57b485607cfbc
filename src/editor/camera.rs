use crate::editor::config::EditorConfig;
use crate::geometry::Point;

/// Pan/zoom transform for the whole item layer: `screen = world * zoom + pan`.
/// Task coordinates stay in a stable world frame; only this transform moves.
/// Initialized to identity and never persisted.
#[derive(Debug, Clone)]
pub struct Camera {
    pub pan: Point,
    pub zoom: f64,
    viewport: (f64, f64),
}

impl Camera {
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            pan: Point::new(0.0, 0.0),
            zoom: 1.0,
            viewport: (viewport_width, viewport_height),
        }
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = (width, height);
    }

    pub fn apply_pan_delta(&mut self, dx: f64, dy: f64) {
        self.pan.x += dx;
        self.pan.y += dy;
    }

    /// Multiplies zoom by `factor`, clamps it into the configured range, and
    /// snaps to exactly 1.0 when the result drifts close to the baseline.
    pub fn apply_zoom_factor(&mut self, factor: f64, config: &EditorConfig) {
        let zoomed = (self.zoom * factor).clamp(config.min_zoom, config.max_zoom);
        self.zoom = if (zoomed - 1.0).abs() <= config.zoom_snap_tolerance {
            1.0
        } else {
            zoomed
        };
    }

    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(world.x * self.zoom + self.pan.x, world.y * self.zoom + self.pan.y)
    }

    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan.x) / self.zoom,
            (screen.y - self.pan.y) / self.zoom,
        )
    }

    /// World point currently under the viewport center. New tasks without an
    /// explicit position are placed here.
    pub fn view_center_world(&self) -> Point {
        self.screen_to_world(Point::new(self.viewport.0 / 2.0, self.viewport.1 / 2.0))
    }
}
