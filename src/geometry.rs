use serde::{Deserialize, Serialize};

/// A point (or displacement) in world or screen space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned box, `(x, y)` being its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Grows the box by `margin` on all four sides.
    pub fn expand(&self, margin: f64) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.w + 2.0 * margin,
            self.h + 2.0 * margin,
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

/// Squared euclidean distance, for threshold comparisons without a sqrt.
pub fn squared_distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

/// Where the directed segment `a -> b` first crosses the boundary of `rect`.
///
/// Tests the supporting lines of all four edges and keeps the crossing with
/// the smallest positive parametric distance from `a` that lies within the
/// edge's finite span. Returns `None` when the segment never crosses the
/// boundary: coincident endpoints, a zero-extent rect, or both endpoints on
/// the same side of every edge.
pub fn intersect_line_rect(a: Point, b: Point, rect: &Rect) -> Option<Point> {
    if rect.w <= 0.0 || rect.h <= 0.0 {
        return None;
    }

    let dx = b.x - a.x;
    let dy = b.y - a.y;

    let mut best: Option<(f64, Point)> = None;
    let mut consider = |t: f64, p: Point| {
        if t > 0.0 && t <= 1.0 && best.map_or(true, |(bt, _)| t < bt) {
            best = Some((t, p));
        }
    };

    if dx != 0.0 {
        for edge_x in [rect.x, rect.x + rect.w] {
            let t = (edge_x - a.x) / dx;
            let y = a.y + t * dy;
            if y >= rect.y && y <= rect.y + rect.h {
                consider(t, Point::new(edge_x, y));
            }
        }
    }

    if dy != 0.0 {
        for edge_y in [rect.y, rect.y + rect.h] {
            let t = (edge_y - a.y) / dy;
            let x = a.x + t * dx;
            if x >= rect.x && x <= rect.x + rect.w {
                consider(t, Point::new(x, edge_y));
            }
        }
    }

    best.map(|(_, p)| p)
}
