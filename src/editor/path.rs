use crate::domain::dependency::Dependency;
use crate::domain::graph::TaskGraph;
use crate::domain::task::Task;
use crate::editor::config::EditorConfig;
use crate::geometry::{Point, Rect, intersect_line_rect};

/// The straight segment drawn for a dependency, in world coordinates. Both
/// anchors sit on the margin-expanded boundary of their task's box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePath {
    pub from: Point,
    pub to: Point,
}

/// World-space box of a task's visual node.
pub(crate) fn task_rect(task: &Task, config: &EditorConfig) -> Rect {
    Rect::new(
        task.position.x,
        task.position.y,
        config.node_width,
        config.node_height,
    )
}

/// Derives the visual line for a committed dependency from its endpoints'
/// current boxes. `None` hides the edge when an anchor cannot be computed
/// (degenerate or overlapping boxes); that is not an error.
pub fn render_path(graph: &TaskGraph, dep: &Dependency, config: &EditorConfig) -> Option<EdgePath> {
    let from_rect = task_rect(graph.task(dep.predecessor_id)?, config).expand(config.edge_margin);
    let to_rect = task_rect(graph.task(dep.successor_id)?, config).expand(config.edge_margin);

    let a = from_rect.center();
    let b = to_rect.center();

    let from = intersect_line_rect(a, b, &from_rect)?;
    let to = intersect_line_rect(b, a, &to_rect)?;
    Some(EdgePath { from, to })
}

/// Path for a link gesture in progress: anchored on the source box, ending
/// at the raw pointer position.
pub fn render_live_path(
    graph: &TaskGraph,
    source_id: uuid::Uuid,
    dest: Point,
    config: &EditorConfig,
) -> Option<EdgePath> {
    let source_rect = task_rect(graph.task(source_id)?, config).expand(config.edge_margin);
    let from = intersect_line_rect(source_rect.center(), dest, &source_rect)?;
    Some(EdgePath { from, to: dest })
}
