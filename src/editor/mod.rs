mod camera;
mod config;
mod events;
mod gesture;
mod path;
mod selection;

pub use camera::Camera;
pub use config::EditorConfig;
pub use events::EditorEvent;
pub use gesture::{Gesture, Modifiers, PointerEvent, PointerId};
pub use path::{EdgePath, render_live_path, render_path};
pub use selection::Selection;

use crate::domain::document::{self, GraphDocument};
use crate::domain::graph::TaskGraph;
use crate::domain::task::{Position, TaskStatus};
use crate::error::GraphError;
use crate::geometry::{Point, Rect};
use std::collections::HashMap;
use uuid::Uuid;

/// Creation request for [`Editor::add_task`]. Without an explicit position
/// the task's box is centered on the current view center.
#[derive(Debug, Clone, Default)]
pub struct TaskSpec {
    pub title: String,
    pub description: String,
    pub position: Option<Position>,
}

impl TaskSpec {
    pub fn named(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Position::new(x, y));
        self
    }
}

/// The graph interaction engine: one instance per canvas.
///
/// Owns the entity model, the pan/zoom camera, the selection, the gesture in
/// flight, and the rendered edge paths. Hosts feed it pointer events and
/// menu/keyboard operations, then drain [`EditorEvent`]s and repaint from
/// the read accessors. All mutation is synchronous; every call fully
/// resolves its state transition before returning.
pub struct Editor {
    graph: TaskGraph,
    camera: Camera,
    selection: Selection,
    gesture: Option<Gesture>,
    config: EditorConfig,
    link_mode: bool,
    paths: HashMap<Uuid, EdgePath>,
    events: Vec<EditorEvent>,
}

impl Editor {
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self::with_config(viewport_width, viewport_height, EditorConfig::default())
    }

    pub fn with_config(viewport_width: f64, viewport_height: f64, config: EditorConfig) -> Self {
        Self {
            graph: TaskGraph::new(),
            camera: Camera::new(viewport_width, viewport_height),
            selection: Selection::default(),
            gesture: None,
            config,
            link_mode: false,
            paths: HashMap::new(),
            events: Vec::new(),
        }
    }

    // --- document boundary ---

    /// Replaces the live model with the document's contents. Dependencies
    /// that fail to resolve or are rejected by policy are skipped; the
    /// errors are returned so the host can surface them.
    pub fn load_graph(&mut self, doc: &GraphDocument) -> Vec<GraphError> {
        self.gesture = None;
        let (graph, skipped) = document::from_document(doc);
        self.graph = graph;
        if self.selection.clear() {
            self.emit_selection_changed();
        }
        self.refresh_all_paths();
        skipped
    }

    pub fn get_graph(&self) -> GraphDocument {
        document::to_document(&self.graph)
    }

    // --- task operations ---

    pub fn add_task(&mut self, spec: TaskSpec) -> Uuid {
        let position = spec.position.unwrap_or_else(|| {
            let center = self.camera.view_center_world();
            Position::new(
                center.x - self.config.node_width / 2.0,
                center.y - self.config.node_height / 2.0,
            )
        });
        let id = self.graph.add_task(spec.title, position);
        if !spec.description.is_empty() {
            let _ = self.graph.set_task_description(id, spec.description);
        }
        id
    }

    pub fn rename_task(&mut self, id: Uuid, title: impl Into<String>) -> Result<(), GraphError> {
        self.graph.rename_task(id, title)
    }

    /// Deletes every selected task, cascading to incident dependencies, and
    /// leaves the selection empty.
    pub fn delete_selected(&mut self) {
        let ids = self.selection.ordered(&self.graph);
        if ids.is_empty() {
            return;
        }
        for id in ids {
            self.graph.delete_task(id);
        }
        let graph = &self.graph;
        self.paths.retain(|dep_id, _| graph.dependency(*dep_id).is_some());
        self.selection.clear();
        self.emit_selection_changed();
    }

    /// Toggles completion of every selected task: todo tasks complete,
    /// completed tasks revert.
    pub fn complete_selected(&mut self) {
        for id in self.selection.ordered(&self.graph) {
            let next = match self.graph.task(id) {
                Some(task) if task.is_completed() => TaskStatus::Todo,
                Some(_) => TaskStatus::Completed,
                None => continue,
            };
            let _ = self.graph.set_task_status(id, next);
        }
    }

    pub fn select_all(&mut self) {
        let ids = self.graph.task_ids_in_order().to_vec();
        if self.selection.select_all(ids.into_iter()) {
            self.emit_selection_changed();
        }
    }

    pub fn clear_graph(&mut self) {
        self.gesture = None;
        self.graph.clear();
        self.paths.clear();
        if self.selection.clear() {
            self.emit_selection_changed();
        }
    }

    // --- view operations ---

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.camera.set_viewport(width, height);
    }

    /// Wheel-zoom entry point for the host.
    pub fn apply_zoom_factor(&mut self, factor: f64) {
        self.camera.apply_zoom_factor(factor, &self.config);
    }

    /// Programmatic pan (scrollbars, keyboard). Gesture panning goes through
    /// the pointer events instead.
    pub fn apply_pan_delta(&mut self, dx: f64, dy: f64) {
        self.camera.apply_pan_delta(dx, dy);
    }

    /// Link-mode toggle provided by the host's chrome; a held modifier on
    /// pointer-down has the same effect per gesture.
    pub fn set_link_mode(&mut self, enabled: bool) {
        self.link_mode = enabled;
    }

    pub fn link_mode(&self) -> bool {
        self.link_mode
    }

    // --- events ---

    pub fn drain_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.events)
    }

    // --- read accessors for rendering ---

    pub fn graph(&self) -> &TaskGraph {
        &self.graph
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// World-space box of a task's visual node.
    pub fn task_box(&self, id: Uuid) -> Option<Rect> {
        self.graph.task(id).map(|task| path::task_rect(task, &self.config))
    }

    pub fn edge_path(&self, dep_id: Uuid) -> Option<&EdgePath> {
        self.paths.get(&dep_id)
    }

    /// Visible edges in dependency creation order. Hidden edges (degenerate
    /// geometry) are absent.
    pub fn edge_paths(&self) -> impl Iterator<Item = (Uuid, &EdgePath)> {
        self.graph
            .dependencies_in_order()
            .filter_map(|dep| self.paths.get(&dep.id).map(|path| (dep.id, path)))
    }

    /// The provisional edge of a link gesture in progress, if visible.
    pub fn live_path(&self) -> Option<EdgePath> {
        match &self.gesture {
            Some(Gesture::Linking {
                source_id,
                live_dest,
                ..
            }) => render_live_path(&self.graph, *source_id, *live_dest, &self.config),
            _ => None,
        }
    }

    pub fn selected_tasks(&self) -> Vec<Uuid> {
        self.selection.ordered(&self.graph)
    }

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selection.contains(id)
    }

    // --- internals shared with the gesture machine ---

    pub(crate) fn emit_selection_changed(&mut self) {
        let selected = self.selection.ordered(&self.graph);
        self.events.push(EditorEvent::SelectionChanged { selected });
    }

    pub(crate) fn refresh_all_paths(&mut self) {
        let graph = &self.graph;
        let config = &self.config;
        let mut paths = HashMap::new();
        for dep in graph.dependencies_in_order() {
            if let Some(path) = render_path(graph, dep, config) {
                paths.insert(dep.id, path);
            }
        }
        self.paths = paths;
    }

    pub(crate) fn refresh_paths_for_task(&mut self, task_id: Uuid) {
        for dep_id in self.graph.incident_dependencies(task_id) {
            self.refresh_path(dep_id);
        }
    }

    pub(crate) fn refresh_path(&mut self, dep_id: Uuid) {
        let rendered = self
            .graph
            .dependency(dep_id)
            .and_then(|dep| render_path(&self.graph, dep, &self.config));
        match rendered {
            Some(path) => {
                self.paths.insert(dep_id, path);
            }
            None => {
                self.paths.remove(&dep_id);
            }
        }
    }

    pub(crate) fn hit_test(&self, screen: Point) -> Option<Uuid> {
        let world = self.camera.screen_to_world(screen);
        self.graph
            .task_ids_in_order()
            .iter()
            .rev()
            .find(|id| {
                self.graph
                    .task(**id)
                    .is_some_and(|task| path::task_rect(task, &self.config).contains(world))
            })
            .copied()
    }
}
