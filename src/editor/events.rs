use uuid::Uuid;

/// Observable facts the editor queues for its host. Drained with
/// [`Editor::drain_events`](crate::editor::Editor::drain_events) after each
/// input; the host reacts (repaints, persists, updates chrome) between
/// inputs, never during one.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The selected set changed. Ids are in current render order, not
    /// selection order.
    SelectionChanged { selected: Vec<Uuid> },
    /// A drag gesture committed a new position for this task.
    TaskMoved { task_id: Uuid },
    /// A link gesture committed a new dependency. No payload; consumers
    /// re-read the graph.
    NewDependency,
}
