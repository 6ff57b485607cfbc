use crate::domain::graph::TaskGraph;
use crate::domain::task::{Position, TaskStatus};
use crate::error::GraphError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Plain exchange form of a graph. Dependencies reference their endpoints by
/// task name; translation to and from id-keyed live entities happens here,
/// at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GraphDocument {
    pub tasks: Vec<TaskRecord>,
    pub dependencies: Vec<DependencyRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskRecord {
    pub name: String,
    pub pos: Position,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DependencyRecord {
    pub predecessor: String,
    pub successor: String,
}

/// Snapshots the live model: tasks in render order, dependencies in creation
/// order, endpoints keyed by name.
pub fn to_document(graph: &TaskGraph) -> GraphDocument {
    let tasks = graph
        .tasks_in_order()
        .map(|task| TaskRecord {
            name: task.title.clone(),
            pos: task.position,
            status: task.status,
        })
        .collect();

    let dependencies = graph
        .dependencies_in_order()
        .filter_map(|dep| {
            let predecessor = graph.task(dep.predecessor_id)?;
            let successor = graph.task(dep.successor_id)?;
            Some(DependencyRecord {
                predecessor: predecessor.title.clone(),
                successor: successor.title.clone(),
            })
        })
        .collect();

    GraphDocument {
        tasks,
        dependencies,
    }
}

/// Builds a live model from a document: tasks in document order, then
/// dependencies in document order. A dependency whose endpoints do not
/// resolve uniquely, or which the graph rejects, is skipped and reported;
/// the rest of the document still loads.
pub fn from_document(doc: &GraphDocument) -> (TaskGraph, Vec<GraphError>) {
    let mut graph = TaskGraph::new();
    let mut skipped = Vec::new();

    for record in &doc.tasks {
        let id = graph.add_task(record.name.clone(), record.pos);
        if record.status != TaskStatus::Todo {
            let _ = graph.set_task_status(id, record.status);
        }
    }

    for record in &doc.dependencies {
        let resolved = graph
            .resolve_name(&record.predecessor)
            .and_then(|pred| graph.resolve_name(&record.successor).map(|succ| (pred, succ)));
        let result = resolved.and_then(|(pred, succ)| graph.add_dependency(pred, succ));
        if let Err(err) = result {
            warn!(
                predecessor = %record.predecessor,
                successor = %record.successor,
                %err,
                "skipping dependency record"
            );
            skipped.push(err);
        }
    }

    (graph, skipped)
}
