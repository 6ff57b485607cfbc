use thiserror::Error;
use uuid::Uuid;

/// Failures of graph mutation and document resolution.
///
/// None of these are fatal to the editor: gesture and document boundaries
/// log the error, skip the offending record, and continue.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Task not found: {id}")]
    TaskNotFound { id: Uuid },

    #[error("Dependency endpoint not found: {name:?}")]
    EndpointNotFound { name: String },

    #[error("Dependency endpoint name is ambiguous: {name:?}")]
    AmbiguousName { name: String },

    #[error("Task cannot depend on itself: {id}")]
    SelfDependency { id: Uuid },

    #[error("Dependency already exists: {predecessor_id} -> {successor_id}")]
    DuplicateDependency {
        predecessor_id: Uuid,
        successor_id: Uuid,
    },

    #[error("Adding this dependency would create a cycle: {predecessor_id} -> {successor_id}")]
    CircularDependency {
        predecessor_id: Uuid,
        successor_id: Uuid,
    },
}
