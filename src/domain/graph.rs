use crate::domain::dependency::{Dependency, DependencyGraph};
use crate::domain::task::{Position, Task, TaskStatus};
use crate::error::GraphError;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Arena owning every live [`Task`] and [`Dependency`].
///
/// Tasks and dependencies are addressed by id rather than holding references
/// to each other, so deletion is a map removal plus adjacency-list cleanup.
/// The graph enforces referential integrity: a dependency id appears in
/// exactly one task's `outgoing` and exactly one task's `incoming` for as
/// long as it lives, and deleting a task severs all incident dependencies
/// before the task record goes away.
pub struct TaskGraph {
    tasks: HashMap<Uuid, Task>,
    /// Render order: insertion order of live tasks.
    order: Vec<Uuid>,
    dependencies: HashMap<Uuid, Dependency>,
    /// Creation order of live dependencies.
    dep_order: Vec<Uuid>,
    mirror: DependencyGraph,
}

impl Default for TaskGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskGraph {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
            order: Vec::new(),
            dependencies: HashMap::new(),
            dep_order: Vec::new(),
            mirror: DependencyGraph::new(),
        }
    }

    pub fn add_task(&mut self, title: impl Into<String>, position: Position) -> Uuid {
        let task = Task::new(title.into(), position);
        let id = task.id;
        self.tasks.insert(id, task);
        self.order.push(id);
        self.mirror.add_task(id);
        debug!(task_id = %id, "task added");
        id
    }

    pub fn task(&self, id: Uuid) -> Option<&Task> {
        self.tasks.get(&id)
    }

    pub fn dependency(&self, id: Uuid) -> Option<&Dependency> {
        self.dependencies.get(&id)
    }

    /// Live tasks in render order.
    pub fn tasks_in_order(&self) -> impl Iterator<Item = &Task> {
        self.order.iter().filter_map(|id| self.tasks.get(id))
    }

    /// Live dependencies in creation order.
    pub fn dependencies_in_order(&self) -> impl Iterator<Item = &Dependency> {
        self.dep_order.iter().filter_map(|id| self.dependencies.get(id))
    }

    pub fn task_ids_in_order(&self) -> &[Uuid] {
        &self.order
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Creates an edge from `predecessor_id` to `successor_id`.
    ///
    /// Rejects dead endpoints, self-loops, duplicate pairs, and edges that
    /// would close a cycle. Both adjacency lists are updated together; no
    /// intermediate state is observable to callers.
    pub fn add_dependency(
        &mut self,
        predecessor_id: Uuid,
        successor_id: Uuid,
    ) -> Result<Uuid, GraphError> {
        if !self.tasks.contains_key(&predecessor_id) {
            return Err(GraphError::TaskNotFound { id: predecessor_id });
        }
        if !self.tasks.contains_key(&successor_id) {
            return Err(GraphError::TaskNotFound { id: successor_id });
        }
        if predecessor_id == successor_id {
            return Err(GraphError::SelfDependency { id: predecessor_id });
        }
        let duplicate = self.tasks[&predecessor_id].outgoing.iter().any(|dep_id| {
            self.dependencies
                .get(dep_id)
                .is_some_and(|dep| dep.successor_id == successor_id)
        });
        if duplicate {
            return Err(GraphError::DuplicateDependency {
                predecessor_id,
                successor_id,
            });
        }

        let dependency = Dependency::new(predecessor_id, successor_id);
        self.mirror.add_dependency(&dependency)?;

        let id = dependency.id;
        self.dependencies.insert(id, dependency);
        self.dep_order.push(id);
        self.tasks
            .get_mut(&predecessor_id)
            .expect("endpoint checked above")
            .outgoing
            .push(id);
        self.tasks
            .get_mut(&successor_id)
            .expect("endpoint checked above")
            .incoming
            .push(id);
        debug!(dep_id = %id, %predecessor_id, %successor_id, "dependency added");
        Ok(id)
    }

    /// Removes a dependency from both endpoints' adjacency lists and drops it.
    pub fn delete_dependency(&mut self, id: Uuid) -> Option<Dependency> {
        let dependency = self.dependencies.remove(&id)?;
        self.dep_order.retain(|dep_id| *dep_id != id);
        if let Some(pred) = self.tasks.get_mut(&dependency.predecessor_id) {
            pred.outgoing.retain(|dep_id| *dep_id != id);
        }
        if let Some(succ) = self.tasks.get_mut(&dependency.successor_id) {
            succ.incoming.retain(|dep_id| *dep_id != id);
        }
        self.mirror
            .remove_dependency(dependency.predecessor_id, dependency.successor_id);
        debug!(dep_id = %id, "dependency deleted");
        Some(dependency)
    }

    /// Deletes a task, cascading to every incident dependency first so that
    /// no dependency ever references a destroyed endpoint.
    pub fn delete_task(&mut self, id: Uuid) -> Option<Task> {
        if !self.tasks.contains_key(&id) {
            return None;
        }
        for dep_id in self.incident_dependencies(id) {
            self.delete_dependency(dep_id);
        }
        self.order.retain(|task_id| *task_id != id);
        self.mirror.remove_task(id);
        let task = self.tasks.remove(&id);
        debug!(task_id = %id, "task deleted");
        task
    }

    /// Ids of every dependency touching `task_id`, outgoing then incoming.
    pub fn incident_dependencies(&self, task_id: Uuid) -> Vec<Uuid> {
        let Some(task) = self.tasks.get(&task_id) else {
            return Vec::new();
        };
        task.outgoing
            .iter()
            .chain(task.incoming.iter())
            .copied()
            .collect()
    }

    pub fn set_task_position(&mut self, id: Uuid, x: f64, y: f64) -> Result<(), GraphError> {
        let task = self
            .tasks
            .get_mut(&id)
            .ok_or(GraphError::TaskNotFound { id })?;
        task.set_position(x, y);
        Ok(())
    }

    pub fn rename_task(&mut self, id: Uuid, title: impl Into<String>) -> Result<(), GraphError> {
        let task = self
            .tasks
            .get_mut(&id)
            .ok_or(GraphError::TaskNotFound { id })?;
        task.rename(title.into());
        Ok(())
    }

    pub fn set_task_description(
        &mut self,
        id: Uuid,
        description: impl Into<String>,
    ) -> Result<(), GraphError> {
        let task = self
            .tasks
            .get_mut(&id)
            .ok_or(GraphError::TaskNotFound { id })?;
        task.description = description.into();
        task.updated_at = chrono::Utc::now();
        Ok(())
    }

    pub fn set_task_status(&mut self, id: Uuid, status: TaskStatus) -> Result<(), GraphError> {
        let task = self
            .tasks
            .get_mut(&id)
            .ok_or(GraphError::TaskNotFound { id })?;
        task.update_status(status);
        Ok(())
    }

    /// Resolves a display name to a task id for the document boundary.
    /// Resolution must be unique: zero matches and multiple matches are both
    /// reported as errors rather than silently picking the first.
    pub fn resolve_name(&self, name: &str) -> Result<Uuid, GraphError> {
        let mut found = None;
        for task in self.tasks_in_order() {
            if task.title == name {
                if found.is_some() {
                    return Err(GraphError::AmbiguousName {
                        name: name.to_string(),
                    });
                }
                found = Some(task.id);
            }
        }
        found.ok_or_else(|| GraphError::EndpointNotFound {
            name: name.to_string(),
        })
    }

    pub fn has_cycle(&self) -> bool {
        self.mirror.has_cycle()
    }

    /// Task ids in dependency order. `None` is unreachable while cycle
    /// rejection holds, but the mirror's answer is passed through as-is.
    pub fn topological_order(&self) -> Option<Vec<Uuid>> {
        self.mirror.topological_sort()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
        self.order.clear();
        self.dependencies.clear();
        self.dep_order.clear();
        self.mirror.clear();
    }
}
