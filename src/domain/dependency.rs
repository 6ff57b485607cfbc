use crate::error::GraphError;
use chrono::{DateTime, Utc};
use petgraph::algo::toposort;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A directed edge: the successor task depends on the predecessor task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dependency {
    pub id: Uuid,
    pub predecessor_id: Uuid,
    pub successor_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Dependency {
    pub fn new(predecessor_id: Uuid, successor_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            predecessor_id,
            successor_id,
            created_at: Utc::now(),
        }
    }
}

/// Petgraph mirror of the edge set. Kept in sync by [`TaskGraph`] and used
/// for cycle rejection and topological order; tasks and dependencies
/// themselves live in the arena, not here.
///
/// [`TaskGraph`]: crate::domain::graph::TaskGraph
pub struct DependencyGraph {
    graph: StableDiGraph<Uuid, Uuid>,
    node_map: HashMap<Uuid, NodeIndex>,
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self {
            graph: StableDiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    pub fn add_task(&mut self, task_id: Uuid) {
        if !self.node_map.contains_key(&task_id) {
            let node = self.graph.add_node(task_id);
            self.node_map.insert(task_id, node);
        }
    }

    pub fn remove_task(&mut self, task_id: Uuid) {
        if let Some(node) = self.node_map.remove(&task_id) {
            self.graph.remove_node(node);
        }
    }

    /// Mirrors a new edge, rejecting it if it would close a cycle.
    pub fn add_dependency(&mut self, dependency: &Dependency) -> Result<(), GraphError> {
        self.add_task(dependency.predecessor_id);
        self.add_task(dependency.successor_id);

        let from_node = self.node_map[&dependency.predecessor_id];
        let to_node = self.node_map[&dependency.successor_id];

        let edge = self.graph.add_edge(from_node, to_node, dependency.id);

        if self.has_cycle() {
            self.graph.remove_edge(edge);
            return Err(GraphError::CircularDependency {
                predecessor_id: dependency.predecessor_id,
                successor_id: dependency.successor_id,
            });
        }

        Ok(())
    }

    pub fn remove_dependency(&mut self, predecessor_id: Uuid, successor_id: Uuid) -> bool {
        if let (Some(&from_node), Some(&to_node)) = (
            self.node_map.get(&predecessor_id),
            self.node_map.get(&successor_id),
        ) && let Some(edge) = self.graph.find_edge(from_node, to_node)
        {
            self.graph.remove_edge(edge);
            return true;
        }
        false
    }

    pub fn has_cycle(&self) -> bool {
        toposort(&self.graph, None).is_err()
    }

    /// Task ids in dependency order, or `None` if the mirror is cyclic.
    pub fn topological_sort(&self) -> Option<Vec<Uuid>> {
        toposort(&self.graph, None)
            .ok()
            .map(|nodes| nodes.into_iter().map(|node| self.graph[node]).collect())
    }

    pub fn clear(&mut self) {
        self.graph.clear();
        self.node_map.clear();
    }
}
