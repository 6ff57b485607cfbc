use crate::domain::graph::TaskGraph;
use std::collections::HashSet;
use uuid::Uuid;

/// The selected-task set. Mutations report whether anything actually changed
/// so the editor only broadcasts real transitions.
#[derive(Debug, Default)]
pub struct Selection {
    selected: HashSet<Uuid>,
}

impl Selection {
    pub fn contains(&self, id: Uuid) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Plain click: selection becomes exactly `{id}`.
    pub fn select_only(&mut self, id: Uuid) -> bool {
        if self.selected.len() == 1 && self.selected.contains(&id) {
            return false;
        }
        self.selected.clear();
        self.selected.insert(id);
        true
    }

    /// Shift-click: toggles `id`, leaving the rest untouched.
    pub fn toggle(&mut self, id: Uuid) -> bool {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        true
    }

    pub fn select_all(&mut self, ids: impl Iterator<Item = Uuid>) -> bool {
        let all: HashSet<Uuid> = ids.collect();
        if all == self.selected {
            return false;
        }
        self.selected = all;
        true
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        self.selected.remove(&id)
    }

    pub fn clear(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.selected.clear();
        true
    }

    /// Selected ids in the graph's render order.
    pub fn ordered(&self, graph: &TaskGraph) -> Vec<Uuid> {
        graph
            .task_ids_in_order()
            .iter()
            .filter(|id| self.selected.contains(id))
            .copied()
            .collect()
    }
}
