use crate::geometry::Point;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A node on the map: a named task with a world position and a completion
/// status. Identity is the generated `id`; `title` is display text and is
/// not required to be unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub position: Position,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Dependency ids where this task is the predecessor, in creation order.
    pub outgoing: Vec<Uuid>,
    /// Dependency ids where this task is the successor, in creation order.
    pub incoming: Vec<Uuid>,
}

/// Top-left corner of the task's visual box, in world coordinates. The
/// pan/zoom transform never touches this; it stays in a stable world frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Todo,
    Completed,
}

impl Task {
    pub fn new(title: String, position: Position) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description: String::new(),
            status: TaskStatus::Todo,
            position,
            created_at: now,
            updated_at: now,
            completed_at: None,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    pub fn update_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.updated_at = Utc::now();

        if status == TaskStatus::Completed {
            self.completed_at = Some(Utc::now());
        } else {
            self.completed_at = None;
        }
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position = Position::new(x, y);
        self.updated_at = Utc::now();
    }

    pub fn rename(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}
