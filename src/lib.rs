pub mod domain;
pub mod editor;
pub mod error;
pub mod geometry;

pub use domain::document::GraphDocument;
pub use domain::graph::TaskGraph;
pub use editor::{Editor, EditorConfig, EditorEvent, Modifiers, PointerEvent, TaskSpec};
pub use error::GraphError;
