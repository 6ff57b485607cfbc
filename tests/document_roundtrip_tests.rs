use std::fs::File;
use std::io::{BufReader, BufWriter};

use taskmap::domain::document::{DependencyRecord, TaskRecord};
use taskmap::domain::task::{Position, TaskStatus};
use taskmap::{Editor, GraphDocument, GraphError, TaskSpec};

fn sample_document() -> GraphDocument {
    GraphDocument {
        tasks: vec![
            TaskRecord {
                name: "Plan".to_string(),
                pos: Position::new(-120.0, 40.0),
                status: TaskStatus::Completed,
            },
            TaskRecord {
                name: "Write".to_string(),
                pos: Position::new(160.0, 0.0),
                status: TaskStatus::Todo,
            },
            TaskRecord {
                name: "Review".to_string(),
                pos: Position::new(440.0, -60.0),
                status: TaskStatus::Todo,
            },
        ],
        dependencies: vec![
            DependencyRecord {
                predecessor: "Plan".to_string(),
                successor: "Write".to_string(),
            },
            DependencyRecord {
                predecessor: "Write".to_string(),
                successor: "Review".to_string(),
            },
        ],
    }
}

#[test]
fn test_load_then_get_round_trips() {
    let mut editor = Editor::new(800.0, 600.0);
    let skipped = editor.load_graph(&sample_document());
    assert!(skipped.is_empty());

    assert_eq!(editor.get_graph(), sample_document());
}

#[test]
fn test_load_replaces_previous_contents() {
    let mut editor = Editor::new(800.0, 600.0);
    editor.add_task(TaskSpec::named("Stale").at(0.0, 0.0));

    editor.load_graph(&sample_document());
    assert_eq!(editor.graph().task_count(), 3);
    assert!(editor.graph().resolve_name("Stale").is_err());
    // Edge paths were rebuilt for the loaded edges.
    assert_eq!(editor.edge_paths().count(), 2);
}

#[test]
fn test_unknown_endpoint_is_reported_not_fatal() {
    let mut doc = sample_document();
    doc.dependencies.push(DependencyRecord {
        predecessor: "Review".to_string(),
        successor: "Publish".to_string(),
    });

    let mut editor = Editor::new(800.0, 600.0);
    let skipped = editor.load_graph(&doc);
    assert_eq!(
        skipped,
        vec![GraphError::EndpointNotFound {
            name: "Publish".to_string()
        }]
    );
    assert_eq!(editor.graph().dependency_count(), 2);
}

#[test]
fn test_round_trip_through_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");

    let doc = sample_document();
    serde_json::to_writer_pretty(BufWriter::new(File::create(&path).unwrap()), &doc).unwrap();

    let loaded: GraphDocument =
        serde_json::from_reader(BufReader::new(File::open(&path).unwrap())).unwrap();
    assert_eq!(loaded, doc);

    let mut editor = Editor::new(800.0, 600.0);
    assert!(editor.load_graph(&loaded).is_empty());
    assert_eq!(editor.get_graph(), doc);
}

#[test]
fn test_snapshot_reflects_interactive_edits() {
    let mut editor = Editor::new(800.0, 600.0);
    editor.load_graph(&sample_document());

    // Move a task and complete it through the public surface.
    down_up_select(&mut editor, 170.0, 10.0);
    editor.complete_selected();
    drag(&mut editor, (170.0, 10.0), (500.0, 210.0));

    let doc = editor.get_graph();
    let record = doc.tasks.iter().find(|t| t.name == "Write").unwrap();
    assert_eq!(record.status, TaskStatus::Completed);
    assert_eq!((record.pos.x, record.pos.y), (490.0, 200.0));
    assert_eq!(doc.dependencies.len(), 2);

    // And the edits survive another round trip.
    let mut second = Editor::new(800.0, 600.0);
    assert!(second.load_graph(&doc).is_empty());
    assert_eq!(second.get_graph(), doc);
    assert_eq!(
        second.graph().task(second.graph().resolve_name("Write").unwrap()).unwrap().status,
        TaskStatus::Completed
    );
}

fn down_up_select(editor: &mut Editor, x: f64, y: f64) {
    editor.handle_pointer(taskmap::PointerEvent::Down {
        pointer_id: 1,
        pos: taskmap::geometry::Point::new(x, y),
        modifiers: taskmap::Modifiers::default(),
    });
    editor.handle_pointer(taskmap::PointerEvent::Up {
        pointer_id: 1,
        pos: taskmap::geometry::Point::new(x, y),
    });
}

fn drag(editor: &mut Editor, from: (f64, f64), to: (f64, f64)) {
    editor.handle_pointer(taskmap::PointerEvent::Down {
        pointer_id: 1,
        pos: taskmap::geometry::Point::new(from.0, from.1),
        modifiers: taskmap::Modifiers::default(),
    });
    editor.handle_pointer(taskmap::PointerEvent::Move {
        pointer_id: 1,
        pos: taskmap::geometry::Point::new(to.0, to.1),
    });
    editor.handle_pointer(taskmap::PointerEvent::Up {
        pointer_id: 1,
        pos: taskmap::geometry::Point::new(to.0, to.1),
    });
}
