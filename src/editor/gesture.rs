use crate::editor::Editor;
use crate::editor::events::EditorEvent;
use crate::geometry::{Point, squared_distance};
use tracing::{debug, warn};
use uuid::Uuid;

/// Host-assigned pointer device id (e.g. `PointerEvent.pointerId`).
pub type PointerId = u32;

/// Modifier keys held at pointer-down. `link` turns a task press into a
/// link gesture even when the persistent link-mode toggle is off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub link: bool,
}

/// Low-level pointer events, in screen coordinates. The host forwards its
/// toolkit's pointer stream here; pointer capture on the host side keeps
/// move/up events flowing to the same stream when the cursor leaves the
/// canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down {
        pointer_id: PointerId,
        pos: Point,
        modifiers: Modifiers,
    },
    Move {
        pointer_id: PointerId,
        pos: Point,
    },
    Up {
        pointer_id: PointerId,
        pos: Point,
    },
    Cancel {
        pointer_id: PointerId,
    },
}

/// The gesture in flight. One at a time; events from other pointer ids are
/// ignored until it resolves. Task and dependency handles are re-resolved
/// against the model on every event, never cached across gestures.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// Background press: every move pans the camera.
    Panning { pointer_id: PointerId, last_pos: Point },
    /// Task press: a click until the threshold is exceeded, then a drag.
    DraggingTask {
        pointer_id: PointerId,
        task_id: Uuid,
        start_pos: Point,
        /// World offset of the press point inside the task's box; preserved
        /// under the cursor while dragging.
        grab_offset: Point,
        moved: bool,
        shift: bool,
    },
    /// Task press in link mode: a provisional edge follows the pointer.
    Linking {
        pointer_id: PointerId,
        source_id: Uuid,
        start_pos: Point,
        /// Raw pointer position in world coordinates.
        live_dest: Point,
        moved: bool,
        shift: bool,
    },
}

impl Gesture {
    fn pointer_id(&self) -> PointerId {
        match self {
            Gesture::Panning { pointer_id, .. }
            | Gesture::DraggingTask { pointer_id, .. }
            | Gesture::Linking { pointer_id, .. } => *pointer_id,
        }
    }
}

impl Editor {
    /// Single entry point for the pointer stream. Each call fully resolves
    /// its transition (model mutated, paths recomputed, events queued)
    /// before returning.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down {
                pointer_id,
                pos,
                modifiers,
            } => self.pointer_down(pointer_id, pos, modifiers),
            PointerEvent::Move { pointer_id, pos } => self.pointer_move(pointer_id, pos),
            PointerEvent::Up { pointer_id, pos } => self.pointer_up(pointer_id, pos),
            PointerEvent::Cancel { pointer_id } => self.pointer_cancel(pointer_id),
        }
    }

    /// The gesture currently in flight, for host inspection.
    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    fn pointer_down(&mut self, pointer_id: PointerId, pos: Point, modifiers: Modifiers) {
        if self.gesture.is_some() {
            debug!(pointer_id, "pointer down ignored, gesture already active");
            return;
        }

        match self.hit_test(pos) {
            None => {
                // Background press resets the selection before any movement.
                if self.selection.clear() {
                    self.emit_selection_changed();
                }
                self.gesture = Some(Gesture::Panning {
                    pointer_id,
                    last_pos: pos,
                });
                debug!(pointer_id, "panning started");
            }
            Some(task_id) if modifiers.link || self.link_mode => {
                self.gesture = Some(Gesture::Linking {
                    pointer_id,
                    source_id: task_id,
                    start_pos: pos,
                    live_dest: self.camera.screen_to_world(pos),
                    moved: false,
                    shift: modifiers.shift,
                });
                debug!(pointer_id, source = %task_id, "linking started");
            }
            Some(task_id) => {
                let world = self.camera.screen_to_world(pos);
                let Some(task) = self.graph.task(task_id) else {
                    return;
                };
                let grab_offset = Point::new(world.x - task.position.x, world.y - task.position.y);
                self.gesture = Some(Gesture::DraggingTask {
                    pointer_id,
                    task_id,
                    start_pos: pos,
                    grab_offset,
                    moved: false,
                    shift: modifiers.shift,
                });
                debug!(pointer_id, task = %task_id, "drag started");
            }
        }
    }

    fn pointer_move(&mut self, pointer_id: PointerId, pos: Point) {
        let Some(mut gesture) = self.gesture.take() else {
            return;
        };
        if gesture.pointer_id() != pointer_id {
            self.gesture = Some(gesture);
            return;
        }

        match &mut gesture {
            Gesture::Panning { last_pos, .. } => {
                self.camera.apply_pan_delta(pos.x - last_pos.x, pos.y - last_pos.y);
                *last_pos = pos;
            }
            Gesture::DraggingTask {
                task_id,
                start_pos,
                grab_offset,
                moved,
                ..
            } => {
                if !*moved
                    && squared_distance(pos, *start_pos) > self.config.drag_threshold_squared()
                {
                    *moved = true;
                }
                if *moved {
                    let world = self.camera.screen_to_world(pos);
                    let _ = self.graph.set_task_position(
                        *task_id,
                        world.x - grab_offset.x,
                        world.y - grab_offset.y,
                    );
                    self.refresh_paths_for_task(*task_id);
                }
            }
            Gesture::Linking {
                start_pos,
                live_dest,
                moved,
                ..
            } => {
                if !*moved
                    && squared_distance(pos, *start_pos) > self.config.drag_threshold_squared()
                {
                    *moved = true;
                }
                *live_dest = self.camera.screen_to_world(pos);
            }
        }
        self.gesture = Some(gesture);
    }

    fn pointer_up(&mut self, pointer_id: PointerId, pos: Point) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };
        if gesture.pointer_id() != pointer_id {
            self.gesture = Some(gesture);
            return;
        }

        match gesture {
            Gesture::Panning { .. } => {
                debug!(pointer_id, "panning ended");
            }
            Gesture::DraggingTask {
                task_id,
                moved,
                shift,
                ..
            } => {
                if moved {
                    self.events.push(EditorEvent::TaskMoved { task_id });
                } else {
                    self.resolve_click(task_id, shift);
                }
            }
            Gesture::Linking {
                source_id,
                moved,
                shift,
                ..
            } => {
                if !moved {
                    // Press-and-release without drag selects, even in link mode.
                    self.resolve_click(source_id, shift);
                } else {
                    match self.hit_test(pos) {
                        Some(target_id) if target_id != source_id => {
                            match self.graph.add_dependency(source_id, target_id) {
                                Ok(dep_id) => {
                                    self.refresh_path(dep_id);
                                    self.events.push(EditorEvent::NewDependency);
                                }
                                Err(err) => {
                                    warn!(%err, "link gesture rejected");
                                }
                            }
                        }
                        _ => {
                            debug!(pointer_id, "link gesture discarded");
                        }
                    }
                }
            }
        }
    }

    /// Identical to a non-moved pointer-up for drag/link gestures: nothing
    /// commits, and the selection click fires only when the gesture never
    /// exceeded the threshold.
    fn pointer_cancel(&mut self, pointer_id: PointerId) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };
        if gesture.pointer_id() != pointer_id {
            self.gesture = Some(gesture);
            return;
        }

        match gesture {
            Gesture::Panning { .. } => {}
            Gesture::DraggingTask {
                task_id,
                moved,
                shift,
                ..
            } => {
                if !moved {
                    self.resolve_click(task_id, shift);
                }
            }
            Gesture::Linking {
                source_id,
                moved,
                shift,
                ..
            } => {
                if !moved {
                    self.resolve_click(source_id, shift);
                }
            }
        }
        debug!(pointer_id, "gesture cancelled");
    }

    fn resolve_click(&mut self, task_id: Uuid, shift: bool) {
        let changed = if shift {
            self.selection.toggle(task_id)
        } else {
            self.selection.select_only(task_id)
        };
        if changed {
            self.emit_selection_changed();
        }
    }
}
