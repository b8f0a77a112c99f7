//! Keyboard sensor: arrow-key dragging for sortable lists.
//!
//! Space or Enter on a focused item picks it up, ArrowUp/ArrowDown move the
//! drop target to the vertically adjacent droppable, Space or Enter again
//! drops, Escape (handled by the global binding) cancels.

use leptos::prelude::*;

use crate::collision::Rect;
use crate::{end_drag, measure_rects, DndCallbacks, DndConfig, DndSignals};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalDir {
    Up,
    Down,
}

/// Nearest droppable strictly above/below `current` by center Y.
/// Returns `None` at the ends of the list or when `current` is unknown.
pub fn step_vertical(current: u32, dir: VerticalDir, rects: &[(u32, Rect)]) -> Option<u32> {
    let (_, cur) = rects.iter().find(|(id, _)| *id == current)?;
    let (_, cy) = cur.center();
    let mut best: Option<(u32, f64)> = None;
    for (id, rect) in rects {
        if *id == current {
            continue;
        }
        let (_, y) = rect.center();
        let delta = y - cy;
        let forward = match dir {
            VerticalDir::Down => delta > 0.0,
            VerticalDir::Up => delta < 0.0,
        };
        if !forward {
            continue;
        }
        let dist = delta.abs();
        if best.map(|(_, b)| dist < b).unwrap_or(true) {
            best = Some((*id, dist));
        }
    }
    best.map(|(id, _)| id)
}

/// Point the overlay at a droppable's rect while keyboard-dragging
fn focus_overlay_on(dnd: &DndSignals, id: u32, rects: &[(u32, Rect)]) {
    if let Some((_, rect)) = rects.iter().find(|(rid, _)| *rid == id) {
        let (cx, cy) = rect.center();
        dnd.pointer_x_write.set(cx as i32);
        dnd.pointer_y_write.set(cy as i32);
    }
}

/// Resolved meaning of a keydown on a focusable item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    PickUp,
    Drop,
    Step(VerticalDir),
}

/// Decide what a key press on `item_id` means. Keys only finish or steer
/// drags the keyboard started; a pointer drag in flight is left alone.
pub fn key_action(
    key: &str,
    item_id: u32,
    dragging: Option<u32>,
    keyboard_mode: bool,
) -> Option<KeyAction> {
    let own_keyboard_drag = dragging == Some(item_id) && keyboard_mode;
    match key {
        " " | "Enter" if dragging.is_none() => Some(KeyAction::PickUp),
        " " | "Enter" if own_keyboard_drag => Some(KeyAction::Drop),
        "ArrowUp" if own_keyboard_drag => Some(KeyAction::Step(VerticalDir::Up)),
        "ArrowDown" if own_keyboard_drag => Some(KeyAction::Step(VerticalDir::Down)),
        _ => None,
    }
}

/// Create keydown handler for a focusable draggable item
pub fn make_on_keydown(
    dnd: DndSignals,
    cfg: DndConfig,
    cbs: DndCallbacks,
    item_id: u32,
) -> impl Fn(web_sys::KeyboardEvent) + Copy + 'static {
    move |ev: web_sys::KeyboardEvent| {
        let Some(action) = key_action(
            &ev.key(),
            item_id,
            dnd.dragging_id_read.get_untracked(),
            dnd.keyboard_read.get_untracked(),
        ) else {
            return;
        };
        ev.prevent_default();
        match action {
            KeyAction::PickUp => {
                let rects = measure_rects(cfg.scope);
                dnd.keyboard_write.set(true);
                dnd.dragging_id_write.set(Some(item_id));
                dnd.over_id_write.set(Some(item_id));
                focus_overlay_on(&dnd, item_id, &rects);
                cbs.on_start.run(item_id);
            }
            KeyAction::Drop => {
                let target = dnd.over_id_read.get_untracked();
                end_drag(&dnd);
                cbs.on_drop.run((item_id, target));
            }
            KeyAction::Step(dir) => {
                let rects = measure_rects(cfg.scope);
                let current = dnd.over_id_read.get_untracked().unwrap_or(item_id);
                if let Some(next) = step_vertical(current, dir, &rects) {
                    dnd.over_id_write.set(Some(next));
                    focus_overlay_on(&dnd, next, &rects);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u32, top: f64) -> (u32, Rect) {
        (
            id,
            Rect {
                x: 0.0,
                y: top,
                width: 100.0,
                height: 40.0,
            },
        )
    }

    #[test]
    fn steps_to_adjacent_rows() {
        let rects = vec![row(1, 0.0), row(2, 40.0), row(3, 80.0)];
        assert_eq!(step_vertical(2, VerticalDir::Up, &rects), Some(1));
        assert_eq!(step_vertical(2, VerticalDir::Down, &rects), Some(3));
    }

    #[test]
    fn stops_at_list_ends() {
        let rects = vec![row(1, 0.0), row(2, 40.0), row(3, 80.0)];
        assert_eq!(step_vertical(1, VerticalDir::Up, &rects), None);
        assert_eq!(step_vertical(3, VerticalDir::Down, &rects), None);
    }

    #[test]
    fn unknown_current_is_none() {
        let rects = vec![row(1, 0.0)];
        assert_eq!(step_vertical(9, VerticalDir::Down, &rects), None);
    }

    #[test]
    fn keys_do_not_finish_pointer_drags() {
        assert_eq!(key_action(" ", 2, Some(2), false), None);
        assert_eq!(key_action("Enter", 2, Some(2), false), None);
        assert_eq!(key_action("ArrowDown", 2, Some(2), false), None);
    }

    #[test]
    fn keys_drive_own_keyboard_drag() {
        assert_eq!(key_action(" ", 2, None, false), Some(KeyAction::PickUp));
        assert_eq!(key_action("Enter", 2, Some(2), true), Some(KeyAction::Drop));
        assert_eq!(
            key_action("ArrowUp", 2, Some(2), true),
            Some(KeyAction::Step(VerticalDir::Up))
        );
        // Another item's drag is none of this handler's business
        assert_eq!(key_action(" ", 2, Some(3), true), None);
        assert_eq!(key_action("ArrowDown", 2, Some(3), true), None);
        assert_eq!(key_action("x", 2, Some(2), true), None);
    }

    #[test]
    fn skips_rows_in_the_wrong_direction() {
        // Display order differs from id order; stepping follows geometry
        let rects = vec![row(3, 0.0), row(1, 40.0), row(2, 80.0)];
        assert_eq!(step_vertical(1, VerticalDir::Up, &rects), Some(3));
        assert_eq!(step_vertical(1, VerticalDir::Down, &rects), Some(2));
    }
}
