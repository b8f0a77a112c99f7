//! Sortable Drag Lifecycle
//!
//! The logical core of the sortable list: a tagged drag state, a single
//! total transition function over lifecycle events, the reorder algorithm,
//! and the pure projection the list view renders from. No DOM types here,
//! so every transition is unit-testable without simulating a pointer.

use crate::models::Item;

/// Drag lifecycle state. `Idle` is both initial and terminal; there is no
/// intermediate "dropping" state. Settle animation is a rendering concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging { id: u32 },
}

impl DragState {
    pub fn active_id(&self) -> Option<u32> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { id } => Some(*id),
        }
    }

    pub fn from_active(active: Option<u32>) -> Self {
        match active {
            Some(id) => DragState::Dragging { id },
            None => DragState::Idle,
        }
    }
}

/// Lifecycle events delivered by the drag engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragEvt {
    Start { id: u32 },
    /// `target` is the droppable under the pointer/focus at release,
    /// absent when released outside every droppable.
    End { id: u32, target: Option<u32> },
    Cancel,
}

/// Result of one transition: the next state, plus the reordered list when
/// the event completed a real move. `items: None` leaves the list as is.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub next: DragState,
    pub items: Option<Vec<Item>>,
}

impl Transition {
    fn idle() -> Self {
        Transition {
            next: DragState::Idle,
            items: None,
        }
    }
}

/// Advance the drag lifecycle. Total over all state/event pairs:
///
/// - `Start` begins a drag (restarting any drag already in flight).
/// - `End` always returns to `Idle`; the list changes only when the event's
///   id matches the active drag and names a distinct target still present
///   in the list. A stale or missing target degrades to a no-op.
/// - `Cancel` always returns to `Idle` with the list untouched.
/// - `End`/`Cancel` while `Idle` are idempotent no-ops, so repeated or
///   out-of-order engine signals never corrupt state.
pub fn transition(state: &DragState, items: &[Item], evt: &DragEvt) -> Transition {
    match (state, evt) {
        (_, DragEvt::Start { id }) => Transition {
            next: DragState::Dragging { id: *id },
            items: None,
        },
        (DragState::Idle, _) => Transition::idle(),
        (DragState::Dragging { id }, DragEvt::End { id: ended, target }) => {
            let moved = match target {
                Some(t) if ended == id && t != id => {
                    match (position(items, *id), position(items, *t)) {
                        (Some(from), Some(to)) => Some(array_move(items, from, to)),
                        // Stale reference: the engine lost a race with a
                        // list mutation. Degrade to a no-op.
                        _ => None,
                    }
                }
                _ => None,
            };
            Transition {
                next: DragState::Idle,
                items: moved,
            }
        }
        (DragState::Dragging { .. }, DragEvt::Cancel) => Transition::idle(),
    }
}

fn position(items: &[Item], id: u32) -> Option<usize> {
    items.iter().position(|item| item.id == id)
}

/// Move the element at `from` to `to`, shifting everything between by one.
/// Never mutates the input; out-of-range indices return an unchanged copy.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    if from == to || from >= moved.len() || to >= moved.len() {
        return moved;
    }
    let item = moved.remove(from);
    moved.insert(to, item);
    moved
}

/// One rendered list row
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub item: Item,
    /// The row renders as a dashed placeholder while its item is dragged
    pub is_dragging: bool,
}

/// Project the list state into rendered rows plus the overlay item.
/// Pure: identical inputs always produce identical output.
pub fn project(items: &[Item], state: &DragState) -> (Vec<Row>, Option<Item>) {
    let active = state.active_id();
    let rows = items
        .iter()
        .map(|item| Row {
            is_dragging: Some(item.id) == active,
            item: item.clone(),
        })
        .collect();
    let overlay = active.and_then(|id| items.iter().find(|item| item.id == id).cloned());
    (rows, overlay)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Vec<Item> {
        (1..=5)
            .map(|i| Item::new(i, format!("Item {}", i)))
            .collect()
    }

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn array_move_identity() {
        let items = seed();
        for i in 0..items.len() {
            assert_eq!(array_move(&items, i, i), items);
        }
    }

    #[test]
    fn array_move_forward() {
        // [A,B,C,D,E] moving index 0 to 2 -> [B,C,A,D,E]
        let moved = array_move(&seed(), 0, 2);
        assert_eq!(ids(&moved), vec![2, 3, 1, 4, 5]);
    }

    #[test]
    fn array_move_backward() {
        // [A,B,C,D,E] moving index 4 to 1 -> [A,E,B,C,D]
        let moved = array_move(&seed(), 4, 1);
        assert_eq!(ids(&moved), vec![1, 5, 2, 3, 4]);
    }

    #[test]
    fn array_move_does_not_mutate_input() {
        let items = seed();
        let _ = array_move(&items, 0, 4);
        assert_eq!(ids(&items), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn start_enters_dragging() {
        let out = transition(&DragState::Idle, &seed(), &DragEvt::Start { id: 2 });
        assert_eq!(out.next, DragState::Dragging { id: 2 });
        assert_eq!(out.items, None);
    }

    #[test]
    fn end_with_target_reorders_and_goes_idle() {
        let items = seed();
        let state = DragState::Dragging { id: 1 };
        let out = transition(&state, &items, &DragEvt::End { id: 1, target: Some(3) });
        assert_eq!(out.next, DragState::Idle);
        assert_eq!(ids(&out.items.unwrap()), vec![2, 3, 1, 4, 5]);
    }

    #[test]
    fn end_without_target_is_noop() {
        let state = DragState::Dragging { id: 2 };
        let out = transition(&state, &seed(), &DragEvt::End { id: 2, target: None });
        assert_eq!(out.next, DragState::Idle);
        assert_eq!(out.items, None);
    }

    #[test]
    fn end_on_same_id_is_noop() {
        let state = DragState::Dragging { id: 4 };
        let out = transition(&state, &seed(), &DragEvt::End { id: 4, target: Some(4) });
        assert_eq!(out.next, DragState::Idle);
        assert_eq!(out.items, None);
    }

    #[test]
    fn end_with_stale_target_degrades_to_noop() {
        let state = DragState::Dragging { id: 2 };
        let out = transition(&state, &seed(), &DragEvt::End { id: 2, target: Some(99) });
        assert_eq!(out.next, DragState::Idle);
        assert_eq!(out.items, None);
    }

    #[test]
    fn end_with_mismatched_active_id_degrades_to_noop() {
        let state = DragState::Dragging { id: 2 };
        let out = transition(&state, &seed(), &DragEvt::End { id: 3, target: Some(5) });
        assert_eq!(out.next, DragState::Idle);
        assert_eq!(out.items, None);
    }

    #[test]
    fn cancel_clears_active_and_keeps_list() {
        let state = DragState::Dragging { id: 3 };
        let out = transition(&state, &seed(), &DragEvt::Cancel);
        assert_eq!(out.next, DragState::Idle);
        assert_eq!(out.items, None);
    }

    #[test]
    fn end_and_cancel_while_idle_are_idempotent() {
        let items = seed();
        let out = transition(&DragState::Idle, &items, &DragEvt::End { id: 1, target: Some(2) });
        assert_eq!(out.next, DragState::Idle);
        assert_eq!(out.items, None);
        let out = transition(&DragState::Idle, &items, &DragEvt::Cancel);
        assert_eq!(out.next, DragState::Idle);
        assert_eq!(out.items, None);
    }

    #[test]
    fn reorder_preserves_id_set_over_event_sequences() {
        let mut items = seed();
        let mut state = DragState::Idle;
        let events = [
            DragEvt::Start { id: 2 },
            DragEvt::End { id: 2, target: Some(5) },
            DragEvt::Start { id: 4 },
            DragEvt::Cancel,
            DragEvt::Start { id: 1 },
            DragEvt::End { id: 1, target: None },
            DragEvt::Start { id: 5 },
            DragEvt::End { id: 5, target: Some(1) },
        ];
        for evt in &events {
            let out = transition(&state, &items, evt);
            if let Some(new_items) = out.items {
                items = new_items;
            }
            state = out.next;
            let mut sorted = ids(&items);
            sorted.sort_unstable();
            assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
        }
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn projection_marks_dragging_row_and_overlay() {
        let items = seed();
        let (rows, overlay) = project(&items, &DragState::Dragging { id: 3 });
        assert_eq!(rows.len(), 5);
        for row in &rows {
            assert_eq!(row.is_dragging, row.item.id == 3);
        }
        assert_eq!(overlay.unwrap().content, "Item 3");
    }

    #[test]
    fn projection_has_no_overlay_when_idle() {
        let (rows, overlay) = project(&seed(), &DragState::Idle);
        assert!(rows.iter().all(|row| !row.is_dragging));
        assert_eq!(overlay, None);
    }

    #[test]
    fn projection_with_stale_active_id_has_no_overlay() {
        let (_, overlay) = project(&seed(), &DragState::Dragging { id: 42 });
        assert_eq!(overlay, None);
    }
}
