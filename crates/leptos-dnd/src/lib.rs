//! Leptos DnD Engine
//!
//! Drag-and-drop sensing for Leptos: pointer capture with configurable
//! activation constraints, keyboard dragging, and collision detection over
//! droppable rects. Emits start/drop/cancel signals. Deciding what a drop
//! means is left to the consuming component.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub mod collision;
pub mod keyboard;

pub use collision::{CollisionMode, Rect};
pub use keyboard::make_on_keydown;

/// When a pressed item becomes an actual drag.
///
/// A press activates once the pointer has moved at least `distance_px`, or
/// once `delay_ms` elapses with all movement inside `tolerance_px`. Moving
/// past the tolerance before the delay fires aborts the press (it was a
/// click or a text selection, not a drag).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivationConstraint {
    pub delay_ms: u32,
    pub tolerance_px: i32,
    pub distance_px: i32,
}

impl Default for ActivationConstraint {
    fn default() -> Self {
        Self {
            delay_ms: 100,
            tolerance_px: 5,
            distance_px: 8,
        }
    }
}

/// Engine configuration, shared by all handlers of one drag context.
#[derive(Clone, Copy, Debug)]
pub struct DndConfig {
    /// Value of the `data-dnd-scope` attribute marking this context's
    /// droppable elements. Keeps multiple contexts on one page apart.
    pub scope: &'static str,
    pub activation: ActivationConstraint,
    pub collision: CollisionMode,
}

/// Lifecycle callbacks into the consuming component.
#[derive(Clone, Copy)]
pub struct DndCallbacks {
    pub on_start: Callback<u32>,
    /// `(dragged id, target id under the pointer/focus at release, if any)`
    pub on_drop: Callback<(u32, Option<u32>)>,
    pub on_cancel: Callback<()>,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Droppable currently under the pointer (or keyboard focus)
    pub over_id_read: ReadSignal<Option<u32>>,
    pub over_id_write: WriteSignal<Option<u32>>,
    /// Pressed item id (mousedown but not yet activated)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Press position for activation measurement
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Current pointer (or focus-rect) position, drives the overlay
    pub pointer_x_read: ReadSignal<i32>,
    pub pointer_x_write: WriteSignal<i32>,
    pub pointer_y_read: ReadSignal<i32>,
    pub pointer_y_write: WriteSignal<i32>,
    /// True while the active drag is keyboard-driven
    pub keyboard_read: ReadSignal<bool>,
    pub keyboard_write: WriteSignal<bool>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (over_id_read, over_id_write) = signal(None::<u32>);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (pointer_x_read, pointer_x_write) = signal(0i32);
    let (pointer_y_read, pointer_y_write) = signal(0i32);
    let (keyboard_read, keyboard_write) = signal(false);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        over_id_read,
        over_id_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        pointer_x_read,
        pointer_x_write,
        pointer_y_read,
        pointer_y_write,
        keyboard_read,
        keyboard_write,
    }
}

/// Outcome of re-evaluating a pending press after movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// Keep waiting
    Pending,
    /// Movement reached the drag distance
    Activate,
    /// Tolerance exceeded before the delay fired
    Abort,
}

/// Decide what a pending press becomes after moving `(dx, dy)` from the
/// press point. Distance wins over the tolerance abort when both are crossed
/// in one event.
pub fn evaluate_press(constraint: &ActivationConstraint, dx: i32, dy: i32) -> PressOutcome {
    let moved = dx.abs().max(dy.abs());
    if moved >= constraint.distance_px {
        PressOutcome::Activate
    } else if moved > constraint.tolerance_px {
        PressOutcome::Abort
    } else {
        PressOutcome::Pending
    }
}

/// What a mousemove means for the engine right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovePhase {
    /// No press, no drag: nothing to track
    Idle,
    /// Pressed item waiting on its activation constraint
    Press(u32),
    /// Active pointer drag: track the overlay and re-run collision
    PointerDrag,
    /// Active keyboard drag: mouse movement is ignored until it ends
    KeyboardDrag,
}

pub fn move_phase(pending: Option<u32>, dragging: Option<u32>, keyboard: bool) -> MovePhase {
    match (pending, dragging) {
        (_, Some(_)) if keyboard => MovePhase::KeyboardDrag,
        (_, Some(_)) => MovePhase::PointerDrag,
        (Some(id), None) => MovePhase::Press(id),
        (None, None) => MovePhase::Idle,
    }
}

/// Clear all drag state
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.over_id_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.keyboard_write.set(false);
}

/// Promote a press (or keyboard pickup) into an active drag
pub(crate) fn start_drag(dnd: &DndSignals, cfg: &DndConfig, cbs: &DndCallbacks, item_id: u32) {
    dnd.pending_id_write.set(None);
    dnd.dragging_id_write.set(Some(item_id));
    let rects = measure_rects(cfg.scope);
    let x = dnd.pointer_x_read.get_untracked() as f64;
    let y = dnd.pointer_y_read.get_untracked() as f64;
    dnd.over_id_write.set(collision::detect(cfg.collision, x, y, &rects));
    cbs.on_start.run(item_id);
}

/// Measure every droppable registered under `scope`, in document order.
/// Rects are re-read from layout on each call; nothing retains DOM nodes.
pub(crate) fn measure_rects(scope: &str) -> Vec<(u32, Rect)> {
    let mut rects = Vec::new();
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return rects;
    };
    let selector = format!("[data-dnd-scope='{}'][data-dnd-id]", scope);
    let Ok(nodes) = doc.query_selector_all(&selector) else {
        return rects;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Some(el) = node.dyn_ref::<web_sys::Element>() else {
            continue;
        };
        let Some(id) = el
            .get_attribute("data-dnd-id")
            .and_then(|v| v.parse::<u32>().ok())
        else {
            continue;
        };
        let r = el.get_bounding_client_rect();
        rects.push((
            id,
            Rect {
                x: r.left(),
                y: r.top(),
                width: r.width(),
                height: r.height(),
            },
        ));
    }
    rects
}

/// Create mousedown handler for draggable items.
/// Records the press and arms the activation delay.
pub fn make_on_mousedown(
    dnd: DndSignals,
    cfg: DndConfig,
    cbs: DndCallbacks,
    item_id: u32,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore presses on form controls inside the item
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                return;
            }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                return;
            }
        }
        dnd.pending_id_write.set(Some(item_id));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
        dnd.pointer_x_write.set(ev.client_x());
        dnd.pointer_y_write.set(ev.client_y());

        // Delay activation: fires unless the press was released or aborted
        gloo_timers::callback::Timeout::new(cfg.activation.delay_ms, move || {
            if dnd.pending_id_read.get_untracked() == Some(item_id)
                && dnd.dragging_id_read.get_untracked().is_none()
            {
                start_drag(&dnd, &cfg, &cbs, item_id);
            }
        })
        .forget();
    }
}

/// Bind the document-level listeners for one drag context: mousemove for
/// activation, overlay tracking and collision; mouseup for the drop; Escape
/// for cancellation. Call once per context during component setup.
pub fn bind_global_dnd(dnd: DndSignals, cfg: DndConfig, cbs: DndCallbacks) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let phase = move_phase(
            dnd.pending_id_read.get_untracked(),
            dnd.dragging_id_read.get_untracked(),
            dnd.keyboard_read.get_untracked(),
        );
        match phase {
            // During a keyboard drag the overlay stays on the focused row
            MovePhase::Idle | MovePhase::KeyboardDrag => return,
            MovePhase::Press(id) => {
                dnd.pointer_x_write.set(ev.client_x());
                dnd.pointer_y_write.set(ev.client_y());
                let dx = ev.client_x() - dnd.start_x_read.get_untracked();
                let dy = ev.client_y() - dnd.start_y_read.get_untracked();
                match evaluate_press(&cfg.activation, dx, dy) {
                    PressOutcome::Activate => start_drag(&dnd, &cfg, &cbs, id),
                    PressOutcome::Abort => dnd.pending_id_write.set(None),
                    PressOutcome::Pending => {}
                }
            }
            MovePhase::PointerDrag => {
                dnd.pointer_x_write.set(ev.client_x());
                dnd.pointer_y_write.set(ev.client_y());
                let rects = measure_rects(cfg.scope);
                let over = collision::detect(
                    cfg.collision,
                    ev.client_x() as f64,
                    ev.client_y() as f64,
                    &rects,
                );
                dnd.over_id_write.set(over);
            }
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_id_read.get_untracked();
        if dnd.keyboard_read.get_untracked() {
            // Keyboard drags end on keys, not on stray mouse releases
            return;
        }
        if let Some(id) = dragging {
            let target = dnd.over_id_read.get_untracked();
            end_drag(&dnd);
            cbs.on_drop.run((id, target));
        } else {
            // Plain click: release the press so it never activates late
            dnd.pending_id_write.set(None);
        }
    });

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && dnd.dragging_id_read.get_untracked().is_some() {
            end_drag(&dnd);
            cbs.on_cancel.run(());
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback(
            "mousemove",
            on_mousemove.as_ref().unchecked_ref(),
        );
        let _ =
            doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        let _ =
            doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
    on_mouseup.forget();
    on_keydown.forget();
}
