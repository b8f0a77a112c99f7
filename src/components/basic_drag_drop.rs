//! Basic Drag & Drop Example
//!
//! One draggable square and one droppable outline. The only state is a
//! boolean drop flag; the square renders inside the droppable once dropped.

use leptos::prelude::*;

use leptos_dnd::{
    bind_global_dnd, create_dnd_signals, make_on_mousedown, ActivationConstraint,
    CollisionMode, DndCallbacks, DndConfig, DndSignals,
};

const SCOPE: &str = "basic";
const DRAGGABLE_ID: u32 = 0;
const DROPPABLE_ID: u32 = 1;

#[component]
fn Draggable(dnd: DndSignals, cfg: DndConfig, cbs: DndCallbacks) -> impl IntoView {
    let on_mousedown = make_on_mousedown(dnd, cfg, cbs, DRAGGABLE_ID);
    let is_dragging = move || dnd.dragging_id_read.get() == Some(DRAGGABLE_ID);
    // Follow the pointer while dragging; snap back (or into the droppable)
    // on release via the normal re-render
    let transform = move || {
        if is_dragging() {
            let dx = dnd.pointer_x_read.get() - dnd.start_x_read.get();
            let dy = dnd.pointer_y_read.get() - dnd.start_y_read.get();
            format!("translate({}px, {}px)", dx, dy)
        } else {
            String::new()
        }
    };

    view! {
        <div
            class="draggable"
            class:lifted=is_dragging
            style:transform=transform
            on:mousedown=on_mousedown
        >
            "Drag me"
        </div>
    }
}

#[component]
pub fn BasicDragDrop() -> impl IntoView {
    let (is_dropped, set_is_dropped) = signal(false);
    let dnd = create_dnd_signals();
    let cfg = DndConfig {
        scope: SCOPE,
        // No press-and-hold here: the square drags as soon as it moves
        activation: ActivationConstraint {
            delay_ms: 0,
            tolerance_px: 0,
            distance_px: 1,
        },
        collision: CollisionMode::PointerWithin,
    };

    let cbs = DndCallbacks {
        on_start: Callback::new(move |_id: u32| {}),
        on_drop: Callback::new(move |(_id, target): (u32, Option<u32>)| {
            set_is_dropped.set(target == Some(DROPPABLE_ID));
        }),
        on_cancel: Callback::new(move |_| {}),
    };
    bind_global_dnd(dnd, cfg, cbs);

    let is_over = move || {
        dnd.over_id_read.get() == Some(DROPPABLE_ID)
            && dnd.dragging_id_read.get() == Some(DRAGGABLE_ID)
    };

    view! {
        <div class="demo-card">
            <h3>"Basic Drag & Drop"</h3>
            <div class="basic-dnd">
                <Show when=move || !is_dropped.get()>
                    <Draggable dnd=dnd cfg=cfg cbs=cbs />
                </Show>
                <div
                    class="droppable"
                    class:over=is_over
                    data-dnd-scope=SCOPE
                    data-dnd-id=DROPPABLE_ID.to_string()
                >
                    <Show
                        when=move || is_dropped.get()
                        fallback=|| view! { <span class="droppable-hint">"Drop here"</span> }
                    >
                        <Draggable dnd=dnd cfg=cfg cbs=cbs />
                    </Show>
                </div>
            </div>
        </div>
    }
}
