//! Sortable List Example
//!
//! The reorderable list demo: pointer and keyboard dragging with a floating
//! overlay. The engine senses input and resolves drop targets; every logical
//! decision goes through `sortable::transition` so the component itself
//! holds no lifecycle rules.

use leptos::prelude::*;
use reactive_stores::Store;

use leptos_dnd::{
    bind_global_dnd, create_dnd_signals, make_on_keydown, make_on_mousedown,
    ActivationConstraint, CollisionMode, DndCallbacks, DndConfig,
};

use crate::sortable::{project, transition, DragEvt, DragState};
use crate::store::{store_replace_items, SortableState, SortableStateStoreFields};

const SCOPE: &str = "sortable";

/// Cosmetic only: how long the list keeps its settle class after a drop
const DROP_SETTLE_MS: u32 = 150;

#[component]
pub fn SortableList() -> impl IntoView {
    let store = Store::new(SortableState::seeded());
    let dnd = create_dnd_signals();
    let cfg = DndConfig {
        scope: SCOPE,
        activation: ActivationConstraint::default(),
        collision: CollisionMode::ClosestCenter,
    };
    let (settling, set_settling) = signal(false);

    // Single funnel for every lifecycle event
    let apply = move |evt: DragEvt| {
        let state = DragState::from_active(store.active_id().get_untracked());
        let items = store.items().get_untracked();
        let out = transition(&state, &items, &evt);
        if let Some(new_items) = out.items {
            let order: Vec<u32> = new_items.iter().map(|item| item.id).collect();
            web_sys::console::log_1(&format!("[SortableList] reordered: {:?}", order).into());
            store.items().set(new_items);
        }
        store.active_id().set(out.next.active_id());
    };

    let cbs = DndCallbacks {
        on_start: Callback::new(move |id: u32| apply(DragEvt::Start { id })),
        on_drop: Callback::new(move |(id, target): (u32, Option<u32>)| {
            apply(DragEvt::End { id, target });
            set_settling.set(true);
            gloo_timers::callback::Timeout::new(DROP_SETTLE_MS, move || {
                set_settling.set(false);
            })
            .forget();
        }),
        on_cancel: Callback::new(move |_| apply(DragEvt::Cancel)),
    };
    bind_global_dnd(dnd, cfg, cbs);

    let rows = move || {
        let state = DragState::from_active(store.active_id().get());
        project(&store.items().get(), &state).0
    };
    let overlay = move || {
        let state = DragState::from_active(store.active_id().get());
        project(&store.items().get(), &state).1
    };

    view! {
        <div class="demo-card" class:settling=settling>
            <div class="demo-card-header">
                <h3>"Sortable List"</h3>
                // External list replacement; a drag in flight on a vanished
                // id is dropped by the store, not left dangling
                <button
                    class="text-btn"
                    on:click=move |_| store_replace_items(&store, SortableState::seeded().items)
                >
                    "Reset"
                </button>
            </div>
            <p class="demo-hint">
                "Drag rows with the mouse, or focus a row and use Space/Enter "
                "and the arrow keys. Escape cancels."
            </p>
            <ul class="sortable-list">
                <For
                    each=rows
                    key=|row| row.item.id
                    children=move |row| {
                        let id = row.item.id;
                        let on_mousedown = make_on_mousedown(dnd, cfg, cbs, id);
                        let on_keydown = make_on_keydown(dnd, cfg, cbs, id);
                        let is_dragging = move || store.active_id().get() == Some(id);
                        let is_over = move || {
                            dnd.over_id_read.get() == Some(id)
                                && store.active_id().get().is_some()
                                && !is_dragging()
                        };
                        view! {
                            <li
                                class="sortable-item"
                                class:dragging=is_dragging
                                class:drop-hint=is_over
                                data-dnd-scope=SCOPE
                                data-dnd-id=id.to_string()
                                tabindex="0"
                                on:mousedown=on_mousedown
                                on:keydown=on_keydown
                            >
                                <span class="drag-handle">"⋮⋮"</span>
                                <span class="item-content">{row.item.content.clone()}</span>
                            </li>
                        }
                    }
                />
            </ul>

            // Floating copy of the dragged item, following pointer or focus
            {move || overlay().map(|item| {
                let left = move || format!("{}px", dnd.pointer_x_read.get() + 12);
                let top = move || format!("{}px", dnd.pointer_y_read.get() + 12);
                view! {
                    <div class="drag-overlay" style:left=left style:top=top>
                        <span class="drag-handle">"⋮⋮"</span>
                        <span class="item-content">{item.content}</span>
                    </div>
                }
            })}
        </div>
    }
}
