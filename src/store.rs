//! Sortable List State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity: the row `<For>`
//! tracks `items` while per-row drag classes track only `active_id`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Item;

/// State of one sortable list
#[derive(Clone, Debug, Default, Store)]
pub struct SortableState {
    /// Ordered items; order defines display and logical position
    pub items: Vec<Item>,
    /// Id of the item currently being dragged, if any
    pub active_id: Option<u32>,
}

impl SortableState {
    /// The template's fixed seed list
    pub fn seeded() -> Self {
        Self {
            items: (1..=5)
                .map(|i| Item::new(i, format!("Item {}", i)))
                .collect(),
            active_id: None,
        }
    }
}

/// Type alias for the store
pub type SortableStore = Store<SortableState>;

/// `active_id` survives a list replacement only if the new list still
/// contains it; anything else would leave a dangling reference.
pub fn retain_active(active_id: Option<u32>, items: &[Item]) -> Option<u32> {
    active_id.filter(|id| items.iter().any(|item| item.id == *id))
}

/// Replace the whole list from outside the drag flow, clearing a stale
/// `active_id` so it never references a vanished item.
pub fn store_replace_items(store: &SortableStore, new_items: Vec<Item>) {
    let active = retain_active(store.active_id().get_untracked(), &new_items);
    store.items().set(new_items);
    store.active_id().set(active);
}
