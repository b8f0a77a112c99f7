//! UI Components
//!
//! Reusable Leptos components.

mod basic_drag_drop;
mod feature_card;
mod sortable_list;
mod title_bar;

pub use basic_drag_drop::BasicDragDrop;
pub use feature_card::FeatureCard;
pub use sortable_list::SortableList;
pub use title_bar::TitleBar;
