//! Frontend Models

/// A sortable list entry. `id` is unique within its list and stable for the
/// item's lifetime; `content` is the display payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: u32,
    pub content: String,
}

impl Item {
    pub fn new(id: u32, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }
}
