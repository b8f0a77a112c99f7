//! Collision detection over droppable rects.
//!
//! Pure geometry; rect measurement stays in the engine so these functions
//! can be tested without a DOM.

/// Collision strategy for resolving the droppable under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionMode {
    /// Droppable whose center is nearest the pointer. Suits sortable lists,
    /// where the pointer often sits between rows.
    ClosestCenter,
    /// Droppable whose box contains the pointer, if any. Suits discrete
    /// drop targets.
    PointerWithin,
}

/// Viewport-space bounding box of a droppable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Resolve the droppable under `(x, y)` with the given strategy.
pub fn detect(mode: CollisionMode, x: f64, y: f64, rects: &[(u32, Rect)]) -> Option<u32> {
    match mode {
        CollisionMode::ClosestCenter => closest_center(x, y, rects),
        CollisionMode::PointerWithin => pointer_within(x, y, rects),
    }
}

/// Id of the rect whose center is nearest `(x, y)`. Ties keep the earlier
/// rect in document order.
pub fn closest_center(x: f64, y: f64, rects: &[(u32, Rect)]) -> Option<u32> {
    let mut best: Option<(u32, f64)> = None;
    for (id, rect) in rects {
        let (cx, cy) = rect.center();
        let d2 = (cx - x) * (cx - x) + (cy - y) * (cy - y);
        if best.map(|(_, bd)| d2 < bd).unwrap_or(true) {
            best = Some((*id, d2));
        }
    }
    best.map(|(id, _)| id)
}

/// Id of the first rect (document order) containing `(x, y)`.
pub fn pointer_within(x: f64, y: f64, rects: &[(u32, Rect)]) -> Option<u32> {
    rects
        .iter()
        .find(|(_, rect)| rect.contains(x, y))
        .map(|(id, _)| *id)
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
    fn closest_center_picks_nearest_row() {
        let rects = vec![row(1, 0.0), row(2, 40.0), row(3, 80.0)];
        // Pointer just below the first row's center lands on row 1
        assert_eq!(closest_center(50.0, 25.0, &rects), Some(1));
        // Between rows 2 and 3, nearer to 3's center
        assert_eq!(closest_center(50.0, 90.0, &rects), Some(3));
        assert_eq!(closest_center(50.0, 25.0, &[]), None);
    }

    #[test]
    fn closest_center_works_outside_all_rects() {
        let rects = vec![row(1, 0.0), row(2, 40.0)];
        assert_eq!(closest_center(500.0, 1000.0, &rects), Some(2));
    }

    #[test]
    fn pointer_within_requires_containment() {
        let rects = vec![row(1, 0.0), row(2, 40.0)];
        assert_eq!(pointer_within(50.0, 10.0, &rects), Some(1));
        assert_eq!(pointer_within(50.0, 60.0, &rects), Some(2));
        assert_eq!(pointer_within(150.0, 10.0, &rects), None);
        assert_eq!(pointer_within(50.0, 200.0, &rects), None);
    }

    #[test]
    fn rect_center_and_contains() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 30.0,
            height: 40.0,
        };
        assert_eq!(r.center(), (25.0, 40.0));
        assert!(r.contains(10.0, 20.0));
        assert!(r.contains(40.0, 60.0));
        assert!(!r.contains(41.0, 30.0));
    }
}
