use std::time::Duration;

/// The moment strip is rendered three times over so the middle copy can be
/// scrolled endlessly in either direction.
pub const COPIES: usize = 3;

/// Drag-to-scroll multiplier for a natural hand feel.
pub const DRAG_SPEED: f64 = 1.5;

/// Host hint: measure one set width and align this long after mount.
pub const INITIAL_ALIGN_DELAY: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug)]
struct Drag {
    grab_x: f64,
    grab_scroll: f64,
}

/// Infinite looping carousel over a fixed item list.
///
/// The host renders `slot_count()` cards, measures the width of one full set
/// (distance between the first cards of copy 1 and copy 2), and reports
/// pointer events; the carousel keeps the scroll offset inside the middle
/// copy's window so the loop never runs out.
#[derive(Clone, Debug)]
pub struct LoopingCarousel {
    item_count: usize,
    set_width: Option<f64>,
    scroll_left: f64,
    drag: Option<Drag>,
}

impl LoopingCarousel {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            set_width: None,
            scroll_left: 0.0,
            drag: None,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.item_count * COPIES
    }

    /// Item displayed in a rendered slot; slots cycle through the set.
    pub fn item_for_slot(&self, slot: usize) -> Option<usize> {
        if self.item_count == 0 || slot >= self.slot_count() {
            return None;
        }
        Some(slot % self.item_count)
    }

    /// Report the measured width of one set. The first valid measurement
    /// aligns the strip to the start of the middle copy; until then every
    /// scroll mutation is a no-op.
    pub fn measure(&mut self, set_width: f64) {
        if !(set_width > 0.0) {
            return;
        }
        let first = self.set_width.is_none();
        self.set_width = Some(set_width);
        if first {
            self.scroll_left = set_width;
        } else {
            self.normalize();
        }
    }

    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn begin_drag(&mut self, pointer_x: f64) {
        if self.set_width.is_none() {
            return;
        }
        self.drag = Some(Drag {
            grab_x: pointer_x,
            grab_scroll: self.scroll_left,
        });
    }

    pub fn drag_to(&mut self, pointer_x: f64) {
        let Some(drag) = self.drag else {
            return;
        };
        let walk = (pointer_x - drag.grab_x) * DRAG_SPEED;
        self.scroll_left = drag.grab_scroll - walk;
        self.normalize();
    }

    /// Pointer released or left the strip.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Wheel / momentum scrolling.
    pub fn scroll_by(&mut self, dx: f64) {
        if self.set_width.is_none() {
            return;
        }
        self.scroll_left += dx;
        self.normalize();
    }

    /// Keep the offset inside the middle copy's window [0.5w, 1.5w]; a jump
    /// moves the drag baseline with it so an in-flight drag stays coherent.
    fn normalize(&mut self) {
        let Some(w) = self.set_width else {
            return;
        };
        let mut delta = 0.0;
        while self.scroll_left + delta < 0.5 * w {
            delta += w;
        }
        while self.scroll_left + delta > 1.5 * w {
            delta -= w;
        }
        if delta != 0.0 {
            self.scroll_left += delta;
            if let Some(drag) = self.drag.as_mut() {
                drag.grab_scroll += delta;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn slots_cycle_through_items() {
        let carousel = LoopingCarousel::new(5);
        assert_eq!(carousel.slot_count(), 15);
        assert_eq!(carousel.item_for_slot(0), Some(0));
        assert_eq!(carousel.item_for_slot(5), Some(0));
        assert_eq!(carousel.item_for_slot(12), Some(2));
        assert_eq!(carousel.item_for_slot(15), None);
    }

    #[test]
    fn first_measure_aligns_to_middle_copy() {
        let mut carousel = LoopingCarousel::new(5);
        carousel.scroll_by(100.0); // unmeasured: no-op
        assert_eq!(carousel.scroll_left(), 0.0);

        carousel.measure(2000.0);
        assert_eq!(carousel.scroll_left(), 2000.0);
    }

    #[test]
    fn wraps_forward_and_backward() {
        let mut carousel = LoopingCarousel::new(5);
        carousel.measure(2000.0);

        carousel.scroll_by(-1100.0); // 900 < 1000 => jump forward
        assert_eq!(carousel.scroll_left(), 2900.0);

        carousel.scroll_by(200.0); // 3100 > 3000 => jump backward
        assert_eq!(carousel.scroll_left(), 1100.0);
    }

    #[test]
    fn drag_applies_walk_multiplier() {
        let mut carousel = LoopingCarousel::new(5);
        carousel.measure(2000.0);

        carousel.begin_drag(500.0);
        carousel.drag_to(400.0); // walk = -150 => scroll 2150
        assert_eq!(carousel.scroll_left(), 2150.0);
        carousel.end_drag();
        assert!(!carousel.is_dragging());
    }

    #[test]
    fn drag_survives_a_wrap() {
        let mut carousel = LoopingCarousel::new(5);
        carousel.measure(2000.0);

        carousel.begin_drag(0.0);
        carousel.drag_to(800.0); // walk 1200 => 800 < 1000, wraps to 2800
        assert_eq!(carousel.scroll_left(), 2800.0);
        // Continuing the same drag stays continuous from the wrapped offset.
        carousel.drag_to(900.0);
        assert_eq!(carousel.scroll_left(), 2650.0);
    }

    proptest! {
        #[test]
        fn offset_stays_in_middle_window(
            width in 100.0f64..5000.0,
            deltas in proptest::collection::vec(-4000.0f64..4000.0, 0..40),
        ) {
            let mut carousel = LoopingCarousel::new(5);
            carousel.measure(width);
            for dx in deltas {
                carousel.scroll_by(dx);
                let s = carousel.scroll_left();
                prop_assert!(s >= 0.5 * width - 1e-9 && s <= 1.5 * width + 1e-9);
            }
        }
    }
}
