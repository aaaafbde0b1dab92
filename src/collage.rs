use crate::core::{Point, Rect};
use crate::timeline::{AnchorProbe, AnchorRef};

/// The scrapbook always shows exactly eight cards; shorter memory lists wrap.
pub const SLOT_COUNT: usize = 8;

/// Anchor centers as fractions of the container box, tracing the desktop
/// zig-zag: hero left, top right, mid left, mid right, center, bottom left,
/// bottom center, bottom right.
const SLOT_CENTERS: [(f64, f64); SLOT_COUNT] = [
    (0.23, 0.10),
    (0.85, 0.14),
    (0.19, 0.35),
    (0.84, 0.38),
    (0.55, 0.48),
    (0.20, 0.70),
    (0.49, 0.78),
    (0.83, 0.88),
];

/// Where the header dot (the curve's start anchor) sits in the container.
const HEADER_CENTER: (f64, f64) = (0.5, 0.055);

/// Memory shown in a given slot: the list repeats until all slots are full.
pub fn memory_for_slot(slot: usize, memory_count: usize) -> Option<usize> {
    if memory_count == 0 {
        return None;
    }
    Some(slot % memory_count)
}

fn at_fraction(container: Rect, frac: (f64, f64)) -> Point {
    Point::new(
        container.x0 + container.width() * frac.0,
        container.y0 + container.height() * frac.1,
    )
}

/// A fully synthetic collage layout over a fixed container rect.
///
/// Hosts with a real DOM measure anchors themselves; headless hosts (the CLI
/// sweep, tests) use this plan as the measurement table.
#[derive(Clone, Copy, Debug)]
pub struct CollagePlan {
    pub container: Rect,
}

impl CollagePlan {
    pub fn new(container: Rect) -> Self {
        Self { container }
    }

    pub fn header_center(&self) -> Point {
        at_fraction(self.container, HEADER_CENTER)
    }

    pub fn slot_center(&self, slot: usize) -> Option<Point> {
        SLOT_CENTERS
            .get(slot)
            .map(|&frac| at_fraction(self.container, frac))
    }

    fn rect_around(center: Point) -> Rect {
        Rect::new(center.x - 6.0, center.y - 6.0, center.x + 6.0, center.y + 6.0)
    }
}

impl AnchorProbe for CollagePlan {
    fn container(&self) -> Option<Rect> {
        Some(self.container)
    }

    fn anchor(&self, anchor: AnchorRef) -> Option<Rect> {
        match anchor {
            AnchorRef::Start => Some(Self::rect_around(self.header_center())),
            AnchorRef::Item(i) => self.slot_center(i).map(Self::rect_around),
        }
    }
}
