pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Viewport metrics at one instant of the host scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Visible height in CSS pixels.
    pub height: f64,
    /// Document scroll offset (distance scrolled from the top).
    pub scroll_y: f64,
}

impl Viewport {
    pub fn new(height: f64, scroll_y: f64) -> Self {
        Self { height, scroll_y }
    }

    /// Translate a viewport-relative vertical coordinate into document space.
    pub fn to_document_y(self, viewport_y: f64) -> f64 {
        self.scroll_y + viewport_y
    }
}

/// Center of `rect` expressed relative to `origin` (usually the container's
/// top-left corner), so both were measured in the same coordinate space.
pub fn relative_center(rect: Rect, origin: Point) -> Point {
    let c = rect.center();
    Point::new(c.x - origin.x, c.y - origin.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_center_subtracts_origin() {
        let rect = Rect::new(10.0, 20.0, 30.0, 60.0);
        let origin = Point::new(5.0, 5.0);
        assert_eq!(relative_center(rect, origin), Point::new(15.0, 35.0));
    }

    #[test]
    fn viewport_document_translation() {
        let vp = Viewport::new(900.0, 250.0);
        assert_eq!(vp.to_document_y(100.0), 350.0);
    }
}
