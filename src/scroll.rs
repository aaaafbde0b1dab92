use crate::core::{Rect, Viewport};

/// Viewport-relative trigger offsets for the scroll-driven draw.
///
/// Drawing begins when the container's top edge reaches `start_frac` of the
/// viewport height down from the top, and completes when the container's
/// bottom edge reaches `end_frac` down from the top.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollTriggers {
    pub start_frac: f64,
    pub end_frac: f64,
}

impl Default for ScrollTriggers {
    fn default() -> Self {
        // Drawing starts low in the viewport, finishes past the midline.
        Self {
            start_frac: 0.8,
            end_frac: 0.5,
        }
    }
}

impl ScrollTriggers {
    /// Resolve the scroll-offset window for a container measured in document
    /// coordinates (top and bottom edges from the document top).
    pub fn span(self, container_top: f64, container_bottom: f64, viewport_height: f64) -> ProgressSpan {
        ProgressSpan {
            start: container_top - self.start_frac * viewport_height,
            end: container_bottom - self.end_frac * viewport_height,
        }
    }

    /// Convenience for hosts that measure viewport-relative rects: shifts the
    /// rect into document space using the current scroll offset first.
    pub fn span_for_rect(self, container: Rect, viewport: Viewport) -> ProgressSpan {
        self.span(
            viewport.to_document_y(container.y0),
            viewport.to_document_y(container.y1),
            viewport.height,
        )
    }
}

/// Scroll-offset window `[start, end]` mapped linearly onto [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressSpan {
    pub start: f64,
    pub end: f64,
}

impl ProgressSpan {
    /// Domain progress at `scroll_y`, clamped to [0, 1] outside the window.
    ///
    /// A degenerate window (end <= start) snaps: 0 before the start trigger,
    /// 1 from the start trigger on.
    pub fn progress_at(self, scroll_y: f64) -> f64 {
        let len = self.end - self.start;
        if len <= 0.0 {
            return if scroll_y < self.start { 0.0 } else { 1.0 };
        }
        ((scroll_y - self.start) / len).clamp(0.0, 1.0)
    }
}
