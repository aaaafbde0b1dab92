use std::time::Duration;

use kurbo::{ParamCurveArclen, PathEl};
use smallvec::SmallVec;

use crate::core::{BezPath, Point, Rect, relative_center};

/// Opaque reference into the render layer's measurement table.
///
/// The path builder never owns visual elements; it only names them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnchorRef {
    /// The header dot the curve departs from.
    Start,
    /// The n-th collage card, in traversal order.
    Item(usize),
}

/// Measurement table provided by the render layer.
///
/// All rects are read in one shared coordinate space (viewport or document,
/// as long as container and anchors agree). `None` means the element is not
/// mounted or not yet measurable, never an error.
pub trait AnchorProbe {
    fn container(&self) -> Option<Rect>;
    fn anchor(&self, anchor: AnchorRef) -> Option<Rect>;
}

/// Layout-settle heuristic: one pass at mount, one after images/fonts have
/// usually landed, one late safety pass.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);
pub const SAFETY_DELAY: Duration = Duration::from_millis(1500);

/// Pending recomputation passes, as data drained by host ticks rather than
/// OS timers, so teardown is a plain clear.
#[derive(Clone, Debug)]
pub struct SettleSchedule {
    pending: SmallVec<[Duration; 3]>,
}

impl SettleSchedule {
    fn full() -> Self {
        Self {
            pending: SmallVec::from_slice(&[Duration::ZERO, SETTLE_DELAY, SAFETY_DELAY]),
        }
    }

    /// Remove and count every pass due at `since_mount`.
    fn take_due(&mut self, since_mount: Duration) -> usize {
        let before = self.pending.len();
        self.pending.retain(|delay| *delay > since_mount);
        before - self.pending.len()
    }

    fn drain_all(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

/// Monotonic maximum of the observed domain progress.
///
/// Once the line has grown it never retracts on scroll-up; only a remount
/// resets it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RevealProgress {
    value: f64,
}

impl RevealProgress {
    /// Fold in one scroll sample and return the stored maximum.
    ///
    /// Samples are clamped to [0, 1]; non-finite samples are ignored.
    pub fn observe(&mut self, sample: f64) -> f64 {
        if sample.is_finite() {
            let sample = sample.clamp(0.0, 1.0);
            if sample > self.value {
                self.value = sample;
            }
        }
        self.value
    }

    pub fn get(self) -> f64 {
        self.value
    }

    fn reset(&mut self) {
        self.value = 0.0;
    }
}

/// Result of one recomputation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecomputeOutcome {
    /// Every anchor resolved; the path was rebuilt wholesale.
    Rebuilt,
    /// Some anchor was unmeasurable; the previous path is kept as-is.
    Deferred,
}

/// Build the "draped string" curve through `start` and `items`.
///
/// Consecutive vertices are joined by a cubic whose control points hang
/// halfway down the vertical gap; control-point x stays at each endpoint's
/// own x, so the curve eases vertically but never horizontally.
pub fn draped_path(start: Point, items: &[Point]) -> BezPath {
    if items.is_empty() {
        return BezPath::new();
    }

    let mut path = BezPath::new();
    path.move_to(start);

    let mut prev = start;
    for &next in items {
        let half_drop = (next.y - prev.y) * 0.5;
        path.curve_to(
            Point::new(prev.x, prev.y + half_drop),
            Point::new(next.x, next.y - half_drop),
            next,
        );
        prev = next;
    }

    path
}

/// Scroll-synchronized timeline path: a curve through one start anchor and a
/// fixed number of item anchors, plus the monotonic reveal scalar that drives
/// how much of it is drawn.
#[derive(Clone, Debug)]
pub struct TimelinePath {
    item_count: usize,
    path: BezPath,
    reveal: RevealProgress,
    schedule: SettleSchedule,
    mounted: bool,
}

impl TimelinePath {
    /// Mount with `item_count` item anchors; the settle schedule starts now.
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            path: BezPath::new(),
            reveal: RevealProgress::default(),
            schedule: SettleSchedule::full(),
            mounted: true,
        }
    }

    /// Drain scheduled passes due at `since_mount`; runs at most one actual
    /// recomputation since coalesced passes would read identical geometry.
    pub fn tick(&mut self, since_mount: Duration, probe: &dyn AnchorProbe) -> usize {
        if !self.mounted {
            return 0;
        }
        let due = self.schedule.take_due(since_mount);
        if due > 0 {
            self.recompute(probe);
        }
        due
    }

    /// For hosts with a real layout-stability signal: drain the remaining
    /// schedule and recompute once, instead of waiting out the fixed delays.
    pub fn settle_now(&mut self, probe: &dyn AnchorProbe) -> RecomputeOutcome {
        if !self.mounted {
            return RecomputeOutcome::Deferred;
        }
        self.schedule.drain_all();
        self.recompute(probe)
    }

    /// Resize invalidates geometry, never reveal.
    pub fn on_resize(&mut self, probe: &dyn AnchorProbe) -> RecomputeOutcome {
        self.recompute(probe)
    }

    #[tracing::instrument(level = "debug", skip(self, probe))]
    pub fn recompute(&mut self, probe: &dyn AnchorProbe) -> RecomputeOutcome {
        if !self.mounted {
            return RecomputeOutcome::Deferred;
        }

        let Some(container) = probe.container() else {
            tracing::debug!("container unmeasured, keeping previous path");
            return RecomputeOutcome::Deferred;
        };
        let Some(start_rect) = probe.anchor(AnchorRef::Start) else {
            tracing::debug!("start anchor unmeasured, keeping previous path");
            return RecomputeOutcome::Deferred;
        };

        let mut items = Vec::with_capacity(self.item_count);
        for i in 0..self.item_count {
            let Some(rect) = probe.anchor(AnchorRef::Item(i)) else {
                tracing::debug!(item = i, "item anchor unmeasured, keeping previous path");
                return RecomputeOutcome::Deferred;
            };
            items.push(relative_center(rect, container.origin()));
        }

        let start = relative_center(start_rect, container.origin());
        self.path = draped_path(start, &items);
        RecomputeOutcome::Rebuilt
    }

    /// Fold one domain-progress sample into the reveal maximum.
    pub fn observe_scroll(&mut self, domain_progress: f64) -> f64 {
        if !self.mounted {
            return self.reveal.get();
        }
        self.reveal.observe(domain_progress)
    }

    pub fn reveal(&self) -> f64 {
        self.reveal.get()
    }

    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// SVG path description for the render layer; empty string when no path
    /// has been computed yet (nothing is drawn).
    pub fn path_svg(&self) -> String {
        self.path.to_svg()
    }

    /// Number of cubic segments (one per item anchor once computed).
    pub fn segment_count(&self) -> usize {
        self.path
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::CurveTo(..)))
            .count()
    }

    /// Arc length of the revealed portion, for path-length-based reveal
    /// strokes on the render side.
    pub fn drawn_length(&self, accuracy: f64) -> f64 {
        let total: f64 = self.path.segments().map(|seg| seg.arclen(accuracy)).sum();
        total * self.reveal.get()
    }

    pub fn pending_passes(&self) -> usize {
        self.schedule.pending()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Cancel pending passes and detach; no geometry is read afterwards.
    pub fn unmount(&mut self) {
        self.schedule.drain_all();
        self.mounted = false;
    }

    /// Fresh mounted lifetime: empty path, reveal back to zero, schedule
    /// restarted.
    pub fn remount(&mut self) {
        self.path = BezPath::new();
        self.reveal.reset();
        self.schedule = SettleSchedule::full();
        self.mounted = true;
    }
}
