//! Small independent interaction controls: the intro gate, background music,
//! note reveals, the envelope, the heart fill, and the slide-to-complete
//! handle. Each owns only in-memory state for one mounted page.

/// Background music plays softly under the page.
pub const MUSIC_VOLUME: f64 = 0.4;

/// Outline coverage of the heart before it is completed: one side drawn up
/// and over, the other left open.
pub const INCOMPLETE_OUTLINE: f64 = 0.45;

/// Fraction of the track the handle must pass for a release to complete.
pub const SLIDE_COMPLETE_THRESHOLD: f64 = 0.85;

/// Full-screen intro that keeps the page hidden until opened. One-way.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntroGate {
    opened: bool,
}

impl IntroGate {
    /// Open the page; returns `true` only on the first call so the host can
    /// run its open effects (scroll to top, music fallback) exactly once.
    pub fn open(&mut self) -> bool {
        let first = !self.opened;
        self.opened = true;
        first
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }
}

/// What the host's audio element should do after a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MusicIntent {
    Play,
    Pause,
}

/// Autoplay-with-fallback music state.
///
/// Autoplay is attempted on mount; browsers commonly block it, in which case
/// the page stays silent until the intro gate opens or the user toggles.
/// Playback confirmations come back from the host since only it knows
/// whether the audio element actually started.
#[derive(Clone, Copy, Debug, Default)]
pub struct MusicControl {
    playing: bool,
    autoplay_blocked: bool,
}

impl MusicControl {
    pub fn autoplay_started(&mut self) {
        self.playing = true;
        self.autoplay_blocked = false;
    }

    pub fn autoplay_blocked(&mut self) {
        tracing::debug!("autoplay prevented by host, waiting for interaction");
        self.autoplay_blocked = true;
    }

    /// Whether the gate-open fallback should attempt playback.
    pub fn wants_fallback_start(&self) -> bool {
        !self.playing
    }

    pub fn playback_started(&mut self) {
        self.playing = true;
    }

    pub fn playback_failed(&mut self) {
        tracing::debug!("playback attempt failed, staying paused");
        self.playing = false;
    }

    /// Flip play/pause. Pausing is immediate; playing is optimistic intent
    /// the host confirms via `playback_started`.
    pub fn toggle(&mut self) -> MusicIntent {
        if self.playing {
            self.playing = false;
            MusicIntent::Pause
        } else {
            MusicIntent::Play
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn was_autoplay_blocked(&self) -> bool {
        self.autoplay_blocked
    }
}

/// Note cards with at most one revealed at a time.
#[derive(Clone, Debug)]
pub struct NoteBoard {
    note_count: usize,
    active: Option<usize>,
}

impl NoteBoard {
    pub fn new(note_count: usize) -> Self {
        Self {
            note_count,
            active: None,
        }
    }

    /// Tap a card: revealing it hides any other, tapping the revealed card
    /// puts it back. Out-of-range taps are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.note_count {
            return;
        }
        self.active = if self.active == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}

/// The sealed letter. One-way: once opened it stays open.
#[derive(Clone, Copy, Debug, Default)]
pub struct Envelope {
    opened: bool,
}

impl Envelope {
    pub fn open(&mut self) -> bool {
        let first = !self.opened;
        self.opened = true;
        first
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }
}

/// Two-state heart: incomplete (partial outline, empty) or complete (full
/// outline, filled). The liquid rise and colors belong to the renderer.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeartFill {
    completed: bool,
}

impl HeartFill {
    pub fn complete(&mut self) -> bool {
        let first = !self.completed;
        self.completed = true;
        first
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Fraction of the heart outline the renderer should draw.
    pub fn outline_fraction(&self) -> f64 {
        if self.completed { 1.0 } else { INCOMPLETE_OUTLINE }
    }
}

/// Outcome of releasing the slide handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideOutcome {
    Completed,
    SnappedBack,
}

/// Drag-the-handle-across control: completes past the threshold, snaps home
/// otherwise. Completion is one-way.
#[derive(Clone, Copy, Debug, Default)]
pub struct SlideToComplete {
    track_width: Option<f64>,
    x: f64,
    completed: bool,
}

impl SlideToComplete {
    /// Usable travel distance (track minus the handle), measured on mount.
    pub fn measure(&mut self, track_width: f64) {
        if track_width > 0.0 {
            self.track_width = Some(track_width);
        }
    }

    pub fn drag_to(&mut self, x: f64) {
        let Some(width) = self.track_width else {
            return;
        };
        if self.completed {
            return;
        }
        self.x = x.clamp(0.0, width);
    }

    pub fn release(&mut self) -> SlideOutcome {
        let Some(width) = self.track_width else {
            return SlideOutcome::SnappedBack;
        };
        if self.completed || self.x > width * SLIDE_COMPLETE_THRESHOLD {
            self.completed = true;
            self.x = width;
            SlideOutcome::Completed
        } else {
            self.x = 0.0;
            SlideOutcome::SnappedBack
        }
    }

    pub fn position(&self) -> f64 {
        self.x
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }
}
