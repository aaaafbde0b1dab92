use std::time::Duration;

use chrono::NaiveDateTime;

use crate::carousel::LoopingCarousel;
use crate::collage;
use crate::content::Greeting;
use crate::controls::{Envelope, HeartFill, IntroGate, MusicControl, NoteBoard, SlideToComplete};
use crate::core::Viewport;
use crate::elapsed::{ElapsedBreakdown, RelationshipClock};
use crate::error::KeepsakeResult;
use crate::journey::Journey;
use crate::scroll::ScrollTriggers;
use crate::timeline::{AnchorProbe, RecomputeOutcome, TimelinePath};

/// Host effects requested by opening the intro gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StartEffects {
    /// Jump the page back to the top before the content fades in.
    pub scroll_to_top: bool,
    /// Autoplay was blocked earlier; try starting the music now that the
    /// user has interacted.
    pub attempt_music: bool,
}

/// One mounted greeting experience: owns every control for the lifetime of
/// the page and routes host events to them. After `unmount` the session is
/// inert and no geometry is ever read again.
#[derive(Clone, Debug)]
pub struct GreetingSession {
    greeting: Greeting,
    pub intro: IntroGate,
    pub music: MusicControl,
    pub timeline: TimelinePath,
    pub carousel: LoopingCarousel,
    pub journey: Journey,
    pub notes: NoteBoard,
    pub envelope: Envelope,
    pub heart: HeartFill,
    pub slide: SlideToComplete,
    triggers: ScrollTriggers,
    clock: RelationshipClock,
    detached: bool,
}

impl GreetingSession {
    /// Validate the content and mount every component.
    pub fn new(greeting: Greeting) -> KeepsakeResult<Self> {
        greeting.validate()?;

        let journey = Journey::new(&greeting.journey, greeting.promises.len());
        let carousel = LoopingCarousel::new(greeting.important_dates.len());
        let notes = NoteBoard::new(greeting.love_notes.len());
        let clock = RelationshipClock::new(greeting.started_at);

        Ok(Self {
            intro: IntroGate::default(),
            music: MusicControl::default(),
            timeline: TimelinePath::new(collage::SLOT_COUNT),
            carousel,
            journey,
            notes,
            envelope: Envelope::default(),
            heart: HeartFill::default(),
            slide: SlideToComplete::default(),
            triggers: ScrollTriggers::default(),
            clock,
            detached: false,
            greeting,
        })
    }

    pub fn greeting(&self) -> &Greeting {
        &self.greeting
    }

    /// Open the intro gate; effects fire only on the first open.
    pub fn start(&mut self) -> StartEffects {
        if !self.intro.open() {
            return StartEffects::default();
        }
        StartEffects {
            scroll_to_top: true,
            attempt_music: self.music.wants_fallback_start(),
        }
    }

    /// Drive the timeline's settle schedule; `since_mount` is the host's
    /// elapsed time since the page mounted.
    pub fn tick(&mut self, since_mount: Duration, probe: &dyn AnchorProbe) -> usize {
        if self.detached {
            return 0;
        }
        self.timeline.tick(since_mount, probe)
    }

    /// Feed one scroll sample: maps the collage container through the
    /// trigger offsets and folds the result into the reveal maximum.
    /// An unmeasured container leaves the reveal untouched.
    pub fn on_scroll(&mut self, viewport: Viewport, probe: &dyn AnchorProbe) -> f64 {
        if self.detached {
            return self.timeline.reveal();
        }
        let Some(container) = probe.container() else {
            return self.timeline.reveal();
        };
        let span = self.triggers.span_for_rect(container, viewport);
        self.timeline
            .observe_scroll(span.progress_at(viewport.scroll_y))
    }

    pub fn on_resize(&mut self, probe: &dyn AnchorProbe) -> RecomputeOutcome {
        if self.detached {
            return RecomputeOutcome::Deferred;
        }
        self.timeline.on_resize(probe)
    }

    pub fn elapsed_at(&self, now: NaiveDateTime) -> ElapsedBreakdown {
        self.clock.elapsed_at(now)
    }

    /// Tear down: cancel pending timeline passes and refuse further events.
    pub fn unmount(&mut self) {
        self.timeline.unmount();
        self.detached = true;
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }
}
