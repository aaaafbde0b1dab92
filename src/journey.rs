use std::time::Duration;

use crate::content::{InteractionKind, JourneyPlan, JourneyStep};
use crate::core::Vec2;
use crate::error::{KeepsakeError, KeepsakeResult};

/// Host hint: hold the heart-burst this long before treating the journey as
/// complete, so the celebration plays before the page swaps.
pub const ACCEPT_CELEBRATION_DELAY: Duration = Duration::from_millis(800);

/// The decline button loops through these offsets, one hop per evasion:
/// side by side, up-right, down-right (less x to stay on screen).
const DECLINE_OFFSETS: [Vec2; 3] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(60.0, -60.0),
    Vec2::new(40.0, 60.0),
];

/// The finale's un-clickable "no": every pointer approach hops it to the next
/// offset and rotates its caption. It never resolves the flow.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeclineButton {
    slot: usize,
    evasions: usize,
}

impl DeclineButton {
    pub fn evade(&mut self) {
        self.slot = (self.slot + 1) % DECLINE_OFFSETS.len();
        self.evasions += 1;
    }

    pub fn offset(&self) -> Vec2 {
        DECLINE_OFFSETS[self.slot]
    }

    /// Index into the configured caption ring for the current label.
    pub fn caption_index(&self, caption_count: usize) -> usize {
        if caption_count == 0 {
            return 0;
        }
        self.evasions % caption_count
    }

    pub fn evasions(&self) -> usize {
        self.evasions
    }
}

/// Step-gated journey flow: strictly forward, each step gated by its
/// interaction kind, resolved by accepting the finale.
#[derive(Clone, Debug)]
pub struct Journey {
    steps: Vec<JourneyStep>,
    decline_captions: Vec<String>,
    current: usize,
    interacted: bool,
    promises: Vec<bool>,
    decline: DeclineButton,
    accepted: bool,
}

impl Journey {
    /// Build from validated content; `Greeting::validate` has already
    /// guaranteed a single trailing finale and a non-empty caption ring.
    pub fn new(plan: &JourneyPlan, promise_count: usize) -> Self {
        let mut journey = Self {
            steps: plan.steps.clone(),
            decline_captions: plan.decline_captions.clone(),
            current: 0,
            interacted: false,
            promises: vec![false; promise_count],
            decline: DeclineButton::default(),
            accepted: false,
        };
        journey.enter_step();
        journey
    }

    fn enter_step(&mut self) {
        self.interacted = match self.current_step().interaction {
            InteractionKind::Tap => false,
            InteractionKind::Checklist => self.promises.iter().all(|p| *p),
            InteractionKind::Finale => true,
        };
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &JourneyStep {
        &self.steps[self.current]
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn promises(&self) -> &[bool] {
        &self.promises
    }

    pub fn decline_button(&self) -> &DeclineButton {
        &self.decline
    }

    pub fn decline_caption(&self) -> &str {
        &self.decline_captions[self.decline.caption_index(self.decline_captions.len())]
    }

    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// One tap on the step's icon; repeat taps are idempotent.
    pub fn interact(&mut self) {
        if self.current_step().interaction == InteractionKind::Tap {
            self.interacted = true;
        }
    }

    pub fn toggle_promise(&mut self, index: usize) -> KeepsakeResult<()> {
        let Some(slot) = self.promises.get_mut(index) else {
            return Err(KeepsakeError::flow(format!(
                "promise index {index} out of range ({} promises)",
                self.promises.len()
            )));
        };
        *slot = !*slot;
        if self.current_step().interaction == InteractionKind::Checklist {
            self.interacted = self.promises.iter().all(|p| *p);
        }
        Ok(())
    }

    /// Whether the current step's gate is satisfied. The finale reports
    /// `false`: it resolves via `accept`, never by advancing.
    pub fn can_advance(&self) -> bool {
        match self.current_step().interaction {
            InteractionKind::Tap | InteractionKind::Checklist => self.interacted,
            InteractionKind::Finale => false,
        }
    }

    /// Move to the next step when gated open; returns whether a move
    /// happened.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() || self.current + 1 >= self.steps.len() {
            return false;
        }
        self.current += 1;
        self.enter_step();
        tracing::debug!(step = %self.current_step().id, "journey advanced");
        true
    }

    /// Pointer reached for the decline button on the finale.
    pub fn decline(&mut self) {
        if self.current_step().interaction == InteractionKind::Finale {
            self.decline.evade();
        }
    }

    /// Accept the finale; latches exactly once. Returns `true` the first
    /// time, `false` for repeats or when not on the finale.
    pub fn accept(&mut self) -> bool {
        if self.current_step().interaction != InteractionKind::Finale || self.accepted {
            return false;
        }
        self.accepted = true;
        tracing::debug!("journey accepted");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(id: &str, interaction: InteractionKind) -> JourneyStep {
        JourneyStep {
            id: id.to_string(),
            title: id.to_string(),
            date: String::new(),
            message: String::new(),
            action_label: String::new(),
            interaction,
        }
    }

    fn plan() -> JourneyPlan {
        JourneyPlan {
            steps: vec![
                step("rose", InteractionKind::Tap),
                step("promise", InteractionKind::Checklist),
                step("valentine", InteractionKind::Finale),
            ],
            decline_captions: vec!["No".into(), "Please?".into(), "Really?".into()],
        }
    }

    #[test]
    fn tap_step_gates_until_interaction() {
        let mut journey = Journey::new(&plan(), 2);
        assert!(!journey.can_advance());
        assert!(!journey.advance());

        journey.interact();
        assert!(journey.can_advance());
        assert!(journey.advance());
        assert_eq!(journey.current_step().id, "promise");
    }

    #[test]
    fn checklist_requires_every_promise() {
        let mut journey = Journey::new(&plan(), 2);
        journey.interact();
        journey.advance();

        assert!(!journey.can_advance());
        journey.toggle_promise(0).unwrap();
        assert!(!journey.can_advance());
        journey.toggle_promise(1).unwrap();
        assert!(journey.can_advance());

        // Un-checking closes the gate again.
        journey.toggle_promise(0).unwrap();
        assert!(!journey.can_advance());
    }

    #[test]
    fn promise_index_out_of_range_is_an_error() {
        let mut journey = Journey::new(&plan(), 2);
        assert!(journey.toggle_promise(5).is_err());
    }

    #[test]
    fn finale_never_advances_and_latches_accept() {
        let mut journey = Journey::new(&plan(), 0);
        // Checklist with zero promises is vacuously satisfied.
        journey.interact();
        journey.advance();
        journey.advance();
        assert_eq!(journey.current_step().id, "valentine");

        assert!(!journey.can_advance());
        assert!(!journey.advance());

        assert!(journey.accept());
        assert!(journey.accepted());
        assert!(!journey.accept());
    }

    #[test]
    fn decline_cycles_offsets_and_captions() {
        let mut journey = Journey::new(&plan(), 0);
        journey.interact();
        journey.advance();
        journey.advance();

        assert_eq!(journey.decline_caption(), "No");
        let origin = journey.decline_button().offset();

        journey.decline();
        assert_eq!(journey.decline_caption(), "Please?");
        assert_ne!(journey.decline_button().offset(), origin);

        journey.decline();
        journey.decline();
        // Period three: offsets are back at the origin, captions keep going.
        assert_eq!(journey.decline_button().offset(), origin);
        assert_eq!(journey.decline_button().evasions(), 3);
        assert_eq!(journey.decline_caption(), "No");
    }

    #[test]
    fn decline_outside_finale_is_ignored() {
        let mut journey = Journey::new(&plan(), 0);
        journey.decline();
        assert_eq!(journey.decline_button().evasions(), 0);
    }
}
