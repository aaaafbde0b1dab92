use chrono::NaiveDateTime;

use crate::error::{KeepsakeError, KeepsakeResult};

/// Immutable content configuration for one greeting page, loaded once from
/// JSON and validated before any component is built.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Greeting {
    pub sender: String,
    pub recipient: String,
    pub nicknames: Vec<String>,
    pub music_url: String,
    pub started_at: NaiveDateTime, // relationship start, local wall clock
    pub memories: Vec<Memory>,
    pub love_notes: Vec<LoveNote>,
    pub promises: Vec<String>,
    pub important_dates: Vec<ImportantDate>,
    pub journey: JourneyPlan,
    pub distance_letter: String,
    pub final_message: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Memory {
    pub id: u32,
    pub url: String,
    pub caption: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct LoveNote {
    pub id: u32,
    pub text: String,
    pub rotation_deg: f64, // resting tilt of the unrevealed card
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ImportantDate {
    pub title: String,
    pub date: String,
    pub time: String,
    pub caption: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct JourneyPlan {
    pub steps: Vec<JourneyStep>,
    pub decline_captions: Vec<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct JourneyStep {
    pub id: String,
    pub title: String,
    pub date: String,
    pub message: String,
    pub action_label: String,
    pub interaction: InteractionKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InteractionKind {
    /// Gated on one tap of the step's icon.
    Tap,
    /// Gated on every promise being checked.
    Checklist,
    /// Resolved by accept/decline, never by advancing.
    Finale,
}

/// Love-note tilt is decorative; anything steeper reads as broken layout.
const MAX_NOTE_ROTATION_DEG: f64 = 15.0;

impl Greeting {
    pub fn validate(&self) -> KeepsakeResult<()> {
        if self.sender.trim().is_empty() {
            return Err(KeepsakeError::content("sender must not be empty"));
        }
        if self.recipient.trim().is_empty() {
            return Err(KeepsakeError::content("recipient must not be empty"));
        }
        if self.memories.is_empty() {
            return Err(KeepsakeError::content("at least one memory is required"));
        }
        if self.important_dates.is_empty() {
            return Err(KeepsakeError::content(
                "at least one important date is required",
            ));
        }

        for (i, memory) in self.memories.iter().enumerate() {
            if memory.url.trim().is_empty() {
                return Err(KeepsakeError::content(format!(
                    "memory #{i} has an empty url"
                )));
            }
        }

        for note in &self.love_notes {
            if !note.rotation_deg.is_finite() || note.rotation_deg.abs() > MAX_NOTE_ROTATION_DEG {
                return Err(KeepsakeError::content(format!(
                    "love note '{}' rotation {} exceeds +/-{} degrees",
                    note.id, note.rotation_deg, MAX_NOTE_ROTATION_DEG
                )));
            }
        }

        self.journey.validate(&self.promises)?;

        Ok(())
    }
}

impl JourneyPlan {
    fn validate(&self, promises: &[String]) -> KeepsakeResult<()> {
        if self.steps.is_empty() {
            return Err(KeepsakeError::content("journey must have at least one step"));
        }

        let finales = self
            .steps
            .iter()
            .filter(|s| s.interaction == InteractionKind::Finale)
            .count();
        if finales != 1 {
            return Err(KeepsakeError::content(format!(
                "journey must have exactly one finale step, found {finales}"
            )));
        }
        if self.steps.last().map(|s| s.interaction) != Some(InteractionKind::Finale) {
            return Err(KeepsakeError::content("journey finale must be the last step"));
        }

        let has_checklist = self
            .steps
            .iter()
            .any(|s| s.interaction == InteractionKind::Checklist);
        if has_checklist && promises.is_empty() {
            return Err(KeepsakeError::content(
                "journey has a checklist step but the promise list is empty",
            ));
        }

        if self.decline_captions.is_empty() {
            return Err(KeepsakeError::content(
                "journey must have at least one decline caption",
            ));
        }

        for step in &self.steps {
            if step.id.trim().is_empty() {
                return Err(KeepsakeError::content("journey step id must not be empty"));
            }
        }

        Ok(())
    }
}
