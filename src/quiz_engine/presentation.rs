//! Seams to the presentation layer.
//!
//! The session never renders anything. It pushes [`SessionEvent`]s into a
//! [`FeedbackSink`] (audio cues, colour flashes, ...) and hands raw strings to
//! a [`TextShaper`] only when a [`QuestionView`] is built for display, so
//! stored records are never rewritten.

use std::sync::mpsc::Sender;

use serde::Serialize;

use crate::quiz_engine::models::{QuestionRecord, SessionEvent};

// ---------------------------------------------------------------------------
// Text shaping
// ---------------------------------------------------------------------------

/// Turns raw prompt/choice text into display-ready text (e.g. joined and
/// reordered right-to-left glyphs).
pub trait TextShaper {
    fn shape(&self, raw: &str) -> String;
}

/// Identity shaper for scripts that need no shaping.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl TextShaper for PlainText {
    fn shape(&self, raw: &str) -> String {
        raw.to_string()
    }
}

impl<F> TextShaper for F
where
    F: Fn(&str) -> String,
{
    fn shape(&self, raw: &str) -> String {
        self(raw)
    }
}

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

/// Receives session events. Must not call back into the session.
pub trait FeedbackSink {
    fn notify(&mut self, event: &SessionEvent);
}

impl FeedbackSink for Sender<SessionEvent> {
    fn notify(&mut self, event: &SessionEvent) {
        // A dropped receiver only means nobody is listening any more.
        if self.send(event.clone()).is_err() {
            log::debug!("feedback receiver dropped; event discarded");
        }
    }
}

// ---------------------------------------------------------------------------
// Display view
// ---------------------------------------------------------------------------

/// One answer button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSlot {
    pub slot: usize,
    /// Shaped choice text; `None` when the question has fewer choices than slots.
    pub text: Option<String>,
    pub enabled: bool,
}

/// Shaped, display-only projection of a record. Carries no answer key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub prompt: String,
    pub difficulty: String,
    pub options: Vec<OptionSlot>,
}

impl QuestionView {
    /// One slot per choice.
    pub fn new(record: &QuestionRecord, shaper: &impl TextShaper) -> Self {
        Self::with_slots(record, shaper, record.choices.len())
    }

    /// Lay the choices out over a row of at least `slots` buttons. Surplus
    /// slots come back disabled; the row grows when there are more choices
    /// than slots, so every answerable choice stays visible.
    pub fn with_slots(record: &QuestionRecord, shaper: &impl TextShaper, slots: usize) -> Self {
        let choices = record.choices.len();
        if slots < choices {
            log::debug!("{choices} choice(s) exceed {slots} option slot(s); widening row");
        }
        let options = (0..slots.max(choices))
            .map(|slot| match record.choices.get(slot) {
                Some(choice) => OptionSlot { slot, text: Some(shaper.shape(choice)), enabled: true },
                None         => OptionSlot { slot, text: None, enabled: false },
            })
            .collect();

        QuestionView {
            prompt: shaper.shape(&record.prompt),
            difficulty: shaper.shape(&record.difficulty_tag),
            options,
        }
    }
}
