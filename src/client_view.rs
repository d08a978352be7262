use rand::Rng;
use serde_json::{json, Value};

use crate::quiz_engine::{
    models::{SessionEvent, SessionState},
    presentation::{QuestionView, TextShaper},
    session::QuizSession,
};

/// Number of answer buttons the reference client lays out. Questions with
/// more choices get a wider row.
pub const DEFAULT_OPTION_SLOTS: usize = 3;

/// Build the `options` array, one entry per button.
fn options(view: &QuestionView) -> Value {
    Value::Array(
        view.options
            .iter()
            .map(|o| json!({ "slot": o.slot, "text": o.text, "enabled": o.enabled }))
            .collect(),
    )
}

/// Map a session state to the client's screen name.
fn screen_str(state: SessionState) -> &'static str {
    match state {
        SessionState::Idle       => "Welcome",
        SessionState::InProgress => "Question",
        SessionState::Completed  => "Finished",
    }
}

/// Snapshot `session` as a JSON object for a presentation client.
///
/// Text goes through `shaper`; the correct index is never included.
pub fn to_client_view<R: Rng>(
    session: &QuizSession<R>,
    shaper: &impl TextShaper,
    slots: usize,
) -> Value {
    let question = session.current_question().map(|record| {
        let view = QuestionView::with_slots(record, shaper, slots);
        json!({
            "prompt":     view.prompt,
            "difficulty": view.difficulty,
            "options":    options(&view),
        })
    });

    json!({
        "screen":    screen_str(session.state()),
        "state":     session.state().to_string(),
        "remaining": session.size(),
        "question":  question,
    })
}

/// Map a feedback event to the cue the client should play.
pub fn to_client_event(event: &SessionEvent, shaper: &impl TextShaper) -> Value {
    match event {
        SessionEvent::QuestionPresented { record } => json!({
            "type":   "question",
            "prompt": shaper.shape(&record.prompt),
        }),
        SessionEvent::AnswerResult { correct } => json!({
            "type":  "answer",
            "cue":   if *correct { "Correct" } else { "Wrong" },
        }),
        SessionEvent::SessionCompleted => json!({ "type": "completed" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::{
        config::SessionConfig,
        models::{Progress, QuestionRecord},
        presentation::PlainText,
    };

    #[test]
    fn idle_session_has_no_question() {
        let s = QuizSession::from_config(&SessionConfig::seeded(1));
        let v = to_client_view(&s, &PlainText, DEFAULT_OPTION_SLOTS);
        assert_eq!(v["screen"], "Welcome");
        assert_eq!(v["remaining"], 0);
        assert!(v["question"].is_null());
    }

    #[test]
    fn view_hides_answer_key_and_disables_surplus_slots() {
        let mut s = QuizSession::from_config(&SessionConfig::seeded(1));
        s.start(vec![QuestionRecord::new("P1", ["a", "b"], 1, "easy")]).unwrap();
        let v = to_client_view(&s, &PlainText, DEFAULT_OPTION_SLOTS);

        assert_eq!(v["screen"], "Question");
        assert_eq!(v["question"]["prompt"], "P1");
        let opts = v["question"]["options"].as_array().unwrap();
        assert_eq!(opts.len(), 3);
        assert_eq!(opts[2]["enabled"], false);
        assert!(!v.to_string().contains("correct_index"));
    }

    #[test]
    fn four_choice_question_can_be_answered_through_the_view() {
        let mut s = QuizSession::from_config(&SessionConfig::seeded(1));
        s.start(vec![QuestionRecord::new("P1", ["a", "b", "c", "d"], 3, "hard")]).unwrap();
        let v = to_client_view(&s, &PlainText, DEFAULT_OPTION_SLOTS);

        let opts = v["question"]["options"].as_array().unwrap();
        assert_eq!(opts.len(), 4);
        assert_eq!(opts[3]["text"], "d");
        assert_eq!(opts[3]["enabled"], true);

        let slot = opts[3]["slot"].as_u64().unwrap() as usize;
        assert_eq!(s.submit_answer(slot).unwrap().progress, Progress::Finished);
    }

    #[test]
    fn answer_events_map_to_audio_cues() {
        let ok = to_client_event(&SessionEvent::AnswerResult { correct: true }, &PlainText);
        let bad = to_client_event(&SessionEvent::AnswerResult { correct: false }, &PlainText);
        assert_eq!(ok["cue"], "Correct");
        assert_eq!(bad["cue"], "Wrong");
    }
}
