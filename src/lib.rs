//! # trivia_engine
//!
//! A single-session, offline trivia engine.
//!
//! The engine holds a bank of multiple-choice questions, presents one at a
//! time, checks the chosen answer and decides whether the run continues or is
//! finished. Rendering, audio and text shaping stay with the host; the engine
//! talks to them through small traits.
//!
//! ## How it works
//!
//! 1. Build a [`QuizSession`], optionally from a [`SessionConfig`] carrying an
//!    RNG seed.
//! 2. Call [`QuizSession::start`] with the question records (or
//!    [`QuizSession::start_from`] with any [`QuestionSource`]). The first
//!    question is drawn at random and becomes active.
//! 3. Call [`QuizSession::submit_answer`] with the chosen index. A correct
//!    answer removes the question from the bank and draws another one; a wrong
//!    answer keeps the same question active. When the bank is empty the
//!    session is `Completed`.
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` reproduces the exact draw order.
//! - **Typed errors**: bad banks, out-of-range choices and calls in the wrong
//!   state come back as [`SessionError`] instead of being logged and ignored.
//! - **Observable**: attach a [`FeedbackSink`] to receive `QuestionPresented`,
//!   `AnswerResult` and `SessionCompleted` events.
//!
//! ## Quick start
//!
//! ```rust
//! use trivia_engine::{Progress, QuestionRecord, QuizSession, SessionConfig};
//!
//! let mut session = QuizSession::from_config(&SessionConfig::seeded(42));
//! session
//!     .start(vec![QuestionRecord::new("2 + 2 = ?", ["3", "4"], 1, "easy")])
//!     .unwrap();
//!
//! let q = session.current_question().unwrap();
//! println!("Q: {}", q.prompt);
//!
//! let outcome = session.submit_answer(1).unwrap();
//! assert!(outcome.correct);
//! assert_eq!(outcome.progress, Progress::Finished);
//! assert!(session.is_completed());
//! ```

pub mod client_view;
pub mod quiz_engine;

// Convenience re-exports so callers can use `trivia_engine::QuizSession`
// directly without reaching into `quiz_engine::`.
pub use client_view::{to_client_event, to_client_view, DEFAULT_OPTION_SLOTS};
pub use quiz_engine::{
    builtin_bank, difficulty, filter_by_difficulty, AnswerOutcome, BankError, EntryId,
    FeedbackSink, JsonFile, JsonStr, OptionSlot, PlainText, Progress, QuestionBank,
    QuestionRecord, QuestionSource, QuestionView, QuizSession, RecordDefect, SessionConfig,
    SessionError, SessionEvent, SessionState, SharedSession, SourceError, TextShaper,
};
