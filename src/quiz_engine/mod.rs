//! Core quiz engine: question bank, session state machine, and the seams to
//! data sources and presentation.
//!
//! ## Module overview
//!
//! | Module         | Purpose |
//! |----------------|---------|
//! | `models`       | Shared types: question records, session state, outcomes, events |
//! | `error`        | `BankError`, `SessionError`, `SourceError` |
//! | `bank`         | Pool of unanswered questions with random draw and removal |
//! | `session`      | `QuizSession`: start / draw / answer / complete lifecycle |
//! | `config`       | `SessionConfig` and RNG seeding |
//! | `source`       | Question loaders (in-memory, JSON, built-in sample bank) |
//! | `presentation` | Text shaper, feedback sink, display view |
//! | `shared`       | Mutex-serialized session handle for multi-caller hosts |

pub mod bank;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
pub mod session;
pub mod shared;
pub mod source;

// Re-export the public API surface so callers can use
// `quiz_engine::QuizSession` without reaching into sub-modules.
pub use bank::QuestionBank;
pub use config::SessionConfig;
pub use error::{BankError, SessionError, SourceError};
pub use models::{
    filter_by_difficulty, AnswerOutcome, EntryId, Progress, QuestionRecord, RecordDefect,
    SessionEvent, SessionState,
};
pub use presentation::{FeedbackSink, OptionSlot, PlainText, QuestionView, TextShaper};
pub use session::QuizSession;
pub use shared::SharedSession;
pub use source::{builtin_bank, difficulty, JsonFile, JsonStr, QuestionSource};
