use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Question records
// ---------------------------------------------------------------------------

/// One multiple-choice question.
///
/// `choices` order is significant: the answer is identified by position, so
/// `correct_index` must always point inside `choices`. Use
/// [`QuestionRecord::validate`] (or load it through a
/// [`QuestionBank`](crate::quiz_engine::bank::QuestionBank)) before trusting
/// a record built from external data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
    /// Informational display label ("easy", "hard", ...). Never used for selection.
    #[serde(default)]
    pub difficulty_tag: String,
}

impl QuestionRecord {
    pub fn new<I, S>(
        prompt: impl Into<String>,
        choices: I,
        correct_index: usize,
        difficulty_tag: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QuestionRecord {
            prompt: prompt.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            correct_index,
            difficulty_tag: difficulty_tag.into(),
        }
    }

    /// Check the choices/correct-index invariant.
    pub fn validate(&self) -> Result<(), RecordDefect> {
        if self.choices.is_empty() {
            return Err(RecordDefect::NoChoices);
        }
        if self.correct_index >= self.choices.len() {
            return Err(RecordDefect::CorrectIndexOutOfRange {
                index: self.correct_index,
                choices: self.choices.len(),
            });
        }
        Ok(())
    }

    pub fn is_correct(&self, choice_index: usize) -> bool {
        choice_index == self.correct_index
    }

    pub fn correct_choice(&self) -> Option<&str> {
        self.choices.get(self.correct_index).map(String::as_str)
    }
}

/// Why a [`QuestionRecord`] was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordDefect {
    NoChoices,
    CorrectIndexOutOfRange { index: usize, choices: usize },
}

impl fmt::Display for RecordDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordDefect::NoChoices => write!(f, "record has no choices"),
            RecordDefect::CorrectIndexOutOfRange { index, choices } => write!(
                f,
                "correct index {index} is out of range for {choices} choice(s)"
            ),
        }
    }
}

/// Keep only the records carrying `tag`, preserving order.
pub fn filter_by_difficulty(records: &[QuestionRecord], tag: &str) -> Vec<QuestionRecord> {
    records
        .iter()
        .filter(|r| r.difficulty_tag == tag)
        .cloned()
        .collect()
}

/// Identifies one loaded bank entry. Value-equal records still get distinct ids.
/// Ids are numbered from zero on every load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Session lifecycle and outcomes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No bank loaded.
    Idle,
    /// Bank loaded and non-empty.
    InProgress,
    /// Bank exhausted. Terminal until an explicit reset.
    Completed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Idle       => write!(f, "Idle"),
            SessionState::InProgress => write!(f, "InProgress"),
            SessionState::Completed  => write!(f, "Completed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progress {
    Continue,
    Finished,
}

/// Returned by [`QuizSession::submit_answer`](crate::QuizSession::submit_answer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub progress: Progress,
}

/// Events emitted to the presentation layer. Purely observational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    QuestionPresented { record: QuestionRecord },
    AnswerResult { correct: bool },
    SessionCompleted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_choices() {
        let r = QuestionRecord::new("P", Vec::<String>::new(), 0, "easy");
        assert_eq!(r.validate(), Err(RecordDefect::NoChoices));
    }

    #[test]
    fn validate_rejects_out_of_range_index() {
        let r = QuestionRecord::new("P", ["a", "b"], 2, "easy");
        assert_eq!(
            r.validate(),
            Err(RecordDefect::CorrectIndexOutOfRange { index: 2, choices: 2 })
        );
    }

    #[test]
    fn single_choice_record_is_valid() {
        let r = QuestionRecord::new("P", ["only"], 0, "");
        assert!(r.validate().is_ok());
        assert_eq!(r.correct_choice(), Some("only"));
    }

    #[test]
    fn difficulty_tag_defaults_when_missing_from_json() {
        let r: QuestionRecord =
            serde_json::from_str(r#"{"prompt":"P","choices":["a"],"correct_index":0}"#).unwrap();
        assert_eq!(r.difficulty_tag, "");
    }

    #[test]
    fn filter_keeps_matching_tags_in_order() {
        let records = vec![
            QuestionRecord::new("1", ["a"], 0, "easy"),
            QuestionRecord::new("2", ["a"], 0, "hard"),
            QuestionRecord::new("3", ["a"], 0, "easy"),
        ];
        let easy = filter_by_difficulty(&records, "easy");
        let prompts: Vec<&str> = easy.iter().map(|r| r.prompt.as_str()).collect();
        assert_eq!(prompts, ["1", "3"]);
    }
}
