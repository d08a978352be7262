//! Where question records come from.
//!
//! The session only needs a `Vec<QuestionRecord>`; a [`QuestionSource`] is the
//! loader that produces it. The built-in bank ships with the crate as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use crate::quiz_engine::{error::SourceError, models::QuestionRecord};

const BUILTIN_BANK: &str = include_str!("../data/sample_questions.json");

/// Difficulty labels used by the built-in bank. They are display strings and
/// go through the text shaper like any other text.
pub mod difficulty {
    pub const EASY: &str = "سهل";
    pub const MEDIUM: &str = "متوسط";
    pub const HARD: &str = "صعب";
}

pub trait QuestionSource {
    fn load(&self) -> Result<Vec<QuestionRecord>, SourceError>;
}

/// A literal, in-memory list.
impl QuestionSource for Vec<QuestionRecord> {
    fn load(&self) -> Result<Vec<QuestionRecord>, SourceError> {
        Ok(self.clone())
    }
}

/// JSON text holding an array of records.
#[derive(Debug, Clone, Copy)]
pub struct JsonStr<'a>(pub &'a str);

impl QuestionSource for JsonStr<'_> {
    fn load(&self) -> Result<Vec<QuestionRecord>, SourceError> {
        Ok(serde_json::from_str(self.0)?)
    }
}

/// A JSON file on disk, read on every `load`.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        JsonFile { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionSource for JsonFile {
    fn load(&self) -> Result<Vec<QuestionRecord>, SourceError> {
        let text = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        let records: Vec<QuestionRecord> = serde_json::from_str(&text)?;
        log::debug!("loaded {} question(s) from {}", records.len(), self.path.display());
        Ok(records)
    }
}

/// The full sample bank bundled with the crate: 80 Arabic general-knowledge
/// questions, three choices each, labelled with the [`difficulty`] strings.
pub fn builtin_bank() -> JsonStr<'static> {
    JsonStr(BUILTIN_BANK)
}
