use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;

use crate::quiz_engine::{
    error::SessionError,
    models::{AnswerOutcome, QuestionRecord, SessionState},
    session::QuizSession,
};

/// Clonable handle serializing callers of one [`QuizSession`].
///
/// `draw_next` and `submit_answer` both mutate the active record and the bank,
/// so every call takes the lock for its whole duration.
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<QuizSession<StdRng>>>,
}

impl SharedSession {
    pub fn new(session: QuizSession<StdRng>) -> Self {
        SharedSession { inner: Arc::new(Mutex::new(session)) }
    }

    /// Run `f` with exclusive access to the session.
    pub fn with<T>(&self, f: impl FnOnce(&mut QuizSession<StdRng>) -> T) -> T {
        f(&mut *self.lock())
    }

    pub fn start(&self, records: Vec<QuestionRecord>) -> Result<(), SessionError> {
        self.lock().start(records)
    }

    /// Draw and return a copy of the newly active question.
    pub fn draw_next(&self) -> Result<Option<QuestionRecord>, SessionError> {
        Ok(self.lock().draw_next()?.cloned())
    }

    pub fn submit_answer(&self, choice_index: usize) -> Result<AnswerOutcome, SessionError> {
        self.lock().submit_answer(choice_index)
    }

    pub fn current_question(&self) -> Option<QuestionRecord> {
        self.lock().current_question().cloned()
    }

    pub fn state(&self) -> SessionState {
        self.lock().state()
    }

    pub fn is_completed(&self) -> bool {
        self.lock().is_completed()
    }

    pub fn size(&self) -> usize {
        self.lock().size()
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    // A panic inside a sink poisons the lock; the session itself is still
    // consistent because every transition finishes before notifying.
    fn lock(&self) -> MutexGuard<'_, QuizSession<StdRng>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::config::SessionConfig;
    use std::thread;

    fn bank(n: usize) -> Vec<QuestionRecord> {
        (0..n)
            .map(|i| QuestionRecord::new(format!("P{i}"), ["a", "b"], 1, "easy"))
            .collect()
    }

    #[test]
    fn concurrent_correct_answers_drain_bank_exactly_once() {
        let shared = SharedSession::new(QuizSession::from_config(&SessionConfig::seeded(3)));
        shared.start(bank(40)).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let s = shared.clone();
                thread::spawn(move || {
                    let mut answered = 0usize;
                    while s.submit_answer(1).is_ok() {
                        answered += 1;
                    }
                    answered
                })
            })
            .collect();

        let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, 40);
        assert!(shared.is_completed());
        assert_eq!(shared.size(), 0);
    }

    #[test]
    fn with_gives_direct_access() {
        let shared = SharedSession::new(QuizSession::from_config(&SessionConfig::seeded(1)));
        shared.start(bank(2)).unwrap();
        let prompt = shared.with(|s| s.current_question().map(|r| r.prompt.clone()));
        assert_eq!(prompt, shared.current_question().map(|r| r.prompt));
    }
}
