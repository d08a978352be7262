use rand::{rngs::StdRng, Rng};

use crate::quiz_engine::{
    bank::QuestionBank,
    config::SessionConfig,
    error::{BankError, SessionError},
    models::{AnswerOutcome, EntryId, Progress, QuestionRecord, SessionEvent, SessionState},
    presentation::FeedbackSink,
    source::QuestionSource,
};

/// One trivia run over one question bank.
///
/// ```text
///   Idle --start--> InProgress --last correct answer--> Completed
///     ^                                                     |
///     +------------------------ reset ----------------------+
/// ```
///
/// A wrong answer never advances: the same question stays active until it is
/// answered correctly or the caller explicitly calls [`draw_next`](Self::draw_next).
pub struct QuizSession<R = StdRng> {
    bank: QuestionBank,
    rng: R,
    state: SessionState,
    active: Option<EntryId>,
    sinks: Vec<Box<dyn FeedbackSink + Send>>,
}

impl QuizSession<StdRng> {
    /// Session with an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::from_config(&SessionConfig::default())
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::with_rng(config.build_rng())
    }
}

impl Default for QuizSession<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuizSession<R> {
    /// Session drawing questions with `rng`.
    pub fn with_rng(rng: R) -> Self {
        QuizSession {
            bank: QuestionBank::new(),
            rng,
            state: SessionState::Idle,
            active: None,
            sinks: Vec::new(),
        }
    }

    pub fn with_sink(mut self, sink: impl FeedbackSink + Send + 'static) -> Self {
        self.attach_sink(sink);
        self
    }

    pub fn attach_sink(&mut self, sink: impl FeedbackSink + Send + 'static) {
        self.sinks.push(Box::new(sink));
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Load `records` and present the first question.
    ///
    /// Only valid while `Idle`. A rejected bank leaves the session `Idle`.
    pub fn start(&mut self, records: Vec<QuestionRecord>) -> Result<(), SessionError> {
        self.require(SessionState::Idle, "start")?;
        if let Err(err) = self.bank.load(records) {
            log::warn!("question bank rejected: {err}");
            return Err(err.into());
        }
        self.state = SessionState::InProgress;
        log::info!("quiz started with {} question(s)", self.bank.size());
        self.present()
    }

    /// Load from `source`, then [`start`](Self::start).
    pub fn start_from<S>(&mut self, source: &S) -> Result<(), SessionError>
    where
        S: QuestionSource + ?Sized,
    {
        self.require(SessionState::Idle, "start")?;
        let records = source.load()?;
        self.start(records)
    }

    /// Pick a (possibly different) active question. Removes nothing.
    ///
    /// Returns `None` when the bank turned out to be empty, in which case the
    /// session is now `Completed`.
    pub fn draw_next(&mut self) -> Result<Option<&QuestionRecord>, SessionError> {
        self.require(SessionState::InProgress, "draw_next")?;
        if self.bank.is_empty() {
            self.complete();
            return Ok(None);
        }
        self.present()?;
        Ok(self.current_question())
    }

    /// Answer the active question with the choice at `choice_index`.
    pub fn submit_answer(&mut self, choice_index: usize) -> Result<AnswerOutcome, SessionError> {
        self.require(SessionState::InProgress, "submit_answer")?;
        let id = self.active.ok_or(SessionError::InvalidState {
            operation: "submit_answer",
            state: self.state,
        })?;

        let record = self.bank.get(id).ok_or(BankError::NotFound(id))?;
        let choices = record.choices.len();
        if choice_index >= choices {
            log::warn!("choice {choice_index} rejected: question {id} has {choices} choice(s)");
            return Err(SessionError::InvalidChoice { index: choice_index, choices });
        }

        if !record.is_correct(choice_index) {
            log::debug!("wrong answer {choice_index} for question {id}");
            self.emit(SessionEvent::AnswerResult { correct: false });
            return Ok(AnswerOutcome { correct: false, progress: Progress::Continue });
        }

        self.bank.remove(id)?;
        self.active = None;
        log::debug!("question {id} answered; {} left", self.bank.size());
        self.emit(SessionEvent::AnswerResult { correct: true });

        if self.bank.is_empty() {
            self.complete();
            Ok(AnswerOutcome { correct: true, progress: Progress::Finished })
        } else {
            self.present()?;
            Ok(AnswerOutcome { correct: true, progress: Progress::Continue })
        }
    }

    /// Drop the bank and return to `Idle` so the host can start over.
    pub fn reset(&mut self) {
        self.bank.clear();
        self.active = None;
        self.state = SessionState::Idle;
        log::info!("quiz reset");
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.active.and_then(|id| self.bank.get(id))
    }

    pub fn current_entry(&self) -> Option<EntryId> {
        self.active
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    /// Questions still to be answered correctly.
    pub fn size(&self) -> usize {
        self.bank.size()
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn require(&self, expected: SessionState, operation: &'static str) -> Result<(), SessionError> {
        if self.state == expected {
            return Ok(());
        }
        log::warn!("{operation} rejected while {}", self.state);
        Err(SessionError::InvalidState { operation, state: self.state })
    }

    fn present(&mut self) -> Result<(), SessionError> {
        let (id, record) = self.bank.pick_random(&mut self.rng)?;
        let record = record.clone();
        log::debug!("presenting question {id}");
        self.active = Some(id);
        self.emit(SessionEvent::QuestionPresented { record });
        Ok(())
    }

    fn complete(&mut self) {
        self.active = None;
        self.state = SessionState::Completed;
        log::info!("quiz complete");
        self.emit(SessionEvent::SessionCompleted);
    }

    fn emit(&mut self, event: SessionEvent) {
        for sink in &mut self.sinks {
            sink.notify(&event);
        }
    }
}
