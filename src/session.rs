//! Survey session state machine
//!
//! A session owns its copy of the remaining questions and its transcript.
//! Each round asks the selector for a position, removes that question,
//! records a simulated answer, and stops after five answers or the first
//! failed selection.
//!
//! ```text
//!   Running(0) ─step→ Running(1) ─…→ Running(4) ─step→ Complete(QuestionLimit)
//!        │                                 │
//!        └──── selector fails ─────────────┴──→ Complete(SelectorFailed)
//! ```

use crate::answer::AnswerSource;
use crate::pool::{QuestionPool, RemainingQuestions};
use crate::selector::QuestionSelector;
use crate::types::{CompletionReason, SurveyRecord, TranscriptEntry, MAX_QUESTIONS};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Complete(CompletionReason),
}

impl SessionState {
    pub fn is_complete(&self) -> bool {
        matches!(self, SessionState::Complete(_))
    }
}

/// Result of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub transcript: Vec<TranscriptEntry>,
    pub reason: CompletionReason,
}

impl SessionOutcome {
    pub fn into_record(self) -> SurveyRecord {
        SurveyRecord::new(self.transcript)
    }
}

/// One adaptive survey run
pub struct SurveySession<S, A> {
    pool: QuestionPool,
    remaining: RemainingQuestions,
    transcript: Vec<TranscriptEntry>,
    state: SessionState,
    selector: S,
    answers: A,
}

impl<S, A> SurveySession<S, A>
where
    S: QuestionSelector,
    A: AnswerSource,
{
    pub fn new(pool: QuestionPool, selector: S, answers: A) -> Self {
        let remaining = pool.remaining();
        Self {
            pool,
            remaining,
            transcript: Vec::with_capacity(MAX_QUESTIONS),
            state: SessionState::Running,
            selector,
            answers,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn remaining(&self) -> &RemainingQuestions {
        &self.remaining
    }

    /// Completed rounds so far
    pub fn rounds(&self) -> usize {
        self.transcript.len()
    }

    /// Advance by one round; a completed session stays completed
    pub async fn step(&mut self) -> SessionState {
        if self.state.is_complete() {
            return self.state;
        }

        if self.remaining.is_empty() {
            return self.finish(CompletionReason::PoolExhausted);
        }

        let index = self
            .selector
            .select_index(&self.transcript, self.remaining.as_slice())
            .await;

        let Some(question) = index.and_then(|i| self.remaining.take(i)) else {
            tracing::warn!(
                "No question selected after {} round(s), ending session",
                self.rounds()
            );
            return self.finish(CompletionReason::SelectorFailed);
        };

        let answer = self.answers.next_answer();
        tracing::debug!("Round {}: {:?} -> {}", self.rounds() + 1, question, answer);
        self.transcript.push(TranscriptEntry::new(question, answer));

        if self.rounds() >= MAX_QUESTIONS {
            return self.finish(CompletionReason::QuestionLimit);
        }
        self.state
    }

    /// Run rounds until the session completes
    pub async fn run(&mut self) -> SessionOutcome {
        loop {
            if let SessionState::Complete(reason) = self.step().await {
                return SessionOutcome {
                    transcript: self.transcript.clone(),
                    reason,
                };
            }
        }
    }

    /// Return to a fresh state for another run
    pub fn reset(&mut self) {
        self.remaining = self.pool.remaining();
        self.transcript.clear();
        self.state = SessionState::Running;
    }

    fn finish(&mut self, reason: CompletionReason) -> SessionState {
        tracing::info!(
            "Session complete with {} answer(s): {}",
            self.rounds(),
            reason.describe()
        );
        self.state = SessionState::Complete(reason);
        self.state
    }
}
