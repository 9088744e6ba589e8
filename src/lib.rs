//! Preference Survey - adaptive yes/no questionnaire
//!
//! Asks a chat-completion model which question to put next, simulates the
//! respondent, and keeps a cumulative record of every completed survey.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use preference_survey::{run_surveys, LlmSelector, QuestionPool, RandomAnswers, ResultStore, SurveyConfig};
//!
//! let config = SurveyConfig::from_env()?;
//! let selector = LlmSelector::new(config.selector.clone());
//! let store = ResultStore::new(&config.results_path);
//! let mut answers = RandomAnswers::new(config.seed);
//!
//! let records = run_surveys(&QuestionPool::default(), &selector, &mut answers, &store, 1).await?;
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ SurveySession (≤ 5 rounds)                    │
//! │   select_index() → QuestionSelector (LLM)     │
//! │   take(index)    → RemainingQuestions         │
//! │   next_answer()  → AnswerSource               │
//! └─────────────────────┬────────────────────────┘
//!                       │ SurveyRecord
//!                       ▼
//!        ResultStore (cumulative JSON file)
//! ```

pub mod answer;
pub mod config;
pub mod pool;
pub mod runner;
pub mod selector;
pub mod session;
pub mod store;
pub mod types;

pub use answer::{AnswerSource, RandomAnswers, ScriptedAnswers};
pub use config::SurveyConfig;
pub use pool::{QuestionPool, RemainingQuestions, QUESTION_BANK};
pub use runner::run_surveys;
pub use selector::{LlmSelector, QuestionSelector, SelectorConfig};
pub use session::{SessionOutcome, SessionState, SurveySession};
pub use store::ResultStore;
pub use types::*;
