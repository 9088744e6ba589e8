//! Sequential survey runs
//!
//! Each run gets a fresh session. Its transcript is saved as soon as the
//! session completes, so an interrupted batch keeps every finished run.

use crate::answer::AnswerSource;
use crate::pool::QuestionPool;
use crate::selector::QuestionSelector;
use crate::session::{SessionState, SurveySession};
use crate::store::ResultStore;
use crate::types::{SurveyRecord, MAX_QUESTIONS};
use anyhow::Result;

/// Run `runs` surveys back to back, persisting each one
pub async fn run_surveys<S, A>(
    pool: &QuestionPool,
    selector: &S,
    answers: &mut A,
    store: &ResultStore,
    runs: usize,
) -> Result<Vec<SurveyRecord>>
where
    S: QuestionSelector,
    A: AnswerSource,
{
    let mut records = Vec::with_capacity(runs);

    for run in 0..runs {
        println!("\nStarting survey run {}/{}", run + 1, runs);
        let record = run_single(pool, selector, &mut *answers).await;

        store.append(&record)?;
        println!("Survey complete. Results saved.");
        records.push(record);
    }

    Ok(records)
}

async fn run_single<S, A>(pool: &QuestionPool, selector: &S, answers: A) -> SurveyRecord
where
    S: QuestionSelector,
    A: AnswerSource,
{
    let mut session = SurveySession::new(pool.clone(), selector, answers);

    loop {
        let before = session.rounds();
        let state = session.step().await;

        if session.rounds() > before {
            if let Some(entry) = session.transcript().last() {
                println!("\nQuestion {}/{}:", session.rounds(), MAX_QUESTIONS);
                println!("Q: {}", entry.question);
                println!("A: {}\n", entry.answer);
            }
        }

        if let SessionState::Complete(reason) = state {
            if session.rounds() < MAX_QUESTIONS {
                println!("Stopped early: {}", reason.describe());
            }
            break;
        }
    }

    SurveyRecord::new(session.transcript().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::{RandomAnswers, ScriptedAnswers};
    use crate::session::tests::{FailingSelector, FixedSelector};
    use crate::types::Answer;
    use tempfile::tempdir;

    #[test]
    fn test_runs_accumulate_in_store() {
        let dir = tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("simulations").join("results.json"));
        let mut answers = RandomAnswers::new(Some(3));

        let records = tokio_test::block_on(run_surveys(
            &QuestionPool::default(),
            &FixedSelector(2),
            &mut answers,
            &store,
            3,
        ))
        .unwrap();

        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.responses.len() == MAX_QUESTIONS));
        assert_eq!(store.load(), records);
    }

    #[test]
    fn test_runs_do_not_share_state() {
        let dir = tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("results.json"));
        let mut answers = ScriptedAnswers::new(vec![Answer::Yes, Answer::No]);

        let records = tokio_test::block_on(run_surveys(
            &QuestionPool::default(),
            &FixedSelector(0),
            &mut answers,
            &store,
            2,
        ))
        .unwrap();

        // Same selector on a fresh pool asks the same questions each run
        let first: Vec<&str> = records[0].responses.iter().map(|e| e.question.as_str()).collect();
        let second: Vec<&str> = records[1].responses.iter().map(|e| e.question.as_str()).collect();
        assert_eq!(first, second);

        // The answer source carries on across runs
        assert_eq!(records[0].responses[0].answer, Answer::Yes);
        assert_eq!(records[1].responses[0].answer, Answer::No);
    }

    #[test]
    fn test_failed_selection_still_persists() {
        let dir = tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("results.json"));
        let mut answers = RandomAnswers::default();

        let records = tokio_test::block_on(run_surveys(
            &QuestionPool::default(),
            &FailingSelector,
            &mut answers,
            &store,
            1,
        ))
        .unwrap();

        assert!(records[0].responses.is_empty());
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_zero_runs() {
        let dir = tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("results.json"));
        let mut answers = RandomAnswers::default();

        let records = tokio_test::block_on(run_surveys(
            &QuestionPool::default(),
            &FixedSelector(0),
            &mut answers,
            &store,
            0,
        ))
        .unwrap();

        assert!(records.is_empty());
        assert!(!store.path().exists());
    }
}
