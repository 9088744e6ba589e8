//! Simulated respondents
//!
//! The survey has no real respondent yet, so answers come from an
//! [`AnswerSource`]. Production runs flip a fair coin; tests replay a script.

use crate::types::Answer;
use rand::prelude::*;

/// Produces the answer to each asked question
pub trait AnswerSource {
    fn next_answer(&mut self) -> Answer;
}

/// Uniformly random yes/no answers
#[derive(Debug)]
pub struct RandomAnswers {
    rng: StdRng,
}

impl Default for RandomAnswers {
    fn default() -> Self {
        Self::new(None)
    }
}

impl RandomAnswers {
    /// Seeded for reproducibility, or from entropy when `seed` is `None`
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl AnswerSource for RandomAnswers {
    fn next_answer(&mut self) -> Answer {
        if self.rng.gen_bool(0.5) {
            Answer::Yes
        } else {
            Answer::No
        }
    }
}

/// Replays a fixed sequence of answers, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedAnswers {
    script: Vec<Answer>,
    cursor: usize,
}

impl ScriptedAnswers {
    /// An empty script answers "no" to everything
    pub fn new(script: Vec<Answer>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl AnswerSource for ScriptedAnswers {
    fn next_answer(&mut self) -> Answer {
        let Some(answer) = self.script.get(self.cursor % self.script.len().max(1)) else {
            return Answer::No;
        };
        self.cursor += 1;
        *answer
    }
}

impl<A: AnswerSource + ?Sized> AnswerSource for &mut A {
    fn next_answer(&mut self) -> Answer {
        (**self).next_answer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_answers_cover_both_labels() {
        let mut source = RandomAnswers::new(Some(42));
        let answers: Vec<Answer> = (0..200).map(|_| source.next_answer()).collect();

        assert!(answers.contains(&Answer::Yes));
        assert!(answers.contains(&Answer::No));
        assert!(answers.iter().all(|a| matches!(a.as_str(), "yes" | "no")));
    }

    #[test]
    fn test_seeded_answers_repeat() {
        let mut a = RandomAnswers::new(Some(7));
        let mut b = RandomAnswers::new(Some(7));

        for _ in 0..20 {
            assert_eq!(a.next_answer(), b.next_answer());
        }
    }

    #[test]
    fn test_scripted_answers_cycle() {
        let mut source = ScriptedAnswers::new(vec![Answer::Yes, Answer::No]);

        assert_eq!(source.next_answer(), Answer::Yes);
        assert_eq!(source.next_answer(), Answer::No);
        assert_eq!(source.next_answer(), Answer::Yes);
    }

    #[test]
    fn test_empty_script() {
        let mut source = ScriptedAnswers::new(Vec::new());
        assert_eq!(source.next_answer(), Answer::No);
    }
}
