//! Question bank and per-session remaining lists
//!
//! The bank is a fixed catalog shared by every session. Sessions never touch
//! it directly; each one works on its own [`RemainingQuestions`] copy.

/// The full catalog of survey questions, in canonical order
pub const QUESTION_BANK: [&str; 31] = [
    "If you could prove or disprove God's existence, would you want to know?",
    "Can reason alone lead us to religious truth?",
    "Is faith more about experience or tradition?",
    "Must the divine be personal to be meaningful?",
    "Can multiple religions all be true?",
    "Should religious truth adapt to modern knowledge?",
    "Is divine revelation necessary for moral knowledge?",
    "Does evil disprove a perfect God?",
    "Is the universe itself divine?",
    "Does genuine free will exist?",
    "Is religion more about transformation or truth?",
    "Can sacred texts contain errors?",
    "Is mystical experience trustworthy?",
    "Should faith seek understanding?",
    "Does divine hiddenness matter?",
    "Can finite minds grasp infinite truth?",
    "Is reality fundamentally good?",
    "Does prayer change anything?",
    "Is consciousness evidence of divinity?",
    "Can miracles violate natural law?",
    "Is there purpose in evolution?",
    "Can symbols contain ultimate truth?",
    "Is divine grace necessary for virtue?",
    "Should tradition limit interpretation?",
    "Can ritual create real change?",
    "Is doubt part of authentic faith?",
    "Must religion be communal?",
    "Can God's nature be known?",
    "Is suffering meaningful?",
    "Is love the ultimate reality?",
    "Does immortality give life meaning?",
];

/// An immutable catalog of candidate questions
#[derive(Debug, Clone)]
pub struct QuestionPool {
    questions: Vec<String>,
}

impl Default for QuestionPool {
    fn default() -> Self {
        Self::new(QUESTION_BANK)
    }
}

impl QuestionPool {
    /// Build a pool from any list of question texts
    pub fn new<I, S>(questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            questions: questions.into_iter().map(Into::into).collect(),
        }
    }

    /// The full fixed list
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// A fresh mutable copy for a new session
    pub fn remaining(&self) -> RemainingQuestions {
        RemainingQuestions {
            questions: self.questions.clone(),
        }
    }
}

/// Questions not yet asked in the current session
///
/// Removal is positional: after [`take`](Self::take) every later index
/// shifts down by one, which is exactly what the selector prompt shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemainingQuestions {
    questions: Vec<String>,
}

impl RemainingQuestions {
    pub fn as_slice(&self) -> &[String] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.questions.get(index).map(String::as_str)
    }

    /// Remove and return the question at `index`, or `None` if out of range
    pub fn take(&mut self, index: usize) -> Option<String> {
        if index < self.questions.len() {
            Some(self.questions.remove(index))
        } else {
            None
        }
    }
}
