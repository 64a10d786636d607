//! Quiz progression state machine.
//!
//! Single-select questions auto-advance on selection; multi-select
//! questions toggle in place and advance on an explicit "next". Backward
//! navigation never discards answers, and `Finished` is terminal until a
//! retake resets everything.

use super::model::{AnswerMap, AnswerValue, Question, SelectionMode};

/// Where the user currently is in the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPosition {
    Question(usize),
    Finished,
}

/// Mutable quiz state owned by the UI layer. All transitions are total:
/// calls that make no sense in the current position are ignored rather
/// than panicking.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    position: QuizPosition,
    answers: AnswerMap,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        let position = if questions.is_empty() {
            QuizPosition::Finished
        } else {
            QuizPosition::Question(0)
        };

        Self {
            questions,
            position,
            answers: AnswerMap::new(),
        }
    }

    /// Start a session over the production question bank.
    pub fn standard() -> Self {
        Self::new(Question::standard_set())
    }

    pub fn position(&self) -> QuizPosition {
        self.position
    }

    pub fn is_finished(&self) -> bool {
        self.position == QuizPosition::Finished
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.position {
            QuizPosition::Question(index) => self.questions.get(index),
            QuizPosition::Finished => None,
        }
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// Record an option for the current question. Single-select questions
    /// store the token and auto-advance; multi-select questions toggle the
    /// token in the current answer set and stay put.
    pub fn select_option(&mut self, value: &str) {
        let (id, mode) = match self.current_question() {
            Some(question) => (question.id, question.mode),
            None => return,
        };

        match mode {
            SelectionMode::Single => {
                self.answers
                    .insert(id, AnswerValue::Single(value.to_string()));
                self.advance();
            }
            SelectionMode::Multiple => {
                let entry = self
                    .answers
                    .entry(id)
                    .or_insert_with(|| AnswerValue::Multiple(Vec::new()));

                if let AnswerValue::Multiple(values) = entry {
                    if let Some(found) = values.iter().position(|v| v == value) {
                        values.remove(found);
                    } else {
                        values.push(value.to_string());
                    }
                } else {
                    // A stale single-select answer under this id is replaced.
                    *entry = AnswerValue::Multiple(vec![value.to_string()]);
                }
            }
        }
    }

    /// Move to the next question, or to `Finished` from the last one.
    pub fn advance(&mut self) {
        if let QuizPosition::Question(index) = self.position {
            self.position = if index + 1 < self.questions.len() {
                QuizPosition::Question(index + 1)
            } else {
                QuizPosition::Finished
            };
        }
    }

    /// Step back one question, preserving every recorded answer. A no-op at
    /// question zero and once the quiz has finished.
    pub fn go_back(&mut self) {
        if let QuizPosition::Question(index) = self.position {
            if index > 0 {
                self.position = QuizPosition::Question(index - 1);
            }
        }
    }

    /// Snapshot the answer map for scoring. The session itself keeps its
    /// state so the results view can still read it.
    pub fn finish(&self) -> AnswerMap {
        self.answers.clone()
    }

    /// Reset to the first question with an empty answer map.
    pub fn retake(&mut self) {
        self.answers.clear();
        self.position = if self.questions.is_empty() {
            QuizPosition::Finished
        } else {
            QuizPosition::Question(0)
        };
    }
}
