//! The guided recommendation quiz: question bank, answer collection state
//! machine, and the scoring engine that ranks the catalog against a
//! completed answer map.

pub mod model;
pub mod scoring;
pub mod session;

#[cfg(test)]
mod tests;

pub use model::{AnswerMap, AnswerValue, Question, QuestionId, QuizOption, SelectionMode};
pub use scoring::{RecommendationEngine, ScoredBlend, ScoringWeights};
pub use session::{QuizPosition, QuizSession};
