mod rules;

use super::model::AnswerMap;
use crate::catalog::Blend;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Point values applied by the recommendation rubric. The defaults are the
/// production weights; tests and experiments can tune them without touching
/// the rules themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Pregnancy/nursing target match, the highest-priority life-stage rule.
    pub pregnancy_match: i16,
    /// Child or senior target match.
    pub stage_match: i16,
    /// Women's-health match.
    pub womens_health_match: i16,
    /// Generic adult match against the wellness allow-list.
    pub general_adult_match: i16,
    /// Primary-goal match.
    pub goal_match: i16,
    /// Certified gluten-free when the user needs it.
    pub gluten_free_bonus: i16,
    /// Not certified gluten-free when the user needs it. The blend stays in
    /// the results but collapses to the bottom of the ranking.
    pub gluten_free_penalty: i16,
    /// Certified or composition-implied vegan when requested.
    pub vegan_bonus: i16,
    /// Each requested nutrient boost the blend satisfies.
    pub nutrient_boost: i16,
    /// Price preference fit at the budget/premium extremes. The "mid" token
    /// deliberately earns nothing: the rubric rewards extremes, not middle.
    pub budget_fit: i16,
    /// Reasons surfaced per blend, first-come in rule order.
    pub max_reasons: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            pregnancy_match: 20,
            stage_match: 15,
            womens_health_match: 10,
            general_adult_match: 5,
            goal_match: 15,
            gluten_free_bonus: 15,
            gluten_free_penalty: -100,
            vegan_bonus: 5,
            nutrient_boost: 12,
            budget_fit: 5,
            max_reasons: 4,
        }
    }
}

/// A blend annotated with its quiz score and the human-readable reasons it
/// matched. Produced fresh on every scoring invocation, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredBlend {
    #[serde(flatten)]
    pub blend: Blend,
    pub score: i16,
    pub match_reasons: Vec<String>,
}

/// Stateless engine ranking a catalog snapshot against a completed answer
/// map. Each blend is scored independently; no cross-blend interaction.
pub struct RecommendationEngine {
    weights: ScoringWeights,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

impl RecommendationEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Score every blend and sort descending. The sort is stable, so tied
    /// scores keep their catalog order, and no blend is ever dropped: a
    /// gluten-excluded blend simply sinks with a large negative score.
    pub fn score(&self, blends: &[Blend], answers: &AnswerMap) -> Vec<ScoredBlend> {
        let mut scored: Vec<ScoredBlend> = blends
            .iter()
            .map(|blend| {
                let (score, mut reasons) = rules::score_blend(blend, answers, &self.weights);
                reasons.truncate(self.weights.max_reasons);
                ScoredBlend {
                    blend: blend.clone(),
                    score,
                    match_reasons: reasons,
                }
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));

        debug!(
            blends = scored.len(),
            top_score = scored.first().map(|s| s.score),
            "scored catalog against quiz answers"
        );

        scored
    }
}
