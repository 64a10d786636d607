//! The five scoring sections, evaluated in a fixed order per blend.
//!
//! Rules test loosely structured catalog text (segment, target demographic,
//! certifications) with lowercase substring containment plus numeric
//! thresholds. Reason strings accumulate in evaluation order; the caller
//! truncates to the surfaced maximum.

use super::ScoringWeights;
use crate::catalog::Blend;
use crate::storefront::quiz::model::{AnswerMap, AnswerValue, QuestionId};

/// Blend ids that count as a generic adult wellness match even without a
/// "wellness" segment label.
const GENERAL_ADULT_BLEND_IDS: [u32; 2] = [22, 30];

pub(crate) fn score_blend(
    blend: &Blend,
    answers: &AnswerMap,
    weights: &ScoringWeights,
) -> (i16, Vec<String>) {
    let mut score: i16 = 0;
    let mut reasons: Vec<String> = Vec::new();

    let target = blend.target_demographic.to_lowercase();
    let segment = blend.segment.to_lowercase();

    // 1. Life-stage match. Rules are independently additive; a skipped
    // question contributes nothing.
    if let Some(age) = single_answer(answers, QuestionId::Age) {
        if age == "child" && (contains_any(&target, &["child", "kid"]) || segment.contains("growth"))
        {
            score += weights.stage_match;
            reasons.push("Designed for children's growth & development".to_string());
        }
        if age == "senior"
            && (contains_any(&target, &["senior", "aging"]) || segment.contains("joint"))
        {
            score += weights.stage_match;
            reasons.push("Tailored for active aging & digestion".to_string());
        }
        if age == "pregnancy" && contains_any(&target, &["pregnan", "nursing", "lactat"]) {
            score += weights.pregnancy_match;
            reasons.push("Safe & nourishing for pregnancy/nursing".to_string());
        }
        if age == "woman"
            && (target.contains("women") || contains_any(&segment, &["pcos", "beauty"]))
        {
            score += weights.womens_health_match;
            reasons.push("Supports women's hormonal health".to_string());
        }
        if age == "adult"
            && (GENERAL_ADULT_BLEND_IDS.contains(&blend.id) || segment.contains("wellness"))
        {
            score += weights.general_adult_match;
        }
    }

    // 2. Primary-goal match: segment substring or nutritional threshold.
    if let Some(goal) = single_answer(answers, QuestionId::Goal) {
        let (matched, reason) = match goal {
            "diabetes" => (
                contains_any(&segment, &["diabetes", "sugar"]) || blend.gi < 50.0,
                "Low GI for blood sugar management",
            ),
            "weight" => (
                contains_any(&segment, &["weight", "slim"]) || blend.fiber > 11.0,
                "High fiber content keeps you full longer",
            ),
            "muscle" => (
                contains_any(&segment, &["muscle", "athlete"]) || blend.protein > 19.0,
                "High protein supports muscle synthesis",
            ),
            "digestion" => (
                contains_any(&segment, &["gut", "digest", "ibs"]),
                "Gentle on stomach & improves digestion",
            ),
            "heart" => (
                contains_any(&segment, &["heart", "cardio"]),
                "Ingredients chosen for heart health",
            ),
            "energy" => (
                contains_any(&segment, &["energy", "vitality"]),
                "Sustained energy release",
            ),
            _ => (false, ""),
        };

        if matched {
            score += weights.goal_match;
            reasons.push(reason.to_string());
        }
    }

    // 3. Dietary restrictions. A needed-but-missing gluten-free
    // certification collapses the score instead of removing the row.
    if answer_contains(answers, QuestionId::Diet, "glutenfree") {
        if blend.certifications.to_lowercase().contains("gluten-free") {
            score += weights.gluten_free_bonus;
            reasons.push("Certified Gluten-Free".to_string());
        } else {
            score += weights.gluten_free_penalty;
        }
    }
    if answer_contains(answers, QuestionId::Diet, "vegan")
        && (blend.certifications.to_lowercase().contains("vegan")
            || blend.composition.to_lowercase().contains("plant"))
    {
        score += weights.vegan_bonus;
    }

    // 4. Nutrient boosts, each with the actual value in the reason.
    if answer_contains(answers, QuestionId::Nutrients, "protein") && blend.protein >= 18.0 {
        score += weights.nutrient_boost;
        reasons.push(format!("Excellent protein source ({}g)", blend.protein));
    }
    if answer_contains(answers, QuestionId::Nutrients, "fiber") && blend.fiber >= 10.0 {
        score += weights.nutrient_boost;
        reasons.push(format!("High fiber content ({}g)", blend.fiber));
    }
    if answer_contains(answers, QuestionId::Nutrients, "iron")
        && (blend.iron >= 5.0 || blend.calcium >= 120.0)
    {
        score += weights.nutrient_boost;
        reasons.push("Rich in Iron and Calcium".to_string());
    }
    if answer_contains(answers, QuestionId::Nutrients, "lowgi") && blend.gi <= 50.0 {
        score += weights.nutrient_boost;
        reasons.push(format!("Ultra-Low Glycemic Index ({})", blend.gi));
    }

    // 5. Budget fit. "mid" earns nothing either way, and a premium
    // preference gets the bonus without a surfaced reason.
    if let Some(budget) = single_answer(answers, QuestionId::Budget) {
        if budget == "budget" && blend.price <= 90.0 {
            score += weights.budget_fit;
            reasons.push("Fits your budget preference".to_string());
        }
        if budget == "premium" && blend.price > 130.0 {
            score += weights.budget_fit;
        }
    }

    (score, reasons)
}

fn single_answer(answers: &AnswerMap, id: QuestionId) -> Option<&str> {
    answers.get(&id).and_then(AnswerValue::as_single)
}

fn answer_contains(answers: &AnswerMap, id: QuestionId, token: &str) -> bool {
    answers
        .get(&id)
        .map(|answer| answer.contains(token))
        .unwrap_or(false)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
