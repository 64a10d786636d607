use super::common::*;
use crate::storefront::quiz::model::QuestionId;
use crate::storefront::quiz::scoring::{RecommendationEngine, ScoringWeights};

#[test]
fn diabetes_goal_and_gluten_need_stack_for_a_certified_blend() {
    let engine = RecommendationEngine::default();
    let catalog = vec![diabetic_blend()];
    let answers = answers(vec![
        single(QuestionId::Goal, "diabetes"),
        multiple(QuestionId::Diet, &["glutenfree"]),
    ]);

    let scored = engine.score(&catalog, &answers);

    assert_eq!(scored.len(), 1);
    assert!(scored[0].score >= 30);
    assert!(scored[0]
        .match_reasons
        .iter()
        .any(|r| r.contains("blood sugar")));
    assert!(scored[0]
        .match_reasons
        .iter()
        .any(|r| r.contains("Gluten-Free")));
}

#[test]
fn missing_gluten_certification_collapses_the_score_but_keeps_the_row() {
    let engine = RecommendationEngine::default();
    let mut blend = diabetic_blend();
    blend.certifications = "Organic".to_string();
    let catalog = vec![blend];
    let answers = answers(vec![multiple(QuestionId::Diet, &["glutenfree"])]);

    let scored = engine.score(&catalog, &answers);

    assert_eq!(scored.len(), 1);
    assert!(scored[0].score <= -85);
}

#[test]
fn scoring_never_drops_or_duplicates_rows() {
    let engine = RecommendationEngine::default();
    let catalog = vec![diabetic_blend(), athlete_blend(), everyday_blend()];
    let answers = answers(vec![
        single(QuestionId::Goal, "muscle"),
        multiple(QuestionId::Diet, &["glutenfree"]),
    ]);

    let scored = engine.score(&catalog, &answers);

    let mut ids: Vec<u32> = scored.iter().map(|s| s.blend.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn output_is_sorted_non_increasing_with_stable_ties() {
    let engine = RecommendationEngine::default();
    // No answers: everything scores zero and catalog order must survive.
    let catalog = vec![diabetic_blend(), athlete_blend(), everyday_blend()];

    let scored = engine.score(&catalog, &answers(vec![]));

    assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));
    let ids: Vec<u32> = scored.iter().map(|s| s.blend.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn pregnancy_match_outranks_other_life_stages() {
    let engine = RecommendationEngine::default();
    let mut prenatal = blend(10, "Prenatal Nourish Mix");
    prenatal.target_demographic = "Pregnant and nursing mothers".to_string();
    let catalog = vec![everyday_blend(), prenatal];
    let answers = answers(vec![single(QuestionId::Age, "pregnancy")]);

    let scored = engine.score(&catalog, &answers);

    assert_eq!(scored[0].blend.id, 10);
    assert_eq!(scored[0].score, 20);
    assert_eq!(
        scored[0].match_reasons,
        vec!["Safe & nourishing for pregnancy/nursing".to_string()]
    );
}

#[test]
fn adult_allow_list_awards_the_general_match_without_a_reason() {
    let engine = RecommendationEngine::default();
    let plain = blend(22, "Classic Chakki Atta");
    let catalog = vec![plain];
    let answers = answers(vec![single(QuestionId::Age, "adult")]);

    let scored = engine.score(&catalog, &answers);

    assert_eq!(scored[0].score, 5);
    assert!(scored[0].match_reasons.is_empty());
}

#[test]
fn nutrient_reasons_interpolate_actual_values() {
    let engine = RecommendationEngine::default();
    let catalog = vec![athlete_blend()];
    let answers = answers(vec![multiple(QuestionId::Nutrients, &["protein", "fiber"])]);

    let scored = engine.score(&catalog, &answers);

    // Protein 22 qualifies, fiber 9 misses the >= 10 threshold.
    assert_eq!(scored[0].score, 12);
    assert_eq!(
        scored[0].match_reasons,
        vec!["Excellent protein source (22g)".to_string()]
    );
}

#[test]
fn reasons_are_capped_at_four_in_rule_order() {
    let engine = RecommendationEngine::default();
    let mut b = diabetic_blend();
    b.target_demographic = "Seniors with aging joints".to_string();
    b.fiber = 12.0;
    b.iron = 6.0;
    b.price = 88.0;
    let catalog = vec![b];
    let answers = answers(vec![
        single(QuestionId::Age, "senior"),
        single(QuestionId::Goal, "diabetes"),
        multiple(QuestionId::Diet, &["glutenfree"]),
        multiple(QuestionId::Nutrients, &["fiber", "iron", "lowgi"]),
        single(QuestionId::Budget, "budget"),
    ]);

    let scored = engine.score(&catalog, &answers);

    assert_eq!(scored[0].match_reasons.len(), 4);
    // First four firing rules, in section order 1 -> 3.
    assert_eq!(
        scored[0].match_reasons,
        vec![
            "Tailored for active aging & digestion".to_string(),
            "Low GI for blood sugar management".to_string(),
            "Certified Gluten-Free".to_string(),
            "High fiber content (12g)".to_string(),
        ]
    );
}

#[test]
fn mid_budget_token_contributes_nothing() {
    let engine = RecommendationEngine::default();
    let catalog = vec![everyday_blend()];

    let mid = engine.score(&catalog, &answers(vec![single(QuestionId::Budget, "mid")]));
    let none = engine.score(&catalog, &answers(vec![]));

    assert_eq!(mid[0].score, none[0].score);
}

#[test]
fn premium_preference_scores_without_a_reason() {
    let engine = RecommendationEngine::default();
    let catalog = vec![athlete_blend()];
    let answers = answers(vec![single(QuestionId::Budget, "premium")]);

    let scored = engine.score(&catalog, &answers);

    assert_eq!(scored[0].score, 5);
    assert!(scored[0].match_reasons.is_empty());
}

#[test]
fn custom_weights_flow_through_the_rubric() {
    let weights = ScoringWeights {
        goal_match: 40,
        ..ScoringWeights::default()
    };
    let engine = RecommendationEngine::new(weights);
    let catalog = vec![diabetic_blend()];
    let answers = answers(vec![single(QuestionId::Goal, "diabetes")]);

    let scored = engine.score(&catalog, &answers);

    assert_eq!(scored[0].score, 40);
}

#[test]
fn empty_catalog_scores_to_an_empty_list() {
    let engine = RecommendationEngine::default();
    let scored = engine.score(&[], &answers(vec![single(QuestionId::Goal, "diabetes")]));
    assert!(scored.is_empty());
}
