use crate::catalog::Blend;
use crate::storefront::quiz::model::{AnswerMap, AnswerValue, QuestionId};

pub(super) fn blend(id: u32, name: &str) -> Blend {
    Blend {
        id,
        name: name.to_string(),
        segment: String::new(),
        hero_claim: String::new(),
        composition: String::new(),
        target_demographic: String::new(),
        certifications: String::new(),
        price: 110.0,
        protein: 12.0,
        fiber: 9.0,
        iron: 3.0,
        calcium: 80.0,
        fat: 2.5,
        carbs: 60.0,
        gi: 55.0,
        gl: 14.0,
        calories: 340.0,
        roti_quality_score: 7.0,
    }
}

pub(super) fn diabetic_blend() -> Blend {
    let mut b = blend(1, "Diabetic Care Atta");
    b.segment = "Diabetes Care".to_string();
    b.gi = 42.0;
    b.certifications = "Certified Gluten-Free".to_string();
    b
}

pub(super) fn athlete_blend() -> Blend {
    let mut b = blend(2, "Athlete Power Mix");
    b.segment = "Muscle & Athlete Fuel".to_string();
    b.protein = 22.0;
    b.price = 155.0;
    b
}

pub(super) fn everyday_blend() -> Blend {
    let mut b = blend(3, "Everyday Multigrain");
    b.segment = "Everyday Wellness".to_string();
    b.target_demographic = "All ages".to_string();
    b.price = 85.0;
    b
}

pub(super) fn single(id: QuestionId, token: &str) -> (QuestionId, AnswerValue) {
    (id, AnswerValue::Single(token.to_string()))
}

pub(super) fn multiple(id: QuestionId, tokens: &[&str]) -> (QuestionId, AnswerValue) {
    (
        id,
        AnswerValue::Multiple(tokens.iter().map(|t| t.to_string()).collect()),
    )
}

pub(super) fn answers(entries: Vec<(QuestionId, AnswerValue)>) -> AnswerMap {
    entries.into_iter().collect()
}
