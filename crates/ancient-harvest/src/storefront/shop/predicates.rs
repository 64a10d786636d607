//! Named boolean predicates classifying a blend against a filter token.
//!
//! The token table is externally visible product behavior: shop filter URLs
//! and saved selections reference these tokens, so the rules here are the
//! compatibility contract for existing catalog data. Matching is
//! case-insensitive substring containment on text fields and threshold
//! comparison on numeric fields. Unknown (category, token) pairs resolve to
//! `false` rather than erroring.

use super::FilterCategory;
use crate::catalog::Blend;

/// Does `blend` satisfy the named filter token?
pub fn matches(blend: &Blend, category: FilterCategory, token: &str) -> bool {
    match category {
        FilterCategory::Goals => matches_goal(blend, token),
        FilterCategory::Stages => matches_stage(blend, token),
        FilterCategory::Diet => matches_diet(blend, token),
        FilterCategory::Price => matches_price_band(blend, token),
    }
}

fn matches_goal(blend: &Blend, token: &str) -> bool {
    let segment = blend.segment.to_lowercase();
    match token {
        "diabetes" => contains_any(&segment, &["diabetes", "sugar"]),
        "weight" => contains_any(&segment, &["weight", "slim"]),
        "digest" => contains_any(&segment, &["digest", "gut", "ibs", "detox"]),
        "heart" => contains_any(&segment, &["heart", "cardio"]),
        "energy" => contains_any(&segment, &["energy", "muscle", "athlete", "sport"]),
        "wellness" => contains_any(&segment, &["wellness", "immunity", "sleep", "beauty"]),
        _ => false,
    }
}

fn matches_stage(blend: &Blend, token: &str) -> bool {
    let target = blend.target_demographic.to_lowercase();
    let segment = blend.segment.to_lowercase();
    match token {
        "kids" => contains_any(&target, &["child", "kid", "student", "adolescent"]),
        "women" => {
            contains_any(&target, &["women", "pregnan", "nursing", "mom"])
                || segment.contains("pcos")
        }
        // "men" must not fire on "women": every occurrence of "men" that is
        // part of "women" does not count.
        "men" => target.contains("men") && !target.contains("women"),
        "senior" => contains_any(&target, &["senior", "aging", "arthritis"]),
        "family" => contains_any(&target, &["family", "all ages"]) || segment.contains("everyday"),
        _ => false,
    }
}

fn matches_diet(blend: &Blend, token: &str) -> bool {
    let certifications = blend.certifications.to_lowercase();
    let segment = blend.segment.to_lowercase();
    match token {
        "gluten" => certifications.contains("gluten-free") || segment.contains("celiac"),
        "protein" => blend.protein >= 18.0,
        "vegan" => certifications.contains("vegan") || segment.contains("vegan"),
        "lowgi" => blend.gi < 50.0,
        _ => false,
    }
}

// Price bands are closed intervals with no gap and no overlap: the 100 and
// 140 boundaries both belong to "standard".
fn matches_price_band(blend: &Blend, token: &str) -> bool {
    match token {
        "budget" => blend.price < 100.0,
        "standard" => (100.0..=140.0).contains(&blend.price),
        "premium" => blend.price > 140.0,
        _ => false,
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
