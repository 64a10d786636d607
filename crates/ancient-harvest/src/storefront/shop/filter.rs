//! The filter combinator applied on every shop-page interaction.

use super::{matches, FilterCategory, FilterSelection};
use crate::catalog::Blend;

/// Apply `selection` to the catalog: free-text search AND every non-empty
/// category must pass, where a category passes if any of its selected
/// tokens matches (OR within, AND across). Catalog order is preserved and
/// no re-ranking happens here.
pub fn filter_blends(blends: &[Blend], selection: &FilterSelection) -> Vec<Blend> {
    // The raw search term is matched as-is (no trimming): only the empty
    // string is exempt, so a padded term must appear literally.
    let needle = selection.search.to_lowercase();

    blends
        .iter()
        .filter(|blend| matches_search(blend, &needle) && matches_categories(blend, selection))
        .cloned()
        .collect()
}

fn matches_search(blend: &Blend, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    blend.name.to_lowercase().contains(needle)
        || blend.hero_claim.to_lowercase().contains(needle)
        || blend.segment.to_lowercase().contains(needle)
}

fn matches_categories(blend: &Blend, selection: &FilterSelection) -> bool {
    FilterCategory::ALL.iter().all(|category| {
        let tokens = selection.tokens(*category);
        // A category with nothing selected imposes no constraint.
        tokens.is_empty()
            || tokens
                .iter()
                .any(|token| matches(blend, *category, token))
    })
}
