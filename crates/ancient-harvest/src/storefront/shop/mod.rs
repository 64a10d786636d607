//! Shop-page filtering: named predicates over blends plus the combinator
//! that applies a user's filter selection to the catalog.

mod filter;
mod predicates;

pub use filter::filter_blends;
pub use predicates::matches;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The four filter groups shown in the shop sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCategory {
    Goals,
    Stages,
    Diet,
    Price,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 4] = [
        FilterCategory::Goals,
        FilterCategory::Stages,
        FilterCategory::Diet,
        FilterCategory::Price,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            FilterCategory::Goals => "goals",
            FilterCategory::Stages => "stages",
            FilterCategory::Diet => "diet",
            FilterCategory::Price => "price",
        }
    }
}

/// The user's current shop-page filter state. Rebuilt on every interaction;
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub goals: BTreeSet<String>,
    #[serde(default)]
    pub stages: BTreeSet<String>,
    #[serde(default)]
    pub diet: BTreeSet<String>,
    #[serde(default)]
    pub price: BTreeSet<String>,
    #[serde(default)]
    pub search: String,
}

impl FilterSelection {
    pub fn tokens(&self, category: FilterCategory) -> &BTreeSet<String> {
        match category {
            FilterCategory::Goals => &self.goals,
            FilterCategory::Stages => &self.stages,
            FilterCategory::Diet => &self.diet,
            FilterCategory::Price => &self.price,
        }
    }

    pub fn toggle(&mut self, category: FilterCategory, token: &str) {
        let tokens = match category {
            FilterCategory::Goals => &mut self.goals,
            FilterCategory::Stages => &mut self.stages,
            FilterCategory::Diet => &mut self.diet,
            FilterCategory::Price => &mut self.price,
        };

        if !tokens.remove(token) {
            tokens.insert(token.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && FilterCategory::ALL
                .iter()
                .all(|category| self.tokens(*category).is_empty())
    }
}
