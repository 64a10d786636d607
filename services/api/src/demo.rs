use crate::infra::build_catalog;
use ancient_harvest::catalog::Blend;
use ancient_harvest::config::CatalogConfig;
use ancient_harvest::error::AppError;
use ancient_harvest::storefront::quiz::{
    AnswerMap, AnswerValue, QuestionId, RecommendationEngine, ScoredBlend,
};
use ancient_harvest::storefront::shop::{filter_blends, FilterCategory, FilterSelection};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// Who the blend is for: child, adult, woman, pregnancy, senior
    #[arg(long)]
    pub(crate) age: Option<String>,
    /// Primary health goal: diabetes, weight, muscle, digestion, heart, energy, general
    #[arg(long)]
    pub(crate) goal: Option<String>,
    /// Dietary restrictions (repeatable): glutenfree, vegan, none
    #[arg(long)]
    pub(crate) diet: Vec<String>,
    /// Requested nutrient boosts (repeatable): protein, fiber, iron, lowgi
    #[arg(long)]
    pub(crate) nutrients: Vec<String>,
    /// Price preference: budget, mid, premium
    #[arg(long)]
    pub(crate) budget: Option<String>,
    /// Score a CSV catalog export instead of the demo seed
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// How many ranked blends to print
    #[arg(long, default_value_t = 3)]
    pub(crate) top: usize,
}

#[derive(Args, Debug, Default)]
pub(crate) struct FilterArgs {
    /// Health-goal tokens (repeatable): diabetes, weight, digest, heart, energy, wellness
    #[arg(long)]
    pub(crate) goals: Vec<String>,
    /// Life-stage tokens (repeatable): kids, women, men, senior, family
    #[arg(long)]
    pub(crate) stages: Vec<String>,
    /// Dietary tokens (repeatable): gluten, protein, vegan, lowgi
    #[arg(long)]
    pub(crate) diet: Vec<String>,
    /// Price-band tokens (repeatable): budget, standard, premium
    #[arg(long)]
    pub(crate) price: Vec<String>,
    /// Free-text search over name, hero claim, and segment
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Filter a CSV catalog export instead of the demo seed
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let blends = load_catalog(args.catalog.clone())?;
    let answers = answers_from_args(&args);

    let ranked = RecommendationEngine::default().score(&blends, &answers);

    println!("Blend recommendation ({} blends scored)", ranked.len());
    match ranked.first() {
        Some(top) => render_scored(top, "Top match"),
        None => println!("  catalog is empty, nothing to recommend"),
    }
    for runner_up in ranked.iter().skip(1).take(args.top.saturating_sub(1)) {
        render_scored(runner_up, "Runner-up");
    }

    Ok(())
}

pub(crate) fn run_filter(args: FilterArgs) -> Result<(), AppError> {
    let blends = load_catalog(args.catalog.clone())?;
    let selection = selection_from_args(&args);

    let filtered = filter_blends(&blends, &selection);

    println!("{} of {} blends match", filtered.len(), blends.len());
    for blend in &filtered {
        render_blend(blend);
    }

    Ok(())
}

fn load_catalog(csv_path: Option<PathBuf>) -> Result<Vec<Blend>, AppError> {
    let catalog = build_catalog(&CatalogConfig { csv_path })?;
    Ok(catalog.all_blends()?)
}

fn answers_from_args(args: &RecommendArgs) -> AnswerMap {
    let mut answers = AnswerMap::new();

    let singles = [
        (QuestionId::Age, &args.age),
        (QuestionId::Goal, &args.goal),
        (QuestionId::Budget, &args.budget),
    ];
    for (id, value) in singles {
        if let Some(token) = value {
            answers.insert(id, AnswerValue::Single(token.clone()));
        }
    }

    if !args.diet.is_empty() {
        answers.insert(QuestionId::Diet, AnswerValue::Multiple(args.diet.clone()));
    }
    if !args.nutrients.is_empty() {
        answers.insert(
            QuestionId::Nutrients,
            AnswerValue::Multiple(args.nutrients.clone()),
        );
    }

    answers
}

fn selection_from_args(args: &FilterArgs) -> FilterSelection {
    let mut selection = FilterSelection::default();

    for (category, tokens) in [
        (FilterCategory::Goals, &args.goals),
        (FilterCategory::Stages, &args.stages),
        (FilterCategory::Diet, &args.diet),
        (FilterCategory::Price, &args.price),
    ] {
        for token in tokens {
            selection.toggle(category, token);
        }
    }

    if let Some(search) = &args.search {
        selection.search = search.clone();
    }

    selection
}

fn render_scored(scored: &ScoredBlend, heading: &str) {
    println!(
        "\n{heading}: {} (score {})",
        scored.blend.name, scored.score
    );
    println!("  segment: {}", scored.blend.segment);
    println!("  price: ₹{}/kg", scored.blend.price);
    if scored.match_reasons.is_empty() {
        println!("  no specific match reasons");
    }
    for reason in &scored.match_reasons {
        println!("  - {reason}");
    }
}

fn render_blend(blend: &Blend) {
    println!(
        "  [{}] {} | {} (₹{}/kg)",
        blend.id, blend.name, blend.segment, blend.price
    );
}
