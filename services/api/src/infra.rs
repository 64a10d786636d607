use ancient_harvest::catalog::loader::CsvCatalog;
use ancient_harvest::catalog::{Blend, CatalogError, CatalogStore};
use ancient_harvest::config::CatalogConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog served straight from memory; the seed for demos and tests.
#[derive(Debug, Clone, Default)]
pub(crate) struct InMemoryCatalog {
    blends: Vec<Blend>,
}

impl InMemoryCatalog {
    pub(crate) fn new(blends: Vec<Blend>) -> Self {
        Self { blends }
    }
}

impl CatalogStore for InMemoryCatalog {
    fn all_blends(&self) -> Result<Vec<Blend>, CatalogError> {
        Ok(self.blends.clone())
    }
}

/// Hydrate from the configured CSV export when one is set, otherwise fall
/// back to the built-in demo catalog.
pub(crate) fn build_catalog(
    config: &CatalogConfig,
) -> Result<Arc<dyn CatalogStore>, std::io::Error> {
    match &config.csv_path {
        Some(path) => Ok(Arc::new(CsvCatalog::from_path(path)?)),
        None => Ok(Arc::new(InMemoryCatalog::new(demo_catalog()))),
    }
}

/// A representative slice of the production catalog so the service and the
/// CLI demos work with no external data.
pub(crate) fn demo_catalog() -> Vec<Blend> {
    fn blend(
        id: u32,
        name: &str,
        segment: &str,
        hero_claim: &str,
        composition: &str,
        target_demographic: &str,
        certifications: &str,
        price: f32,
        protein: f32,
        fiber: f32,
        iron: f32,
        calcium: f32,
        gi: f32,
    ) -> Blend {
        Blend {
            id,
            name: name.to_string(),
            segment: segment.to_string(),
            hero_claim: hero_claim.to_string(),
            composition: composition.to_string(),
            target_demographic: target_demographic.to_string(),
            certifications: certifications.to_string(),
            price,
            protein,
            fiber,
            iron,
            calcium,
            fat: 3.0,
            carbs: 58.0,
            gi,
            gl: 12.0,
            calories: 340.0,
            roti_quality_score: 8.0,
        }
    }

    vec![
        blend(
            1,
            "Diabetic Care Atta",
            "Diabetes Care",
            "Steady energy without sugar spikes",
            "Barley, methi, and bengal gram",
            "Adults managing blood sugar",
            "Certified Gluten-Free",
            120.0,
            14.0,
            12.0,
            4.2,
            95.0,
            42.0,
        ),
        blend(
            2,
            "Slim & Satiety Blend",
            "Weight Management",
            "High fiber that keeps you full longer",
            "Oats, millet, and psyllium husk",
            "Adults watching their weight",
            "Vegan",
            135.0,
            13.0,
            13.5,
            3.8,
            85.0,
            48.0,
        ),
        blend(
            3,
            "Kids Growth Formula",
            "Growth & Focus",
            "Brain food for busy school days",
            "Whole wheat and almond blend",
            "Growing children and students",
            "",
            128.0,
            15.0,
            8.0,
            4.5,
            140.0,
            52.0,
        ),
        blend(
            4,
            "PCOS Balance Blend",
            "PCOS Support",
            "Hormone-friendly slow carbs",
            "Millet and flax plant blend",
            "Women with hormonal concerns",
            "Vegan",
            145.0,
            13.0,
            11.0,
            5.5,
            130.0,
            47.0,
        ),
        blend(
            5,
            "Senior Joint Care",
            "Joint & Mobility",
            "Gentle grains for active aging",
            "Ragi and amaranth",
            "Seniors 60+ staying active",
            "Certified Gluten-Free",
            132.0,
            12.0,
            10.0,
            4.8,
            160.0,
            49.0,
        ),
        blend(
            6,
            "Heart Guard Mix",
            "Heart & Cardio Health",
            "Oat beta-glucan for cholesterol support",
            "Oats, barley, and flax",
            "Adults minding heart health",
            "",
            138.0,
            12.5,
            11.5,
            3.6,
            90.0,
            50.0,
        ),
        blend(
            7,
            "Athlete Power Mix",
            "Muscle & Athlete Fuel",
            "Fuel for training days",
            "Sprouted wheat and soy plant protein",
            "Active adults and athletes",
            "Plant Protein Verified",
            155.0,
            22.0,
            8.0,
            3.5,
            70.0,
            58.0,
        ),
        blend(
            22,
            "Everyday Multigrain",
            "Everyday Wellness",
            "The daily staple for the whole family",
            "Five grain classic mix",
            "All ages",
            "",
            85.0,
            11.0,
            9.0,
            3.0,
            80.0,
            55.0,
        ),
        blend(
            9,
            "Gluten-Free Millet Mix",
            "Celiac Friendly",
            "All the softness, none of the gluten",
            "Jowar, bajra, and ragi",
            "Family members with celiac needs",
            "Certified Gluten-Free, Vegan",
            142.0,
            11.5,
            9.5,
            4.0,
            110.0,
            51.0,
        ),
    ]
}
