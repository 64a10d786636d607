//! Blend catalog domain model and hydration.

pub mod loader;

use serde::{Deserialize, Serialize};

/// A named flour blend: the catalog entity every engine in this crate
/// consumes. Created, updated, and deleted only by the external catalog
/// management collaborator; the engines treat it as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blend {
    pub id: u32,
    pub name: String,
    /// Free-text health-goal label, e.g. "Diabetes Care" or "Everyday Nutrition".
    pub segment: String,
    /// One-sentence marketing claim shown on product cards.
    pub hero_claim: String,
    /// Free-text grain composition and sourcing notes.
    pub composition: String,
    /// Free-text description of the intended customer group.
    pub target_demographic: String,
    /// Free-text certification string, e.g. "Certified Gluten-Free, Vegan".
    pub certifications: String,
    /// Price in rupees per kilogram.
    pub price: f32,
    /// Protein per 100g serving, grams.
    pub protein: f32,
    /// Fiber per 100g serving, grams.
    pub fiber: f32,
    /// Iron per 100g serving, milligrams.
    pub iron: f32,
    /// Calcium per 100g serving, milligrams.
    pub calcium: f32,
    pub fat: f32,
    pub carbs: f32,
    /// Glycemic index.
    pub gi: f32,
    /// Glycemic load.
    pub gl: f32,
    pub calories: f32,
    /// Proprietary 0-10 rating of cooking performance.
    pub roti_quality_score: f32,
}

impl Blend {
    /// Catalog invariants enforced at hydration time: positive price,
    /// non-negative nutritional attributes.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !(self.price > 0.0) {
            return Err(CatalogError::InvalidBlend {
                id: self.id,
                field: "price",
            });
        }

        let non_negative: [(&str, f32); 8] = [
            ("protein", self.protein),
            ("fiber", self.fiber),
            ("iron", self.iron),
            ("calcium", self.calcium),
            ("fat", self.fat),
            ("carbs", self.carbs),
            ("gi", self.gi),
            ("gl", self.gl),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(CatalogError::InvalidBlend { id: self.id, field });
            }
        }

        Ok(())
    }
}

/// Read-only catalog seam so engines, services, and tests can be supplied
/// with any backing store (in-memory seed, CSV export, database adapter).
pub trait CatalogStore: Send + Sync {
    /// The full catalog, assumed loaded before any engine is invoked.
    fn all_blends(&self) -> Result<Vec<Blend>, CatalogError>;
}

/// Error enumeration for catalog hydration failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("blend {id} has an invalid '{field}' value")]
    InvalidBlend { id: u32, field: &'static str },
    #[error("malformed catalog row: {0}")]
    MalformedRow(#[from] csv::Error),
    #[error("blend {id}: unparseable price string '{raw}'")]
    UnparseablePrice { id: u32, raw: String },
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}
