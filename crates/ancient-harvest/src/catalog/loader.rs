//! CSV hydration for the blend catalog.
//!
//! The merchandising team maintains the catalog as a spreadsheet export, so
//! numeric columns arrive as loosely formatted strings ("₹85/kg", "12.5 g",
//! blank cells). Rows are normalized into [`Blend`] values and validated
//! against the catalog invariants before anything downstream sees them.

use super::{Blend, CatalogError, CatalogStore};
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A catalog hydrated once from a CSV export and served from memory.
#[derive(Debug, Clone)]
pub struct CsvCatalog {
    blends: Vec<Blend>,
}

impl CsvCatalog {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Ok(Self {
            blends: load_blends(reader)?,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, std::io::Error> {
        let file = File::open(path)?;
        CsvCatalog::from_reader(file)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    }

    pub fn len(&self) -> usize {
        self.blends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blends.is_empty()
    }
}

impl CatalogStore for CsvCatalog {
    fn all_blends(&self) -> Result<Vec<Blend>, CatalogError> {
        Ok(self.blends.clone())
    }
}

/// Parse and validate every blend row, preserving file order.
pub fn load_blends<R: Read>(reader: R) -> Result<Vec<Blend>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut blends = Vec::new();

    for record in csv_reader.deserialize::<BlendRow>() {
        let row = record?;
        let blend = row.into_blend()?;
        blend.validate()?;
        blends.push(blend);
    }

    Ok(blends)
}

#[derive(Debug, Deserialize)]
struct BlendRow {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "Blend Name")]
    name: String,
    #[serde(rename = "Segment", default)]
    segment: String,
    #[serde(rename = "Hero Claim", default)]
    hero_claim: String,
    #[serde(rename = "Composition", default)]
    composition: String,
    #[serde(rename = "Target Demographic", default)]
    target_demographic: String,
    #[serde(rename = "Certifications", default)]
    certifications: String,
    #[serde(rename = "Price", default, deserialize_with = "empty_string_as_none")]
    price: Option<String>,
    #[serde(rename = "Protein (g)", default, deserialize_with = "empty_string_as_none")]
    protein: Option<String>,
    #[serde(rename = "Fiber (g)", default, deserialize_with = "empty_string_as_none")]
    fiber: Option<String>,
    #[serde(rename = "Iron (mg)", default, deserialize_with = "empty_string_as_none")]
    iron: Option<String>,
    #[serde(rename = "Calcium (mg)", default, deserialize_with = "empty_string_as_none")]
    calcium: Option<String>,
    #[serde(rename = "Fat (g)", default, deserialize_with = "empty_string_as_none")]
    fat: Option<String>,
    #[serde(rename = "Carbs (g)", default, deserialize_with = "empty_string_as_none")]
    carbs: Option<String>,
    #[serde(rename = "GI", default, deserialize_with = "empty_string_as_none")]
    gi: Option<String>,
    #[serde(rename = "GL", default, deserialize_with = "empty_string_as_none")]
    gl: Option<String>,
    #[serde(rename = "Calories", default, deserialize_with = "empty_string_as_none")]
    calories: Option<String>,
    #[serde(
        rename = "Roti Quality Score",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    roti_quality_score: Option<String>,
}

impl BlendRow {
    fn into_blend(self) -> Result<Blend, CatalogError> {
        let price = match self.price.as_deref() {
            Some(raw) => extract_number(raw).ok_or_else(|| CatalogError::UnparseablePrice {
                id: self.id,
                raw: raw.to_string(),
            })?,
            None => 0.0,
        };

        Ok(Blend {
            id: self.id,
            name: self.name,
            segment: self.segment,
            hero_claim: self.hero_claim,
            composition: self.composition,
            target_demographic: self.target_demographic,
            certifications: self.certifications,
            price,
            protein: numeric_or_zero(self.protein.as_deref()),
            fiber: numeric_or_zero(self.fiber.as_deref()),
            iron: numeric_or_zero(self.iron.as_deref()),
            calcium: numeric_or_zero(self.calcium.as_deref()),
            fat: numeric_or_zero(self.fat.as_deref()),
            carbs: numeric_or_zero(self.carbs.as_deref()),
            gi: numeric_or_zero(self.gi.as_deref()),
            gl: numeric_or_zero(self.gl.as_deref()),
            calories: numeric_or_zero(self.calories.as_deref()),
            roti_quality_score: numeric_or_zero(self.roti_quality_score.as_deref()),
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn numeric_or_zero(value: Option<&str>) -> f32 {
    value.and_then(extract_number).unwrap_or(0.0)
}

/// Pull the first decimal number out of a loosely formatted cell, so
/// "₹85/kg" yields 85.0 and "12.5 g" yields 12.5.
fn extract_number(raw: &str) -> Option<f32> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let digits: String = raw[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse::<f32>().ok()
}
