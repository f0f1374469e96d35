use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The fixed difficulty levels a recipe can have.
pub const DIFFICULTIES: &[&str] = &["Easy", "Medium", "Hard"];

/// Whether a recipe is vegetarian or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecipeType {
    #[default]
    Veg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
}

impl RecipeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeType::Veg => "Veg",
            RecipeType::NonVeg => "Non-Veg",
        }
    }

    /// Parse the stored representation. Anything other than the two known
    /// labels is rejected so the normalizer can fall back to the default.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Veg" => Some(RecipeType::Veg),
            "Non-Veg" => Some(RecipeType::NonVeg),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecipeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single star rating with optional free text, owned by one recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub created_at: String,
    /// Fields we don't know about are carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The persisted unit: a dish, its metadata, ingredients, steps, and
/// accumulated ratings. Serialized field names match the stored JSON
/// document (camelCase, `type` for the veg/non-veg flag).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub prep_time: f64,
    #[serde(default)]
    pub cook_time: f64,
    #[serde(default)]
    pub difficulty: String,
    #[serde(rename = "type", default)]
    pub recipe_type: RecipeType,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub rating_count: u32,
    /// Newest first.
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub created_at: String,
    /// Fields we don't know about are carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recipe {
    /// Creation time in epoch milliseconds; unparseable timestamps sort
    /// as epoch 0.
    pub fn created_at_millis(&self) -> i64 {
        DateTime::parse_from_rfc3339(&self.created_at)
            .map(|t| t.timestamp_millis())
            .unwrap_or(0)
    }

    pub fn total_time(&self) -> f64 {
        self.prep_time + self.cook_time
    }
}

/// Current time as an RFC 3339 timestamp with millisecond precision.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
