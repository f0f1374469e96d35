//! Repair of raw stored records into canonical [`Recipe`] values.
//!
//! The store has no schema versioning, so anything read back from disk is
//! treated as untrusted: missing or mistyped fields are replaced with
//! defaults, never rejected, and unrecognized fields are kept verbatim so
//! they survive a load/save round trip. Normalization is idempotent.

use serde_json::{Map, Value};

use crate::types::{Recipe, RecipeType, Review};

/// Coerce a raw value into a recipe satisfying every data-model invariant:
/// `type` falls back to `Veg` unless it is exactly one of the two known
/// labels, `reviews` falls back to empty, `rating`/`ratingCount` fall back
/// to zero, and a falsy `videoUrl` becomes `None`.
pub fn normalize_recipe(value: Value) -> Recipe {
    let mut map = match value {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    let recipe_type = match map.remove("type") {
        Some(Value::String(s)) => RecipeType::parse(&s).unwrap_or_default(),
        _ => RecipeType::default(),
    };

    let reviews = match map.remove("reviews") {
        Some(Value::Array(items)) => items.into_iter().map(normalize_review).collect(),
        _ => Vec::new(),
    };

    let rating = map.remove("rating").and_then(|v| v.as_f64()).unwrap_or(0.0);
    let rating_count = map
        .remove("ratingCount")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    Recipe {
        id: take_string(&mut map, "id"),
        title: take_string(&mut map, "title"),
        description: take_string(&mut map, "description"),
        ingredients: take_string_list(&mut map, "ingredients"),
        steps: take_string_list(&mut map, "steps"),
        prep_time: take_number(&mut map, "prepTime"),
        cook_time: take_number(&mut map, "cookTime"),
        difficulty: take_string(&mut map, "difficulty"),
        recipe_type,
        image_url: take_nonempty_string(&mut map, "imageUrl"),
        video_url: take_nonempty_string(&mut map, "videoUrl"),
        rating,
        rating_count,
        reviews,
        created_at: take_string(&mut map, "createdAt"),
        extra: map,
    }
}

/// Normalize every element of a stored collection.
pub fn normalize_recipes(values: Vec<Value>) -> Vec<Recipe> {
    values.into_iter().map(normalize_recipe).collect()
}

fn normalize_review(value: Value) -> Review {
    let mut map = match value {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    let rating = map
        .remove("rating")
        .and_then(|v| v.as_u64())
        .map(|n| n.min(u8::MAX as u64) as u8)
        .unwrap_or(0);

    Review {
        id: take_string(&mut map, "id"),
        rating,
        text: take_nonempty_string(&mut map, "text"),
        created_at: take_string(&mut map, "createdAt"),
        extra: map,
    }
}

fn take_string(map: &mut Map<String, Value>, key: &str) -> String {
    match map.remove(key) {
        Some(Value::String(s)) => s,
        _ => String::new(),
    }
}

fn take_nonempty_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

fn take_number(map: &mut Map<String, Value>, key: &str) -> f64 {
    map.remove(key).and_then(|v| v.as_f64()).unwrap_or(0.0)
}

fn take_string_list(map: &mut Map<String, Value>, key: &str) -> Vec<String> {
    match map.remove(key) {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
