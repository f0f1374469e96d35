//! Folding a new review into a recipe's running average.

use serde_json::Map;

use crate::ids::generate_id;
use crate::types::{now_timestamp, Recipe, Review};

/// Round to two decimal places, matching the stored precision of the
/// running average.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fold a star rating into the recipe's average and prepend the review.
/// The caller is responsible for validating `stars` (1 to 5) and persisting
/// the collection afterwards.
pub fn add_review(recipe: &mut Recipe, stars: u8, text: Option<String>) {
    let new_count = recipe.rating_count + 1;
    let new_total = recipe.rating * recipe.rating_count as f64 + stars as f64;
    recipe.rating = round2(new_total / new_count as f64);
    recipe.rating_count = new_count;

    let review = Review {
        id: generate_id(),
        rating: stars,
        text,
        created_at: now_timestamp(),
        extra: Map::new(),
    };
    recipe.reviews.insert(0, review);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_recipe;
    use serde_json::json;

    #[test]
    fn test_round2() {
        assert_eq!(round2(4.333333), 4.33);
        assert_eq!(round2(4.666666), 4.67);
        assert_eq!(round2(5.0), 5.0);
    }

    #[test]
    fn test_first_review_sets_average() {
        let mut recipe = normalize_recipe(json!({ "id": "a" }));
        add_review(&mut recipe, 4, None);
        assert_eq!(recipe.rating, 4.0);
        assert_eq!(recipe.rating_count, 1);
        assert_eq!(recipe.reviews.len(), 1);
    }

    #[test]
    fn test_review_updates_running_average() {
        let mut recipe = normalize_recipe(json!({
            "id": "a",
            "rating": 4.0,
            "ratingCount": 1,
            "reviews": [{ "id": "r1", "rating": 4, "createdAt": "t" }],
        }));
        add_review(&mut recipe, 5, Some("Great".to_string()));

        assert_eq!(recipe.rating, 4.5);
        assert_eq!(recipe.rating_count, 2);
        assert_eq!(recipe.reviews.len(), 2);
        // newest first
        assert_eq!(recipe.reviews[0].rating, 5);
        assert_eq!(recipe.reviews[0].text.as_deref(), Some("Great"));
        assert_eq!(recipe.reviews[1].id, "r1");
    }

    #[test]
    fn test_average_tracks_mean_of_all_submissions() {
        let mut recipe = normalize_recipe(json!({ "id": "a" }));
        let stars = [5u8, 3, 4, 2, 5, 1];
        for s in stars {
            add_review(&mut recipe, s, None);
        }
        let mean = stars.iter().map(|&s| s as f64).sum::<f64>() / stars.len() as f64;
        assert_eq!(recipe.rating, round2(mean));
        assert_eq!(recipe.rating_count as usize, stars.len());
    }

    #[test]
    fn test_reviews_get_distinct_ids() {
        let mut recipe = normalize_recipe(json!({ "id": "a" }));
        add_review(&mut recipe, 5, None);
        add_review(&mut recipe, 4, None);
        assert_ne!(recipe.reviews[0].id, recipe.reviews[1].id);
    }
}
