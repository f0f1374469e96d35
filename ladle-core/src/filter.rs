//! Deriving the displayed subset of the collection.

use std::cmp::Ordering;

use crate::types::{Recipe, RecipeType};

/// The active filter criteria. `None` means "all" for the optional ones;
/// an empty search string matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub search: String,
    pub difficulty: Option<String>,
    pub max_prep_time: Option<f64>,
    pub recipe_type: Option<RecipeType>,
}

impl Filters {
    /// All four predicates must hold for a recipe to be kept.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if !self.search.is_empty() {
            let query = self.search.to_lowercase();
            if !recipe.title.to_lowercase().contains(&query) {
                return false;
            }
        }

        if let Some(difficulty) = &self.difficulty {
            if recipe.difficulty != *difficulty {
                return false;
            }
        }

        if let Some(max_prep_time) = self.max_prep_time {
            if recipe.prep_time > max_prep_time {
                return false;
            }
        }

        if let Some(recipe_type) = self.recipe_type {
            if recipe.recipe_type != recipe_type {
                return false;
            }
        }

        true
    }
}

/// Filter the collection, then order it: highest rating first, ties broken
/// by newest creation time, then by identifier so the order is fully
/// deterministic.
pub fn filter_and_sort<'a>(recipes: &'a [Recipe], filters: &Filters) -> Vec<&'a Recipe> {
    let mut kept: Vec<&Recipe> = recipes.iter().filter(|r| filters.matches(r)).collect();
    kept.sort_by(compare);
    kept
}

fn compare(a: &&Recipe, b: &&Recipe) -> Ordering {
    b.rating
        .total_cmp(&a.rating)
        .then_with(|| b.created_at_millis().cmp(&a.created_at_millis()))
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_recipe;
    use serde_json::json;

    fn recipe(id: &str, title: &str, difficulty: &str, prep: f64, kind: &str) -> Recipe {
        normalize_recipe(json!({
            "id": id,
            "title": title,
            "difficulty": difficulty,
            "prepTime": prep,
            "type": kind,
        }))
    }

    fn titles(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn test_empty_filters_keep_everything() {
        let recipes = vec![
            recipe("a", "Soup", "Easy", 10.0, "Veg"),
            recipe("b", "Stew", "Hard", 30.0, "Non-Veg"),
        ];
        let kept = filter_and_sort(&recipes, &Filters::default());
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let recipes = vec![
            recipe("a", "Chicken Biryani", "Hard", 20.0, "Non-Veg"),
            recipe("b", "Cheese Omelette", "Easy", 5.0, "Non-Veg"),
        ];
        let filters = Filters {
            search: "BIRYANI".to_string(),
            ..Filters::default()
        };
        assert_eq!(titles(&filter_and_sort(&recipes, &filters)), ["Chicken Biryani"]);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let recipes = vec![
            recipe("a", "Veg Pasta", "Easy", 10.0, "Veg"),
            recipe("b", "Veg Curry", "Hard", 10.0, "Veg"),
            recipe("c", "Veg Salad", "Easy", 40.0, "Veg"),
            recipe("d", "Chicken Pasta", "Easy", 10.0, "Non-Veg"),
        ];
        let filters = Filters {
            search: "veg".to_string(),
            difficulty: Some("Easy".to_string()),
            max_prep_time: Some(30.0),
            recipe_type: Some(RecipeType::Veg),
        };
        // only "Veg Pasta" independently satisfies all four predicates
        assert_eq!(titles(&filter_and_sort(&recipes, &filters)), ["Veg Pasta"]);
    }

    #[test]
    fn test_max_prep_time_is_inclusive() {
        let recipes = vec![recipe("a", "Soup", "Easy", 30.0, "Veg")];
        let filters = Filters {
            max_prep_time: Some(30.0),
            ..Filters::default()
        };
        assert_eq!(filter_and_sort(&recipes, &filters).len(), 1);
    }

    #[test]
    fn test_sort_by_rating_then_recency() {
        let mut older = recipe("a", "Older", "Easy", 5.0, "Veg");
        older.rating = 4.5;
        older.created_at = "2024-01-01T00:00:00.000Z".to_string();

        let mut newer = recipe("b", "Newer", "Easy", 5.0, "Veg");
        newer.rating = 4.5;
        newer.created_at = "2024-06-01T00:00:00.000Z".to_string();

        let mut best = recipe("c", "Best", "Easy", 5.0, "Veg");
        best.rating = 5.0;
        best.created_at = "2020-01-01T00:00:00.000Z".to_string();

        let recipes = vec![older, newer, best];
        let sorted = filter_and_sort(&recipes, &Filters::default());
        assert_eq!(titles(&sorted), ["Best", "Newer", "Older"]);
    }

    #[test]
    fn test_unparseable_timestamp_sorts_as_epoch() {
        let mut dated = recipe("a", "Dated", "Easy", 5.0, "Veg");
        dated.created_at = "2024-01-01T00:00:00.000Z".to_string();

        let undated = recipe("b", "Undated", "Easy", 5.0, "Veg");

        let recipes = vec![undated, dated];
        let sorted = filter_and_sort(&recipes, &Filters::default());
        assert_eq!(titles(&sorted), ["Dated", "Undated"]);
    }

    #[test]
    fn test_identifier_breaks_remaining_ties() {
        let a = recipe("aaa", "First", "Easy", 5.0, "Veg");
        let b = recipe("bbb", "Second", "Easy", 5.0, "Veg");

        let recipes = vec![b, a];
        let sorted = filter_and_sort(&recipes, &Filters::default());
        assert_eq!(titles(&sorted), ["First", "Second"]);
    }
}
