//! Recipe form parsing and validation.
//!
//! The form carries the raw text the user entered. Validation collects
//! every violated rule rather than stopping at the first, so the user can
//! fix everything in one pass.

use serde_json::Map;

use crate::ids::generate_id;
use crate::types::{now_timestamp, Recipe, RecipeType};

/// Raw form input, exactly as entered. Ingredients and steps are
/// newline-separated blobs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeForm {
    /// Present in edit mode, absent in create mode.
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub recipe_type: String,
    pub prep_time: String,
    pub cook_time: String,
    pub image_url: String,
    pub video_url: String,
    pub ingredients: String,
    pub steps: String,
}

impl RecipeForm {
    /// Pre-populate every field from an existing recipe for editing.
    pub fn for_edit(recipe: &Recipe) -> Self {
        Self {
            id: Some(recipe.id.clone()),
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            difficulty: recipe.difficulty.clone(),
            recipe_type: recipe.recipe_type.as_str().to_string(),
            prep_time: fmt_minutes(recipe.prep_time),
            cook_time: fmt_minutes(recipe.cook_time),
            image_url: recipe.image_url.clone().unwrap_or_default(),
            video_url: recipe.video_url.clone().unwrap_or_default(),
            ingredients: recipe.ingredients.join("\n"),
            steps: recipe.steps.join("\n"),
        }
    }
}

/// A validated recipe draft, ready to be applied to the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub recipe_type: RecipeType,
    pub prep_time: f64,
    pub cook_time: f64,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// Validate the form, returning either a draft or every violation found.
pub fn validate_form(form: &RecipeForm) -> Result<RecipeDraft, Vec<String>> {
    let mut errors = Vec::new();

    let title = form.title.trim().to_string();
    if title.is_empty() {
        errors.push("Title is required.".to_string());
    }

    let description = form.description.trim().to_string();
    if description.is_empty() {
        errors.push("Description is required.".to_string());
    }

    let difficulty = form.difficulty.trim().to_string();
    if difficulty.is_empty() {
        errors.push("Difficulty is required.".to_string());
    }

    let recipe_type = RecipeType::parse(form.recipe_type.trim());
    if recipe_type.is_none() {
        errors.push("Type is required.".to_string());
    }

    let prep_time = parse_minutes(&form.prep_time);
    if prep_time.is_none() {
        errors.push("Prep time invalid.".to_string());
    }

    let cook_time = parse_minutes(&form.cook_time);
    if cook_time.is_none() {
        errors.push("Cook time invalid.".to_string());
    }

    let ingredients = split_lines(&form.ingredients);
    if ingredients.is_empty() {
        errors.push("At least one ingredient required.".to_string());
    }

    let steps = split_lines(&form.steps);
    if steps.is_empty() {
        errors.push("At least one step required.".to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(RecipeDraft {
        id: form.id.clone().filter(|id| !id.is_empty()),
        title,
        description,
        difficulty,
        recipe_type: recipe_type.unwrap_or_default(),
        prep_time: prep_time.unwrap_or(0.0),
        cook_time: cook_time.unwrap_or(0.0),
        image_url: trimmed_or_none(&form.image_url),
        video_url: trimmed_or_none(&form.video_url),
        ingredients,
        steps,
    })
}

/// Apply a validated draft: merge in place when the draft carries the id
/// of an existing recipe (ratings and reviews are preserved), otherwise
/// prepend a brand-new recipe. A stale id is a silent no-op.
pub fn apply_draft(recipes: &mut Vec<Recipe>, draft: RecipeDraft) {
    match draft.id {
        Some(ref id) => {
            if let Some(existing) = recipes.iter_mut().find(|r| r.id == *id) {
                existing.title = draft.title;
                existing.description = draft.description;
                existing.difficulty = draft.difficulty;
                existing.recipe_type = draft.recipe_type;
                existing.prep_time = draft.prep_time;
                existing.cook_time = draft.cook_time;
                existing.image_url = draft.image_url;
                existing.video_url = draft.video_url;
                existing.ingredients = draft.ingredients;
                existing.steps = draft.steps;
            }
        }
        None => {
            recipes.insert(
                0,
                Recipe {
                    id: generate_id(),
                    title: draft.title,
                    description: draft.description,
                    ingredients: draft.ingredients,
                    steps: draft.steps,
                    prep_time: draft.prep_time,
                    cook_time: draft.cook_time,
                    difficulty: draft.difficulty,
                    recipe_type: draft.recipe_type,
                    image_url: draft.image_url,
                    video_url: draft.video_url,
                    rating: 0.0,
                    rating_count: 0,
                    reviews: Vec::new(),
                    created_at: now_timestamp(),
                    extra: Map::new(),
                },
            );
        }
    }
}

/// Split a textarea-style blob on line breaks, trimming each line and
/// discarding blank ones.
pub fn split_lines(blob: &str) -> Vec<String> {
    blob.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Empty input counts as zero minutes; anything else must parse as a
/// non-negative number.
fn parse_minutes(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|m| *m >= 0.0)
}

fn trimmed_or_none(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Format minutes the way they are entered: whole numbers without a
/// trailing fraction.
pub fn fmt_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{}", minutes as i64)
    } else {
        format!("{minutes}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RecipeForm {
        RecipeForm {
            id: None,
            title: "Toast".to_string(),
            description: "Crispy bread.".to_string(),
            difficulty: "Easy".to_string(),
            recipe_type: "Veg".to_string(),
            prep_time: "2".to_string(),
            cook_time: "3".to_string(),
            image_url: String::new(),
            video_url: String::new(),
            ingredients: "bread\nbutter".to_string(),
            steps: "toast the bread\nspread the butter".to_string(),
        }
    }

    #[test]
    fn test_valid_form_produces_draft() {
        let draft = validate_form(&valid_form()).unwrap();
        assert_eq!(draft.title, "Toast");
        assert_eq!(draft.prep_time, 2.0);
        assert_eq!(draft.ingredients, vec!["bread", "butter"]);
        assert_eq!(draft.image_url, None);
    }

    #[test]
    fn test_all_violations_are_collected() {
        let form = RecipeForm {
            prep_time: "abc".to_string(),
            cook_time: "-5".to_string(),
            ..RecipeForm::default()
        };
        let errors = validate_form(&form).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Title is required.",
                "Description is required.",
                "Difficulty is required.",
                "Type is required.",
                "Prep time invalid.",
                "Cook time invalid.",
                "At least one ingredient required.",
                "At least one step required.",
            ]
        );
    }

    #[test]
    fn test_empty_ingredients_blob_is_reported() {
        let form = RecipeForm {
            ingredients: "\n  \n\n".to_string(),
            ..valid_form()
        };
        let errors = validate_form(&form).unwrap_err();
        assert!(errors.contains(&"At least one ingredient required.".to_string()));
    }

    #[test]
    fn test_blank_lines_are_discarded() {
        assert_eq!(split_lines("a\n\n  b  \n\nc\n"), vec!["a", "b", "c"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_empty_minutes_count_as_zero() {
        let form = RecipeForm {
            prep_time: String::new(),
            cook_time: "  ".to_string(),
            ..valid_form()
        };
        let draft = validate_form(&form).unwrap();
        assert_eq!(draft.prep_time, 0.0);
        assert_eq!(draft.cook_time, 0.0);
    }

    #[test]
    fn test_create_prepends_with_fresh_identity() {
        let mut recipes = Vec::new();
        apply_draft(&mut recipes, validate_form(&valid_form()).unwrap());
        apply_draft(
            &mut recipes,
            validate_form(&RecipeForm {
                title: "Second".to_string(),
                ..valid_form()
            })
            .unwrap(),
        );

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].title, "Second");
        assert!(!recipes[0].id.is_empty());
        assert_ne!(recipes[0].id, recipes[1].id);
        assert_eq!(recipes[0].rating, 0.0);
        assert!(recipes[0].reviews.is_empty());
    }

    #[test]
    fn test_edit_merges_in_place_preserving_ratings() {
        let mut recipes = Vec::new();
        apply_draft(&mut recipes, validate_form(&valid_form()).unwrap());
        let id = recipes[0].id.clone();
        let created_at = recipes[0].created_at.clone();
        crate::rating::add_review(&mut recipes[0], 5, None);

        let mut form = RecipeForm::for_edit(&recipes[0]);
        form.title = "Fancy Toast".to_string();
        let draft = validate_form(&form).unwrap();
        apply_draft(&mut recipes, draft);

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Fancy Toast");
        assert_eq!(recipes[0].id, id);
        assert_eq!(recipes[0].created_at, created_at);
        assert_eq!(recipes[0].rating, 5.0);
        assert_eq!(recipes[0].reviews.len(), 1);
    }

    #[test]
    fn test_edit_with_stale_id_is_a_no_op() {
        let mut recipes = Vec::new();
        let mut form = valid_form();
        form.id = Some("gone".to_string());
        apply_draft(&mut recipes, validate_form(&form).unwrap());
        assert!(recipes.is_empty());
    }

    #[test]
    fn test_for_edit_round_trips_the_form() {
        let mut recipes = Vec::new();
        apply_draft(&mut recipes, validate_form(&valid_form()).unwrap());
        let form = RecipeForm::for_edit(&recipes[0]);
        assert_eq!(form.id.as_deref(), Some(recipes[0].id.as_str()));
        assert_eq!(form.ingredients, "bread\nbutter");
        assert_eq!(form.prep_time, "2");
        assert_eq!(form.recipe_type, "Veg");
    }
}
