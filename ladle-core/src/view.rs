//! Pure projections from application state to display models.
//!
//! Nothing in here touches storage or mutates state; a frontend renders
//! these records with whatever technology it likes, which keeps the data
//! core testable without a UI harness.

use crate::filter::{filter_and_sort, Filters};
use crate::form::fmt_minutes;
use crate::types::Recipe;
use crate::video::youtube_embed_url;

/// Shown for recipes without an image of their own.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1513104890138-7c749659a591";

/// One entry in the recipe list.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub difficulty: String,
    pub recipe_type: String,
    /// e.g. "30 mins total"
    pub total_time: String,
    /// e.g. "⭐ 4.5 (2)" or "No ratings"
    pub rating: String,
    pub description: String,
}

/// One rendered review: five star glyphs plus optional text.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewLine {
    pub stars: String,
    pub text: Option<String>,
}

/// How the cooking video should be presented.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoView {
    /// Recognized host; can be embedded inline.
    Embed(String),
    /// Unrecognized host; plain outbound link.
    Link(String),
}

/// The full single-recipe view.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDetailView {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub difficulty: String,
    pub recipe_type: String,
    /// e.g. "Prep: 15 mins"
    pub prep_time: String,
    /// e.g. "Cook: 15 mins"
    pub cook_time: String,
    /// e.g. "⭐ 4.5 (2)" or "No ratings yet"
    pub rating: String,
    /// e.g. "Average rating: 4.5 / 5 (2 ratings)"
    pub rating_summary: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    /// Newest first.
    pub reviews: Vec<ReviewLine>,
    pub video: Option<VideoView>,
}

/// Project the filtered, sorted collection into list cards.
pub fn project_list(recipes: &[Recipe], filters: &Filters) -> Vec<RecipeCard> {
    filter_and_sort(recipes, filters)
        .into_iter()
        .map(|recipe| RecipeCard {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            image_url: image_or_placeholder(recipe),
            difficulty: recipe.difficulty.clone(),
            recipe_type: recipe.recipe_type.as_str().to_string(),
            total_time: format!("{} mins total", fmt_minutes(recipe.total_time())),
            rating: rating_badge(recipe, "No ratings"),
            description: recipe.description.clone(),
        })
        .collect()
}

/// Project a single recipe into the detail view.
pub fn project_detail(recipe: &Recipe) -> RecipeDetailView {
    let video = recipe.video_url.as_ref().map(|raw| {
        youtube_embed_url(raw)
            .map(VideoView::Embed)
            .unwrap_or_else(|| VideoView::Link(raw.clone()))
    });

    RecipeDetailView {
        id: recipe.id.clone(),
        title: recipe.title.clone(),
        image_url: image_or_placeholder(recipe),
        difficulty: recipe.difficulty.clone(),
        recipe_type: recipe.recipe_type.as_str().to_string(),
        prep_time: format!("Prep: {} mins", fmt_minutes(recipe.prep_time)),
        cook_time: format!("Cook: {} mins", fmt_minutes(recipe.cook_time)),
        rating: rating_badge(recipe, "No ratings yet"),
        rating_summary: rating_summary(recipe),
        description: recipe.description.clone(),
        ingredients: recipe.ingredients.clone(),
        steps: recipe.steps.clone(),
        reviews: recipe
            .reviews
            .iter()
            .map(|review| ReviewLine {
                stars: star_line(review.rating),
                text: review.text.clone(),
            })
            .collect(),
        video,
    }
}

/// Average rating summary with singular/plural handling, or an invitation
/// to be the first reviewer.
pub fn rating_summary(recipe: &Recipe) -> String {
    if recipe.rating_count > 0 {
        format!(
            "Average rating: {:.1} / 5 ({} rating{})",
            recipe.rating,
            recipe.rating_count,
            if recipe.rating_count > 1 { "s" } else { "" }
        )
    } else {
        "No ratings yet. Be the first to rate this recipe!".to_string()
    }
}

fn rating_badge(recipe: &Recipe, empty_label: &str) -> String {
    if recipe.rating_count > 0 {
        format!("⭐ {:.1} ({})", recipe.rating, recipe.rating_count)
    } else {
        empty_label.to_string()
    }
}

fn image_or_placeholder(recipe: &Recipe) -> String {
    recipe
        .image_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string())
}

/// Filled stars for the given rating, padded to five with empty glyphs.
fn star_line(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    let mut line = "★".repeat(filled);
    line.push_str(&"☆".repeat(5 - filled));
    line
}
