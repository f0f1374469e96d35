//! The application controller: explicit state plus the view machine.
//!
//! Exactly one view is active at a time and every transition is driven by
//! an explicit user action. Every mutation persists the full collection
//! before the caller gets control back, so reads within a session always
//! see the latest write.

use crate::error::{AppError, StoreError};
use crate::filter::Filters;
use crate::form::{apply_draft, validate_form, RecipeForm};
use crate::rating::add_review;
use crate::store::RecipeStore;
use crate::types::{Recipe, RecipeType};
use crate::view::{project_detail, project_list, RecipeCard, RecipeDetailView};

/// The three mutually exclusive view states.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Home,
    Detail { recipe_id: String },
    Form { form: RecipeForm },
}

pub struct App {
    store: RecipeStore,
    recipes: Vec<Recipe>,
    filters: Filters,
    view: View,
}

impl App {
    /// Load the collection (seeding if necessary) and start on the list.
    pub fn new(store: RecipeStore) -> Result<Self, StoreError> {
        let recipes = store.load()?;
        Ok(Self {
            store,
            recipes,
            filters: Filters::default(),
            view: View::Home,
        })
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn find(&self, recipe_id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == recipe_id)
    }

    // --- filters ---

    pub fn set_search(&mut self, search: &str) {
        self.filters.search = search.trim().to_string();
    }

    pub fn set_difficulty_filter(&mut self, difficulty: Option<String>) {
        self.filters.difficulty = difficulty;
    }

    pub fn set_max_prep_time(&mut self, minutes: Option<f64>) {
        self.filters.max_prep_time = minutes;
    }

    pub fn set_type_filter(&mut self, recipe_type: Option<RecipeType>) {
        self.filters.recipe_type = recipe_type;
    }

    // --- view transitions ---

    /// Home → Detail. Returns false (and stays put) for an unknown id.
    pub fn open_detail(&mut self, recipe_id: &str) -> bool {
        if self.find(recipe_id).is_none() {
            return false;
        }
        self.view = View::Detail {
            recipe_id: recipe_id.to_string(),
        };
        true
    }

    pub fn back_to_home(&mut self) {
        self.view = View::Home;
    }

    /// Home → Form with every field blank.
    pub fn open_add_form(&mut self) {
        self.view = View::Form {
            form: RecipeForm::default(),
        };
    }

    /// Detail → Form, pre-populated from the selected recipe. Returns
    /// false if no recipe is selected.
    pub fn open_edit_form(&mut self) -> bool {
        let View::Detail { recipe_id } = &self.view else {
            return false;
        };
        let Some(recipe) = self.find(recipe_id) else {
            return false;
        };
        let form = RecipeForm::for_edit(recipe);
        self.view = View::Form { form };
        true
    }

    // --- mutations ---

    /// Validate and apply the form. On success the collection is
    /// persisted and the view returns home; on validation failure nothing
    /// changes and every violation is reported.
    pub fn submit_form(&mut self, form: &RecipeForm) -> Result<(), AppError> {
        let draft = validate_form(form).map_err(AppError::Validation)?;
        apply_draft(&mut self.recipes, draft);
        self.store.save(&self.recipes)?;
        self.view = View::Home;
        Ok(())
    }

    /// Fold a review into the recipe. A missing star selection is
    /// rejected with no state change; an unknown recipe id is a silent
    /// no-op (the detail view it came from is stale).
    pub fn submit_review(
        &mut self,
        recipe_id: &str,
        stars: u8,
        text: &str,
    ) -> Result<(), AppError> {
        if !(1..=5).contains(&stars) {
            return Err(AppError::NoRatingSelected);
        }
        let Some(recipe) = self.recipes.iter_mut().find(|r| r.id == recipe_id) else {
            return Ok(());
        };
        let text = text.trim();
        let text = if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        };
        add_review(recipe, stars, text);
        self.store.save(&self.recipes)?;
        Ok(())
    }

    /// Delete the recipe open in the detail view, persist, and return to
    /// the list. Returns whether anything was removed.
    pub fn delete_current(&mut self) -> Result<bool, StoreError> {
        let View::Detail { recipe_id } = &self.view else {
            return Ok(false);
        };
        let recipe_id = recipe_id.clone();
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != recipe_id);
        let removed = self.recipes.len() != before;
        if removed {
            self.store.save(&self.recipes)?;
        }
        self.view = View::Home;
        Ok(removed)
    }

    // --- projections ---

    pub fn list_view(&self) -> Vec<RecipeCard> {
        project_list(&self.recipes, &self.filters)
    }

    /// The detail projection for the currently open recipe, if any.
    pub fn detail_view(&self) -> Option<RecipeDetailView> {
        let View::Detail { recipe_id } = &self.view else {
            return None;
        };
        self.find(recipe_id).map(project_detail)
    }
}
