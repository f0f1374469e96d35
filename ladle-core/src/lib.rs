pub mod app;
pub mod error;
pub mod export;
pub mod filter;
pub mod form;
pub mod ids;
pub mod normalize;
pub mod rating;
pub mod seed;
pub mod share;
pub mod store;
pub mod types;
pub mod video;
pub mod view;

pub use app::{App, View};
pub use error::{AppError, StoreError};
pub use filter::{filter_and_sort, Filters};
pub use form::{validate_form, RecipeDraft, RecipeForm};
pub use normalize::{normalize_recipe, normalize_recipes};
pub use seed::seed_recipes;
pub use share::{share_payload, share_via, ShareCapability, ShareOutcome, SharePayload};
pub use store::RecipeStore;
pub use types::{Recipe, RecipeType, Review, DIFFICULTIES};
pub use view::{project_detail, project_list, RecipeCard, RecipeDetailView, VideoView};
