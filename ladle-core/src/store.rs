//! Disk persistence for the recipe collection.
//!
//! The whole collection is one JSON array in one file, written in full on
//! every mutation (last writer wins, no merge). A missing file is seeded
//! with the starter recipes; an unreadable or non-array file is discarded
//! and reseeded.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::error::StoreError;
use crate::normalize::normalize_recipes;
use crate::seed::seed_recipes;
use crate::types::Recipe;

pub struct RecipeStore {
    path: PathBuf,
}

impl RecipeStore {
    /// Create a store backed by the given file.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Resolve the default store file: `LADLE_DATA_FILE` if set, otherwise
    /// `~/.ladle/recipes.json`.
    pub fn default_path() -> PathBuf {
        if let Some(path) = env::var_os("LADLE_DATA_FILE") {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .map(|h| h.join(".ladle").join("recipes.json"))
            .unwrap_or_else(|| PathBuf::from("data/recipes.json"))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Load the full collection, normalizing every record. Seeds and
    /// persists the starter recipes if the file is absent or corrupted.
    pub fn load(&self) -> Result<Vec<Recipe>, StoreError> {
        if !self.path.exists() {
            return self.reseed();
        }

        let raw = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => Ok(normalize_recipes(items)),
            Ok(_) | Err(_) => {
                tracing::warn!(
                    "corrupted recipe store at {}, resetting",
                    self.path.display()
                );
                fs::remove_file(&self.path)?;
                self.reseed()
            }
        }
    }

    /// Overwrite the store with the full collection.
    pub fn save(&self, recipes: &[Recipe]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(recipes)?)?;
        Ok(())
    }

    fn reseed(&self) -> Result<Vec<Recipe>, StoreError> {
        let seeded = seed_recipes();
        self.save(&seeded)?;
        Ok(seeded)
    }
}
