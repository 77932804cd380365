use log::{debug, info, warn};

use crate::error::CatalogError;
use crate::model::{deserialize_recipes, sample_recipes, serialize_recipes, Recipe};
use crate::storage::Storage;

/// Storage key the recipe list lives under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "recipes";

/// Ordered recipe list mirrored into a [`Storage`] after every mutation.
///
/// New recipes go to the front. Positions are the only identity a recipe has,
/// so every index-based operation treats an out-of-range index as a no-op.
#[derive(Debug)]
pub struct RecipeStore<S> {
    storage: S,
    key: String,
    recipes: Vec<Recipe>,
}

impl<S: Storage> RecipeStore<S> {
    /// Load the list stored under `key`, falling back to the sample recipes.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        Self::open_with_fallback(storage, key, sample_recipes())
    }

    /// Load the list stored under `key`, falling back to `fallback` when the
    /// stored value is missing, unreadable or malformed.
    pub fn open_with_fallback(storage: S, key: impl Into<String>, fallback: Vec<Recipe>) -> Self {
        let key = key.into();
        let recipes = match storage.get(&key) {
            Ok(Some(blob)) => match deserialize_recipes(&blob) {
                Ok(recipes) => {
                    info!("Loaded {} recipes from storage", recipes.len());
                    recipes
                }
                Err(e) => {
                    warn!("Stored recipes under '{}' are malformed: {}", key, e);
                    fallback
                }
            },
            Ok(None) => {
                debug!("Nothing stored under '{}', using defaults", key);
                fallback
            }
            Err(e) => {
                warn!("Failed to read '{}' from storage: {}", key, e);
                fallback
            }
        };

        RecipeStore {
            storage,
            key,
            recipes,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Put `recipe` at the front of the list.
    pub fn add(&mut self, recipe: Recipe) -> Result<(), CatalogError> {
        debug!("Adding recipe '{}'", recipe.title);
        self.recipes.insert(0, recipe);
        self.persist()
    }

    /// Replace the recipe at `index`. Returns `false` if there is none.
    pub fn update_at(&mut self, index: usize, recipe: Recipe) -> Result<bool, CatalogError> {
        match self.recipes.get_mut(index) {
            Some(slot) => {
                debug!("Updating recipe {} to '{}'", index, recipe.title);
                *slot = recipe;
                self.persist()?;
                Ok(true)
            }
            None => {
                warn!("Ignoring update of missing recipe {}", index);
                Ok(false)
            }
        }
    }

    /// Remove the recipe at `index`, shifting later ones down.
    pub fn remove_at(&mut self, index: usize) -> Result<Option<Recipe>, CatalogError> {
        if index >= self.recipes.len() {
            warn!("Ignoring removal of missing recipe {}", index);
            return Ok(None);
        }

        let removed = self.recipes.remove(index);
        debug!("Removed recipe {} ('{}')", index, removed.title);
        self.persist()?;
        Ok(Some(removed))
    }

    fn persist(&mut self) -> Result<(), CatalogError> {
        let blob = serialize_recipes(&self.recipes)?;
        self.storage.set(&self.key, blob)
    }
}
