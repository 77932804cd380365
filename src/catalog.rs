use log::{debug, info};

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::form::{FormState, SubmitOutcome};
use crate::model::{sample_recipes, Recipe};
use crate::search::filter_indexed;
use crate::storage::Storage;
use crate::store::RecipeStore;

/// Prompt shown before a recipe is deleted.
pub const DELETE_PROMPT: &str = "Удалить рецепт?";

/// Blocking yes/no question put to the user.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// The whole application state: stored recipes, the form and the search box.
#[derive(Debug)]
pub struct Catalog<S> {
    store: RecipeStore<S>,
    form: FormState,
    query: String,
}

impl<S: Storage> Catalog<S> {
    pub fn open(storage: S, config: &CatalogConfig) -> Self {
        let fallback = if config.seed_samples {
            sample_recipes()
        } else {
            Vec::new()
        };
        Self::from_store(RecipeStore::open_with_fallback(
            storage,
            config.storage_key.clone(),
            fallback,
        ))
    }

    pub fn from_store(store: RecipeStore<S>) -> Self {
        Catalog {
            store,
            form: FormState::new(),
            query: String::new(),
        }
    }

    pub fn store(&self) -> &RecipeStore<S> {
        &self.store
    }

    pub fn recipes(&self) -> &[Recipe] {
        self.store.recipes()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Recipes matching the current query, with their catalog positions.
    pub fn visible(&self) -> Vec<(usize, &Recipe)> {
        filter_indexed(&self.query, self.store.recipes())
    }

    /// Number of recipes matching the current query.
    pub fn found_count(&self) -> usize {
        self.visible().len()
    }

    pub fn submit(&mut self) -> Result<SubmitOutcome, CatalogError> {
        let outcome = self.form.submit(&mut self.store)?;
        debug!("Form submitted: {:?}", outcome);
        Ok(outcome)
    }

    pub fn clear_form(&mut self) -> bool {
        self.form.clear()
    }

    pub fn begin_edit(&mut self, index: usize) -> bool {
        self.form.begin_edit(index, self.store.recipes())
    }

    /// Delete the recipe at `index` once `confirmer` agrees.
    ///
    /// Returns the removed recipe, or `None` if the user declined or there is
    /// no recipe at `index`.
    pub fn delete(
        &mut self,
        index: usize,
        confirmer: &mut impl Confirm,
    ) -> Result<Option<Recipe>, CatalogError> {
        if self.store.get(index).is_none() {
            return Ok(None);
        }
        if !confirmer.confirm(DELETE_PROMPT) {
            debug!("Deletion of recipe {} declined", index);
            return Ok(None);
        }

        let removed = self.store.remove_at(index)?;
        if let Some(recipe) = &removed {
            info!("Deleted recipe '{}'", recipe.title);
            self.form.recipe_removed(index);
        }
        Ok(removed)
    }
}
