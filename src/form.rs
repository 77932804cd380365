use log::debug;

use crate::error::CatalogError;
use crate::model::Recipe;
use crate::storage::Storage;
use crate::store::RecipeStore;

/// Whether the form describes a new recipe or edits an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Creating,
    /// Editing the recipe at this catalog position
    Editing(usize),
}

/// What a call to [`FormState::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The title was blank; nothing changed
    Rejected,
    /// A new recipe was put at the front of the catalog
    Added,
    /// The recipe at this position was replaced
    Updated(usize),
    /// The recipe being edited no longer exists; the catalog is unchanged
    Unchanged,
}

/// The recipe form: four text fields plus the edit mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: Recipe,
    mode: EditState,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &Recipe {
        &self.fields
    }

    pub fn mode(&self) -> EditState {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditState::Editing(_))
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.fields.title = title.into();
    }

    pub fn set_ingredients(&mut self, ingredients: impl Into<String>) {
        self.fields.ingredients = ingredients.into();
    }

    pub fn set_steps(&mut self, steps: impl Into<String>) {
        self.fields.steps = steps.into();
    }

    pub fn set_tags(&mut self, tags: impl Into<String>) {
        self.fields.tags = tags.into();
    }

    /// Load the recipe at `index` into the form and switch to editing it.
    ///
    /// Returns `false` and leaves the form alone if there is no such recipe.
    pub fn begin_edit(&mut self, index: usize, recipes: &[Recipe]) -> bool {
        match recipes.get(index) {
            Some(recipe) => {
                self.fields = recipe.clone();
                self.mode = EditState::Editing(index);
                true
            }
            None => false,
        }
    }

    /// Save the form into `store`.
    ///
    /// A blank title is rejected without touching the form or the store.
    /// Otherwise the form goes back to a blank `Creating` state, also when the
    /// store applied the change but could not write it out.
    pub fn submit<S: Storage>(
        &mut self,
        store: &mut RecipeStore<S>,
    ) -> Result<SubmitOutcome, CatalogError> {
        let title = self.fields.title.trim();
        if title.is_empty() {
            debug!("Rejecting submission with a blank title");
            return Ok(SubmitOutcome::Rejected);
        }

        let recipe = Recipe {
            title: title.to_string(),
            ..self.fields.clone()
        };

        let outcome = match self.mode {
            EditState::Creating => store.add(recipe).map(|()| SubmitOutcome::Added),
            EditState::Editing(index) => store.update_at(index, recipe).map(|applied| {
                if applied {
                    SubmitOutcome::Updated(index)
                } else {
                    SubmitOutcome::Unchanged
                }
            }),
        };

        // The store keeps the change even when writing it out failed
        self.reset();
        outcome
    }

    /// Blank the form and leave edit mode, but only if some field holds text.
    pub fn clear(&mut self) -> bool {
        if !self.fields.has_content() {
            return false;
        }
        self.reset();
        true
    }

    /// Keep the edit target pointing at the same recipe after the one at
    /// `removed` was deleted. Editing the deleted recipe itself falls back to
    /// `Creating` with the typed fields kept.
    pub fn recipe_removed(&mut self, removed: usize) {
        if let EditState::Editing(index) = self.mode {
            if index == removed {
                self.mode = EditState::Creating;
            } else if index > removed {
                self.mode = EditState::Editing(index - 1);
            }
        }
    }

    fn reset(&mut self) {
        self.fields = Recipe::default();
        self.mode = EditState::Creating;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_recipes;
    use crate::storage::MemoryStorage;
    use crate::store::DEFAULT_STORAGE_KEY;
    use std::io;

    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, CatalogError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: String) -> Result<(), CatalogError> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    fn store() -> RecipeStore<MemoryStorage> {
        RecipeStore::open(MemoryStorage::new(), DEFAULT_STORAGE_KEY)
    }

    #[test]
    fn test_submit_creating_prepends() {
        let mut store = store();
        let mut form = FormState::new();
        form.set_title("  Тест  ");
        form.set_tags(" a, b ");

        assert_eq!(form.submit(&mut store).unwrap(), SubmitOutcome::Added);
        assert_eq!(store.len(), 3);
        assert_eq!(store.recipes()[0], Recipe::new("Тест", "", "", " a, b "));
        assert_eq!(form, FormState::new());
    }

    #[test]
    fn test_submit_blank_title_rejected() {
        let mut store = store();
        let mut form = FormState::new();
        form.set_title("   ");
        form.set_steps("что-то");
        let before = form.clone();

        assert_eq!(form.submit(&mut store).unwrap(), SubmitOutcome::Rejected);
        assert_eq!(form, before);
        assert_eq!(store.recipes(), sample_recipes().as_slice());
    }

    #[test]
    fn test_submit_editing_replaces_in_place() {
        let mut store = store();
        let mut form = FormState::new();

        assert!(form.begin_edit(1, store.recipes()));
        assert_eq!(form.mode(), EditState::Editing(1));
        assert_eq!(form.fields(), &sample_recipes()[1]);

        form.set_title("Салат Греческий");
        assert_eq!(form.submit(&mut store).unwrap(), SubmitOutcome::Updated(1));
        assert_eq!(store.len(), 2);
        assert_eq!(store.recipes()[0], sample_recipes()[0]);
        assert_eq!(store.recipes()[1].title, "Салат Греческий");
        assert_eq!(store.recipes()[1].tags, "здоровое");
        assert_eq!(form.mode(), EditState::Creating);
        assert!(!form.fields().has_content());
    }

    #[test]
    fn test_begin_edit_out_of_range_is_noop() {
        let store = store();
        let mut form = FormState::new();
        form.set_title("draft");
        let before = form.clone();

        assert!(!form.begin_edit(7, store.recipes()));
        assert_eq!(form, before);
    }

    #[test]
    fn test_clear_only_when_something_typed() {
        let mut form = FormState::new();
        assert!(!form.clear());

        form.set_ingredients("соль");
        assert!(form.clear());
        assert_eq!(form, FormState::new());
    }

    #[test]
    fn test_clear_leaves_edit_mode() {
        let store = store();
        let mut form = FormState::new();
        form.begin_edit(0, store.recipes());

        assert!(form.clear());
        assert_eq!(form.mode(), EditState::Creating);
    }

    #[test]
    fn test_recipe_removed_retargets_edit() {
        let mut form = FormState::new();
        let recipes = vec![Recipe::default(); 3];

        form.begin_edit(2, &recipes);
        form.recipe_removed(0);
        assert_eq!(form.mode(), EditState::Editing(1));

        form.recipe_removed(1);
        assert_eq!(form.mode(), EditState::Creating);

        form.begin_edit(0, &recipes);
        form.recipe_removed(2);
        assert_eq!(form.mode(), EditState::Editing(0));
    }

    #[test]
    fn test_submit_resets_form_when_write_fails() {
        let mut store = RecipeStore::open(ReadOnlyStorage, DEFAULT_STORAGE_KEY);
        let mut form = FormState::new();
        form.set_title("Тест");

        assert!(matches!(
            form.submit(&mut store),
            Err(CatalogError::StorageError(_))
        ));
        assert_eq!(form, FormState::new());

        // Submitting the now blank form does not add a second copy
        assert_eq!(form.submit(&mut store).unwrap(), SubmitOutcome::Rejected);
        let titles: Vec<&str> = store.recipes().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Тест", "Шоколадные кексы", "Салат Цезарь"]);
    }

    #[test]
    fn test_submit_after_edit_target_vanished() {
        let mut store = store();
        let mut form = FormState::new();
        form.begin_edit(1, store.recipes());
        store.remove_at(1).unwrap();

        form.set_title("Салат Греческий");
        assert_eq!(form.submit(&mut store).unwrap(), SubmitOutcome::Unchanged);
        assert_eq!(store.len(), 1);
        assert_eq!(store.recipes()[0], sample_recipes()[0]);
        assert_eq!(form, FormState::new());
    }
}
