//! A local recipe catalog.
//!
//! Recipes (title, ingredients, steps, comma-separated tags) are kept in an
//! ordered list that is written back to a key-value [`storage::Storage`] after
//! every change. [`catalog::Catalog`] ties the list together with the edit
//! form and the search query.

pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod search;
pub mod shell;
pub mod storage;
pub mod store;
pub mod view;

pub use catalog::{Catalog, Confirm, DELETE_PROMPT};
pub use config::{load_config, CatalogConfig};
pub use error::CatalogError;
pub use form::{EditState, FormState, SubmitOutcome};
pub use model::{deserialize_recipes, parse_tags, sample_recipes, serialize_recipes, Recipe};
pub use search::{filter, filter_indexed};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{RecipeStore, DEFAULT_STORAGE_KEY};
