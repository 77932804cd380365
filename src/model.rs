use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Recipes carry no identity of their own; they are addressed by their
/// position in the catalog list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub ingredients: String,
    pub steps: String,
    /// Comma-separated tags, kept exactly as typed
    pub tags: String,
}

impl Recipe {
    pub fn new(
        title: impl Into<String>,
        ingredients: impl Into<String>,
        steps: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Recipe {
            title: title.into(),
            ingredients: ingredients.into(),
            steps: steps.into(),
            tags: tags.into(),
        }
    }

    /// Tags parsed out of the comma-separated `tags` field.
    pub fn tag_list(&self) -> Vec<&str> {
        parse_tags(&self.tags)
    }

    /// True if any of the four text fields holds something.
    pub fn has_content(&self) -> bool {
        [&self.title, &self.ingredients, &self.steps, &self.tags]
            .iter()
            .any(|field| !field.is_empty())
    }
}

/// Split a comma-separated tag field into trimmed, non-empty tags.
///
/// Order of appearance is kept and nothing is deduplicated.
pub fn parse_tags(tags: &str) -> Vec<&str> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// The two recipes a fresh catalog starts with.
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Шоколадные кексы",
            "200гр муки, 150гр сахара, 2 яйца, 50гр какао, 120мл молока",
            "Смешать сухие. Добавить яйца и молоко. Выпекать 20 минут при 180°C.",
            "десерт,выпечка",
        ),
        Recipe::new(
            "Салат Цезарь",
            "Листья салата, курица, гренки, пармезан, соус Цезарь",
            "Нарезать курицу и обжарить. Смешать все ингредиенты с соусом.",
            "здоровое",
        ),
    ]
}

/// Serialize a recipe list into the stored blob format (a JSON array).
pub fn serialize_recipes(recipes: &[Recipe]) -> Result<String, serde_json::Error> {
    serde_json::to_string(recipes)
}

/// Parse a stored blob back into a recipe list.
pub fn deserialize_recipes(blob: &str) -> Result<Vec<Recipe>, serde_json::Error> {
    serde_json::from_str(blob)
}
