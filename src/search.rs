use crate::model::Recipe;

/// Recipes matching `query`, in catalog order.
///
/// A recipe matches when its title, ingredients, steps or tags contain the
/// trimmed query, ignoring case. A blank query matches everything.
pub fn filter<'a>(query: &str, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
    filter_indexed(query, recipes)
        .into_iter()
        .map(|(_, recipe)| recipe)
        .collect()
}

/// Like [`filter`], paired with each recipe's position in `recipes`.
pub fn filter_indexed<'a>(query: &str, recipes: &'a [Recipe]) -> Vec<(usize, &'a Recipe)> {
    let needle = query.trim().to_lowercase();

    recipes
        .iter()
        .enumerate()
        .filter(|(_, recipe)| needle.is_empty() || matches(recipe, &needle))
        .collect()
}

fn matches(recipe: &Recipe, needle: &str) -> bool {
    [
        &recipe.title,
        &recipe.ingredients,
        &recipe.tags,
        &recipe.steps,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
