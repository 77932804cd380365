//! Plain-text rendering of the catalog.
//!
//! Everything here is a pure function of the current state; callers re-render
//! after every change instead of keeping rendered output around.

use crate::form::FormState;
use crate::model::Recipe;

pub const EMPTY_LIST_MESSAGE: &str = "Рецептов не найдено — добавьте первый!";

pub fn form_heading(form: &FormState) -> &'static str {
    if form.is_editing() {
        "Редактирование рецепта"
    } else {
        "Новый рецепт"
    }
}

pub fn submit_label(form: &FormState) -> &'static str {
    if form.is_editing() {
        "Сохранить"
    } else {
        "Добавить рецепт"
    }
}

pub fn results_counter(count: usize) -> String {
    format!("Найдено: {}", count)
}

/// One recipe card. `number` is the 1-based catalog position shown to the user.
pub fn render_card(number: usize, recipe: &Recipe) -> String {
    let mut lines = vec![format!("#{} {}", number, recipe.title)];

    let tags = recipe.tag_list();
    if !tags.is_empty() {
        let tags: Vec<String> = tags.iter().map(|tag| format!("[{}]", tag)).collect();
        lines.push(format!("   {}", tags.join(" ")));
    }

    lines.push(format!("   Ингредиенты: {}", recipe.ingredients));
    lines.push(format!("   Приготовление: {}", recipe.steps));
    lines.join("\n")
}

/// The counter followed by every visible card, or the empty-list message.
pub fn render_list(visible: &[(usize, &Recipe)]) -> String {
    let mut out = results_counter(visible.len());

    if visible.is_empty() {
        out.push('\n');
        out.push_str(EMPTY_LIST_MESSAGE);
        return out;
    }

    for (index, recipe) in visible {
        out.push_str("\n\n");
        out.push_str(&render_card(index + 1, recipe));
    }
    out
}

pub fn render_form(form: &FormState) -> String {
    let fields = form.fields();
    format!(
        "{}\n  Название: {}\n  Ингредиенты: {}\n  Приготовление: {}\n  Тэги: {}\n  ({})",
        form_heading(form),
        fields.title,
        fields.ingredients,
        fields.steps,
        fields.tags,
        submit_label(form),
    )
}
