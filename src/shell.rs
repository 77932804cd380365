//! Line-oriented command surface over a [`Catalog`].

use crate::catalog::{Catalog, Confirm};
use crate::error::CatalogError;
use crate::form::SubmitOutcome;
use crate::storage::Storage;
use crate::view;

pub const HELP: &str = "\
Команды:
  list                 показать рецепты
  search [запрос]      поиск по названию, ингредиентам, шагам или тэгам
  title <текст>        название
  ingredients <текст>  ингредиенты
  steps <текст>        приготовление
  tags <текст>         тэги (через запятую)
  form                 показать форму
  submit               добавить или сохранить рецепт
  clear                очистить форму
  edit <n>             редактировать рецепт #n
  delete <n>           удалить рецепт #n
  help                 эта справка
  quit                 выход";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Search(String),
    Title(String),
    Ingredients(String),
    Steps(String),
    Tags(String),
    Form,
    Submit,
    Clear,
    /// Edit the recipe at this catalog position (0-based)
    Edit(usize),
    /// Delete the recipe at this catalog position (0-based)
    Delete(usize),
    Quit,
}

/// What the loop should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

/// Parse one input line. Blank lines parse to `None`.
///
/// Card numbers are typed 1-based, as rendered.
pub fn parse_command(line: &str) -> Result<Option<Command>, CatalogError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (trimmed, ""),
    };

    let command = match word {
        "help" | "?" => Command::Help,
        "list" | "ls" => Command::List,
        "search" | "find" => Command::Search(rest.to_string()),
        "title" => Command::Title(rest.to_string()),
        "ingredients" => Command::Ingredients(rest.to_string()),
        "steps" => Command::Steps(rest.to_string()),
        "tags" => Command::Tags(rest.to_string()),
        "form" => Command::Form,
        "submit" | "save" => Command::Submit,
        "clear" => Command::Clear,
        "edit" => Command::Edit(parse_number(word, rest)?),
        "delete" | "rm" => Command::Delete(parse_number(word, rest)?),
        "quit" | "exit" | "q" => Command::Quit,
        other => {
            return Err(CatalogError::CommandError(format!(
                "unknown command '{}', try 'help'",
                other
            )))
        }
    };

    Ok(Some(command))
}

fn parse_number(word: &str, rest: &str) -> Result<usize, CatalogError> {
    match rest.trim().parse::<usize>() {
        Ok(number) if number > 0 => Ok(number - 1),
        _ => Err(CatalogError::CommandError(format!(
            "'{}' expects a recipe number, got '{}'",
            word,
            rest.trim()
        ))),
    }
}

/// Accepts the usual yes answers in English and Russian.
pub fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "д" | "да"
    )
}

/// Run `command` against `catalog` and render what the user should see next.
pub fn execute<S: Storage>(
    catalog: &mut Catalog<S>,
    command: Command,
    confirmer: &mut impl Confirm,
) -> Result<Flow, CatalogError> {
    let output = match command {
        Command::Help => HELP.to_string(),
        Command::List => view::render_list(&catalog.visible()),
        Command::Search(query) => {
            catalog.set_query(query);
            view::render_list(&catalog.visible())
        }
        Command::Title(text) => {
            catalog.form_mut().set_title(text);
            view::render_form(catalog.form())
        }
        Command::Ingredients(text) => {
            catalog.form_mut().set_ingredients(text);
            view::render_form(catalog.form())
        }
        Command::Steps(text) => {
            catalog.form_mut().set_steps(text);
            view::render_form(catalog.form())
        }
        Command::Tags(text) => {
            catalog.form_mut().set_tags(text);
            view::render_form(catalog.form())
        }
        Command::Form => view::render_form(catalog.form()),
        Command::Submit => match catalog.submit()? {
            // A blank title is refused without a message
            SubmitOutcome::Rejected => view::render_form(catalog.form()),
            _ => view::render_list(&catalog.visible()),
        },
        Command::Clear => {
            catalog.clear_form();
            view::render_form(catalog.form())
        }
        Command::Edit(index) => {
            catalog.begin_edit(index);
            view::render_form(catalog.form())
        }
        Command::Delete(index) => {
            catalog.delete(index, confirmer)?;
            view::render_list(&catalog.visible())
        }
        Command::Quit => return Ok(Flow::Quit),
    };

    Ok(Flow::Continue(output))
}
