//! Terminal prompts.

use std::io::ErrorKind;
use std::path::Path;

use dialoguer::{Confirm, Error as DialoguerError, Input, Password, Select};

use crate::domain::{API_KEY_ENV_VARS, AppError, Credentials};

const RELOAD_ENTRY: &str = "[reload datasets]";
const QUIT_ENTRY: &str = "[quit]";

/// What the user picked from the session menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Person(String),
    Reload,
    Quit,
}

fn menu_items(people: &[&str]) -> Vec<String> {
    people.iter().map(|p| p.to_string()).chain([RELOAD_ENTRY.into(), QUIT_ENTRY.into()]).collect()
}

fn menu_choice(people: &[&str], index: Option<usize>) -> MenuChoice {
    match index {
        Some(i) if i < people.len() => MenuChoice::Person(people[i].to_string()),
        Some(i) if i == people.len() => MenuChoice::Reload,
        _ => MenuChoice::Quit,
    }
}

/// Session menu: every person, then reload and quit. Esc quits.
pub fn session_menu(people: &[&str]) -> Result<MenuChoice, AppError> {
    let index = Select::new()
        .with_prompt("Select a person")
        .items(&menu_items(people))
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Interaction(format!("Failed to select person: {}", err)))?;
    Ok(menu_choice(people, index))
}

/// Pick one person. `None` when the user cancels.
pub fn select_person(people: &[&str]) -> Result<Option<String>, AppError> {
    if people.is_empty() {
        return Err(AppError::Interaction("The profile table has no people to choose from".into()));
    }
    let index = Select::new()
        .with_prompt("Select a person")
        .items(people)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Interaction(format!("Failed to select person: {}", err)))?;
    Ok(index.map(|i| people[i].to_string()))
}

/// Free-form instructions. Empty input is returned as-is for the caller to reject.
pub fn read_instructions() -> Result<Option<String>, AppError> {
    match Input::<String>::new()
        .with_prompt("Instructions for the email")
        .allow_empty(true)
        .interact_text()
    {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Interaction(format!("Failed to read instructions: {}", err))),
    }
}

/// Credentials from the environment, or a hidden prompt when none are set.
pub fn resolve_credentials() -> Result<Credentials, AppError> {
    if let Some(credentials) = Credentials::from_env() {
        return Ok(credentials);
    }
    let key = Password::new()
        .with_prompt(format!("API key (or set {})", API_KEY_ENV_VARS[0]))
        .interact()
        .map_err(|_| AppError::MissingCredentials)?;
    Credentials::from_key(key)
}

pub fn confirm_save(path: &Path) -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt(format!("Save email to {}?", path.display()))
        .default(false)
        .interact()
        .map_err(|err| AppError::Interaction(format!("Failed to read confirmation: {}", err)))
}
