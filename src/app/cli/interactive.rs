//! Menu-driven session: pick a person, give instructions, review, save.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::display;
use super::input::{self, MenuChoice};
use crate::adapters::HttpGeminiClient;
use crate::app::AppContext;
use crate::app::api::Workspace;
use crate::app::catalog::DatasetCatalog;
use crate::app::commands::generate::GenerationTask;
use crate::app::commands::{export, generate, show};
use crate::domain::{AppError, Datasets};
use crate::ports::{GenerationClient, TableSource};

const PROGRESS_INTERVAL: Duration = Duration::from_millis(500);

/// Questions the session asks the user.
trait SessionPrompts {
    fn menu(&mut self, people: &[&str]) -> Result<MenuChoice, AppError>;
    /// `None` when the user cancelled.
    fn instructions(&mut self) -> Result<Option<String>, AppError>;
    fn confirm_save(&mut self, path: &Path) -> Result<bool, AppError>;
}

struct TerminalPrompts;

impl SessionPrompts for TerminalPrompts {
    fn menu(&mut self, people: &[&str]) -> Result<MenuChoice, AppError> {
        input::session_menu(people)
    }

    fn instructions(&mut self) -> Result<Option<String>, AppError> {
        input::read_instructions()
    }

    fn confirm_save(&mut self, path: &Path) -> Result<bool, AppError> {
        input::confirm_save(path)
    }
}

/// How a single person turn ended.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TurnOutcome {
    Cancelled,
    Failed,
    Kept,
    Saved(PathBuf),
}

/// Run the session until the user quits.
pub fn run_session(ws: &Workspace) -> Result<(), AppError> {
    let credentials = input::resolve_credentials()?;
    let client = Arc::new(HttpGeminiClient::new(credentials, &ws.config().generation)?);
    let catalog = DatasetCatalog::load(ws)?;
    session_loop(ws, client, &catalog, &mut TerminalPrompts)
}

/// Lookup, input, and save errors are reported and the menu comes back;
/// anything else, including a failed reload, ends the session.
fn session_loop<S, C, P>(
    ctx: &AppContext<S>,
    client: Arc<C>,
    catalog: &DatasetCatalog,
    prompts: &mut P,
) -> Result<(), AppError>
where
    S: TableSource,
    C: GenerationClient + Send + Sync + 'static,
    P: SessionPrompts,
{
    loop {
        let datasets = catalog.snapshot();
        let choice = prompts.menu(&datasets.people())?;
        match choice {
            MenuChoice::Quit => return Ok(()),
            MenuChoice::Reload => {
                let fresh = catalog.reload(ctx)?;
                println!("✅ Reloaded datasets ({} people)", fresh.profiles.len());
            }
            MenuChoice::Person(person) => {
                match run_turn(ctx, client.clone(), &datasets, &person, prompts) {
                    Ok(TurnOutcome::Saved(path)) => {
                        debug!(person, path = %path.display(), "turn saved an email")
                    }
                    Ok(outcome) => debug!(person, ?outcome, "turn finished"),
                    Err(err) if err.is_recoverable() => eprintln!("Error: {}", err),
                    Err(err) => return Err(err),
                }
            }
        }
    }
}

fn run_turn<S, C, P>(
    ctx: &AppContext<S>,
    client: Arc<C>,
    datasets: &Datasets,
    person: &str,
    prompts: &mut P,
) -> Result<TurnOutcome, AppError>
where
    S: TableSource,
    C: GenerationClient + Send + Sync + 'static,
    P: SessionPrompts,
{
    let view = show::execute(datasets, person)?;
    display::print_person(&view)?;

    let Some(instructions) = prompts.instructions()? else {
        return Ok(TurnOutcome::Cancelled);
    };
    let request = generate::prepare(ctx, datasets, person, &instructions)?;

    eprint!("Generating email");
    let outcome = GenerationTask::spawn(client, request)?
        .wait_with_progress(PROGRESS_INTERVAL, || eprint!("."));
    eprintln!();

    let email = outcome.render();
    display::print_email(&email);
    if email.is_error() {
        return Ok(TurnOutcome::Failed);
    }

    let path = ctx.output_path();
    if !prompts.confirm_save(&path)? {
        return Ok(TurnOutcome::Kept);
    }
    let saved = export::execute(&email, &path)?;
    println!("✅ Saved email to {}", saved.display());
    Ok(TurnOutcome::Saved(saved))
}
