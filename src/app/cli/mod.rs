//! CLI Adapter.

mod display;
mod input;
mod interactive;
pub mod logging;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use crate::adapters::HttpGeminiClient;
use crate::app::api::{self, OpenOptions, Workspace};
use crate::app::commands::{generate, show};
use crate::domain::AppError;
use crate::domain::configuration::resolve_path;

#[derive(Parser)]
#[command(name = "outreach")]
#[command(version)]
#[command(
    about = "Draft personalized outreach emails from profile, company, and news tables",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to ./outreach.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Directory holding the CSV tables
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the people in the profile table
    #[clap(visible_alias = "ls")]
    People,
    /// Show the profile, company, and news records joined for a person
    #[clap(visible_alias = "s")]
    Show {
        /// Person name as it appears in the profile table
        name: String,
        /// Print the joined record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the prompt that would be sent, without contacting the service
    #[clap(visible_alias = "p")]
    Prompt {
        /// Person name as it appears in the profile table
        name: String,
        #[command(flatten)]
        instructions: InstructionsArgs,
    },
    /// Generate an email for a person
    #[clap(visible_alias = "g")]
    Generate {
        /// Person name (prompts for a selection when omitted)
        name: Option<String>,
        #[command(flatten)]
        instructions: InstructionsArgs,
        /// Save the email to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Pick people and generate emails in a loop
    #[clap(visible_alias = "i")]
    Interactive,
}

#[derive(Args)]
struct InstructionsArgs {
    /// Instructions for the email (prompts when neither this nor a file is given)
    #[arg(short, long, conflicts_with = "instructions_file")]
    instructions: Option<String>,
    /// Read the instructions from a file
    #[arg(long)]
    instructions_file: Option<PathBuf>,
}

impl InstructionsArgs {
    /// `None` when the interactive prompt was cancelled.
    fn resolve(self) -> Result<Option<String>, AppError> {
        if let Some(text) = self.instructions {
            return Ok(Some(text));
        }
        if let Some(path) = self.instructions_file {
            let text = fs::read_to_string(&path).map_err(|err| {
                io::Error::new(err.kind(), format!("{}: {}", path.display(), err))
            })?;
            return Ok(Some(text));
        }
        input::read_instructions()
    }
}

pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<(), AppError> {
    let options = OpenOptions { config: cli.config, data_dir: cli.data_dir };
    let ws = api::open(&options)?;

    match cli.command {
        Commands::People => run_people(&ws),
        Commands::Show { name, json } => run_show(&ws, &name, json),
        Commands::Prompt { name, instructions } => run_prompt(&ws, &name, instructions),
        Commands::Generate { name, instructions, output } => {
            run_generate(&ws, name, instructions, output)
        }
        Commands::Interactive => interactive::run_session(&ws),
    }
}

fn run_people(ws: &Workspace) -> Result<(), AppError> {
    let people = api::list_people(ws)?;
    if people.is_empty() {
        eprintln!("No people found in {}", ws.config().data.profiles.file);
    }
    for person in people {
        println!("{}", person);
    }
    Ok(())
}

fn run_show(ws: &Workspace, name: &str, json: bool) -> Result<(), AppError> {
    let view = api::show_person(ws, name)?;
    if json {
        return display::print_person_json(&view);
    }
    display::print_person(&view)
}

fn run_prompt(ws: &Workspace, name: &str, instructions: InstructionsArgs) -> Result<(), AppError> {
    let Some(instructions) = instructions.resolve()? else {
        return Ok(());
    };
    println!("{}", api::preview_prompt(ws, name, &instructions)?);
    Ok(())
}

fn run_generate(
    ws: &Workspace,
    name: Option<String>,
    instructions: InstructionsArgs,
    output: Option<PathBuf>,
) -> Result<(), AppError> {
    let datasets = ws.load_datasets()?;
    let person = match name {
        Some(name) => name,
        None => match input::select_person(&datasets.people())? {
            Some(name) => name,
            None => return Ok(()),
        },
    };
    // Lookup failures are reported before any prompt.
    show::execute(&datasets, &person)?;

    let Some(instructions) = instructions.resolve()? else {
        return Ok(());
    };
    if instructions.trim().is_empty() {
        return Err(AppError::EmptyInstructions);
    }

    let credentials = input::resolve_credentials()?;
    let client = Arc::new(HttpGeminiClient::new(credentials, &ws.config().generation)?);
    let email = generate::execute(ws, client, &datasets, &person, &instructions)?;
    display::print_email(&email);

    if let Some(path) = output {
        if email.is_error() {
            eprintln!("⚠️  Generation failed; nothing saved to {}", path.display());
        } else {
            let saved = api::export_email(&email, &resolve_path(ws.root(), &path))?;
            eprintln!("✅ Saved email to {}", saved.display());
        }
    }
    Ok(())
}
