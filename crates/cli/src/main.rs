#![warn(clippy::pedantic)]

mod category_cmds;
mod draft;
mod exercise_cmds;
mod log_cmd;
mod logger;
mod plan_cmds;
mod player_cmds;
mod settings_cmds;

use std::{path::PathBuf, sync::Arc};

use clap::{Parser, Subcommand};
use liftplan_domain::Service;
use liftplan_storage::{FileKv, LocalStore};

pub(crate) type Store = Service<LocalStore<Arc<FileKv>>>;

#[derive(Parser)]
#[command(name = "liftplan", about = "Workout plan management for gyms", version)]
struct Cli {
    /// Directory holding the data files. Defaults to $LIFTPLAN_DATA_DIR or
    /// the platform data directory.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage the exercise registry
    #[command(subcommand)]
    Exercise(ExerciseCommand),
    /// Manage exercise categories
    #[command(subcommand)]
    Category(CategoryCommand),
    /// Manage players
    #[command(subcommand)]
    Player(PlayerCommand),
    /// Create, inspect and export workout plans
    #[command(subcommand)]
    Plan(PlanCommand),
    /// Show or change gym settings
    #[command(subcommand)]
    Settings(SettingsCommand),
    /// Print the recent application log
    Log,
}

#[derive(Subcommand)]
enum ExerciseCommand {
    /// Add an exercise to the registry
    Add {
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// List all exercises
    List,
    /// Delete an exercise by id
    Delete { id: String },
}

#[derive(Subcommand)]
enum CategoryCommand {
    /// Add a category
    Add {
        name: String,
        /// Hex color such as #F97316
        #[arg(long)]
        color: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// List all categories
    List,
    /// Edit a category; renaming updates its exercises as well
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long, conflicts_with = "clear_description")]
        description: Option<String>,
        #[arg(long)]
        clear_description: bool,
    },
    /// Delete a category and its exercises
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum PlayerCommand {
    /// Add a player
    Add {
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        /// Join date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        join_date: Option<String>,
    },
    /// List all players
    List,
}

#[derive(Subcommand)]
enum PlanCommand {
    /// Create a plan from a TOML draft file
    Create {
        #[arg(long)]
        file: PathBuf,
    },
    /// List all plans
    List,
    /// Print one plan in full
    Show { id: String },
    /// Delete a plan by id
    Delete { id: String },
    /// Render a plan to a PDF file
    Export {
        id: String,
        /// Output directory, defaults to the current directory
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Print the current settings
    Show,
    /// Change settings; only the given fields are touched
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        location: Option<String>,
        /// Path to a PNG or JPEG logo file
        #[arg(long, conflicts_with = "clear_logo")]
        logo_file: Option<String>,
        #[arg(long)]
        clear_logo: bool,
        /// Path to a TTF file used for document text
        #[arg(long, conflicts_with = "clear_font")]
        font: Option<String>,
        #[arg(long)]
        clear_font: bool,
        /// Hex color such as #F97316
        #[arg(long)]
        theme_color: Option<String>,
        /// Language code (en, de, fr)
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        dark_mode: Option<bool>,
    },
}

fn data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("LIFTPLAN_DATA_DIR").map(PathBuf::from))
        .or_else(|| dirs::data_dir().map(|dir| dir.join("liftplan")))
        .unwrap_or_else(|| PathBuf::from("liftplan-data"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let kv = Arc::new(FileKv::open(data_dir(cli.data_dir))?);
    logger::init(Arc::clone(&kv))?;
    let store = Service::new(LocalStore::open(Arc::clone(&kv))?);

    match cli.command {
        Command::Exercise(command) => match command {
            ExerciseCommand::Add {
                name,
                category,
                description,
            } => exercise_cmds::add(&store, &name, &category, description).await,
            ExerciseCommand::List => exercise_cmds::list(&store).await,
            ExerciseCommand::Delete { id } => exercise_cmds::delete(&store, &id).await,
        },
        Command::Category(command) => match command {
            CategoryCommand::Add {
                name,
                color,
                description,
            } => category_cmds::add(&store, &name, &color, description).await,
            CategoryCommand::List => category_cmds::list(&store).await,
            CategoryCommand::Edit {
                id,
                name,
                color,
                description,
                clear_description,
            } => {
                category_cmds::edit(&store, &id, name, color, description, clear_description)
                    .await
            }
            CategoryCommand::Delete { id, yes } => category_cmds::delete(&store, &id, yes).await,
        },
        Command::Player(command) => match command {
            PlayerCommand::Add {
                name,
                email,
                phone,
                join_date,
            } => player_cmds::add(&store, &name, email, phone, join_date).await,
            PlayerCommand::List => player_cmds::list(&store).await,
        },
        Command::Plan(command) => match command {
            PlanCommand::Create { file } => plan_cmds::create(&store, &file).await,
            PlanCommand::List => plan_cmds::list(&store).await,
            PlanCommand::Show { id } => plan_cmds::show(&store, &id).await,
            PlanCommand::Delete { id } => plan_cmds::delete(&store, &id).await,
            PlanCommand::Export { id, output } => plan_cmds::export(&store, &id, output).await,
        },
        Command::Settings(command) => match command {
            SettingsCommand::Show => settings_cmds::show(&store).await,
            SettingsCommand::Set {
                name,
                email,
                phone,
                location,
                logo_file,
                clear_logo,
                font,
                clear_font,
                theme_color,
                language,
                dark_mode,
            } => {
                settings_cmds::set(
                    &store,
                    settings_cmds::Update {
                        name,
                        email,
                        phone,
                        location,
                        logo_file,
                        clear_logo,
                        font,
                        clear_font,
                        theme_color,
                        language,
                        dark_mode,
                    },
                )
                .await
            }
        },
        Command::Log => {
            log_cmd::show(&kv);
            Ok(())
        }
    }
}
