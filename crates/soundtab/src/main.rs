//! SoundTab - manage sound-board tabs, sounds and favorites

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Context;

/// SoundTab - sound-board storage manager
#[derive(Parser)]
#[command(name = "soundtab")]
#[command(about = "Manage sound-board tabs, sounds and favorites")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Application root (defaults to $SOUNDTAB_HOME or ~/.soundtab)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize data and sounds directories
    Init,
    /// Show resolved storage paths
    Paths,
    /// Manage tabs
    Tab {
        #[command(subcommand)]
        command: TabCommands,
    },
    /// Manage sound files
    Sound {
        #[command(subcommand)]
        command: SoundCommands,
    },
    /// Manage favorites
    Fav {
        #[command(subcommand)]
        command: FavCommands,
    },
    /// Inspect and edit settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(Subcommand)]
enum TabCommands {
    /// List tabs
    List,
    /// Create a tab
    Add { name: String },
    /// Remove a tab
    Remove {
        name: String,
        /// Remove even if it still holds sounds
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum SoundCommands {
    /// List sounds
    List {
        #[arg(short, long)]
        tab: Option<String>,
    },
    /// Import a sound file
    Import {
        file: PathBuf,
        #[arg(short, long)]
        tab: Option<String>,
        /// Name to store it under (extension is kept)
        #[arg(short, long)]
        name: Option<String>,
        /// Copy instead of moving
        #[arg(short, long)]
        copy: bool,
    },
    /// Delete a sound
    Delete {
        file: String,
        #[arg(short, long)]
        tab: Option<String>,
    },
    /// Move a sound to another tab
    Move {
        file: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
}

#[derive(Subcommand)]
enum FavCommands {
    /// List a tab's favorites
    List { tab: String },
    /// Mark a sound as favorite
    Add { tab: String, file: String },
    /// Unmark a favorite
    Remove { tab: String, file: String },
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Print all settings
    Show,
    /// Print one setting
    Get { key: String },
    /// Change one setting (JSON value, or plain string)
    Set { key: String, value: String },
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = Context::new(cli.root)?;

    match cli.command {
        Commands::Init => commands::init_command(&ctx),
        Commands::Paths => commands::paths_command(&ctx),
        Commands::Tab { command } => match command {
            TabCommands::List => commands::tab_list_command(&ctx),
            TabCommands::Add { name } => commands::tab_add_command(&ctx, &name),
            TabCommands::Remove { name, force } => {
                commands::tab_remove_command(&ctx, &name, force)
            }
        },
        Commands::Sound { command } => match command {
            SoundCommands::List { tab } => commands::sound_list_command(&ctx, tab.as_deref()),
            SoundCommands::Import {
                file,
                tab,
                name,
                copy,
            } => commands::sound_import_command(&ctx, &file, tab.as_deref(), name.as_deref(), copy),
            SoundCommands::Delete { file, tab } => {
                commands::sound_delete_command(&ctx, &file, tab.as_deref())
            }
            SoundCommands::Move { file, from, to } => {
                commands::sound_move_command(&ctx, &file, &from, &to)
            }
        },
        Commands::Fav { command } => match command {
            FavCommands::List { tab } => commands::fav_list_command(&ctx, &tab),
            FavCommands::Add { tab, file } => commands::fav_add_command(&ctx, &tab, &file),
            FavCommands::Remove { tab, file } => commands::fav_remove_command(&ctx, &tab, &file),
        },
        Commands::Settings { command } => match command {
            SettingsCommands::Show => commands::settings_show_command(&ctx),
            SettingsCommands::Get { key } => commands::settings_get_command(&ctx, &key),
            SettingsCommands::Set { key, value } => {
                commands::settings_set_command(&ctx, &key, &value)
            }
        },
    }
}
