use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod format;

use cli::{AddArgs, SoundState, UpdateArgs};
use config::Config;
use format::FormatOptions;
use remind_core::Manager;

#[derive(Parser)]
#[command(name = "remind")]
#[command(author, version, about = "Personal reminder scheduler and notifier", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Use an alternate store file
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new reminder
    Add(AddArgs),

    /// List reminders
    List {
        /// Include retired reminders
        #[arg(short, long)]
        all: bool,
    },

    /// Show full details of one reminder
    Show {
        /// Reminder id or unique id prefix
        id: String,
    },

    /// Edit an existing reminder
    Update(UpdateArgs),

    /// Enable or disable a reminder
    Toggle {
        /// Reminder id or unique id prefix
        id: String,
    },

    /// Delete a reminder
    Delete {
        /// Reminder id or unique id prefix
        id: String,
    },

    /// Delete all reminders
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Turn the built-in alert sound for important reminders on or off
    Sound {
        #[arg(value_enum)]
        state: SoundState,
    },

    /// Run one due-reminder check pass (invoked by the scheduler)
    Check,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle completions command early (before tracing init)
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "remind", &mut io::stdout());
        return Ok(());
    }

    // Initialize tracing
    // When quiet mode is enabled, suppress info-level logging
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::load();
    let opts = FormatOptions::new(config.no_color);
    let store = config.open_store(cli.store)?;
    tracing::debug!("using store at {}", store.path().display());
    let manager = Manager::new(store);

    match cli.command {
        Commands::Add(args) => commands::cmd_add(&manager, args, &opts, cli.quiet)?,
        Commands::List { all } => commands::cmd_list(&manager, all, &opts)?,
        Commands::Show { id } => commands::cmd_show(&manager, &id)?,
        Commands::Update(args) => commands::cmd_update(&manager, args, &opts, cli.quiet)?,
        Commands::Toggle { id } => commands::cmd_toggle(&manager, &id, &opts, cli.quiet)?,
        Commands::Delete { id } => commands::cmd_delete(&manager, &id, cli.quiet)?,
        Commands::Clear { force } => commands::cmd_clear(&manager, force, cli.quiet)?,
        Commands::Sound { state } => commands::cmd_sound(&manager, state, cli.quiet)?,
        Commands::Check => commands::cmd_check(manager.store(), &config, cli.quiet)?,
        Commands::Completions { .. } => {
            // Already handled above
            unreachable!()
        }
    }

    Ok(())
}
