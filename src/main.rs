use anyhow::Result;
use clap::{Parser, Subcommand};
use flexi_logger::Logger;

use habitflow::cli::{add, list, remove, stats, today, toggle};
use habitflow::config::Config;
use habitflow::store::HabitStore;

#[derive(Parser)]
#[command(name = "habitflow")]
#[command(about = "Offline-first habit tracking with streak statistics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "habitflow.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new habit
    Add {
        /// Habit name
        name: String,

        /// Optional free-text description
        #[arg(short, long)]
        description: Option<String>,

        /// Icon key (activity, book, coffee, droplet, ...)
        #[arg(short, long)]
        icon: Option<String>,

        /// Accent color (hex); assigned from the palette if omitted
        #[arg(long)]
        color: Option<String>,

        /// Cadence: daily, weekly or mon-fri
        #[arg(short, long, default_value = "daily")]
        frequency: String,
    },

    /// List all habits
    List,

    /// Show habits scheduled for a date with completion marks
    Today {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Flip a habit's completion flag for a date
    Toggle {
        /// Habit ID (prefix) or name
        habit: String,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Show streak and completion statistics
    Stats {
        /// Habit ID (prefix) or name; all habits if omitted
        habit: Option<String>,
    },

    /// Delete a habit (asks for confirmation)
    Rm {
        /// Habit ID (prefix) or name
        habit: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config
    let config = Config::load(&cli.config).unwrap_or_default();

    // Diagnostics go to stderr; user-facing output stays on stdout
    let _logger = Logger::try_with_env_or_str(&config.log.level)?
        .log_to_stderr()
        .start()?;

    // Initialize store
    let store = HabitStore::open(&config.data_dir())?;

    match cli.command {
        Commands::Add {
            name,
            description,
            icon,
            color,
            frequency,
        } => {
            add::run(&store, name, description, icon, color, frequency)?;
        }
        Commands::List => {
            list::run(&store)?;
        }
        Commands::Today { date } => {
            today::run(&store, date)?;
        }
        Commands::Toggle { habit, date } => {
            toggle::run(&store, habit, date)?;
        }
        Commands::Stats { habit } => {
            stats::run(&store, habit)?;
        }
        Commands::Rm { habit, yes } => {
            remove::run(&store, habit, yes)?;
        }
    }

    Ok(())
}
