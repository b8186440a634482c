//! CLI frontend for the Grimsheet character companion.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gs",
    about = "Grimsheet — archetypes, character sheets, and roll logs",
    version,
    propagate_version = true
)]
struct Cli {
    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available archetypes
    Classes {
        /// JSON file with extra class definitions
        #[arg(short, long)]
        classes: Option<PathBuf>,
    },

    /// Show the character sheet for an archetype
    Show {
        /// Archetype identifier (e.g. scum)
        id: String,

        /// Base attributes, e.g. "str=3,agi=3,pre=3,tou=3"
        #[arg(short, long)]
        base: Option<String>,

        /// Extra modifier applied after the archetype, e.g. "agi=-1"
        #[arg(short, long)]
        modifier: Vec<String>,

        /// Character name
        #[arg(short, long)]
        name: Option<String>,

        /// Print the character as JSON
        #[arg(long)]
        json: bool,

        /// JSON file with extra class definitions
        #[arg(short, long)]
        classes: Option<PathBuf>,
    },

    /// Render a roll log stored as JSON
    Log {
        /// JSON file holding an array of {"label", "output"} entries
        file: PathBuf,

        /// Output format: lines, markdown, text
        #[arg(short, long, default_value = "lines")]
        format: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Classes { classes } => commands::classes::run(classes.as_deref()),
        Commands::Show {
            id,
            base,
            modifier,
            name,
            json,
            classes,
        } => commands::show::run(&commands::show::ShowArgs {
            id: &id,
            base: base.as_deref(),
            modifiers: &modifier,
            name: name.as_deref(),
            json,
            classes: classes.as_deref(),
        }),
        Commands::Log { file, format } => commands::log::run(&file, &format),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
