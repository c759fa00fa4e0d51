//! PrefStore CLI
//!
//! Command-line tools for inspecting and editing preference files.
//!
//! # Commands
//!
//! - `get` - Print one value
//! - `set` - Store one value
//! - `remove` - Delete one value
//! - `list` - Show every value in the namespace
//! - `clear` - Delete every value in the namespace

mod commands;

use clap::{Parser, Subcommand};
use commands::Target;
use prefstore_core::DEFAULT_NAMESPACE;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// PrefStore command-line preference tools.
#[derive(Parser)]
#[command(name = "prefstore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the preference file
    #[arg(global = true, short, long, default_value = "prefstore.json")]
    path: PathBuf,

    /// Key namespace
    #[arg(global = true, short, long, default_value = DEFAULT_NAMESPACE)]
    namespace: String,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value stored under a key
    Get {
        /// Key without namespace
        key: String,
    },

    /// Store a value under a key
    Set {
        /// Key without namespace
        key: String,
        /// Value to store
        value: String,
    },

    /// Remove a key
    Remove {
        /// Key without namespace
        key: String,
    },

    /// List every key in the namespace
    List {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Remove every key in the namespace
    Clear {
        /// Dry run - show what would be removed
        #[arg(short, long)]
        dry_run: bool,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let target = Target::new(&cli.path, &cli.namespace)?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Get { key } => commands::get::run(&target, &key, &mut stdout)?,
        Commands::Set { key, value } => commands::set::run(&target, &key, &value)?,
        Commands::Remove { key } => commands::remove::run(&target, &key)?,
        Commands::List { format } => commands::list::run(&target, &format, &mut stdout)?,
        Commands::Clear { dry_run } => {
            let removed = commands::clear::run(&target, dry_run, &mut stdout)?;
            if !dry_run {
                writeln!(stdout, "Removed {removed} entries")?;
            }
        }
        Commands::Version => {
            writeln!(stdout, "PrefStore CLI v{}", env!("CARGO_PKG_VERSION"))?;
            writeln!(stdout, "PrefStore Core v{}", prefstore_core::VERSION)?;
        }
    }

    Ok(())
}
