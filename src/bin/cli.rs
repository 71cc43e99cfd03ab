//! RecordStore CLI
//!
//! Interactive shell over an in-memory store. Reads one command per line
//! from stdin; failures are reported and the session continues.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use recordstore::{storage, Config, Record, Storage, Strategy};
use tracing_subscriber::{fmt, EnvFilter};

/// RecordStore CLI
#[derive(Parser, Debug)]
#[command(name = "recordstore-cli")]
#[command(about = "Interactive shell for the RecordStore in-memory record store")]
#[command(version)]
struct Args {
    /// Search strategy (unordered | sorted)
    #[arg(short, long, default_value = "unordered")]
    strategy: Strategy,

    /// Maximum number of records
    #[arg(short, long, default_value_t = recordstore::config::DEFAULT_CAPACITY)]
    capacity: usize,
}

/// A single shell line
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Save a new record
    Save {
        /// The key to save under
        key: String,

        /// Payload words
        payload: Vec<String>,
    },

    /// Get a record by key
    Get {
        /// The key to get
        key: String,
    },

    /// Replace an existing record
    Update {
        /// The key to update
        key: String,

        /// Payload words
        payload: Vec<String>,
    },

    /// Delete a record by key
    Delete {
        /// The key to delete
        key: String,
    },

    /// Print the number of records
    Size,

    /// Print every record
    List,

    /// Remove every record
    Clear,

    /// Leave the shell
    Quit,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .strategy(args.strategy)
        .capacity(args.capacity)
        .build();

    tracing::info!("RecordStore CLI v{}", recordstore::VERSION);
    tracing::info!("Strategy: {}, capacity: {}", config.strategy, config.capacity);

    let mut store = storage::open::<String>(&config);

    if let Err(e) = run(store.as_mut(), io::stdin().lock(), io::stdout().lock()) {
        tracing::error!("Shell error: {}", e);
        std::process::exit(1);
    }
}

/// Read-eval-print loop until `quit` or end of input
fn run(
    store: &mut dyn Storage<String>,
    input: impl BufRead,
    mut out: impl Write,
) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if !tokens.is_empty() {
            match Line::try_parse_from(tokens.iter().copied()) {
                Ok(Line {
                    command: Commands::Quit,
                }) => return Ok(()),
                Ok(parsed) => execute(store, parsed.command, &mut out)?,
                Err(e) => write!(out, "{}", e)?,
            }
        }

        write!(out, "> ")?;
        out.flush()?;
    }

    writeln!(out)
}

fn execute(
    store: &mut dyn Storage<String>,
    command: Commands,
    out: &mut impl Write,
) -> io::Result<()> {
    match command {
        Commands::Save { key, payload } => match store.save(Record::new(key, payload.join(" "))) {
            Ok(()) => writeln!(out, "OK"),
            Err(e) => writeln!(out, "ERROR: {}", e),
        },
        Commands::Get { key } => match store.get(&key) {
            Ok(record) => writeln!(out, "{} = {}", record, record.payload()),
            Err(e) => writeln!(out, "ERROR: {}", e),
        },
        Commands::Update { key, payload } => {
            match store.update(Record::new(key, payload.join(" "))) {
                Ok(()) => writeln!(out, "OK"),
                Err(e) => writeln!(out, "ERROR: {}", e),
            }
        }
        Commands::Delete { key } => match store.delete(&key) {
            Ok(removed) => writeln!(out, "DELETED {}", removed),
            Err(e) => writeln!(out, "ERROR: {}", e),
        },
        Commands::Size => writeln!(out, "{} / {}", store.size(), store.capacity()),
        Commands::List => {
            for record in store.get_all() {
                writeln!(out, "{} = {}", record, record.payload())?;
            }
            Ok(())
        }
        Commands::Clear => {
            store.clear();
            writeln!(out, "OK")
        }
        Commands::Quit => Ok(()),
    }
}
