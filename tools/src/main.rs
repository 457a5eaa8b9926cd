use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codec::Serializer;
use entwire_tools::{encode_lines, format_tables_pretty, tables_from_json, TablesReport};
use symbols::SymbolTables;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(
    name = "entwire-tools",
    version,
    about = "entwire encoding and table inspection tools"
)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level (overrides --verbose).
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode JSON Lines entity events into wire commands.
    Encode {
        /// Path to the events file, or `-` for stdin.
        events: PathBuf,
        /// Optional JSON file overriding the standard symbol tables.
        #[arg(long)]
        tables: Option<PathBuf>,
    },
    /// Print the active symbol tables.
    Tables {
        /// Optional JSON file overriding the standard symbol tables.
        #[arg(long)]
        tables: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = TablesFormat::Pretty)]
        format: TablesFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TablesFormat {
    Json,
    Pretty,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match (cli.log_level, cli.verbose) {
        (Some(level), _) => level.into(),
        (None, true) => Level::DEBUG,
        (None, false) => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("install logger")?;

    match cli.command {
        Command::Encode { events, tables } => {
            let custom = tables.as_deref().map(load_tables).transpose()?;
            let serializer = match &custom {
                Some(tables) => Serializer::new(tables),
                None => Serializer::standard()?,
            };

            let stdout = io::stdout();
            let output = BufWriter::new(stdout.lock());
            let count = if events.as_os_str() == "-" {
                encode_lines(&serializer, io::stdin().lock(), output)?
            } else {
                let file = File::open(&events)
                    .with_context(|| format!("open events {}", events.display()))?;
                encode_lines(&serializer, BufReader::new(file), output)?
            };
            tracing::info!(count, "done");
        }
        Command::Tables { tables, format } => {
            let custom = tables.as_deref().map(load_tables).transpose()?;
            let tables = match &custom {
                Some(tables) => tables,
                None => SymbolTables::standard()?,
            };
            let report = TablesReport::new(tables);
            let mut stdout = io::stdout().lock();
            match format {
                TablesFormat::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    writeln!(stdout, "{json}")?;
                }
                TablesFormat::Pretty => {
                    write!(stdout, "{}", format_tables_pretty(&report))?;
                }
            }
        }
    }
    Ok(())
}

fn load_tables(path: &Path) -> Result<SymbolTables> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read tables {}", path.display()))?;
    tables_from_json(&contents).with_context(|| format!("load tables {}", path.display()))
}
