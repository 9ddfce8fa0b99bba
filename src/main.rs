// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use vocab_tr::app_config::{self, Config, OutputFormat};
use vocab_tr::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for vocab-tr
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// vocab-tr - German vocabulary tables from glossed Word documents
///
/// Extracts "Term - gloss" pairs from .docx files and writes them with a
/// Turkish-like rendering of each Azerbaijani gloss.
#[derive(Parser, Debug)]
#[command(name = "vocab-tr")]
#[command(version)]
#[command(about = "Extract vocabulary pairs from .docx files into CSV/TSV")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "vocab-tr reads German vocabulary with Azerbaijani glosses from .docx files
and writes a table with the columns german, source_translation, turkish_like.

EXAMPLES:
    vocab-tr lesson1.docx lesson2.docx            # Write vocab_tr.csv
    vocab-tr --tsv -o out/vocab.tsv lessons/      # Every .docx in a folder, tab separated
    vocab-tr --unique *.docx                      # Keep the first row per German term
    vocab-tr completions bash > vocab-tr.bash     # Generate bash completions

CONFIGURATION:
    Settings are read from vocab.json when it exists (see --config-path).
    Command line flags override the file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input .docx files or directories
    #[arg(value_name = "INPUT_PATH")]
    inputs: Vec<PathBuf>,

    /// Output file path
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Write TSV instead of CSV
    #[arg(long)]
    tsv: bool,

    /// Deduplicate by German term (first occurrence wins)
    #[arg(long)]
    unique: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "vocab.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Accept every level here; the effective level is applied with set_max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "vocab-tr", &mut std::io::stdout());
            Ok(())
        }
        None => run_extract(cli),
    }
}

fn run_extract(options: CommandLineOptions) -> Result<()> {
    if options.inputs.is_empty() {
        return Err(anyhow!("At least one INPUT_PATH is required"));
    }

    let mut config = Config::load_or_default(&options.config_path)?;
    if !options.config_path.exists() {
        debug!("No config file at {:?}, using defaults", options.config_path);
    }

    // Override config with CLI options if provided
    if let Some(level) = options.log_level {
        config.log_level = level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    if let Some(out) = &options.out {
        config.output.path = out.to_string_lossy().to_string();
    }
    if options.tsv {
        config.output.format = OutputFormat::Tsv;
    }
    if options.unique {
        config.output.unique = true;
    }

    let controller = Controller::with_config(config)?;
    let output_path = controller.output_path();
    let count = controller.run(&options.inputs, &output_path)?;

    println!("Wrote {} rows to {}", count, output_path.display());
    Ok(())
}
