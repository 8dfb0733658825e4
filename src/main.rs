// LineSift - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading (platform default or --config)
// 3. Logging initialisation (debug mode support)
// 4. Dispatch to the filter or the demo

use chrono::Utc;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use linesift::app::demo::{self, DemoSettings};
use linesift::core::model::{RunReport, TextEncoding};
use linesift::platform::config::{self, AppConfig};
use linesift::util::{self, error::SiftError};
use linesift::FileDataProcessor;
use std::path::PathBuf;
use std::process::ExitCode;

/// LineSift - keep the lines of a text file that contain a keyword.
#[derive(Parser, Debug)]
#[command(name = "linesift", version, about)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the lines of INPUT that contain KEYWORD to OUTPUT.
    Filter {
        input: PathBuf,
        output: PathBuf,
        /// Case-sensitive substring; an empty keyword keeps every line.
        keyword: String,

        /// Replace invalid UTF-8 instead of failing.
        #[arg(long)]
        lossy: bool,

        /// Print a JSON run report to stdout.
        #[arg(long)]
        json: bool,
    },

    /// Generate a synthetic input, filter it, and delete both files.
    Demo {
        /// Directory for the temporary files (defaults to the current directory).
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Number of generated lines.
        #[arg(long, value_parser = demo_lines_parser())]
        lines: Option<usize>,

        /// Every Nth generated line carries the keyword.
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        every: Option<usize>,

        #[arg(long)]
        keyword: Option<String>,
    },
}

fn demo_lines_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new().range(1..=util::constants::ABSOLUTE_MAX_DEMO_LINES as u64)
}

fn load_config(cli: &Cli) -> Result<(AppConfig, Vec<String>), SiftError> {
    match cli.config {
        Some(ref path) => Ok(config::load_config_file(path)?),
        None => Ok(config::load_default_config(&config::config_dir())),
    }
}

fn run(cli: Cli, config: AppConfig) -> Result<(), SiftError> {
    match cli.command {
        Command::Filter {
            input,
            output,
            keyword,
            lossy,
            json,
        } => {
            let encoding = if lossy {
                TextEncoding::Utf8Lossy
            } else {
                config.encoding
            };
            let started_at = Utc::now();
            let result = FileDataProcessor::new(encoding).process_timed(&input, &output, &keyword)?;

            if json {
                let report = RunReport::new(&input, &output, &keyword, encoding, result, started_at);
                println!("{}", report.to_json_pretty()?);
            }
            Ok(())
        }
        Command::Demo {
            dir,
            lines,
            every,
            keyword,
        } => {
            let mut settings = DemoSettings::from(&config);
            if let Some(lines) = lines {
                settings.lines = lines;
            }
            if let Some(every) = every {
                settings.every = every;
            }
            if let Some(keyword) = keyword {
                settings.keyword = keyword;
            }
            let dir = dir.unwrap_or_else(|| PathBuf::from("."));

            let result = demo::run_demo(&dir, &settings, FileDataProcessor::new(config.encoding))?;
            tracing::info!(
                matched = result.matched_line_count,
                expected = settings.keyword_lines(),
                "Demo finished"
            );
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = load_config(&cli);
    let config_level = loaded
        .as_ref()
        .ok()
        .and_then(|(config, _)| config.log_level.clone());
    util::logging::init(cli.debug, config_level.as_deref());

    tracing::debug!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "LineSift starting"
    );

    let config = match loaded {
        Ok((config, warnings)) => {
            for warning in &warnings {
                tracing::warn!("{}", warning);
            }
            config
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load config");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Run failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
