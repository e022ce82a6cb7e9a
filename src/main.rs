// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use pgosync::app_config::{self, Config};
use pgosync::app_controller::Controller;

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
    /// Generate shell completions for pgosync
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// pgosync - align PGO lip-sync timings to an SRT subtitle track
#[derive(Parser, Debug)]
#[command(name = "pgosync")]
#[command(version)]
#[command(about = "Align PGO lip-sync frame timings to SRT subtitle timings")]
#[command(long_about = "pgosync moves every PGO segment onto the subtitle cue carrying exactly the same text,
then re-slices the segment's words and phonemes across the new frame range.

EXAMPLES:
    pgosync input.pgo subtitles.srt output.pgo
    pgosync --fps 25 input.pgo subtitles.srt output.pgo
    pgosync --log-level debug input.pgo subtitles.srt output.pgo
    pgosync completions bash > pgosync.bash")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input PGO file
    #[arg(value_name = "PGO_FILE")]
    pgo_file: Option<PathBuf>,

    /// Input SRT file
    #[arg(value_name = "SRT_FILE")]
    srt_file: Option<PathBuf>,

    /// Output PGO file
    #[arg(value_name = "OUTPUT_PGO")]
    output_pgo: Option<PathBuf>,

    /// Optional JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Align at this frame rate instead of the PGO header value
    #[arg(long)]
    fps: Option<u32>,
}

// @struct: Custom logger implementation, filtered by the global max level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Label and ANSI color for level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("ERROR", "1;31"),
            Level::Warn => ("WARN ", "1;33"),
            Level::Info => ("INFO ", "1;32"),
            Level::Debug => ("DEBUG", "1;36"),
            Level::Trace => ("TRACE", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (label, color) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", color, now, label, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Start at info; the config file or --log-level may change it below
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "pgosync", &mut std::io::stdout());
        return Ok(());
    }

    let (Some(pgo_file), Some(srt_file), Some(output_pgo)) =
        (cli.pgo_file, cli.srt_file, cli.output_pgo)
    else {
        return Err(anyhow!("PGO_FILE, SRT_FILE and OUTPUT_PGO are all required"));
    };

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    // Command line options take precedence over the config file
    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }
    if let Some(fps) = cli.fps {
        config.fps_override = Some(fps);
    }
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;
    let summary = controller.run(&pgo_file, &srt_file, &output_pgo)?;

    for unmatched in &summary.report.unmatched {
        println!("{}", unmatched);
    }
    if summary.layout_issues > 0 {
        info!("{} frame layout issue(s) reported", summary.layout_issues);
    }

    println!("PGO file updated and saved to '{}'.", output_pgo.display());
    Ok(())
}
