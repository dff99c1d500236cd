// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use crate::converter::OutputKind;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod caption_parser;
mod caption_renderer;
mod caption_source;
mod converter;
mod errors;
mod file_utils;
mod video_url;

/// CLI Wrapper for OutputKind to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    Srt,
    Txt,
}

impl From<CliOutputFormat> for OutputKind {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Srt => OutputKind::Transcript,
            CliOutputFormat::Txt => OutputKind::Reading,
        }
    }
}

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
    /// Convert caption files to SRT or plain-text format (default command)
    #[command(alias = "convert")]
    Convert(ConvertArgs),

    /// Clean up the converted-file cache
    Clean {
        /// Remove every cached file instead of only expired ones
        #[arg(long)]
        all: bool,

        /// Override the configured retention window in hours
        #[arg(long)]
        max_age_hours: Option<u64>,

        /// Configuration file path
        #[arg(short, long, default_value = "conf.json")]
        config_path: String,
    },

    /// Generate shell completions for subtext
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Caption file, directory of caption files, or video watch URL
    #[arg(value_name = "INPUT")]
    input: String,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Output format to produce
    #[arg(long = "format", value_enum)]
    format: Option<CliOutputFormat>,

    /// Language code used in output file names (e.g., 'en', 'vi')
    #[arg(short, long)]
    language: Option<String>,

    /// Directory to write converted files into (defaults to the cache dir)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subtext - caption track converter
///
/// Converts timed-caption markup into numbered SRT transcripts or
/// deduplicated plain-text reading versions.
#[derive(Parser, Debug)]
#[command(name = "subtext")]
#[command(version = "1.0.0")]
#[command(about = "Caption track conversion tool")]
#[command(long_about = "subtext converts timed-caption markup files into downloadable subtitle formats.

EXAMPLES:
    subtext captions.vtt                        # Convert to SRT using default config
    subtext --format txt captions.vtt           # Produce the plain-text reading version
    subtext -f captions.vtt                     # Force overwrite existing output
    subtext -l vi captions.vtt                  # Name output with the 'vi' language code
    subtext -o out/ captions.vtt                # Write converted file into out/
    subtext /captions/                          # Convert every caption file in a directory
    subtext clean --all                         # Empty the conversion cache
    subtext completions bash > subtext.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.

OUTPUT FORMATS:
    srt - numbered, timestamped transcript blocks
    txt - deduplicated plain-text reading version")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Caption file, directory of caption files, or video watch URL
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Output format to produce
    #[arg(long = "format", value_enum)]
    format: Option<CliOutputFormat>,

    /// Language code used in output file names (e.g., 'en', 'vi')
    #[arg(short, long)]
    language: Option<String>,

    /// Directory to write converted files into (defaults to the cache dir)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
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

    // @returns: Color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
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
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
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
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subtext", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Clean { all, max_age_hours, config_path }) => {
            run_clean(all, max_age_hours, &config_path)
        }
        Some(Commands::Convert(args)) => run_convert(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input = cli.input.ok_or_else(|| {
                anyhow!("INPUT is required when no subcommand is specified")
            })?;

            let convert_args = ConvertArgs {
                input,
                force_overwrite: cli.force_overwrite,
                format: cli.format,
                language: cli.language,
                output_dir: cli.output_dir,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_convert(convert_args)
        }
    }
}

/// Load the configuration file, creating a default one when missing.
fn load_config(config_path: &str) -> Result<Config> {
    if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        Ok(config)
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        Ok(config)
    }
}

fn apply_log_level(config: &Config) {
    let log_level = match config.log_level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    };
    log::set_max_level(log_level);
}

fn run_convert(options: ConvertArgs) -> Result<()> {
    let mut config = load_config(&options.config_path)?;

    // Override config with CLI options if provided
    if let Some(language) = &options.language {
        config.language = language.clone();
    }

    if let Some(format) = &options.format {
        config.format = format.clone().into();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    apply_log_level(&config);

    let kind = options.format.map(OutputKind::from);

    // Create controller
    let controller = Controller::with_config(config)?;

    let input_path = Path::new(&options.input);
    if input_path.is_dir() {
        // Process a directory
        controller.run_folder(input_path, kind, options.force_overwrite)?;
    } else {
        // Process a single file or video URL
        let output_path = controller.run(
            &options.input,
            options.output_dir,
            kind,
            options.force_overwrite,
        )?;
        info!("Success: {:?}", output_path);
    }

    Ok(())
}

fn run_clean(all: bool, max_age_hours: Option<u64>, config_path: &str) -> Result<()> {
    let mut config = load_config(config_path)?;

    if let Some(hours) = max_age_hours {
        config.cache.retention_hours = hours;
    }

    config.validate()
        .context("Configuration validation failed")?;
    apply_log_level(&config);

    let controller = Controller::with_config(config)?;

    let removed = if all {
        controller.clear_cache()?
    } else {
        controller.clean_cache()?
    };

    info!("Removed {} cached file(s)", removed);
    Ok(())
}
