// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{warn, error, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use crate::app_controller::{Controller, OutputOptions};

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod language_utils;
mod markdown_processor;
mod path_mapper;
mod providers;
mod translation;

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

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate Markdown documents using the Gemini API (default command)
    #[command(alias = "translate")]
    Translate(TranslateArgs),

    /// Generate shell completions for mdtranslate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input file, directory, or glob pattern (e.g. "docs/**/*.md")
    #[arg(value_name = "INPUT")]
    input: String,

    /// Target language (ISO code or name, e.g. 'fr', 'Spanish')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Output directory for translated files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Discard input directory structure in batch mode
    #[arg(long)]
    flatten: bool,

    /// Custom filename suffix (defaults to the target language in single-file mode)
    #[arg(long)]
    suffix: Option<String>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Gemini API key
    #[arg(short = 'k', long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Maximum characters per translation request
    #[arg(long)]
    max_chunk_size: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// mdtranslate - Markdown translation with the Gemini API
///
/// Translates Markdown/MDX documents into a target language while preserving
/// Markdown syntax, code blocks, and URLs. Large documents are split into
/// chunks and translated sequentially.
#[derive(Parser, Debug)]
#[command(name = "mdtranslate")]
#[command(version = "1.0.0")]
#[command(about = "AI-powered Markdown translation tool")]
#[command(long_about = "mdtranslate translates Markdown/MDX documents using the Google Gemini API,
preserving Markdown syntax, code blocks, and URLs.

EXAMPLES:
    mdtranslate README.md -t fr                       # Translate one file to French
    mdtranslate \"docs/**/*.md\" -t es -o translated    # Translate a docs tree to Spanish
    mdtranslate docs/ -t ja --flatten -o out          # Whole directory, flat output
    mdtranslate README.md -t de --suffix german       # Custom filename suffix
    mdtranslate completions bash > mdtranslate.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically. The API key can also be supplied via the
    GEMINI_API_KEY environment variable.

COMMON LANGUAGES:
    fr French, es Spanish, de German, it Italian, pt Portuguese,
    ja Japanese, ko Korean, zh Chinese, ru Russian, ar Arabic
    (any language name the model understands is accepted)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file, directory, or glob pattern (e.g. "docs/**/*.md")
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Target language (ISO code or name, e.g. 'fr', 'Spanish')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Output directory for translated files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Discard input directory structure in batch mode
    #[arg(long)]
    flatten: bool,

    /// Custom filename suffix (defaults to the target language in single-file mode)
    #[arg(long)]
    suffix: Option<String>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Gemini API key
    #[arg(short = 'k', long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Maximum characters per translation request
    #[arg(long)]
    max_chunk_size: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

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

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
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
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "mdtranslate", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input = cli.input.ok_or_else(|| {
                anyhow!("INPUT is required when no subcommand is specified")
            })?;

            let translate_args = TranslateArgs {
                input,
                target_language: cli.target_language,
                output_dir: cli.output_dir,
                flatten: cli.flatten,
                suffix: cli.suffix,
                model: cli.model,
                api_key: cli.api_key,
                max_chunk_size: cli.max_chunk_size,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_translate(translate_args).await
        }
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(target_language) = &options.target_language {
        config.target_language = target_language.clone();
    }

    if let Some(model) = &options.model {
        config.translation.model = model.clone();
    }

    if let Some(api_key) = &options.api_key {
        config.translation.api_key = api_key.clone();
    }

    if let Some(max_chunk_size) = options.max_chunk_size {
        config.translation.max_chunk_size = max_chunk_size;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter_for(&config.log_level));
    }

    let output_options = OutputOptions {
        output_dir: options.output_dir.clone(),
        flatten: options.flatten,
        suffix: options.suffix.clone(),
    };

    // Create controller
    let controller = Controller::with_config(config)?;

    // A plain file path translates alone; a directory or glob pattern runs in batch
    let input_path = Path::new(&options.input);
    let result = if input_path.is_file() {
        controller.run_file(input_path, &output_options).await
    } else if input_path.is_dir() {
        let pattern = format!("{}/**/*", options.input.trim_end_matches('/'));
        controller.run_batch(&pattern, &output_options).await
    } else {
        controller.run_batch(&options.input, &output_options).await
    };

    if let Err(e) = &result {
        if format!("{:#}", e).contains("API_KEY_INVALID") {
            error!(
                "The Gemini API rejected the key. Check the GEMINI_API_KEY environment \
                 variable or the api_key entry in your config file."
            );
        }
    }

    result
}
