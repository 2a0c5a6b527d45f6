use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use yomi_config::Config;
use yomi_config::logging::LoggingConfig;

mod build;
mod loader;

#[cfg(test)]
mod tests;

/// Compile kanji reading quizzes from term files
#[derive(Parser)]
#[command(name = "yomi", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// JSON config file; `YOMI_*` environment variables are used otherwise
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory containing the term files
    #[arg(long, global = true)]
    terms_dir: Option<PathBuf>,

    /// Output path of the compiled dictionary
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,

    /// Write the dictionary without indentation
    #[arg(long, global = true)]
    compact: bool,

    /// Log as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Clone, Copy, Default)]
enum Command {
    /// Compile the term files and write the dictionary (default)
    #[default]
    Build,
    /// Compile the term files without writing anything
    Check,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging);

    let result = match cli.command.unwrap_or_default() {
        Command::Build => build::build(&config.build, true),
        Command::Check => build::build(&config.build, false),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Config file or environment, then command line flags on top
fn load_config(cli: &Cli) -> Result<Config, yomi_config::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::new(),
    };

    if let Some(terms_dir) = &cli.terms_dir {
        config.build.terms_dir = terms_dir.clone();
    }
    if let Some(output) = &cli.output {
        config.build.output_path = output.clone();
    }
    if cli.compact {
        config.build.pretty = false;
    }
    if cli.json_logs {
        config.logging.json = true;
    }

    Ok(config)
}

fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
