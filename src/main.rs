use anyhow::Result;
use clap::Parser;
use sentimap::cli::{Cli, Commands};
use sentimap::commands::{self, AnalyzeConfig};
use sentimap::observability::install_panic_hook;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbosity);
    install_panic_hook();

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Analyze {
            text,
            file,
            lines,
            format,
            output,
            plain,
        } => {
            commands::handle_analyze(AnalyzeConfig {
                text,
                file,
                lines,
                format,
                output,
                plain,
                config: cli.config.clone(),
            })?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Score { text } => {
            commands::handle_score(text, config_path)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Request { file } => commands::handle_request_command(file.as_deref(), config_path),
        Commands::Init { force } => {
            commands::init_config(force)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

// RUST_LOG wins only when no -v flag was given
fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}
