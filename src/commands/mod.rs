//! CLI command implementations.
//!
//! - **analyze**: classify text (or every line of it) and write a report
//! - **score**: print raw polarity scores
//! - **request**: run a JSON request body through the request boundary
//! - **init**: write a default `.sentimap.toml`

pub mod analyze;
pub mod init;
pub mod request;
pub mod score;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;
pub use request::handle_request_command;
pub use score::handle_score;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use crate::config::{self, SentimapConfig};
use crate::engine::{self, SentimentEngine};

/// Input text: the inline argument, else the file, else stdin.
pub fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return crate::io::read_file(path);
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}

/// Explicit config paths must load; discovered ones fall back to defaults.
pub fn resolve_config(config_path: Option<&Path>) -> Result<SentimapConfig> {
    match config_path {
        Some(path) => config::load_config_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(config::load_config()),
    }
}

pub fn setup_engine(config: &SentimapConfig) -> Result<&'static SentimentEngine> {
    engine::initialize(config).context("Failed to initialize sentiment engine")
}
