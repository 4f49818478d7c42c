use anyhow::Result;

use super::{read_input, resolve_config, setup_engine};
use std::path::Path;

pub fn handle_score(text: Option<String>, config_path: Option<&Path>) -> Result<()> {
    let config = resolve_config(config_path)?;
    let engine = setup_engine(&config)?;
    let text = read_input(text, None)?;

    let score = engine.score(&text);
    println!("{}", serde_json::to_string_pretty(&score)?);
    Ok(())
}
