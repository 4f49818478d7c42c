use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;

use super::{read_input, resolve_config};
use crate::boundary::{handle_request, Response};
use crate::engine;

/// Exit status for a response: 0 success, 2 client error, 1 internal error.
pub fn exit_code_for(response: &Response) -> u8 {
    if response.is_success() {
        0
    } else if response.is_client_error() {
        2
    } else {
        1
    }
}

pub fn handle_request_command(file: Option<&Path>, config_path: Option<&Path>) -> Result<ExitCode> {
    let config = resolve_config(config_path)?;
    let body = read_input(None, file)?;

    let response = match engine::initialize(&config) {
        Ok(engine) => handle_request(engine.classifier(), &body),
        Err(e) => {
            log::error!("Sentiment engine unavailable: {}", e);
            Response::from_result(Err(e))
        }
    };

    println!("{}", response.to_json()?);
    Ok(ExitCode::from(exit_code_for(&response)))
}
