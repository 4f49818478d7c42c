pub mod output;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub use output::{create_writer, OutputFormat, OutputWriter};

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// Destination for report output: the given file, or stdout.
pub fn open_destination(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(io::BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
