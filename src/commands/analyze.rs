use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::PathBuf;

use super::{read_input, resolve_config, setup_engine};
use crate::boundary::analyze_text;
use crate::core::AnalysisReport;
use crate::engine::SentimentEngine;
use crate::formatting::FormattingConfig;
use crate::io::{self, create_writer, OutputFormat};
use crate::observability::{increment_processed, set_progress};

#[derive(Debug, Clone, Default)]
pub struct AnalyzeConfig {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub lines: bool,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub plain: bool,
    pub config: Option<PathBuf>,
}

enum Analysis {
    Single(AnalysisReport),
    Lines(Vec<AnalysisReport>),
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let engine = setup_engine(&settings)?;
    let input = read_input(config.text, config.file.as_deref())?;

    let format = config
        .format
        .or_else(|| settings.default_output_format())
        .unwrap_or(OutputFormat::Terminal);
    let formatting = if config.plain || config.output.is_some() {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };

    // Opening the destination truncates it, so classify first.
    let outcome = if config.lines {
        Analysis::Lines(analyze_lines(engine, &input)?)
    } else {
        Analysis::Single(analyze_text(engine.classifier(), Some(&input))?)
    };

    let destination = io::open_destination(config.output.as_deref())?;
    let mut writer = create_writer(format, destination, formatting);
    match &outcome {
        Analysis::Single(report) => writer.write_report(report)?,
        Analysis::Lines(reports) => writer.write_reports(reports)?,
    }

    if let Some(path) = &config.output {
        log::info!("Report written to {}", path.display());
    }
    Ok(())
}

/// Classify each non-blank line independently, in parallel, keeping input order.
pub fn analyze_lines(engine: &SentimentEngine, input: &str) -> Result<Vec<AnalysisReport>> {
    let documents: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .collect();

    if documents.is_empty() {
        anyhow::bail!(crate::core::Error::EmptyText);
    }

    set_progress(0, documents.len());
    log::debug!("Analyzing {} documents", documents.len());

    documents
        .par_iter()
        .map(|&(line_no, line)| {
            let report = analyze_text(engine.classifier(), Some(line))
                .with_context(|| format!("Failed to analyze line {}", line_no + 1));
            increment_processed();
            report
        })
        .collect()
}
