use crate::core::{AnalysisReport, SentimentLabel};
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter, PlainFormatter};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;

    fn write_reports(&mut self, reports: &[AnalysisReport]) -> anyhow::Result<()> {
        for report in reports {
            self.write_report(report)?;
        }
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Batches are a single JSON array so the output stays parseable.
    fn write_reports(&mut self, reports: &[AnalysisReport]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(reports)?;
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header()?;
        self.write_summary(report)?;
        self.write_sentences(report)?;
        self.write_counts(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "# Sentiment Analysis Report")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Overall sentiment | {} |",
            report.overall_sentiment
        )?;
        writeln!(self.writer, "| Compound polarity | {:.4} |", report.polarity)?;
        writeln!(
            self.writer,
            "| Mixed sentiment | {} |",
            if report.has_mixed_sentiment { "yes" } else { "no" }
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_sentences(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.sentence_analysis.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Sentences")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | Sentence | Sentiment | Polarity |")?;
        writeln!(self.writer, "|---|----------|-----------|----------|")?;
        for (i, sentence) in report.sentence_analysis.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {:.4} |",
                i + 1,
                escape_cell(&sentence.text),
                sentence.sentiment,
                sentence.polarity
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_counts(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Sentence Counts")?;
        writeln!(self.writer)?;
        for label in SentimentLabel::ALL {
            writeln!(
                self.writer,
                "- {}: {}",
                label,
                report.sentiment_counts.get(label)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatter: Box<dyn OutputFormatter>) -> Self {
        Self { writer, formatter }
    }

    pub fn plain(writer: W) -> Self {
        Self::new(writer, Box::new(PlainFormatter))
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let f = &self.formatter;
        writeln!(self.writer, "{}", f.header("Sentiment Analysis"))?;
        writeln!(self.writer, "{}", f.header("=================="))?;
        writeln!(
            self.writer,
            "  Overall:  {} ({})",
            f.label(report.overall_sentiment),
            f.bold(&format!("{:+.4}", report.polarity))
        )?;
        if report.has_mixed_sentiment {
            writeln!(self.writer, "  {}", f.label(SentimentLabel::Mixed))?;
        }

        for (i, sentence) in report.sentence_analysis.iter().enumerate() {
            writeln!(
                self.writer,
                "  {}. [{}] {} {}",
                i + 1,
                f.label(sentence.sentiment),
                sentence.text,
                f.dim(&format!("({:+.4})", sentence.polarity))
            )?;
        }

        let counts = &report.sentiment_counts;
        writeln!(
            self.writer,
            "  {}",
            f.dim(&format!(
                "positive {} / negative {} / neutral {} / mixed {}",
                counts.positive, counts.negative, counts.neutral, counts.mixed
            ))
        )?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    writer: Box<dyn Write>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatter_for(formatting))),
    }
}
