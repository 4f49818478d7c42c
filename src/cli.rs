use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "sentimap")]
#[command(about = "Sentence-level sentiment classifier with mixed-sentiment detection", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .sentimap.toml)
    #[arg(short = 'c', long = "config", global = true, env = "SENTIMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify text and report overall and per-sentence sentiment
    Analyze {
        /// Text to analyze (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read text from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Treat every non-blank line as a separate document
        #[arg(long)]
        lines: bool,

        /// Output format (defaults to [output].default_format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colors
        #[arg(long)]
        plain: bool,
    },

    /// Print the raw polarity scores as JSON
    Score {
        /// Text to score (reads stdin when omitted)
        text: Option<String>,
    },

    /// Handle a JSON request body of the form {"text": "..."}
    Request {
        /// Read the body from a file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Write a default .sentimap.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_with_global_flags() {
        let cli = Cli::parse_from(["sentimap", "analyze", "-vv", "--lines", "-f", "json", "hi"]);
        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Analyze {
                text,
                lines,
                format,
                ..
            } => {
                assert_eq!(text.as_deref(), Some("hi"));
                assert!(lines);
                assert_eq!(format, Some(OutputFormat::Json));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
