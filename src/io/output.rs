use crate::core::RunSummary;
use crate::formatting::FormattingConfig;
use crate::io::writers::{JsonWriter, TerminalWriter};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "terminal" => Some(Self::Terminal),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_summary(&mut self, summary: &RunSummary) -> anyhow::Result<()>;
}

/// Options that only affect how the terminal report is drawn.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub formatting: FormattingConfig,
    pub verbosity: u8,
    /// File paths are printed relative to this directory when set.
    pub base: Option<PathBuf>,
}

pub fn create_writer<'a>(
    format: OutputFormat,
    options: RenderOptions,
    out: Box<dyn Write + 'a>,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out, options)),
    }
}
