use crate::aggregation::RankingReport;
use crate::core::PetRecord;
use crate::featured::FeaturedReport;
use crate::formatting::FormattingConfig;
use crate::insights::InsightsReport;
use crate::io::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use crate::lookup::PetProfile;
use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_ranking(&mut self, report: &RankingReport) -> anyhow::Result<()>;
    fn write_profile(&mut self, profile: &PetProfile) -> anyhow::Result<()>;
    fn write_featured(&mut self, report: &FeaturedReport) -> anyhow::Result<()>;
    fn write_search_results(&mut self, query: &str, hits: &[&PetRecord]) -> anyhow::Result<()>;
    fn write_insights(&mut self, report: &InsightsReport) -> anyhow::Result<()>;
}

/// Output sink: the named file when given, stdout otherwise.
pub fn open_destination(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

pub fn create_writer(
    format: OutputFormat,
    destination: Box<dyn Write>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination)),
        OutputFormat::Terminal => Box::new(TerminalWriter::with_formatting(destination, formatting)),
    }
}

/// One-decimal rounding used for every displayed score.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A sub-score for display, or a dash when it was not computable.
pub fn format_optional_score(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}", round1(v)))
        .unwrap_or_else(|| "-".to_string())
}
