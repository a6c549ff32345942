use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "petrank")]
#[command(about = "Pet scoring and school ranking over a scraped pet corpus", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (skips the .petrank.toml directory search)
    #[arg(long, global = true, env = "PETRANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding pets.json, abilities.json and spells.json
    #[arg(long = "data-dir", global = true, env = "PETRANK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank schools by the mean composite score of their pets
    Rank {
        #[command(flatten)]
        weights: WeightArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the featured pet for a date
    Featured {
        /// Date in YYYY-MM-DD form (defaults to today, UTC)
        #[arg(long)]
        date: Option<NaiveDate>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Search pets by name
    Lookup {
        /// Case-insensitive name fragment
        query: String,

        /// Maximum number of matches
        #[arg(long)]
        limit: Option<usize>,

        /// Show the full profile of the N-th match (1-based)
        #[arg(long)]
        select: Option<usize>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Corpus-wide card and talent tables
    Insights {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Per-component weight overrides; unset components keep the configured
/// value.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct WeightArgs {
    #[arg(long)]
    pub cards: Option<f64>,
    #[arg(long)]
    pub talents: Option<f64>,
    #[arg(long)]
    pub derby: Option<f64>,
    #[arg(long)]
    pub pedigree: Option<f64>,
    #[arg(long)]
    pub attributes: Option<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

/// Log filter for a `-v` count.
pub fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
